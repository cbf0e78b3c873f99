//! # course-core
//!
//! Core types for the course content service.
//!
//! This crate provides the foundational types shared across all course crates:
//! - Entity structs for courses, themes and lessons, plus their id-less drafts
//! - Tree types describing nested create/update requests and fetched hierarchies
//! - Wire messages for the RPC surface
//! - The error kind taxonomy shared by storage, service and boundary
//! - Configuration enums that more than one crate reads

pub mod entities;
pub mod enums;
pub mod errors;
pub mod messages;
pub mod tree;
