//! # course-rpc
//!
//! The RPC-facing half of the course service.
//!
//! - [`mapping`]: pure conversion between wire messages and entities/trees.
//! - [`handler::CourseHandler`]: the five service methods. Each maps its
//!   request, calls the hierarchy service and maps the answer back.
//! - [`status::Status`]: the boundary error. Every failure collapses into
//!   one opaque internal status; the underlying kind is only logged.

pub mod handler;
pub mod mapping;
pub mod status;

pub use handler::CourseHandler;
pub use status::{Code, Status};
