//! Entity structs for the course hierarchy.
//!
//! Each entity maps to one table (`course`, `theme`, `lesson`). The `*Draft`
//! structs hold the same fields without identifiers and are what callers hand
//! to create and update paths; the store assigns ids on insert.

mod course;
mod lesson;
mod theme;

pub use course::{Course, CourseDraft};
pub use lesson::{Lesson, LessonDraft};
pub use theme::{Theme, ThemeDraft};
