//! Repository modules implementing CRUD for each course entity.
//!
//! Each module adds methods to `CourseDb` via `impl CourseDb` blocks:
//! create, update, get, list-by-parent and delete. Rows are mapped
//! field-by-field in table column order.

pub mod course;
pub mod lesson;
pub mod theme;
