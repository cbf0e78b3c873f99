use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single unit of content inside a theme.
///
/// `course_id` is denormalised from the owning theme; the pair
/// `(course_id, theme_id)` must name a theme of that course.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Lesson {
    pub id: i64,
    pub course_id: i64,
    pub theme_id: i64,
    pub title: String,
    /// Content tag such as `"video"` or `"text"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: i32,
    pub content: String,
    pub practice_type: Option<String>,
    pub task: String,
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LessonDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: i32,
    pub content: String,
    pub practice_type: Option<String>,
    pub task: String,
    pub completed: Option<bool>,
}

impl LessonDraft {
    #[must_use]
    pub fn with_ids(self, id: i64, course_id: i64, theme_id: i64) -> Lesson {
        Lesson {
            id,
            course_id,
            theme_id,
            title: self.title,
            kind: self.kind,
            duration: self.duration,
            content: self.content,
            practice_type: self.practice_type,
            task: self.task,
            completed: self.completed,
        }
    }
}
