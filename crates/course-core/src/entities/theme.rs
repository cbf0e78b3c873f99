use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A chapter of a course. Owns zero or more lessons.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Theme {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThemeDraft {
    pub title: String,
}

impl ThemeDraft {
    #[must_use]
    pub fn with_ids(self, id: i64, course_id: i64) -> Theme {
        Theme {
            id,
            course_id,
            title: self.title,
        }
    }
}
