use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Root of the content hierarchy. Owns zero or more themes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub work: String,
    /// String-encoded level, e.g. `"easy"`.
    pub difficulty: String,
    /// Minutes.
    pub duration: i32,
    pub image: String,
}

/// Course fields without an identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub work: String,
    pub difficulty: String,
    pub duration: i32,
    pub image: String,
}

impl CourseDraft {
    /// Attach an identifier, producing the stored shape.
    #[must_use]
    pub fn with_id(self, id: i64) -> Course {
        Course {
            id,
            title: self.title,
            description: self.description,
            full_description: self.full_description,
            work: self.work,
            difficulty: self.difficulty,
            duration: self.duration,
            image: self.image,
        }
    }
}
