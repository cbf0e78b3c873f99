//! Wire messages of the course RPC surface.
//!
//! These structs mirror the service contract: five methods, each taking one
//! request message and answering with one response message. They serialize
//! as snake_case JSON; the lesson tag travels as `type`.
//!
//! On update messages the child `id` is presence-optional: an absent id asks
//! for a new row, a present id names the row to update.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CreateCourse
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateCourseRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub work: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub duration: i32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub themes: Vec<CreateTheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateTheme {
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<CreateLesson>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateLesson {
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub duration: i32,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_type: Option<String>,
    #[serde(default)]
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateCourseResponse {
    pub id: i64,
    pub success: bool,
}

// ---------------------------------------------------------------------------
// UpdateCourse
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpdateCourseRequest {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub work: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub duration: i32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub themes: Vec<UpdateTheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpdateTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub lessons: Vec<UpdateLesson>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpdateLesson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub duration: i32,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_type: Option<String>,
    #[serde(default)]
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Answer of the mutating methods that return nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

// ---------------------------------------------------------------------------
// GetAllCourses / GetCourse / DeleteCourse
// ---------------------------------------------------------------------------

/// Course summary without children.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseMessage {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub work: String,
    pub difficulty: String,
    pub duration: i32,
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GetAllCoursesResponse {
    pub courses: Vec<CourseMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GetCourseRequest {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GetCourseResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub work: String,
    pub difficulty: String,
    pub duration: i32,
    pub image: String,
    pub themes: Vec<ThemeMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThemeMessage {
    pub id: i64,
    pub title: String,
    pub lessons: Vec<LessonMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LessonMessage {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: i32,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_type: Option<String>,
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteCourseRequest {
    pub id: i64,
}
