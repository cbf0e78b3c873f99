//! Nested request and response shapes for tree operations.
//!
//! A tree operation creates or updates a course together with its themes and
//! lessons in one call. On the update path every child carries a [`ChildOp`]
//! saying whether it is new or already stored.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Course, CourseDraft, Lesson, LessonDraft, Theme, ThemeDraft};

/// Insert-or-update decision for a child entity.
///
/// Built from the presence of an identifier on the incoming child: no id means
/// `Create`, an id means `Update` of that row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ChildOp<T> {
    Create(T),
    Update { id: i64, fields: T },
}

impl<T> ChildOp<T> {
    /// Branch on an optional identifier.
    #[must_use]
    pub fn from_optional_id(id: Option<i64>, fields: T) -> Self {
        match id {
            Some(id) => Self::Update { id, fields },
            None => Self::Create(fields),
        }
    }

    /// The identifier of an update, `None` for a create.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        match self {
            Self::Create(_) => None,
            Self::Update { id, .. } => Some(*id),
        }
    }

    #[must_use]
    pub const fn fields(&self) -> &T {
        match self {
            Self::Create(fields) | Self::Update { fields, .. } => fields,
        }
    }
}

/// Input of a full tree insert.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseTree {
    pub course: CourseDraft,
    pub themes: Vec<ThemeTree>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThemeTree {
    pub theme: ThemeDraft,
    pub lessons: Vec<LessonDraft>,
}

impl CourseTree {
    /// Number of themes and lessons the tree will insert.
    #[must_use]
    pub fn child_counts(&self) -> (usize, usize) {
        let lessons = self.themes.iter().map(|t| t.lessons.len()).sum();
        (self.themes.len(), lessons)
    }
}

/// Input of a tree update. The course row is always updated in place.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseTreeUpdate {
    pub id: i64,
    pub course: CourseDraft,
    pub themes: Vec<ThemeTreeUpdate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThemeTreeUpdate {
    pub theme: ChildOp<ThemeDraft>,
    pub lessons: Vec<ChildOp<LessonDraft>>,
}

/// A course reassembled from storage with all of its children.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseWithThemes {
    pub course: Course,
    pub themes: Vec<ThemeWithLessons>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThemeWithLessons {
    pub theme: Theme,
    pub lessons: Vec<Lesson>,
}

impl CourseWithThemes {
    /// Total number of lessons across all themes.
    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.themes.iter().map(|t| t.lessons.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_means_create() {
        let op = ChildOp::from_optional_id(None, ThemeDraft { title: "Intro".into() });
        assert_eq!(op, ChildOp::Create(ThemeDraft { title: "Intro".into() }));
        assert_eq!(op.id(), None);
    }

    #[test]
    fn present_id_means_update() {
        let op = ChildOp::from_optional_id(Some(7), ThemeDraft { title: "Intro".into() });
        assert_eq!(op.id(), Some(7));
        assert_eq!(op.fields().title, "Intro");
    }

    #[test]
    fn zero_id_is_still_an_update() {
        // Presence alone decides; the store rejects the zero id later.
        let op = ChildOp::from_optional_id(Some(0), ThemeDraft::default());
        assert!(matches!(op, ChildOp::Update { id: 0, .. }));
    }

    #[test]
    fn child_counts_sum_lessons_across_themes() {
        let tree = CourseTree {
            course: CourseDraft::default(),
            themes: vec![
                ThemeTree {
                    theme: ThemeDraft::default(),
                    lessons: vec![LessonDraft::default(); 2],
                },
                ThemeTree {
                    theme: ThemeDraft::default(),
                    lessons: vec![LessonDraft::default(); 3],
                },
            ],
        };
        assert_eq!(tree.child_counts(), (2, 5));
    }
}
