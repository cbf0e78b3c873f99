//! Shared test utilities for course-db unit tests.

pub(crate) mod helpers {
    use course_core::entities::{Course, Lesson};

    use crate::CourseDb;

    /// Open an in-memory database with the schema applied.
    pub async fn test_db() -> CourseDb {
        CourseDb::open_local(":memory:").await.unwrap()
    }

    pub fn sample_course(title: &str) -> Course {
        Course {
            id: 0,
            title: title.to_string(),
            description: format!("{title} in a weekend"),
            full_description: format!("Everything you need to get going with {title}."),
            work: "exercises".into(),
            difficulty: "easy".into(),
            duration: 120,
            image: format!("{}.png", title.to_lowercase().replace(' ', "-")),
        }
    }

    pub fn sample_lesson(course_id: i64, theme_id: i64, title: &str) -> Lesson {
        Lesson {
            id: 0,
            course_id,
            theme_id,
            title: title.to_string(),
            kind: "video".into(),
            duration: 10,
            content: format!("{title} content"),
            practice_type: None,
            task: format!("Finish {title}"),
            completed: None,
        }
    }
}
