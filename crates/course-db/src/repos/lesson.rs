//! Lesson repository.

use course_core::entities::Lesson;

use crate::CourseDb;
use crate::error::DatabaseError;
use crate::helpers::{classify_write, get_i32, get_opt_bool, get_opt_string, require_id};

const ENTITY: &str = "lesson";

const SELECT_COLS: &str =
    "id, course_id, theme_id, title, type, duration, content, practice_type, task, completed";

fn row_to_lesson(row: &libsql::Row) -> Result<Lesson, DatabaseError> {
    Ok(Lesson {
        id: row.get(0)?,
        course_id: row.get(1)?,
        theme_id: row.get(2)?,
        title: row.get(3)?,
        kind: row.get(4)?,
        duration: get_i32(row, 5)?,
        content: row.get(6)?,
        practice_type: get_opt_string(row, 7)?,
        task: row.get(8)?,
        completed: get_opt_bool(row, 9)?,
    })
}

impl CourseDb {
    /// Insert a lesson. `(course_id, theme_id)` must name a theme of that course.
    pub async fn create_lesson(&self, lesson: &Lesson) -> Result<i64, DatabaseError> {
        const OP: &str = "repos.lesson.create";

        self.insert_returning_id(
            OP,
            ENTITY,
            "INSERT INTO lesson (course_id, theme_id, title, type, duration, content, practice_type, task, completed)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9) RETURNING id",
            libsql::params![
                lesson.course_id,
                lesson.theme_id,
                lesson.title.as_str(),
                lesson.kind.as_str(),
                lesson.duration,
                lesson.content.as_str(),
                lesson.practice_type.as_deref(),
                lesson.task.as_str(),
                lesson.completed.map(i64::from)
            ],
        )
        .await
    }

    pub async fn update_lesson(&self, lesson: &Lesson) -> Result<i64, DatabaseError> {
        const OP: &str = "repos.lesson.update";
        let id = require_id(ENTITY, lesson.id)?;

        self.conn()
            .execute(
                "UPDATE lesson SET course_id = ?1, theme_id = ?2, title = ?3, type = ?4,
                 duration = ?5, content = ?6, practice_type = ?7, task = ?8, completed = ?9
                 WHERE id = ?10",
                libsql::params![
                    lesson.course_id,
                    lesson.theme_id,
                    lesson.title.as_str(),
                    lesson.kind.as_str(),
                    lesson.duration,
                    lesson.content.as_str(),
                    lesson.practice_type.as_deref(),
                    lesson.task.as_str(),
                    lesson.completed.map(i64::from),
                    id
                ],
            )
            .await
            .map_err(|e| classify_write(OP, ENTITY, e))?;

        Ok(id)
    }

    pub async fn get_lesson(&self, id: i64) -> Result<Lesson, DatabaseError> {
        const OP: &str = "repos.lesson.get";

        let mut rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM lesson WHERE id = ?1"), [id])
            .await
            .map_err(|e| DatabaseError::storage(OP, e))?;
        let row = rows
            .next()
            .await
            .map_err(|e| DatabaseError::storage(OP, e))?
            .ok_or(DatabaseError::NotFound { entity: ENTITY, id })?;
        row_to_lesson(&row)
    }

    /// Lessons of one theme of one course, in insertion order.
    pub async fn list_lessons(
        &self,
        course_id: i64,
        theme_id: i64,
    ) -> Result<Vec<Lesson>, DatabaseError> {
        const OP: &str = "repos.lesson.list";

        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM lesson WHERE course_id = ?1 AND theme_id = ?2 ORDER BY id"
                ),
                [course_id, theme_id],
            )
            .await
            .map_err(|e| DatabaseError::storage(OP, e))?;

        let mut lessons = Vec::new();
        while let Some(row) = rows.next().await.map_err(|e| DatabaseError::storage(OP, e))? {
            lessons.push(row_to_lesson(&row)?);
        }
        Ok(lessons)
    }

    pub async fn delete_lesson(&self, id: i64) -> Result<(), DatabaseError> {
        const OP: &str = "repos.lesson.delete";

        self.conn()
            .execute("DELETE FROM lesson WHERE id = ?1", [id])
            .await
            .map_err(|e| DatabaseError::storage(OP, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{sample_course, sample_lesson, test_db};
    use course_core::entities::Theme;
    use course_core::errors::ErrorKind;
    use pretty_assertions::assert_eq;

    async fn course_with_theme(db: &CourseDb, title: &str) -> (i64, i64) {
        let course_id = db.create_course(&sample_course(title)).await.unwrap();
        let theme_id = db
            .create_theme(&Theme { id: 0, course_id, title: "Intro".into() })
            .await
            .unwrap();
        (course_id, theme_id)
    }

    #[tokio::test]
    async fn create_lesson_roundtrip_with_optionals() {
        let db = test_db().await;
        let (course_id, theme_id) = course_with_theme(&db, "Go").await;

        let lesson = Lesson {
            practice_type: Some("quiz".into()),
            completed: Some(true),
            ..sample_lesson(course_id, theme_id, "Setup")
        };
        let id = db.create_lesson(&lesson).await.unwrap();

        assert_eq!(db.get_lesson(id).await.unwrap(), Lesson { id, ..lesson });
    }

    #[tokio::test]
    async fn absent_optionals_read_back_as_none() {
        let db = test_db().await;
        let (course_id, theme_id) = course_with_theme(&db, "Go").await;

        let id = db
            .create_lesson(&sample_lesson(course_id, theme_id, "Setup"))
            .await
            .unwrap();
        let fetched = db.get_lesson(id).await.unwrap();
        assert_eq!(fetched.practice_type, None);
        assert_eq!(fetched.completed, None);
    }

    #[tokio::test]
    async fn lesson_must_match_theme_course() {
        let db = test_db().await;
        let (_, go_theme) = course_with_theme(&db, "Go").await;
        let (rust_course, _) = course_with_theme(&db, "Rust").await;

        let err = db
            .create_lesson(&sample_lesson(rust_course, go_theme, "Mismatched"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[tokio::test]
    async fn list_lessons_by_course_and_theme() {
        let db = test_db().await;
        let (course_id, theme_id) = course_with_theme(&db, "Go").await;
        let other_theme = db
            .create_theme(&Theme { id: 0, course_id, title: "Types".into() })
            .await
            .unwrap();

        db.create_lesson(&sample_lesson(course_id, theme_id, "One")).await.unwrap();
        db.create_lesson(&sample_lesson(course_id, theme_id, "Two")).await.unwrap();
        db.create_lesson(&sample_lesson(course_id, other_theme, "Three")).await.unwrap();

        let titles: Vec<String> = db
            .list_lessons(course_id, theme_id)
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.title)
            .collect();
        assert_eq!(titles, vec!["One".to_string(), "Two".to_string()]);
    }

    #[tokio::test]
    async fn update_lesson_in_place() {
        let db = test_db().await;
        let (course_id, theme_id) = course_with_theme(&db, "Go").await;
        let id = db
            .create_lesson(&sample_lesson(course_id, theme_id, "Setup"))
            .await
            .unwrap();

        let changed = Lesson {
            id,
            duration: 25,
            completed: Some(false),
            ..sample_lesson(course_id, theme_id, "Setup v2")
        };
        db.update_lesson(&changed).await.unwrap();

        assert_eq!(db.get_lesson(id).await.unwrap(), changed);
        assert_eq!(db.list_lessons(course_id, theme_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_lesson_tolerates_missing() {
        let db = test_db().await;
        db.delete_lesson(12345).await.unwrap();
    }
}
