//! Course repository.

use course_core::entities::Course;

use crate::CourseDb;
use crate::error::DatabaseError;
use crate::helpers::{classify_write, get_i32, require_id};

const ENTITY: &str = "course";

const SELECT_COLS: &str =
    "id, title, description, full_description, work, difficulty, duration, image";

fn row_to_course(row: &libsql::Row) -> Result<Course, DatabaseError> {
    Ok(Course {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        full_description: row.get(3)?,
        work: row.get(4)?,
        difficulty: row.get(5)?,
        duration: get_i32(row, 6)?,
        image: row.get(7)?,
    })
}

impl CourseDb {
    /// Insert a course and return its generated id. `course.id` is ignored.
    pub async fn create_course(&self, course: &Course) -> Result<i64, DatabaseError> {
        const OP: &str = "repos.course.create";

        self.insert_returning_id(
            OP,
            ENTITY,
            "INSERT INTO course (title, description, full_description, work, difficulty, duration, image)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING id",
            libsql::params![
                course.title.as_str(),
                course.description.as_str(),
                course.full_description.as_str(),
                course.work.as_str(),
                course.difficulty.as_str(),
                course.duration,
                course.image.as_str()
            ],
        )
        .await
    }

    /// Overwrite every column of the course row named by `course.id`.
    ///
    /// Returns the id whether or not a row matched.
    pub async fn update_course(&self, course: &Course) -> Result<i64, DatabaseError> {
        const OP: &str = "repos.course.update";
        let id = require_id(ENTITY, course.id)?;

        self.conn()
            .execute(
                "UPDATE course SET title = ?1, description = ?2, full_description = ?3,
                 work = ?4, difficulty = ?5, duration = ?6, image = ?7
                 WHERE id = ?8",
                libsql::params![
                    course.title.as_str(),
                    course.description.as_str(),
                    course.full_description.as_str(),
                    course.work.as_str(),
                    course.difficulty.as_str(),
                    course.duration,
                    course.image.as_str(),
                    id
                ],
            )
            .await
            .map_err(|e| classify_write(OP, ENTITY, e))?;

        Ok(id)
    }

    pub async fn get_course(&self, id: i64) -> Result<Course, DatabaseError> {
        const OP: &str = "repos.course.get";

        let mut rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM course WHERE id = ?1"), [id])
            .await
            .map_err(|e| DatabaseError::storage(OP, e))?;
        let row = rows
            .next()
            .await
            .map_err(|e| DatabaseError::storage(OP, e))?
            .ok_or(DatabaseError::NotFound { entity: ENTITY, id })?;
        row_to_course(&row)
    }

    /// Fail with `NotFound` unless a course row with `id` exists.
    pub(crate) async fn require_course(&self, id: i64) -> Result<(), DatabaseError> {
        const OP: &str = "repos.course.exists";

        let mut rows = self
            .conn()
            .query("SELECT 1 FROM course WHERE id = ?1", [id])
            .await
            .map_err(|e| DatabaseError::storage(OP, e))?;
        rows.next()
            .await
            .map_err(|e| DatabaseError::storage(OP, e))?
            .map(|_| ())
            .ok_or(DatabaseError::NotFound { entity: ENTITY, id })
    }

    /// All courses, oldest first. Children are not loaded.
    pub async fn list_courses(&self) -> Result<Vec<Course>, DatabaseError> {
        const OP: &str = "repos.course.list";

        let mut rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM course ORDER BY id"), ())
            .await
            .map_err(|e| DatabaseError::storage(OP, e))?;

        let mut courses = Vec::new();
        while let Some(row) = rows.next().await.map_err(|e| DatabaseError::storage(OP, e))? {
            courses.push(row_to_course(&row)?);
        }
        Ok(courses)
    }

    /// Remove the course row only. Zero rows matched is not an error.
    pub async fn delete_course(&self, id: i64) -> Result<(), DatabaseError> {
        const OP: &str = "repos.course.delete";

        self.conn()
            .execute("DELETE FROM course WHERE id = ?1", [id])
            .await
            .map_err(|e| DatabaseError::storage(OP, e))?;
        Ok(())
    }
}
