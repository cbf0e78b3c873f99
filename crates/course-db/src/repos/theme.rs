//! Theme repository.

use course_core::entities::Theme;

use crate::CourseDb;
use crate::error::DatabaseError;
use crate::helpers::{classify_write, require_id};

const ENTITY: &str = "theme";

const SELECT_COLS: &str = "id, course_id, title";

fn row_to_theme(row: &libsql::Row) -> Result<Theme, DatabaseError> {
    Ok(Theme {
        id: row.get(0)?,
        course_id: row.get(1)?,
        title: row.get(2)?,
    })
}

impl CourseDb {
    /// Insert a theme under `theme.course_id`.
    ///
    /// The existence check and the insert are one statement; a missing course
    /// inserts nothing and reports `NotFound`.
    pub async fn create_theme(&self, theme: &Theme) -> Result<i64, DatabaseError> {
        const OP: &str = "repos.theme.create";

        self.insert_returning(
            OP,
            ENTITY,
            "INSERT INTO theme (course_id, title)
             SELECT ?1, ?2 WHERE EXISTS (SELECT 1 FROM course WHERE id = ?1)
             RETURNING id",
            libsql::params![theme.course_id, theme.title.as_str()],
        )
        .await?
        .ok_or(DatabaseError::NotFound {
            entity: "course",
            id: theme.course_id,
        })
    }

    /// Overwrite the theme named by `theme.id`, including its course.
    ///
    /// The target course must exist. A theme id that matches no row is not an
    /// error.
    pub async fn update_theme(&self, theme: &Theme) -> Result<i64, DatabaseError> {
        const OP: &str = "repos.theme.update";
        let id = require_id(ENTITY, theme.id)?;
        self.require_course(theme.course_id).await?;

        self.conn()
            .execute(
                "UPDATE theme SET course_id = ?1, title = ?2 WHERE id = ?3",
                libsql::params![theme.course_id, theme.title.as_str(), id],
            )
            .await
            .map_err(|e| classify_write(OP, ENTITY, e))?;

        Ok(id)
    }

    pub async fn get_theme(&self, id: i64) -> Result<Theme, DatabaseError> {
        const OP: &str = "repos.theme.get";

        let mut rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM theme WHERE id = ?1"), [id])
            .await
            .map_err(|e| DatabaseError::storage(OP, e))?;
        let row = rows
            .next()
            .await
            .map_err(|e| DatabaseError::storage(OP, e))?
            .ok_or(DatabaseError::NotFound { entity: ENTITY, id })?;
        row_to_theme(&row)
    }

    /// Themes of one course in insertion order.
    pub async fn list_themes(&self, course_id: i64) -> Result<Vec<Theme>, DatabaseError> {
        const OP: &str = "repos.theme.list";

        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM theme WHERE course_id = ?1 ORDER BY id"),
                [course_id],
            )
            .await
            .map_err(|e| DatabaseError::storage(OP, e))?;

        let mut themes = Vec::new();
        while let Some(row) = rows.next().await.map_err(|e| DatabaseError::storage(OP, e))? {
            themes.push(row_to_theme(&row)?);
        }
        Ok(themes)
    }

    pub async fn delete_theme(&self, id: i64) -> Result<(), DatabaseError> {
        const OP: &str = "repos.theme.delete";

        self.conn()
            .execute("DELETE FROM theme WHERE id = ?1", [id])
            .await
            .map_err(|e| DatabaseError::storage(OP, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{sample_course, test_db};
    use course_core::errors::ErrorKind;
    use pretty_assertions::assert_eq;

    fn theme(course_id: i64, title: &str) -> Theme {
        Theme {
            id: 0,
            course_id,
            title: title.into(),
        }
    }

    #[tokio::test]
    async fn create_and_list_themes() {
        let db = test_db().await;
        let course_id = db.create_course(&sample_course("Go")).await.unwrap();

        let a = db.create_theme(&theme(course_id, "Intro")).await.unwrap();
        let b = db.create_theme(&theme(course_id, "Types")).await.unwrap();

        let themes = db.list_themes(course_id).await.unwrap();
        assert_eq!(
            themes,
            vec![
                Theme { id: a, course_id, title: "Intro".into() },
                Theme { id: b, course_id, title: "Types".into() },
            ]
        );
    }

    #[tokio::test]
    async fn themes_are_scoped_to_their_course() {
        let db = test_db().await;
        let go = db.create_course(&sample_course("Go")).await.unwrap();
        let rust = db.create_course(&sample_course("Rust")).await.unwrap();

        db.create_theme(&theme(go, "Intro")).await.unwrap();
        db.create_theme(&theme(rust, "Intro")).await.unwrap();

        assert_eq!(db.list_themes(go).await.unwrap().len(), 1);
        assert_eq!(db.list_themes(rust).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn theme_for_missing_course_is_not_found() {
        let db = test_db().await;
        let err = db.create_theme(&theme(77, "Orphan")).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { entity: "course", id: 77 }));
        assert!(db.list_themes(77).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_theme_into_missing_course_is_not_found() {
        let db = test_db().await;
        let course_id = db.create_course(&sample_course("Go")).await.unwrap();
        let id = db.create_theme(&theme(course_id, "Intro")).await.unwrap();

        let moved = Theme { id, course_id: 404, title: "Intro".into() };
        let err = db.update_theme(&moved).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(db.get_theme(id).await.unwrap().course_id, course_id);
    }

    #[tokio::test]
    async fn update_theme_moves_a_childless_theme_between_courses() {
        let db = test_db().await;
        let go = db.create_course(&sample_course("Go")).await.unwrap();
        let rust = db.create_course(&sample_course("Rust")).await.unwrap();
        let id = db.create_theme(&theme(go, "Intro")).await.unwrap();

        db.update_theme(&Theme { id, course_id: rust, title: "Intro".into() })
            .await
            .unwrap();
        assert!(db.list_themes(go).await.unwrap().is_empty());
        assert_eq!(db.list_themes(rust).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn themes_survive_their_course_delete() {
        let db = test_db().await;
        let course_id = db.create_course(&sample_course("Go")).await.unwrap();
        let id = db.create_theme(&theme(course_id, "Intro")).await.unwrap();

        db.delete_course(course_id).await.unwrap();
        assert_eq!(db.get_theme(id).await.unwrap().course_id, course_id);
    }

    #[tokio::test]
    async fn duplicate_title_within_course_is_already_exists() {
        let db = test_db().await;
        let course_id = db.create_course(&sample_course("Go")).await.unwrap();
        db.create_theme(&theme(course_id, "Intro")).await.unwrap();

        let err = db.create_theme(&theme(course_id, "Intro")).await.unwrap_err();
        assert!(matches!(err, DatabaseError::AlreadyExists { entity: "theme" }));
    }

    #[tokio::test]
    async fn update_theme_in_place() {
        let db = test_db().await;
        let course_id = db.create_course(&sample_course("Go")).await.unwrap();
        let id = db.create_theme(&theme(course_id, "Intro")).await.unwrap();

        let renamed = Theme { id, course_id, title: "Introduction".into() };
        assert_eq!(db.update_theme(&renamed).await.unwrap(), id);
        assert_eq!(db.get_theme(id).await.unwrap(), renamed);
        assert_eq!(db.list_themes(course_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_theme_then_get_is_not_found() {
        let db = test_db().await;
        let course_id = db.create_course(&sample_course("Go")).await.unwrap();
        let id = db.create_theme(&theme(course_id, "Intro")).await.unwrap();

        db.delete_theme(id).await.unwrap();
        let err = db.get_theme(id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
