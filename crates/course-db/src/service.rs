//! Service layer building and reading course trees.
//!
//! `CourseService` wraps `CourseDb` (raw per-entity statements) and drives the
//! parent-then-child traversal of tree operations. Every operation:
//! 1. Opens a span named after the operation, parented on the service span
//! 2. Logs a start event
//! 3. Runs its statements (inside one transaction in atomic mode)
//! 4. Logs success, or logs the failure and wraps it with the operation name
//!
//! Nothing is retried and no error is swallowed.

use std::future::Future;

use course_config::DatabaseConfig;
use course_core::entities::Course;
use course_core::enums::TreeWriteMode;
use course_core::errors::ErrorKind;
use course_core::tree::{
    ChildOp, CourseTree, CourseTreeUpdate, CourseWithThemes, ThemeWithLessons,
};
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{Instrument, Span, debug, error, field, info, info_span, warn};

use crate::CourseDb;
use crate::error::DatabaseError;

/// A storage failure tagged with the service operation it happened in.
///
/// The kind of the underlying error is preserved.
#[derive(Debug, Error)]
#[error("{op}: {source}")]
pub struct ServiceError {
    pub op: &'static str,
    #[source]
    pub source: DatabaseError,
}

impl ServiceError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}

/// Orchestrates nested create/update/fetch of courses, themes and lessons.
pub struct CourseService {
    db: CourseDb,
    mode: TreeWriteMode,
    /// Serialises operations in atomic mode so a transaction on the shared
    /// connection never picks up another request's statements.
    gate: Mutex<()>,
    span: Span,
}

impl CourseService {
    /// Wrap an open database.
    ///
    /// `span` is the logging handle; every operation span is its child.
    #[must_use]
    pub fn new(db: CourseDb, mode: TreeWriteMode, span: Span) -> Self {
        Self {
            db,
            mode,
            gate: Mutex::new(()),
            span,
        }
    }

    /// Open the configured database and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn open(config: &DatabaseConfig, span: Span) -> Result<Self, DatabaseError> {
        let db = CourseDb::open_local(&config.path).await?;
        Ok(Self::new(db, config.tree_writes, span))
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &CourseDb {
        &self.db
    }

    #[must_use]
    pub const fn mode(&self) -> TreeWriteMode {
        self.mode
    }

    /// Insert a course, then its themes in order, then each theme's lessons.
    ///
    /// Stops at the first failure. In independent mode rows written before the
    /// failure stay; in atomic mode they are rolled back.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` wrapping the first storage failure.
    pub async fn create_course_tree(&self, tree: CourseTree) -> Result<i64, ServiceError> {
        const OP: &str = "create_course_tree";
        let (themes, lessons) = tree.child_counts();
        let span = info_span!(
            parent: &self.span,
            "create_course_tree",
            title = %tree.course.title,
            themes,
            lessons,
            course_id = field::Empty
        );
        self.run(OP, span, self.transact(self.insert_tree(tree)))
            .await
    }

    /// Update a course in place and insert-or-update each child.
    ///
    /// A child marked `Create` is inserted; one marked `Update` is updated by
    /// its id. Lessons are attached to the theme id resolved in this call.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` wrapping the first storage failure.
    pub async fn update_course_tree(&self, update: CourseTreeUpdate) -> Result<i64, ServiceError> {
        const OP: &str = "update_course_tree";
        let span = info_span!(
            parent: &self.span,
            "update_course_tree",
            course_id = update.id,
            themes = update.themes.len()
        );
        self.run(OP, span, self.transact(self.apply_update(update)))
            .await
    }

    /// Load a course with all of its themes and their lessons.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` with kind `NotFound` if the course does not
    /// exist, or the first failure of any level.
    pub async fn fetch_course_tree(&self, course_id: i64) -> Result<CourseWithThemes, ServiceError> {
        const OP: &str = "fetch_course_tree";
        let span = info_span!(parent: &self.span, "fetch_course_tree", course_id);
        self.run(OP, span, self.load_tree(course_id)).await
    }

    /// All course rows, without children.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the query fails.
    pub async fn list_courses(&self) -> Result<Vec<Course>, ServiceError> {
        const OP: &str = "list_courses";
        let span = info_span!(parent: &self.span, "list_courses");
        self.run(OP, span, self.db.list_courses()).await
    }

    /// Remove the course row. Themes and lessons are not touched.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the delete statement fails.
    pub async fn delete_course(&self, course_id: i64) -> Result<(), ServiceError> {
        const OP: &str = "delete_course";
        let span = info_span!(parent: &self.span, "delete_course", course_id);
        self.run(OP, span, self.db.delete_course(course_id)).await
    }

    async fn insert_tree(&self, tree: CourseTree) -> Result<i64, DatabaseError> {
        let course_id = self.db.create_course(&tree.course.with_id(0)).await?;
        Span::current().record("course_id", course_id);

        for node in tree.themes {
            let theme_id = self
                .db
                .create_theme(&node.theme.with_ids(0, course_id))
                .await?;
            debug!(course_id, theme_id, "theme created");

            for lesson in node.lessons {
                let lesson_id = self
                    .db
                    .create_lesson(&lesson.with_ids(0, course_id, theme_id))
                    .await?;
                debug!(course_id, theme_id, lesson_id, "lesson created");
            }
        }

        Ok(course_id)
    }

    async fn apply_update(&self, update: CourseTreeUpdate) -> Result<i64, DatabaseError> {
        let course_id = self.db.update_course(&update.course.with_id(update.id)).await?;

        for node in update.themes {
            let theme_id = match node.theme {
                ChildOp::Create(draft) => self.db.create_theme(&draft.with_ids(0, course_id)).await?,
                ChildOp::Update { id, fields } => {
                    self.db.update_theme(&fields.with_ids(id, course_id)).await?
                }
            };
            debug!(course_id, theme_id, "theme written");

            for lesson in node.lessons {
                let lesson_id = match lesson {
                    ChildOp::Create(draft) => {
                        self.db
                            .create_lesson(&draft.with_ids(0, course_id, theme_id))
                            .await?
                    }
                    ChildOp::Update { id, fields } => {
                        self.db
                            .update_lesson(&fields.with_ids(id, course_id, theme_id))
                            .await?
                    }
                };
                debug!(course_id, theme_id, lesson_id, "lesson written");
            }
        }

        Ok(course_id)
    }

    async fn load_tree(&self, course_id: i64) -> Result<CourseWithThemes, DatabaseError> {
        let course = self.db.get_course(course_id).await?;
        let themes = self.db.list_themes(course.id).await?;

        let mut nodes = Vec::with_capacity(themes.len());
        for theme in themes {
            let lessons = self.db.list_lessons(course.id, theme.id).await?;
            nodes.push(ThemeWithLessons { theme, lessons });
        }

        Ok(CourseWithThemes {
            course,
            themes: nodes,
        })
    }

    /// In atomic mode, run `work` inside one transaction: commit on success,
    /// roll back on failure. Otherwise run it as is.
    async fn transact<T, F>(&self, work: F) -> Result<T, DatabaseError>
    where
        F: Future<Output = Result<T, DatabaseError>>,
    {
        if !self.mode.is_atomic() {
            return work.await;
        }

        let tx = self.db.begin().await?;
        match work.await {
            Ok(value) => {
                tx.commit()
                    .await
                    .map_err(|e| DatabaseError::storage("db.commit", e))?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback) = tx.rollback().await {
                    warn!(error = %rollback, "rollback failed");
                }
                Err(e)
            }
        }
    }

    /// Log, gate and wrap one service operation.
    async fn run<T, F>(&self, op: &'static str, span: Span, work: F) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, DatabaseError>>,
    {
        async move {
            debug!(op, mode = %self.mode, "started");
            let _gate = self.gate().await;
            match work.await {
                Ok(value) => {
                    info!(op, "succeeded");
                    Ok(value)
                }
                Err(source) => {
                    error!(op, kind = %source.kind(), error = %source, "failed");
                    Err(ServiceError { op, source })
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn gate(&self) -> Option<MutexGuard<'_, ()>> {
        if self.mode.is_atomic() {
            Some(self.gate.lock().await)
        } else {
            None
        }
    }
}
