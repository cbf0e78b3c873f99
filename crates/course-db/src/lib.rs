//! # course-db
//!
//! libSQL storage for course content and the service that builds and reads
//! course → theme → lesson trees on top of it.
//!
//! - [`CourseDb`] owns the connection and hosts the per-entity repository
//!   methods (`repos`): one statement per call, no caching, no retries.
//! - [`service::CourseService`] orchestrates nested create/update/fetch across
//!   the three tables and logs each operation.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for course content.
///
/// Wraps a libSQL database and a single connection. The connection is shared
/// by every request; there is no pool inside this crate.
pub struct CourseDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl CourseDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Enables foreign-key enforcement and runs migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Must be per-connection in SQLite
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let course_db = Self { db, conn };
        course_db.run_migrations().await?;
        Ok(course_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Open a transaction on the shared connection.
    ///
    /// Statements issued through `self` run inside it until it is committed or
    /// rolled back. Dropping it without either rolls back.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Storage` if `BEGIN` fails (e.g. one is already open).
    pub async fn begin(&self) -> Result<libsql::Transaction, DatabaseError> {
        self.conn
            .transaction()
            .await
            .map_err(|e| DatabaseError::storage("db.begin", e))
    }

    /// Run an `INSERT … RETURNING id` and hand back the generated id.
    ///
    /// The insert only executes when the first row is stepped, so errors are
    /// classified after `next()`, not after `query()`.
    pub(crate) async fn insert_returning_id(
        &self,
        op: &'static str,
        entity: &'static str,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<i64, DatabaseError> {
        self.insert_returning(op, entity, sql, params)
            .await?
            .ok_or_else(|| DatabaseError::InvalidState(format!("{op}: insert returned no id")))
    }

    /// Like [`Self::insert_returning_id`], for `INSERT … SELECT … WHERE`
    /// statements that may legitimately insert nothing.
    pub(crate) async fn insert_returning(
        &self,
        op: &'static str,
        entity: &'static str,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Option<i64>, DatabaseError> {
        let inserted = async {
            let mut rows = self.conn.query(sql, params).await?;
            let Some(row) = rows.next().await? else {
                return Ok(None);
            };
            row.get::<i64>(0).map(Some)
        }
        .await;

        inserted.map_err(|e| helpers::classify_write(op, entity, e))
    }
}
