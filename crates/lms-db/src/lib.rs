//! # lms-db
//!
//! libSQL item store for the LMS items service.
//!
//! All course content lives in one `items` table: each row names its kind in
//! `type`, its parent in `parent_id`, and keeps level-specific fields in a JSON
//! `attributes` column. Repository methods on [`service::LmsService`] read and
//! write that flat shape; [`service::LmsService::get_item_tree`] assembles the
//! typed domain tree from it.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for item storage.
///
/// Wraps a libSQL database and one connection shared by all repo methods.
pub struct LmsDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LmsDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Enables foreign keys and runs migrations on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let lms_db = Self { db, conn };
        lms_db.run_migrations().await?;
        tracing::debug!(path, "item store opened");
        Ok(lms_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
