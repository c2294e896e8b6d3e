//! Service layer hosting the item repository methods.
//!
//! `LmsService` wraps `LmsDb`. Repo methods are implemented as `impl LmsService`
//! blocks under `repos/`.

use crate::LmsDb;
use crate::error::DatabaseError;

/// Entry point for item store operations.
///
/// Every method runs single-statement reads and writes against one shared
/// connection, so the service can sit behind an `Arc` and serve concurrent
/// requests; overlapping updates to one row resolve as last writer wins.
pub struct LmsService {
    db: LmsDb,
}

impl LmsService {
    /// Create a new service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = LmsDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `LmsDb`.
    #[must_use]
    pub const fn from_db(db: LmsDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &LmsDb {
        &self.db
    }
}
