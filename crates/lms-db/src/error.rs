//! Database error types for lms-db.

use lms_core::errors::{MappingError, ValidationError};
use thiserror::Error;

/// Errors from item store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// No item with this id.
    #[error("Item {0} not found")]
    ItemNotFound(i64),

    /// The referenced parent item does not exist.
    #[error("Parent item {0} not found")]
    ParentNotFound(i64),

    /// Input rejected before touching the table.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A stored row could not be assembled into a domain item.
    #[error("Mapping failed: {0}")]
    Mapping(#[from] MappingError),

    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Whether the error names an id that does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound(_) | Self::ParentNotFound(_))
    }
}
