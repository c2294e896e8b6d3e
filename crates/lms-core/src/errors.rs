//! Cross-cutting error types for the LMS crates.
//!
//! Storage and transport errors live in their own crates (`DatabaseError`,
//! `ApiError`) and wrap these.

use thiserror::Error;

/// Input rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The title is empty or whitespace only.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The type discriminator is not one of the four item kinds.
    #[error("unknown item type '{0}' (expected one of: course, lab, task, step)")]
    UnknownType(String),
}

/// A stored row could not be turned into a domain item.
///
/// Never expected with data written through the store; seeing one means a
/// row was written out of band.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("item {id} has unrecognized type '{item_type}'")]
    UnknownType { id: i64, item_type: String },

    #[error("item {id} attribute '{key}' is invalid: {reason}")]
    InvalidAttribute {
        id: i64,
        key: String,
        reason: String,
    },
}
