//! Repository modules implementing operations over the items table.
//!
//! Each module adds methods to `LmsService` via `impl LmsService` blocks.

pub mod item;
pub mod tree;
