//! Entity structs for the items table and the course domain hierarchy.
//!
//! `StoredItem` mirrors one row of the flat `items` table. The domain types
//! express the same data as a tree where each level carries its own fields.
//! All writes go through the flat representation.

mod domain;
mod stored;

pub use domain::{Course, Item, ItemBase, Lab, Step, Task};
pub use stored::{Attributes, NewItem, StoredItem};
