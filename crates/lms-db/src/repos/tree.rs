//! Domain tree assembly.
//!
//! Walks the adjacency list downward from one row, then maps the collected
//! rows bottom-up with `lms_core::mapper::to_domain`.

use std::collections::HashMap;

use tracing::debug;

use lms_core::entities::{Item, StoredItem};
use lms_core::errors::MappingError;
use lms_core::mapper::to_domain;

use crate::error::DatabaseError;
use crate::service::LmsService;

impl LmsService {
    /// Fetch an item with all of its descendants as a typed domain tree.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::ItemNotFound` if the root id is missing and
    /// `DatabaseError::Mapping` if any row in the subtree has an unknown type
    /// or malformed attributes.
    pub async fn get_item_tree(&self, id: i64) -> Result<Item, DatabaseError> {
        let root = self.get_item(id).await?;

        let mut children_of: HashMap<i64, Vec<StoredItem>> = HashMap::new();
        let mut pending = vec![root.id];
        while let Some(parent_id) = pending.pop() {
            if children_of.contains_key(&parent_id) {
                continue;
            }
            let children = self.list_items(Some(parent_id)).await?;
            pending.extend(children.iter().map(|child| child.id));
            children_of.insert(parent_id, children);
        }

        let rows = children_of.values().map(Vec::len).sum::<usize>() + 1;
        debug!(id, rows, "assembling item tree");
        Ok(assemble(root, &mut children_of)?)
    }
}

fn assemble(
    stored: StoredItem,
    children_of: &mut HashMap<i64, Vec<StoredItem>>,
) -> Result<Item, MappingError> {
    let children = children_of
        .remove(&stored.id)
        .unwrap_or_default()
        .into_iter()
        .map(|child| assemble(child, children_of))
        .collect::<Result<Vec<_>, _>>()?;
    to_domain(stored, children)
}
