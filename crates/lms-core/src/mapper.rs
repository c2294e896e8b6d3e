//! Flat row → domain tree mapping.
//!
//! The table stores every level in one shape; the domain model gives each
//! level its own fields. [`to_domain`] bridges the two for a single node
//! once its children have already been mapped, so callers assemble a tree
//! bottom-up: fetch the row, fetch and map its children, then map the row.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::warn;

use crate::entities::{Attributes, Course, Item, ItemBase, Lab, Step, StoredItem, Task};
use crate::enums::ItemType;
use crate::errors::MappingError;

/// Attribute key holding a Lab/Course start timestamp (RFC 3339).
pub const ATTR_START: &str = "start";
/// Attribute key holding a Lab/Course finish timestamp (RFC 3339).
pub const ATTR_FINISH: &str = "finish";
/// Attribute key holding a Course's instructor names.
pub const ATTR_INSTRUCTORS: &str = "instructors";

/// Build the domain variant for `stored`, attaching `children` in order.
///
/// Children whose kind does not belong directly under `stored` are dropped
/// with a warning.
///
/// # Errors
///
/// Returns `MappingError::UnknownType` if the row's discriminator is not a
/// known kind, or `MappingError::InvalidAttribute` if a level-specific
/// attribute has the wrong shape.
pub fn to_domain(stored: StoredItem, children: Vec<Item>) -> Result<Item, MappingError> {
    let kind: ItemType = stored
        .item_type
        .parse()
        .map_err(|_| MappingError::UnknownType {
            id: stored.id,
            item_type: stored.item_type.clone(),
        })?;

    let id = stored.id;
    let attributes = stored.attributes;
    let base = ItemBase {
        id,
        kind,
        parent_id: stored.parent_id,
        title: stored.title,
        description: stored.description,
        created_at: stored.created_at,
    };

    let item = match kind {
        ItemType::Step => {
            for child in &children {
                warn_misplaced(id, kind, child);
            }
            Item::Step(Step { base })
        }
        ItemType::Task => Item::Task(Task {
            base,
            steps: collect_children(id, kind, children, |child| match child {
                Item::Step(step) => Ok(step),
                other => Err(other),
            }),
        }),
        ItemType::Lab => Item::Lab(Lab {
            base,
            start: timestamp_attr(id, &attributes, ATTR_START)?,
            finish: timestamp_attr(id, &attributes, ATTR_FINISH)?,
            tasks: collect_children(id, kind, children, |child| match child {
                Item::Task(task) => Ok(task),
                other => Err(other),
            }),
        }),
        ItemType::Course => Item::Course(Course {
            base,
            instructors: instructors_attr(id, &attributes)?,
            start: timestamp_attr(id, &attributes, ATTR_START)?,
            finish: timestamp_attr(id, &attributes, ATTR_FINISH)?,
            labs: collect_children(id, kind, children, |child| match child {
                Item::Lab(lab) => Ok(lab),
                other => Err(other),
            }),
        }),
    };
    Ok(item)
}

fn collect_children<T>(
    parent_id: i64,
    parent_kind: ItemType,
    children: Vec<Item>,
    pick: impl Fn(Item) -> Result<T, Item>,
) -> Vec<T> {
    children
        .into_iter()
        .filter_map(|child| match pick(child) {
            Ok(picked) => Some(picked),
            Err(other) => {
                warn_misplaced(parent_id, parent_kind, &other);
                None
            }
        })
        .collect()
}

fn warn_misplaced(parent_id: i64, parent_kind: ItemType, child: &Item) {
    warn!(
        parent_id,
        parent_kind = %parent_kind,
        child_id = child.id(),
        child_kind = %child.kind(),
        "skipping child that does not belong at this level"
    );
}

fn timestamp_attr(
    id: i64,
    attributes: &Attributes,
    key: &str,
) -> Result<Option<DateTime<Utc>>, MappingError> {
    match attributes.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| MappingError::InvalidAttribute {
                id,
                key: key.to_string(),
                reason: format!("'{raw}' is not an RFC 3339 timestamp: {e}"),
            }),
        Some(other) => Err(MappingError::InvalidAttribute {
            id,
            key: key.to_string(),
            reason: format!("expected a timestamp string, got {other}"),
        }),
    }
}

fn instructors_attr(id: i64, attributes: &Attributes) -> Result<Option<Vec<String>>, MappingError> {
    match attributes.get(ATTR_INSTRUCTORS) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| MappingError::InvalidAttribute {
                id,
                key: ATTR_INSTRUCTORS.to_string(),
                reason: e.to_string(),
            }),
    }
}
