use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemType;

/// Fields every level of the course tree carries.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ItemBase {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ItemType,
    pub parent_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Leaf of the tree.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Step {
    #[serde(flatten)]
    pub base: ItemBase,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    #[serde(flatten)]
    pub base: ItemBase,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Lab {
    #[serde(flatten)]
    pub base: ItemBase,
    pub start: Option<DateTime<Utc>>,
    pub finish: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Root of the tree.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Course {
    #[serde(flatten)]
    pub base: ItemBase,
    pub instructors: Option<Vec<String>>,
    pub start: Option<DateTime<Utc>>,
    pub finish: Option<DateTime<Utc>>,
    #[serde(default)]
    pub labs: Vec<Lab>,
}

/// Any node of the course tree.
///
/// The set of variants is closed: every consumer matches all four, so adding
/// a level is a compile error everywhere an item is rendered. Each variant
/// already carries its `type` key through `ItemBase`, which is why the enum
/// serializes untagged.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum Item {
    Step(Step),
    Task(Task),
    Lab(Lab),
    Course(Course),
}

impl Item {
    #[must_use]
    pub const fn base(&self) -> &ItemBase {
        match self {
            Self::Step(step) => &step.base,
            Self::Task(task) => &task.base,
            Self::Lab(lab) => &lab.base,
            Self::Course(course) => &course.base,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ItemType {
        self.base().kind
    }

    #[must_use]
    pub const fn id(&self) -> i64 {
        self.base().id
    }

    /// Number of direct children held by this node.
    #[must_use]
    pub fn child_count(&self) -> usize {
        match self {
            Self::Step(_) => 0,
            Self::Task(task) => task.steps.len(),
            Self::Lab(lab) => lab.tasks.len(),
            Self::Course(course) => course.labs.len(),
        }
    }
}
