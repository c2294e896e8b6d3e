//! Item kind discriminator.
//!
//! Stored as lowercase text in the `items.type` column and serialized the
//! same way in JSON.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Level of an item in the course tree.
///
/// ```text
/// course → lab → task → step
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Course,
    Lab,
    Task,
    #[default]
    Step,
}

impl ItemType {
    /// Every kind, from the root level down.
    pub const ALL: [Self; 4] = [Self::Course, Self::Lab, Self::Task, Self::Step];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Lab => "lab",
            Self::Task => "task",
            Self::Step => "step",
        }
    }

    /// The kind that may appear directly under this one, if any.
    #[must_use]
    pub const fn child_kind(self) -> Option<Self> {
        match self {
            Self::Course => Some(Self::Lab),
            Self::Lab => Some(Self::Task),
            Self::Task => Some(Self::Step),
            Self::Step => None,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("course", ItemType::Course)]
    #[case("lab", ItemType::Lab)]
    #[case("task", ItemType::Task)]
    #[case("step", ItemType::Step)]
    fn parses_known_kinds(#[case] raw: &str, #[case] expected: ItemType) {
        assert_eq!(raw.parse::<ItemType>().unwrap(), expected);
        assert_eq!(expected.as_str(), raw);
    }

    #[rstest]
    #[case("Course")]
    #[case("module")]
    #[case("")]
    fn rejects_unknown_kinds(#[case] raw: &str) {
        assert_eq!(
            raw.parse::<ItemType>(),
            Err(ValidationError::UnknownType(raw.to_string()))
        );
    }

    #[test]
    fn default_kind_is_step() {
        assert_eq!(ItemType::default(), ItemType::Step);
    }

    #[test]
    fn serde_matches_sql_representation() {
        for kind in ItemType::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.as_str().to_string()));
        }
    }

    #[test]
    fn child_kinds_descend_one_level() {
        assert_eq!(ItemType::Course.child_kind(), Some(ItemType::Lab));
        assert_eq!(ItemType::Lab.child_kind(), Some(ItemType::Task));
        assert_eq!(ItemType::Task.child_kind(), Some(ItemType::Step));
        assert_eq!(ItemType::Step.child_kind(), None);
    }
}
