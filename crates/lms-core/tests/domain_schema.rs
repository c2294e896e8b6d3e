//! JsonSchema validation of the serialized item shapes.
//!
//! The HTTP layer renders `StoredItem` and `Item` as JSON; these tests check
//! the rendered values against the schemas generated from the same types.

use chrono::Utc;
use schemars::schema_for;
use serde_json::json;

use lms_core::entities::{Attributes, Course, Item, ItemBase, Lab, Step, StoredItem, Task};
use lms_core::enums::ItemType;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn base(id: i64, kind: ItemType, parent_id: Option<i64>) -> ItemBase {
    ItemBase {
        id,
        kind,
        parent_id,
        title: format!("{kind} {id}"),
        description: "content".into(),
        created_at: Utc::now(),
    }
}

#[test]
fn stored_item_matches_schema() {
    let mut attributes = Attributes::new();
    attributes.insert("instructors".into(), json!(["A. Smith"]));
    let item = StoredItem {
        id: 1,
        item_type: "course".into(),
        parent_id: None,
        title: "Software Engineering Toolkit".into(),
        description: String::new(),
        attributes,
        created_at: Utc::now(),
    };

    let schema = serde_json::to_value(schema_for!(StoredItem)).unwrap();
    let instance = serde_json::to_value(&item).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "StoredItem schema errors: {errors:?}");

    let recovered: StoredItem = serde_json::from_value(instance).unwrap();
    assert_eq!(recovered, item);
}

#[test]
fn full_course_tree_matches_schema() {
    let course = Item::Course(Course {
        base: base(1, ItemType::Course, None),
        instructors: Some(vec!["A. Smith".into()]),
        start: Some(Utc::now()),
        finish: None,
        labs: vec![Lab {
            base: base(2, ItemType::Lab, Some(1)),
            start: None,
            finish: None,
            tasks: vec![Task {
                base: base(3, ItemType::Task, Some(2)),
                steps: vec![
                    Step {
                        base: base(4, ItemType::Step, Some(3)),
                    },
                    Step {
                        base: base(5, ItemType::Step, Some(3)),
                    },
                ],
            }],
        }],
    });

    let schema = serde_json::to_value(schema_for!(Item)).unwrap();
    let instance = serde_json::to_value(&course).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "Item schema errors: {errors:?}");

    let Item::Course(expected) = course else {
        unreachable!()
    };
    let recovered: Course = serde_json::from_value(instance).unwrap();
    assert_eq!(recovered, expected);
}

#[test]
fn schema_rejects_unknown_kind_in_domain_item() {
    let schema = serde_json::to_value(schema_for!(Step)).unwrap();
    let instance = json!({
        "id": 1,
        "type": "module",
        "parent_id": null,
        "title": "Bad",
        "description": "",
        "created_at": "2025-02-01T12:00:00Z"
    });
    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty(), "unknown kind should fail validation");
}
