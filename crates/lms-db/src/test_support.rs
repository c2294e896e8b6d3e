//! Shared test utilities for lms-db unit tests.

use lms_core::entities::{NewItem, StoredItem};
use lms_core::enums::ItemType;

use crate::LmsDb;
use crate::service::LmsService;

/// Create an in-memory LmsService.
pub async fn test_service() -> LmsService {
    let db = LmsDb::open_local(":memory:").await.unwrap();
    LmsService::from_db(db)
}

/// Insert an item of `kind` under `parent` with default description and attributes.
pub async fn insert(
    svc: &LmsService,
    kind: ItemType,
    title: &str,
    parent: Option<i64>,
) -> StoredItem {
    let mut item = NewItem::new(kind, title);
    item.parent_id = parent;
    svc.create_item(&item).await.unwrap()
}
