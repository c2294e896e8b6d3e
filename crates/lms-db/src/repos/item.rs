//! Item repository: create, get, update and list over the flat table.

use chrono::Utc;
use tracing::{debug, info};

use lms_core::entities::{NewItem, StoredItem};
use lms_core::validation::validate_title;

use crate::error::DatabaseError;
use crate::helpers::{attributes_to_text, parse_attributes, parse_datetime};
use crate::service::LmsService;
use crate::updates::item::ItemUpdate;

const SELECT_COLS: &str = "id, type, parent_id, title, description, attributes, created_at";

fn row_to_item(row: &libsql::Row) -> Result<StoredItem, DatabaseError> {
    Ok(StoredItem {
        id: row.get(0)?,
        item_type: row.get(1)?,
        parent_id: row.get::<Option<i64>>(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        attributes: parse_attributes(&row.get::<String>(5)?)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl LmsService {
    /// Insert a new item and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a blank title and
    /// `DatabaseError::ParentNotFound` if `parent_id` names a missing row; in
    /// both cases nothing is inserted.
    pub async fn create_item(&self, item: &NewItem) -> Result<StoredItem, DatabaseError> {
        validate_title(&item.title)?;
        if let Some(parent_id) = item.parent_id {
            if !self.item_exists(parent_id).await? {
                return Err(DatabaseError::ParentNotFound(parent_id));
            }
        }

        let now = Utc::now();
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "INSERT INTO items (type, parent_id, title, description, attributes, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                     RETURNING {SELECT_COLS}"
                ),
                libsql::params![
                    item.item_type.as_str(),
                    item.parent_id,
                    item.title.as_str(),
                    item.description.as_str(),
                    attributes_to_text(&item.attributes)?,
                    now.to_rfc3339()
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let stored = row_to_item(&row)?;

        info!(
            id = stored.id,
            item_type = %stored.item_type,
            parent_id = ?stored.parent_id,
            "item created"
        );
        Ok(stored)
    }

    /// Fetch one item by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::ItemNotFound` if no row has this id.
    pub async fn get_item(&self, id: i64) -> Result<StoredItem, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM items WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::ItemNotFound(id))?;
        row_to_item(&row)
    }

    /// Replace the mutable fields of an item and return the updated row.
    ///
    /// An empty update returns the current row unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::ItemNotFound` if no row has this id and
    /// `DatabaseError::Validation` if the new title is blank.
    pub async fn update_item(
        &self,
        id: i64,
        update: &ItemUpdate,
    ) -> Result<StoredItem, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.title {
            validate_title(title)?;
            sets.push(format!("title = ?{idx}"));
            params.push(title.clone().into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.clone().into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_item(id).await;
        }

        params.push(id.into());
        let sql = format!("UPDATE items SET {} WHERE id = ?{idx}", sets.join(", "));
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::ItemNotFound(id));
        }

        info!(id, ?update, "item updated");
        self.get_item(id).await
    }

    /// Direct children of `parent_id`, or root items when `None`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn list_items(&self, parent_id: Option<i64>) -> Result<Vec<StoredItem>, DatabaseError> {
        let mut rows = match parent_id {
            Some(parent_id) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM items WHERE parent_id = ?1 ORDER BY id"
                        ),
                        [parent_id],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM items WHERE parent_id IS NULL ORDER BY id"
                        ),
                        (),
                    )
                    .await?
            }
        };

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_item(&row)?);
        }
        debug!(?parent_id, count = items.len(), "listed items");
        Ok(items)
    }

    /// Whether a row with this id exists.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn item_exists(&self, id: i64) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT 1 FROM items WHERE id = ?1", [id])
            .await?;
        Ok(rows.next().await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{insert, test_service};
    use crate::updates::item::ItemUpdateBuilder;
    use lms_core::enums::ItemType;
    use lms_core::errors::ValidationError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn create_item_roundtrip() {
        let svc = test_service().await;

        let created = svc
            .create_item(&NewItem::new(ItemType::Course, "SE Toolkit").description("Spring term"))
            .await
            .unwrap();

        assert!(created.id > 0);
        assert_eq!(created.item_type, "course");
        assert_eq!(created.parent_id, None);
        assert_eq!(created.title, "SE Toolkit");
        assert_eq!(created.description, "Spring term");
        assert!(created.attributes.is_empty());

        let fetched = svc.get_item(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_item_stores_attributes() {
        let svc = test_service().await;

        let created = svc
            .create_item(
                &NewItem::new(ItemType::Course, "SE Toolkit")
                    .attribute("instructors", json!(["A. Smith"])),
            )
            .await
            .unwrap();

        let fetched = svc.get_item(created.id).await.unwrap();
        assert_eq!(fetched.attributes["instructors"], json!(["A. Smith"]));
    }

    #[tokio::test]
    async fn ids_increase_with_each_insert() {
        let svc = test_service().await;
        let a = insert(&svc, ItemType::Course, "A", None).await;
        let b = insert(&svc, ItemType::Course, "B", None).await;
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let svc = test_service().await;

        let result = svc.create_item(&NewItem::new(ItemType::Step, "  ")).await;
        assert!(matches!(
            result,
            Err(DatabaseError::Validation(ValidationError::EmptyTitle))
        ));
        assert!(svc.list_items(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn dangling_parent_is_rejected_without_insert() {
        let svc = test_service().await;

        let result = svc
            .create_item(&NewItem::new(ItemType::Lab, "Orphan").parent(42))
            .await;
        assert!(matches!(result, Err(DatabaseError::ParentNotFound(42))));

        let mut rows = svc
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM items", ())
            .await
            .unwrap();
        let count: i64 = rows.next().await.unwrap().unwrap().get(0).unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn get_missing_item() {
        let svc = test_service().await;
        let result = svc.get_item(7).await;
        assert!(matches!(result, Err(DatabaseError::ItemNotFound(7))));
    }

    #[tokio::test]
    async fn update_preserves_immutable_fields() {
        let svc = test_service().await;
        let course = insert(&svc, ItemType::Course, "Course", None).await;
        let task = insert(&svc, ItemType::Task, "Intro", Some(course.id)).await;

        let update = ItemUpdateBuilder::new()
            .title("Introduction")
            .description("Read the README")
            .build();
        let updated = svc.update_item(task.id, &update).await.unwrap();

        assert_eq!(updated.title, "Introduction");
        assert_eq!(updated.description, "Read the README");
        assert_eq!(updated.id, task.id);
        assert_eq!(updated.item_type, task.item_type);
        assert_eq!(updated.parent_id, task.parent_id);
        assert_eq!(updated.created_at, task.created_at);
    }

    #[tokio::test]
    async fn partial_update_touches_only_given_field() {
        let svc = test_service().await;
        let mut new = NewItem::new(ItemType::Step, "Clone the repo");
        new.description = "git clone".into();
        let step = svc.create_item(&new).await.unwrap();

        let update = ItemUpdateBuilder::new().title("Fork the repo").build();
        let updated = svc.update_item(step.id, &update).await.unwrap();
        assert_eq!(updated.title, "Fork the repo");
        assert_eq!(updated.description, "git clone");
    }

    #[tokio::test]
    async fn empty_update_returns_current_row() {
        let svc = test_service().await;
        let step = insert(&svc, ItemType::Step, "Same", None).await;

        let unchanged = svc
            .update_item(step.id, &ItemUpdateBuilder::new().build())
            .await
            .unwrap();
        assert_eq!(unchanged, step);
    }

    #[tokio::test]
    async fn update_missing_item() {
        let svc = test_service().await;
        let update = ItemUpdateBuilder::new().title("Ghost").build();
        let result = svc.update_item(99, &update).await;
        assert!(matches!(result, Err(DatabaseError::ItemNotFound(99))));
    }

    #[tokio::test]
    async fn update_rejects_blank_title() {
        let svc = test_service().await;
        let step = insert(&svc, ItemType::Step, "Keep me", None).await;

        let update = ItemUpdateBuilder::new().title("").build();
        let result = svc.update_item(step.id, &update).await;
        assert!(matches!(result, Err(DatabaseError::Validation(_))));
        assert_eq!(svc.get_item(step.id).await.unwrap().title, "Keep me");
    }

    #[tokio::test]
    async fn list_returns_direct_children_in_insertion_order() {
        let svc = test_service().await;
        let course = insert(&svc, ItemType::Course, "Course", None).await;
        let lab_b = insert(&svc, ItemType::Lab, "Lab B", Some(course.id)).await;
        let lab_a = insert(&svc, ItemType::Lab, "Lab A", Some(course.id)).await;
        insert(&svc, ItemType::Task, "Nested", Some(lab_b.id)).await;

        let labs = svc.list_items(Some(course.id)).await.unwrap();
        let ids: Vec<i64> = labs.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![lab_b.id, lab_a.id]);
    }

    #[tokio::test]
    async fn list_without_parent_returns_roots() {
        let svc = test_service().await;
        let first = insert(&svc, ItemType::Course, "First", None).await;
        insert(&svc, ItemType::Lab, "Child", Some(first.id)).await;
        let second = insert(&svc, ItemType::Course, "Second", None).await;

        let roots = svc.list_items(None).await.unwrap();
        let ids: Vec<i64> = roots.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn item_exists_reflects_table() {
        let svc = test_service().await;
        assert!(!svc.item_exists(1).await.unwrap());
        let item = insert(&svc, ItemType::Course, "Course", None).await;
        assert!(svc.item_exists(item.id).await.unwrap());
    }
}
