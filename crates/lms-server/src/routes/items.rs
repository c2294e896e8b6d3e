//! Item handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::info;

use lms_core::entities::{Item, NewItem, StoredItem};
use lms_core::enums::ItemType;
use lms_db::updates::item::{ItemUpdate, ItemUpdateBuilder};

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /items`.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl From<CreateItemRequest> for NewItem {
    fn from(request: CreateItemRequest) -> Self {
        let item = Self::new(request.item_type, request.title).description(request.description);
        match request.parent_id {
            Some(parent_id) => item.parent(parent_id),
            None => item,
        }
    }
}

/// Body of `PATCH /items/{id}`. Both mutable fields are replaced.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl From<UpdateItemRequest> for ItemUpdate {
    fn from(request: UpdateItemRequest) -> Self {
        ItemUpdateBuilder::new()
            .title(request.title)
            .description(request.description)
            .build()
    }
}

#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    pub parent_id: Option<i64>,
}

/// `POST /items`
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StoredItem>), ApiError> {
    let Json(payload) = payload?;
    let item = state.service.create_item(&payload.into()).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// `GET /items/{id}`
pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StoredItem>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.service.get_item(id).await?))
}

/// `PATCH /items/{id}`
pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<StoredItem>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let item = state.service.update_item(id, &payload.into()).await?;
    Ok(Json(item))
}

/// `GET /items?parent_id=N`, or root items without `parent_id`.
pub async fn list_items(
    State(state): State<AppState>,
    query: Result<Query<ListItemsQuery>, QueryRejection>,
) -> Result<Json<Vec<StoredItem>>, ApiError> {
    let Query(query) = query?;
    Ok(Json(state.service.list_items(query.parent_id).await?))
}

/// `GET /items/{id}/tree`
pub async fn get_item_tree(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = id?;
    let tree = state.service.get_item_tree(id).await?;
    info!(id, kind = %tree.kind(), children = tree.child_count(), "item tree served");
    Ok(Json(tree))
}
