//! Route table for the items API.

pub mod items;

use axum::Router;
use axum::routing::{get, post};

use lms_config::ApiConfig;

use crate::state::AppState;

/// Item routes, with the optional list and tree routes mounted per `api`.
pub fn item_routes(api: &ApiConfig) -> Router<AppState> {
    let collection = if api.enable_list {
        post(items::create_item).get(items::list_items)
    } else {
        post(items::create_item)
    };

    let router = Router::new().route("/items", collection).route(
        "/items/{id}",
        get(items::get_item).patch(items::update_item),
    );

    if api.enable_tree {
        router.route("/items/{id}/tree", get(items::get_item_tree))
    } else {
        router
    }
}
