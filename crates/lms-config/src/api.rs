//! Optional item routes.
//!
//! Only create, read, and update are served by default. Listing children and
//! rendering the domain tree are opt-in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Serve `GET /items?parent_id=N`.
    #[serde(default)]
    pub enable_list: bool,

    /// Serve `GET /items/{id}/tree`.
    #[serde(default)]
    pub enable_tree: bool,
}
