//! # lms-server
//!
//! HTTP surface of the LMS items service.
//!
//! Exposes the item store over three API-key guarded routes:
//! - `POST /items` creates a row
//! - `GET /items/{id}` reads a row
//! - `PATCH /items/{id}` replaces a row's title and description
//!
//! Listing children and fetching a typed domain tree are available behind
//! the `api.enable_list` and `api.enable_tree` config switches.

pub mod auth;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{LmsServer, build_router};
pub use state::AppState;
