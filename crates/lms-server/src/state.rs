//! Shared state for all item handlers.

use std::sync::Arc;

use lms_db::service::LmsService;

#[derive(Clone)]
pub struct AppState {
    /// Item store shared by every request.
    pub service: Arc<LmsService>,

    /// Key callers must present as a bearer token. Empty means no key is
    /// configured and every request is rejected.
    pub api_key: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(service: LmsService, api_key: &str) -> Self {
        Self {
            service: Arc::new(service),
            api_key: Arc::from(api_key),
        }
    }
}
