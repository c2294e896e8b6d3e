//! Static API key configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Key clients must present as `Authorization: Bearer <key>`.
    ///
    /// Left empty, every request is rejected.
    #[serde(default)]
    pub api_key: String,
}

impl AuthConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
