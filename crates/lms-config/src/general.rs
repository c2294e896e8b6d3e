//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_app_name() -> String {
    "Learning Management Service".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Service name reported in logs at startup.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Log at `debug` by default instead of `info`.
    #[serde(default)]
    pub debug: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            debug: false,
        }
    }
}
