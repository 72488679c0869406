use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetsConfig {
    /// Directory served for every path outside the API. `None` leaves the
    /// asset layer unconfigured.
    #[serde(default = "default_static_dir")]
    pub static_dir: Option<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
        }
    }
}

fn default_static_dir() -> Option<String> {
    Some("web/static".to_string())
}
