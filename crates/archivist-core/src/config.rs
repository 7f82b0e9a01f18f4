use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Where the archive server lives and how long to wait for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ViewerConfig {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// Values set in `other` win.
    pub fn merge(self, other: ViewerConfig) -> Self {
        Self {
            base_url: other.base_url.or(self.base_url),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }
}
