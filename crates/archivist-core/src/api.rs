//! Record API seam.
//!
//! Controllers only see [`RecordApi`]. [`HttpRecordApi`] talks to the archive
//! server over HTTP; tests script their own implementations.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use crate::models::{RecordDetail, RecordIds};

/// Read-only access to the archive's JSON endpoints. Paths come from [`crate::paths`].
#[allow(async_fn_in_trait)]
pub trait RecordApi {
    /// `GET /api/query/...` returning the record ids of a gallery.
    async fn fetch_ids(&self, path: &str) -> Result<Vec<String>>;

    /// `GET /api/record/...` returning one record.
    async fn fetch_record(&self, path: &str) -> Result<RecordDetail>;
}

/// reqwest-backed client for a running archive server.
#[derive(Debug, Clone)]
pub struct HttpRecordApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecordApi {
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()?;
        Ok(Self::with_client(client, config.base_url()))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(%url, "fetching");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ViewerError::Status {
                path: path.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ViewerError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

impl RecordApi for HttpRecordApi {
    async fn fetch_ids(&self, path: &str) -> Result<Vec<String>> {
        let ids: RecordIds = self.get_json(path).await?;
        Ok(ids.0)
    }

    async fn fetch_record(&self, path: &str) -> Result<RecordDetail> {
        self.get_json(path).await
    }
}
