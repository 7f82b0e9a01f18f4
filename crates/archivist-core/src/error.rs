use reqwest::StatusCode;

/// Failures surfaced by the record API.
///
/// None of these are shown to the viewer. Controllers log them and leave the
/// affected region in its pre-fetch state.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} for {path}")]
    Status { path: String, status: StatusCode },

    #[error("Failed to decode response for {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Route has no record id")]
    MissingRecordId,
}

pub type Result<T> = std::result::Result<T, ViewerError>;
