use anyhow::{Context, Result};
use archivist_core::{load_page, resolve, HtmlDocument, HttpRecordApi, ViewerConfig};

/// Load `location` against the configured archive server and return the
/// populated document as HTML. Fetch failures only leave regions empty.
pub async fn render_page(config: &ViewerConfig, location: &str) -> Result<String> {
    let api = HttpRecordApi::new(config).context("Failed to build HTTP client")?;
    let mut doc = HtmlDocument::new();
    load_page(location, &api, &mut doc).await;
    Ok(doc.to_html())
}

/// Resolved navigation context of `location` as JSON.
pub fn route_json(location: &str, pretty: bool) -> Result<String> {
    let ctx = resolve(location);
    let json = if pretty {
        serde_json::to_string_pretty(&ctx)
    } else {
        serde_json::to_string(&ctx)
    };
    json.context("Failed to serialize navigation context")
}
