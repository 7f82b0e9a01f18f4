//! URL builders for API endpoints, assets and page links.
//!
//! Guild and record ids are opaque path-safe tokens and go in as-is. Tag values
//! are user text and are percent-encoded.

use crate::constants::{DISCORD_CHANNELS_URL, TAG_PARAM};
use crate::route::NavigationContext;

/// `/api/query/{guild}`, forwarding the page query string verbatim.
pub fn query_path(ctx: &NavigationContext) -> String {
    if ctx.query_string.is_empty() {
        format!("/api/query/{}", ctx.guild)
    } else {
        format!("/api/query/{}?{}", ctx.guild, ctx.query_string)
    }
}

pub fn record_api_path(ctx: &NavigationContext, record_id: &str) -> String {
    format!("/api/record/{}/{}", ctx.guild, record_id)
}

pub fn asset_path(ctx: &NavigationContext, record_id: &str) -> String {
    format!("/asset/record/{}/{}", ctx.guild, record_id)
}

pub fn record_page_path(ctx: &NavigationContext, record_id: &str) -> String {
    format!("/record/{}/{}", ctx.guild, record_id)
}

pub fn gallery_page_path(ctx: &NavigationContext) -> String {
    format!("/gallery/{}", ctx.guild)
}

/// Gallery page filtered by one tag.
pub fn tag_filter_path(ctx: &NavigationContext, tag: &str) -> String {
    format!(
        "{}?{}={}",
        gallery_page_path(ctx),
        TAG_PARAM,
        urlencoding::encode(tag)
    )
}

/// Deep link to the message a record was archived from.
pub fn discord_message_url(guild: &str, channel: &str, message: &str) -> String {
    format!("{}/{}/{}/{}", DISCORD_CHANNELS_URL, guild, channel, message)
}
