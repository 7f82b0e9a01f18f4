//! Page location parsing.
//!
//! Every page of the archive viewer derives its navigation state from the URL it
//! was loaded with: `/gallery/{guild}?{query}` or `/record/{guild}/{id}`. No id
//! validation happens here; a bad guild or record id only shows up later as a
//! failed fetch.

use serde::Serialize;

use crate::constants::TAG_PARAM;

/// Which view the first path segment selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Gallery,
    Record,
    Unknown,
}

impl PageKind {
    fn from_segment(segment: &str) -> Self {
        match segment {
            "gallery" => PageKind::Gallery,
            "record" => PageKind::Record,
            _ => PageKind::Unknown,
        }
    }
}

/// Navigation state for one page load. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationContext {
    pub kind: PageKind,
    /// Empty when the location has no guild segment
    pub guild: String,
    pub record_id: Option<String>,
    /// Raw query string without the leading `?`
    pub query_string: String,
}

impl NavigationContext {
    /// Value of the `tag` filter in the query string, if any.
    pub fn tag_filter(&self) -> Option<String> {
        self.query_string
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == TAG_PARAM)
            .map(|(_, value)| {
                let value = value.replace('+', " ");
                urlencoding::decode(&value)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or(value)
            })
    }
}

/// Resolve a page location into its navigation context.
///
/// Accepts `path?query` as well as an absolute URL; scheme, host and any
/// `#fragment` are dropped.
pub fn resolve(location: &str) -> NavigationContext {
    let location = strip_origin(location);
    let location = location
        .split_once('#')
        .map_or(location, |(before, _)| before);

    let (path, query_string) = location
        .split_once('?')
        .unwrap_or((location, ""));

    // Segments are positional: `/record//7` has an empty guild, not guild "7"
    let path = path.strip_prefix('/').unwrap_or(path);
    let mut segments = path.split('/');
    let kind = segments
        .next()
        .filter(|s| !s.is_empty())
        .map_or(PageKind::Unknown, PageKind::from_segment);
    let guild = segments.next().unwrap_or_default().to_string();
    let record_id = segments
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    NavigationContext {
        kind,
        guild,
        record_id,
        query_string: query_string.to_string(),
    }
}

fn strip_origin(location: &str) -> &str {
    if location.starts_with('/') {
        return location;
    }
    match location.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |idx| &rest[idx..]),
        None => location,
    }
}
