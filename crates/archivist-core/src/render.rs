//! HTML for one fetched record.
//!
//! Two variants: the gallery thumbnail that fills a pre-created placeholder, and
//! the record page detail that fills the main and sidebar regions. Both feed the
//! record's tags to the page's [`TagAggregator`] and report whether the tag
//! sidebar is now stale.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::constants::{CAPTION_LIMIT, DISCORD_ICON_URL, ELLIPSIS, THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH};
use crate::dom::{Document, Fragment, Region};
use crate::models::RecordDetail;
use crate::paths;
use crate::route::NavigationContext;
use crate::tags::TagAggregator;

/// Cut a caption to [`CAPTION_LIMIT`] characters, marking the cut with an ellipsis.
pub fn truncate_caption(caption: &str) -> String {
    if caption.chars().count() <= CAPTION_LIMIT {
        return caption.to_string();
    }
    let mut truncated: String = caption.chars().take(CAPTION_LIMIT).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Gallery tile: linked thumbnail, the record's own tags and its truncated caption.
pub fn thumbnail(ctx: &NavigationContext, record: &RecordDetail) -> Fragment {
    let asset = paths::asset_path(ctx, &record.id);
    let page = paths::record_page_path(ctx, &record.id);

    let mut html = format!(
        "<a target=\"_blank\" href=\"{}\"><img src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\"></a>",
        attr(&page),
        attr(&asset),
        attr(&record.caption),
        THUMBNAIL_WIDTH,
        THUMBNAIL_HEIGHT
    );

    html.push_str("<div class=\"tags\">");
    for tag in &record.tags {
        html.push_str(&format!(
            "<div class=\"tag\"><a href=\"{}\">{}</a></div>",
            attr(&paths::tag_filter_path(ctx, tag)),
            text(tag)
        ));
    }
    html.push_str("</div>");

    html.push_str(&format!(
        "<div class=\"desc\">{}</div>",
        text(&truncate_caption(&record.caption))
    ));

    Fragment::new(html)
}

/// Record page content, split by the region it goes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub main: Fragment,
    pub sidebar: Fragment,
}

pub fn detail(ctx: &NavigationContext, record: &RecordDetail) -> DetailView {
    let asset = paths::asset_path(ctx, &record.id);

    let mut main = String::new();
    if !record.caption.is_empty() {
        main.push_str(&format!(
            "<div class=\"caption\">{}</div>",
            text(&record.caption)
        ));
    }
    main.push_str(&format!(
        "<a target=\"_blank\" href=\"{}\"><img class=\"record\" src=\"{}\" alt=\"{}\"></a>",
        attr(&asset),
        attr(&asset),
        attr(&record.caption)
    ));

    let link = paths::discord_message_url(&record.guild, &record.channel, &record.message);
    let mut sidebar = format!(
        "<div class=\"source\"><a target=\"_blank\" href=\"{}\">\
         <img class=\"icon\" src=\"{}\" alt=\"Discord\" width=\"24\" height=\"24\">\
         Open in Discord</a></div>",
        attr(&link),
        DISCORD_ICON_URL
    );
    if let Some(time) = record.time {
        sidebar.push_str(&format!(
            "<div class=\"posted\">Posted {}</div>",
            time.format("%Y-%m-%d %H:%M UTC")
        ));
    }

    DetailView {
        main: Fragment::new(main),
        sidebar: Fragment::new(sidebar),
    }
}

/// Fill a gallery placeholder and ingest the record's tags.
/// Returns true when the tag sidebar needs a rebuild.
pub fn fill_thumbnail<D: Document>(
    doc: &mut D,
    container: &D::Container,
    ctx: &NavigationContext,
    record: &RecordDetail,
    tags: &mut TagAggregator,
) -> bool {
    doc.fill(container, thumbnail(ctx, record));
    tags.ingest(&record.tags)
}

/// Write the record page regions and ingest the record's tags.
/// Returns true when the tag sidebar needs a rebuild.
pub fn show_detail<D: Document>(
    doc: &mut D,
    ctx: &NavigationContext,
    record: &RecordDetail,
    tags: &mut TagAggregator,
) -> bool {
    let view = detail(ctx, record);
    doc.replace_region(Region::Main, view.main);
    doc.replace_region(Region::Sidebar, view.sidebar);
    tags.ingest(&record.tags)
}
