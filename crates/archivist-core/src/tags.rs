//! Tag sidebar aggregation.
//!
//! One [`TagAggregator`] exists per page view. It only grows, and tags compare
//! as exact strings: `Cats` and `cats` are two different tags.

use std::collections::BTreeSet;

use crate::dom::Fragment;
use crate::paths::tag_filter_path;
use crate::route::NavigationContext;

#[derive(Debug, Default)]
pub struct TagAggregator {
    // BTreeSet<String> orders by bytes, which for UTF-8 is code point order
    tags: BTreeSet<String>,
}

impl TagAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `tags` to the set. Returns true if at least one of them was new.
    pub fn ingest<S: AsRef<str>>(&mut self, tags: &[S]) -> bool {
        let mut changed = false;
        for tag in tags {
            let tag = tag.as_ref();
            if !self.tags.contains(tag) {
                self.tags.insert(tag.to_string());
                changed = true;
            }
        }
        changed
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// All tags seen so far, sorted.
    pub fn sorted(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Build the tag sidebar: one link per tag to the gallery filtered by it.
    /// The tag currently used as filter is marked `active`.
    pub fn render(&self, ctx: &NavigationContext) -> Fragment {
        let active = ctx.tag_filter();
        let mut html = String::from("<ul class=\"tag-list\">");
        for tag in &self.tags {
            let class = if active.as_deref() == Some(tag.as_str()) {
                "tag active"
            } else {
                "tag"
            };
            html.push_str(&format!(
                "<li class=\"{}\"><a href=\"{}\">{}</a></li>",
                class,
                html_escape::encode_double_quoted_attribute(&tag_filter_path(ctx, tag)),
                html_escape::encode_text(tag)
            ));
        }
        html.push_str("</ul>");
        Fragment::new(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::resolve;

    #[test]
    fn test_ingest_reports_change() {
        let mut tags = TagAggregator::new();
        assert!(tags.ingest(&["cats", "dogs"]));
        assert!(!tags.ingest(&["dogs"]));
        assert!(!tags.ingest(&["cats", "dogs"]));
        assert!(tags.ingest(&["dogs", "birds"]));
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn test_ingest_empty_is_noop() {
        let mut tags = TagAggregator::new();
        let empty: [&str; 0] = [];
        assert!(!tags.ingest(&empty));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_exact_match_semantics() {
        let mut tags = TagAggregator::new();
        assert!(tags.ingest(&["cats"]));
        assert!(tags.ingest(&["Cats"]));
        assert!(tags.ingest(&["cats "]));
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn test_sorted_union_of_all_ingests() {
        let batches: Vec<Vec<&str>> = vec![
            vec!["zebra", "apple"],
            vec![],
            vec!["Mango", "apple"],
            vec!["éclair", "banana"],
            vec!["zebra"],
        ];
        let mut tags = TagAggregator::new();
        let mut expected: Vec<&str> = Vec::new();
        for batch in &batches {
            tags.ingest(batch);
            expected.extend(batch.iter().copied());
        }
        expected.sort();
        expected.dedup();

        assert_eq!(tags.sorted().collect::<Vec<_>>(), expected);
        assert_eq!(
            tags.sorted().collect::<Vec<_>>(),
            vec!["Mango", "apple", "banana", "zebra", "éclair"]
        );

        // The sidebar itself lists exactly that union, in that order
        let html = tags.render(&resolve("/gallery/42")).into_html();
        let rendered: Vec<&str> = html
            .split("</a>")
            .filter_map(|chunk| chunk.rsplit_once('>').map(|(_, tag)| tag))
            .filter(|tag| !tag.is_empty())
            .collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_links_and_order() {
        let ctx = resolve("/gallery/42");
        let mut tags = TagAggregator::new();
        tags.ingest(&["dogs", "big cats"]);

        assert_eq!(
            tags.render(&ctx).as_html(),
            "<ul class=\"tag-list\">\
             <li class=\"tag\"><a href=\"/gallery/42?tag=big%20cats\">big cats</a></li>\
             <li class=\"tag\"><a href=\"/gallery/42?tag=dogs\">dogs</a></li>\
             </ul>"
        );
    }

    #[test]
    fn test_render_marks_active_tag_and_escapes() {
        let ctx = resolve("/gallery/42?tag=dogs");
        let mut tags = TagAggregator::new();
        tags.ingest(&["dogs", "<b>"]);

        let html = tags.render(&ctx).into_html();
        assert!(html.contains("<li class=\"tag active\"><a href=\"/gallery/42?tag=dogs\">dogs</a></li>"));
        assert!(html.contains(">&lt;b&gt;</a>"));
        assert!(html.contains("href=\"/gallery/42?tag=%3Cb%3E\""));
    }
}
