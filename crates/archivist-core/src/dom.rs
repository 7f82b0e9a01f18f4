//! Document abstraction the controllers write into.
//!
//! A page has three named regions. Gallery placeholders are appended to
//! [`Region::Main`] in list order and handed back as owned handles, so a fetch
//! continuation fills exactly the container that was reserved for it without
//! any lookup by id string.

use std::collections::HashMap;
use std::fmt::{self, Write as _};

/// A rendered chunk of HTML. Content is escaped by whoever builds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_html(&self) -> &str {
        &self.0
    }

    pub fn into_html(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Gallery grid or the record's caption and image
    Main,
    /// Record provenance block
    Sidebar,
    /// Tag list, rebuilt whenever a new tag shows up
    Tags,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Main, Region::Sidebar, Region::Tags];

    pub fn element_id(self) -> &'static str {
        match self {
            Region::Main => "view",
            Region::Sidebar => "sidebar",
            Region::Tags => "tags",
        }
    }
}

/// The mounted page the view pipeline populates.
pub trait Document {
    /// Owned handle to one placeholder container.
    type Container: Clone;

    /// Append an empty container for `record_id` to the main region.
    fn create_placeholder(&mut self, record_id: &str) -> Self::Container;

    /// Replace the content of a placeholder container.
    fn fill(&mut self, container: &Self::Container, fragment: Fragment);

    /// Replace the whole content of a named region.
    fn replace_region(&mut self, region: Region, fragment: Fragment);
}

/// Handle into an [`HtmlDocument`]'s placeholder list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHandle(usize);

#[derive(Debug, Clone)]
struct Placeholder {
    record_id: String,
    content: Option<Fragment>,
}

/// In-memory document that serializes to static HTML.
///
/// Placeholders are rendered inside the main region after any fragment written
/// there directly.
#[derive(Debug, Default)]
pub struct HtmlDocument {
    placeholders: Vec<Placeholder>,
    regions: HashMap<Region, Fragment>,
    writes: HashMap<Region, usize>,
}

impl HtmlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record ids of all placeholders, in creation order.
    pub fn placeholder_ids(&self) -> Vec<&str> {
        self.placeholders
            .iter()
            .map(|p| p.record_id.as_str())
            .collect()
    }

    /// Content of the placeholder reserved for `record_id`; `None` while unfilled.
    pub fn container(&self, record_id: &str) -> Option<&Fragment> {
        self.placeholders
            .iter()
            .find(|p| p.record_id == record_id)
            .and_then(|p| p.content.as_ref())
    }

    pub fn region(&self, region: Region) -> Option<&Fragment> {
        self.regions.get(&region)
    }

    /// How many times `region` has been replaced.
    pub fn region_writes(&self, region: Region) -> usize {
        self.writes.get(&region).copied().unwrap_or(0)
    }

    pub fn filled_count(&self) -> usize {
        self.placeholders.iter().filter(|p| p.content.is_some()).count()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for region in Region::ALL {
            // Writing into a String cannot fail
            let _ = write!(html, "<div id=\"{}\">", region.element_id());
            if let Some(fragment) = self.regions.get(&region) {
                let _ = write!(html, "{}", fragment);
            }
            if region == Region::Main {
                for placeholder in &self.placeholders {
                    let _ = write!(
                        html,
                        "<div class=\"gallery\" data-record=\"{}\">",
                        html_escape::encode_double_quoted_attribute(&placeholder.record_id)
                    );
                    if let Some(content) = &placeholder.content {
                        let _ = write!(html, "{}", content);
                    }
                    html.push_str("</div>");
                }
            }
            html.push_str("</div>\n");
        }
        html
    }
}

impl Document for HtmlDocument {
    type Container = ContainerHandle;

    fn create_placeholder(&mut self, record_id: &str) -> ContainerHandle {
        self.placeholders.push(Placeholder {
            record_id: record_id.to_string(),
            content: None,
        });
        ContainerHandle(self.placeholders.len() - 1)
    }

    fn fill(&mut self, container: &ContainerHandle, fragment: Fragment) {
        if let Some(placeholder) = self.placeholders.get_mut(container.0) {
            placeholder.content = Some(fragment);
        }
    }

    fn replace_region(&mut self, region: Region, fragment: Fragment) {
        self.regions.insert(region, fragment);
        *self.writes.entry(region).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_keep_creation_order() {
        let mut doc = HtmlDocument::new();
        let a = doc.create_placeholder("a");
        let b = doc.create_placeholder("b");
        doc.fill(&b, Fragment::new("<p>b</p>"));

        assert_eq!(doc.placeholder_ids(), vec!["a", "b"]);
        assert_eq!(doc.container("a"), None);
        assert_eq!(doc.container("b").map(Fragment::as_html), Some("<p>b</p>"));

        doc.fill(&a, Fragment::new("<p>a</p>"));
        assert_eq!(doc.filled_count(), 2);
    }

    #[test]
    fn test_replace_region_counts_writes() {
        let mut doc = HtmlDocument::new();
        assert_eq!(doc.region_writes(Region::Tags), 0);
        doc.replace_region(Region::Tags, Fragment::new("x"));
        doc.replace_region(Region::Tags, Fragment::new("y"));
        assert_eq!(doc.region_writes(Region::Tags), 2);
        assert_eq!(doc.region(Region::Tags).map(Fragment::as_html), Some("y"));
    }

    #[test]
    fn test_fragment_displays_its_html() {
        let fragment = Fragment::new("<b>x</b>");
        assert_eq!(fragment.to_string(), "<b>x</b>");
        assert_eq!(format!("[{}]", fragment), "[<b>x</b>]");
    }

    #[test]
    fn test_to_html_layout() {
        let mut doc = HtmlDocument::new();
        let a = doc.create_placeholder("a");
        doc.create_placeholder("b");
        doc.fill(&a, Fragment::new("A"));
        doc.replace_region(Region::Sidebar, Fragment::new("S"));

        let html = doc.to_html();
        assert!(html.contains(
            "<div id=\"view\"><div class=\"gallery\" data-record=\"a\">A</div>\
             <div class=\"gallery\" data-record=\"b\"></div></div>"
        ));
        assert!(html.contains("<div id=\"sidebar\">S</div>"));
        assert!(html.contains("<div id=\"tags\"></div>"));
    }
}
