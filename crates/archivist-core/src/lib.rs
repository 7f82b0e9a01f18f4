pub mod api;
pub mod config;
pub mod constants;
pub mod dom;
pub mod error;
pub mod gallery;
pub mod models;
pub mod page;
pub mod paths;
pub mod record_page;
pub mod render;
pub mod route;
pub mod tags;
pub mod tracing_setup;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{HttpRecordApi, RecordApi};
pub use config::ViewerConfig;
pub use dom::{Document, Fragment, HtmlDocument, Region};
pub use error::ViewerError;
pub use gallery::{FanoutReport, GalleryController};
pub use models::RecordDetail;
pub use page::load_page;
pub use record_page::RecordPageController;
pub use route::{resolve, NavigationContext, PageKind};
pub use tags::TagAggregator;
