pub mod config;
pub mod render;

pub use config::load_config;
pub use render::{render_page, route_json};
