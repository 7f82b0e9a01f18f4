//! Application-wide constants
//!
//! Fixed URLs and rendering limits shared by the path builder and the
//! record renderer.

/// Default archive server used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default per-request timeout for the HTTP record API
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Discord brand icon shown next to the deep link on a record page.
/// See: https://discord.com/branding
pub const DISCORD_ICON_URL: &str = "https://discord.com/assets/f8389ca1a741a115313bede9ac02e2c0.svg";

/// Base of message deep links into Discord
pub const DISCORD_CHANNELS_URL: &str = "https://discord.com/channels";

/// Captions longer than this many characters are cut on thumbnails
pub const CAPTION_LIMIT: usize = 90;

/// Appended to a cut caption
pub const ELLIPSIS: &str = "...";

// Thumbnail box
pub const THUMBNAIL_WIDTH: u32 = 600;
pub const THUMBNAIL_HEIGHT: u32 = 400;

/// Query parameter carrying the tag filter on gallery pages
pub const TAG_PARAM: &str = "tag";
