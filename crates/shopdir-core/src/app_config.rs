use std::path::PathBuf;

/// Fixed desktop-browser `User-Agent` sent with every request, to reduce the
/// chance of being blocked by basic bot filters.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Runtime configuration for a scrape run.
///
/// Loaded from `SHOPDIR_*` environment variables (see [`crate::config`]);
/// the CLI may override individual fields from flags afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the paginated shop directory, e.g. `https://emalls.ir/Shops/`.
    pub base_url: String,
    /// First list page to scrape (inclusive, 1-based).
    pub start_page: u32,
    /// Last list page to scrape (inclusive).
    pub end_page: u32,
    /// Unconditional delay between shop detail fetches, in milliseconds.
    pub delay_ms: u64,
    /// Directory the per-page workbooks are written into.
    pub out_dir: PathBuf,
    /// Per-request timeout for list and detail fetches.
    pub request_timeout_secs: u64,
    /// `User-Agent` header value sent with every request.
    pub user_agent: String,
}
