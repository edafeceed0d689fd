use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod record;

pub use app_config::{AppConfig, DEFAULT_USER_AGENT};
pub use config::{load_app_config, load_app_config_from_env};
pub use record::ShopRecord;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("invalid page range: start page {start_page} is greater than end page {end_page}")]
    InvalidPageRange { start_page: u32, end_page: u32 },
}
