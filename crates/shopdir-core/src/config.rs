use std::path::PathBuf;

use crate::app_config::{AppConfig, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed or the page range is
/// inverted.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful when
/// the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed or the page range is
/// inverted.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let base_url = or_default("SHOPDIR_BASE_URL", "https://emalls.ir/Shops/");
    let start_page = parse_u32("SHOPDIR_START_PAGE", "415")?;
    let end_page = parse_u32("SHOPDIR_END_PAGE", "499")?;
    let delay_ms = parse_u64("SHOPDIR_DELAY_MS", "1000")?;
    let out_dir = PathBuf::from(or_default("SHOPDIR_OUT_DIR", "."));
    let request_timeout_secs = parse_u64("SHOPDIR_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SHOPDIR_USER_AGENT", DEFAULT_USER_AGENT);

    if start_page == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPDIR_START_PAGE".to_string(),
            reason: "page numbers are 1-based; 0 is not a valid list page".to_string(),
        });
    }
    if start_page > end_page {
        return Err(ConfigError::InvalidPageRange {
            start_page,
            end_page,
        });
    }

    Ok(AppConfig {
        base_url,
        start_page,
        end_page,
        delay_ms,
        out_dir,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
