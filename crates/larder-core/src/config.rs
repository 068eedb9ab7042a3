use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://world.openfoodfacts.org";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Read `LARDER_LOG_LEVEL`, loading `.env` first.
///
/// Never fails: logging starts before the rest of the configuration is
/// validated, and only commands that need those settings load them.
#[must_use]
pub fn load_log_level() -> String {
    dotenvy::dotenv().ok();
    log_level_from(|key| std::env::var(key))
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_i64 = |var: &str, default: &str| -> Result<i64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<i64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = log_level_from(&lookup);

    let catalog_base_url = or_default("LARDER_CATALOG_BASE_URL", DEFAULT_CATALOG_BASE_URL);
    if catalog_base_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "LARDER_CATALOG_BASE_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    let catalog_timeout_secs = parse_u64("LARDER_CATALOG_TIMEOUT_SECS", "30")?;
    let catalog_user_agent = or_default(
        "LARDER_CATALOG_USER_AGENT",
        "larder/0.1 (kitchen-inventory)",
    );

    let expiry_warning_days = parse_i64("LARDER_EXPIRY_WARNING_DAYS", "7")?;
    if expiry_warning_days < 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LARDER_EXPIRY_WARNING_DAYS".to_string(),
            reason: "must not be negative".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        catalog_base_url,
        catalog_timeout_secs,
        catalog_user_agent,
        expiry_warning_days,
    })
}

fn log_level_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    lookup("LARDER_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
