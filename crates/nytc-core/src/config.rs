use crate::app_config::{AppConfig, IdStrategy, DEFAULT_GRAPHQL_URL, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
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
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// Every variable is optional; unset variables fall back to the defaults in
/// [`AppConfig::default`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("NYTC_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("NYTC_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "NYTC_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }
    let user_agent = or_default("NYTC_USER_AGENT", DEFAULT_USER_AGENT);
    let graphql_url = or_default("NYTC_GRAPHQL_URL", DEFAULT_GRAPHQL_URL);
    let id_strategy = or_default("NYTC_ID_STRATEGY", "pattern-then-metadata")
        .parse::<IdStrategy>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "NYTC_ID_STRATEGY".to_string(),
            reason,
        })?;

    Ok(AppConfig {
        log_level,
        request_timeout_secs,
        user_agent,
        graphql_url,
        id_strategy,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
