use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank values count as unset so `.env` templates can leave them empty.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let env = parse_environment(&or_default("TRIAGE_ENV", "development"))?;

    let raw_addr = or_default("TRIAGE_BIND_ADDR", "0.0.0.0:8000");
    let bind_addr = raw_addr
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "TRIAGE_BIND_ADDR".to_string(),
            reason: e.to_string(),
        })?;

    let log_level = or_default("TRIAGE_LOG_LEVEL", "info");
    let catalog_path = optional("TRIAGE_CATALOG_PATH").map(PathBuf::from);
    let analyzer_url = optional("TRIAGE_ANALYZER_URL");
    let sentiment_url = optional("TRIAGE_SENTIMENT_URL");

    let raw_timeout = or_default("TRIAGE_HTTP_TIMEOUT_SECS", "30");
    let http_timeout_secs = raw_timeout
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "TRIAGE_HTTP_TIMEOUT_SECS".to_string(),
            reason: e.to_string(),
        })?;
    if http_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRIAGE_HTTP_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    if env == Environment::Production && analyzer_url.is_none() {
        return Err(ConfigError::MissingEnvVar("TRIAGE_ANALYZER_URL".to_string()));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        catalog_path,
        analyzer_url,
        sentiment_url,
        http_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s.trim() {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TRIAGE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
