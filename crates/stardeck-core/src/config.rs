use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// NASA's shared, heavily rate-limited demo key.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

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
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("STARDECK_ENV", "development"))?;

    // The demo key is fine for local use but exhausts quickly under real traffic.
    let nasa_api_key = match (lookup("NASA_API_KEY"), &env) {
        (Ok(key), _) if !key.trim().is_empty() => key,
        (_, Environment::Production) => {
            return Err(ConfigError::MissingEnvVar("NASA_API_KEY".to_string()))
        }
        _ => DEMO_API_KEY.to_string(),
    };

    let log_level = or_default("STARDECK_LOG_LEVEL", "info");
    let images_base_url = or_default("STARDECK_IMAGES_BASE_URL", "https://images-api.nasa.gov");
    let apod_base_url = or_default(
        "STARDECK_APOD_BASE_URL",
        "https://api.nasa.gov/planetary/apod",
    );
    let cache_dir = PathBuf::from(or_default("STARDECK_CACHE_DIR", "./.stardeck-cache"));
    let queries_path = lookup("STARDECK_QUERIES_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let request_timeout_secs = parse_u64("STARDECK_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("STARDECK_USER_AGENT", "stardeck/0.1 (mission-explorer)");
    let max_concurrent_queries = parse_usize("STARDECK_MAX_CONCURRENT_QUERIES", "11")?;
    if max_concurrent_queries == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "STARDECK_MAX_CONCURRENT_QUERIES".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let mission_cache_ttl_secs = parse_u64("STARDECK_MISSION_CACHE_TTL_SECS", "86400")?;

    Ok(AppConfig {
        env,
        log_level,
        nasa_api_key,
        images_base_url,
        apod_base_url,
        cache_dir,
        queries_path,
        request_timeout_secs,
        user_agent,
        max_concurrent_queries,
        mission_cache_ttl_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STARDECK_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
