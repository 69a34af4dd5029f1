use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
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

    let env = parse_environment(&or_default("TREADPOINT_ENV", "development"));

    let bind_addr = parse_addr("TREADPOINT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("TREADPOINT_LOG_LEVEL", "info");
    let locations_path = PathBuf::from(or_default(
        "TREADPOINT_LOCATIONS_PATH",
        "./fixtures/locations.json",
    ));
    let prices_path = PathBuf::from(or_default(
        "TREADPOINT_PRICES_PATH",
        "./fixtures/prices.json",
    ));
    let categories_path = PathBuf::from(or_default(
        "TREADPOINT_CATEGORIES_PATH",
        "./config/categories.yaml",
    ));
    let search_debounce_ms = parse_u64("TREADPOINT_SEARCH_DEBOUNCE_MS", "150")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        locations_path,
        prices_path,
        categories_path,
        search_debounce_ms,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;
    use std::path::Path;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_development() {
        assert_eq!(parse_environment("development"), Environment::Development);
    }

    #[test]
    fn parse_environment_test() {
        assert_eq!(parse_environment("test"), Environment::Test);
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.locations_path, Path::new("./fixtures/locations.json"));
        assert_eq!(cfg.prices_path, Path::new("./fixtures/prices.json"));
        assert_eq!(cfg.categories_path, Path::new("./config/categories.yaml"));
        assert_eq!(cfg.search_debounce_ms, 150);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TREADPOINT_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TREADPOINT_BIND_ADDR"),
            "expected InvalidEnvVar(TREADPOINT_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_debounce_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TREADPOINT_SEARCH_DEBOUNCE_MS", "300");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.search_debounce_ms, 300);
    }

    #[test]
    fn build_app_config_debounce_invalid() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TREADPOINT_SEARCH_DEBOUNCE_MS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TREADPOINT_SEARCH_DEBOUNCE_MS"),
            "expected InvalidEnvVar(TREADPOINT_SEARCH_DEBOUNCE_MS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fixture_path_overrides() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TREADPOINT_LOCATIONS_PATH", "/data/locations.json");
        map.insert("TREADPOINT_PRICES_PATH", "/data/prices.json");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.locations_path, Path::new("/data/locations.json"));
        assert_eq!(cfg.prices_path, Path::new("/data/prices.json"));
    }
}
