//! Frontend configuration
//!
//! Defaults are embedded as TOML; the mock-data switch can be flipped per browser
//! through localStorage (`use_mock_data = "true"`).

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Port of the backend on the same host the page was served from
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Serve fixtures from `shared::mock_data` instead of calling the backend
    pub use_mock: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 8080

[data]
use_mock = false

[logging]
level = "debug"
"#;

const MOCK_OVERRIDE_KEY: &str = "use_mock_data";

static CONFIG: Lazy<Config> = Lazy::new(|| match parse_config(DEFAULT_CONFIG) {
    Ok(config) => config,
    Err(e) => {
        log::error!("Invalid embedded config, using hardcoded values: {}", e);
        Config {
            api: ApiConfig { port: 8080 },
            data: DataConfig { use_mock: false },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    }
});

fn parse_config(source: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(source)
}

/// Loaded configuration
pub fn config() -> &'static Config {
    &CONFIG
}

/// Log level for `console_log`, `Info` if the configured value is not a level name
pub fn log_level() -> log::Level {
    config().logging.level.parse().unwrap_or(log::Level::Info)
}

/// Whether API calls should be answered with fixtures
pub fn use_mock_data() -> bool {
    resolve_mock_flag(config().data.use_mock, read_mock_override().as_deref())
}

fn read_mock_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(MOCK_OVERRIDE_KEY)
        .ok()?
}

fn resolve_mock_flag(default: bool, stored: Option<&str>) -> bool {
    match stored.map(str::trim) {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 8080);
        assert!(!config.data.use_mock);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_mock_override() {
        assert!(resolve_mock_flag(false, Some("true")));
        assert!(resolve_mock_flag(false, Some(" 1 ")));
        assert!(!resolve_mock_flag(true, Some("false")));
        assert!(resolve_mock_flag(true, Some("garbage")));
        assert!(!resolve_mock_flag(false, None));
    }
}
