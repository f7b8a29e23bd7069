//! Server configuration
//!
//! Layered the usual way: built-in defaults, then an optional `spanel.toml`
//! (any format the `config` crate understands) in the working directory,
//! then `SPANEL_*` environment variables. Nested keys use `__`.

use anyhow::Result;
use serde::Deserialize;

const DEFAULT_FILE: &str = "spanel";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_app_name")]
    pub app_name: String,

    #[serde(default = "default_version")]
    pub version: String,

    /// Cache backend probed by the health endpoint. Unset means disabled.
    #[serde(default)]
    pub redis_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            app_name: default_app_name(),
            version: default_version(),
            redis_url: None,
        }
    }
}

fn default_port() -> u16 {
    8080
}

fn default_app_name() -> String {
    "sPanel".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub fn load_config() -> Result<Config> {
    load_config_from(DEFAULT_FILE)
}

/// Loads configuration with `file` (extension optional) as the file layer.
pub fn load_config_from(file: &str) -> Result<Config> {
    let config = ::config::Config::builder()
        .set_default("port", i64::from(default_port()))?
        .set_default("app_name", default_app_name())?
        .set_default("version", default_version())?
        .add_source(::config::File::with_name(file).required(false))
        // SPANEL_PORT, SPANEL_REDIS_URL, ...
        .add_source(
            ::config::Environment::with_prefix("SPANEL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut config: Config = config.try_deserialize()?;
    if config.redis_url.as_deref().is_some_and(|url| url.trim().is_empty()) {
        config.redis_url = None;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for key in ["SPANEL_PORT", "SPANEL_APP_NAME", "SPANEL_REDIS_URL"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let config = load_config_from(&missing.to_string_lossy()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 8080);
        assert!(config.redis_url.is_none());
    }

    #[test]
    #[serial]
    fn test_file_then_env_override() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spanel.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "port = 9000").unwrap();
        writeln!(file, "app_name = \"Test Panel\"").unwrap();
        writeln!(file, "redis_url = \"redis://localhost:6379\"").unwrap();

        let stem = dir.path().join("spanel");
        let config = load_config_from(&stem.to_string_lossy()).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.app_name, "Test Panel");
        assert_eq!(config.redis_url.as_deref(), Some("redis://localhost:6379"));

        std::env::set_var("SPANEL_PORT", "9100");
        let config = load_config_from(&stem.to_string_lossy()).unwrap();
        clear_env();
        assert_eq!(config.port, 9100);
    }

    #[test]
    #[serial]
    fn test_blank_redis_url_is_disabled() {
        clear_env();
        std::env::set_var("SPANEL_REDIS_URL", " ");
        let config = load_config_from("definitely-not-here").unwrap();
        clear_env();
        assert!(config.redis_url.is_none());
    }
}
