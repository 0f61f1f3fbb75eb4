use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub keys: KeysConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Secret generation settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeysConfig {
    /// Prefix prepended to generated secrets; none by default
    #[serde(default)]
    pub secret_prefix: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load `config/default`, then `config/local`, then `APP__*` variables
    /// from the process environment. Every file is optional.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"), None)
    }

    /// Load from `dir`. When `env` is given it replaces the process
    /// environment as the source of `APP__*` variables.
    pub fn load_from(
        dir: &Path,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };

        let config = config::Config::builder()
            .add_source(file("default"))
            .add_source(file("local"))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        config.try_deserialize()
    }
}
