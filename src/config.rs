use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{GOOGLE_DEFAULT_REGION, GOOGLE_GEOCODE_URL};
use crate::error::{Result, ValidatorError};

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const CONFIG_PATH_VAR: &str = "ADDRESS_VALIDATOR_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub geocoding: GeocodingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub region: String,
    pub timeout_seconds: u64,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: GOOGLE_GEOCODE_URL.to_string(),
            region: GOOGLE_DEFAULT_REGION.to_string(),
            timeout_seconds: 10,
        }
    }
}

impl GeocodingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    /// Loads `.env`, then defaults, an optional TOML file, and environment
    /// overrides, in that order of precedence (last wins).
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_sources(|key| std::env::var(key).ok())
    }

    /// Same layering as `load`, reading variables through `env`.
    pub fn from_sources(env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match env(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(&PathBuf::from(path))?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };
        config.apply_env(env)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ValidatorError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = env("HOST") {
            self.server.host = host;
        }
        if let Some(port) = env("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ValidatorError::Config(format!("PORT must be a valid port number, got '{}'", port)))?;
        }
        if let Some(key) = env("ADDRESS_API_KEY") {
            self.geocoding.api_key = Some(key);
        }
        if let Some(url) = env("GEOCODING_BASE_URL") {
            self.geocoding.base_url = url;
        }
        if let Some(timeout) = env("GEOCODING_TIMEOUT_SECONDS") {
            self.geocoding.timeout_seconds = timeout.trim().parse().map_err(|_| {
                ValidatorError::Config(format!(
                    "GEOCODING_TIMEOUT_SECONDS must be a whole number of seconds, got '{}'",
                    timeout
                ))
            })?;
        }
        Ok(())
    }

    /// Fails when settings required to serve traffic are missing.
    pub fn validate(&self) -> Result<()> {
        let has_key = self
            .geocoding
            .api_key
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false);
        if !has_key {
            return Err(ValidatorError::Config(
                "ADDRESS_API_KEY is required. Please set it in your .env file.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| ValidatorError::Config(format!("Invalid bind address: {}", e)))
    }
}
