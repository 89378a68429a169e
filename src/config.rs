//! Configuration System
//!
//! Loads host configuration from a TOML file and environment variables.
//! Every field has a default, so an empty file (or no file) is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Where the site's files live
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Built browser bundle (`trunk build` output)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    /// Public assets such as `images/me.jpg`
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("linkmee-ui/dist")
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl SiteConfig {
    pub fn index_html(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    pub fn profile_image(&self, image_path: &str) -> PathBuf {
        self.assets_dir.join(image_path.trim_start_matches('/'))
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::Invalid {
                field: "logging.format",
                value: s.to_string(),
            }),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the host cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "server.request_timeout_secs",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Defaults with environment overrides
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        for path in Self::search_paths() {
            if path.exists() {
                match Self::load_with_env(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Default config file locations, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("linkmee").join("config.toml")),
            Some(PathBuf::from("/etc/linkmee/config.toml")),
            Some(PathBuf::from("./linkmee.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `LINKMEE_*` overrides from any variable source
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("LINKMEE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("LINKMEE_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid LINKMEE_PORT {:?}", port),
            }
        }

        if let Some(dir) = var("LINKMEE_DIST_DIR") {
            self.site.dist_dir = PathBuf::from(dir);
        }
        if let Some(dir) = var("LINKMEE_ASSETS_DIR") {
            self.site.assets_dir = PathBuf::from(dir);
        }

        if let Some(level) = var("LINKMEE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("LINKMEE_LOG_FORMAT") {
            match format.parse() {
                Ok(f) => self.logging.format = f,
                Err(e) => tracing::warn!("{}", e),
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {field}: {value:?}")]
    Invalid { field: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Linkmee Configuration
#
# Environment variables override these settings:
# - LINKMEE_HOST
# - LINKMEE_PORT
# - LINKMEE_DIST_DIR
# - LINKMEE_ASSETS_DIR
# - LINKMEE_LOG_LEVEL
# - LINKMEE_LOG_FORMAT

[server]
# Address to bind to
host = "0.0.0.0"

# Port to listen on
port = 8084

# Request timeout in seconds
request_timeout_secs = 30

[site]
# Built browser bundle (output of `trunk build` in linkmee-ui)
dist_dir = "linkmee-ui/dist"

# Public assets; the profile image is read from <assets_dir>/images/me.jpg
assets_dir = "public"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
