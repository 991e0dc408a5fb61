//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `simiod.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Points document settings.
    pub points: PointsConfig,
    /// Identity reported in status snapshots.
    pub service: ServiceConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Directory of static web UI files served outside `/simio`.
    pub public_dir: PathBuf,
}

/// Points document configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PointsConfig {
    /// JSON file holding the points document.
    pub path: PathBuf,
    /// How often expired pulses are swept, in milliseconds.
    pub sweep_interval_ms: u64,
    /// Reload the document when the file is edited.
    pub watch: bool,
}

/// Service identity.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Host name reported as `host`; the machine host name when unset.
    pub host_name: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `simiod.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("simiod.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SIMIO_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("SIMIO_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("SIMIO_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("SIMIO_PUBLIC_DIR") {
            self.server.public_dir = PathBuf::from(val);
        }
        if let Some(val) = var("SIMIO_CONFIG") {
            self.points.path = PathBuf::from(val);
        }
        if let Some(val) = var("SIMIO_HOSTNAME") {
            self.service.host_name = Some(val);
        }
        if let Some(val) = var("SIMIO_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.points.sweep_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "sweep interval must be non-zero".to_string(),
            ));
        }
        if self.points.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "points path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.points.sweep_interval_ms)
    }

    /// Host name reported in status snapshots.
    ///
    /// Falls back to `HOSTNAME`, then `/etc/hostname`, then `localhost`.
    #[must_use]
    pub fn host_name(&self) -> String {
        self.service
            .host_name
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| std::env::var("HOSTNAME").ok())
            .or_else(|| {
                std::fs::read_to_string("/etc/hostname")
                    .ok()
                    .map(|name| name.trim().to_string())
            })
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "localhost".to_string())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            public_dir: PathBuf::from("/usr/local/share/house/public"),
        }
    }
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("simio.json"),
            sweep_interval_ms: 1000,
            watch: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
