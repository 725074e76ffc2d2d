//! Application settings and configuration management

use crate::error::{ApiError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
///
/// Immutable after load; the pieces are handed to the gateway and poller at
/// construction rather than read from ambient global state.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub refresh: RefreshConfig,
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Enforced deadline for every request issued by the gateway.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout() -> u64 {
    10_000
}

/// Refresh intervals for the polling loops
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshConfig {
    #[serde(default = "default_metrics_interval")]
    pub metrics_interval_secs: u64,
    #[serde(default = "default_simulation_poll")]
    pub simulation_poll_secs: u64,
    #[serde(default = "default_innovation_interval")]
    pub innovation_interval_secs: u64,
}

fn default_metrics_interval() -> u64 {
    30
}

fn default_simulation_poll() -> u64 {
    5
}

fn default_innovation_interval() -> u64 {
    15
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "plain".to_string()
}

impl Settings {
    /// Load settings from configuration files and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/default.toml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            // Start with default values
            .set_default("api.base_url", "http://localhost:5000")?
            .set_default("api.request_timeout_ms", 10_000)?
            .set_default("refresh.metrics_interval_secs", 30)?
            .set_default("refresh.simulation_poll_secs", 5)?
            .set_default("refresh.innovation_interval_secs", 15)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "plain")?
            // Load from configuration file
            .add_source(
                File::with_name(path.as_ref().to_str().unwrap_or("config/default"))
                    .required(false),
            )
            // Override with environment variables (prefixed with OPS_CONSOLE_)
            .add_source(
                Environment::with_prefix("OPS_CONSOLE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            return Err(ApiError::Config(config::ConfigError::Message(
                "api.base_url cannot be empty".to_string(),
            )));
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(ApiError::Config(config::ConfigError::Message(format!(
                "api.base_url '{}' must start with http:// or https://",
                self.api.base_url
            ))));
        }
        if self.api.request_timeout_ms == 0 {
            return Err(ApiError::Config(config::ConfigError::Message(
                "api.request_timeout_ms cannot be 0".to_string(),
            )));
        }

        let intervals = [
            ("refresh.metrics_interval_secs", self.refresh.metrics_interval_secs),
            ("refresh.simulation_poll_secs", self.refresh.simulation_poll_secs),
            (
                "refresh.innovation_interval_secs",
                self.refresh.innovation_interval_secs,
            ),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(ApiError::Config(config::ConfigError::Message(format!(
                    "{name} cannot be 0"
                ))));
            }
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: default_base_url(),
                request_timeout_ms: default_request_timeout(),
            },
            refresh: RefreshConfig {
                metrics_interval_secs: default_metrics_interval(),
                simulation_poll_secs: default_simulation_poll(),
                innovation_interval_secs: default_innovation_interval(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "http://localhost:5000");
        assert_eq!(settings.api.request_timeout_ms, 10_000);
        assert_eq!(settings.refresh.metrics_interval_secs, 30);
        assert_eq!(settings.refresh.simulation_poll_secs, 5);
        assert_eq!(settings.refresh.innovation_interval_secs, 15);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from_path("does/not/exist.toml").unwrap();
        assert_eq!(settings.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"http://dashboard.internal:8000\"\nrequest_timeout_ms = 2500\n\n[refresh]\nmetrics_interval_secs = 60\n"
        )
        .unwrap();

        let settings = Settings::load_from_path(file.path()).unwrap();
        assert_eq!(settings.api.base_url, "http://dashboard.internal:8000");
        assert_eq!(settings.api.request_timeout_ms, 2500);
        assert_eq!(settings.refresh.metrics_interval_secs, 60);
        // Untouched sections keep their defaults
        assert_eq!(settings.refresh.simulation_poll_secs, 5);
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut settings = Settings::default();
        settings.api.base_url = "localhost:5000".to_string();
        assert!(settings.validate().is_err());

        settings.api.base_url = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_intervals() {
        let mut settings = Settings::default();
        settings.refresh.simulation_poll_secs = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.api.request_timeout_ms = 0;
        assert!(settings.validate().is_err());
    }
}
