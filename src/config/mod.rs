//! Configuration management

pub mod settings;

pub use settings::{ApiConfig, LoggingConfig, RefreshConfig, Settings};
