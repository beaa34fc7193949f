//! Configuration management
//!
//! Loads the application configuration with Figment from defaults, an
//! optional TOML file and `ECB__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig, ServiceDefinition};
