//! Configuration types

use std::collections::BTreeMap;
use std::path::PathBuf;

use ecb_domain::value_objects::ConfigTree;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Root configuration
///
/// `logging` and `services` are read by the infrastructure; every other
/// top-level key ends up in `tree`, which is what factories see as their
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Service keys wired to named component factories
    #[serde(default)]
    pub services: BTreeMap<String, ServiceDefinition>,

    /// Factory configuration, keyed by dimension segments
    #[serde(flatten)]
    pub tree: ConfigTree,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    pub json_format: bool,

    /// Daily-rolling log file; stdout only when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Service key resolved by calling a registered component factory
///
/// ```toml
/// [services.orders_callback]
/// factory = "event_consumer_callback"
/// identifier = "orders"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Name of the registered component factory
    pub factory: String,
    /// Identifier the factory is bound to
    pub identifier: String,
}

impl ServiceDefinition {
    /// Create a service definition
    pub fn new(factory: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            factory: factory.into(),
            identifier: identifier.into(),
        }
    }
}
