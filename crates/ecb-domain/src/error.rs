//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the event consumer callback factory
///
/// Every variant carries the context a caller needs to branch on the
/// failure (path, identifier, service key) instead of a plain message.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument provided to a factory entry point
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Neither explicit configuration nor defaults satisfy resolution
    #[error("Configuration missing at '{path}' for identifier '{identifier}'")]
    ConfigurationMissing {
        /// Dotted path of the first segment or option that could not be found
        path: String,
        /// Identifier the factory is bound to
        identifier: String,
    },

    /// Configuration exists but has the wrong shape
    #[error("Invalid configuration at '{path}': {message}")]
    InvalidConfiguration {
        /// Dotted path of the offending node
        path: String,
        /// What was wrong with it
        message: String,
    },

    /// Service key is not registered in the container
    #[error("Service not found: {key}")]
    ServiceNotFound {
        /// The key that was requested
        key: String,
    },

    /// Service is registered but is not of the requested type
    #[error("Service '{key}' is not of type {expected}")]
    ServiceTypeMismatch {
        /// The key that was requested
        key: String,
        /// Name of the type the caller asked for
        expected: String,
    },

    /// Service definitions reference each other in a cycle
    #[error("Circular service dependency: {}", .chain.join(" -> "))]
    CircularDependency {
        /// Keys in resolution order, ending with the key seen twice
        chain: Vec<String>,
    },

    /// Factory name is not present in the component factory registry
    #[error("Unknown component factory '{name}'. Available factories: {available:?}")]
    UnknownFactory {
        /// Requested factory name
        name: String,
        /// Names of all registered factories
        available: Vec<String>,
    },

    /// Configuration loading error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Factory invocation errors
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration missing error
    pub fn configuration_missing<P: Into<String>, I: Into<String>>(path: P, identifier: I) -> Self {
        Self::ConfigurationMissing {
            path: path.into(),
            identifier: identifier.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration<P: Into<String>, S: Into<String>>(path: P, message: S) -> Self {
        Self::InvalidConfiguration {
            path: path.into(),
            message: message.into(),
        }
    }
}

// Container errors
impl Error {
    /// Create a service not found error
    pub fn service_not_found<S: Into<String>>(key: S) -> Self {
        Self::ServiceNotFound { key: key.into() }
    }

    /// Create a service type mismatch error
    pub fn service_type_mismatch<K: Into<String>, E: Into<String>>(key: K, expected: E) -> Self {
        Self::ServiceTypeMismatch {
            key: key.into(),
            expected: expected.into(),
        }
    }

    /// Create a circular dependency error
    pub fn circular_dependency(chain: Vec<String>) -> Self {
        Self::CircularDependency { chain }
    }

    /// Create an unknown factory error
    pub fn unknown_factory<S: Into<String>>(name: S, available: Vec<String>) -> Self {
        Self::UnknownFactory {
            name: name.into(),
            available,
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification
impl Error {
    /// Whether the error came from the container not knowing a key
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ServiceNotFound { .. })
    }

    /// Whether the error is about configuration shape or presence
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationMissing { .. }
                | Self::InvalidConfiguration { .. }
                | Self::CircularDependency { .. }
                | Self::Configuration { .. }
        )
    }
}
