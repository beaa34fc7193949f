//! # Infrastructure Layer
//!
//! Technical plumbing around the factory: a concrete service container,
//! configuration loading and logging.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (TOML + environment) |
//! | [`constants`] | Infrastructure constants |
//! | [`di`] | In-memory service container and bootstrap |
//! | [`error_ext`] | Context helpers mapping foreign errors into the domain error |
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::{ContainerBuilder, InMemoryServiceContainer, bootstrap};
pub use error_ext::ErrorContext;
