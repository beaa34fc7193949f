//! # Domain Layer
//!
//! Types and contracts of the event consumer callback factory: the
//! error taxonomy, configuration value objects and the ports the factory
//! consumes (service container, event bus, message factory).
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`constants`] | Dimension segments, option keys, well-known service keys |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`ports`] | Container and messaging capabilities |
//! | [`value_objects`] | Dimension path, identifier, configuration tree, options |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{ServiceContainer, ServiceContainerExt};
pub use value_objects::{ConfigTree, DefaultOptions, DimensionPath, Identifier, OptionsBag};
