//! Domain Value Objects
//!
//! Immutable value objects describing where a factory finds its
//! configuration and what it resolves from it.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`DimensionPath`] | Fixed vendor/package/component-type address of a configuration subtree |
//! | [`Identifier`] | Caller-chosen key scoping one entry under a dimension path |
//! | [`ConfigTree`] | Nested configuration mapping supplied by the container |
//! | [`DefaultOptions`] | Declared fallback service references |
//! | [`OptionsBag`] | Merged explicit configuration over defaults |

/// Configuration tree value object
pub mod config_tree;
/// Dimension path value object
pub mod dimension;
/// Factory identifier value object
pub mod identifier;
/// Default options and resolved options bag
pub mod options;

pub use config_tree::ConfigTree;
pub use dimension::DimensionPath;
pub use identifier::Identifier;
pub use options::{DefaultOptions, OptionsBag};
