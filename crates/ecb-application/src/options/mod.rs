//! Option resolution
//!
//! Standalone, side-effect free resolution of a factory's options from a
//! configuration tree. All inputs are passed explicitly.

pub mod resolver;

pub use resolver::resolve_options;
