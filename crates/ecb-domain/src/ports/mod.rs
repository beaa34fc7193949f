//! Domain Port Interfaces
//!
//! Contracts the factory consumes without knowing their implementations.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ServiceContainer`] | Resolves a string key to a registered instance |
//! | [`EventBus`] | Dispatch capability handed to the event consumer callback |
//! | [`MessageFactory`] | Message construction capability handed to the callback |

/// Service container port
pub mod container;
/// Messaging collaborator ports
pub mod messaging;

pub use container::{Service, ServiceContainer, ServiceContainerExt, into_service};
pub use messaging::{DomainMessage, EventBus, MessageFactory};
