//! Service container
//!
//! In-memory implementation of the `ServiceContainer` port plus the
//! bootstrap that wires it from an [`AppConfig`](crate::config::AppConfig).
//!
//! ```text
//! AppConfig ──► bootstrap() ──► ContainerBuilder
//!                                   │ register_instance("app.event_bus", ...)
//!                                   │ register_instance("app.message_factory", ...)
//!                                   ▼
//!                          InMemoryServiceContainer
//!                                   │ get("orders_callback")
//!                                   ▼
//!                   COMPONENT_FACTORIES["event_consumer_callback"]
//! ```

pub mod bootstrap;
pub mod container;

pub use bootstrap::bootstrap;
pub use container::{ContainerBuilder, InMemoryServiceContainer};
