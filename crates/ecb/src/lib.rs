//! # Event Consumer Callback Factory
//!
//! Builds AMQP event consumer callbacks from configuration. A factory is
//! bound to an identifier, reads
//! `prooph.humus-amqp-producer.event_consumer_callback.<identifier>` from
//! the container's configuration, merges it over default service keys
//! and fetches the event bus and message factory from the container.
//!
//! ## Example
//!
//! ```ignore
//! use ecb::prelude::*;
//!
//! let config = ConfigLoader::new().with_config_path("ecb.toml").load()?;
//! let container = bootstrap(&config)?
//!     .register_instance("app.event_bus", event_bus)
//!     .register_instance("app.message_factory", message_factory)
//!     .build();
//!
//! let callback = EventConsumerCallbackFactory::new("orders").create(&container)?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, value objects and ports
//! - `application` - option resolution, assembly and the factory registry
//! - `infrastructure` - in-memory container, configuration and logging

/// Domain layer - errors, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use ecb_domain::*;
}

/// Application layer - factories, option resolution and registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use ecb_application::*;
}

/// Infrastructure layer - container, configuration and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use ecb_infrastructure::*;
}

/// Commonly used items
pub mod prelude {
    pub use ecb_application::{
        EventConsumerCallback, EventConsumerCallbackFactory, FactoryArgument, assemble,
        resolve_options,
    };
    pub use ecb_domain::ports::{
        DomainMessage, EventBus, MessageFactory, Service, ServiceContainer, ServiceContainerExt,
        into_service,
    };
    pub use ecb_domain::{
        ConfigTree, DefaultOptions, DimensionPath, Error, Identifier, OptionsBag, Result,
    };
    pub use ecb_infrastructure::{
        AppConfig, ConfigLoader, ContainerBuilder, InMemoryServiceContainer, bootstrap,
    };
}

pub use ecb_domain::{Error, Result};
