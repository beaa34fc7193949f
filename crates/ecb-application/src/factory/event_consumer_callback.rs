//! Event Consumer Callback Factory
//!
//! Reads its options from
//! `prooph.humus-amqp-producer.event_consumer_callback.<identifier>`:
//!
//! ```toml
//! [prooph.humus-amqp-producer.event_consumer_callback.orders]
//! event_bus = "app.event_bus"
//! message_factory = "app.message_factory"
//! ```
//!
//! Both options default to well-known service keys, so an identifier
//! without configuration still resolves.
//!
//! ## Usage
//!
//! ```ignore
//! // Bound explicitly
//! let callback = EventConsumerCallbackFactory::new("orders").create(&container)?;
//!
//! // Named call, e.g. from a service definition table
//! let callback = EventConsumerCallbackFactory::create_named(
//!     "orders",
//!     &[FactoryArgument::Container(&container)],
//! )?;
//! ```

use ecb_domain::constants::{
    CONTAINER_CAPABILITY, DEFAULT_EVENT_BUS_SERVICE, DEFAULT_MESSAGE_FACTORY_SERVICE,
    DIMENSION_EVENT_CONSUMER_CALLBACK, DIMENSION_PACKAGE, DIMENSION_VENDOR, OPTION_EVENT_BUS,
    OPTION_MESSAGE_FACTORY,
};
use ecb_domain::error::{Error, Result};
use ecb_domain::ports::{Service, ServiceContainer, ServiceContainerExt, into_service};
use ecb_domain::value_objects::{ConfigTree, DefaultOptions, DimensionPath, Identifier, OptionsBag};
use tracing::{debug, warn};

use crate::callback::EventConsumerCallback;
use crate::factory::arguments::FactoryArgument;
use crate::factory::assembler::assemble;
use crate::options::resolve_options;
use crate::registry::{COMPONENT_FACTORIES, ComponentFactoryEntry};

/// Factory for [`EventConsumerCallback`] bound to one identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventConsumerCallbackFactory {
    identifier: Identifier,
}

impl EventConsumerCallbackFactory {
    /// Configuration subtree of this factory type
    pub const DIMENSIONS: DimensionPath = DimensionPath::new(
        DIMENSION_VENDOR,
        DIMENSION_PACKAGE,
        DIMENSION_EVENT_CONSUMER_CALLBACK,
    );

    /// Options that must be present after resolution
    pub const MANDATORY_OPTIONS: [&'static str; 2] = [OPTION_EVENT_BUS, OPTION_MESSAGE_FACTORY];

    /// Bind a factory to `identifier`
    pub fn new(identifier: impl Into<Identifier>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// Identifier this factory is bound to
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Declared defaults for both collaborator references
    pub fn default_options() -> DefaultOptions {
        DefaultOptions::new()
            .with(OPTION_EVENT_BUS, DEFAULT_EVENT_BUS_SERVICE)
            .with(OPTION_MESSAGE_FACTORY, DEFAULT_MESSAGE_FACTORY_SERVICE)
    }

    /// Resolve this factory's options from `tree`
    pub fn options(&self, tree: &ConfigTree) -> Result<OptionsBag> {
        resolve_options(
            tree,
            &Self::DIMENSIONS,
            &self.identifier,
            &Self::default_options(),
            &Self::MANDATORY_OPTIONS,
        )
    }

    /// Build a callback from `container`
    ///
    /// Reads the configuration tree from the container, resolves the
    /// options and assembles the callback. The first failure aborts.
    pub fn create(&self, container: &dyn ServiceContainer) -> Result<EventConsumerCallback> {
        debug!(identifier = %self.identifier, "Creating event consumer callback");

        let result = container
            .config()
            .and_then(|tree| self.options(&tree))
            .and_then(|options| assemble(&options, container));

        if let Err(e) = &result {
            warn!(
                identifier = %self.identifier,
                error = %e,
                "Failed to create event consumer callback"
            );
        }
        result
    }

    /// Build a callback for identifier `name` from a positional argument list
    ///
    /// The first argument must be a [`FactoryArgument::Container`];
    /// anything else fails with [`Error::InvalidArgument`].
    pub fn create_named(
        name: &str,
        arguments: &[FactoryArgument<'_>],
    ) -> Result<EventConsumerCallback> {
        let container = arguments
            .first()
            .and_then(FactoryArgument::as_container)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "The first argument must be of type {CONTAINER_CAPABILITY}"
                ))
            })?;

        Self::new(name).create(container)
    }
}

fn create_event_consumer_callback_service(
    name: &str,
    arguments: &[FactoryArgument<'_>],
) -> Result<Service> {
    EventConsumerCallbackFactory::create_named(name, arguments).map(into_service)
}

#[linkme::distributed_slice(COMPONENT_FACTORIES)]
static EVENT_CONSUMER_CALLBACK_FACTORY: ComponentFactoryEntry = ComponentFactoryEntry {
    name: DIMENSION_EVENT_CONSUMER_CALLBACK,
    description: "AMQP event consumer callback wired to an event bus and a message factory",
    factory: create_event_consumer_callback_service,
};
