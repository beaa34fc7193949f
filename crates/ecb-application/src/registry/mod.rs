//! Component Factory Registry
//!
//! Named component factories register themselves at compile time with
//! `linkme`, so service definitions can refer to a factory by name:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  1. Factory defines:  #[linkme::distributed_slice(COMPONENT_FACTORIES)]
//! │                       static ENTRY: ComponentFactoryEntry = ...
//! │                              ↓
//! │  2. Config declares:  services.orders_callback =
//! │                         { factory = "event_consumer_callback", identifier = "orders" }
//! │                              ↓
//! │  3. Container calls:  create_component(factory, identifier, container)
//! └──────────────────────────────────────────────────────────────┘
//! ```

use ecb_domain::error::{Error, Result};
use ecb_domain::ports::{Service, ServiceContainer};
use tracing::debug;

use crate::factory::FactoryArgument;

/// Signature of a named factory entry point
///
/// Receives the identifier and the positional argument list, exactly like
/// a named factory call.
pub type ComponentFactoryFn = fn(&str, &[FactoryArgument<'_>]) -> Result<Service>;

/// Registry entry for a component factory
pub struct ComponentFactoryEntry {
    /// Unique factory name (e.g., "event_consumer_callback")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Named entry point producing the component
    pub factory: ComponentFactoryFn,
}

/// All component factories linked into the binary
#[linkme::distributed_slice]
pub static COMPONENT_FACTORIES: [ComponentFactoryEntry] = [..];

/// Find a registered factory by name
///
/// # Returns
/// * `Ok(&ComponentFactoryEntry)` - The matching entry
/// * `Err(Error::UnknownFactory)` - No entry has that name; lists the available ones
pub fn resolve_component_factory(name: &str) -> Result<&'static ComponentFactoryEntry> {
    COMPONENT_FACTORIES
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| {
            Error::unknown_factory(
                name,
                COMPONENT_FACTORIES
                    .iter()
                    .map(|entry| entry.name.to_string())
                    .collect(),
            )
        })
}

/// List all registered factories as `(name, description)` pairs
pub fn list_component_factories() -> Vec<(&'static str, &'static str)> {
    let mut factories: Vec<_> = COMPONENT_FACTORIES
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    factories.sort_unstable();
    factories
}

/// Create a component through the factory registered as `factory_name`
///
/// The container is passed as the first positional argument.
pub fn create_component(
    factory_name: &str,
    identifier: &str,
    container: &dyn ServiceContainer,
) -> Result<Service> {
    let entry = resolve_component_factory(factory_name)?;
    debug!(
        factory = entry.name,
        identifier = identifier,
        "Creating component from registry"
    );
    (entry.factory)(identifier, &[FactoryArgument::Container(container)])
}
