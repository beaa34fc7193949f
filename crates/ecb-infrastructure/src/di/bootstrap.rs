//! Container bootstrap from configuration

use ecb_application::registry::resolve_component_factory;
use ecb_domain::error::Result;
use tracing::info;

use crate::config::AppConfig;
use crate::di::container::ContainerBuilder;

/// Start a container from loaded configuration
///
/// Registers the factory configuration tree under `config` and one
/// component definition per `[services]` entry. Collaborator instances
/// (event buses, message factories) are registered by the caller on the
/// returned builder. Definitions naming an unregistered factory fail
/// here rather than on first `get`.
///
/// # Example
///
/// ```ignore
/// let config = ConfigLoader::new().load()?;
/// let container = bootstrap(&config)?
///     .register_instance("app.event_bus", event_bus)
///     .register_instance("app.message_factory", message_factory)
///     .build();
/// let callback: EventConsumerCallback = container.get_as("orders_callback")?;
/// ```
pub fn bootstrap(config: &AppConfig) -> Result<ContainerBuilder> {
    let mut builder = ContainerBuilder::new().with_config(config.tree.clone());

    for (key, definition) in &config.services {
        resolve_component_factory(&definition.factory)?;
        builder = builder.register_component(
            key.as_str(),
            definition.factory.as_str(),
            definition.identifier.as_str(),
        );
    }

    info!(
        services = config.services.len(),
        "Bootstrapped service container from configuration"
    );
    Ok(builder)
}
