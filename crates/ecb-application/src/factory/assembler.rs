//! Component Assembler
//!
//! Fetches the collaborators referenced by a resolved options bag and
//! builds the callback from them. Defaults were applied during
//! resolution; nothing is substituted here.

use std::sync::Arc;

use ecb_domain::constants::{OPTION_EVENT_BUS, OPTION_MESSAGE_FACTORY};
use ecb_domain::error::{Error, Result};
use ecb_domain::ports::{EventBus, MessageFactory, ServiceContainer, ServiceContainerExt};
use ecb_domain::value_objects::OptionsBag;
use tracing::debug;

use crate::callback::EventConsumerCallback;

/// Build an [`EventConsumerCallback`] from resolved options
///
/// Container failures (`ServiceNotFound`, `ServiceTypeMismatch`) are
/// returned unchanged.
pub fn assemble(
    options: &OptionsBag,
    container: &dyn ServiceContainer,
) -> Result<EventConsumerCallback> {
    let event_bus_key = service_reference(options, OPTION_EVENT_BUS)?;
    let message_factory_key = service_reference(options, OPTION_MESSAGE_FACTORY)?;

    let event_bus: Arc<dyn EventBus> = container.get_as(event_bus_key)?;
    let message_factory: Arc<dyn MessageFactory> = container.get_as(message_factory_key)?;

    debug!(
        event_bus = event_bus_key,
        message_factory = message_factory_key,
        "Assembled event consumer callback"
    );
    Ok(EventConsumerCallback::new(event_bus, message_factory))
}

fn service_reference<'a>(options: &'a OptionsBag, key: &str) -> Result<&'a str> {
    match options.get(key) {
        Some(value) => value.as_str().ok_or_else(|| {
            Error::invalid_configuration(key, "service reference must be a string")
        }),
        None => Err(Error::invalid_configuration(key, "service reference is not set")),
    }
}
