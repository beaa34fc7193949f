//! Event Consumer Callback
//!
//! Value object produced by [`EventConsumerCallbackFactory`](crate::EventConsumerCallbackFactory).
//! It owns the two collaborators a broker consumer needs; what it does
//! with them when a delivery arrives is up to the service bus.

use std::fmt;
use std::sync::Arc;

use ecb_domain::ports::{EventBus, MessageFactory};

/// Callback wired to an event bus and a message factory
#[derive(Clone)]
pub struct EventConsumerCallback {
    event_bus: Arc<dyn EventBus>,
    message_factory: Arc<dyn MessageFactory>,
}

impl EventConsumerCallback {
    /// Create a callback from its two collaborators
    pub fn new(event_bus: Arc<dyn EventBus>, message_factory: Arc<dyn MessageFactory>) -> Self {
        Self {
            event_bus,
            message_factory,
        }
    }

    /// The event bus messages are dispatched to
    pub fn event_bus(&self) -> &Arc<dyn EventBus> {
        &self.event_bus
    }

    /// The factory messages are built with
    pub fn message_factory(&self) -> &Arc<dyn MessageFactory> {
        &self.message_factory
    }
}

impl fmt::Debug for EventConsumerCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventConsumerCallback")
            .field("event_bus", &self.event_bus.bus_name())
            .field("message_factory", &self.message_factory.factory_name())
            .finish()
    }
}
