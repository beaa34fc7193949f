//! Messaging Collaborator Ports
//!
//! The event consumer callback holds one of each. Their runtime
//! behaviour (serialization, routing, dispatch) belongs to the service
//! bus, not to the factory that wires them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Message built by a [`MessageFactory`] and handed to an [`EventBus`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainMessage {
    /// Message name used for routing
    pub name: String,
    /// Message payload
    pub payload: Value,
}

/// Event dispatch capability
pub trait EventBus: Send + Sync {
    /// Name of the bus for diagnostics
    fn bus_name(&self) -> &str;

    /// Dispatch a message to the bus
    fn dispatch(&self, message: DomainMessage) -> Result<()>;
}

/// Message construction capability
pub trait MessageFactory: Send + Sync {
    /// Name of the factory for diagnostics
    fn factory_name(&self) -> &str;

    /// Build a message from its name and raw payload
    fn create_message(&self, message_name: &str, payload: Value) -> Result<DomainMessage>;
}
