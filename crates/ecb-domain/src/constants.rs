//! Domain layer constants
//!
//! Configuration keys and well-known service references shared by the
//! application and infrastructure layers.

// ============================================================================
// DIMENSION CONSTANTS
// ============================================================================

/// Vendor segment of the event consumer callback dimension path
pub const DIMENSION_VENDOR: &str = "prooph";

/// Package segment of the event consumer callback dimension path
pub const DIMENSION_PACKAGE: &str = "humus-amqp-producer";

/// Component-type segment of the event consumer callback dimension path
pub const DIMENSION_EVENT_CONSUMER_CALLBACK: &str = "event_consumer_callback";

// ============================================================================
// OPTION KEYS
// ============================================================================

/// Option key holding the event bus service reference
pub const OPTION_EVENT_BUS: &str = "event_bus";

/// Option key holding the message factory service reference
pub const OPTION_MESSAGE_FACTORY: &str = "message_factory";

// ============================================================================
// WELL-KNOWN SERVICE KEYS
// ============================================================================

/// Default service key of the event bus
pub const DEFAULT_EVENT_BUS_SERVICE: &str = "service_bus.event_bus";

/// Default service key of the message factory
pub const DEFAULT_MESSAGE_FACTORY_SERVICE: &str = "messaging.fqcn_message_factory";

/// Service key under which a container exposes its configuration tree
pub const CONFIG_SERVICE_KEY: &str = "config";

/// Capability name reported when a factory is not handed a container
pub const CONTAINER_CAPABILITY: &str = "ServiceContainer";

/// Separator used when rendering configuration paths in errors and logs
pub const PATH_SEPARATOR: &str = ".";
