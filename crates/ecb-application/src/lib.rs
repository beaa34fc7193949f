//! # Application Layer
//!
//! Turns a bound identifier and a service container into an event
//! consumer callback.
//!
//! ```text
//! identifier + container
//!        │
//!        ▼
//! ┌──────────────────────────┐
//! │ container.config()        │  ← ConfigTree under "config"
//! └──────────────────────────┘
//!        │
//!        ▼
//! ┌──────────────────────────┐
//! │ resolve_options(...)      │  ← dimension path + identifier over defaults
//! └──────────────────────────┘
//!        │ OptionsBag
//!        ▼
//! ┌──────────────────────────┐
//! │ assemble(bag, container)  │  ← event_bus + message_factory lookups
//! └──────────────────────────┘
//!        │
//!        ▼
//!  EventConsumerCallback
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`options`] | Pure option resolution over a configuration tree |
//! | [`factory`] | Factory invoker, arguments and component assembler |
//! | [`callback`] | The assembled event consumer callback |
//! | [`registry`] | Named component factories collected with `linkme` |

pub mod callback;
pub mod factory;
pub mod options;
pub mod registry;

pub use callback::EventConsumerCallback;
pub use factory::{EventConsumerCallbackFactory, FactoryArgument, assemble};
pub use options::resolve_options;
pub use registry::{
    COMPONENT_FACTORIES, ComponentFactoryEntry, create_component, list_component_factories,
    resolve_component_factory,
};
