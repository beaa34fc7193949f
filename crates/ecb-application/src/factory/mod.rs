//! Component factories
//!
//! A factory is bound to one identifier, reads its options from the
//! container's configuration and assembles the component from services
//! the options reference.

pub mod arguments;
pub mod assembler;
pub mod event_consumer_callback;

pub use arguments::FactoryArgument;
pub use assembler::assemble;
pub use event_consumer_callback::EventConsumerCallbackFactory;
