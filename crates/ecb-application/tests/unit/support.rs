//! Test doubles shared by the application tests

use std::sync::Arc;

use ecb_domain::ports::{DomainMessage, EventBus, MessageFactory, Service, ServiceContainer};
use ecb_domain::{ConfigTree, Result};
use mockall::mock;
use serde_json::Value;

mock! {
    pub Container {}

    impl ServiceContainer for Container {
        fn get(&self, key: &str) -> Result<Service>;
        fn has(&self, key: &str) -> bool;
    }
}

pub struct NamedBus(pub &'static str);

impl EventBus for NamedBus {
    fn bus_name(&self) -> &str {
        self.0
    }

    fn dispatch(&self, _message: DomainMessage) -> Result<()> {
        Ok(())
    }
}

pub struct NamedMessageFactory(pub &'static str);

impl MessageFactory for NamedMessageFactory {
    fn factory_name(&self) -> &str {
        self.0
    }

    fn create_message(&self, message_name: &str, payload: Value) -> Result<DomainMessage> {
        Ok(DomainMessage {
            name: message_name.to_string(),
            payload,
        })
    }
}

pub fn event_bus(name: &'static str) -> Arc<dyn EventBus> {
    Arc::new(NamedBus(name))
}

pub fn message_factory(name: &'static str) -> Arc<dyn MessageFactory> {
    Arc::new(NamedMessageFactory(name))
}

pub fn tree(value: Value) -> ConfigTree {
    ConfigTree::from_value(value).expect("test configuration must be an object")
}
