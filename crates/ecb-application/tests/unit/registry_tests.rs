//! Component factory registry

use std::sync::Arc;

use ecb_application::{
    EventConsumerCallback, create_component, list_component_factories, resolve_component_factory,
};
use ecb_domain::Error;
use ecb_domain::ports::into_service;
use serde_json::json;

use crate::support::{MockContainer, event_bus, message_factory, tree};

#[test]
fn test_registry_lists_event_consumer_callback() {
    let factories = list_component_factories();
    assert!(
        factories
            .iter()
            .any(|(name, _)| *name == "event_consumer_callback")
    );
}

#[test]
fn test_unknown_factory_is_reported() {
    let container = MockContainer::new();
    let err = create_component("amqp_producer", "orders", &container)
        .err()
        .expect("factory is not registered");
    assert!(matches!(err, Error::UnknownFactory { ref name, .. } if name == "amqp_producer"));
    assert!(resolve_component_factory("amqp_producer").is_err());
}

#[test]
fn test_create_component_builds_callback_service() {
    let config = tree(json!({"prooph": {"humus-amqp-producer": {"event_consumer_callback": {
        "orders": {"event_bus": "EB", "message_factory": "MF"}
    }}}}));
    let bus = event_bus("EB");

    let mut container = MockContainer::new();
    container
        .expect_get()
        .withf(|key| key == "config")
        .returning(move |_| Ok(into_service(config.clone())));
    let eb = Arc::clone(&bus);
    container
        .expect_get()
        .withf(|key| key == "EB")
        .returning(move |_| Ok(into_service(Arc::clone(&eb))));
    container
        .expect_get()
        .withf(|key| key == "MF")
        .returning(|_| Ok(into_service(message_factory("MF"))));

    let service = create_component("event_consumer_callback", "orders", &container)
        .expect("registered factory builds the callback");
    let callback = service
        .downcast_ref::<EventConsumerCallback>()
        .expect("service is an EventConsumerCallback");

    assert!(Arc::ptr_eq(callback.event_bus(), &bus));
}
