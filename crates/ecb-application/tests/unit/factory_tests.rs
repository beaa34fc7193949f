//! Factory invoker: explicit and named entry points

use std::sync::Arc;

use ecb_application::{EventConsumerCallbackFactory, FactoryArgument};
use ecb_domain::ports::{ServiceContainer, into_service};
use ecb_domain::{ConfigTree, Error};
use serde_json::json;

use crate::support::{MockContainer, event_bus, message_factory, tree};

fn configuration() -> ConfigTree {
    tree(json!({
        "prooph": {
            "humus-amqp-producer": {
                "event_consumer_callback": {
                    "test-event-consumer-callback": {
                        "event_bus": "test-event-bus",
                        "message_factory": "test-message-factory"
                    }
                }
            }
        }
    }))
}

/// Container expecting exactly one lookup per key
fn container_for_one_call() -> MockContainer {
    let mut container = MockContainer::new();
    let config = configuration();
    container
        .expect_get()
        .withf(|key| key == "config")
        .times(1)
        .returning(move |_| Ok(into_service(config.clone())));
    container
        .expect_get()
        .withf(|key| key == "test-event-bus")
        .times(1)
        .returning(|_| Ok(into_service(event_bus("test-event-bus"))));
    container
        .expect_get()
        .withf(|key| key == "test-message-factory")
        .times(1)
        .returning(|_| Ok(into_service(message_factory("test-message-factory"))));
    container
}

#[test]
fn test_creates_event_consumer_callback() {
    let container = container_for_one_call();

    let callback = EventConsumerCallbackFactory::new("test-event-consumer-callback")
        .create(&container)
        .expect("callback is created");

    assert_eq!(callback.event_bus().bus_name(), "test-event-bus");
    assert_eq!(
        callback.message_factory().factory_name(),
        "test-message-factory"
    );
}

#[test]
fn test_named_call_creates_event_consumer_callback() {
    let container = container_for_one_call();

    let callback = EventConsumerCallbackFactory::create_named(
        "test-event-consumer-callback",
        &[FactoryArgument::Container(&container)],
    )
    .expect("callback is created");

    assert_eq!(callback.event_bus().bus_name(), "test-event-bus");
}

#[test]
fn test_named_and_explicit_calls_build_the_same_callback() {
    let name = "test-event-consumer-callback";
    let explicit_container = container_for_one_call();
    let named_container = container_for_one_call();

    let explicit = EventConsumerCallbackFactory::new(name)
        .create(&explicit_container)
        .expect("explicit call");
    let named = EventConsumerCallbackFactory::create_named(
        name,
        &[FactoryArgument::Container(&named_container)],
    )
    .expect("named call");

    assert_eq!(named.event_bus().bus_name(), explicit.event_bus().bus_name());
    assert_eq!(
        named.message_factory().factory_name(),
        explicit.message_factory().factory_name()
    );
    assert_eq!(format!("{named:?}"), format!("{explicit:?}"));
}

#[test]
fn test_named_call_rejects_non_container_first_argument() {
    for name in ["test-event-consumer-callback", "", "anything"] {
        let err = EventConsumerCallbackFactory::create_named(
            name,
            &[FactoryArgument::Value(json!("invalid_container"))],
        )
        .unwrap_err();

        match err {
            Error::InvalidArgument { message } => {
                assert!(message.contains("ServiceContainer"), "message: {message}");
            }
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }
}

#[test]
fn test_container_must_be_first_argument() {
    let container = MockContainer::new();
    let dyn_container: &dyn ServiceContainer = &container;

    let err = EventConsumerCallbackFactory::create_named(
        "test-event-consumer-callback",
        &[json!(1).into(), dyn_container.into()],
    )
    .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_missing_config_entry_propagates_not_found() {
    let mut container = MockContainer::new();
    container
        .expect_get()
        .withf(|key| key == "config")
        .times(1)
        .returning(|key| Err(Error::service_not_found(key)));

    let err = EventConsumerCallbackFactory::new("orders")
        .create(&container)
        .unwrap_err();

    match err {
        Error::ServiceNotFound { key } => assert_eq!(key, "config"),
        other => panic!("Expected ServiceNotFound, got {other:?}"),
    }
}

#[test]
fn test_unconfigured_identifier_uses_default_services() {
    let bus = event_bus("default-bus");
    let factory = message_factory("default-factory");

    let mut container = MockContainer::new();
    container
        .expect_get()
        .withf(|key| key == "config")
        .returning(|_| Ok(into_service(ConfigTree::new())));
    let default_bus = Arc::clone(&bus);
    container
        .expect_get()
        .withf(|key| key == "service_bus.event_bus")
        .times(1)
        .returning(move |_| Ok(into_service(Arc::clone(&default_bus))));
    let default_factory = Arc::clone(&factory);
    container
        .expect_get()
        .withf(|key| key == "messaging.fqcn_message_factory")
        .times(1)
        .returning(move |_| Ok(into_service(Arc::clone(&default_factory))));

    let callback = EventConsumerCallbackFactory::new("unconfigured")
        .create(&container)
        .expect("defaults are registered");

    assert!(Arc::ptr_eq(callback.event_bus(), &bus));
    assert!(Arc::ptr_eq(callback.message_factory(), &factory));
}
