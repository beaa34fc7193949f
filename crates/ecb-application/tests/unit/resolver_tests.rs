//! Options resolver behaviour

use ecb_application::resolve_options;
use ecb_domain::{ConfigTree, DefaultOptions, DimensionPath, Error, Identifier, OptionsBag};
use serde_json::json;

use crate::support::tree;

const PATH: DimensionPath = DimensionPath::new("v", "p", "t");
const MANDATORY: [&str; 2] = ["event_bus", "message_factory"];

fn defaults() -> DefaultOptions {
    DefaultOptions::new()
        .with("event_bus", "DEFAULT_EB")
        .with("message_factory", "DEFAULT_MF")
}

#[test]
fn test_resolution_is_deterministic() {
    let config = tree(json!({"v": {"p": {"t": {"x": {"event_bus": "EB", "retries": 3}}}}}));
    let identifier = Identifier::from("x");

    let first = resolve_options(&config, &PATH, &identifier, &defaults(), &MANDATORY).unwrap();
    let second = resolve_options(&config, &PATH, &identifier, &defaults(), &MANDATORY).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_entry_returns_exactly_defaults() {
    let configs = [
        ConfigTree::new(),
        tree(json!({"v": {}})),
        tree(json!({"v": {"p": {}}})),
        tree(json!({"v": {"p": {"t": {"other": {"event_bus": "EB"}}}}})),
    ];

    for config in &configs {
        let options =
            resolve_options(config, &PATH, &Identifier::from("x"), &defaults(), &MANDATORY)
                .expect("defaults cover every mandatory key");
        assert_eq!(options, OptionsBag::from_defaults(&defaults()));
    }
}

#[test]
fn test_missing_entry_with_incomplete_defaults_fails() {
    let incomplete = DefaultOptions::new().with("event_bus", "DEFAULT_EB");
    let config = tree(json!({"v": {"p": {"t": {}}}}));

    let err = resolve_options(&config, &PATH, &Identifier::from("x"), &incomplete, &MANDATORY)
        .unwrap_err();

    match err {
        Error::ConfigurationMissing { path, identifier } => {
            assert_eq!(path, "v.p.t.x");
            assert_eq!(identifier, "x");
        }
        other => panic!("Expected ConfigurationMissing, got {other:?}"),
    }
}

#[test]
fn test_explicit_values_win_for_every_shared_key() {
    let config = tree(json!({"v": {"p": {"t": {"x": {
        "event_bus": "EB",
        "message_factory": "MF"
    }}}}}));

    let options =
        resolve_options(&config, &PATH, &Identifier::from("x"), &defaults(), &MANDATORY).unwrap();

    for (key, _) in defaults().iter() {
        assert_eq!(
            options.get(key),
            config.get("v").unwrap()["p"]["t"]["x"].get(key),
            "explicit value must override default for {key}"
        );
    }
}

#[test]
fn test_unrecognized_keys_pass_through() {
    let config = tree(json!({"v": {"p": {"t": {"x": {
        "event_bus": "EB",
        "consumer_tag": "orders-1",
        "prefetch": {"count": 10}
    }}}}}));

    let options =
        resolve_options(&config, &PATH, &Identifier::from("x"), &defaults(), &MANDATORY).unwrap();

    assert_eq!(options.get_str("consumer_tag"), Some("orders-1"));
    assert_eq!(options.get("prefetch"), Some(&json!({"count": 10})));
    assert_eq!(options.get_str("message_factory"), Some("DEFAULT_MF"));
}

#[test]
fn test_present_entry_missing_mandatory_key_names_the_option() {
    let config = tree(json!({"v": {"p": {"t": {"x": {"event_bus": "EB"}}}}}));
    let incomplete = DefaultOptions::new();

    let err = resolve_options(&config, &PATH, &Identifier::from("x"), &incomplete, &MANDATORY)
        .unwrap_err();

    match err {
        Error::ConfigurationMissing { path, .. } => assert_eq!(path, "v.p.t.x.message_factory"),
        other => panic!("Expected ConfigurationMissing, got {other:?}"),
    }
}

#[test]
fn test_identifier_entry_must_be_a_mapping() {
    let config = tree(json!({"v": {"p": {"t": {"x": "EB"}}}}));

    let err = resolve_options(&config, &PATH, &Identifier::from("x"), &defaults(), &MANDATORY)
        .unwrap_err();

    assert!(matches!(err, Error::InvalidConfiguration { ref path, .. } if path == "v.p.t.x"));
}
