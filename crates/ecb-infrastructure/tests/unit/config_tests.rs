//! Configuration loading
//!
//! Every test runs inside a `figment::Jail` so `ECB__*` variables set by
//! one test never leak into another.

use ecb_domain::Error;
use ecb_infrastructure::config::{
    AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig, ServiceDefinition,
};
use figment::Jail;
use tempfile::TempDir;

const ORDERS_TOML: &str = r#"
[logging]
level = "debug"

[services.orders_callback]
factory = "event_consumer_callback"
identifier = "orders"

[prooph.humus-amqp-producer.event_consumer_callback.orders]
event_bus = "app.event_bus"
message_factory = "app.message_factory"
"#;

fn load(path: &str) -> Result<AppConfig, Error> {
    ConfigLoader::new().with_config_path(path).load()
}

#[test]
fn test_load_from_toml_file() {
    Jail::expect_with(|jail| {
        jail.create_file("ecb.toml", ORDERS_TOML)?;

        let config = load("ecb.toml").map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.services.get("orders_callback"),
            Some(&ServiceDefinition::new("event_consumer_callback", "orders"))
        );

        let entry = config
            .tree
            .get("prooph")
            .and_then(|vendor| {
                vendor.pointer("/humus-amqp-producer/event_consumer_callback/orders")
            })
            .expect("factory configuration is kept in the tree");
        assert_eq!(entry["event_bus"], "app.event_bus");
        assert!(config.tree.get("logging").is_none());
        assert!(config.tree.get("services").is_none());
        Ok(())
    });
}

#[test]
fn test_missing_file_uses_defaults() {
    Jail::expect_with(|_jail| {
        let config = load("absent.toml").map_err(|e| e.to_string())?;

        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.services.is_empty());
        assert!(config.tree.is_empty());
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("ecb.toml", ORDERS_TOML)?;
        jail.set_env("ECB__LOGGING__LEVEL", "warn");
        jail.set_env("ECB__LOGGING__JSON_FORMAT", "true");

        let config = load("ecb.toml").map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.json_format);
        assert_eq!(config.services.len(), 1);
        Ok(())
    });
}

#[test]
fn test_environment_keys_are_lowercased() {
    Jail::expect_with(|jail| {
        jail.set_env("ECB__SERVICES__ORDERS_CALLBACK__FACTORY", "event_consumer_callback");
        jail.set_env("ECB__SERVICES__ORDERS_CALLBACK__IDENTIFIER", "Orders");

        let config = load("missing.toml").map_err(|e| e.to_string())?;

        assert_eq!(
            config.services.get("orders_callback"),
            Some(&ServiceDefinition::new("event_consumer_callback", "Orders"))
        );
        assert!(!config.services.contains_key("ORDERS_CALLBACK"));
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("CONSUMER__LOGGING__LEVEL", "trace");

        let config = ConfigLoader::new()
            .with_config_path("missing.toml")
            .with_env_prefix("CONSUMER")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, "trace");
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("ecb.toml", "[logging]\nlevel = \"loud\"\n")?;

        let err = load("ecb.toml").unwrap_err();

        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("loud"));
        Ok(())
    });
}

#[test]
fn test_unknown_service_factory_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "ecb.toml",
            "[services.producer]\nfactory = \"amqp_producer\"\nidentifier = \"orders\"\n",
        )?;

        let err = load("ecb.toml").unwrap_err();

        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("producer"));
        Ok(())
    });
}

#[test]
fn test_builder_rejects_empty_identifier() {
    let err = ConfigBuilder::new()
        .with_service("callback", ServiceDefinition::new("event_consumer_callback", ""))
        .build()
        .unwrap_err();

    assert!(err.to_string().contains("non-empty identifier"));
}

#[test]
fn test_saved_configuration_loads_back() {
    Jail::expect_with(|jail| {
        jail.create_file("ecb.toml", ORDERS_TOML)?;
        let original = load("ecb.toml").map_err(|e| e.to_string())?;

        let dir = TempDir::new().map_err(|e| e.to_string())?;
        let path = dir.path().join("saved.toml");
        ConfigLoader::new()
            .save_to_file(&original, &path)
            .map_err(|e| e.to_string())?;

        let reloaded = ConfigLoader::new()
            .with_config_path(&path)
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(reloaded, original);
        Ok(())
    });
}
