//! Options Resolver
//!
//! Descends `tree[vendor][package][component][identifier]` and merges the
//! mapping found there over the declared defaults.
//!
//! | Situation | Result |
//! |-----------|--------|
//! | entry present | defaults overlaid with the entry, extra keys passed through |
//! | entry present, mandatory key absent from entry and defaults | `ConfigurationMissing` at `…identifier.key` |
//! | some segment absent, defaults cover every mandatory key | exactly the defaults |
//! | some segment absent, defaults lack a mandatory key | `ConfigurationMissing` at the first absent segment |
//! | some segment is not a mapping | `InvalidConfiguration` at that segment |

use ecb_domain::constants::PATH_SEPARATOR;
use ecb_domain::error::{Error, Result};
use ecb_domain::value_objects::config_tree::value_kind;
use ecb_domain::value_objects::{ConfigTree, DefaultOptions, DimensionPath, Identifier, OptionsBag};
use serde_json::{Map, Value};
use tracing::debug;

/// Resolve the options of `identifier` under `path`
///
/// # Arguments
/// * `tree` - Configuration tree read from the container
/// * `path` - Factory's fixed dimension path
/// * `identifier` - Identifier the factory is bound to
/// * `defaults` - Declared default options
/// * `mandatory` - Keys the resulting bag must contain
///
/// # Returns
/// * `Ok(OptionsBag)` - Explicit configuration merged over defaults
/// * `Err(Error)` - `ConfigurationMissing` or `InvalidConfiguration`
pub fn resolve_options(
    tree: &ConfigTree,
    path: &DimensionPath,
    identifier: &Identifier,
    defaults: &DefaultOptions,
    mandatory: &[&str],
) -> Result<OptionsBag> {
    let segments = [
        path.vendor(),
        path.package(),
        path.component(),
        identifier.as_str(),
    ];

    let mut node: &Map<String, Value> = tree.as_map();
    for (depth, segment) in segments.iter().enumerate() {
        let visited = segments[..=depth].join(PATH_SEPARATOR);
        match node.get(*segment) {
            Some(Value::Object(child)) => node = child,
            Some(other) => {
                return Err(Error::invalid_configuration(
                    visited,
                    format!("expected a mapping, found {}", value_kind(other)),
                ));
            }
            None => return fall_back_to_defaults(&visited, identifier, defaults, mandatory),
        }
    }

    let options = OptionsBag::from_defaults(defaults).merge(node);
    if let Some(missing) = mandatory.iter().copied().find(|key| !options.contains_key(key)) {
        return Err(Error::configuration_missing(
            path.render_with(&[identifier.as_str(), missing]),
            identifier.as_str(),
        ));
    }

    debug!(
        path = %path,
        identifier = %identifier,
        options = options.len(),
        "Resolved options from configuration"
    );
    Ok(options)
}

fn fall_back_to_defaults(
    missing_path: &str,
    identifier: &Identifier,
    defaults: &DefaultOptions,
    mandatory: &[&str],
) -> Result<OptionsBag> {
    if mandatory.iter().all(|key| defaults.contains_key(key)) {
        debug!(
            missing = missing_path,
            identifier = %identifier,
            "No configuration entry, using default options"
        );
        Ok(OptionsBag::from_defaults(defaults))
    } else {
        Err(Error::configuration_missing(missing_path, identifier.as_str()))
    }
}
