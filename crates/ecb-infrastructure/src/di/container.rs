//! In-memory service container
//!
//! Keys map to one of three definitions:
//!
//! | Definition | Resolution on `get` |
//! |------------|---------------------|
//! | instance | the registered value, shared |
//! | factory closure | closure called with the container, fresh value each time |
//! | component | named registry factory called with the identifier and the container |
//!
//! Factory and component definitions may fetch other keys while they are
//! built. A key requested again before its own build finished fails with
//! `CircularDependency` instead of recursing.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ecb_application::registry::create_component;
use ecb_domain::constants::CONFIG_SERVICE_KEY;
use ecb_domain::error::{Error, Result};
use ecb_domain::ports::{Service, ServiceContainer, into_service};
use ecb_domain::value_objects::ConfigTree;
use tracing::trace;

thread_local! {
    /// Keys being built on this thread, tagged with the owning container
    static RESOLVING: RefCell<Vec<(usize, String)>> = const { RefCell::new(Vec::new()) };
}

/// Marks a key as being built until dropped
struct ResolutionGuard;

impl ResolutionGuard {
    fn enter(owner: usize, key: &str) -> Result<Self> {
        RESOLVING.with(|resolving| {
            let mut resolving = resolving.borrow_mut();
            let cycle = {
                let active: Vec<&str> = resolving
                    .iter()
                    .filter(|(container, _)| *container == owner)
                    .map(|(_, active)| active.as_str())
                    .collect();
                active.iter().position(|active| *active == key).map(|start| {
                    let mut chain: Vec<String> =
                        active[start..].iter().map(ToString::to_string).collect();
                    chain.push(key.to_string());
                    chain
                })
            };
            if let Some(chain) = cycle {
                return Err(Error::circular_dependency(chain));
            }

            resolving.push((owner, key.to_string()));
            Ok(Self)
        })
    }
}

impl Drop for ResolutionGuard {
    fn drop(&mut self) {
        RESOLVING.with(|resolving| {
            resolving.borrow_mut().pop();
        });
    }
}

type ServiceFactory = Arc<dyn Fn(&dyn ServiceContainer) -> Result<Service> + Send + Sync>;

#[derive(Clone)]
enum Definition {
    Instance(Service),
    Factory(ServiceFactory),
    Component { factory: String, identifier: String },
}

impl fmt::Debug for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance(_) => f.write_str("Instance"),
            Self::Factory(_) => f.write_str("Factory"),
            Self::Component {
                factory,
                identifier,
            } => f
                .debug_struct("Component")
                .field("factory", factory)
                .field("identifier", identifier)
                .finish(),
        }
    }
}

/// Immutable key-to-instance container
#[derive(Debug, Clone, Default)]
pub struct InMemoryServiceContainer {
    definitions: HashMap<String, Definition>,
}

impl InMemoryServiceContainer {
    /// Start building a container
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    /// Registered keys in sorted order
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of registered keys
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    fn owner_id(&self) -> usize {
        std::ptr::from_ref(self) as usize
    }
}

impl ServiceContainer for InMemoryServiceContainer {
    fn get(&self, key: &str) -> Result<Service> {
        let definition = self.definitions.get(key).ok_or_else(|| {
            trace!(key = key, "Service not registered");
            Error::service_not_found(key)
        })?;

        if let Definition::Instance(service) = definition {
            return Ok(Arc::clone(service));
        }

        let _guard = ResolutionGuard::enter(self.owner_id(), key)?;
        match definition {
            Definition::Instance(service) => Ok(Arc::clone(service)),
            Definition::Factory(factory) => factory(self as &dyn ServiceContainer),
            Definition::Component {
                factory,
                identifier,
            } => create_component(factory, identifier, self),
        }
    }

    fn has(&self, key: &str) -> bool {
        self.definitions.contains_key(key)
    }
}

/// Builder for [`InMemoryServiceContainer`]
///
/// Later registrations under the same key replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct ContainerBuilder {
    definitions: HashMap<String, Definition>,
}

impl ContainerBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the configuration tree under the `config` key
    pub fn with_config(self, tree: ConfigTree) -> Self {
        self.register_instance(CONFIG_SERVICE_KEY, tree)
    }

    /// Register a value; `get_as::<T>` returns clones of it
    pub fn register_instance<T: Any + Send + Sync>(self, key: impl Into<String>, value: T) -> Self {
        self.register_service(key, into_service(value))
    }

    /// Register an already type-erased service
    pub fn register_service(mut self, key: impl Into<String>, service: Service) -> Self {
        self.definitions
            .insert(key.into(), Definition::Instance(service));
        self
    }

    /// Register a closure invoked on every `get`
    pub fn register_factory<F>(mut self, key: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&dyn ServiceContainer) -> Result<Service> + Send + Sync + 'static,
    {
        self.definitions
            .insert(key.into(), Definition::Factory(Arc::new(factory)));
        self
    }

    /// Register a key resolved through a named component factory
    pub fn register_component(
        mut self,
        key: impl Into<String>,
        factory: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        self.definitions.insert(
            key.into(),
            Definition::Component {
                factory: factory.into(),
                identifier: identifier.into(),
            },
        );
        self
    }

    /// Finish building
    pub fn build(self) -> InMemoryServiceContainer {
        InMemoryServiceContainer {
            definitions: self.definitions,
        }
    }
}
