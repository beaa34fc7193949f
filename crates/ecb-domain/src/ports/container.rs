//! Service Container Port
//!
//! Defines the key-to-instance resolution capability factories rely on.
//! Whether an implementation builds instances eagerly, lazily or as
//! singletons is its own contract.
//!
//! ## Typed access
//!
//! Instances are stored type-erased as [`Service`]. Trait objects are
//! registered wrapped once more (`Arc<dyn EventBus>` inside the `Arc<dyn Any>`)
//! so callers can recover them with [`ServiceContainerExt::get_as`]:
//!
//! ```
//! use std::sync::Arc;
//! use ecb_domain::ports::{Service, ServiceContainer, ServiceContainerExt, into_service};
//! use ecb_domain::Result;
//!
//! struct Single(Service);
//!
//! impl ServiceContainer for Single {
//!     fn get(&self, key: &str) -> Result<Service> {
//!         match key {
//!             "greeting" => Ok(self.0.clone()),
//!             _ => Err(ecb_domain::Error::service_not_found(key)),
//!         }
//!     }
//!     fn has(&self, key: &str) -> bool {
//!         key == "greeting"
//!     }
//! }
//!
//! let container = Single(into_service(String::from("hello")));
//! let greeting: String = container.get_as("greeting").unwrap();
//! assert_eq!(greeting, "hello");
//! ```

use std::any::{Any, type_name};
use std::sync::Arc;

use crate::constants::CONFIG_SERVICE_KEY;
use crate::error::{Error, Result};
use crate::value_objects::ConfigTree;

/// Type-erased service instance
pub type Service = Arc<dyn Any + Send + Sync>;

/// Wrap a value as a [`Service`]
pub fn into_service<T: Any + Send + Sync>(value: T) -> Service {
    Arc::new(value)
}

/// Key-to-instance resolution capability
pub trait ServiceContainer: Send + Sync {
    /// Resolve `key`, failing with [`Error::ServiceNotFound`] when unregistered
    fn get(&self, key: &str) -> Result<Service>;

    /// Whether `key` is registered
    fn has(&self, key: &str) -> bool;
}

/// Typed helpers available on every [`ServiceContainer`]
pub trait ServiceContainerExt {
    /// Resolve `key` and downcast the instance to `T`
    ///
    /// `ServiceNotFound` from the container is returned unchanged; an
    /// instance of another type yields [`Error::ServiceTypeMismatch`].
    fn get_as<T: Any + Clone>(&self, key: &str) -> Result<T>;

    /// The configuration tree registered under [`CONFIG_SERVICE_KEY`]
    fn config(&self) -> Result<ConfigTree>;
}

impl<C: ServiceContainer + ?Sized> ServiceContainerExt for C {
    fn get_as<T: Any + Clone>(&self, key: &str) -> Result<T> {
        let service = self.get(key)?;
        (*service)
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| Error::service_type_mismatch(key, type_name::<T>()))
    }

    fn config(&self) -> Result<ConfigTree> {
        self.get_as::<ConfigTree>(CONFIG_SERVICE_KEY)
    }
}
