use std::fmt;

use ecb_domain::ports::ServiceContainer;
use serde_json::Value;

/// Positional argument of a named factory call
///
/// Named entry points take an argument list whose first element must be
/// the container; anything else is rejected before resolution starts.
#[derive(Clone)]
pub enum FactoryArgument<'a> {
    /// A service container
    Container(&'a dyn ServiceContainer),
    /// Any other value
    Value(Value),
}

impl<'a> FactoryArgument<'a> {
    /// The container, when this argument is one
    pub fn as_container(&self) -> Option<&'a dyn ServiceContainer> {
        match self {
            Self::Container(container) => Some(*container),
            Self::Value(_) => None,
        }
    }
}

impl<'a> From<&'a dyn ServiceContainer> for FactoryArgument<'a> {
    fn from(container: &'a dyn ServiceContainer) -> Self {
        Self::Container(container)
    }
}

impl From<Value> for FactoryArgument<'_> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl fmt::Debug for FactoryArgument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container(_) => f.write_str("Container(..)"),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}
