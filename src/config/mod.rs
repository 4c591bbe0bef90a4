//! Layered configuration lookup and options mapping.

mod binding;
mod builder;
mod coerce;
mod error;
mod file;
mod options;
mod resolve;
mod store;

pub use binding::{Accessor, Binding, Field, BINDINGS};
pub use builder::ConfigBuilder;
pub use error::{ConfigError, LookupError};
pub use file::{PlatformEnv, CONFIG_FILE_NAME};
pub use options::{IdleOptimization, Options, UnknownToken};
pub use resolve::{Config, Layer, Tier, SCOPE_PREFIX};
pub use store::Store;
