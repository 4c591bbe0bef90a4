pub mod config;
mod error;

pub use config::{
    Binding, Config, ConfigBuilder, ConfigError, IdleOptimization, LookupError, Options,
    PlatformEnv, Store, BINDINGS,
};
pub use error::Error;
