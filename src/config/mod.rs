//! Store configuration.

mod config;

pub use config::{ConfigError, StoreConfig};
