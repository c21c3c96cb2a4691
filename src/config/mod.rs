//! TOML configuration: loading, validation and shared storage.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{Config, PageConfig, ServerConfig, SourceConfig};
