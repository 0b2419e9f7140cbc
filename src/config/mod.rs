//! Configuration module for Handoff
//!
//! Selects and parameterizes a store backend. See `loader` for the lookup
//! hierarchy.

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, suggest, EnvVarValidator};
pub use loader::{apply_overrides, user_config_path, ConfigWarning, LOCAL_CONFIG_FILE};
pub use types::{Backend, Config, StoreConfig};
