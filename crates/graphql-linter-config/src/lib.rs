mod config;
mod error;
mod loader;

pub use config::{LinterConfig, Settings, Suppression};
pub use error::{ConfigError, Result};
pub use loader::{
    current_project_root, find_project_root, load_config, load_config_from_str, resolve_config,
    CONFIG_FILE_NAME,
};
