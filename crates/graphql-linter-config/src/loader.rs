use crate::{ConfigError, LinterConfig, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up at the project root
pub const CONFIG_FILE_NAME: &str = ".graphql-linter.yml";

/// Entries marking the root of a project, in order of preference
const ROOT_MARKERS: &[&str] = &[".git", CONFIG_FILE_NAME];

/// Find the project root by walking up the directory tree from `start_dir`.
///
/// The first ancestor holding a `.git` entry or a linter config file wins.
/// Falls back to `start_dir` itself when no marker is found.
#[must_use]
pub fn find_project_root(start_dir: &Path) -> PathBuf {
    let mut current_dir = start_dir.to_path_buf();

    loop {
        if ROOT_MARKERS
            .iter()
            .any(|marker| current_dir.join(marker).exists())
        {
            return current_dir;
        }

        if !current_dir.pop() {
            break;
        }
    }

    start_dir.to_path_buf()
}

/// Project root for the current working directory
pub fn current_project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ProjectRoot(e.to_string()))?;
    Ok(find_project_root(&cwd))
}

/// Load a linter config from the specified path.
pub fn load_config(path: &Path) -> Result<LinterConfig> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents, path)
}

/// Load a linter config from a string.
/// The path is only used for error messages.
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<LinterConfig> {
    if contents.trim().is_empty() {
        return Ok(LinterConfig::default());
    }

    serde_yaml::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

/// Load the config at `path`, or fall back to defaults.
///
/// A missing file is only an error when the user named it explicitly.
pub fn resolve_config(path: &Path, explicit: bool) -> Result<LinterConfig> {
    if path.is_file() {
        return load_config(path);
    }

    if explicit {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    Ok(LinterConfig::default())
}
