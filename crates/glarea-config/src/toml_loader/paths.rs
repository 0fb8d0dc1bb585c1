//! Where the config file lives, and writing the first-run template.

use glarea_common::ConfigError;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

/// Environment variable that points at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "GLAREA_CONFIG";

const APP_DIR: &str = "glarea";
const CONFIG_FILE: &str = "config.toml";

/// `$GLAREA_CONFIG` if set and non-empty, else `<config dir>/glarea/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(std::env::var_os(CONFIG_PATH_ENV), dirs::config_dir())
}

pub(crate) fn resolve_config_path(
    explicit: Option<OsString>,
    platform_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit.filter(|p| !p.is_empty()) {
        debug!("config path taken from {CONFIG_PATH_ENV}");
        return Ok(PathBuf::from(path));
    }
    platform_dir
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| {
            ConfigError::ParseError(format!(
                "no platform config directory; set {CONFIG_PATH_ENV} to a config file"
            ))
        })
}

/// Write the commented template to `path`, creating parent directories.
///
/// An existing file is left untouched.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", target.display()))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err("create config directory", parent, e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("config already present at {}, not overwriting", path.display());
            return Ok(());
        }
        Err(e) => return Err(io_err("create", path, e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_err("write default config to", path, e))?;

    info!("created default config at {}", path.display());
    Ok(())
}
