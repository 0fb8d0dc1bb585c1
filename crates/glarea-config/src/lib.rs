//! glarea configuration system.
//!
//! TOML-based configuration for the GL area: which shader sources to
//! compile, the clear colour, the initial rotation and the log level.
//! Every section uses serde defaults, so partial configs work.
//!
//! ```rust,no_run
//! use glarea_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("vertex shader: {}", config.shaders.vertex);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GlAreaConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{default_config_path, load_from_path};

use glarea_common::ConfigError;

/// Load config from the platform default path.
///
/// Creates a commented default file if none exists. A file whose values
/// fail validation is an error, not silently replaced.
pub fn load_config() -> Result<GlAreaConfig, ConfigError> {
    toml_loader::load_default()
}
