//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod render;
mod rotation;
mod shaders;

pub use logging::*;
pub use render::*;
pub use rotation::*;
pub use shaders::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlAreaConfig {
    pub shaders: ShaderConfig,
    pub render: RenderConfig,
    pub rotation: RotationConfig,
    pub logging: LoggingConfig,
}
