//! Rotating-triangle renderer for a GL drawing surface.
//!
//! Builds a rotation matrix from three per-axis angles and draws a single
//! triangle through a small shader pipeline. GL access goes through the
//! [`GlBackend`] trait: [`GlowBackend`] wraps a live `glow` context and
//! [`RecordingBackend`] runs headless for tests.

pub mod backend;
pub mod error;
pub mod matrix;
pub mod pipeline;
pub mod rotation;
pub mod shaders;
pub mod surface;
pub mod vertex;

pub use backend::{GlBackend, GlowBackend, RecordingBackend, ShaderStage};
pub use error::RendererError;
pub use matrix::{compute_matrix, Mat4};
pub use pipeline::{PipelineState, TrianglePipeline};
pub use rotation::{Axis, RotationState};
pub use shaders::{shader_source_from_config, DirectoryShaders, EmbeddedShaders, ShaderSource};
pub use surface::GlArea;

use glarea_config::schema::LoggingConfig;

/// Install the global subscriber at the level named by `logging.level`.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let directive = glarea_common::directive_for_level(&config.level);
    glarea_common::init_logging(Some(&directive))
}
