//! The GL drawing surface: rotation state plus a triangle pipeline.
//!
//! A host widget owns one [`GlArea`] and forwards its callbacks to it:
//! `realize` once the context exists, `render` on each redraw, and
//! `unrealize` before the context goes away. Angle changes only mark the
//! surface dirty; the host decides when to redraw.

use crate::backend::GlBackend;
use crate::error::RendererError;
use crate::matrix::Mat4;
use crate::pipeline::TrianglePipeline;
use crate::rotation::{Axis, RotationState};
use crate::shaders::{shader_source_from_config, ShaderSource};
use glarea_config::GlAreaConfig;
use tracing::debug;

pub struct GlArea<B: GlBackend> {
    gl: B,
    pipeline: TrianglePipeline<B>,
    rotation: RotationState,
    shaders: Box<dyn ShaderSource>,
    vertex_path: String,
    fragment_path: String,
    dirty: bool,
}

impl<B: GlBackend> GlArea<B> {
    pub fn new(gl: B, config: &GlAreaConfig, shaders: Box<dyn ShaderSource>) -> Self {
        Self {
            gl,
            pipeline: TrianglePipeline::from_config(&config.render),
            rotation: RotationState::from_config(&config.rotation),
            shaders,
            vertex_path: config.shaders.vertex.clone(),
            fragment_path: config.shaders.fragment.clone(),
            dirty: true,
        }
    }

    /// Build a surface whose shader provider is chosen by `config.shaders`.
    pub fn from_config(gl: B, config: &GlAreaConfig) -> Self {
        let shaders = shader_source_from_config(&config.shaders);
        Self::new(gl, config, shaders)
    }

    /// Context is current: upload geometry and build the program.
    pub fn realize(&mut self) -> Result<(), RendererError> {
        self.pipeline.initialize(
            &self.gl,
            self.shaders.as_ref(),
            &self.vertex_path,
            &self.fragment_path,
        )
    }

    /// Record a new angle for `axis` and request a redraw.
    pub fn set_axis_angle(&mut self, axis: Axis, degrees: f32) {
        debug!("rotation {axis} = {degrees}");
        self.rotation.set(axis, degrees);
        self.dirty = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// The matrix the next frame will upload.
    pub fn matrix(&self) -> Mat4 {
        self.rotation.matrix()
    }

    /// Draw one frame with the current angles.
    pub fn render(&mut self) -> Result<(), RendererError> {
        let matrix = self.matrix();
        self.pipeline.render(&self.gl, &matrix)?;
        self.dirty = false;
        Ok(())
    }

    /// Context is about to go away: release GPU objects.
    pub fn unrealize(&mut self) -> Result<(), RendererError> {
        self.pipeline.destroy(&self.gl)
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn pipeline(&self) -> &TrianglePipeline<B> {
        &self.pipeline
    }

    pub fn backend(&self) -> &B {
        &self.gl
    }
}
