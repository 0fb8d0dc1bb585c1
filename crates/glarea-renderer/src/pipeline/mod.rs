//! Triangle pipeline: vertex buffer, shader program, `mvp` upload, draw.
//!
//! The pipeline owns every GPU handle it creates and releases them
//! exactly once in [`TrianglePipeline::destroy`]. It never owns the
//! backend; each call borrows the one the surface holds, so the GL
//! context is only touched from inside the host's callbacks.

mod draw;
mod init;
mod state;


pub use state::PipelineState;

use crate::backend::GlBackend;
use crate::error::RendererError;
use glarea_config::schema::RenderConfig;
use tracing::{error, info, warn};

/// Name of the matrix uniform in the vertex shader.
pub const MVP_UNIFORM: &str = "mvp";

pub struct TrianglePipeline<B: GlBackend> {
    state: PipelineState,
    clear_color: [f32; 4],
    vertex_array: Option<B::VertexArray>,
    buffer: Option<B::Buffer>,
    program: Option<B::Program>,
    mvp_location: Option<B::UniformLocation>,
}

impl<B: GlBackend> TrianglePipeline<B> {
    pub fn new(clear_color: [f32; 4]) -> Self {
        Self {
            state: PipelineState::Uninitialized,
            clear_color,
            vertex_array: None,
            buffer: None,
            program: None,
            mvp_location: None,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.clear_color)
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == PipelineState::Ready
    }

    /// The linked program; `None` unless the pipeline is `Ready`.
    pub fn program(&self) -> Option<B::Program> {
        self.program
    }

    pub fn buffer(&self) -> Option<B::Buffer> {
        self.buffer
    }

    pub fn vertex_array(&self) -> Option<B::VertexArray> {
        self.vertex_array
    }

    pub fn has_mvp_uniform(&self) -> bool {
        self.mvp_location.is_some()
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: [f32; 4]) {
        self.clear_color = color;
    }

    fn owns_handles(&self) -> bool {
        self.vertex_array.is_some() || self.buffer.is_some() || self.program.is_some()
    }

    /// Release the buffer, vertex array and program.
    ///
    /// Allowed from `Ready` or `Failed`; always ends in `Destroyed`. When
    /// the context is unusable the handles are abandoned (they go away
    /// with the context) and the context error is returned.
    pub fn destroy(&mut self, gl: &B) -> Result<(), RendererError> {
        if !self.state.can_destroy() {
            return Err(RendererError::InvalidState {
                op: "destroy",
                state: self.state,
            });
        }
        self.state = PipelineState::Destroyed;

        if let Err(e) = gl.check_context() {
            error!("GL context unavailable during destroy, abandoning GPU objects: {e}");
            self.vertex_array = None;
            self.buffer = None;
            self.program = None;
            self.mvp_location = None;
            return Err(RendererError::Context(e));
        }

        if let Some(buffer) = self.buffer.take() {
            gl.delete_buffer(buffer);
        }
        if let Some(vertex_array) = self.vertex_array.take() {
            gl.delete_vertex_array(vertex_array);
        }
        if let Some(program) = self.program.take() {
            gl.delete_program(program);
        }
        self.mvp_location = None;

        info!("triangle pipeline destroyed");
        Ok(())
    }
}

impl<B: GlBackend> Default for TrianglePipeline<B> {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl<B: GlBackend> Drop for TrianglePipeline<B> {
    fn drop(&mut self) {
        if self.owns_handles() {
            warn!(
                "triangle pipeline dropped in state {} without destroy; GPU objects live until the context goes away",
                self.state
            );
        }
    }
}
