//! Per-frame draw submission.

use super::{PipelineState, TrianglePipeline};
use crate::backend::GlBackend;
use crate::error::RendererError;
use crate::matrix::Mat4;
use crate::vertex::{TriangleVertex, TRIANGLE_VERTEX_COUNT};
use tracing::{debug, warn};

impl<B: GlBackend> TrianglePipeline<B> {
    /// Clear, upload `matrix` as `mvp` and draw the triangle once.
    ///
    /// Issues no GL calls unless the pipeline is `Ready`. Every bind and
    /// enable is undone before returning. A GL error raised during the
    /// sequence drops this frame only; the pipeline stays `Ready`. Errors
    /// left on the flag before the frame starts are discarded.
    pub fn render(&self, gl: &B, matrix: &Mat4) -> Result<(), RendererError> {
        let (Some(program), Some(vertex_array), Some(buffer)) =
            (self.program, self.vertex_array, self.buffer)
        else {
            return Err(self.not_ready());
        };
        if self.state != PipelineState::Ready {
            return Err(self.not_ready());
        }

        if let Err(e) = gl.check_context() {
            warn!("dropping frame, GL context unavailable: {e}");
            return Err(RendererError::Context(e));
        }

        // the error flag is sticky: anything set before this frame is not ours
        if let Some(stale) = gl.take_error() {
            debug!("discarding GL error raised before this frame: {stale}");
        }

        let position = TriangleVertex::POSITION_LOCATION;

        gl.clear(self.clear_color);

        gl.use_program(Some(program));
        if let Some(location) = &self.mvp_location {
            gl.uniform_matrix4(location, matrix);
        }

        gl.bind_vertex_array(Some(vertex_array));
        gl.bind_array_buffer(Some(buffer));
        gl.enable_vertex_attrib(position);
        gl.vertex_attrib_pointer_f32(position, TriangleVertex::POSITION_COMPONENTS, 0, 0);

        gl.draw_triangles(0, TRIANGLE_VERTEX_COUNT);

        gl.disable_vertex_attrib(position);
        gl.bind_array_buffer(None);
        gl.bind_vertex_array(None);
        gl.use_program(None);

        gl.flush();

        if let Some(e) = gl.take_error() {
            warn!("dropping frame, GL error during draw: {e}");
            return Err(RendererError::Context(e));
        }
        Ok(())
    }

    fn not_ready(&self) -> RendererError {
        match self.state {
            PipelineState::Destroyed => RendererError::InvalidState {
                op: "render",
                state: self.state,
            },
            state => RendererError::NotReady(state),
        }
    }
}
