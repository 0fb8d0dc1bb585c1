//! Buffer upload, shader compilation and program linking.

use super::{PipelineState, TrianglePipeline, MVP_UNIFORM};
use crate::backend::{GlBackend, ShaderStage};
use crate::error::RendererError;
use crate::shaders::ShaderSource;
use crate::vertex::triangle_bytes;
use tracing::{debug, error, info, warn};

impl<B: GlBackend> TrianglePipeline<B> {
    /// Upload the triangle and build the shader program.
    ///
    /// Only valid from `Uninitialized`. On success the pipeline is
    /// `Ready`; any failure (context, missing source, compile, link) is
    /// logged, leaves the pipeline `Failed` with no program, and is
    /// returned. Intermediate shader objects never outlive this call.
    pub fn initialize(
        &mut self,
        gl: &B,
        shaders: &dyn ShaderSource,
        vertex_path: &str,
        fragment_path: &str,
    ) -> Result<(), RendererError> {
        if self.state != PipelineState::Uninitialized {
            return Err(RendererError::InvalidState {
                op: "initialize",
                state: self.state,
            });
        }

        let result = gl
            .check_context()
            .map_err(RendererError::Context)
            .and_then(|()| self.init_buffers(gl))
            .and_then(|()| {
                self.state = PipelineState::Initialized;
                build_program(gl, shaders, vertex_path, fragment_path)
            });

        match result {
            Ok((program, mvp_location)) => {
                self.program = Some(program);
                self.mvp_location = mvp_location;
                self.state = PipelineState::Ready;
                info!("triangle pipeline ready");
                Ok(())
            }
            Err(e) => {
                error!("triangle pipeline initialization failed: {e}");
                self.state = PipelineState::Failed;
                Err(e)
            }
        }
    }

    /// Allocate the vertex array and upload the static triangle.
    fn init_buffers(&mut self, gl: &B) -> Result<(), RendererError> {
        let vertex_array = gl
            .create_vertex_array()
            .map_err(|e| RendererError::Allocation(format!("vertex array: {e}")))?;
        self.vertex_array = Some(vertex_array);

        let buffer = gl
            .create_buffer()
            .map_err(|e| RendererError::Allocation(format!("vertex buffer: {e}")))?;
        self.buffer = Some(buffer);

        gl.bind_array_buffer(Some(buffer));
        gl.array_buffer_data_static(triangle_bytes());
        gl.bind_array_buffer(None);
        Ok(())
    }
}

fn load_source(
    shaders: &dyn ShaderSource,
    stage: ShaderStage,
    path: &str,
) -> Result<String, RendererError> {
    shaders.load(path).ok_or_else(|| RendererError::ResourceNotFound {
        stage,
        path: path.to_string(),
    })
}

/// Compile one stage; the shader object is deleted on failure.
fn compile_stage<B: GlBackend>(
    gl: &B,
    stage: ShaderStage,
    source: &str,
) -> Result<B::Shader, RendererError> {
    let shader = gl
        .create_shader(stage)
        .map_err(|e| RendererError::Allocation(format!("{stage} shader: {e}")))?;

    if gl.compile_shader(shader, source) {
        debug!("compiled {stage} shader");
        return Ok(shader);
    }

    let log = gl.shader_info_log(shader);
    gl.delete_shader(shader);
    Err(RendererError::Compile {
        stage,
        log: log.trim_end().to_string(),
    })
}

/// Compile both stages, link them, and look up the `mvp` uniform.
///
/// Every shader object created here is deleted before returning.
fn build_program<B: GlBackend>(
    gl: &B,
    shaders: &dyn ShaderSource,
    vertex_path: &str,
    fragment_path: &str,
) -> Result<(B::Program, Option<B::UniformLocation>), RendererError> {
    let vertex_source = load_source(shaders, ShaderStage::Vertex, vertex_path)?;
    let vertex = compile_stage(gl, ShaderStage::Vertex, &vertex_source)?;

    let fragment = match load_source(shaders, ShaderStage::Fragment, fragment_path)
        .and_then(|source| compile_stage(gl, ShaderStage::Fragment, &source))
    {
        Ok(fragment) => fragment,
        Err(e) => {
            gl.delete_shader(vertex);
            return Err(e);
        }
    };

    let linked = link_program(gl, vertex, fragment);
    gl.delete_shader(vertex);
    gl.delete_shader(fragment);
    linked
}

/// Attach, link, look up `mvp`, detach. The program is deleted on failure.
fn link_program<B: GlBackend>(
    gl: &B,
    vertex: B::Shader,
    fragment: B::Shader,
) -> Result<(B::Program, Option<B::UniformLocation>), RendererError> {
    let program = gl
        .create_program()
        .map_err(|e| RendererError::Allocation(format!("program: {e}")))?;

    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    let linked = gl.link_program(program);

    let mvp_location = if linked {
        gl.uniform_location(program, MVP_UNIFORM)
    } else {
        None
    };

    gl.detach_shader(program, vertex);
    gl.detach_shader(program, fragment);

    if !linked {
        let log = gl.program_info_log(program);
        gl.delete_program(program);
        return Err(RendererError::Link(log.trim_end().to_string()));
    }

    if mvp_location.is_none() {
        warn!("linked program has no active \"{MVP_UNIFORM}\" uniform; rotation will not be applied");
    }
    Ok((program, mvp_location))
}
