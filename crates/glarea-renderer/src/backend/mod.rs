//! The seam between the pipeline and OpenGL.
//!
//! [`GlBackend`] exposes the handful of GL entry points the triangle
//! pipeline needs, with handle types left to the implementation.
//! [`GlowBackend`] forwards to a live `glow` context; [`RecordingBackend`]
//! runs headless and records every call so lifecycle rules can be checked
//! without a GPU.

mod native;
mod recording;
mod types;

pub use native::*;
pub use recording::*;
pub use types::*;

use crate::matrix::Mat4;
use std::fmt;

/// OpenGL operations used by the triangle pipeline.
///
/// All calls are issued from the thread that owns the current context.
/// Methods take `&self` like `glow::HasContext`; implementations that need
/// bookkeeping use interior mutability.
pub trait GlBackend {
    type Buffer: Copy + fmt::Debug + PartialEq;
    type VertexArray: Copy + fmt::Debug + PartialEq;
    type Shader: Copy + fmt::Debug + PartialEq;
    type Program: Copy + fmt::Debug + PartialEq;
    type UniformLocation: fmt::Debug;

    /// `Ok` when the context can be used; the error text otherwise.
    fn check_context(&self) -> Result<(), String>;

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Upload `data` to the bound array buffer with a static-draw hint.
    fn array_buffer_data_static(&self, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    /// Set the source and compile; returns the compile status.
    fn compile_shader(&self, shader: Self::Shader, source: &str) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// Link; returns the link status.
    fn link_program(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    fn uniform_location(&self, program: Self::Program, name: &str)
        -> Option<Self::UniformLocation>;
    /// Upload a column-major matrix to the current program, no transpose.
    fn uniform_matrix4(&self, location: &Self::UniformLocation, matrix: &Mat4);

    fn enable_vertex_attrib(&self, index: u32);
    fn disable_vertex_attrib(&self, index: u32);
    /// Describe float attribute `index` in the bound array buffer.
    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32);

    fn clear(&self, color: [f32; 4]);
    fn draw_triangles(&self, first: i32, count: i32);
    fn flush(&self);

    /// Drain the GL error flag; `None` when no error was raised.
    fn take_error(&self) -> Option<String>;
}
