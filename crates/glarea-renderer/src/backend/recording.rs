//! Headless [`GlBackend`] that records every call.
//!
//! Used by the test suites and anywhere the pipeline has to run without a
//! GL context. Object handles are plain integers, shader "compilation" is
//! a syntax sanity check, and failures can be injected.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::{GlBackend, ShaderStage};
use crate::matrix::Mat4;

/// Kinds of GL objects the recording backend tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Buffer,
    VertexArray,
    Shader,
    Program,
}

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    BufferDataStatic { len: usize },
    DeleteBuffer(u32),
    CreateShader { stage: ShaderStage, id: u32 },
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    DetachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    GetUniformLocation(String),
    UniformMatrix4(Mat4),
    EnableVertexAttrib(u32),
    DisableVertexAttrib(u32),
    VertexAttribPointer {
        index: u32,
        size: i32,
        stride: i32,
        offset: i32,
    },
    Clear([f32; 4]),
    DrawTriangles { first: i32, count: i32 },
    Flush,
}

#[derive(Debug, Default)]
struct ShaderObject {
    stage: Option<ShaderStage>,
    source: String,
    compiled: bool,
    info_log: String,
}

#[derive(Debug, Default)]
struct ProgramObject {
    attached: BTreeSet<u32>,
    uniforms: BTreeMap<String, u32>,
    linked: bool,
    info_log: String,
}

#[derive(Debug, Default)]
struct Recorder {
    next_id: u32,
    calls: Vec<GlCall>,

    buffers: BTreeMap<u32, Vec<u8>>,
    vertex_arrays: BTreeSet<u32>,
    shaders: BTreeMap<u32, ShaderObject>,
    programs: BTreeMap<u32, ProgramObject>,
    deletes: HashMap<ObjectKind, usize>,
    delete_calls: HashMap<ObjectKind, usize>,

    bound_program: Option<u32>,
    bound_array_buffer: Option<u32>,
    bound_vertex_array: Option<u32>,
    enabled_attribs: BTreeSet<u32>,

    uniform_uploads: Vec<Mat4>,
    draws: usize,

    context_error: Option<String>,
    link_failure: Option<String>,
    draw_error: Option<String>,
    error_flag: Option<String>,
}

impl Recorder {
    fn alloc(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn raise(&mut self, error: &str) {
        // GL keeps the first error until it is queried
        if self.error_flag.is_none() {
            self.error_flag = Some(error.to_string());
        }
    }

    fn deleted(&mut self, kind: ObjectKind) {
        *self.deletes.entry(kind).or_insert(0) += 1;
    }

    fn delete_requested(&mut self, kind: ObjectKind) {
        *self.delete_calls.entry(kind).or_insert(0) += 1;
    }
}

/// Recording, failure-injecting GL backend.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    inner: RefCell<Recorder>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    // -- failure injection ---------------------------------------------------

    /// Make [`GlBackend::check_context`] fail until restored.
    pub fn lose_context(&self, message: impl Into<String>) {
        self.inner.borrow_mut().context_error = Some(message.into());
    }

    pub fn restore_context(&self) {
        self.inner.borrow_mut().context_error = None;
    }

    /// Make the next link fail with `info_log`.
    pub fn fail_next_link(&self, info_log: impl Into<String>) {
        self.inner.borrow_mut().link_failure = Some(info_log.into());
    }

    /// Set the GL error flag now, as host code outside the pipeline would.
    pub fn raise_error(&self, error: impl Into<String>) {
        let error: String = error.into();
        self.inner.borrow_mut().raise(&error);
    }

    /// Raise `error` on the GL error flag during the next draw.
    pub fn raise_error_on_next_draw(&self, error: impl Into<String>) {
        self.inner.borrow_mut().draw_error = Some(error.into());
    }

    // -- inspection ----------------------------------------------------------

    pub fn calls(&self) -> Vec<GlCall> {
        self.inner.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.borrow_mut().calls.clear();
    }

    /// Objects of `kind` created and not yet deleted.
    pub fn live_count(&self, kind: ObjectKind) -> usize {
        let inner = self.inner.borrow();
        match kind {
            ObjectKind::Buffer => inner.buffers.len(),
            ObjectKind::VertexArray => inner.vertex_arrays.len(),
            ObjectKind::Shader => inner.shaders.len(),
            ObjectKind::Program => inner.programs.len(),
        }
    }

    /// Successful deletions of `kind`.
    pub fn delete_count(&self, kind: ObjectKind) -> usize {
        self.inner.borrow().deletes.get(&kind).copied().unwrap_or(0)
    }

    /// Delete calls issued for `kind`, including repeats on dead handles.
    pub fn delete_calls(&self, kind: ObjectKind) -> usize {
        self.inner.borrow().delete_calls.get(&kind).copied().unwrap_or(0)
    }

    pub fn buffer_contents(&self, buffer: u32) -> Option<Vec<u8>> {
        self.inner.borrow().buffers.get(&buffer).cloned()
    }

    pub fn bound_program(&self) -> Option<u32> {
        self.inner.borrow().bound_program
    }

    pub fn bound_array_buffer(&self) -> Option<u32> {
        self.inner.borrow().bound_array_buffer
    }

    pub fn bound_vertex_array(&self) -> Option<u32> {
        self.inner.borrow().bound_vertex_array
    }

    pub fn enabled_attribs(&self) -> Vec<u32> {
        self.inner.borrow().enabled_attribs.iter().copied().collect()
    }

    pub fn uniform_uploads(&self) -> Vec<Mat4> {
        self.inner.borrow().uniform_uploads.clone()
    }

    pub fn last_uniform_matrix(&self) -> Option<Mat4> {
        self.inner.borrow().uniform_uploads.last().copied()
    }

    pub fn draw_count(&self) -> usize {
        self.inner.borrow().draws
    }

    fn record(&self, call: GlCall) {
        self.inner.borrow_mut().calls.push(call);
    }
}

/// Compile-time check standing in for a GLSL front end.
///
/// Accepts sources that declare `main` and have balanced braces and
/// parentheses; otherwise returns a driver-style info log.
fn check_glsl(source: &str) -> Result<(), String> {
    let mut depth_brace = 0i32;
    let mut depth_paren = 0i32;
    for (line_no, line) in source.lines().enumerate() {
        for ch in line.chars() {
            match ch {
                '{' => depth_brace += 1,
                '}' => depth_brace -= 1,
                '(' => depth_paren += 1,
                ')' => depth_paren -= 1,
                _ => {}
            }
            if depth_brace < 0 || depth_paren < 0 {
                return Err(format!("ERROR: 0:{}: syntax error, unexpected '{ch}'", line_no + 1));
            }
        }
    }
    if depth_brace != 0 || depth_paren != 0 {
        return Err("ERROR: 0:0: syntax error, unexpected end of file".into());
    }
    if !source.contains("main") {
        return Err("ERROR: 0:0: 'main' : function not defined".into());
    }
    Ok(())
}

/// Names declared as `uniform <type> <name>;` in `source`.
fn declared_uniforms(source: &str) -> impl Iterator<Item = String> + '_ {
    source.lines().filter_map(|line| {
        let rest = line.trim().strip_prefix("uniform ")?;
        let name = rest.trim_end_matches(';').split_whitespace().last()?;
        Some(name.to_string())
    })
}

impl GlBackend for RecordingBackend {
    type Buffer = u32;
    type VertexArray = u32;
    type Shader = u32;
    type Program = u32;
    type UniformLocation = u32;

    fn check_context(&self) -> Result<(), String> {
        match &self.inner.borrow().context_error {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.alloc();
        inner.vertex_arrays.insert(id);
        inner.calls.push(GlCall::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        let mut inner = self.inner.borrow_mut();
        if let Some(id) = vertex_array {
            if !inner.vertex_arrays.contains(&id) {
                inner.raise("GL_INVALID_OPERATION");
                return;
            }
        }
        inner.bound_vertex_array = vertex_array;
        inner.calls.push(GlCall::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::DeleteVertexArray(vertex_array));
        inner.delete_requested(ObjectKind::VertexArray);
        if inner.vertex_arrays.remove(&vertex_array) {
            inner.deleted(ObjectKind::VertexArray);
            if inner.bound_vertex_array == Some(vertex_array) {
                inner.bound_vertex_array = None;
            }
        }
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.alloc();
        inner.buffers.insert(id, Vec::new());
        inner.calls.push(GlCall::CreateBuffer(id));
        Ok(id)
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        let mut inner = self.inner.borrow_mut();
        if let Some(id) = buffer {
            if !inner.buffers.contains_key(&id) {
                inner.raise("GL_INVALID_OPERATION");
                return;
            }
        }
        inner.bound_array_buffer = buffer;
        inner.calls.push(GlCall::BindArrayBuffer(buffer));
    }

    fn array_buffer_data_static(&self, data: &[u8]) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::BufferDataStatic { len: data.len() });
        match inner.bound_array_buffer {
            Some(id) => {
                inner.buffers.insert(id, data.to_vec());
            }
            None => inner.raise("GL_INVALID_OPERATION"),
        }
    }

    fn delete_buffer(&self, buffer: u32) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::DeleteBuffer(buffer));
        inner.delete_requested(ObjectKind::Buffer);
        if inner.buffers.remove(&buffer).is_some() {
            inner.deleted(ObjectKind::Buffer);
            if inner.bound_array_buffer == Some(buffer) {
                inner.bound_array_buffer = None;
            }
        }
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.alloc();
        inner.shaders.insert(
            id,
            ShaderObject {
                stage: Some(stage),
                ..Default::default()
            },
        );
        inner.calls.push(GlCall::CreateShader { stage, id });
        Ok(id)
    }

    fn compile_shader(&self, shader: u32, source: &str) -> bool {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::CompileShader(shader));
        let Some(object) = inner.shaders.get_mut(&shader) else {
            inner.raise("GL_INVALID_VALUE");
            return false;
        };
        object.source = source.to_string();
        match check_glsl(source) {
            Ok(()) => {
                object.compiled = true;
                object.info_log.clear();
                true
            }
            Err(log) => {
                object.compiled = false;
                object.info_log = log;
                false
            }
        }
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.inner
            .borrow()
            .shaders
            .get(&shader)
            .map(|s| s.info_log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: u32) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::DeleteShader(shader));
        inner.delete_requested(ObjectKind::Shader);
        // Real GL defers deleting a shader that is still attached; here it
        // goes away immediately and the attachment stays on the program.
        if inner.shaders.remove(&shader).is_some() {
            inner.deleted(ObjectKind::Shader);
        }
    }

    fn create_program(&self) -> Result<u32, String> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.alloc();
        inner.programs.insert(id, ProgramObject::default());
        inner.calls.push(GlCall::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::AttachShader { program, shader });
        if !inner.shaders.contains_key(&shader) {
            inner.raise("GL_INVALID_VALUE");
            return;
        }
        match inner.programs.get_mut(&program) {
            Some(p) => {
                p.attached.insert(shader);
            }
            None => inner.raise("GL_INVALID_VALUE"),
        }
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::DetachShader { program, shader });
        let removed = inner
            .programs
            .get_mut(&program)
            .map(|p| p.attached.remove(&shader))
            .unwrap_or(false);
        if !removed {
            inner.raise("GL_INVALID_OPERATION");
        }
    }

    fn link_program(&self, program: u32) -> bool {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::LinkProgram(program));

        let forced = inner.link_failure.take();
        let Some(attached) = inner.programs.get(&program).map(|p| p.attached.clone()) else {
            inner.raise("GL_INVALID_VALUE");
            return false;
        };

        let mut stages = Vec::new();
        let mut uniforms = BTreeMap::new();
        for id in &attached {
            if let Some(shader) = inner.shaders.get(id) {
                if shader.compiled {
                    stages.extend(shader.stage);
                }
                for name in declared_uniforms(&shader.source) {
                    let location = uniforms.len() as u32;
                    uniforms.entry(name).or_insert(location);
                }
            }
        }

        let failure = forced.or_else(|| {
            let has = |stage| stages.contains(&stage);
            if !has(ShaderStage::Vertex) || !has(ShaderStage::Fragment) {
                Some("error: program needs a compiled vertex and fragment shader".to_string())
            } else {
                None
            }
        });

        let Some(object) = inner.programs.get_mut(&program) else {
            return false;
        };
        match failure {
            Some(log) => {
                object.linked = false;
                object.uniforms.clear();
                object.info_log = log;
                false
            }
            None => {
                object.linked = true;
                object.uniforms = uniforms;
                object.info_log.clear();
                true
            }
        }
    }

    fn program_info_log(&self, program: u32) -> String {
        self.inner
            .borrow()
            .programs
            .get(&program)
            .map(|p| p.info_log.clone())
            .unwrap_or_default()
    }

    fn use_program(&self, program: Option<u32>) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::UseProgram(program));
        if let Some(id) = program {
            let linked = inner.programs.get(&id).map(|p| p.linked).unwrap_or(false);
            if !linked {
                inner.raise("GL_INVALID_OPERATION");
                return;
            }
        }
        inner.bound_program = program;
    }

    fn delete_program(&self, program: u32) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::DeleteProgram(program));
        inner.delete_requested(ObjectKind::Program);
        if inner.programs.remove(&program).is_some() {
            inner.deleted(ObjectKind::Program);
            if inner.bound_program == Some(program) {
                inner.bound_program = None;
            }
        }
    }

    fn uniform_location(&self, program: u32, name: &str) -> Option<u32> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::GetUniformLocation(name.to_string()));
        inner
            .programs
            .get(&program)
            .and_then(|p| p.uniforms.get(name).copied())
    }

    fn uniform_matrix4(&self, _location: &u32, matrix: &Mat4) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::UniformMatrix4(*matrix));
        if inner.bound_program.is_none() {
            inner.raise("GL_INVALID_OPERATION");
            return;
        }
        inner.uniform_uploads.push(*matrix);
    }

    fn enable_vertex_attrib(&self, index: u32) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::EnableVertexAttrib(index));
        inner.enabled_attribs.insert(index);
    }

    fn disable_vertex_attrib(&self, index: u32) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::DisableVertexAttrib(index));
        inner.enabled_attribs.remove(&index);
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::VertexAttribPointer {
            index,
            size,
            stride,
            offset,
        });
        if inner.bound_array_buffer.is_none() {
            inner.raise("GL_INVALID_OPERATION");
        }
    }

    fn clear(&self, color: [f32; 4]) {
        self.record(GlCall::Clear(color));
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::DrawTriangles { first, count });
        if inner.bound_program.is_none() || inner.bound_vertex_array.is_none() {
            inner.raise("GL_INVALID_OPERATION");
            return;
        }
        if let Some(error) = inner.draw_error.take() {
            inner.raise(&error);
            return;
        }
        inner.draws += 1;
    }

    fn flush(&self) {
        self.record(GlCall::Flush);
    }

    fn take_error(&self) -> Option<String> {
        self.inner.borrow_mut().error_flag.take()
    }
}
