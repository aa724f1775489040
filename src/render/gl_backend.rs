// All raw `gl` calls live here.

use crate::render::backend::{FrameTarget, GraphicsBackend, ImmediateBackend, Primitive, ShaderStage};
use crate::render::handles::{BufferHandle, ProgramHandle, ShaderHandle, VertexArrayHandle};
use crate::utils::error::BootstrapError;
use gl::types::*;
use std::ffi::c_void;

fn stage_enum(stage: ShaderStage) -> GLenum {
    match stage {
        ShaderStage::Vertex => gl::VERTEX_SHADER,
        ShaderStage::Fragment => gl::FRAGMENT_SHADER,
    }
}

fn primitive_enum(mode: Primitive) -> GLenum {
    match mode {
        Primitive::Triangles => gl::TRIANGLES,
    }
}

// `reported_len` is what INFO_LOG_LENGTH says, including the terminator.
fn read_info_log<F>(reported_len: GLint, max_len: usize, fetch: F) -> String
where
    F: FnOnce(GLsizei, *mut GLsizei, *mut GLchar),
{
    let capacity = (reported_len.max(0) as usize).min(max_len);
    if capacity == 0 {
        return String::new();
    }

    let mut buffer = vec![0u8; capacity];
    let mut written: GLsizei = 0;
    fetch(capacity as GLsizei, &mut written, buffer.as_mut_ptr() as *mut GLchar);
    buffer.truncate((written.max(0) as usize).min(capacity));

    String::from_utf8_lossy(&buffer).into_owned()
}

/// Modern-pipeline backend over the global `gl` bindings.
///
/// Only the bootstrapper hands these out, after `gl::load_with` succeeded
/// against a current context.
#[derive(Debug)]
pub struct GlBackend {
    _loaded: (),
}

impl GlBackend {
    pub(crate) fn assume_loaded() -> Self {
        Self { _loaded: () }
    }
}

impl FrameTarget for GlBackend {
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        unsafe {
            gl::Viewport(x, y, width as GLsizei, height as GLsizei);
        }
    }

    fn clear(&mut self, color: [f32; 4]) {
        unsafe {
            gl::ClearColor(color[0], color[1], color[2], color[3]);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}

impl GraphicsBackend for GlBackend {
    fn create_shader(&mut self, stage: ShaderStage) -> ShaderHandle {
        ShaderHandle::from_raw(unsafe { gl::CreateShader(stage_enum(stage)) })
    }

    fn shader_source(&mut self, shader: &ShaderHandle, source: &str) {
        // Explicit length, so the source needs no NUL terminator.
        let source_ptr = source.as_ptr() as *const GLchar;
        let source_len = source.len() as GLint;
        unsafe {
            gl::ShaderSource(shader.raw(), 1, &source_ptr, &source_len);
        }
    }

    fn compile_shader(&mut self, shader: &ShaderHandle) {
        unsafe {
            gl::CompileShader(shader.raw());
        }
    }

    fn shader_compile_status(&mut self, shader: &ShaderHandle) -> bool {
        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader.raw(), gl::COMPILE_STATUS, &mut success);
        }
        success != 0
    }

    fn shader_info_log(&mut self, shader: &ShaderHandle, max_len: usize) -> String {
        let mut len = 0;
        unsafe {
            gl::GetShaderiv(shader.raw(), gl::INFO_LOG_LENGTH, &mut len);
        }

        read_info_log(len, max_len, |capacity, written, buffer| unsafe {
            gl::GetShaderInfoLog(shader.raw(), capacity, written, buffer);
        })
    }

    fn delete_shader(&mut self, shader: ShaderHandle) {
        unsafe {
            gl::DeleteShader(shader.raw());
        }
    }

    fn create_program(&mut self) -> ProgramHandle {
        ProgramHandle::from_raw(unsafe { gl::CreateProgram() })
    }

    fn attach_shader(&mut self, program: &ProgramHandle, shader: &ShaderHandle) {
        unsafe {
            gl::AttachShader(program.raw(), shader.raw());
        }
    }

    fn link_program(&mut self, program: &ProgramHandle) {
        unsafe {
            gl::LinkProgram(program.raw());
        }
    }

    fn program_link_status(&mut self, program: &ProgramHandle) -> bool {
        let mut success = 0;
        unsafe {
            gl::GetProgramiv(program.raw(), gl::LINK_STATUS, &mut success);
        }
        success != 0
    }

    fn program_info_log(&mut self, program: &ProgramHandle, max_len: usize) -> String {
        let mut len = 0;
        unsafe {
            gl::GetProgramiv(program.raw(), gl::INFO_LOG_LENGTH, &mut len);
        }

        read_info_log(len, max_len, |capacity, written, buffer| unsafe {
            gl::GetProgramInfoLog(program.raw(), capacity, written, buffer);
        })
    }

    fn use_program(&mut self, program: &ProgramHandle) {
        unsafe {
            gl::UseProgram(program.raw());
        }
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        unsafe {
            gl::DeleteProgram(program.raw());
        }
    }

    fn create_vertex_array(&mut self) -> VertexArrayHandle {
        let mut vao = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
        }
        VertexArrayHandle::from_raw(vao)
    }

    fn bind_vertex_array(&mut self, vao: Option<&VertexArrayHandle>) {
        unsafe {
            gl::BindVertexArray(vao.map_or(0, VertexArrayHandle::raw));
        }
    }

    fn delete_vertex_array(&mut self, vao: VertexArrayHandle) {
        let id = vao.raw();
        unsafe {
            gl::DeleteVertexArrays(1, &id);
        }
    }

    fn create_buffer(&mut self) -> BufferHandle {
        let mut vbo = 0;
        unsafe {
            gl::GenBuffers(1, &mut vbo);
        }
        BufferHandle::from_raw(vbo)
    }

    fn bind_array_buffer(&mut self, buffer: Option<&BufferHandle>) {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, buffer.map_or(0, BufferHandle::raw));
        }
    }

    fn buffer_data_static(&mut self, data: &[u8]) {
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                data.len() as GLsizeiptr,
                data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
        }
    }

    fn delete_buffer(&mut self, buffer: BufferHandle) {
        let id = buffer.raw();
        unsafe {
            gl::DeleteBuffers(1, &id);
        }
    }

    fn vertex_attrib_pointer_f32(&mut self, index: u32, components: i32, stride: i32, offset: usize) {
        unsafe {
            gl::VertexAttribPointer(
                index,
                components,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset as *const c_void,
            );
        }
    }

    fn enable_vertex_attrib_array(&mut self, index: u32) {
        unsafe {
            gl::EnableVertexAttribArray(index);
        }
    }

    fn draw_arrays(&mut self, mode: Primitive, first: i32, count: i32) {
        unsafe {
            gl::DrawArrays(primitive_enum(mode), first, count);
        }
    }
}

type BeginFn = unsafe extern "system" fn(GLenum);
type EndFn = unsafe extern "system" fn();
type Color3fFn = unsafe extern "system" fn(GLfloat, GLfloat, GLfloat);
type Vertex2fFn = unsafe extern "system" fn(GLfloat, GLfloat);

// The `gl` crate is generated for the core profile, so the fixed-function
// entry points have to be resolved by hand.
macro_rules! load_proc {
    ($loader:expr, $name:literal, $ty:ty) => {{
        let address = $loader($name);
        if address.is_null() {
            return Err(BootstrapError::LoaderInit(format!("{} is not available", $name)));
        }
        unsafe { std::mem::transmute::<*const c_void, $ty>(address) }
    }};
}

/// Immediate-mode backend for compatibility-profile contexts.
pub struct ImmediateGl {
    begin: BeginFn,
    end: EndFn,
    color3f: Color3fFn,
    vertex2f: Vertex2fFn,
}

impl ImmediateGl {
    /// Resolves `glBegin`, `glEnd`, `glColor3f` and `glVertex2f` through `loader`.
    /// The `gl` bindings must already be loaded for the same context.
    pub fn load<F>(mut loader: F) -> Result<Self, BootstrapError>
    where
        F: FnMut(&str) -> *const c_void,
    {
        Ok(Self {
            begin: load_proc!(loader, "glBegin", BeginFn),
            end: load_proc!(loader, "glEnd", EndFn),
            color3f: load_proc!(loader, "glColor3f", Color3fFn),
            vertex2f: load_proc!(loader, "glVertex2f", Vertex2fFn),
        })
    }
}

impl FrameTarget for ImmediateGl {
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        GlBackend::assume_loaded().viewport(x, y, width, height);
    }

    fn clear(&mut self, color: [f32; 4]) {
        GlBackend::assume_loaded().clear(color);
    }
}

impl ImmediateBackend for ImmediateGl {
    fn begin(&mut self, mode: Primitive) {
        unsafe { (self.begin)(primitive_enum(mode)) }
    }

    fn color3(&mut self, r: f32, g: f32, b: f32) {
        unsafe { (self.color3f)(r, g, b) }
    }

    fn vertex2(&mut self, x: f32, y: f32) {
        unsafe { (self.vertex2f)(x, y) }
    }

    fn end(&mut self) {
        unsafe { (self.end)() }
    }
}

/// Driver version string of the current context, if the driver reports one.
pub fn gl_version_string() -> Option<String> {
    let version = unsafe { gl::GetString(gl::VERSION) };
    if version.is_null() {
        return None;
    }
    let version = unsafe { std::ffi::CStr::from_ptr(version as *const std::ffi::c_char) };
    Some(version.to_string_lossy().into_owned())
}
