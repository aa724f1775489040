use crate::render::handles::{BufferHandle, ProgramHandle, ShaderHandle, VertexArrayHandle};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
}

/// Operations shared by the shader pipeline and the immediate-mode pipeline.
pub trait FrameTarget {
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32);

    /// Sets the clear color and clears the color buffer.
    fn clear(&mut self, color: [f32; 4]);
}

/// The slice of the programmable pipeline the triangle renderer uses.
///
/// Methods map one-to-one onto GL entry points so a recording backend can
/// stand in for a real context in tests.
pub trait GraphicsBackend: FrameTarget {
    fn create_shader(&mut self, stage: ShaderStage) -> ShaderHandle;
    fn shader_source(&mut self, shader: &ShaderHandle, source: &str);
    fn compile_shader(&mut self, shader: &ShaderHandle);
    fn shader_compile_status(&mut self, shader: &ShaderHandle) -> bool;
    /// At most `max_len` bytes of the stage's info log.
    fn shader_info_log(&mut self, shader: &ShaderHandle, max_len: usize) -> String;
    fn delete_shader(&mut self, shader: ShaderHandle);

    fn create_program(&mut self) -> ProgramHandle;
    fn attach_shader(&mut self, program: &ProgramHandle, shader: &ShaderHandle);
    fn link_program(&mut self, program: &ProgramHandle);
    fn program_link_status(&mut self, program: &ProgramHandle) -> bool;
    fn program_info_log(&mut self, program: &ProgramHandle, max_len: usize) -> String;
    fn use_program(&mut self, program: &ProgramHandle);
    fn delete_program(&mut self, program: ProgramHandle);

    fn create_vertex_array(&mut self) -> VertexArrayHandle;
    fn bind_vertex_array(&mut self, vao: Option<&VertexArrayHandle>);
    fn delete_vertex_array(&mut self, vao: VertexArrayHandle);

    fn create_buffer(&mut self) -> BufferHandle;
    fn bind_array_buffer(&mut self, buffer: Option<&BufferHandle>);
    /// Uploads `data` to the bound array buffer with static-draw usage.
    fn buffer_data_static(&mut self, data: &[u8]);
    fn delete_buffer(&mut self, buffer: BufferHandle);

    /// Describes a non-normalized float attribute. `stride` and `offset` are in bytes.
    fn vertex_attrib_pointer_f32(&mut self, index: u32, components: i32, stride: i32, offset: usize);
    fn enable_vertex_attrib_array(&mut self, index: u32);

    fn draw_arrays(&mut self, mode: Primitive, first: i32, count: i32);
}

/// Fixed-function drawing between `begin` and `end`.
pub trait ImmediateBackend: FrameTarget {
    fn begin(&mut self, mode: Primitive);
    fn color3(&mut self, r: f32, g: f32, b: f32);
    fn vertex2(&mut self, x: f32, y: f32);
    fn end(&mut self);
}
