// Test double for the GL backends. Records every call with its arguments and
// fakes compile/link results well enough to exercise the error paths.

use crate::render::backend::{FrameTarget, GraphicsBackend, ImmediateBackend, Primitive, ShaderStage};
use crate::render::handles::{BufferHandle, ProgramHandle, ShaderHandle, VertexArrayHandle};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    Viewport { x: i32, y: i32, width: u32, height: u32 },
    Clear([f32; 4]),
    CreateShader(ShaderStage, u32),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    UseProgram(u32),
    DeleteProgram(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    DeleteBuffer(u32),
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    BufferDataStatic(Vec<u8>),
    VertexAttribPointer { index: u32, components: i32, stride: i32, offset: usize },
    EnableVertexAttribArray(u32),
    DrawArrays { mode: Primitive, first: i32, count: i32 },
    Begin(Primitive),
    Color3([f32; 3]),
    Vertex2([f32; 2]),
    End,
}

#[derive(Debug, Default)]
struct FakeShader {
    source: String,
    compiled: bool,
}

#[derive(Debug, Default)]
struct FakeProgram {
    attached: Vec<u32>,
    linked: bool,
    log: String,
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<GlCall>,
    next_id: u32,
    shaders: HashMap<u32, FakeShader>,
    programs: HashMap<u32, FakeProgram>,
}

// A stand-in for the driver's parser: enough to tell a real stage from junk.
fn fake_compile(source: &str) -> Result<(), String> {
    if !source.trim_start().starts_with("#version") {
        return Err("0:1(1): error: missing #version directive".into());
    }
    if !source.contains("void main") {
        return Err("0:1(1): error: no entry point `main` defined".into());
    }
    if source.matches('{').count() != source.matches('}').count() {
        return Err("0:3(1): error: syntax error, unexpected end of file".into());
    }
    if source.contains("= ;") {
        return Err("0:3(19): error: syntax error, unexpected ';'".into());
    }
    Ok(())
}

fn truncate_log(log: &str, max_len: usize) -> String {
    let mut end = log.len().min(max_len);
    while !log.is_char_boundary(end) {
        end -= 1;
    }
    log[..end].to_string()
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    pub fn count(&self, predicate: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }

    pub fn draw_calls(&self) -> Vec<&GlCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, GlCall::DrawArrays { .. }))
            .collect()
    }

    pub fn uploaded_bytes(&self) -> Vec<&[u8]> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                GlCall::BufferDataStatic(bytes) => Some(bytes.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn linked(&self, program: u32) -> bool {
        self.programs.get(&program).map_or(false, |p| p.linked)
    }
}

impl FrameTarget for RecordingBackend {
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.calls.push(GlCall::Viewport { x, y, width, height });
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.calls.push(GlCall::Clear(color));
    }
}

impl GraphicsBackend for RecordingBackend {
    fn create_shader(&mut self, stage: ShaderStage) -> ShaderHandle {
        let id = self.next_id();
        self.shaders.insert(id, FakeShader::default());
        self.calls.push(GlCall::CreateShader(stage, id));
        ShaderHandle::from_raw(id)
    }

    fn shader_source(&mut self, shader: &ShaderHandle, source: &str) {
        if let Some(fake) = self.shaders.get_mut(&shader.raw()) {
            fake.source = source.to_string();
        }
        self.calls.push(GlCall::ShaderSource(shader.raw()));
    }

    fn compile_shader(&mut self, shader: &ShaderHandle) {
        if let Some(fake) = self.shaders.get_mut(&shader.raw()) {
            fake.compiled = fake_compile(&fake.source).is_ok();
        }
        self.calls.push(GlCall::CompileShader(shader.raw()));
    }

    fn shader_compile_status(&mut self, shader: &ShaderHandle) -> bool {
        self.shaders.get(&shader.raw()).map_or(false, |fake| fake.compiled)
    }

    fn shader_info_log(&mut self, shader: &ShaderHandle, max_len: usize) -> String {
        let log = self
            .shaders
            .get(&shader.raw())
            .and_then(|fake| fake_compile(&fake.source).err())
            .unwrap_or_default();
        truncate_log(&log, max_len)
    }

    fn delete_shader(&mut self, shader: ShaderHandle) {
        // Like GL, a deleted stage stays usable by programs it is attached to.
        self.calls.push(GlCall::DeleteShader(shader.raw()));
    }

    fn create_program(&mut self) -> ProgramHandle {
        let id = self.next_id();
        self.programs.insert(id, FakeProgram::default());
        self.calls.push(GlCall::CreateProgram(id));
        ProgramHandle::from_raw(id)
    }

    fn attach_shader(&mut self, program: &ProgramHandle, shader: &ShaderHandle) {
        if let Some(fake) = self.programs.get_mut(&program.raw()) {
            fake.attached.push(shader.raw());
        }
        self.calls.push(GlCall::AttachShader {
            program: program.raw(),
            shader: shader.raw(),
        });
    }

    fn link_program(&mut self, program: &ProgramHandle) {
        let shaders = &self.shaders;
        if let Some(fake) = self.programs.get_mut(&program.raw()) {
            let all_compiled = fake
                .attached
                .iter()
                .all(|id| shaders.get(id).map_or(false, |shader| shader.compiled));
            fake.linked = all_compiled && fake.attached.len() == 2;
            fake.log = if fake.linked {
                String::new()
            } else {
                "error: linking with uncompiled/unspecialized shader".into()
            };
        }
        self.calls.push(GlCall::LinkProgram(program.raw()));
    }

    fn program_link_status(&mut self, program: &ProgramHandle) -> bool {
        self.linked(program.raw())
    }

    fn program_info_log(&mut self, program: &ProgramHandle, max_len: usize) -> String {
        self.programs
            .get(&program.raw())
            .map(|fake| truncate_log(&fake.log, max_len))
            .unwrap_or_default()
    }

    fn use_program(&mut self, program: &ProgramHandle) {
        self.calls.push(GlCall::UseProgram(program.raw()));
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        self.calls.push(GlCall::DeleteProgram(program.raw()));
    }

    fn create_vertex_array(&mut self) -> VertexArrayHandle {
        let id = self.next_id();
        self.calls.push(GlCall::CreateVertexArray(id));
        VertexArrayHandle::from_raw(id)
    }

    fn bind_vertex_array(&mut self, vao: Option<&VertexArrayHandle>) {
        self.calls.push(GlCall::BindVertexArray(vao.map(VertexArrayHandle::raw)));
    }

    fn delete_vertex_array(&mut self, vao: VertexArrayHandle) {
        self.calls.push(GlCall::DeleteVertexArray(vao.raw()));
    }

    fn create_buffer(&mut self) -> BufferHandle {
        let id = self.next_id();
        self.calls.push(GlCall::CreateBuffer(id));
        BufferHandle::from_raw(id)
    }

    fn bind_array_buffer(&mut self, buffer: Option<&BufferHandle>) {
        self.calls.push(GlCall::BindArrayBuffer(buffer.map(BufferHandle::raw)));
    }

    fn buffer_data_static(&mut self, data: &[u8]) {
        self.calls.push(GlCall::BufferDataStatic(data.to_vec()));
    }

    fn delete_buffer(&mut self, buffer: BufferHandle) {
        self.calls.push(GlCall::DeleteBuffer(buffer.raw()));
    }

    fn vertex_attrib_pointer_f32(&mut self, index: u32, components: i32, stride: i32, offset: usize) {
        self.calls.push(GlCall::VertexAttribPointer {
            index,
            components,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&mut self, index: u32) {
        self.calls.push(GlCall::EnableVertexAttribArray(index));
    }

    fn draw_arrays(&mut self, mode: Primitive, first: i32, count: i32) {
        self.calls.push(GlCall::DrawArrays { mode, first, count });
    }
}

impl ImmediateBackend for RecordingBackend {
    fn begin(&mut self, mode: Primitive) {
        self.calls.push(GlCall::Begin(mode));
    }

    fn color3(&mut self, r: f32, g: f32, b: f32) {
        self.calls.push(GlCall::Color3([r, g, b]));
    }

    fn vertex2(&mut self, x: f32, y: f32) {
        self.calls.push(GlCall::Vertex2([x, y]));
    }

    fn end(&mut self) {
        self.calls.push(GlCall::End);
    }
}
