use crate::render::backend::{GraphicsBackend, ShaderStage};
use crate::render::handles::{ProgramHandle, ShaderHandle};
use crate::utils::error::ShaderError;
use log::{debug, error};

/// A linked program object. Owned by the renderer and given back with `release`.
#[derive(Debug)]
pub struct ShaderProgram {
    handle: ProgramHandle,
}

/// Result of a build: the program object always exists, `diagnostics` says
/// whether the driver was happy with it.
#[derive(Debug)]
pub struct ProgramBuild {
    pub program: ShaderProgram,
    pub diagnostics: Vec<ShaderError>,
}

impl ProgramBuild {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl ShaderProgram {
    /// Compiles both stages, links them and deletes the stage objects.
    ///
    /// Every stage is compiled and the program is linked even if an earlier
    /// step failed, so the build carries the complete set of diagnostics.
    pub fn from_source<B: GraphicsBackend + ?Sized>(
        backend: &mut B,
        vertex_source: &str,
        fragment_source: &str,
        log_limit: usize,
    ) -> ProgramBuild {
        let mut diagnostics = Vec::new();

        let vertex_shader =
            Self::compile_stage(backend, ShaderStage::Vertex, vertex_source, log_limit, &mut diagnostics);
        let fragment_shader = Self::compile_stage(
            backend,
            ShaderStage::Fragment,
            fragment_source,
            log_limit,
            &mut diagnostics,
        );

        let program = backend.create_program();
        backend.attach_shader(&program, &vertex_shader);
        backend.attach_shader(&program, &fragment_shader);
        backend.link_program(&program);

        if !backend.program_link_status(&program) {
            let log = backend.program_info_log(&program, log_limit);
            error!("Shader program failed to link:\n{}", log);
            diagnostics.push(ShaderError::Link { log });
        }

        // Linked or not, the program keeps what it needs from the stages.
        vertex_shader.release(backend);
        fragment_shader.release(backend);

        debug!("Built shader program {} ({} diagnostics)", program.raw(), diagnostics.len());

        ProgramBuild {
            program: ShaderProgram { handle: program },
            diagnostics,
        }
    }

    fn compile_stage<B: GraphicsBackend + ?Sized>(
        backend: &mut B,
        stage: ShaderStage,
        source: &str,
        log_limit: usize,
        diagnostics: &mut Vec<ShaderError>,
    ) -> ShaderHandle {
        let shader = backend.create_shader(stage);
        backend.shader_source(&shader, source);
        backend.compile_shader(&shader);

        if !backend.shader_compile_status(&shader) {
            let log = backend.shader_info_log(&shader, log_limit);
            error!("{} shader failed to compile:\n{}", stage, log);
            diagnostics.push(ShaderError::Compile { stage, log });
        }

        shader
    }

    pub fn handle(&self) -> &ProgramHandle {
        &self.handle
    }

    pub fn set_used<B: GraphicsBackend + ?Sized>(&self, backend: &mut B) {
        backend.use_program(&self.handle);
    }

    pub fn release<B: GraphicsBackend + ?Sized>(self, backend: &mut B) {
        self.handle.release(backend);
    }
}

// Shaders for the single flat-colored triangle.
pub mod triangle_shaders {
    pub const VERTEX_SOURCE: &str = r#"#version 330 core
layout (location = 0) in vec3 position;

void main() {
    gl_Position = vec4(position.x, position.y, position.z, 1.0);
}
"#;

    // #ed2d4a
    pub const FRAGMENT_SOURCE: &str = r#"#version 330 core
out vec4 color;

void main() {
    color = vec4(0.929, 0.176, 0.29, 1.0);
}
"#;
}
