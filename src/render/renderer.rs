use crate::config::rendering::{RenderConfig, ShaderErrorPolicy};
use crate::render::backend::GraphicsBackend;
use crate::render::mesh::{StaticMesh, TRIANGLE_FLOATS};
use crate::render::shaders::ShaderProgram;
use crate::utils::error::ShaderError;
use log::{debug, info, warn};

/// Anything the render loop can ask for one frame.
pub trait RenderFrame {
    fn render_frame(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    /// No context exists yet.
    #[default]
    Uninitialized,
    ContextReady,
    ProgramLinked,
    /// The program failed to build but drawing carries on with it.
    LinkFailed,
    GeometryUploaded,
    Rendering,
    Terminated,
}

/// Draws one static mesh with one shader program.
///
/// Owns every GPU object it creates. They are released by `release`, or on
/// drop, so the renderer has to go away before the context does.
pub struct FrameRenderer<B: GraphicsBackend> {
    backend: B,
    config: RenderConfig,
    program: Option<ShaderProgram>,
    mesh: Option<StaticMesh>,
    state: RenderState,
}

impl<B: GraphicsBackend> FrameRenderer<B> {
    /// `backend` must belong to a current context.
    pub fn new(backend: B, config: RenderConfig) -> Self {
        Self {
            backend,
            config,
            program: None,
            mesh: None,
            state: RenderState::ContextReady,
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn program(&self) -> Option<&ShaderProgram> {
        self.program.as_ref()
    }

    pub fn mesh(&self) -> Option<&StaticMesh> {
        self.mesh.as_ref()
    }

    /// Builds the program used for every following frame, replacing any
    /// previous one.
    ///
    /// Under `ShaderErrorPolicy::Fatal` the first diagnostic is returned and
    /// no program is kept. Under `Continue` the diagnostics have already been
    /// logged and the renderer moves to `LinkFailed`.
    pub fn compile_program(&mut self, vertex_source: &str, fragment_source: &str) -> Result<&ShaderProgram, ShaderError> {
        if let Some(old) = self.program.take() {
            old.release(&mut self.backend);
        }

        let build = ShaderProgram::from_source(
            &mut self.backend,
            vertex_source,
            fragment_source,
            self.config.info_log_limit,
        );

        if build.is_clean() {
            info!("Shader program {} linked", build.program.handle().raw());
            self.state = RenderState::ProgramLinked;
        } else {
            match self.config.shader_error_policy {
                ShaderErrorPolicy::Fatal => {
                    build.program.release(&mut self.backend);
                    let mut diagnostics = build.diagnostics.into_iter();
                    return Err(diagnostics
                        .next()
                        .unwrap_or(ShaderError::Link { log: String::new() }));
                }
                ShaderErrorPolicy::Continue => {
                    warn!(
                        "Continuing with shader program {} despite {} error(s)",
                        build.program.handle().raw(),
                        build.diagnostics.len()
                    );
                    self.state = RenderState::LinkFailed;
                }
            }
        }

        Ok(self.program.insert(build.program))
    }

    /// Uploads the triangle once. Calling it again replaces the mesh.
    pub fn upload_geometry(&mut self, vertices: &[f32; TRIANGLE_FLOATS]) -> &StaticMesh {
        if let Some(old) = self.mesh.take() {
            old.release(&mut self.backend);
        }

        let mesh = StaticMesh::upload(&mut self.backend, vertices);
        debug!(
            "Uploaded {} vertices into buffer {}",
            mesh.vertex_count(),
            mesh.vertex_buffer().raw()
        );
        self.state = RenderState::GeometryUploaded;

        self.mesh.insert(mesh)
    }

    /// Deletes the vertex array, the buffer and the program, in that order.
    /// Safe to call more than once.
    pub fn release(&mut self) {
        if self.state == RenderState::Terminated {
            return;
        }

        if let Some(mesh) = self.mesh.take() {
            mesh.release(&mut self.backend);
        }
        if let Some(program) = self.program.take() {
            program.release(&mut self.backend);
        }

        self.state = RenderState::Terminated;
        debug!("Renderer released its GPU objects");
    }
}

impl<B: GraphicsBackend> RenderFrame for FrameRenderer<B> {
    fn render_frame(&mut self) {
        if self.state == RenderState::Terminated {
            return;
        }

        self.backend.clear(self.config.clear_color);

        if let Some(program) = &self.program {
            program.set_used(&mut self.backend);
        }
        if let Some(mesh) = &self.mesh {
            mesh.draw(&mut self.backend);
        }

        self.state = RenderState::Rendering;
    }
}

impl<B: GraphicsBackend> Drop for FrameRenderer<B> {
    fn drop(&mut self) {
        self.release();
    }
}
