pub mod backend;
pub mod gl_backend;
pub mod handles;
pub mod legacy;
pub mod mesh;
#[cfg(test)]
pub(crate) mod recording;
pub mod renderer;
pub mod shaders;

pub use backend::{FrameTarget, GraphicsBackend, ImmediateBackend, Primitive, ShaderStage};
pub use gl_backend::{GlBackend, ImmediateGl};
pub use legacy::LegacyRenderer;
pub use mesh::{StaticMesh, TRIANGLE_VERTICES};
pub use renderer::{FrameRenderer, RenderFrame, RenderState};
pub use shaders::ShaderProgram;
