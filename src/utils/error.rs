use crate::render::backend::ShaderStage;
use thiserror::Error;

/// Failures while bringing up the window and GL context. All of them are fatal.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    #[error("Failed to create OpenGL context: {0}")]
    ContextCreation(String),

    #[error("Failed to initialize OpenGL function loader: {0}")]
    LoaderInit(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShaderError {
    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("Shader program failed to link:\n{log}")]
    Link { log: String },
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Failed to present frame: {0}")]
    Present(String),
}
