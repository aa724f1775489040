pub mod app;
pub mod config;
pub mod render;
pub mod utils;
pub mod window;

// Re-export commonly used types
pub use config::{AppConfig, RenderConfig, ShaderErrorPolicy, WindowConfig};
pub use render::{FrameRenderer, GlBackend, ImmediateGl, LegacyRenderer, RenderFrame, RenderState};
pub use utils::error::{BootstrapError, ShaderError, SurfaceError};
pub use window::{FrameSurface, WindowContext};
