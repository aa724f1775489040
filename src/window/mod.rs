pub mod context;
#[cfg(test)]
pub(crate) mod scripted;
pub mod surface;

pub use context::WindowContext;
pub use surface::{configure_viewport, FrameSurface};
