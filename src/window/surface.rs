use crate::render::backend::FrameTarget;
use crate::utils::error::SurfaceError;
use log::debug;

/// The window side of the render loop.
pub trait FrameSurface {
    /// Size of the render target in pixels. On scaled displays this differs
    /// from the size the window was requested with.
    fn drawable_size(&self) -> (u32, u32);

    /// Set only by the window system, e.g. when the user closes the window.
    fn should_close(&self) -> bool;

    fn poll_events(&mut self);

    /// Shows the finished frame, waiting for vsync if it is enabled.
    fn present(&mut self) -> Result<(), SurfaceError>;
}

/// Points the viewport at the whole drawable surface.
pub fn configure_viewport<T, S>(target: &mut T, surface: &S) -> (u32, u32)
where
    T: FrameTarget + ?Sized,
    S: FrameSurface + ?Sized,
{
    let (width, height) = surface.drawable_size();
    target.viewport(0, 0, width, height);
    debug!("Viewport set to {}x{}", width, height);
    (width, height)
}
