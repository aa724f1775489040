use crate::render::renderer::RenderFrame;
use crate::window::surface::FrameSurface;
use log::{info, warn};

/// Polls, draws and presents until the window system asks to close.
/// Returns the number of frames drawn.
///
/// A frame that fails to present is logged and the loop keeps going; the
/// close flag is the only way out.
pub fn run<S, R>(surface: &mut S, renderer: &mut R) -> u64
where
    S: FrameSurface + ?Sized,
    R: RenderFrame + ?Sized,
{
    let mut frames = 0u64;

    while !surface.should_close() {
        surface.poll_events();

        renderer.render_frame();

        if let Err(e) = surface.present() {
            warn!("{}", e);
        }
        frames += 1;
    }

    info!("Render loop finished after {} frames", frames);
    frames
}
