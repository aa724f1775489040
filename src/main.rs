use anyhow::Result;
use log::info;

use learngl::{
    app,
    render::{mesh::TRIANGLE_VERTICES, shaders::triangle_shaders},
    utils::init_logging,
    AppConfig, FrameRenderer, WindowContext,
};

fn main() -> Result<()> {
    let config = AppConfig::default();
    init_logging(&config.log_level)?;
    info!("Initializing application...");

    // Declared first so it outlives the renderer's GPU objects.
    let (mut window, backend) = WindowContext::initialize(&config.window)?;

    let mut renderer = FrameRenderer::new(backend, config.render.clone());
    renderer.compile_program(triangle_shaders::VERTEX_SOURCE, triangle_shaders::FRAGMENT_SOURCE)?;
    renderer.upload_geometry(&TRIANGLE_VERTICES);

    app::run(&mut window, &mut renderer);

    renderer.release();
    info!("Shut down cleanly");
    Ok(())
}
