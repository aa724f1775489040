// Fixed-function variant: no shaders, no buffers, glBegin/glEnd every frame.

use anyhow::Result;
use log::info;

use learngl::{app, utils::init_logging, AppConfig, ImmediateGl, LegacyRenderer, WindowContext};

fn main() -> Result<()> {
    let config = AppConfig::legacy();
    init_logging(&config.log_level)?;
    info!("Initializing immediate-mode application...");

    let (mut window, _backend) = WindowContext::initialize(&config.window)?;
    let immediate = ImmediateGl::load(|name| window.proc_address(name))?;

    let mut renderer = LegacyRenderer::new(immediate, config.render.clear_color);
    app::run(&mut window, &mut renderer);

    info!("Shut down cleanly");
    Ok(())
}
