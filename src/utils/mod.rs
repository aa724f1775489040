pub mod error;
pub mod logging;

pub use error::{BootstrapError, ShaderError, SurfaceError};
pub use logging::init_logging;
