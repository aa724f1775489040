use log::{warn, LevelFilter};
use simple_logger::SimpleLogger;
use std::str::FromStr;

/// Unknown names fall back to `Info`.
pub fn parse_level(name: &str) -> (LevelFilter, bool) {
    match LevelFilter::from_str(name.trim()) {
        Ok(level) => (level, true),
        Err(_) => (LevelFilter::Info, false),
    }
}

/// Installs the global logger. Call once, before anything logs.
pub fn init_logging(level_name: &str) -> anyhow::Result<()> {
    let (level, recognized) = parse_level(level_name);
    SimpleLogger::new().with_level(level).init()?;

    if !recognized {
        warn!("Unknown log level '{}', using info", level_name);
    }
    Ok(())
}
