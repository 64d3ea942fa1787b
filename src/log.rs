//! Logger setup for the binary

use log::LevelFilter;

/// Initialise `env_logger`
///
/// `debug_enabled` selects `Debug`, otherwise `Info`. An explicit `RUST_LOG`
/// overrides both. Calling this twice is harmless.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
