//! Diagnostic logging setup

use tracing::Level;

/// Log level for a `-v` count, with `--quiet` limiting output to errors
pub const fn level_for(verbosity: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a stderr subscriber for the process
///
/// Returns `false` if a global subscriber was already installed
pub fn init_logging(verbosity: u8, quiet: bool) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
