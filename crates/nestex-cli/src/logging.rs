//! Diagnostic logging to stderr.

use tracing::Level;

/// Maps the `-v` count to a maximum log level.
///
/// Warnings are always shown. Progress lines already go to stdout, so
/// `info` needs one `-v`.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
