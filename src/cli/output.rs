//! Logging setup for the command line

use log::LevelFilter;

/// Log level for a `-v` count: warn, then info, debug, trace
pub fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger; `RUST_LOG` overrides the `-v` level
pub fn init_logging(verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(verbosity_level(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
