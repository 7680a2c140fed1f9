use tracing_subscriber::{filter::LevelFilter, prelude::*};

/// Diagnostic logs go to stderr so they never mix with session output.
pub fn init(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(LevelFilter::from_level(level)),
        )
        .init();
}
