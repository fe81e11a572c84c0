//! Logging setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Setup tracing with the given default level.
///
/// `RUST_LOG` wins over the configured level when set. Log lines go to
/// stderr so they never interleave with the rendered output on stdout.
pub fn setup_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
