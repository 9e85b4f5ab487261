//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LogLevel;

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `level` applies. Calling this more
/// than once is harmless, later calls are ignored.
pub fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
