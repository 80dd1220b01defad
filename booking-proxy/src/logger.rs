//! Logging Infrastructure
//!
//! `RUST_LOG` overrides the default filter. With a log directory the output
//! goes to a daily rolling file instead of stdout.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "booking_proxy=info,tower_http=info";

/// Initialize the global subscriber
pub fn init_logger(log_dir: Option<&str>, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir
        .map(Path::new)
        .filter(|dir| dir.is_dir())
        .map(|dir| tracing_appender::rolling::daily(dir, "booking-proxy"));

    match (file_appender, json) {
        (Some(writer), true) => builder.json().with_writer(writer).init(),
        (Some(writer), false) => builder.with_ansi(false).with_writer(writer).init(),
        (None, true) => builder.json().init(),
        (None, false) => builder.init(),
    }
}
