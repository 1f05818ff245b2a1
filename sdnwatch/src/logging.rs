use std::sync::Arc;

use anyhow::{Context, Result};
use time::macros::format_description;
use time::UtcOffset;
use tracing_subscriber::filter::dynamic_filter_fn;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Logs go to stderr so that command output on stdout stays machine-readable
pub fn init_logging() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "sdnwatch=info")
    }

    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let env_filter = Arc::new(EnvFilter::from_default_env());
    let attended = console::user_attended();

    // one line per event with a full date when running as a service,
    // a compact time-only format on a terminal
    let full_fmt_layer = (!attended).then(|| {
        let env_filter = env_filter.clone();
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .with_timer(OffsetTime::new(
                offset,
                format_description!("[day].[month].[year] [hour]:[minute]:[second]"),
            ))
            .with_filter(dynamic_filter_fn(move |m, c| {
                env_filter.enabled(m, c.clone())
            }))
    });
    let compact_fmt_layer = attended.then(|| {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(true)
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_timer(OffsetTime::new(
                offset,
                format_description!("[hour]:[minute]:[second]"),
            ))
            .with_filter(dynamic_filter_fn(move |m, c| {
                env_filter.enabled(m, c.clone())
            }))
    });

    tracing_subscriber::registry()
        .with(full_fmt_layer)
        .with(compact_fmt_layer)
        .try_init()
        .context("Could not initialize logging")
}
