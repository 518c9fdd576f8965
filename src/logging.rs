use std::io::stderr;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::prelude::*;

/// Initialize the tracing subscriber with a stderr sink.
///
/// The filter is taken from the default environment variable (`RUST_LOG`)
/// and falls back to `info`.
pub fn init() -> Result<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (stderr, stderr_guard) = tracing_appender::non_blocking(stderr());
    let layer = tracing_subscriber::fmt::layer().with_writer(stderr).with_filter(filter);
    tracing_subscriber::Registry::default()
        .with(layer)
        .try_init()
        .context("failed to initialize tracing")?;
    Ok(stderr_guard)
}
