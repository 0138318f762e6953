//! Logging and metric setup.

use anyhow::Result;
use metrics::{Unit, describe_counter};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `log_level`.
/// `log_format` selects `json` lines or human-readable `text`.
pub fn init_tracing(log_level: &str, log_format: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;

    let fmt_layer = match log_format {
        "json" => fmt::layer().json().with_target(true).boxed(),
        _ => fmt::layer().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

    describe_metrics();
    Ok(())
}

fn describe_metrics() {
    describe_counter!(
        "maple_page_cache_hit_total",
        Unit::Count,
        "Pages served from the page cache."
    );
    describe_counter!(
        "maple_page_cache_miss_total",
        Unit::Count,
        "Cacheable requests rendered by a handler."
    );
}
