//! Diagnostic logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is up to
//! the host. [`init`] is the one the replay tool uses.

use tracing_subscriber::EnvFilter;

/// Filter variable checked first.
pub const ENV_LOG: &str = "UJS_LOG";

/// Filter used when neither `UJS_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Resolve the filter directive: `UJS_LOG`, then `RUST_LOG`, then `warn`.
pub fn filter_directive() -> String {
    [ENV_LOG, EnvFilter::DEFAULT_ENV]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install a stderr subscriber. Returns `false` if one was already set.
pub fn init() -> bool {
    let filter = EnvFilter::try_new(filter_directive())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
