// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! Log output goes to stderr through `tracing-subscriber`. The filter is
//! taken from `RUST_LOG` when set, otherwise [`DEFAULT_FILTER`] applies.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "truthcheck=info,tower_http=info";

/// Builds the log filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
