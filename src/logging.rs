// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! The filter comes from `RUST_LOG` when set, otherwise [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "iced_toast=info";

/// Builds the filter used by [`init`].
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("iced_toast=debug")
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    })
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_target(false)
        .compact()
        .try_init();
}
