//! Tracing subscriber setup
//!
//! The library crates only emit `tracing` events. Binaries and test suites
//! that want to see them call [`init_tracing`] once at startup; the client's
//! `debug` flag then controls whether request/response events are produced at
//! all, and `RUST_LOG` controls which of them are printed.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn,recurly_core=debug";

/// Install a global fmt subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed, so it is
/// safe to call from every test.
pub fn init_tracing() -> bool {
    init_tracing_with_default(DEFAULT_FILTER)
}

/// Like [`init_tracing`], with a caller-chosen fallback filter.
pub fn init_tracing_with_default(default_filter: &str) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).try_init().is_ok()
}
