#![forbid(unsafe_code)]

//! Optional structured logging built on `tracing`.
//!
//! With the `tracing` feature enabled this module re-exports the tracing
//! macros so downstream crates log through one import path. The
//! `tracing-json` feature adds [`init_json`], which installs a JSON
//! subscriber filtered by `RUST_LOG` for production capture of gesture and
//! animation diagnostics.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a JSON-formatted global subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already set.
#[cfg(feature = "tracing-json")]
pub fn init_json() -> bool {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .is_ok()
}
