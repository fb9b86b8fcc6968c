//! Tracing setup for hosts embedding `pkchart`.
//!
//! Builder, controller and registry events go through `tracing` under the
//! `pkchart` target. Hosts that already run a subscriber need nothing from
//! here.

/// Directive used when `RUST_LOG` is unset: builder and precision changes at
/// `debug`, everything else from the crate at `info`.
pub const DEFAULT_TRACING_FILTER: &str = "pkchart=info,pkchart::api=debug";

/// Installs a compact subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
