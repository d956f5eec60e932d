//! Telemetry helpers for hosts embedding `bar-chart-rs`.
//!
//! Library code only emits `tracing` events. Hosts either call
//! [`init_default_tracing`] or install their own subscriber.

/// Environment variable consulted before `RUST_LOG` when building the filter.
pub const LOG_FILTER_ENV: &str = "BAR_CHART_LOG";

/// Filter directive used when neither environment variable is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
