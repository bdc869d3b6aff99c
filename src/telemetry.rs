//! Telemetry helpers for applications embedding `plot-layout`.
//!
//! `encode_node` emits one `trace!` event per encoded node, carrying the
//! node name (`node`) and the number of keys it produced (`keys`).
//! Figure encoding adds a `debug!` event with the trace count, and schema
//! validation logs each checked rename table and flag vocabulary at `debug`.
//! Everything is emitted under the `plot_layout` target, so
//! `RUST_LOG=plot_layout=trace` shows a per-node breakdown of one encode.

/// Filter used when `RUST_LOG` is unset: host logs at `info`, no per-node noise.
pub const DEFAULT_FILTER: &str = "info,plot_layout=info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_scopes_the_crate_target() {
        assert!(DEFAULT_FILTER.split(',').any(|directive| directive.starts_with("plot_layout=")));
    }

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn initialization_is_a_no_op_without_the_feature() {
        assert!(!init_default_tracing());
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_initialization_reports_existing_subscriber() {
        let _ = init_default_tracing();
        assert!(!init_default_tracing());
    }
}
