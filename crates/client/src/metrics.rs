//! Metrics collection for API call and resolver behavior.
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (hosts install their own `metrics` recorder)
//! - Persistent storage of metrics
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `model`
//! - Metric recording is infallible and zero-cost when no recorder is
//!   installed

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "crud6_api_requests_total";

/// Metric name for retry counter.
pub const METRIC_RETRIES_TOTAL: &str = "crud6_api_retries_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "crud6_api_errors_total";

/// Metric name for schema cache hit counter.
pub const METRIC_SCHEMA_CACHE_HITS: &str = "crud6_schema_cache_hits_total";

/// Metric name for schema cache miss counter.
pub const METRIC_SCHEMA_CACHE_MISSES: &str = "crud6_schema_cache_misses_total";

/// Metric name for coalesced (joined in-flight) schema fetches.
pub const METRIC_SCHEMA_FETCH_COALESCED: &str = "crud6_schema_fetch_coalesced_total";

/// Metric name for stale schema fetch results discarded on settle.
pub const METRIC_SCHEMA_FETCH_DISCARDED: &str = "crud6_schema_fetch_discarded_total";

pub(crate) fn record_request(endpoint: &str, method: &str) {
    metrics::counter!(
        METRIC_REQUESTS_TOTAL,
        "endpoint" => endpoint.to_string(),
        "method" => method.to_string()
    )
    .increment(1);
}

pub(crate) fn record_retry(endpoint: &str) {
    metrics::counter!(METRIC_RETRIES_TOTAL, "endpoint" => endpoint.to_string()).increment(1);
}

pub(crate) fn record_error(endpoint: &str, status: u16) {
    metrics::counter!(
        METRIC_ERRORS_TOTAL,
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

pub(crate) fn record_schema_cache_hit(model: &str) {
    metrics::counter!(METRIC_SCHEMA_CACHE_HITS, "model" => model.to_string()).increment(1);
}

pub(crate) fn record_schema_cache_miss(model: &str) {
    metrics::counter!(METRIC_SCHEMA_CACHE_MISSES, "model" => model.to_string()).increment(1);
}

pub(crate) fn record_schema_fetch_coalesced(model: &str) {
    metrics::counter!(METRIC_SCHEMA_FETCH_COALESCED, "model" => model.to_string()).increment(1);
}

pub(crate) fn record_schema_fetch_discarded(model: &str) {
    metrics::counter!(METRIC_SCHEMA_FETCH_DISCARDED, "model" => model.to_string()).increment(1);
}
