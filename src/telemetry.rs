//! Telemetry metric name constants.
//!
//! Centralised metric names for itemfeed operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `itemfeed_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `method` — rpc invoked ("sayHello" | "getAll" | "getStream")
//! - `status` — outcome: "ok" or "error"

/// Total calls handled by the service.
///
/// Labels: `method`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "itemfeed_requests_total";

/// Call duration in seconds, measured up to the first response element.
///
/// Labels: `method`.
pub const REQUEST_DURATION_SECONDS: &str = "itemfeed_request_duration_seconds";

/// Total items delivered through `getStream` responses.
pub const STREAM_ITEMS_TOTAL: &str = "itemfeed_stream_items_total";
