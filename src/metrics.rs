//! Metrics for the odds feed, analysis and notifications.
//!
//! Metrics are emitted through the `metrics` facade. Nothing is recorded
//! unless the embedding process installs a recorder.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Odds API request latency metric name.
pub const METRIC_ODDS_API_LATENCY: &str = "odds_api_request_latency_ms";
/// Odds API requests counter metric name.
pub const METRIC_ODDS_API_REQUESTS: &str = "odds_api_requests_total";
/// Odds API failures counter metric name.
pub const METRIC_ODDS_API_FAILURES: &str = "odds_api_failures_total";
/// Props analyzed counter metric name.
pub const METRIC_PROPS_ANALYZED: &str = "props_analyzed_total";
/// Props skipped for invalid odds counter metric name.
pub const METRIC_INVALID_ODDS: &str = "props_invalid_odds_total";
/// Plays found counter metric name.
pub const METRIC_PLAYS_FOUND: &str = "ev_plays_found_total";
/// Webhook posts counter metric name.
pub const METRIC_WEBHOOK_POSTS: &str = "webhook_posts_total";
/// Webhook failures counter metric name.
pub const METRIC_WEBHOOK_FAILURES: &str = "webhook_failures_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_ODDS_API_LATENCY,
        "Odds API request latency in milliseconds"
    );

    describe_counter!(
        METRIC_ODDS_API_REQUESTS,
        "Total number of Odds API requests sent"
    );
    describe_counter!(
        METRIC_ODDS_API_FAILURES,
        "Total number of Odds API requests that failed"
    );
    describe_counter!(
        METRIC_PROPS_ANALYZED,
        "Total number of props run through the no-vig evaluation"
    );
    describe_counter!(
        METRIC_INVALID_ODDS,
        "Total number of props skipped for invalid American odds"
    );
    describe_counter!(METRIC_PLAYS_FOUND, "Total number of +EV plays found");
    describe_counter!(METRIC_WEBHOOK_POSTS, "Total number of webhook posts sent");
    describe_counter!(
        METRIC_WEBHOOK_FAILURES,
        "Total number of webhook posts that failed"
    );

    debug!("Metrics initialized");
}

/// Record Odds API request latency.
pub fn record_odds_api_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_ODDS_API_LATENCY).record(latency_ms);
}

/// Increment Odds API requests counter.
pub fn inc_odds_api_requests() {
    counter!(METRIC_ODDS_API_REQUESTS).increment(1);
}

/// Increment Odds API failures counter.
pub fn inc_odds_api_failures() {
    counter!(METRIC_ODDS_API_FAILURES).increment(1);
}

/// Increment props analyzed counter.
pub fn inc_props_analyzed() {
    counter!(METRIC_PROPS_ANALYZED).increment(1);
}

/// Increment invalid odds counter.
pub fn inc_invalid_odds() {
    counter!(METRIC_INVALID_ODDS).increment(1);
}

/// Add to the plays found counter.
pub fn inc_plays_found(count: u64) {
    counter!(METRIC_PLAYS_FOUND).increment(count);
}

/// Increment webhook posts counter.
pub fn inc_webhook_posts() {
    counter!(METRIC_WEBHOOK_POSTS).increment(1);
}

/// Increment webhook failures counter.
pub fn inc_webhook_failures() {
    counter!(METRIC_WEBHOOK_FAILURES).increment(1);
}
