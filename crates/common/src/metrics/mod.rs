//! Metrics and observability utilities
//!
//! Prometheus metrics with standardized naming and latency histograms.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram, Unit};

/// Metrics prefix for all ExpertLink metrics
pub const METRICS_PREFIX: &str = "expertlink";

/// Histogram buckets for request latency (in seconds)
pub const LATENCY_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.010, 0.025, 0.050, 0.100, 0.250, 0.500, 1.000, 2.500, 5.000, 10.00,
];

/// Buckets for completion latency (an LLM round trip is slow)
pub const COMPLETION_BUCKETS: &[f64] = &[
    0.100, 0.250, 0.500, 1.000, 2.000, 5.000, 10.00, 30.00,
];

/// Register all metric descriptions
pub fn register_metrics() {
    describe_counter!(
        format!("{}_requests_total", METRICS_PREFIX),
        Unit::Count,
        "Total number of HTTP requests"
    );

    describe_histogram!(
        format!("{}_request_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "HTTP request latency in seconds"
    );

    // Chat pipeline metrics
    describe_counter!(
        format!("{}_chat_requests_total", METRICS_PREFIX),
        Unit::Count,
        "Total chat requests by lane"
    );

    describe_histogram!(
        format!("{}_chat_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Chat request latency in seconds"
    );

    describe_gauge!(
        format!("{}_chat_experts_matched", METRICS_PREFIX),
        Unit::Count,
        "Number of experts attached to a chat reply"
    );

    // Completion service metrics
    describe_counter!(
        format!("{}_completion_requests_total", METRICS_PREFIX),
        Unit::Count,
        "Total completion API requests"
    );

    describe_counter!(
        format!("{}_completion_errors_total", METRICS_PREFIX),
        Unit::Count,
        "Total completion API errors"
    );

    describe_histogram!(
        format!("{}_completion_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "Completion round-trip latency in seconds"
    );

    // Directory metrics
    describe_counter!(
        format!("{}_directory_queries_total", METRICS_PREFIX),
        Unit::Count,
        "Total expert directory queries"
    );

    tracing::info!("Metrics registered");
}

/// Record one chat request
pub fn record_chat(duration_secs: f64, lane: &str, experts_matched: usize) {
    counter!(
        format!("{}_chat_requests_total", METRICS_PREFIX),
        "lane" => lane.to_string()
    )
    .increment(1);

    histogram!(
        format!("{}_chat_duration_seconds", METRICS_PREFIX),
        "lane" => lane.to_string()
    )
    .record(duration_secs);

    gauge!(
        format!("{}_chat_experts_matched", METRICS_PREFIX),
        "lane" => lane.to_string()
    )
    .set(experts_matched as f64);
}

/// Record one completion round trip
pub fn record_completion(duration_secs: f64, model: &str, success: bool) {
    let status = if success { "success" } else { "error" };

    counter!(
        format!("{}_completion_requests_total", METRICS_PREFIX),
        "model" => model.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    if success {
        histogram!(
            format!("{}_completion_duration_seconds", METRICS_PREFIX),
            "model" => model.to_string()
        )
        .record(duration_secs);
    } else {
        counter!(
            format!("{}_completion_errors_total", METRICS_PREFIX),
            "model" => model.to_string()
        )
        .increment(1);
    }
}

/// Record one directory query
pub fn record_directory_query(success: bool) {
    let status = if success { "success" } else { "error" };

    counter!(
        format!("{}_directory_queries_total", METRICS_PREFIX),
        "status" => status.to_string()
    )
    .increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_are_sorted() {
        for buckets in [LATENCY_BUCKETS, COMPLETION_BUCKETS] {
            let mut prev = 0.0;
            for &bucket in buckets {
                assert!(bucket > prev);
                prev = bucket;
            }
        }
    }

    #[test]
    fn test_record_helpers_run() {
        record_chat(0.02, "greeting", 0);
        record_completion(1.2, "mock-completion", true);
        record_directory_query(true);
    }
}
