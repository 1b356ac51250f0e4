use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge, Encoder, HistogramVec,
    IntCounterVec, IntGauge, TextEncoder,
};

lazy_static! {
    // HTTP Metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "http_requests_total",
        "Total number of HTTP requests",
        &["method", "route", "status"]
    )
    .unwrap();

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "route"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .unwrap();

    // Profile store (Redis or memory)
    pub static ref PROFILE_STORE_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "profile_store_operations_total",
        "Total number of profile store operations",
        &["operation", "status"]
    )
    .unwrap();

    pub static ref PROFILE_STORE_OPERATION_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "profile_store_operation_duration_seconds",
        "Profile store operation duration in seconds",
        &["operation"],
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1]
    )
    .unwrap();

    // Business Metrics
    pub static ref QUIZ_ATTEMPTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "quiz_attempts_total",
        "Total number of quiz attempts by lifecycle event",
        &["status"]
    )
    .unwrap();

    pub static ref QUIZ_ATTEMPTS_ACTIVE: IntGauge = register_int_gauge!(
        "quiz_attempts_active",
        "Number of quiz attempts with a running countdown"
    )
    .unwrap();

    pub static ref ANSWERS_RECORDED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "answers_recorded_total",
        "Total number of answers recorded during quiz attempts",
        &["quiz_id"]
    )
    .unwrap();

    pub static ref PROGRESS_UPDATES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "progress_updates_total",
        "Total number of progress updates",
        &["status"]
    )
    .unwrap();

    pub static ref SEARCHES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "searches_total",
        "Total number of catalog searches",
        &["result"]
    )
    .unwrap();

    pub static ref ASSISTANT_REPLIES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "assistant_replies_total",
        "Total number of assistant replies by matched topic",
        &["topic"]
    )
    .unwrap();

    pub static ref SSE_CONNECTIONS_ACTIVE: IntGauge = register_int_gauge!(
        "sse_connections_active",
        "Number of active SSE connections"
    )
    .unwrap();
}

/// Renders all metrics in Prometheus text format
pub fn render_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| prometheus::Error::Msg(format!("Failed to convert metrics to UTF-8: {}", e)))
}

/// Helper: track profile store operation with metrics
pub async fn track_store_operation<F, T, E>(operation: &str, future: F) -> Result<T, E>
where
    F: std::future::Future<Output = Result<T, E>>,
{
    let start = std::time::Instant::now();
    let result = future.await;
    let duration = start.elapsed().as_secs_f64();

    let status = if result.is_ok() { "success" } else { "error" };

    PROFILE_STORE_OPERATIONS_TOTAL
        .with_label_values(&[operation, status])
        .inc();

    PROFILE_STORE_OPERATION_DURATION_SECONDS
        .with_label_values(&[operation])
        .observe(duration);

    result
}
