//! Prometheus metrics endpoint and HTTP metrics middleware

pub mod handlers;
pub mod middleware;

pub use handlers::*;
pub use middleware::http_metrics_middleware;

/// Register help texts for every metric the service emits.
pub fn describe_metrics() {
    metrics::describe_counter!("http_requests_total", "HTTP requests by method, path and status");
    metrics::describe_histogram!(
        "http_request_duration_seconds",
        metrics::Unit::Seconds,
        "HTTP request latency"
    );
    metrics::describe_counter!("tarjetas_registered_total", "Cards inserted");
    metrics::describe_counter!(
        "tarjetas_resets_total",
        "Re-registrations that reset a card counter"
    );
    metrics::describe_counter!("tarjetas_usage_total", "Committed card usage increments");
}
