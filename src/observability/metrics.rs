//! Request metrics collection and exposition.
//!
//! # Metrics
//! - `bookly_request_count` (counter): requests by app, method, endpoint,
//!   status
//! - `bookly_request_latency_seconds` (histogram): wall-clock latency by
//!   app and endpoint

use prometheus::{
    CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};

/// Value of the `app_name` label on every sample.
pub const APP_NAME: &str = "bookly_api";

/// Histogram buckets covering the simulated delay ranges plus headroom.
const LATENCY_BUCKETS: &[f64] = &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5];

/// Request counters and latency histograms behind an owned registry.
///
/// Constructed once at startup and shared via the application state; a
/// fresh instance carries a fresh registry, which is what the tests rely
/// on for exact sample counts.
pub struct HttpMetrics {
    app_name: String,
    registry: Registry,
    pub request_count: CounterVec,
    pub request_latency: HistogramVec,
}

impl HttpMetrics {
    pub fn new(app_name: impl Into<String>) -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let request_count = CounterVec::new(
            Opts::new("bookly_request_count", "App Request Count"),
            &["app_name", "method", "endpoint", "http_status"],
        )?;
        registry.register(Box::new(request_count.clone()))?;

        let request_latency = HistogramVec::new(
            HistogramOpts::new("bookly_request_latency_seconds", "Request latency")
                .buckets(LATENCY_BUCKETS.to_vec()),
            &["app_name", "endpoint"],
        )?;
        registry.register(Box::new(request_latency.clone()))?;

        Ok(Self {
            app_name: app_name.into(),
            registry,
            request_count,
            request_latency,
        })
    }

    /// Record one finished request: latency observation first, then the
    /// counter with the final status code.
    pub fn record_request(&self, method: &str, endpoint: &str, status: u16, latency_secs: f64) {
        self.request_latency
            .with_label_values(&[&self.app_name, endpoint])
            .observe(latency_secs);
        self.request_count
            .with_label_values(&[&self.app_name, method, endpoint, &status.to_string()])
            .inc();
    }

    /// Serialize everything accumulated so far into the exposition text
    /// format. Never resets state.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| prometheus::Error::Msg(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_counter_and_histogram_together() {
        let metrics = HttpMetrics::new(APP_NAME).unwrap();
        metrics.record_request("GET", "/books", 200, 0.042);
        metrics.record_request("GET", "/books", 200, 0.055);
        metrics.record_request("GET", "/books/{id}", 404, 0.061);

        let count = metrics
            .request_count
            .with_label_values(&[APP_NAME, "GET", "/books", "200"])
            .get();
        assert_eq!(count, 2.0);

        let samples = metrics
            .request_latency
            .with_label_values(&[APP_NAME, "/books"])
            .get_sample_count();
        assert_eq!(samples, 2);

        let missing = metrics
            .request_count
            .with_label_values(&[APP_NAME, "GET", "/books/{id}", "404"])
            .get();
        assert_eq!(missing, 1.0);
    }

    #[test]
    fn render_emits_exposition_text() {
        let metrics = HttpMetrics::new(APP_NAME).unwrap();
        metrics.record_request("GET", "/health", 200, 0.003);

        let body = metrics.render().unwrap();
        assert!(body.contains("bookly_request_count"));
        assert!(body.contains("bookly_request_latency_seconds"));
        assert!(body.contains("endpoint=\"/health\""));
    }

    #[test]
    fn fresh_instances_are_isolated() {
        let first = HttpMetrics::new(APP_NAME).unwrap();
        first.record_request("GET", "/books", 200, 0.01);

        let second = HttpMetrics::new(APP_NAME).unwrap();
        let count = second
            .request_count
            .with_label_values(&[APP_NAME, "GET", "/books", "200"])
            .get();
        assert_eq!(count, 0.0);
    }
}
