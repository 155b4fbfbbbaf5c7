//! Prometheus metrics collection and exposition endpoint.

use std::sync::Arc;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use salvo::{
    handler,
    http::header::{CONTENT_TYPE, HeaderValue},
    prelude::{Depot, Response, StatusError},
};

use trolley_app::metrics::MetricsSink;

use crate::extensions::*;

use super::ObservabilityError;

/// Prometheus registry holding the business counter and HTTP request metrics.
#[derive(Debug)]
pub(crate) struct Metrics {
    registry: Registry,
    items_added: IntCounter,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
}

impl Metrics {
    pub(crate) fn new() -> Result<Self, ObservabilityError> {
        let registry = Registry::new();

        let items_added = IntCounter::new("items_added", "running count of items added to cart")?;

        let requests_total = IntCounterVec::new(
            Opts::new(
                "trolley_http_requests_total",
                "Total HTTP requests partitioned by method, route, status class, and status code.",
            ),
            &["method", "route", "status_class", "status_code"],
        )?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "trolley_http_request_duration_seconds",
                "HTTP request duration in seconds partitioned by method and route.",
            )
            .buckets(vec![
                0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
            ]),
            &["method", "route"],
        )?;

        let requests_in_flight = IntGauge::with_opts(Opts::new(
            "trolley_http_requests_in_flight",
            "Current number of in-flight HTTP requests.",
        ))?;

        registry.register(Box::new(items_added.clone()))?;
        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration_seconds.clone()))?;
        registry.register(Box::new(requests_in_flight.clone()))?;

        Ok(Self {
            registry,
            items_added,
            requests_total,
            request_duration_seconds,
            requests_in_flight,
        })
    }

    pub(super) fn observe_request(
        &self,
        method: &str,
        route: &str,
        status_code: u16,
        duration_seconds: f64,
    ) {
        let status_code_label = status_code.to_string();

        self.requests_total
            .with_label_values(&[
                method,
                route,
                status_class(status_code),
                status_code_label.as_str(),
            ])
            .inc();

        self.request_duration_seconds
            .with_label_values(&[method, route])
            .observe(duration_seconds);
    }

    fn encode(&self, encoder: &TextEncoder) -> Result<Vec<u8>, prometheus::Error> {
        let mut encoded = Vec::new();

        encoder.encode(&self.registry.gather(), &mut encoded)?;

        Ok(encoded)
    }
}

impl MetricsSink for Metrics {
    fn increment(&self, n: u64) {
        self.items_added.inc_by(n);
    }
}

/// Counts a request as in flight until dropped.
#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    metrics: Arc<Metrics>,
}

impl InFlightRequestGuard {
    pub(super) fn track(metrics: Arc<Metrics>) -> Self {
        metrics.requests_in_flight.inc();

        Self { metrics }
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        self.metrics.requests_in_flight.dec();
    }
}

#[handler]
pub(crate) async fn metrics_handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let metrics = depot.obtain_or_500::<Arc<Metrics>>()?;

    let encoder = TextEncoder::new();

    let encoded = metrics
        .encode(&encoder)
        .or_500("failed to encode metrics response")?;

    let content_type = HeaderValue::from_str(encoder.format_type())
        .or_500("failed to encode metrics content type header")?;

    res.headers_mut().insert(CONTENT_TYPE, content_type);
    res.render(String::from_utf8_lossy(&encoded).into_owned());

    Ok(())
}

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        affix_state::inject,
        http::StatusCode,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    fn service(metrics: Arc<Metrics>) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(metrics))
                .push(Router::with_path("metrics").get(metrics_handler)),
        )
    }

    #[tokio::test]
    async fn metrics_endpoint_exposes_items_added_and_http_metrics() -> TestResult {
        let metrics = Arc::new(Metrics::new()?);

        metrics.increment(2);
        metrics.increment(3);
        metrics.observe_request("GET", "/cart/{id}", 200, 0.042);
        metrics.observe_request("GET", "/add/{id}/{sku}/{qty}", 404, 0.123);

        let response = TestClient::get("http://example.com/metrics")
            .send(&service(metrics))
            .await
            .take_string()
            .await?;

        assert!(
            response.contains("items_added 5"),
            "expected items_added counter in response"
        );
        assert!(
            response.contains("trolley_http_requests_total"),
            "expected requests_total metric in response"
        );
        assert!(
            response.contains("trolley_http_request_duration_seconds"),
            "expected request_duration metric in response"
        );
        assert!(
            response.contains("trolley_http_requests_in_flight"),
            "expected in-flight metric in response"
        );

        Ok(())
    }

    #[tokio::test]
    async fn metrics_endpoint_without_registry_is_500() {
        let response = TestClient::get("http://example.com/metrics")
            .send(&Service::new(
                Router::with_path("metrics").get(metrics_handler),
            ))
            .await;

        assert_eq!(response.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn in_flight_guard_decrements_on_drop() -> TestResult {
        let metrics = Arc::new(Metrics::new()?);

        let guard = InFlightRequestGuard::track(metrics.clone());

        assert_eq!(metrics.requests_in_flight.get(), 1);

        drop(guard);

        assert_eq!(metrics.requests_in_flight.get(), 0);

        Ok(())
    }

    #[test]
    fn status_classes() {
        assert_eq!(status_class(204), "2xx");
        assert_eq!(status_class(404), "4xx");
        assert_eq!(status_class(503), "5xx");
        assert_eq!(status_class(42), "other");
    }
}
