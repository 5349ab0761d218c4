//! OTLP trace export (feature `otel`).
//!
//! Ships the spans the handlers already create to a collector over
//! OTLP/HTTP. The default endpoint is the in-cluster Tempo address; the
//! spans themselves are identical with or without this feature.

use opentelemetry::{global, trace::TracerProvider as _, KeyValue};
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    runtime,
    trace::{Sampler, TracerProvider},
    Resource,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::ServiceConfig;

/// Install the OTLP pipeline and a subscriber stack of env filter, fmt
/// layer and the OpenTelemetry layer.
pub fn init(config: &ServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let exporter = SpanExporter::builder()
        .with_http()
        .with_endpoint(&config.telemetry.otlp_endpoint)
        .build()?;

    let sampler = if config.telemetry.sampling_ratio >= 1.0 {
        Sampler::AlwaysOn
    } else if config.telemetry.sampling_ratio <= 0.0 {
        Sampler::AlwaysOff
    } else {
        Sampler::TraceIdRatioBased(config.telemetry.sampling_ratio)
    };

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .with_sampler(sampler)
        .with_resource(Resource::new(vec![
            KeyValue::new("service.name", config.telemetry.service_name.clone()),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        ]))
        .build();

    global::set_tracer_provider(provider.clone());
    let tracer = provider.tracer(config.telemetry.service_name.clone());

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .init();

    tracing::info!(
        endpoint = %config.telemetry.otlp_endpoint,
        service = %config.telemetry.service_name,
        "OTLP trace export enabled"
    );
    Ok(())
}

/// Flush pending spans and tear the provider down.
pub fn shutdown() {
    global::shutdown_tracer_provider();
}
