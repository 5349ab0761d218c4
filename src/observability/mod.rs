//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every request:
//!     → middleware.rs (timer start → dispatch → counter + histogram)
//!     → metrics.rs (registry-backed vectors, exposition rendering)
//!
//! Handlers:
//!     → tracing spans (operation name + attributes)
//!     → logging.rs (structured log events)
//!     → telemetry.rs (OTLP span export, `otel` feature)
//!
//! Consumers:
//!     → GET /metrics (Prometheus scrape)
//!     → stdout (structured logs)
//!     → trace collector (optional, e.g., Tempo)
//! ```
//!
//! # Design Decisions
//! - The metrics registry is owned state injected into the router, not a
//!   process-wide default registry, so tests get isolated counters
//! - The latency label is the route template, never the raw path, to keep
//!   label cardinality bounded
//! - Trace export is optional; span creation and attribution are not

pub mod logging;
pub mod metrics;
pub mod middleware;
#[cfg(feature = "otel")]
pub mod telemetry;

pub use metrics::HttpMetrics;
