//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (metrics, timeout, CORS, request ID, tracing)
//! - Own the application state handed to handlers
//! - Bind the server to a listener and run it to shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::HeaderName,
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::request::{RequestIdMaker, X_REQUEST_ID};
use crate::http::{books, diagnostics};
use crate::observability::metrics::{HttpMetrics, APP_NAME};
use crate::observability::middleware::track_requests;
use crate::simulation::{DelayPolicy, FaultPolicy, RandomFault, UniformDelay};
use crate::store::BookStore;

/// Application state injected into handlers.
///
/// Everything here is constructed at startup and owned by the router; there
/// are no process-wide singletons, so tests can build isolated instances
/// with deterministic policies.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BookStore>,
    pub metrics: Arc<HttpMetrics>,
    pub delay: Arc<dyn DelayPolicy>,
    pub fault: Arc<dyn FaultPolicy>,
}

impl AppState {
    /// Production state: seeded store, fresh registry, random simulation
    /// policies.
    pub fn new() -> Result<Self, prometheus::Error> {
        Ok(Self {
            store: Arc::new(BookStore::seed()),
            metrics: Arc::new(HttpMetrics::new(APP_NAME)?),
            delay: Arc::new(UniformDelay),
            fault: Arc::new(RandomFault::default()),
        })
    }
}

/// HTTP server for the book API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server with default state.
    pub fn new(config: ServiceConfig) -> Result<Self, prometheus::Error> {
        let state = AppState::new()?;
        Ok(Self::with_state(config, state))
    }

    /// Create a server around caller-supplied state (tests inject
    /// deterministic delay/fault policies through this).
    pub fn with_state(config: ServiceConfig, state: AppState) -> Self {
        Self {
            router: Self::build_router(&config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The metrics middleware sits closest to the routes so it times the
    /// handlers themselves; request-id assignment is outermost so every
    /// log line below it carries the id.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        let request_id_header = HeaderName::from_static(X_REQUEST_ID);

        Router::new()
            .route("/", get(diagnostics::root))
            .route("/books", get(books::list_books).post(books::create_book))
            .route(
                "/books/{id}",
                get(books::get_book)
                    .put(books::update_book)
                    .delete(books::delete_book),
            )
            .route("/health", get(diagnostics::health))
            .route("/error", get(diagnostics::simulate_error))
            .route("/metrics", get(diagnostics::export_metrics))
            .with_state(state.clone())
            .layer(middleware::from_fn_with_state(state, track_requests))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(cors)
            .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(request_id_header, RequestIdMaker))
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
