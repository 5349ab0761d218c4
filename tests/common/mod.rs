//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use bookly_api::config::ServiceConfig;
use bookly_api::http::server::AppState;
use bookly_api::http::HttpServer;
use bookly_api::lifecycle::Shutdown;
use bookly_api::observability::metrics::{HttpMetrics, APP_NAME};
use bookly_api::simulation::{FaultPolicy, NoDelay};
use bookly_api::store::BookStore;

/// A fully-wired server on an ephemeral port with deterministic delay and
/// a caller-chosen fault policy. The metrics handle is the same instance
/// the server records into, so tests can assert exact sample counts.
pub struct TestApp {
    pub addr: SocketAddr,
    pub metrics: Arc<HttpMetrics>,
    shutdown: Shutdown,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

pub async fn spawn_app(fault: Arc<dyn FaultPolicy>) -> TestApp {
    let metrics = Arc::new(HttpMetrics::new(APP_NAME).expect("fresh registry"));
    let state = AppState {
        store: Arc::new(BookStore::seed()),
        metrics: metrics.clone(),
        delay: Arc::new(NoDelay),
        fault,
    };

    let server = HttpServer::with_state(ServiceConfig::default(), state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestApp {
        addr,
        metrics,
        shutdown,
    }
}
