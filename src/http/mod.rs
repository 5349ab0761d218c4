//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack, app state)
//!     → metrics middleware (timer around everything below)
//!     → books.rs / diagnostics.rs (instrumented handlers)
//!     → error.rs (typed failures → status + {"detail": ...} body)
//!     → Send to client
//! ```

pub mod books;
pub mod diagnostics;
pub mod error;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::{RequestIdMaker, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
