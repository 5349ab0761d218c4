//! Bookly API Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod simulation;
pub mod store;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
