//! Startup/shutdown coordination.
//!
//! # Design Decisions
//! - One broadcast channel fans the shutdown signal out to the server task
//!   and to tests driving a server programmatically
//! - Ctrl+C is wired to the coordinator in `main`, not inside the server,
//!   so embedded servers stay signal-free

pub mod shutdown;

pub use shutdown::Shutdown;
