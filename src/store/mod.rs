//! Book storage subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → books.rs (BookStore: mutex-guarded Vec<Book>)
//!     → Result<Book, StoreError> back to the handler
//!     → NotFound translated to HTTP 404 at the boundary
//! ```
//!
//! # Design Decisions
//! - Insertion order is the iteration order (no index, linear scans)
//! - Ids are assigned by the store, never by the client
//! - Every read-modify-write sequence holds the lock for its whole duration
//! - Failures are explicit `StoreError` values, not panics

pub mod books;

pub use books::{Book, BookDraft, BookPatch, BookStore, StoreError};
