//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional --config flag)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → handed to the server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All fields have defaults, so the service runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks
//! - The simulated delay bounds and the fault probability are deliberately
//!   NOT configuration; they are fixed demonstration constants

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ServiceConfig;
