//! Latency and fault simulation.
//!
//! # Responsibilities
//! - Inject a bounded random delay per store operation (visible latency
//!   histograms for demonstration)
//! - Fail the dedicated error route at a fixed probability
//!
//! # Design Decisions
//! - Both behaviors are injected strategies, not inline randomness, so tests
//!   substitute deterministic providers
//! - Delays are awaited on the runtime; a sleeping request never blocks the
//!   executor
//! - Delay bounds are fixed constants per operation, not configuration

pub mod delay;
pub mod fault;

pub use delay::{DelayPolicy, NoDelay, StoreOp, UniformDelay};
pub use fault::{AlwaysFault, FaultPolicy, NeverFault, RandomFault};
