//! Per-operation simulated latency.

use std::time::Duration;

use rand::Rng;

/// The store operation a request is about to perform, used to pick the
/// simulated backend cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl StoreOp {
    /// Fixed uniform delay bounds in seconds.
    pub const fn delay_bounds(self) -> (f64, f64) {
        match self {
            StoreOp::List => (0.01, 0.10),
            StoreOp::Get => (0.05, 0.20),
            StoreOp::Create => (0.10, 0.30),
            StoreOp::Update => (0.10, 0.25),
            StoreOp::Delete => (0.05, 0.15),
        }
    }
}

/// Strategy for sampling the injected delay.
pub trait DelayPolicy: Send + Sync {
    /// Duration to wait before performing `op`.
    fn sample(&self, op: StoreOp) -> Duration;
}

/// Uniform random delay within the fixed per-operation bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformDelay;

impl DelayPolicy for UniformDelay {
    fn sample(&self, op: StoreOp) -> Duration {
        let (low, high) = op.delay_bounds();
        Duration::from_secs_f64(rand::thread_rng().gen_range(low..high))
    }
}

/// Zero delay, for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayPolicy for NoDelay {
    fn sample(&self, _op: StoreOp) -> Duration {
        Duration::ZERO
    }
}
