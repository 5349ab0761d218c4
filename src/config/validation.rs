//! Semantic configuration checks.

use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),
    #[error("request timeout must be nonzero")]
    ZeroRequestTimeout,
    #[error("sampling ratio {0} is outside [0.0, 1.0]")]
    SamplingRatioOutOfRange(f64),
}

/// Collect every semantic problem rather than stopping at the first.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    let ratio = config.telemetry.sampling_ratio;
    if !(0.0..=1.0).contains(&ratio) {
        errors.push(ValidationError::SamplingRatioOutOfRange(ratio));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
