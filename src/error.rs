use thiserror::Error;

use crate::types::Float;

pub type PendulumResult<T> = Result<T, PendulumError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PendulumError {
    /// A mutator or `simulate` was handed a value outside its domain.
    /// Raised before anything is written, so the engine stays usable.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl PendulumError {
    pub fn invalid(name: &'static str, value: impl ToString, reason: &'static str) -> Self {
        tracing::warn!(name, value = %value.to_string(), reason, "rejected parameter");
        PendulumError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

/// Check that a physical quantity (mass, length, time step) is finite and
/// strictly positive.
pub fn ensure_positive(name: &'static str, value: Float) -> PendulumResult<Float> {
    if !value.is_finite() {
        return Err(PendulumError::invalid(name, value, "must be finite"));
    }
    if value <= 0. {
        return Err(PendulumError::invalid(
            name,
            value,
            "must be strictly positive",
        ));
    }
    Ok(value)
}
