//! Error types for modcon-calc

use thiserror::Error;

/// Scaling pipeline errors
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Equation error: {0}")]
    Equation(String),

    #[error("Bitmask error: {0}")]
    Bitmask(String),

    #[error("Value error: {0}")]
    Value(String),
}

impl CalcError {
    pub fn equation(msg: impl Into<String>) -> Self {
        Self::Equation(msg.into())
    }

    pub fn bitmask(msg: impl Into<String>) -> Self {
        Self::Bitmask(msg.into())
    }

    pub fn value(msg: impl Into<String>) -> Self {
        Self::Value(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
