//! Error types for modcon-layout

use thiserror::Error;

/// Layout model errors
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Unknown data type: {0}")]
    UnknownDataType(String),

    #[error("Unknown byte order: {0}")]
    UnknownByteOrder(String),

    #[error("Unknown function code: {0}")]
    UnknownFunctionCode(u8),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
