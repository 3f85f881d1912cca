//! Error types for the cipher engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdesError {
    #[error("Invalid binary input: {0}")]
    InvalidBinaryInput(String),

    #[error("Size mismatch: {0}")]
    SizeMismatch(String),

    #[error("Invalid S-box format: {0}")]
    InvalidSBoxFormat(String),

    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    #[error("Invalid parameter value: {0}")]
    InvalidParameterValue(String),

    #[error("Unsupported mode: {0}")]
    UnsupportedMode(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SdesError {
    fn from(err: std::io::Error) -> Self {
        SdesError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SdesError>;
