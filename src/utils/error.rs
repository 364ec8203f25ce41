use thiserror::Error;

#[derive(Error, Debug)]
pub enum FunctionError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {field}: {reason}")]
    InvalidConfigValueError { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, FunctionError>;
