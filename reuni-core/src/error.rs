use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReuniError {
    #[error("Configuration error: {0}")]
    Config(String),
    /// Already user-facing; printed without a prefix.
    #[error("{0}")]
    Validation(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Input error: {0}")]
    Input(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_yaml_ng::Error> for ReuniError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        ReuniError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for ReuniError {
    fn from(err: serde_json::Error) -> Self {
        ReuniError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ReuniError>;
