use thiserror::Error;

pub type OptionsResult<T> = Result<T, OptionsError>;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to serialize options: {0}")]
    Serialization(#[from] serde_json::Error),
}
