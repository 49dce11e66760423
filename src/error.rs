use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadicalError {
    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Text too long (max {0} characters)")]
    TextTooLong(usize),

    #[error("No Chinese characters found in input")]
    NoChineseCharacters,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RadicalError>;
