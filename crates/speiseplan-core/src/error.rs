use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid filter token {0:?}: expected '+tag' or '-tag'")]
    InvalidFilter(String),
    #[error("Duplicate item key: {0}")]
    DuplicateKey(String),
    #[error("Invalid record date {key:?}: {source}")]
    InvalidDate {
        key: String,
        #[source]
        source: time::error::Parse,
    },
    #[error("JSON decoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
