use thiserror::Error;

#[derive(Debug, Error)]
pub enum KisetsuError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("request cancelled")]
    Cancelled,

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
