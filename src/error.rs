pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid answer pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
