use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("review not found: {0}")]
    ReviewNotFound(i64),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("invalid expansion key: {0}")]
    InvalidExpansionKey(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
