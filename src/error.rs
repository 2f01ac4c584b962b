use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid scoring request: {0}")]
    InvalidRequest(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScorerError>;
