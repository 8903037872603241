use thiserror::Error;

#[derive(Error, Debug)]
pub enum RageQuitError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, RageQuitError>;
