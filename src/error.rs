use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlantcastError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed measurement: {0}")]
    Parse(String),

    #[error("Location not found: {0}")]
    NotFound(String),

    #[error("Weather service unavailable: {0}")]
    Upstream(String),
}

pub type Result<T> = std::result::Result<T, PlantcastError>;
