use hash_ring::RingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Ring(#[from] RingError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
