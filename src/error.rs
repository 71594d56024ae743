use thiserror::Error;

#[derive(Error, Debug)]
pub enum KudozError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Data error: {0}")]
    Data(String),
}

pub type Result<T> = std::result::Result<T, KudozError>;
