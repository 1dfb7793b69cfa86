use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid generator options: {0}")]
    InvalidOptions(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Shared catalog already installed")]
    AlreadyInstalled,
}

pub type Result<T> = std::result::Result<T, CatalogError>;
