use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found")]
    NotFound,

    #[error("Standings computation error: {0}")]
    Engine(#[from] standings::EngineError),
}

pub type Result<T> = std::result::Result<T, StorageError>;
