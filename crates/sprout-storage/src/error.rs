use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid key: {key}")]
    InvalidKey { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("read error: {0}")]
    Read(std::io::Error),

    #[error("write error: {0}")]
    Write(std::io::Error),
}
