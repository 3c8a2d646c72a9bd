use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScoreStoreError {
    /// A recoverable failure leaves the round intact; the score simply
    /// isn't saved. A corrupted store is not recoverable by retrying.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ScoreStoreError::Io(_) => true,
            ScoreStoreError::Serialization(_) => false,
        }
    }
}
