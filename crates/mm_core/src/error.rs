use thiserror::Error;

use crate::score::ScoreStoreError;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Illegal state: {reason}")]
    IllegalState { reason: String },

    #[error("Score store error: {0}")]
    ScoreStore(#[from] ScoreStoreError),
}

impl GameError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            GameError::InvalidConfiguration { .. } => false,
            GameError::IllegalState { .. } => true,
            GameError::ScoreStore(err) => err.is_recoverable(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
