//! Round Configuration

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Parameters for a single round of the matching game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Number of matching pairs on the board (default: 8, a 4x4 grid)
    pub pairs_count: usize,

    /// Seconds a mismatched pair stays face-up before flipping back (default: 1.0)
    pub mismatch_delay: f32,

    /// Size of the front-asset catalog identifiers index into.
    /// `None` skips the catalog check (default: None)
    pub front_catalog_size: Option<usize>,

    /// Fixed shuffle seed; `None` draws from entropy (default: None)
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            pairs_count: 8,
            mismatch_delay: 1.0,
            front_catalog_size: None,
            seed: None,
        }
    }
}

impl RoundConfig {
    /// Create a config for `pairs_count` pairs, everything else at defaults.
    pub fn with_pairs(pairs_count: usize) -> Self {
        Self { pairs_count, ..Self::default() }
    }

    /// Validate before round construction. A bad config aborts the round;
    /// nothing is partially built.
    pub fn validate(&self) -> Result<()> {
        if self.pairs_count == 0 {
            return Err(GameError::InvalidConfiguration {
                reason: "pairs_count must be at least 1".to_string(),
            });
        }

        if !self.mismatch_delay.is_finite() || self.mismatch_delay < 0.0 {
            return Err(GameError::InvalidConfiguration {
                reason: format!("mismatch_delay must be a non-negative number, got {}", self.mismatch_delay),
            });
        }

        if let Some(catalog_size) = self.front_catalog_size {
            if self.pairs_count > catalog_size {
                return Err(GameError::InvalidConfiguration {
                    reason: format!(
                        "{} pairs requested but the front catalog holds only {} assets",
                        self.pairs_count, catalog_size
                    ),
                });
            }
        }

        Ok(())
    }
}
