//! Training configuration.
//!
//! All knobs of the demonstration live in one struct passed by reference
//! into [`train`](crate::training::train); nothing is read from
//! module-level globals.

use serde::{Deserialize, Serialize};

use crate::error::{LagRnnError, Result};

/// Configuration for one training run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Total length of the generated (X, Y) sequences.
    pub total_length: usize,
    /// Number of parallel rows the sequences are reshaped into.
    pub batch_size: usize,
    /// Truncation window length: how many timesteps one backward pass
    /// spans. Must exceed the far lag for the task to be learnable
    /// within a single window.
    pub num_steps: usize,
    /// Hidden state size of the tanh cell.
    pub hidden_size: usize,
    /// SGD learning rate.
    pub learning_rate: f64,
    /// Number of passes over the window sequence.
    pub epochs: usize,
    /// Emit a running loss average every this many windows.
    pub log_every: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            total_length: 50_000,
            batch_size: 32,
            num_steps: 16,
            hidden_size: 16,
            learning_rate: 0.1,
            epochs: 3,
            log_every: 20,
        }
    }
}

impl TrainingConfig {
    /// Check every field is in its valid range.
    ///
    /// # Errors
    /// [`LagRnnError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.total_length == 0 {
            return Err(LagRnnError::InvalidConfig(
                "total_length must be positive".into(),
            ));
        }
        if self.batch_size == 0 {
            return Err(LagRnnError::InvalidConfig(
                "batch_size must be positive".into(),
            ));
        }
        if self.num_steps == 0 {
            return Err(LagRnnError::InvalidConfig(
                "num_steps must be positive".into(),
            ));
        }
        if self.hidden_size == 0 {
            return Err(LagRnnError::InvalidConfig(
                "hidden_size must be positive".into(),
            ));
        }
        if self.epochs == 0 {
            return Err(LagRnnError::InvalidConfig("epochs must be positive".into()));
        }
        if self.log_every == 0 {
            return Err(LagRnnError::InvalidConfig(
                "log_every must be positive".into(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(LagRnnError::InvalidConfig(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
