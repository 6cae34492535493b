//! Error types shared by the dataset and training modules.

use thiserror::Error;

/// Errors produced by dataset construction and training configuration.
#[derive(Debug, Error)]
pub enum LagRnnError {
    /// A requested sequence length of zero. Generation never returns a
    /// partial or empty pair for an invalid length.
    #[error("sequence length must be positive, got {0}")]
    InvalidLength(usize),

    /// A configuration field outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input and output sequences handed to the batcher disagree in length.
    #[error("input/output length mismatch: {x_len} vs {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// The sequences are too short to cut even one truncation window.
    #[error(
        "sequence of length {len} cannot fill {batch_size} rows with a window of {num_steps} steps"
    )]
    SequenceTooShort {
        len: usize,
        batch_size: usize,
        num_steps: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LagRnnError>;
