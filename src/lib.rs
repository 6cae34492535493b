//! # LagRNN - Truncated BPTT on a Lag-Dependent Binary Sequence
//!
//! A small pedagogical crate built on the Burn framework, demonstrating
//! truncated backpropagation-through-time with a hand-rolled tanh
//! recurrent cell.
//!
//! ## The Task
//!
//! - **X**: random bits, i.i.d. Bernoulli(0.5)
//! - **Y[i]**: a Bernoulli draw whose success probability starts at 0.5,
//!   gains +0.5 when `X[i-3] == 1` and −0.25 when `X[i-8] == 1`
//!   (wraparound indexing at the sequence boundary)
//!
//! A model that only sees the current input sits at the chance
//! cross-entropy; picking up the lag-3 and then the lag-8 dependency
//! lowers it in two visible stages, which makes the loss curve a nice
//! illustration of what the truncation window can and cannot learn.
//!
//! ## Quick Start
//!
//! ```rust
//! use lagrnn::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let (x, y) = generate(1_000, &mut rng).unwrap();
//!
//! assert_eq!(x.len(), y.len());
//!
//! // Cut into truncation windows of 10 steps across 4 parallel rows.
//! let windows = Batcher::new(4, 10).windows(&x, &y).unwrap();
//! assert_eq!(windows.len(), 25);
//! ```
//!
//! ## Training
//!
//! ```ignore
//! use burn::backend::{Autodiff, NdArray};
//! use lagrnn::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! type Backend = Autodiff<NdArray<f32>>;
//!
//! let device = Default::default();
//! let mut rng = StdRng::seed_from_u64(42);
//! let losses = train::<Backend, _>(&TrainingConfig::default(), &device, &mut rng)?;
//! // `losses` is the ordered per-window loss history, ready for plotting.
//! ```

pub mod cells;
pub mod config;
pub mod dataset;
pub mod error;
pub mod rnn;
pub mod training;

pub mod prelude {
    pub use crate::cells::RnnCell;
    pub use crate::config::TrainingConfig;
    pub use crate::dataset::{generate, Batcher, FAR_LAG, NEAR_LAG};
    pub use crate::error::{LagRnnError, Result};
    pub use crate::rnn::LagRnn;
    pub use crate::training::{train, NUM_CLASSES};
}
