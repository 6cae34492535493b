//! # Synthetic Dataset
//!
//! Data side of the TBPTT demonstration: a generator for the
//! lag-dependent binary task and a batcher that cuts its output into
//! truncation windows.
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`generate`] | Aligned (X, Y) sequences with lag-3/lag-8 dependencies |
//! | [`Batcher`] | Contiguous `[batch, num_steps]` truncation windows |
//!
//! Both sequences live only for the duration of one training pass; there
//! is no persistence.

pub mod batcher;
pub mod generator;

pub use batcher::Batcher;
pub use generator::{generate, BASE_RATE, FAR_EFFECT, FAR_LAG, NEAR_EFFECT, NEAR_LAG};
