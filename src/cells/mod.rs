//! # Recurrent Cell
//!
//! The single-timestep building block of the demonstration. The cell
//! processes one timestep at a time; the higher-level layer in
//! [`crate::rnn`] wraps it for whole-window processing.
//!
//! ## Tensor Shapes
//!
//! | Tensor | Shape | Description |
//! |--------|-------|-------------|
//! | `input` | `[batch, input_size]` | One-hot input features |
//! | `hidden_state` | `[batch, hidden_size]` | Previous hidden state |
//! | `new_state` | `[batch, hidden_size]` | Updated hidden state |
//!
//! Most users should go through [`LagRnn`](crate::rnn::LagRnn), which
//! unrolls the cell over a truncation window. Use the cell directly for
//! custom unrolling or state management.

pub mod rnn_cell;

pub use rnn_cell::RnnCell;
