//! # RNN Layer for Window Processing
//!
//! Wraps the single-timestep [`RnnCell`](crate::cells::RnnCell) into a
//! layer that processes whole truncation windows, manages the hidden
//! state, and applies the class readout. **This is the surface the
//! training loop uses.**
//!
//! ## Tensor Shapes
//!
//! ### Input Tensor (3D)
//!
//! | Format | Shape | Default |
//! |--------|-------|---------|
//! | Batch-first | `[batch, num_steps, features]` | ✓ Yes |
//! | Sequence-first | `[num_steps, batch, features]` | No |
//!
//! Use `.with_batch_first(false)` to switch to sequence-first format.
//!
//! ### Output Tensor
//!
//! | Setting | Shape | Description |
//! |---------|-------|-------------|
//! | `return_sequences=true` (default) | `[batch, num_steps, num_classes]` | All timesteps |
//! | `return_sequences=false` | `[batch, 1, num_classes]` | Last timestep only |
//!
//! ### Hidden State Tensor (2D)
//!
//! Shape: `[batch, hidden_size]`. Returned from every call so the next
//! window can continue from it.
//!
//! ## Stateful Processing (the truncation in TBPTT)
//!
//! ```ignore
//! let rnn = LagRnn::<Backend>::new(2, 16, 2, &device);
//!
//! let (logits1, state) = rnn.forward(window1, None);
//! let (logits2, state) = rnn.forward(window2, Some(state.detach()));
//! // Detaching carries the state value across windows while cutting the
//! // gradient path at the window boundary.
//! ```

pub mod lag_rnn;

pub use lag_rnn::LagRnn;
