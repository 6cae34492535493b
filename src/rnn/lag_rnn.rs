//! Tanh RNN layer unrolled over a truncation window.
//!
//! Handles window processing, batching, and hidden state management for
//! the [`RnnCell`], plus a linear readout from hidden state to class
//! logits at each timestep.

use crate::cells::RnnCell;
use burn::module::Module;
use burn::nn::{Linear, LinearConfig};
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// Tanh RNN layer with a per-step linear readout
///
/// Processes one truncation window per call and returns the final hidden
/// state so the caller can carry (and detach) it into the next window.
///
/// # Type Parameters
/// * `B` - The backend type
#[derive(Module, Debug)]
pub struct LagRnn<B: Backend> {
    /// The tanh cell for processing individual timesteps
    cell: RnnCell<B>,
    /// Readout from hidden state to class logits
    readout: Linear<B>,
    /// Input size (number of features)
    #[module(skip)]
    input_size: usize,
    /// Hidden state size
    #[module(skip)]
    hidden_size: usize,
    /// Number of output classes
    #[module(skip)]
    num_classes: usize,
    /// Whether input is batch-first
    #[module(skip)]
    batch_first: bool,
    /// Whether to return full sequence or just last timestep
    #[module(skip)]
    return_sequences: bool,
}

impl<B: Backend> LagRnn<B> {
    /// Create a new RNN layer
    ///
    /// # Arguments
    /// * `input_size` - Number of input features per timestep
    /// * `hidden_size` - Number of hidden units
    /// * `num_classes` - Number of output classes per timestep
    /// * `device` - Device to create the module on
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        num_classes: usize,
        device: &B::Device,
    ) -> Self {
        let cell = RnnCell::new(input_size, hidden_size, device);
        let readout = LinearConfig::new(hidden_size, num_classes)
            .with_bias(true)
            .init(device);

        Self {
            cell,
            readout,
            input_size,
            hidden_size,
            num_classes,
            batch_first: true,
            return_sequences: true,
        }
    }

    /// Set whether input is batch-first (default: true)
    pub fn with_batch_first(mut self, batch_first: bool) -> Self {
        self.batch_first = batch_first;
        self
    }

    /// Set whether to return full sequences (default: true)
    pub fn with_return_sequences(mut self, return_sequences: bool) -> Self {
        self.return_sequences = return_sequences;
        self
    }

    /// Get input size
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get hidden size
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Get number of output classes
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Forward pass over one truncation window
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape:
    ///   - 3D: [batch, seq, features] if batch_first=true
    ///   - 3D: [seq, batch, features] if batch_first=false
    /// * `state` - Optional initial hidden state of shape [batch, hidden_size];
    ///   zeros when `None`
    ///
    /// # Returns
    /// Tuple of (logits, final_state) where:
    /// - logits: [batch, seq, num_classes], or [batch, 1, num_classes] when
    ///   `return_sequences` is false
    /// - final_state: [batch, hidden_size]
    ///
    /// # Panics
    /// The window must contain at least one timestep.
    pub fn forward(
        &self,
        input: Tensor<B, 3>,
        state: Option<Tensor<B, 2>>,
    ) -> (Tensor<B, 3>, Tensor<B, 2>) {
        let device = input.device();

        let dims = input.dims();
        let (batch_size, seq_len) = if self.batch_first {
            (dims[0], dims[1])
        } else {
            (dims[1], dims[0])
        };
        assert!(seq_len > 0, "input must contain at least one timestep");

        let mut current_state =
            state.unwrap_or_else(|| self.cell.init_state(batch_size, &device));

        let mut outputs: Vec<Tensor<B, 2>> = Vec::with_capacity(seq_len);

        for t in 0..seq_len {
            let step_input: Tensor<B, 2> = if self.batch_first {
                // input[batch, t, features] -> [batch, features]
                input.clone().narrow(1, t, 1).squeeze(1)
            } else {
                // input[t, batch, features] -> [batch, features]
                input.clone().narrow(0, t, 1).squeeze(0)
            };

            current_state = self.cell.forward(step_input, current_state);

            if self.return_sequences || t == seq_len - 1 {
                outputs.push(self.readout.forward(current_state.clone()));
            }
        }

        let logits = Tensor::stack(outputs, 1); // [batch, seq, num_classes]
        (logits, current_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_rnn_creation() {
        let device = Default::default();
        let rnn = LagRnn::<TestBackend>::new(2, 16, 2, &device);

        assert_eq!(rnn.input_size(), 2);
        assert_eq!(rnn.hidden_size(), 16);
        assert_eq!(rnn.num_classes(), 2);
    }

    #[test]
    fn test_rnn_forward() {
        let device = Default::default();
        let rnn = LagRnn::<TestBackend>::new(2, 16, 2, &device);

        let input = Tensor::<TestBackend, 3>::zeros([4, 10, 2], &device);
        let (logits, state) = rnn.forward(input, None);

        assert_eq!(logits.dims(), [4, 10, 2]);
        assert_eq!(state.dims(), [4, 16]);
    }

    #[test]
    fn test_rnn_return_last_only() {
        let device = Default::default();
        let rnn = LagRnn::<TestBackend>::new(2, 16, 2, &device).with_return_sequences(false);

        let input = Tensor::<TestBackend, 3>::zeros([4, 10, 2], &device);
        let (logits, state) = rnn.forward(input, None);

        assert_eq!(logits.dims(), [4, 1, 2]);
        assert_eq!(state.dims(), [4, 16]);
    }

    #[test]
    fn test_rnn_seq_first() {
        let device = Default::default();
        let rnn = LagRnn::<TestBackend>::new(2, 8, 2, &device).with_batch_first(false);

        // [seq, batch, features]
        let input = Tensor::<TestBackend, 3>::zeros([10, 4, 2], &device);
        let (logits, state) = rnn.forward(input, None);

        assert_eq!(logits.dims(), [4, 10, 2]);
        assert_eq!(state.dims(), [4, 8]);
    }

    #[test]
    #[should_panic(expected = "at least one timestep")]
    fn test_rnn_rejects_empty_window() {
        let device = Default::default();
        let rnn = LagRnn::<TestBackend>::new(2, 8, 2, &device);

        let input = Tensor::<TestBackend, 3>::zeros([4, 0, 2], &device);
        let _ = rnn.forward(input, None);
    }

    #[test]
    fn test_rnn_with_initial_state() {
        let device = Default::default();
        let rnn = LagRnn::<TestBackend>::new(2, 8, 2, &device);

        let input = Tensor::<TestBackend, 3>::zeros([4, 5, 2], &device);
        let initial_state = Tensor::<TestBackend, 2>::ones([4, 8], &device);

        let (logits, state) = rnn.forward(input, Some(initial_state));

        assert_eq!(logits.dims(), [4, 5, 2]);
        assert_eq!(state.dims(), [4, 8]);
    }
}
