use burn::module::Module;
use burn::nn::{Linear, LinearConfig};
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// Single-layer tanh recurrent cell
///
/// Implements the classic vanilla RNN update:
/// - h' = tanh(W_x @ x + b + W_h @ h)
#[derive(Module, Debug)]
pub struct RnnCell<B: Backend> {
    #[module(skip)]
    input_size: usize,
    #[module(skip)]
    hidden_size: usize,
    input_map: Linear<B>,     // Maps input to hidden_size (with bias)
    recurrent_map: Linear<B>, // Maps hidden state to hidden_size (no bias)
}

impl<B: Backend> RnnCell<B> {
    /// Create a new tanh RNN cell
    ///
    /// # Arguments
    /// * `input_size` - Size of the input features
    /// * `hidden_size` - Size of the hidden state
    /// * `device` - Device to create the module on
    pub fn new(input_size: usize, hidden_size: usize, device: &B::Device) -> Self {
        let input_map = LinearConfig::new(input_size, hidden_size)
            .with_bias(true)
            .init(device);

        let recurrent_map = LinearConfig::new(hidden_size, hidden_size)
            .with_bias(false)
            .init(device);

        Self {
            input_size,
            hidden_size,
            input_map,
            recurrent_map,
        }
    }

    /// Get the input size
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get the hidden size
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Zero hidden state for a fresh sequence
    pub fn init_state(&self, batch_size: usize, device: &B::Device) -> Tensor<B, 2> {
        Tensor::zeros([batch_size, self.hidden_size], device)
    }

    /// Perform a forward pass through the cell
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape `[batch_size, input_size]`
    /// * `hidden_state` - Previous hidden state of shape `[batch_size, hidden_size]`
    ///
    /// # Returns
    /// New hidden state of shape `[batch_size, hidden_size]`
    pub fn forward(&self, input: Tensor<B, 2>, hidden_state: Tensor<B, 2>) -> Tensor<B, 2> {
        let input_contrib = self.input_map.forward(input);
        let recurrent_contrib = self.recurrent_map.forward(hidden_state);

        (input_contrib + recurrent_contrib).tanh()
    }
}
