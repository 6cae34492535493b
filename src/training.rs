//! Truncated backpropagation-through-time.
//!
//! One pass of the loop:
//!
//! 1. one-hot the window inputs to `[batch, num_steps, 2]`
//! 2. forward through [`LagRnn`] with the carried hidden state
//! 3. cross-entropy on the last step of the window
//! 4. backward and SGD update
//! 5. detach the final hidden state and carry it into the next window
//!
//! The detach in step 5 is the truncation: the state crosses the window
//! boundary as a value, so no gradient flows further back than
//! `num_steps` timesteps.

use burn::nn::loss::CrossEntropyLossConfig;
use burn::optim::{GradientsParams, Optimizer, SgdConfig};
use burn::tensor::backend::{AutodiffBackend, Backend};
use burn::tensor::{ElementConversion, Int, Tensor, TensorData};
use ndarray::Array2;
use rand::Rng;

use crate::config::TrainingConfig;
use crate::dataset::{generate, Batcher};
use crate::error::Result;
use crate::rnn::LagRnn;

/// Binary task: inputs and targets are both in {0, 1}.
pub const NUM_CLASSES: usize = 2;

/// Train a fresh [`LagRnn`] on one generated sequence pair.
///
/// Generates (X, Y) from the injected random source, cuts the pair into
/// truncation windows, and runs `config.epochs` passes of TBPTT with SGD.
/// The hidden state is carried across windows within an epoch and reset
/// at epoch boundaries. Running loss averages go to the `log` facade
/// every `config.log_every` windows.
///
/// # Returns
/// The ordered per-window loss history, one scalar per optimizer step,
/// suitable for plotting or reporting.
///
/// # Errors
/// Invalid configuration or a sequence too short for one window.
pub fn train<B, R>(
    config: &TrainingConfig,
    device: &B::Device,
    rng: &mut R,
) -> Result<Vec<f32>>
where
    B: AutodiffBackend,
    R: Rng + ?Sized,
{
    config.validate()?;

    let (x, y) = generate(config.total_length, rng)?;
    let batcher = Batcher::new(config.batch_size, config.num_steps);
    let windows = batcher.windows(&x, &y)?;

    let mut model =
        LagRnn::<B>::new(NUM_CLASSES, config.hidden_size, NUM_CLASSES, device)
            .with_return_sequences(false);
    let loss_fn = CrossEntropyLossConfig::new().init(device);
    let mut optim = SgdConfig::new().init();

    log::info!(
        "training on {} windows of [{} x {}] for {} epochs",
        windows.len(),
        config.batch_size,
        config.num_steps,
        config.epochs
    );

    let mut history = Vec::with_capacity(config.epochs * windows.len());

    for epoch in 0..config.epochs {
        let mut state: Option<Tensor<B, 2>> = None;
        let mut running = 0.0f32;
        let mut since_log = 0usize;

        for (step, (xs, ys)) in windows.iter().enumerate() {
            let input = one_hot_inputs::<B>(xs, device);
            let targets = last_step_targets::<B>(ys, device);

            let (logits, new_state) = model.forward(input, state.take());
            // Truncation point: carry the value, cut the gradient path.
            state = Some(new_state.detach());

            let logits: Tensor<B, 2> = logits.squeeze(1);
            let loss = loss_fn.forward(logits, targets);
            let value: f32 = loss.clone().into_scalar().elem();

            let grads = GradientsParams::from_grads(loss.backward(), &model);
            model = optim.step(config.learning_rate, model, grads);

            history.push(value);
            running += value;
            since_log += 1;

            if (step + 1) % config.log_every == 0 {
                log::info!(
                    "epoch {} window {} avg loss {:.4}",
                    epoch,
                    step + 1,
                    running / since_log as f32
                );
                running = 0.0;
                since_log = 0;
            }
        }

        if since_log > 0 {
            log::info!(
                "epoch {} tail avg loss {:.4}",
                epoch,
                running / since_log as f32
            );
        }
    }

    Ok(history)
}

/// One-hot encode a `[batch, num_steps]` binary window to
/// `[batch, num_steps, NUM_CLASSES]` floats.
fn one_hot_inputs<B: Backend>(window: &Array2<u8>, device: &B::Device) -> Tensor<B, 3> {
    let (batch, steps) = window.dim();
    let mut values = vec![0.0f32; batch * steps * NUM_CLASSES];
    for ((b, t), &bit) in window.indexed_iter() {
        values[(b * steps + t) * NUM_CLASSES + bit as usize] = 1.0;
    }
    Tensor::from_data(TensorData::new(values, [batch, steps, NUM_CLASSES]), device)
}

/// Class indices of the last column of a `[batch, num_steps]` window.
fn last_step_targets<B: Backend>(window: &Array2<u8>, device: &B::Device) -> Tensor<B, 1, Int> {
    let (batch, steps) = window.dim();
    let labels: Vec<i64> = window.column(steps - 1).iter().map(|&v| v as i64).collect();
    Tensor::from_data(TensorData::new(labels, [batch]), device)
}
