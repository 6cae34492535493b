//! Training Demo - TBPTT on the Lag-Dependency Task
//!
//! Trains the tanh RNN end to end and summarizes the loss curve. Run with
//! `RUST_LOG=info` to watch the running averages during training.

use burn::backend::{Autodiff, NdArray};
use lagrnn::config::TrainingConfig;
use lagrnn::training::train;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    env_logger::init();

    println!("=== LagRNN Training Example ===\n");

    type Backend = Autodiff<NdArray<f32>>;
    let device = Default::default();

    let config = TrainingConfig::default();
    let mut rng = StdRng::seed_from_u64(42);

    println!("Training setup:");
    println!("  Sequence length:  {}", config.total_length);
    println!("  Batch size:       {}", config.batch_size);
    println!("  Window length:    {}", config.num_steps);
    println!("  Hidden size:      {}", config.hidden_size);
    println!("  Learning rate:    {}", config.learning_rate);
    println!("  Epochs:           {}", config.epochs);
    println!();

    println!("Running TBPTT...");
    let losses = train::<Backend, _>(&config, &device, &mut rng).expect("valid configuration");
    println!("  {} optimizer steps completed", losses.len());
    println!();

    // The chance level for a balanced binary target is ln(2) ~= 0.693.
    // Learning the lag-3 dependency alone brings the last-step loss to
    // roughly 0.52; the lag-8 dependency lowers it further.
    let k = 50.min(losses.len());
    let head = losses[..k].iter().sum::<f32>() / k as f32;
    let tail = losses[losses.len() - k..].iter().sum::<f32>() / k as f32;

    println!("Loss curve summary:");
    println!("  chance level:        0.6931");
    println!("  first {} windows:    {:.4}", k, head);
    println!("  last {} windows:     {:.4}", k, tail);
    println!();

    println!("Loss samples (every 50th window):");
    for (i, loss) in losses.iter().enumerate().step_by(50) {
        println!("  window {:>5}: {:.4}", i, loss);
    }
    println!();

    println!("=== Training Example completed! ===");
}
