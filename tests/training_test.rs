//! End-to-end tests of the TBPTT loop

use burn::backend::{Autodiff, NdArray};
use burn::tensor::backend::Backend;
use lagrnn::config::TrainingConfig;
use lagrnn::error::LagRnnError;
use lagrnn::training::train;
use rand::rngs::StdRng;
use rand::SeedableRng;

type TestBackend = Autodiff<NdArray<f32>>;

#[test]
fn test_training_produces_expected_step_count() {
    TestBackend::seed(7);
    let device = Default::default();

    let config = TrainingConfig {
        total_length: 2_000,
        batch_size: 8,
        num_steps: 10,
        hidden_size: 8,
        learning_rate: 0.1,
        epochs: 2,
        log_every: 10,
    };
    let mut rng = StdRng::seed_from_u64(20);

    let losses = train::<TestBackend, _>(&config, &device, &mut rng).unwrap();

    // 2000 / 8 = 250 columns per row, 250 / 10 = 25 windows per epoch.
    assert_eq!(losses.len(), 50);
    assert!(losses.iter().all(|l| l.is_finite()));
}

#[test]
fn test_training_starts_near_chance() {
    TestBackend::seed(8);
    let device = Default::default();

    let config = TrainingConfig {
        total_length: 4_000,
        batch_size: 16,
        num_steps: 10,
        hidden_size: 8,
        learning_rate: 0.05,
        epochs: 1,
        log_every: 5,
    };
    let mut rng = StdRng::seed_from_u64(21);

    let losses = train::<TestBackend, _>(&config, &device, &mut rng).unwrap();

    // Before the model picks up the lag structure, the last-step loss
    // sits near the chance cross-entropy ln(2) ~= 0.693 for a roughly
    // balanced binary target.
    assert!(losses[0] > 0.3 && losses[0] < 1.5, "first loss {}", losses[0]);
}

#[test]
fn test_training_beats_chance() {
    TestBackend::seed(9);
    let device = Default::default();

    // Long enough for the model to pick up at least the lag-3 dependency,
    // which alone moves the last-step loss to roughly 0.52 -- well below
    // the chance cross-entropy ln(2) ~= 0.6931 for a balanced target.
    let config = TrainingConfig {
        total_length: 40_000,
        batch_size: 16,
        num_steps: 12,
        hidden_size: 16,
        learning_rate: 0.3,
        epochs: 3,
        log_every: 50,
    };
    let mut rng = StdRng::seed_from_u64(22);

    let losses = train::<TestBackend, _>(&config, &device, &mut rng).unwrap();

    let quarter = losses.len() / 4;
    let head = losses[..quarter].iter().sum::<f32>() / quarter as f32;
    let tail = losses[losses.len() - quarter..].iter().sum::<f32>() / quarter as f32;

    assert!(
        tail < head,
        "loss should fall: first quarter {:.4}, last quarter {:.4}",
        head,
        tail
    );
    assert!(
        tail < 0.68,
        "converged loss should beat the 0.6931 chance level, got {:.4}",
        tail
    );
}

#[test]
fn test_invalid_configurations_are_rejected() {
    let device = Default::default();
    let mut rng = StdRng::seed_from_u64(23);

    let zero_batch = TrainingConfig {
        batch_size: 0,
        ..TrainingConfig::default()
    };
    assert!(matches!(
        train::<TestBackend, _>(&zero_batch, &device, &mut rng),
        Err(LagRnnError::InvalidConfig(_))
    ));

    // Valid fields, but the sequence cannot fill one window.
    let too_short = TrainingConfig {
        total_length: 64,
        batch_size: 32,
        num_steps: 16,
        ..TrainingConfig::default()
    };
    assert!(matches!(
        train::<TestBackend, _>(&too_short, &device, &mut rng),
        Err(LagRnnError::SequenceTooShort { .. })
    ));
}
