//! Synthetic binary sequence generator with two lag dependencies.
//!
//! Produces aligned sequences (X, Y) where X is i.i.d. Bernoulli(0.5) and
//! Y[i] is a Bernoulli draw whose success probability depends on X at two
//! fixed offsets behind i:
//!
//! | X[i-3] | X[i-8] | P(Y[i] = 1) |
//! |--------|--------|-------------|
//! | 0      | 0      | 0.50        |
//! | 1      | 0      | 1.00        |
//! | 0      | 1      | 0.25        |
//! | 1      | 1      | 0.75        |
//!
//! The lag-3 dependency is learnable by a short truncation window; the lag-8
//! dependency requires the window (and the carried hidden state) to reach
//! further back, which is what makes this a useful TBPTT teaching task.

use ndarray::Array1;
use rand::Rng;

use crate::error::{LagRnnError, Result};

/// Offset of the near dependency: X three positions back raises the
/// success probability.
pub const NEAR_LAG: usize = 3;

/// Offset of the far dependency: X eight positions back lowers the
/// success probability.
pub const FAR_LAG: usize = 8;

/// Success probability before either lag effect applies.
pub const BASE_RATE: f64 = 0.5;

/// Added to the threshold when X[i - NEAR_LAG] == 1.
pub const NEAR_EFFECT: f64 = 0.5;

/// Added to the threshold when X[i - FAR_LAG] == 1.
pub const FAR_EFFECT: f64 = -0.25;

/// Generate an aligned (X, Y) pair of length `n`.
///
/// Lag lookups for the first positions wrap around to the tail of X,
/// i.e. the index is `(i - lag) mod n`. The two effects compose
/// additively, so the threshold is always one of
/// {0.25, 0.5, 0.75, 1.0} and needs no clamping.
///
/// The random source is injected so that a seeded generator yields
/// identical sequences across runs.
///
/// # Arguments
/// * `n` - Requested sequence length, must be positive
/// * `rng` - Random source consumed for both X and Y draws
///
/// # Errors
/// Returns [`LagRnnError::InvalidLength`] when `n == 0`.
pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<(Array1<u8>, Array1<u8>)> {
    if n == 0 {
        return Err(LagRnnError::InvalidLength(n));
    }

    let x: Array1<u8> = (0..n).map(|_| u8::from(rng.gen_bool(BASE_RATE))).collect();

    let len = n as isize;
    let mut y = Array1::<u8>::zeros(n);
    for i in 0..n {
        let near = x[(i as isize - NEAR_LAG as isize).rem_euclid(len) as usize];
        let far = x[(i as isize - FAR_LAG as isize).rem_euclid(len) as usize];

        let mut threshold = BASE_RATE;
        if near == 1 {
            threshold += NEAR_EFFECT;
        }
        if far == 1 {
            threshold += FAR_EFFECT;
        }

        if rng.gen::<f64>() <= threshold {
            y[i] = 1;
        }
    }

    Ok((x, y))
}
