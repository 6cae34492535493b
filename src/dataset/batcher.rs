//! Cutting aligned sequences into truncation windows.
//!
//! Training never sees the raw length-n sequences: they are reshaped
//! row-major into `batch_size` parallel rows, and the rows are cut
//! column-wise into consecutive windows of `num_steps` columns. Each
//! window is one TBPTT step; consecutive windows continue each row, so
//! the hidden state carried between them stays meaningful.

use ndarray::{s, Array1, Array2};

use crate::error::{LagRnnError, Result};

/// Cuts an (X, Y) pair into fixed-size truncation windows.
#[derive(Clone, Debug)]
pub struct Batcher {
    batch_size: usize,
    num_steps: usize,
}

impl Batcher {
    /// Create a batcher producing `batch_size` rows of `num_steps` columns
    /// per window.
    pub fn new(batch_size: usize, num_steps: usize) -> Self {
        Self {
            batch_size,
            num_steps,
        }
    }

    /// Number of parallel rows per window.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Window length in timesteps.
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Cut aligned sequences into windows of shape `[batch_size, num_steps]`.
    ///
    /// Row b of the reshaped data holds positions
    /// `b * (n / batch_size) ..` of the original sequence, and window w
    /// holds columns `w * num_steps ..` of every row, so all slicing is
    /// contiguous. Elements that do not fill a whole row or a whole
    /// window are discarded.
    ///
    /// # Errors
    /// * [`LagRnnError::InvalidConfig`] when `batch_size` or `num_steps` is zero
    /// * [`LagRnnError::LengthMismatch`] when X and Y differ in length
    /// * [`LagRnnError::SequenceTooShort`] when not even one window fits
    pub fn windows(
        &self,
        x: &Array1<u8>,
        y: &Array1<u8>,
    ) -> Result<Vec<(Array2<u8>, Array2<u8>)>> {
        if self.batch_size == 0 || self.num_steps == 0 {
            return Err(LagRnnError::InvalidConfig(format!(
                "batch_size ({}) and num_steps ({}) must be positive",
                self.batch_size, self.num_steps
            )));
        }
        if x.len() != y.len() {
            return Err(LagRnnError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        let row_len = x.len() / self.batch_size;
        if row_len < self.num_steps {
            return Err(LagRnnError::SequenceTooShort {
                len: x.len(),
                batch_size: self.batch_size,
                num_steps: self.num_steps,
            });
        }

        let x_rows = self.reshape_rows(x, row_len);
        let y_rows = self.reshape_rows(y, row_len);

        let num_windows = row_len / self.num_steps;
        let mut windows = Vec::with_capacity(num_windows);
        for w in 0..num_windows {
            let start = w * self.num_steps;
            let end = start + self.num_steps;
            windows.push((
                x_rows.slice(s![.., start..end]).to_owned(),
                y_rows.slice(s![.., start..end]).to_owned(),
            ));
        }

        Ok(windows)
    }

    fn reshape_rows(&self, seq: &Array1<u8>, row_len: usize) -> Array2<u8> {
        let truncated: Vec<u8> = seq.iter().copied().take(self.batch_size * row_len).collect();
        Array2::from_shape_vec((self.batch_size, row_len), truncated)
            .expect("row shape matches truncated length")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Array1<u8> {
        (0..n).map(|v| (v % 251) as u8).collect()
    }

    #[test]
    fn test_window_shapes_and_count() {
        let x = ramp(100);
        let y = ramp(100);
        let windows = Batcher::new(4, 5).windows(&x, &y).unwrap();

        // 100 / 4 = 25 columns per row, 25 / 5 = 5 windows.
        assert_eq!(windows.len(), 5);
        for (xs, ys) in &windows {
            assert_eq!(xs.dim(), (4, 5));
            assert_eq!(ys.dim(), (4, 5));
        }
    }

    #[test]
    fn test_windows_are_contiguous_slices() {
        let x = ramp(24);
        let y = ramp(24);
        let windows = Batcher::new(2, 3).windows(&x, &y).unwrap();

        // Row 0 covers positions 0..12, row 1 covers 12..24.
        let (first_x, _) = &windows[0];
        assert_eq!(first_x.row(0).to_vec(), vec![0, 1, 2]);
        assert_eq!(first_x.row(1).to_vec(), vec![12, 13, 14]);

        let (second_x, _) = &windows[1];
        assert_eq!(second_x.row(0).to_vec(), vec![3, 4, 5]);
        assert_eq!(second_x.row(1).to_vec(), vec![15, 16, 17]);
    }

    #[test]
    fn test_remainder_is_discarded() {
        // 23 / 2 = 11 columns per row, 11 / 3 = 3 windows; positions 22
        // (incomplete row) and columns 9..11 (incomplete window) are dropped.
        let x = ramp(23);
        let y = ramp(23);
        let windows = Batcher::new(2, 3).windows(&x, &y).unwrap();
        assert_eq!(windows.len(), 3);
    }

    #[test]
    fn test_zero_configuration_is_invalid() {
        let x = ramp(10);
        let y = ramp(10);
        assert!(matches!(
            Batcher::new(0, 3).windows(&x, &y),
            Err(LagRnnError::InvalidConfig(_))
        ));
        assert!(matches!(
            Batcher::new(2, 0).windows(&x, &y),
            Err(LagRnnError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_mismatched_lengths_are_rejected() {
        let x = ramp(10);
        let y = ramp(12);
        assert!(matches!(
            Batcher::new(2, 3).windows(&x, &y),
            Err(LagRnnError::LengthMismatch { x_len: 10, y_len: 12 })
        ));
    }

    #[test]
    fn test_too_short_sequence_is_rejected() {
        let x = ramp(10);
        let y = ramp(10);
        // 10 / 4 = 2 columns per row, below the 3-step window.
        assert!(matches!(
            Batcher::new(4, 3).windows(&x, &y),
            Err(LagRnnError::SequenceTooShort { .. })
        ));
    }
}
