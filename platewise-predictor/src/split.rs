//! Seeded train/validation partitioning.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::PredictorError;

/// Row indices of the two partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Rows used to fit encoders, scaler and model.
    pub train: Vec<usize>,
    /// Held-out rows used only for scoring.
    pub validation: Vec<usize>,
}

/// Shuffle `0..n_rows` with `seed` and hold out `ceil(n_rows * fraction)` rows.
///
/// Identical arguments always produce identical partitions.
///
/// # Errors
/// Returns [`PredictorError::InvalidConfig`] for a fraction outside `(0, 1)`
/// and [`PredictorError::InsufficientData`] when either partition would be
/// empty.
///
/// # Examples
/// ```
/// use platewise_predictor::train_validation_split;
///
/// let split = train_validation_split(10, 0.2, 42).unwrap();
/// assert_eq!(split.train.len(), 8);
/// assert_eq!(split.validation.len(), 2);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the held-out count is the ceiling of a fraction of the row count"
)]
pub fn train_validation_split(
    n_rows: usize,
    fraction: f64,
    seed: u64,
) -> Result<Split, PredictorError> {
    if !(fraction > 0.0 && fraction < 1.0) {
        return Err(PredictorError::InvalidConfig {
            reason: "validation_fraction must lie strictly between 0 and 1",
        });
    }
    let n_validation = (n_rows as f64 * fraction).ceil() as usize;
    if n_validation == 0 || n_validation >= n_rows {
        return Err(PredictorError::InsufficientData { rows: n_rows });
    }

    let mut indices: Vec<usize> = (0..n_rows).collect();
    indices.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    let train = indices.split_off(n_validation);

    Ok(Split {
        train,
        validation: indices,
    })
}
