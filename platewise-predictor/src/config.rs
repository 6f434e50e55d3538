//! Hyper-parameters for the rating predictor.
#![forbid(unsafe_code)]

use crate::PredictorError;

/// Sigmoid blending of category means towards the global mean.
///
/// A category seen `count` times receives weight
/// `1 / (1 + exp(-(count - min_samples_leaf) / smoothing))` on its own mean and
/// the remainder on the prior, so rare categories lean on the global average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncoderSmoothing {
    /// Count at which a category's own mean and the prior weigh equally.
    pub min_samples_leaf: f64,
    /// Steepness of the transition; larger values blend more gradually.
    pub smoothing: f64,
}

impl Default for EncoderSmoothing {
    fn default() -> Self {
        Self {
            min_samples_leaf: 20.0,
            smoothing: 10.0,
        }
    }
}

/// Settings for every stage of the prediction pipeline.
///
/// The defaults train a 100-tree forest with seed `42` on an 80/20 split and
/// encode categories by their plain conditional mean. Tree `i` of the forest
/// bootstraps with seed `seed + i`.
///
/// # Examples
/// ```
/// use platewise_predictor::PredictorConfig;
///
/// let config = PredictorConfig::default()
///     .with_n_estimators(25)
///     .with_max_depth(8);
/// assert_eq!(config.n_estimators, 25);
/// assert_eq!(config.seed, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictorConfig {
    /// Number of trees in the forest.
    pub n_estimators: usize,
    /// Seed driving the split and every bootstrap sample.
    pub seed: u64,
    /// Share of records held out for validation, in `(0, 1)`.
    pub validation_fraction: f64,
    /// Depth limit per tree; `None` grows trees until leaves are pure.
    pub max_depth: Option<usize>,
    /// Optional smoothing for both target encoders.
    pub encoder_smoothing: Option<EncoderSmoothing>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            seed: 42,
            validation_fraction: 0.2,
            max_depth: None,
            encoder_smoothing: None,
        }
    }
}

impl PredictorConfig {
    /// Set the number of trees.
    #[must_use]
    pub const fn with_n_estimators(mut self, n_estimators: usize) -> Self {
        self.n_estimators = n_estimators;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the validation share.
    #[must_use]
    pub const fn with_validation_fraction(mut self, fraction: f64) -> Self {
        self.validation_fraction = fraction;
        self
    }

    /// Limit the depth of every tree.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Enable smoothed target encoding.
    #[must_use]
    pub const fn with_encoder_smoothing(mut self, smoothing: EncoderSmoothing) -> Self {
        self.encoder_smoothing = Some(smoothing);
        self
    }

    /// Check every setting and return a copy.
    ///
    /// # Errors
    /// Returns [`PredictorError::InvalidConfig`] naming the first rejected
    /// setting.
    pub fn validate(self) -> Result<Self, PredictorError> {
        if self.n_estimators == 0 {
            return Err(invalid("n_estimators must be at least 1"));
        }
        if !(self.validation_fraction > 0.0 && self.validation_fraction < 1.0) {
            return Err(invalid("validation_fraction must lie strictly between 0 and 1"));
        }
        if self.max_depth == Some(0) {
            return Err(invalid("max_depth must be at least 1"));
        }
        // Tree `i` is seeded with `seed + i`.
        let trees = u64::try_from(self.n_estimators).unwrap_or(u64::MAX);
        if self.seed.checked_add(trees).is_none() {
            return Err(invalid("seed leaves no room for one seed per tree"));
        }
        if let Some(smoothing) = self.encoder_smoothing {
            let usable = smoothing.smoothing.is_finite()
                && smoothing.smoothing > 0.0
                && smoothing.min_samples_leaf.is_finite();
            if !usable {
                return Err(invalid("encoder smoothing must be positive and finite"));
            }
        }
        Ok(self)
    }
}

const fn invalid(reason: &'static str) -> PredictorError {
    PredictorError::InvalidConfig { reason }
}
