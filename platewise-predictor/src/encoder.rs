//! Target encoding for categorical features.
//!
//! Each category maps to the mean target observed for it during fitting.
//! Categories never seen at fit time fall back to the global target mean, so
//! prediction on novel values stays finite instead of failing.

use std::collections::HashMap;

use log::debug;

use crate::{EncoderSmoothing, PredictorError};

/// Fitted mapping from category to target mean.
///
/// # Examples
/// ```
/// use platewise_predictor::TargetEncoder;
///
/// let encoder = TargetEncoder::fit(
///     [("cafe", 4.0), ("cafe", 3.0), ("bar", 2.0)],
///     None,
/// )
/// .unwrap();
/// assert_eq!(encoder.encode("cafe"), 3.5);
/// assert_eq!(encoder.encode("diner"), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TargetEncoder {
    mapping: HashMap<String, f64>,
    prior: f64,
}

#[derive(Default)]
struct Tally {
    sum: f64,
    count: f64,
}

impl TargetEncoder {
    /// Learn category means from `(category, target)` pairs.
    ///
    /// With `smoothing`, each category's mean is blended with the global mean
    /// according to how often it was seen.
    ///
    /// # Errors
    /// Returns [`PredictorError::InsufficientData`] when no pairs are given.
    #[expect(
        clippy::float_arithmetic,
        reason = "category means are running sums divided by counts"
    )]
    pub fn fit<'a, I>(
        pairs: I,
        smoothing: Option<EncoderSmoothing>,
    ) -> Result<Self, PredictorError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut tallies: HashMap<String, Tally> = HashMap::new();
        let mut overall = Tally::default();
        for (category, target) in pairs {
            let tally = tallies.entry(category.to_owned()).or_default();
            tally.sum += target;
            tally.count += 1.0;
            overall.sum += target;
            overall.count += 1.0;
        }
        if tallies.is_empty() {
            return Err(PredictorError::InsufficientData { rows: 0 });
        }

        let prior = overall.sum / overall.count;
        let mapping: HashMap<String, f64> = tallies
            .into_iter()
            .map(|(category, tally)| {
                let mean = tally.sum / tally.count;
                let value = smoothing.map_or(mean, |blend| {
                    let weight = sigmoid_weight(tally.count, blend);
                    prior * (1.0 - weight) + mean * weight
                });
                (category, value)
            })
            .collect();

        debug!(
            "target encoder fitted {} categories around prior {prior:.3}",
            mapping.len()
        );
        Ok(Self { mapping, prior })
    }

    /// Encoded value for `category`, or the global mean when unseen.
    #[must_use]
    pub fn encode(&self, category: &str) -> f64 {
        self.lookup(category).unwrap_or(self.prior)
    }

    /// Encoded value for a category seen during fitting.
    #[must_use]
    pub fn lookup(&self, category: &str) -> Option<f64> {
        self.mapping.get(category).copied()
    }

    /// Global target mean used as the fallback.
    #[must_use]
    pub const fn prior(&self) -> f64 {
        self.prior
    }

    /// Number of categories learnt.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Whether no categories were learnt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "sigmoid over the category count"
)]
fn sigmoid_weight(count: f64, blend: EncoderSmoothing) -> f64 {
    1.0 / (1.0 + (-(count - blend.min_samples_leaf) / blend.smoothing).exp())
}
