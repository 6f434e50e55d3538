//! The trainable rating predictor.
//!
//! A [`RatingPredictor`] starts untrained. [`RatingPredictor::fit`] runs the
//! whole pipeline on a restaurant table:
//!
//! 1. engineer features for every record;
//! 2. split rows 80/20 with the configured seed;
//! 3. fit the cuisine and city target encoders on the training rows only;
//! 4. fit the scaler on the training rows' numeric block;
//! 5. grow the forest on the encoded, scaled training rows;
//! 6. score the held-out rows with R squared.
//!
//! Predictions replay steps 1, 3 and 4 with the fitted state before querying
//! the forest. A failed `fit` leaves any previous trained state untouched.
//!
//! The scaler, forest and metric come from `aprender`, which works in single
//! precision; rows and targets are narrowed to `f32` on the way in and
//! estimates widened back to `f64` on the way out.

use aprender::AprenderError;
use aprender::metrics::r_squared;
use aprender::preprocessing::StandardScaler;
use aprender::primitives::{Matrix, Vector};
use aprender::traits::Transformer;
use aprender::tree::RandomForestRegressor;
use log::{debug, info, warn};
use platewise_core::{Column, Restaurant, RestaurantProfile};

use crate::features::{MODEL_FEATURES, NUMERIC_FEATURES};
use crate::{FeatureRow, PredictorConfig, PredictorError, TargetEncoder, train_validation_split};

/// Fitted encoders and scaler turning feature rows into model input.
#[derive(Debug, Clone)]
struct Preprocessor {
    cuisine_encoder: TargetEncoder,
    city_encoder: TargetEncoder,
    scaler: StandardScaler,
}

#[derive(Debug, Clone)]
struct TrainedModel {
    preprocessor: Preprocessor,
    forest: RandomForestRegressor,
    validation_score: f64,
    training_rows: usize,
}

#[derive(Debug, Clone, Default)]
enum PredictorState {
    #[default]
    Untrained,
    Trained(Box<TrainedModel>),
}

/// Predicts aggregate ratings from restaurant attributes.
///
/// # Examples
/// ```
/// use platewise_core::test_support::synthetic_restaurants;
/// use platewise_predictor::{PredictorConfig, PredictorError, RatingPredictor};
///
/// let restaurants = synthetic_restaurants(60);
/// let mut predictor = RatingPredictor::with_config(PredictorConfig::default().with_n_estimators(10));
/// assert_eq!(
///     predictor.predict_one(&restaurants[0].profile()),
///     Err(PredictorError::NotTrained)
/// );
///
/// predictor.fit(&restaurants).unwrap();
/// let estimate = predictor.predict_one(&restaurants[0].profile()).unwrap();
/// assert!(estimate.is_finite());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RatingPredictor {
    config: PredictorConfig,
    state: PredictorState,
}

impl RatingPredictor {
    /// Untrained predictor with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Untrained predictor with `config`.
    ///
    /// The configuration is validated when [`RatingPredictor::fit`] runs.
    #[must_use]
    pub const fn with_config(config: PredictorConfig) -> Self {
        Self {
            config,
            state: PredictorState::Untrained,
        }
    }

    /// Settings in use.
    #[must_use]
    pub const fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Whether a `fit` has succeeded.
    #[must_use]
    pub const fn is_trained(&self) -> bool {
        matches!(self.state, PredictorState::Trained(_))
    }

    /// Held-out R squared from the most recent successful `fit`.
    #[must_use]
    pub fn validation_score(&self) -> Option<f64> {
        self.trained().map(|model| model.validation_score)
    }

    /// Rows used to train the current model.
    #[must_use]
    pub fn training_rows(&self) -> Option<usize> {
        self.trained().map(|model| model.training_rows)
    }

    /// Train on `restaurants` and return the validation R squared.
    ///
    /// Every record must carry an aggregate rating.
    ///
    /// # Errors
    /// - [`PredictorError::InvalidConfig`] for an out-of-range setting.
    /// - [`PredictorError::MissingTarget`] for an unrated record.
    /// - [`PredictorError::UnrecognizedValue`] for a booking or delivery flag
    ///   other than `"Yes"` or `"No"`.
    /// - [`PredictorError::NonFiniteValue`] for a NaN or infinite cost or
    ///   rating.
    /// - [`PredictorError::InsufficientData`] when the table is too small to
    ///   hold out a validation row.
    /// - [`PredictorError::Model`] when the scaler or forest rejects the
    ///   assembled training matrix.
    pub fn fit(&mut self, restaurants: &[Restaurant]) -> Result<f64, PredictorError> {
        let config = self.config.validate()?;
        let (rows, targets) = engineer_training_rows(restaurants)?;
        let split = train_validation_split(rows.len(), config.validation_fraction, config.seed)?;
        debug!(
            "fitting on {} rows, validating on {}",
            split.train.len(),
            split.validation.len()
        );

        let train_rows = pick(&rows, &split.train);
        let train_targets = pick(&targets, &split.train);
        let smoothing = config.encoder_smoothing;
        let cuisine_encoder = TargetEncoder::fit(
            train_rows
                .iter()
                .zip(&train_targets)
                .map(|(row, &target)| (row.primary_cuisine.as_str(), target)),
            smoothing,
        )?;
        let city_encoder = TargetEncoder::fit(
            train_rows
                .iter()
                .zip(&train_targets)
                .map(|(row, &target)| (row.city.as_str(), target)),
            smoothing,
        )?;
        let mut scaler = StandardScaler::new();
        scaler.fit(&numeric_block(&train_rows)?)?;
        let preprocessor = Preprocessor {
            cuisine_encoder,
            city_encoder,
            scaler,
        };

        let x_train = preprocessor.assemble(&train_rows)?;
        let mut forest = forest_for(&config);
        forest.fit(&x_train, &target_vector(&train_targets))?;

        let validation_rows = pick(&rows, &split.validation);
        let validation_targets = pick(&targets, &split.validation);
        let estimates = forest.predict(&preprocessor.assemble(&validation_rows)?);
        let validation_score =
            f64::from(r_squared(&estimates, &target_vector(&validation_targets)));

        info!(
            "rating predictor trained on {} restaurants; validation R^2 {validation_score:.4}",
            split.train.len()
        );
        self.state = PredictorState::Trained(Box::new(TrainedModel {
            preprocessor,
            forest,
            validation_score,
            training_rows: split.train.len(),
        }));
        Ok(validation_score)
    }

    /// Estimate the rating of each profile, in input order.
    ///
    /// Estimates are not clamped to the rating scale. Cuisines or cities not
    /// seen during training are encoded with the global mean rating.
    ///
    /// # Errors
    /// Returns [`PredictorError::NotTrained`] before a successful `fit`, and
    /// the feature errors described on [`RatingPredictor::fit`] for invalid
    /// profiles.
    pub fn predict(&self, profiles: &[RestaurantProfile]) -> Result<Vec<f64>, PredictorError> {
        let model = self.trained().ok_or(PredictorError::NotTrained)?;
        let rows = profiles
            .iter()
            .enumerate()
            .map(|(row, profile)| FeatureRow::from_profile(profile, row))
            .collect::<Result<Vec<_>, _>>()?;

        let unseen = rows
            .iter()
            .filter(|row| !model.preprocessor.has_seen(row))
            .count();
        if unseen > 0 {
            warn!(
                "{unseen} of {} profiles use a cuisine or city unseen during training; \
                 encoding them with the mean rating",
                rows.len()
            );
        }

        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let estimates = model.forest.predict(&model.preprocessor.assemble(&rows)?);
        Ok(estimates.as_slice().iter().copied().map(f64::from).collect())
    }

    /// Estimate the rating of a single profile.
    ///
    /// # Errors
    /// As for [`RatingPredictor::predict`].
    pub fn predict_one(&self, profile: &RestaurantProfile) -> Result<f64, PredictorError> {
        self.predict(std::slice::from_ref(profile))?
            .into_iter()
            .next()
            .ok_or(PredictorError::InsufficientData { rows: 0 })
    }

    fn trained(&self) -> Option<&TrainedModel> {
        match &self.state {
            PredictorState::Trained(model) => Some(model),
            PredictorState::Untrained => None,
        }
    }
}

impl Preprocessor {
    fn has_seen(&self, row: &FeatureRow) -> bool {
        self.cuisine_encoder.lookup(&row.primary_cuisine).is_some()
            && self.city_encoder.lookup(&row.city).is_some()
    }

    /// Encode, scale and lay out rows in model column order.
    fn assemble(&self, rows: &[FeatureRow]) -> Result<Matrix<f32>, PredictorError> {
        let scaled = self.scaler.transform(&numeric_block(rows)?)?;
        let mut values = Vec::with_capacity(rows.len().saturating_mul(MODEL_FEATURES));
        for (index, row) in rows.iter().enumerate() {
            values.extend((0..NUMERIC_FEATURES).map(|column| scaled.get(index, column)));
            values.push(narrow(self.cuisine_encoder.encode(&row.primary_cuisine)));
            values.push(narrow(self.city_encoder.encode(&row.city)));
        }
        Ok(Matrix::from_vec(rows.len(), MODEL_FEATURES, values).map_err(AprenderError::from)?)
    }
}

fn engineer_training_rows(
    restaurants: &[Restaurant],
) -> Result<(Vec<FeatureRow>, Vec<f64>), PredictorError> {
    restaurants
        .iter()
        .enumerate()
        .map(|(row, restaurant)| -> Result<(FeatureRow, f64), PredictorError> {
            let features = FeatureRow::from_restaurant(restaurant, row)?;
            let target = training_target(restaurant, row)?;
            Ok((features, target))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|pairs| pairs.into_iter().unzip())
}

fn training_target(restaurant: &Restaurant, row: usize) -> Result<f64, PredictorError> {
    let rating = restaurant
        .aggregate_rating
        .ok_or_else(|| PredictorError::MissingTarget {
            row,
            name: restaurant.name.clone(),
        })?;
    if rating.is_finite() {
        Ok(rating)
    } else {
        Err(PredictorError::NonFiniteValue {
            field: Column::AggregateRating.header(),
            value: rating,
            row,
        })
    }
}

fn numeric_block(rows: &[FeatureRow]) -> Result<Matrix<f32>, PredictorError> {
    let values = rows
        .iter()
        .flat_map(|row| row.numeric.iter().copied().map(narrow))
        .collect();
    Ok(Matrix::from_vec(rows.len(), NUMERIC_FEATURES, values).map_err(AprenderError::from)?)
}

fn target_vector(targets: &[f64]) -> Vector<f32> {
    let narrowed: Vec<f32> = targets.iter().copied().map(narrow).collect();
    Vector::from_slice(&narrowed)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the forest and scaler work in single precision"
)]
const fn narrow(value: f64) -> f32 {
    value as f32
}

fn pick<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    indices
        .iter()
        .filter_map(|&index| items.get(index).cloned())
        .collect()
}

fn forest_for(config: &PredictorConfig) -> RandomForestRegressor {
    let mut forest =
        RandomForestRegressor::new(config.n_estimators).with_random_state(config.seed);
    if let Some(depth) = config.max_depth {
        forest = forest.with_max_depth(depth);
    }
    forest
}
