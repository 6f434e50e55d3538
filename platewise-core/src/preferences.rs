//! Caller-supplied recommendation preferences.

use thiserror::Error;

use crate::{MAX_RATING, MIN_RATING};

/// What a diner is looking for: cuisines, a budget for two, and a rating
/// floor.
///
/// Cuisine names are trimmed and lowercased so they match the normalised
/// dataset; blank entries and repeats are dropped, keeping first-seen order.
///
/// # Examples
/// ```
/// use platewise_core::Preferences;
///
/// # fn main() -> Result<(), platewise_core::PreferencesError> {
/// let prefs = Preferences::new(["Italian", " pizza "], 50.0, 3.5)?;
/// assert_eq!(prefs.cuisines(), ["italian", "pizza"]);
/// assert_eq!(prefs.max_budget(), 50.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    cuisines: Vec<String>,
    max_budget: f64,
    min_rating: f64,
}

/// Errors returned by [`Preferences::new`].
#[derive(Debug, Error, PartialEq)]
pub enum PreferencesError {
    /// The budget was zero, negative, or not finite.
    #[error("maximum budget must be a positive finite number, got {0}")]
    InvalidBudget(f64),
    /// The rating floor fell outside the rating scale.
    #[error("minimum rating must be between 0 and 5, got {0}")]
    InvalidMinRating(f64),
}

impl Preferences {
    /// Validate and construct a preference set.
    ///
    /// # Errors
    /// Returns [`PreferencesError::InvalidBudget`] when `max_budget` is not a
    /// positive finite number and [`PreferencesError::InvalidMinRating`] when
    /// `min_rating` lies outside `0.0..=5.0`.
    pub fn new<I, S>(cuisines: I, max_budget: f64, min_rating: f64) -> Result<Self, PreferencesError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !max_budget.is_finite() || max_budget <= 0.0 {
            return Err(PreferencesError::InvalidBudget(max_budget));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&min_rating) {
            return Err(PreferencesError::InvalidMinRating(min_rating));
        }
        let mut unique: Vec<String> = Vec::new();
        for cuisine in cuisines {
            let normalised = cuisine.as_ref().trim().to_lowercase();
            if !normalised.is_empty() && !unique.contains(&normalised) {
                unique.push(normalised);
            }
        }
        Ok(Self {
            cuisines: unique,
            max_budget,
            min_rating,
        })
    }

    /// Preferred cuisines, lowercase.
    #[must_use]
    pub fn cuisines(&self) -> &[String] {
        &self.cuisines
    }

    /// Maximum budget for two diners.
    #[must_use]
    pub const fn max_budget(&self) -> f64 {
        self.max_budget
    }

    /// Minimum acceptable aggregate rating.
    #[must_use]
    pub const fn min_rating(&self) -> f64 {
        self.min_rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_unusable_budget(#[case] budget: f64) {
        let result = Preferences::new(["italian"], budget, 3.0);
        assert!(matches!(result, Err(PreferencesError::InvalidBudget(_))));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(5.1)]
    #[case(f64::NAN)]
    fn rejects_out_of_scale_rating(#[case] rating: f64) {
        let result = Preferences::new(["italian"], 50.0, rating);
        assert!(matches!(result, Err(PreferencesError::InvalidMinRating(_))));
    }

    #[rstest]
    #[case(0.0)]
    #[case(5.0)]
    fn accepts_boundary_ratings(#[case] rating: f64) {
        assert!(Preferences::new(["cafe"], 10.0, rating).is_ok());
    }

    #[rstest]
    fn drops_blank_cuisines() {
        let prefs = Preferences::new(["", "  ", "Chinese"], 10.0, 0.0).expect("valid preferences");
        assert_eq!(prefs.cuisines(), ["chinese"]);
    }

    #[rstest]
    fn collapses_repeated_cuisines() {
        let prefs =
            Preferences::new(["Italian", "italian ", "Pizza"], 10.0, 0.0).expect("valid preferences");
        assert_eq!(prefs.cuisines(), ["italian", "pizza"]);
    }

    #[rstest]
    fn accepts_empty_cuisine_list() {
        let prefs = Preferences::new(Vec::<String>::new(), 10.0, 0.0).expect("valid preferences");
        assert!(prefs.cuisines().is_empty());
    }
}
