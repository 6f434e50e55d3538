//! Score restaurants against a diner's preferences.
//!
//! The `Scorer` trait assigns a [`ScoreBreakdown`] to a
//! [`Restaurant`](crate::Restaurant) given the caller's
//! [`Preferences`](crate::Preferences). Ranking code only ever looks at
//! [`ScoreBreakdown::total`]; the individual terms are kept for display and
//! auditing.

use crate::{Preferences, Restaurant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-term contributions to a restaurant's composite score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreBreakdown {
    /// Points earned from matching preferred cuisines.
    pub cuisine: f64,
    /// Points earned (or lost) relative to the rating floor.
    pub rating: f64,
    /// Points earned for affordability.
    pub budget: f64,
}

impl ScoreBreakdown {
    /// Sum of every term.
    ///
    /// # Examples
    /// ```
    /// use platewise_core::ScoreBreakdown;
    ///
    /// let score = ScoreBreakdown { cuisine: 30.0, rating: 4.0, budget: 18.0 };
    /// assert_eq!(score.total(), 52.0);
    /// ```
    #[must_use]
    pub fn total(&self) -> f64 {
        self.cuisine + self.rating + self.budget
    }
}

/// Calculate a composite score for a restaurant.
///
/// Higher totals indicate a better match. Implementations must be
/// deterministic for a given record and preference set so rankings are
/// reproducible, and thread-safe (`Send` + `Sync`) so a scorer can be shared.
///
/// # Examples
///
/// ```rust
/// use platewise_core::{Preferences, Restaurant, ScoreBreakdown, Scorer};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, _restaurant: &Restaurant, _prefs: &Preferences) -> ScoreBreakdown {
///         ScoreBreakdown { cuisine: 1.0, ..ScoreBreakdown::default() }
///     }
/// }
///
/// let prefs = Preferences::new(["thai"], 20.0, 3.0).unwrap();
/// assert_eq!(FlatScorer.score(&Restaurant::default(), &prefs).total(), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return the score breakdown for `restaurant` according to `preferences`.
    fn score(&self, restaurant: &Restaurant, preferences: &Preferences) -> ScoreBreakdown;
}
