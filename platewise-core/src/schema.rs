//! Required dataset columns and the structural check guarding ingestion.
//!
//! Every consumer of the restaurant table relies on the same fixed schema, so
//! the check runs once, before any row is decoded.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// A column the restaurant dataset must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// `Restaurant Name`.
    Name,
    /// `Cuisines`.
    Cuisines,
    /// `Address`.
    Address,
    /// `City`.
    City,
    /// `Average Cost for two`.
    AverageCostForTwo,
    /// `Currency`.
    Currency,
    /// `Has Table booking`.
    HasTableBooking,
    /// `Has Online delivery`.
    HasOnlineDelivery,
    /// `Aggregate rating`.
    AggregateRating,
}

impl Column {
    /// Every required column, in dataset order.
    pub const REQUIRED: [Self; 9] = [
        Self::Name,
        Self::Cuisines,
        Self::Address,
        Self::City,
        Self::AverageCostForTwo,
        Self::Currency,
        Self::HasTableBooking,
        Self::HasOnlineDelivery,
        Self::AggregateRating,
    ];

    /// Header text used by the dataset.
    ///
    /// # Examples
    /// ```
    /// use platewise_core::Column;
    ///
    /// assert_eq!(Column::AverageCostForTwo.header(), "Average Cost for two");
    /// ```
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Name => "Restaurant Name",
            Self::Cuisines => "Cuisines",
            Self::Address => "Address",
            Self::City => "City",
            Self::AverageCostForTwo => "Average Cost for two",
            Self::Currency => "Currency",
            Self::HasTableBooking => "Has Table booking",
            Self::HasOnlineDelivery => "Has Online delivery",
            Self::AggregateRating => "Aggregate rating",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Raised when a table lacks one or more required columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dataset is missing required columns: {}", format_columns(.missing))]
pub struct MissingColumnsError {
    /// Absent columns, in dataset order.
    pub missing: Vec<Column>,
}

fn format_columns(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|column| column.header())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Confirm that `headers` contains every [`Column::REQUIRED`] entry.
///
/// Header matching is exact; surrounding whitespace is ignored.
///
/// # Errors
/// Returns [`MissingColumnsError`] listing every absent column.
///
/// # Examples
/// ```
/// use platewise_core::{Column, check_columns};
///
/// let err = check_columns(["Restaurant Name", "Cuisines"]).unwrap_err();
/// assert!(err.missing.contains(&Column::City));
/// ```
pub fn check_columns<'a, I>(headers: I) -> Result<(), MissingColumnsError>
where
    I: IntoIterator<Item = &'a str>,
{
    let present: HashSet<&str> = headers.into_iter().map(str::trim).collect();
    let missing: Vec<Column> = Column::REQUIRED
        .into_iter()
        .filter(|column| !present.contains(column.header()))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingColumnsError { missing })
    }
}
