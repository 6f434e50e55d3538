//! Dataset access for Platewise.
//!
//! Loads the restaurant table from CSV into [`Restaurant`] records. The header
//! row is checked against the required columns before any data row is
//! decoded, so a malformed file fails as a whole with every missing column
//! named. Whitespace around headers and cells is ignored. Cuisines are
//! lowercased on the way in, with blank cells recorded as `"nan"`, and blank
//! ratings become `None`.
//!
//! # Examples
//!
//! ```
//! use platewise_data::read_restaurants;
//!
//! let csv = "\
//! Restaurant Name,Cuisines,Address,City,Average Cost for two,Currency,Has Table booking,Has Online delivery,Aggregate rating
//! Tasty Bites,\"Italian, Pizza\",1 Main St,Manila,40,$,No,Yes,4.0
//! ";
//! let restaurants = read_restaurants(csv.as_bytes()).unwrap();
//! assert_eq!(restaurants[0].cuisines, "italian, pizza");
//! ```

#![forbid(unsafe_code)]

use std::io::Read;

use camino::Utf8Path;
use log::{debug, info};
use platewise_core::{Restaurant, check_columns};

mod error;
pub mod fs;
mod record;

pub use error::DatasetError;

use record::RawRecord;

/// Load every restaurant from the CSV file at `path`.
///
/// # Errors
/// Returns [`DatasetError::Open`] when the file cannot be opened, and the
/// errors of [`read_restaurants`] for its contents.
pub fn load_restaurants(path: &Utf8Path) -> Result<Vec<Restaurant>, DatasetError> {
    let file = fs::open_utf8_file(path).map_err(|source| DatasetError::Open {
        source,
        path: path.to_path_buf(),
    })?;
    let restaurants = read_restaurants(file)?;
    info!("loaded {} restaurants from {path}", restaurants.len());
    Ok(restaurants)
}

/// Decode restaurants from CSV text with a header row.
///
/// # Errors
/// - [`DatasetError::ReadHeaders`] when the header row is unreadable.
/// - [`DatasetError::MissingColumns`] when required headers are absent.
/// - [`DatasetError::Decode`] when a row has an unparsable cost or rating.
pub fn read_restaurants<R: Read>(reader: R) -> Result<Vec<Restaurant>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| DatasetError::ReadHeaders { source })?;
    check_columns(headers.iter())?;
    debug!("dataset header has {} columns", headers.len());

    csv_reader
        .deserialize::<RawRecord>()
        .map(|row| {
            row.map(Restaurant::from).map_err(|source| DatasetError::Decode {
                line: source.position().map_or(0, csv::Position::line),
                source,
            })
        })
        .collect()
}
