//! Test helpers for writing CSV datasets into temporary directories.

use camino::Utf8PathBuf;
use platewise_core::Restaurant;
use tempfile::TempDir;

const HEADER: &str = "Restaurant Name,Cuisines,Address,City,Average Cost for two,Currency,\
Has Table booking,Has Online delivery,Aggregate rating";

/// A dataset file that lives as long as the fixture.
pub(super) struct DatasetFile {
    _dir: TempDir,
    root: Utf8PathBuf,
    path: Utf8PathBuf,
}

impl DatasetFile {
    pub(super) fn empty() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let path = root.join("dataset.csv");
        Self {
            _dir: dir,
            root,
            path,
        }
    }

    pub(super) fn with_restaurants(restaurants: &[Restaurant]) -> Self {
        let dataset = Self::empty();
        dataset.write(restaurants);
        dataset
    }

    pub(super) fn write(&self, restaurants: &[Restaurant]) {
        std::fs::write(&self.path, render_csv(restaurants)).expect("write dataset");
    }

    pub(super) fn root(&self) -> &Utf8PathBuf {
        &self.root
    }

    pub(super) fn path(&self) -> &Utf8PathBuf {
        &self.path
    }
}

fn render_csv(restaurants: &[Restaurant]) -> String {
    let mut text = String::from(HEADER);
    text.push('\n');
    for restaurant in restaurants {
        let rating = restaurant
            .aggregate_rating
            .map(|rating| rating.to_string())
            .unwrap_or_default();
        let cuisines = if restaurant.cuisines == platewise_core::MISSING_CUISINES {
            ""
        } else {
            restaurant.cuisines.as_str()
        };
        text.push_str(&format!(
            "\"{}\",\"{}\",\"{}\",{},{},{},{},{},{}\n",
            restaurant.name,
            cuisines,
            restaurant.address,
            restaurant.city,
            restaurant.average_cost_for_two,
            restaurant.currency,
            restaurant.has_table_booking,
            restaurant.has_online_delivery,
            rating,
        ));
    }
    text
}
