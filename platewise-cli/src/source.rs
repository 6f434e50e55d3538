//! Dataset path resolution and validation.

use camino::{Utf8Path, Utf8PathBuf};
use platewise_data::fs::file_is_file;

use crate::{ARG_DATASET, CliError, DEFAULT_DATASET, Session};

/// Fall back to `dataset.csv` in the working directory.
pub(crate) fn resolve_dataset(path: Option<Utf8PathBuf>) -> Utf8PathBuf {
    path.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATASET))
}

/// Check the dataset path before handing it to the loader.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Validate `path` and load it into a fresh session.
pub(crate) fn open_session(path: &Utf8Path) -> Result<Session, CliError> {
    require_existing(path, ARG_DATASET)?;
    Ok(Session::load(path)?)
}
