use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Directory used when neither an explicit path nor the environment names one.
pub const DEFAULT_DATA_DIR: &str = "large";

/// Environment variable that overrides the default data directory.
pub const DATA_DIR_ENV: &str = "DEGREES_DATA_DIR";

const PEOPLE_FILENAME: &str = "people.csv";
const MOVIES_FILENAME: &str = "movies.csv";
const STARS_FILENAME: &str = "stars.csv";

/// Paths to the three CSV sources that make up a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    /// `id,name,birth` rows.
    pub people: PathBuf,
    /// `id,title,year` rows.
    pub movies: PathBuf,
    /// `person_id,movie_id` rows.
    pub stars: PathBuf,
}

impl DatasetPaths {
    /// Paths for the conventional file names inside `directory`. No existence checks.
    pub fn in_directory(directory: &Path) -> Self {
        Self {
            people: directory.join(PEOPLE_FILENAME),
            movies: directory.join(MOVIES_FILENAME),
            stars: directory.join(STARS_FILENAME),
        }
    }

    /// Resolve and verify the sources inside `directory`.
    ///
    /// Fails with [`Error::DatasetNotFound`] when the directory itself is
    /// missing and [`Error::SourceNotFound`] for the first missing file.
    pub fn locate(directory: &Path) -> Result<Self> {
        if !directory.is_dir() {
            return Err(Error::DatasetNotFound {
                path: directory.to_path_buf(),
            });
        }

        let paths = Self::in_directory(directory);
        for path in [&paths.people, &paths.movies, &paths.stars] {
            if !path.is_file() {
                return Err(Error::SourceNotFound { path: path.clone() });
            }
        }
        Ok(paths)
    }
}

/// Resolve the data directory: explicit argument, then `DEGREES_DATA_DIR`, then `large`.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(explicit) = explicit {
        debug!(path = %explicit.display(), "using explicit data directory");
        return explicit.to_path_buf();
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        if !env_path.is_empty() {
            let resolved = PathBuf::from(env_path);
            debug!(path = %resolved.display(), "using data directory from {}", DATA_DIR_ENV);
            return resolved;
        }
    }

    PathBuf::from(DEFAULT_DATA_DIR)
}
