use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "grid-snake";
const SCORE_FILE_NAME: &str = "best_score.json";

/// Errors raised while reading or writing the best-score file.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not a valid score file: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    best_score: u32,
}

/// Best score persisted between runs as a small JSON file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Uses an explicit file location.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses the platform data directory, falling back to the working directory.
    #[must_use]
    pub fn default_location() -> Self {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push(APP_DIR_NAME);
        base.push(SCORE_FILE_NAME);
        Self::at(base)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the best score; a missing file means no games were played yet.
    pub fn load(&self) -> Result<u32, ScoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => return Err(self.io_error(source)),
        };

        serde_json::from_str::<ScoreFile>(&raw)
            .map(|file| file.best_score)
            .map_err(|source| ScoreError::Format {
                path: self.path.clone(),
                source,
            })
    }

    /// Writes `score`, creating parent directories when needed.
    pub fn save(&self, score: u32) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let json = serde_json::to_string_pretty(&ScoreFile { best_score: score }).map_err(
            |source| ScoreError::Format {
                path: self.path.clone(),
                source,
            },
        )?;

        fs::write(&self.path, json).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> ScoreError {
        ScoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{ScoreError, ScoreStore};

    #[test]
    fn saved_score_loads_back() {
        let path = unique_test_path("saved");
        let store = ScoreStore::at(&path);

        store.save(42).expect("score save should succeed");
        assert_eq!(store.load().expect("load should succeed"), 42);

        let raw = fs::read_to_string(&path).expect("file should exist");
        assert!(raw.contains("\"best_score\": 42"));
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_file_reads_as_zero() {
        let store = ScoreStore::at(unique_test_path("missing"));
        assert_eq!(store.load().expect("missing file should be Ok(0)"), 0);
    }

    #[test]
    fn malformed_file_is_a_format_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        let error = ScoreStore::at(&path).load().expect_err("malformed file should fail");
        assert!(matches!(error, ScoreError::Format { .. }));

        cleanup_test_path(&path);
    }

    #[test]
    fn default_location_ends_with_score_file() {
        let store = ScoreStore::default_location();
        assert!(store.path().ends_with("grid-snake/best_score.json"));
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
