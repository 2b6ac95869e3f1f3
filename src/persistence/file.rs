//! JSON file store for native builds
//!
//! Writes go to a sibling `.tmp` file first and are renamed over the real
//! one, so a crash mid-write never leaves a truncated record behind.

use std::fs;
use std::path::PathBuf;

use super::{HighScoreRecord, HighScoreStore, StoreError, parse_high_score};

/// Default file name, relative to the working directory
pub const DEFAULT_PATH: &str = "dino_highscore.json";

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    /// Last value written or read, served when the file becomes unreadable
    cached: Option<f64>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: None,
        }
    }

    /// Read the record; `Ok(None)` when the file does not exist
    pub fn try_load(&self) -> Result<Option<f64>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(parse_high_score(&contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                path: self.path.display().to_string(),
                source,
            }),
        }
    }

    /// Write the record atomically (tmp file + rename)
    pub fn try_save(&self, score: f64) -> Result<(), StoreError> {
        let json = HighScoreRecord { high_score: score }.to_json()?;
        let tmp = self.path.with_extension("json.tmp");
        let io_err = |source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

impl HighScoreStore for FileStore {
    fn load_high_score(&self) -> f64 {
        match self.try_load() {
            Ok(Some(score)) => {
                log::info!("Loaded high score {} from {}", score.floor(), self.path.display());
                score
            }
            Ok(None) => {
                log::info!("No high score at {}, starting fresh", self.path.display());
                self.cached.unwrap_or(0.0)
            }
            Err(e) => {
                log::warn!("{}. High score kept in memory only.", e);
                self.cached.unwrap_or(0.0)
            }
        }
    }

    fn save_high_score(&mut self, score: f64) {
        self.cached = Some(score);
        match self.try_save(score) {
            Ok(()) => log::info!("High score {} saved", score.floor()),
            Err(e) => log::warn!("{}. High score kept in memory only.", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dino-runner-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir.join("highscore.json")
    }

    #[test]
    fn test_missing_file_reads_zero() {
        let store = FileStore::new(scratch_path("missing"));
        assert_eq!(store.load_high_score(), 0.0);
    }

    #[test]
    fn test_save_survives_new_store() {
        let path = scratch_path("durable");
        let mut store = FileStore::new(&path);
        store.save_high_score(256.75);

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load_high_score(), 256.75);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_malformed_file_reads_zero() {
        let path = scratch_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not valid").unwrap();
        let store = FileStore::new(&path);
        assert_eq!(store.load_high_score(), 0.0);
    }

    #[test]
    fn test_legacy_bare_number_accepted() {
        let path = scratch_path("legacy");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "1234.5").unwrap();
        let store = FileStore::new(&path);
        assert_eq!(store.load_high_score(), 1234.5);
    }

    #[test]
    fn test_unwritable_path_keeps_memory_copy() {
        // A directory where the file should be makes the rename fail
        let path = scratch_path("blocked");
        fs::create_dir_all(&path).unwrap();
        let mut store = FileStore::new(&path);
        store.save_high_score(99.0);
        assert_eq!(store.load_high_score(), 99.0);
    }
}
