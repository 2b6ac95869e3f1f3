//! High score persistence
//!
//! The simulation never touches storage. The game facade loads the best score
//! once at startup and saves it when a run beats it. Every backend degrades
//! instead of failing: unreadable or malformed data reads as 0, and a failed
//! write leaves the score in memory only.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a storage backend can hit internally
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing storage is not reachable at all
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Read or write failed
    #[error("Storage I/O failed for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Record could not be encoded
    #[error("Failed to encode high score: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persistence collaborator for the best score
pub trait HighScoreStore {
    /// Best score on record, 0 when absent or unreadable
    fn load_high_score(&self) -> f64;

    /// Record a new best score. Failures are logged, never raised.
    fn save_high_score(&mut self, score: f64);
}

/// On-disk / LocalStorage record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: f64,
}

impl HighScoreRecord {
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Parse a stored high score.
///
/// Accepts the JSON record or a bare number (legacy format). Anything else,
/// including negative or non-finite values, reads as absent.
pub fn parse_high_score(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let value = match serde_json::from_str::<HighScoreRecord>(raw) {
        Ok(record) => record.high_score,
        Err(_) => raw.parse::<f64>().ok()?,
    };
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// In-memory store: tests, and the fallback when nothing durable exists
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    high_score: Option<f64>,
    /// Number of saves performed
    pub saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_score(score: f64) -> Self {
        Self {
            high_score: Some(score),
            saves: 0,
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&self) -> f64 {
        self.high_score.unwrap_or(0.0)
    }

    fn save_high_score(&mut self, score: f64) {
        self.high_score = Some(score);
        self.saves += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_record() {
        assert_eq!(parse_high_score(r#"{"high_score": 321.5}"#), Some(321.5));
    }

    #[test]
    fn test_parse_bare_number() {
        assert_eq!(parse_high_score(" 87.3\n"), Some(87.3));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_high_score("banana"), None);
        assert_eq!(parse_high_score(""), None);
        assert_eq!(parse_high_score("-4"), None);
        assert_eq!(parse_high_score("NaN"), None);
        assert_eq!(parse_high_score("inf"), None);
        assert_eq!(parse_high_score(r#"{"high_score": -1}"#), None);
    }

    #[test]
    fn test_record_round_trip() {
        let json = HighScoreRecord { high_score: 12.25 }.to_json().unwrap();
        assert_eq!(parse_high_score(&json), Some(12.25));
    }

    #[test]
    fn test_memory_store_defaults_to_zero() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load_high_score(), 0.0);
        store.save_high_score(42.0);
        assert_eq!(store.load_high_score(), 42.0);
        assert_eq!(store.saves, 1);
    }
}
