//! Browser LocalStorage store (WASM only)

use super::{HighScoreRecord, HighScoreStore, StoreError, parse_high_score};

#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore {
    /// Last saved value, served when storage is blocked
    cached: Option<f64>,
}

impl LocalStorageStore {
    /// LocalStorage key; older builds stored a bare number here
    const STORAGE_KEY: &'static str = "dinoHighScore";

    pub fn new() -> Self {
        Self::default()
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("LocalStorage".to_string()))
    }

    pub fn try_load(&self) -> Result<Option<f64>, StoreError> {
        let storage = Self::storage()?;
        let raw = storage
            .get_item(Self::STORAGE_KEY)
            .map_err(|_| StoreError::Unavailable("LocalStorage read blocked".to_string()))?;
        Ok(raw.as_deref().and_then(parse_high_score))
    }

    pub fn try_save(&self, score: f64) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        let json = HighScoreRecord { high_score: score }.to_json()?;
        storage
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|_| StoreError::Unavailable("LocalStorage write blocked".to_string()))
    }
}

impl HighScoreStore for LocalStorageStore {
    fn load_high_score(&self) -> f64 {
        match self.try_load() {
            Ok(Some(score)) => {
                log::info!("Loaded high score {}", score.floor());
                score
            }
            Ok(None) => {
                log::info!("No high score found, starting fresh");
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
