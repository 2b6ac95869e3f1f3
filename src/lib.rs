//! Dino Runner - A single-screen endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `game`: Session facade wiring the simulation to its collaborators
//! - `persistence`: High score storage (file on native, LocalStorage on web)
//! - `platform`: Input mapping shared by every driver
//! - `render`: Frame drawing (ASCII for native, 2D canvas on web)
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod persistence;
pub mod platform;
pub mod render;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod ui;

pub use game::Game;
#[cfg(not(target_arch = "wasm32"))]
pub use persistence::FileStore;
pub use persistence::{HighScoreStore, MemoryStore};
pub use tuning::Tuning;

/// Playfield geometry constants
pub mod consts {
    /// Field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 300.0;
    /// Height of the ground strip along the bottom edge
    pub const GROUND_HEIGHT: f32 = 20.0;
    /// Ground line: the y coordinate every grounded entity stands on
    pub const GROUND_Y: f32 = FIELD_HEIGHT - GROUND_HEIGHT;

    /// Player defaults
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Ticks each run-cycle frame is held
    pub const RUN_FRAME_TICKS: u32 = 10;

    /// Clouds enter this far (at most) past the right edge
    pub const CLOUD_ENTRY_SPREAD: f32 = 200.0;
    /// Vertical band clouds drift in
    pub const CLOUD_MIN_Y: f32 = 50.0;
    pub const CLOUD_Y_SPREAD: f32 = 100.0;
}
