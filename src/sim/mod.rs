//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (obstacles oldest first)
//! - No rendering, storage or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod physics;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::wants_jump;
pub use collision::{Aabb, first_hit};
pub use snapshot::{Frame, HudSnapshot, PlayerPose};
pub use state::{
    Cloud, GameEvent, GamePhase, GameState, Ground, Obstacle, ObstacleProfile, Player,
};
pub use tick::{end_game, jump, restart, tick};
