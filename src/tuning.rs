//! Data-driven game balance
//!
//! Every number that shapes how the run feels lives here, so a JSON file can
//! retune the game without a rebuild. Missing fields fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    /// File could not be read
    #[error("Failed to read tuning file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// JSON parsing failed
    #[error("Parse error in tuning file '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    /// Values parsed but make no sense together
    #[error("Invalid tuning: {0}")]
    Invalid(String),
}

/// Balance values for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Downward acceleration added to the player's velocity every tick
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_impulse: f32,

    // === Obstacles ===
    /// Obstacle leftward speed per tick at game speed 1.0
    pub obstacle_speed: f32,
    /// Per-tick spawn chance at game speed 1.0
    pub spawn_probability: f32,
    /// No spawns until the frame counter exceeds this
    pub warmup_frames: u64,
    /// Minimum gap between spawns at session start
    pub initial_min_interval: u64,
    /// The minimum gap never drops below this
    pub min_interval_floor: u64,
    /// Gap reduction applied at each speed step
    pub interval_step: u64,
    /// Base obstacle height range (min, max)
    pub obstacle_height: (f32, f32),
    /// Base obstacle width range (min, max)
    pub obstacle_width: (f32, f32),
    /// Chance that a spawn uses the tall-thin profile
    pub tall_chance: f32,
    /// Height multiplier for tall-thin obstacles
    pub tall_height_scale: f32,
    /// Width multiplier for tall-thin obstacles
    pub tall_width_scale: f32,

    // === Pacing ===
    /// Score gained per tick at game speed 1.0
    pub score_increment: f64,
    /// Game speed at session start
    pub initial_speed: f32,
    /// Speed added every ramp period
    pub speed_step: f32,
    /// Frames between speed steps
    pub ramp_period: u64,

    // === Backdrop ===
    /// Clouds present when the process starts
    pub initial_clouds: usize,
    /// Cloud count cap
    pub max_clouds: usize,
    /// Per-tick chance of a new cloud at game speed 1.0
    pub cloud_spawn_probability: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_impulse: -15.0,

            obstacle_speed: 6.0,
            spawn_probability: 0.02,
            warmup_frames: 60,
            initial_min_interval: 50,
            min_interval_floor: 30,
            interval_step: 2,
            obstacle_height: (20.0, 50.0),
            obstacle_width: (20.0, 30.0),
            tall_chance: 0.3,
            tall_height_scale: 1.5,
            tall_width_scale: 0.7,

            score_increment: 0.1,
            initial_speed: 1.0,
            speed_step: 0.1,
            ramp_period: 500,

            initial_clouds: 3,
            max_clouds: 5,
            cloud_spawn_probability: 0.003,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON text
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(|source| TuningError::Parse {
            path: "<inline>".to_string(),
            source,
        })?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| TuningError::Read {
            path: display.clone(),
            source,
        })?;
        let tuning: Tuning = serde_json::from_str(&contents)
            .map_err(|source| TuningError::Parse {
                path: display,
                source,
            })?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("{}. Using default tuning.", e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let reals = [
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("obstacle_speed", self.obstacle_speed),
            ("spawn_probability", self.spawn_probability),
            ("obstacle_height.0", self.obstacle_height.0),
            ("obstacle_height.1", self.obstacle_height.1),
            ("obstacle_width.0", self.obstacle_width.0),
            ("obstacle_width.1", self.obstacle_width.1),
            ("tall_chance", self.tall_chance),
            ("tall_height_scale", self.tall_height_scale),
            ("tall_width_scale", self.tall_width_scale),
            ("initial_speed", self.initial_speed),
            ("speed_step", self.speed_step),
            ("cloud_spawn_probability", self.cloud_spawn_probability),
        ];
        if let Some((name, _)) = reals.iter().find(|(_, value)| !value.is_finite()) {
            return Err(invalid(format!("{} must be finite", name)));
        }
        if !self.score_increment.is_finite() || self.score_increment < 0.0 {
            return Err(invalid("score_increment must be finite and non-negative"));
        }

        if self.gravity <= 0.0 || self.jump_impulse >= 0.0 {
            return Err(invalid("gravity must be positive and jump_impulse negative"));
        }
        if self.obstacle_speed <= 0.0 {
            return Err(invalid("obstacle_speed must be positive"));
        }
        if self.initial_speed <= 0.0 || self.speed_step < 0.0 {
            return Err(invalid(
                "initial_speed must be positive and speed_step non-negative",
            ));
        }
        if self.ramp_period == 0 {
            return Err(invalid("ramp_period must be non-zero"));
        }
        if self.min_interval_floor > self.initial_min_interval {
            return Err(invalid("min_interval_floor must not exceed initial_min_interval"));
        }

        let ranges = [self.obstacle_height, self.obstacle_width];
        if ranges.iter().any(|(lo, hi)| !(*lo > 0.0 && lo < hi)) {
            return Err(invalid("obstacle size ranges must be positive and non-empty"));
        }
        if self.tall_height_scale <= 0.0 || self.tall_width_scale <= 0.0 {
            return Err(invalid("tall-thin scales must be positive"));
        }

        let chances = [
            ("spawn_probability", self.spawn_probability),
            ("tall_chance", self.tall_chance),
            ("cloud_spawn_probability", self.cloud_spawn_probability),
        ];
        if let Some((name, _)) = chances.iter().find(|(_, p)| !(0.0..=1.0).contains(p)) {
            return Err(invalid(format!("{} must be in 0..=1", name)));
        }
        Ok(())
    }

    /// Ticks a jump stays airborne before touching ground again
    pub fn airtime_ticks(&self) -> u32 {
        // Closed form of y_k = -impulse*k - gravity*k(k+1)/2 returning to zero
        let exact = -2.0 * self.jump_impulse as f64 / self.gravity as f64 - 1.0;
        (exact - 1e-4).ceil() as u32
    }

    /// Peak height reached by a jump, in pixels
    pub fn jump_height(&self) -> f32 {
        let k = (-self.jump_impulse / self.gravity).floor();
        -self.jump_impulse * k - self.gravity * k * (k + 1.0) / 2.0
    }
}

fn invalid(reason: impl Into<String>) -> TuningError {
    TuningError::Invalid(reason.into())
}
