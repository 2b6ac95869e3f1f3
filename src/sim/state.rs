//! Game state and core simulation types
//!
//! Entities are plain data records; behavior lives in the sibling system
//! modules (`physics`, `spawner`, `collision`, `tick`).

use glam::Vec2;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::spawner::spawn_cloud;
use crate::consts::*;
use crate::tuning::Tuning;

/// PCG stream for gameplay draws (spawn timing, obstacle profiles)
const GAMEPLAY_STREAM: u64 = 0xda3e_39cb_94b9_5bdb;
/// PCG stream for cosmetic draws (clouds)
const BACKDROP_STREAM: u64 = 0x5851_f42d_4c95_7f2d;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Waiting for the first jump
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Player hit an obstacle; waiting for restart
    Over,
}

/// Things that happened during a tick or input call, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// First jump moved the session from NotStarted to Running
    Started,
    /// Player left the ground
    Jumped,
    /// A new obstacle entered the field
    ObstacleSpawned { frame: u64, tall: bool },
    /// Collision ended the run
    GameOver { score: f64, new_high_score: bool },
    /// Session reset back to NotStarted
    Restarted,
}

/// The player-controlled runner
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive is down)
    pub vel_y: f32,
    pub jumping: bool,
    pub dead: bool,
    /// Run-cycle frame (0 or 1), rendering only
    pub frame_index: u8,
    /// Ticks the current run-cycle frame has been shown
    pub frame_ticks: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, GROUND_Y - PLAYER_HEIGHT),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            jumping: false,
            dead: false,
            frame_index: 0,
            frame_ticks: 0,
        }
    }
}

impl Player {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// y coordinate of the player's feet
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn on_ground(&self, ground: &Ground) -> bool {
        self.bottom() >= ground.y
    }
}

/// Obstacle size class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleProfile {
    Normal,
    /// 1.5x height, 0.7x width of the base draw
    TallThin,
}

/// A ground obstacle moving left toward the player
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub profile: ObstacleProfile,
}

impl Obstacle {
    /// Create an obstacle at `x` whose base sits on the ground line
    pub fn grounded(x: f32, size: Vec2, profile: ObstacleProfile, ground: &Ground) -> Self {
        Self {
            pos: Vec2::new(x, ground.y - size.y),
            size,
            profile,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// x coordinate of the right edge
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// A decorative cloud, never collides
#[derive(Debug, Clone)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward drift per tick at game speed 1.0
    pub speed: f32,
}

/// The ground strip
#[derive(Debug, Clone, Copy)]
pub struct Ground {
    /// Ground line y coordinate
    pub y: f32,
    pub height: f32,
}

impl Default for Ground {
    fn default() -> Self {
        Self {
            y: GROUND_Y,
            height: GROUND_HEIGHT,
        }
    }
}

/// Complete game state: session counters plus the entity store
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG streams were created from
    pub seed: u64,
    /// Balance values
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Score of the current run
    pub score: f64,
    /// Best score seen by this process (loaded from storage at startup)
    pub high_score: f64,
    /// Speed multiplier for obstacles, clouds and scoring
    pub game_speed: f32,
    /// Ticks spent Running this session
    pub frame_count: u64,
    /// Frame of the most recent spawn
    pub last_obstacle_frame: u64,
    /// Current minimum gap between spawns
    pub min_obstacle_interval: u64,
    pub player: Player,
    pub ground: Ground,
    /// Active obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Backdrop clouds
    pub clouds: Vec<Cloud>,
    /// Pending events since the last drain
    pub events: Vec<GameEvent>,
    /// Gameplay randomness
    pub rng: Pcg32,
    /// Cosmetic randomness, kept apart so clouds never shift spawn draws
    pub backdrop_rng: Pcg32,
}

impl GameState {
    /// Create a new game state with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with the given seed and tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::NotStarted,
            score: 0.0,
            high_score: 0.0,
            game_speed: tuning.initial_speed,
            frame_count: 0,
            last_obstacle_frame: 0,
            min_obstacle_interval: tuning.initial_min_interval,
            player: Player::default(),
            ground: Ground::default(),
            obstacles: Vec::new(),
            clouds: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::new(seed, GAMEPLAY_STREAM),
            backdrop_rng: Pcg32::new(seed, BACKDROP_STREAM),
            tuning,
        };

        for _ in 0..state.tuning.initial_clouds {
            let cloud = spawn_cloud(&mut state.backdrop_rng);
            state.clouds.push(cloud);
        }

        state
    }

    /// Reset session counters and gameplay entities; keeps high score,
    /// clouds and RNG streams
    pub fn reset_session(&mut self) {
        self.phase = GamePhase::NotStarted;
        self.score = 0.0;
        self.game_speed = self.tuning.initial_speed;
        self.frame_count = 0;
        self.last_obstacle_frame = 0;
        self.min_obstacle_interval = self.tuning.initial_min_interval;
        self.player = Player::default();
        self.obstacles.clear();
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_at_rest() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.game_speed, 1.0);
        assert_eq!(state.min_obstacle_interval, 50);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.clouds.len(), 3);
        assert!(state.player.on_ground(&state.ground));
        assert_eq!(state.player.bottom(), GROUND_Y);
    }

    #[test]
    fn test_grounded_obstacle_touches_ground() {
        let ground = Ground::default();
        let obstacle =
            Obstacle::grounded(FIELD_WIDTH, Vec2::new(20.0, 35.0), ObstacleProfile::Normal, &ground);
        assert_eq!(obstacle.pos.y + obstacle.size.y, ground.y);
        assert_eq!(obstacle.right(), FIELD_WIDTH + 20.0);
    }

    #[test]
    fn test_reset_session_keeps_high_score() {
        let mut state = GameState::new(7);
        state.phase = GamePhase::Over;
        state.score = 123.0;
        state.high_score = 123.0;
        state.game_speed = 1.5;
        state.min_obstacle_interval = 40;
        state.player.dead = true;
        state.obstacles.push(Obstacle::grounded(
            100.0,
            Vec2::splat(25.0),
            ObstacleProfile::Normal,
            &state.ground,
        ));

        state.reset_session();

        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.high_score, 123.0);
        assert_eq!(state.game_speed, 1.0);
        assert_eq!(state.min_obstacle_interval, 50);
        assert!(!state.player.dead);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_same_seed_same_clouds() {
        let a = GameState::new(99);
        let b = GameState::new(99);
        for (ca, cb) in a.clouds.iter().zip(&b.clouds) {
            assert_eq!(ca.pos, cb.pos);
            assert_eq!(ca.size, cb.size);
        }
    }
}
