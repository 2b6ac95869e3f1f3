//! Procedural obstacle and cloud generation
//!
//! Obstacles arrive at random rather than on a fixed period, but three gates
//! must all pass before one can appear:
//! - a per-tick roll under `spawn_probability * game_speed`
//! - the warm-up window after session start has elapsed
//! - more than `min_obstacle_interval` frames since the previous spawn

use glam::Vec2;
use rand::Rng;

use super::state::{Cloud, GameEvent, GameState, Ground, Obstacle, ObstacleProfile};
use crate::consts::*;
use crate::tuning::Tuning;

/// Check the pacing gates for the current frame.
///
/// The roll is always drawn, so the RNG advances exactly once per Running
/// tick no matter which gate fails.
pub fn should_spawn<R: Rng>(
    rng: &mut R,
    tuning: &Tuning,
    game_speed: f32,
    frame: u64,
    last_spawn_frame: u64,
    min_interval: u64,
) -> bool {
    let roll: f32 = rng.random();
    roll < tuning.spawn_probability * game_speed
        && frame > tuning.warmup_frames
        && frame.saturating_sub(last_spawn_frame) > min_interval
}

/// Draw an obstacle profile and size, seated on the ground at `x`
pub fn create_obstacle<R: Rng>(rng: &mut R, tuning: &Tuning, ground: &Ground, x: f32) -> Obstacle {
    let (h_min, h_max) = tuning.obstacle_height;
    let (w_min, w_max) = tuning.obstacle_width;
    let height = rng.random_range(h_min..h_max);
    let width = rng.random_range(w_min..w_max);

    let profile = if rng.random_bool(tuning.tall_chance as f64) {
        ObstacleProfile::TallThin
    } else {
        ObstacleProfile::Normal
    };

    let size = match profile {
        ObstacleProfile::Normal => Vec2::new(width, height),
        ObstacleProfile::TallThin => Vec2::new(
            width * tuning.tall_width_scale,
            height * tuning.tall_height_scale,
        ),
    };

    Obstacle::grounded(x, size, profile, ground)
}

/// Run the spawner for the current frame; returns true if an obstacle appeared
pub fn update_spawner(state: &mut GameState) -> bool {
    let frame = state.frame_count;
    if !should_spawn(
        &mut state.rng,
        &state.tuning,
        state.game_speed,
        frame,
        state.last_obstacle_frame,
        state.min_obstacle_interval,
    ) {
        return false;
    }

    let obstacle = create_obstacle(&mut state.rng, &state.tuning, &state.ground, FIELD_WIDTH);
    let tall = obstacle.profile == ObstacleProfile::TallThin;
    log::debug!(
        "Spawned {:?} obstacle {:.1}x{:.1} at frame {}",
        obstacle.profile,
        obstacle.size.x,
        obstacle.size.y,
        frame
    );
    state.obstacles.push(obstacle);
    state.last_obstacle_frame = frame;
    state.events.push(GameEvent::ObstacleSpawned { frame, tall });
    true
}

/// A fresh cloud just past the right edge
pub fn spawn_cloud<R: Rng>(rng: &mut R) -> Cloud {
    let mut cloud = Cloud {
        pos: Vec2::ZERO,
        size: Vec2::ZERO,
        speed: rng.random_range(1.0..1.5),
    };
    respawn_cloud(&mut cloud, rng);
    cloud
}

/// Move a cloud back past the right edge with a new height band and size
pub fn respawn_cloud<R: Rng>(cloud: &mut Cloud, rng: &mut R) {
    cloud.pos = Vec2::new(
        FIELD_WIDTH + rng.random_range(0.0..CLOUD_ENTRY_SPREAD),
        CLOUD_MIN_Y + rng.random_range(0.0..CLOUD_Y_SPREAD),
    );
    cloud.size = Vec2::new(rng.random_range(60.0..100.0), rng.random_range(20.0..40.0));
}

/// Occasionally add a cloud, up to the cap
pub fn maybe_add_cloud(state: &mut GameState) {
    let chance = state.tuning.cloud_spawn_probability * state.game_speed;
    let roll: f32 = state.backdrop_rng.random();
    if roll < chance && state.clouds.len() < state.tuning.max_clouds {
        let cloud = spawn_cloud(&mut state.backdrop_rng);
        state.clouds.push(cloud);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Tuning whose roll gate always passes
    fn eager() -> Tuning {
        Tuning {
            spawn_probability: 1.0,
            ..Tuning::default()
        }
    }

    #[test]
    fn test_warmup_blocks_spawns() {
        let mut rng = Pcg32::seed_from_u64(1);
        let tuning = eager();
        assert!(!should_spawn(&mut rng, &tuning, 1.0, 60, 0, 50));
        assert!(should_spawn(&mut rng, &tuning, 1.0, 61, 0, 50));
    }

    #[test]
    fn test_min_interval_is_strict() {
        let mut rng = Pcg32::seed_from_u64(2);
        let tuning = eager();
        assert!(!should_spawn(&mut rng, &tuning, 1.0, 150, 100, 50));
        assert!(should_spawn(&mut rng, &tuning, 1.0, 151, 100, 50));
    }

    #[test]
    fn test_zero_probability_never_spawns() {
        let mut rng = Pcg32::seed_from_u64(3);
        let tuning = Tuning {
            spawn_probability: 0.0,
            ..Tuning::default()
        };
        assert!((0..1000).all(|f| !should_spawn(&mut rng, &tuning, 1.0, 1000 + f, 0, 30)));
    }

    #[test]
    fn test_obstacle_profiles_respect_ranges() {
        let mut rng = Pcg32::seed_from_u64(4);
        let tuning = Tuning::default();
        let ground = Ground::default();
        let mut tall = 0;
        for _ in 0..2000 {
            let o = create_obstacle(&mut rng, &tuning, &ground, FIELD_WIDTH);
            assert_eq!(o.pos.x, FIELD_WIDTH);
            assert!((o.pos.y + o.size.y - ground.y).abs() < 1e-3);
            match o.profile {
                ObstacleProfile::Normal => {
                    assert!(o.size.y >= 20.0 && o.size.y < 50.0);
                    assert!(o.size.x >= 20.0 && o.size.x < 30.0);
                }
                ObstacleProfile::TallThin => {
                    tall += 1;
                    assert!(o.size.y >= 30.0 && o.size.y < 75.0);
                    assert!(o.size.x >= 14.0 && o.size.x < 21.0);
                }
            }
        }
        // ~30% tall-thin
        assert!((450..750).contains(&tall), "tall count {}", tall);
    }

    #[test]
    fn test_update_spawner_records_frame() {
        let mut state = GameState::with_tuning(5, eager());
        state.frame_count = 61;
        assert!(update_spawner(&mut state));
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.last_obstacle_frame, 61);
        assert!(matches!(
            state.events.last(),
            Some(GameEvent::ObstacleSpawned { frame: 61, .. })
        ));

        state.frame_count = 100;
        assert!(!update_spawner(&mut state));
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_cloud_cap() {
        let mut state = GameState::with_tuning(
            6,
            Tuning {
                cloud_spawn_probability: 1.0,
                ..Tuning::default()
            },
        );
        for _ in 0..20 {
            maybe_add_cloud(&mut state);
        }
        assert_eq!(state.clouds.len(), 5);
    }
}
