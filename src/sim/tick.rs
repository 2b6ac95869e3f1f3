//! Per-frame simulation tick and session transitions
//!
//! `NotStarted -> Running` on the first jump, `Running -> Over` on collision,
//! `Over -> NotStarted` on restart. Every input that fails its guard is a
//! complete no-op.

use super::collision::first_hit;
use super::physics::{advance_clouds, advance_obstacles, animate_player, integrate_player};
use super::spawner::{maybe_add_cloud, update_spawner};
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one display frame
pub fn tick(state: &mut GameState) {
    // Backdrop and run cycle animate in every phase
    advance_clouds(&mut state.clouds, state.game_speed, &mut state.backdrop_rng);
    maybe_add_cloud(state);
    animate_player(&mut state.player);

    if state.phase != GamePhase::Running {
        return;
    }

    state.frame_count += 1;

    integrate_player(&mut state.player, &state.ground, state.tuning.gravity);
    update_spawner(state);
    advance_obstacles(
        &mut state.obstacles,
        state.tuning.obstacle_speed,
        state.game_speed,
    );

    if first_hit(&state.player, &state.obstacles).is_some() {
        end_game(state);
        return;
    }

    state.score += state.tuning.score_increment * state.game_speed as f64;

    if state.frame_count % state.tuning.ramp_period == 0 {
        ramp_difficulty(state);
    }
}

/// Step game speed up and tighten the spawn gap
fn ramp_difficulty(state: &mut GameState) {
    let tuning = &state.tuning;
    state.game_speed += tuning.speed_step;
    state.min_obstacle_interval = state
        .min_obstacle_interval
        .saturating_sub(tuning.interval_step)
        .max(tuning.min_interval_floor);
    log::info!(
        "Speed up at frame {}: speed {:.1}, min interval {}",
        state.frame_count,
        state.game_speed,
        state.min_obstacle_interval
    );
}

/// Launch the player upward; starts the session if it has not begun.
///
/// Returns false (and changes nothing) while airborne or after game over.
pub fn jump(state: &mut GameState) -> bool {
    if state.player.jumping || state.phase == GamePhase::Over {
        return false;
    }

    state.player.jumping = true;
    state.player.vel_y = state.tuning.jump_impulse;
    state.events.push(GameEvent::Jumped);

    if state.phase == GamePhase::NotStarted {
        state.phase = GamePhase::Running;
        state.events.push(GameEvent::Started);
        log::info!("Run started (seed {})", state.seed);
    }
    true
}

/// End the run: freeze the score, mark the player dead, record a new best
pub fn end_game(state: &mut GameState) {
    if state.phase == GamePhase::Over {
        return;
    }
    state.phase = GamePhase::Over;
    state.player.dead = true;

    let new_high_score = state.score > state.high_score;
    if new_high_score {
        state.high_score = state.score;
    }
    state.events.push(GameEvent::GameOver {
        score: state.score,
        new_high_score,
    });
    log::info!(
        "Game over at frame {}: score {} (best {})",
        state.frame_count,
        state.score.floor(),
        state.high_score.floor()
    );
}

/// Reset to a fresh NotStarted session. Only honored while Over.
pub fn restart(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Over {
        return false;
    }
    state.reset_session();
    state.events.push(GameEvent::Restarted);
    true
}
