//! Idle/demo mode AI
//!
//! Times jumps so the apex of the arc lines up with the middle of the
//! nearest obstacle's pass under the player. Good enough to survive long
//! runs; it does not plan around tightly packed pairs.

use super::state::{GamePhase, GameState};

/// Decide whether the autopilot wants to jump this frame
pub fn wants_jump(state: &GameState) -> bool {
    match state.phase {
        GamePhase::Over => return false,
        // Kick off a fresh session right away
        GamePhase::NotStarted => return true,
        GamePhase::Running => {}
    }
    if state.player.jumping {
        return false;
    }

    let player = &state.player;
    let player_right = player.pos.x + player.size.x;
    let speed = state.tuning.obstacle_speed * state.game_speed;
    if speed <= 0.0 {
        return false;
    }

    let Some(next) = state
        .obstacles
        .iter()
        .filter(|o| o.pos.x >= player_right)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
    else {
        return false;
    };

    let ticks_to_contact = (next.pos.x - player_right) / speed;
    let overlap_ticks = (player.size.x + next.size.x) / speed;
    let apex_ticks = -state.tuning.jump_impulse / state.tuning.gravity;

    ticks_to_contact <= apex_ticks - overlap_ticks / 2.0
}
