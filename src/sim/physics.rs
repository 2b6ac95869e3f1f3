//! Per-tick movement systems
//!
//! Vertical gravity for the player, linear leftward scroll for everything
//! else. No other forces exist on the field.

use rand::Rng;

use super::spawner::respawn_cloud;
use super::state::{Cloud, Ground, Obstacle, Player};
use crate::consts::RUN_FRAME_TICKS;

/// Apply gravity and move the player, clamping at the ground line.
///
/// Landing zeroes velocity and clears the jumping flag.
pub fn integrate_player(player: &mut Player, ground: &Ground, gravity: f32) {
    player.vel_y += gravity;
    player.pos.y += player.vel_y;

    if player.on_ground(ground) {
        player.pos.y = ground.y - player.size.y;
        player.vel_y = 0.0;
        player.jumping = false;
    }
}

/// Scroll obstacles left and drop the ones fully past the left edge.
///
/// Survivors keep their relative order.
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>, speed: f32, game_speed: f32) {
    let dx = speed * game_speed;
    for obstacle in obstacles.iter_mut() {
        obstacle.pos.x -= dx;
    }
    obstacles.retain(|o| o.right() >= 0.0);
}

/// Drift clouds left; a cloud that leaves the field re-enters on the right
pub fn advance_clouds<R: Rng>(clouds: &mut [Cloud], game_speed: f32, rng: &mut R) {
    for cloud in clouds.iter_mut() {
        cloud.pos.x -= cloud.speed * game_speed;
        if cloud.pos.x + cloud.size.x < 0.0 {
            respawn_cloud(cloud, rng);
        }
    }
}

/// Step the two-frame run cycle (only while grounded and alive)
pub fn animate_player(player: &mut Player) {
    if player.dead || player.jumping {
        return;
    }
    player.frame_ticks += 1;
    if player.frame_ticks >= RUN_FRAME_TICKS {
        player.frame_index = (player.frame_index + 1) % 2;
        player.frame_ticks = 0;
    }
}
