//! Read-only views handed to the render and UI collaborators after each tick

use glam::Vec2;

use super::state::{GamePhase, GameState, ObstacleProfile};

/// Which sprite the player should be drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerPose {
    /// Run cycle frame (0 or 1)
    Running(u8),
    Jumping,
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: Vec2,
    pub pose: PlayerPose,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectView {
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleView {
    pub pos: Vec2,
    pub size: Vec2,
    pub profile: ObstacleProfile,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub player: PlayerView,
    /// Ground line y coordinate
    pub ground_y: f32,
    pub ground_height: f32,
    pub obstacles: Vec<ObstacleView>,
    pub clouds: Vec<RectView>,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let player = &state.player;
        let pose = if player.dead {
            PlayerPose::Dead
        } else if player.jumping {
            PlayerPose::Jumping
        } else {
            PlayerPose::Running(player.frame_index)
        };

        Self {
            player: PlayerView {
                pos: player.pos,
                size: player.size,
                pose,
            },
            ground_y: state.ground.y,
            ground_height: state.ground.height,
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    pos: o.pos,
                    size: o.size,
                    profile: o.profile,
                })
                .collect(),
            clouds: state
                .clouds
                .iter()
                .map(|c| RectView {
                    pos: c.pos,
                    size: c.size,
                })
                .collect(),
        }
    }
}

/// Score text and overlay state for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudSnapshot {
    /// Current score, floored
    pub score: u64,
    /// Best score, floored
    pub high_score: u64,
    pub phase: GamePhase,
}

impl HudSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            score: state.score.max(0.0).floor() as u64,
            high_score: state.high_score.max(0.0).floor() as u64,
            phase: state.phase,
        }
    }

    /// "Press to start" overlay visible
    pub fn show_start(&self) -> bool {
        self.phase == GamePhase::NotStarted
    }

    /// "Game over" overlay visible
    pub fn show_game_over(&self) -> bool {
        self.phase == GamePhase::Over
    }
}
