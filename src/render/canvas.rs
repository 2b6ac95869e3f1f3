//! 2D canvas renderer (WASM only)

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::Renderer;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{Frame, PlayerPose};

/// Colors for game elements
mod colors {
    pub const SKY_TOP: &str = "#b3e0ff";
    pub const SKY_BOTTOM: &str = "#e6f2ff";
    pub const CLOUD: &str = "rgba(255, 255, 255, 0.8)";
    pub const GROUND: &str = "#AAA";
    pub const GROUND_TEXTURE: &str = "#999";
    pub const PLAYER: &str = "#555";
    pub const PLAYER_DEAD: &str = "#944";
    pub const EYE: &str = "white";
    pub const PUPIL: &str = "black";
    pub const OBSTACLE: &str = "#833";
    pub const OBSTACLE_STRIPE: &str = "#722";
}

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn draw_sky(&self) -> Result<(), JsValue> {
        let gradient = self
            .ctx
            .create_linear_gradient(0.0, 0.0, 0.0, FIELD_HEIGHT as f64);
        gradient.add_color_stop(0.0, colors::SKY_TOP)?;
        gradient.add_color_stop(1.0, colors::SKY_BOTTOM)?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx
            .fill_rect(0.0, 0.0, FIELD_WIDTH as f64, FIELD_HEIGHT as f64);
        Ok(())
    }

    /// Three overlapping puffs per cloud
    fn draw_clouds(&self, frame: &Frame) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(colors::CLOUD);
        for cloud in &frame.clouds {
            let (x, y) = (cloud.pos.x as f64, cloud.pos.y as f64);
            let (w, h) = (cloud.size.x as f64, cloud.size.y as f64);
            self.ctx.begin_path();
            self.ctx.arc(x, y, h / 2.0, 0.0, TAU)?;
            self.ctx.arc(x + w * 0.3, y - h * 0.2, h * 0.6, 0.0, TAU)?;
            self.ctx.arc(x + w * 0.6, y, h * 0.7, 0.0, TAU)?;
            self.ctx.fill();
        }
        Ok(())
    }

    fn draw_ground(&self, frame: &Frame) {
        let y = frame.ground_y as f64;
        self.ctx.set_fill_style_str(colors::GROUND);
        self.ctx
            .fill_rect(0.0, y, FIELD_WIDTH as f64, frame.ground_height as f64);

        self.ctx.set_fill_style_str(colors::GROUND_TEXTURE);
        for i in (0..FIELD_WIDTH as u32).step_by(50) {
            self.ctx.fill_rect(i as f64, y + 5.0, 30.0, 2.0);
        }
    }

    fn draw_player(&self, frame: &Frame) {
        let player = &frame.player;
        let (x, y) = (player.pos.x as f64, player.pos.y as f64);
        let (w, h) = (player.size.x as f64, player.size.y as f64);

        let body = match player.pose {
            PlayerPose::Dead => colors::PLAYER_DEAD,
            PlayerPose::Running(_) | PlayerPose::Jumping => colors::PLAYER,
        };
        self.ctx.set_fill_style_str(body);
        self.ctx.fill_rect(x, y, w, h);

        // Legs alternate with the run cycle
        if let PlayerPose::Running(frame_index) = player.pose {
            let leg_x = if frame_index == 0 { x + 6.0 } else { x + 22.0 };
            self.ctx.fill_rect(leg_x, y + h, 8.0, 2.0);
        }

        self.ctx.set_fill_style_str(colors::EYE);
        self.ctx.fill_rect(x + 28.0, y + 8.0, 8.0, 8.0);
        self.ctx.set_fill_style_str(colors::PUPIL);
        if player.pose == PlayerPose::Dead {
            self.ctx.fill_rect(x + 28.0, y + 11.0, 8.0, 2.0);
        } else {
            self.ctx.fill_rect(x + 32.0, y + 10.0, 4.0, 4.0);
        }
    }

    fn draw_obstacles(&self, frame: &Frame) {
        for obstacle in &frame.obstacles {
            let (x, y) = (obstacle.pos.x as f64, obstacle.pos.y as f64);
            let (w, h) = (obstacle.size.x as f64, obstacle.size.y as f64);
            self.ctx.set_fill_style_str(colors::OBSTACLE);
            self.ctx.fill_rect(x, y, w, h);

            self.ctx.set_fill_style_str(colors::OBSTACLE_STRIPE);
            self.ctx.fill_rect(x + w * 0.25, y, w * 0.1, h);
            self.ctx.fill_rect(x + w * 0.6, y, w * 0.1, h);
        }
    }

    fn try_draw(&self, frame: &Frame) -> Result<(), JsValue> {
        self.ctx
            .clear_rect(0.0, 0.0, FIELD_WIDTH as f64, FIELD_HEIGHT as f64);
        self.draw_sky()?;
        self.draw_clouds(frame)?;
        self.draw_ground(frame);
        self.draw_player(frame);
        self.draw_obstacles(frame);
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, frame: &Frame) {
        if let Err(e) = self.try_draw(frame) {
            log::warn!("Render error: {:?}", e);
        }
    }
}
