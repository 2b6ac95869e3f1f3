//! ASCII renderer for terminals and logs

use glam::Vec2;

use super::Renderer;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{Frame, ObstacleProfile, PlayerPose};

const SKY: char = ' ';
const CLOUD: char = '~';
const GROUND: char = '=';
const OBSTACLE: char = '#';
const TALL_OBSTACLE: char = '|';
const PLAYER: char = 'D';
const PLAYER_DEAD: char = 'X';

/// Rasterizes frames into a fixed character grid
#[derive(Debug, Clone)]
pub struct TextRenderer {
    cols: usize,
    rows: usize,
    /// Most recent frame as text, one line per row
    output: String,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(80, 15)
    }
}

impl TextRenderer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            output: String::new(),
        }
    }

    /// Text of the last drawn frame
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Rasterize a frame to text
    pub fn render(&self, frame: &Frame) -> String {
        let mut grid = vec![vec![SKY; self.cols]; self.rows];

        for cloud in &frame.clouds {
            self.fill(&mut grid, cloud.pos, cloud.size, CLOUD);
        }
        self.fill(
            &mut grid,
            Vec2::new(0.0, frame.ground_y),
            Vec2::new(FIELD_WIDTH, frame.ground_height),
            GROUND,
        );
        for obstacle in &frame.obstacles {
            let glyph = match obstacle.profile {
                ObstacleProfile::Normal => OBSTACLE,
                ObstacleProfile::TallThin => TALL_OBSTACLE,
            };
            self.fill(&mut grid, obstacle.pos, obstacle.size, glyph);
        }
        let glyph = match frame.player.pose {
            PlayerPose::Dead => PLAYER_DEAD,
            PlayerPose::Running(_) | PlayerPose::Jumping => PLAYER,
        };
        self.fill(&mut grid, frame.player.pos, frame.player.size, glyph);

        grid.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Paint every cell the rectangle touches
    fn fill(&self, grid: &mut [Vec<char>], pos: Vec2, size: Vec2, glyph: char) {
        let cell_w = FIELD_WIDTH / self.cols as f32;
        let cell_h = FIELD_HEIGHT / self.rows as f32;

        let Some((c0, c1)) = span(pos.x, size.x, cell_w, self.cols) else {
            return;
        };
        let Some((r0, r1)) = span(pos.y, size.y, cell_h, self.rows) else {
            return;
        };
        for row in &mut grid[r0..=r1] {
            for cell in &mut row[c0..=c1] {
                *cell = glyph;
            }
        }
    }
}

/// Inclusive cell range covered by `[start, start + len)`, clipped to the grid
fn span(start: f32, len: f32, cell: f32, count: usize) -> Option<(usize, usize)> {
    let end = start + len;
    if len <= 0.0 || end <= 0.0 || start >= cell * count as f32 {
        return None;
    }
    let first = (start / cell).floor().max(0.0) as usize;
    let last = ((end / cell).ceil() as usize).saturating_sub(1).min(count - 1);
    (first <= last).then_some((first, last))
}

impl Renderer for TextRenderer {
    fn draw(&mut self, frame: &Frame) {
        self.output = self.render(frame);
    }
}
