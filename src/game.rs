//! Game session facade
//!
//! Owns the simulation state and the high score store. Drivers talk only to
//! this type: two input entry points, one tick per display frame, and
//! read-only snapshots for rendering and the HUD.

use crate::persistence::HighScoreStore;
use crate::platform::input::{Command, route_press};
use crate::sim::{self, Frame, GameEvent, GamePhase, GameState, HudSnapshot};
use crate::tuning::Tuning;

pub struct Game<S: HighScoreStore> {
    state: GameState,
    store: S,
    /// Events from the most recent input or tick, for drivers that want them
    events: Vec<GameEvent>,
}

impl<S: HighScoreStore> Game<S> {
    /// New session with default tuning; loads the best score from `store`
    pub fn new(seed: u64, store: S) -> Self {
        Self::with_tuning(seed, Tuning::default(), store)
    }

    pub fn with_tuning(seed: u64, tuning: Tuning, store: S) -> Self {
        let mut state = GameState::with_tuning(seed, tuning);
        state.high_score = store.load_high_score();
        log::info!(
            "Game initialized with seed {} (best {})",
            seed,
            state.high_score.floor()
        );
        Self {
            state,
            store,
            events: Vec::new(),
        }
    }

    /// Jump input. Ignored while airborne or after game over.
    pub fn on_jump_requested(&mut self) -> bool {
        let accepted = sim::jump(&mut self.state);
        self.flush_events();
        accepted
    }

    /// Restart input. Ignored unless the game is over.
    pub fn on_restart_requested(&mut self) -> bool {
        let accepted = sim::restart(&mut self.state);
        self.flush_events();
        accepted
    }

    /// A generic press (Space, tap, click): restart when over, else jump
    pub fn press(&mut self) -> bool {
        match route_press(self.state.phase) {
            Command::Restart => self.on_restart_requested(),
            Command::Jump => self.on_jump_requested(),
        }
    }

    /// Advance one display frame
    pub fn tick(&mut self) {
        sim::tick(&mut self.state);
        self.flush_events();
    }

    /// Handle pending sim events: log cues and persist new best scores
    fn flush_events(&mut self) {
        self.events = self.state.drain_events();
        for event in &self.events {
            match *event {
                GameEvent::Jumped => log::debug!("Playing sound: jump"),
                GameEvent::GameOver {
                    score,
                    new_high_score,
                } => {
                    log::debug!("Playing sound: death");
                    if new_high_score {
                        self.store.save_high_score(score);
                    }
                }
                GameEvent::Restarted => log::info!("Session restarted"),
                GameEvent::Started | GameEvent::ObstacleSpawned { .. } => {}
            }
        }
    }

    /// Events produced by the last call into the game
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for drivers and tests that need to set up a scene
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn frame(&self) -> Frame {
        Frame::capture(&self.state)
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::capture(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::sim::{Obstacle, ObstacleProfile};
    use glam::Vec2;

    fn quiet_tuning() -> Tuning {
        Tuning {
            spawn_probability: 0.0,
            ..Tuning::default()
        }
    }

    fn place_obstacle_underfoot<S: HighScoreStore>(game: &mut Game<S>) {
        let state = game.state_mut();
        let ground = state.ground;
        let x = state.player.pos.x + 6.0;
        state
            .obstacles
            .push(Obstacle::grounded(x, Vec2::new(20.0, 30.0), ObstacleProfile::Normal, &ground));
    }

    #[test]
    fn test_loads_high_score_at_start() {
        let game = Game::new(1, MemoryStore::with_high_score(77.0));
        assert_eq!(game.state().high_score, 77.0);
        assert_eq!(game.hud().high_score, 77);
    }

    #[test]
    fn test_new_best_is_persisted() {
        let mut game = Game::with_tuning(2, quiet_tuning(), MemoryStore::with_high_score(1.0));
        game.on_jump_requested();
        for _ in 0..60 {
            game.tick();
        }
        place_obstacle_underfoot(&mut game);
        game.tick();

        assert_eq!(game.phase(), GamePhase::Over);
        assert_eq!(game.store().saves, 1);
        assert_eq!(game.store().load_high_score(), game.state().score);
        assert!(game.state().score > 1.0);
    }

    #[test]
    fn test_worse_score_not_persisted() {
        let mut game = Game::with_tuning(3, quiet_tuning(), MemoryStore::with_high_score(1000.0));
        game.on_jump_requested();
        for _ in 0..60 {
            game.tick();
        }
        place_obstacle_underfoot(&mut game);
        game.tick();

        assert_eq!(game.phase(), GamePhase::Over);
        assert_eq!(game.store().saves, 0);
        assert_eq!(game.state().high_score, 1000.0);
    }

    #[test]
    fn test_press_routes_by_phase() {
        let mut game = Game::with_tuning(4, quiet_tuning(), MemoryStore::new());
        assert!(game.press());
        assert_eq!(game.phase(), GamePhase::Running);

        sim::end_game(game.state_mut());
        game.tick();
        assert!(game.press());
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert_eq!(game.events(), &[GameEvent::Restarted]);
    }
}
