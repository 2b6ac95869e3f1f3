//! DOM HUD sync (WASM only)
//!
//! Mirrors the score text and start / game-over overlays from a
//! [`HudSnapshot`]. Only touches the DOM when a value actually changes.

use web_sys::Document;

use crate::sim::HudSnapshot;

const SCORE_ID: &str = "score";
const HIGH_SCORE_ID: &str = "highScore";
const START_OVERLAY_ID: &str = "game-start";
const GAME_OVER_OVERLAY_ID: &str = "game-over";
const HIDDEN_CLASS: &str = "hidden";

pub struct DomHud {
    document: Document,
    last: Option<HudSnapshot>,
}

impl DomHud {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            last: None,
        }
    }

    pub fn sync(&mut self, hud: HudSnapshot) {
        if self.last == Some(hud) {
            return;
        }
        let last = self.last.replace(hud);

        if last.map(|l| l.score) != Some(hud.score) {
            self.set_text(SCORE_ID, &hud.score.to_string());
        }
        if last.map(|l| l.high_score) != Some(hud.high_score) {
            self.set_text(HIGH_SCORE_ID, &hud.high_score.to_string());
        }
        if last.map(|l| l.phase) != Some(hud.phase) {
            self.set_hidden(START_OVERLAY_ID, !hud.show_start());
            self.set_hidden(GAME_OVER_OVERLAY_ID, !hud.show_game_over());
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(&self, id: &str, hidden: bool) {
        let Some(el) = self.document.get_element_by_id(id) else {
            return;
        };
        let classes = el.class_list();
        let result = if hidden {
            classes.add_1(HIDDEN_CLASS)
        } else {
            classes.remove_1(HIDDEN_CLASS)
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle overlay '{}': {:?}", id, e);
        }
    }
}
