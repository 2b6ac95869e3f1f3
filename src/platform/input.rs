//! Raw input to game commands
//!
//! Keyboard, touch and mouse all collapse to a single "press": it restarts a
//! finished run and jumps otherwise.

use crate::sim::GamePhase;

/// What a press means in the current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Jump,
    Restart,
}

/// Key names (`KeyboardEvent.key`) that count as a press
const PRESS_KEYS: [&str; 3] = [" ", "Enter", "ArrowUp"];

/// Map a press to a command for the given phase
pub fn route_press(phase: GamePhase) -> Command {
    match phase {
        GamePhase::Over => Command::Restart,
        GamePhase::NotStarted | GamePhase::Running => Command::Jump,
    }
}

/// Whether a keyboard key should be treated as a press
pub fn is_press_key(key: &str) -> bool {
    PRESS_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_restarts_only_when_over() {
        assert_eq!(route_press(GamePhase::NotStarted), Command::Jump);
        assert_eq!(route_press(GamePhase::Running), Command::Jump);
        assert_eq!(route_press(GamePhase::Over), Command::Restart);
    }

    #[test]
    fn test_press_keys() {
        assert!(is_press_key(" "));
        assert!(is_press_key("Enter"));
        assert!(!is_press_key("Escape"));
        assert!(!is_press_key("i"));
    }
}
