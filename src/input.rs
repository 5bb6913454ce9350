//! Pointer and keyboard input
//!
//! Events arrive between ticks and mutate the game state directly.

use crate::sim::GameState;

/// Input delivered by the platform layer
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved; `y` is relative to the top of the drawing surface
    PointerMove { y: f32 },
    /// Key pressed; the DOM `key` string
    KeyDown(String),
}

/// What an input event did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    PaddleMoved,
    Restarted,
    Ignored,
}

/// Apply one input event to the game state
pub fn handle_input(state: &mut GameState, event: &InputEvent) -> InputOutcome {
    match event {
        InputEvent::PointerMove { y } => {
            // Center the paddle on the pointer; off-screen is allowed
            state.user.pos.y = y - state.user.height / 2.0;
            InputOutcome::PaddleMoved
        }
        InputEvent::KeyDown(key) => match key.as_str() {
            "r" | "R" => {
                state.restart();
                InputOutcome::Restarted
            }
            _ => InputOutcome::Ignored,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, Side};

    #[test]
    fn test_pointer_centers_paddle() {
        let mut state = GameState::default();
        let outcome = handle_input(&mut state, &InputEvent::PointerMove { y: 420.0 });
        assert_eq!(outcome, InputOutcome::PaddleMoved);
        assert_eq!(state.user.pos.y, 370.0);
        assert_eq!(state.user.center_y(), 420.0);
    }

    #[test]
    fn test_pointer_not_clamped() {
        let mut state = GameState::default();
        handle_input(&mut state, &InputEvent::PointerMove { y: -30.0 });
        assert_eq!(state.user.pos.y, -80.0);
        handle_input(&mut state, &InputEvent::PointerMove { y: 900.0 });
        assert_eq!(state.user.pos.y, 850.0);
    }

    #[test]
    fn test_pointer_leaves_ai_alone() {
        let mut state = GameState::default();
        let ai_y = state.ai.pos.y;
        handle_input(&mut state, &InputEvent::PointerMove { y: 10.0 });
        assert_eq!(state.ai.pos.y, ai_y);
    }

    #[test]
    fn test_restart_key_either_case() {
        for key in ["r", "R"] {
            let mut state = GameState::default();
            state.ai.score = 2;
            state.user.misses = 3;
            state.phase = GamePhase::GameOver { winner: Side::Ai };

            let outcome = handle_input(&mut state, &InputEvent::KeyDown(key.to_string()));
            assert_eq!(outcome, InputOutcome::Restarted);
            assert_eq!(state.phase, GamePhase::Playing);
            assert_eq!(state.ai.score, 0);
            assert_eq!(state.user.misses, 0);
        }
    }

    #[test]
    fn test_restart_while_playing() {
        let mut state = GameState::default();
        state.user.score = 1;
        state.ball.speed = 7.0;
        handle_input(&mut state, &InputEvent::KeyDown("R".to_string()));
        assert_eq!(state.user.score, 0);
        assert_eq!(state.ball.speed, 5.0);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut state = GameState::default();
        state.user.score = 2;
        for key in ["Escape", " ", "q", "Enter"] {
            let outcome = handle_input(&mut state, &InputEvent::KeyDown(key.to_string()));
            assert_eq!(outcome, InputOutcome::Ignored);
        }
        assert_eq!(state.user.score, 2);
    }
}
