//! Render pass
//!
//! Pure reads of `GameState` turned into calls on a `Surface`. The surface
//! only has to know four primitives, so the same pass drives the browser
//! canvas and the headless recorder.

pub mod recording;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use recording::{DrawCommand, RecordingSurface};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, Side};

/// Offset of the game-over message's left edge from the field center
const MESSAGE_OFFSET_X: f32 = 200.0;

/// The drawing primitives the game needs from a backend
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str);

    /// Paint the whole surface
    fn clear(&mut self, width: f32, height: f32, color: &str) {
        self.fill_rect(0.0, 0.0, width, height, color);
    }
}

/// Draw one frame of play: background, net, scores, paddles, ball
pub fn render(state: &GameState, settings: &Settings, surface: &mut impl Surface) {
    let field = &state.field;
    surface.clear(field.width, field.height, &settings.background);

    let net = &state.net;
    for y in net.segment_offsets(field) {
        surface.fill_rect(net.x, y, net.width, net.segment_height, &net.color);
    }

    surface.fill_text(
        &state.user.score.to_string(),
        field.width / 4.0,
        field.height / 5.0,
        &settings.text_color,
    );
    surface.fill_text(
        &state.ai.score.to_string(),
        3.0 * field.width / 4.0,
        field.height / 5.0,
        &settings.text_color,
    );

    for paddle in [&state.user, &state.ai] {
        surface.fill_rect(
            paddle.pos.x,
            paddle.pos.y,
            paddle.width,
            paddle.height,
            &paddle.color,
        );
    }

    let ball = &state.ball;
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius, &ball.color);
}

/// Text shown once the game is over, `None` while playing
pub fn game_over_message(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::Playing => None,
        GamePhase::GameOver { winner: Side::Ai } => Some("AI Wins! Press R to Restart"),
        GamePhase::GameOver { winner: Side::User } => Some("You Win! Press R to Restart"),
    }
}

/// Draw the terminal message over whatever is on the surface
///
/// Redrawn every tick while the game is over; drawing it again is harmless.
pub fn render_game_over(state: &GameState, settings: &Settings, surface: &mut impl Surface) {
    if let Some(message) = game_over_message(state.phase) {
        let center = state.field.center();
        surface.fill_text(
            message,
            center.x - MESSAGE_OFFSET_X,
            center.y,
            &settings.text_color,
        );
    }
}
