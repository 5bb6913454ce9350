//! Deterministic simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! the frame driver calls `tick` once per frame and tests call it directly.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Bounds, ball_paddle_collision};
pub use state::{Ball, GamePhase, GameState, Net, Paddle, Playfield, Side};
pub use tick::{GameEvent, tick};
