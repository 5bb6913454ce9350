//! Canvas Pong - a single-screen two-paddle ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, scoring, game over)
//! - `input`: Pointer/keyboard events applied to the game state
//! - `renderer`: Drawing surface abstraction and the render pass
//! - `driver`: Fixed-rate frame driver and scheduler abstraction
//! - `settings`: Presentation settings (colors, font)

pub mod driver;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{Game, ManualScheduler, Scheduler};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Playfield (drawing surface) dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Speed at serve; every reset goes back to this
    pub const BALL_BASE_SPEED: f32 = 5.0;
    /// Velocity of the very first serve (down-right)
    pub const BALL_INITIAL_VELOCITY: (f32, f32) = (5.0, 5.0);
    /// Speed added on every paddle hit (uncapped)
    pub const BALL_SPEED_INCREMENT: f32 = 0.5;

    /// Maximum bounce deflection off a paddle edge (45 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Proportional gain of the AI paddle pulling its center toward the ball
    pub const AI_TRACKING_GAIN: f32 = 0.3;

    /// Misses that end the game
    pub const MAX_MISSES: u8 = 3;

    /// Net segments
    pub const NET_WIDTH: f32 = 2.0;
    pub const NET_SEGMENT_HEIGHT: f32 = 10.0;
    pub const NET_SEGMENT_SPACING: f32 = 15.0;

    /// Frame driver rate (speeds above are tuned for this)
    pub const FRAMES_PER_SECOND: u32 = 50;
    pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / FRAMES_PER_SECOND as u64);
}
