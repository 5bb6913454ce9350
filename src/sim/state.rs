//! Game state and core simulation types
//!
//! Everything the frame driver owns lives in `GameState`; input handlers,
//! the simulation step and the render pass all borrow it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by the pointer
    User,
    /// Right paddle, driven by the tracking rule
    Ai,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::User => Side::Ai,
            Side::Ai => Side::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::User => "User",
            Side::Ai => "AI",
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// A side reached the miss limit; frozen until restart
    GameOver { winner: Side },
}

/// Drawing surface dimensions; the collision and scoring boundaries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle (position is the top-left corner)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: String,
    /// Points won
    pub score: u32,
    /// Balls let past this paddle
    pub misses: u8,
}

impl Paddle {
    /// Paddle at `x`, vertically centered in the field
    pub fn new(x: f32, field: &Playfield) -> Self {
        Self {
            pos: Vec2::new(x, Self::start_y(field)),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            color: "WHITE".to_string(),
            score: 0,
            misses: 0,
        }
    }

    fn start_y(field: &Playfield) -> f32 {
        field.height / 2.0 - PADDLE_HEIGHT / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    /// Scores, misses and vertical position back to their starting values
    pub fn reset(&mut self, field: &Playfield) {
        self.pos.y = Self::start_y(field);
        self.score = 0;
        self.misses = 0;
    }
}

/// The ball (position is the center)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed used for the next paddle bounce
    pub speed: f32,
    pub color: String,
}

impl Ball {
    /// Ball at the field center with the initial serve velocity
    pub fn new(field: &Playfield) -> Self {
        let (vx, vy) = BALL_INITIAL_VELOCITY;
        Self {
            pos: field.center(),
            vel: Vec2::new(vx, vy),
            radius: BALL_RADIUS,
            speed: BALL_BASE_SPEED,
            color: "WHITE".to_string(),
        }
    }

    /// Re-serve after a miss: back to center, horizontal direction flipped,
    /// vertical component kept, speed back to base
    pub fn reset(&mut self, field: &Playfield) {
        self.pos = field.center();
        self.vel.x = -self.vel.x;
        self.speed = BALL_BASE_SPEED;
    }
}

/// Dashed center line (decorative, immutable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Net {
    pub x: f32,
    pub width: f32,
    pub segment_height: f32,
    pub spacing: f32,
    pub color: String,
}

impl Net {
    pub fn new(field: &Playfield) -> Self {
        Self {
            x: field.width / 2.0 - NET_WIDTH / 2.0,
            width: NET_WIDTH,
            segment_height: NET_SEGMENT_HEIGHT,
            spacing: NET_SEGMENT_SPACING,
            color: "WHITE".to_string(),
        }
    }

    /// Top y of every segment, tiled from 0 down to the field height (inclusive)
    pub fn segment_offsets(&self, field: &Playfield) -> impl Iterator<Item = f32> + '_ {
        let height = field.height;
        (0..)
            .map(move |i| i as f32 * self.spacing)
            .take_while(move |y| *y <= height)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Playfield,
    pub user: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    pub net: Net,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Playfield::default())
    }
}

impl GameState {
    pub fn new(field: Playfield) -> Self {
        Self {
            user: Paddle::new(0.0, &field),
            ai: Paddle::new(field.width - PADDLE_WIDTH, &field),
            ball: Ball::new(&field),
            net: Net::new(&field),
            phase: GamePhase::Playing,
            time_ticks: 0,
            field,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::User => &self.user,
            Side::Ai => &self.ai,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::User => &mut self.user,
            Side::Ai => &mut self.ai,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    /// Winner once either side has used up its misses
    pub fn check_winner(&self) -> Option<Side> {
        if self.user.misses >= MAX_MISSES {
            Some(Side::Ai)
        } else if self.ai.misses >= MAX_MISSES {
            Some(Side::User)
        } else {
            None
        }
    }

    /// Back to a fresh match, from any phase
    pub fn restart(&mut self) {
        self.user.reset(&self.field);
        self.ai.reset(&self.field);
        self.ball = Ball::new(&self.field);
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
    }
}
