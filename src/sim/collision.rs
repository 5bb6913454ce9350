//! Ball vs. paddle overlap test
//!
//! Both shapes are reduced to axis-aligned bounds computed locally; the
//! entities themselves are never touched.

use glam::Vec2;

use super::state::{Ball, Paddle};

/// Axis-aligned bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Bounds of a rectangle given its top-left corner
    pub fn from_rect(top_left: Vec2, width: f32, height: f32) -> Self {
        Self {
            left: top_left.x,
            right: top_left.x + width,
            top: top_left.y,
            bottom: top_left.y + height,
        }
    }

    /// Bounding box of a circle
    pub fn from_circle(center: Vec2, radius: f32) -> Self {
        Self {
            left: center.x - radius,
            right: center.x + radius,
            top: center.y - radius,
            bottom: center.y + radius,
        }
    }

    /// Strict overlap; touching edges do not count
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.right > other.left
            && self.bottom > other.top
            && self.left < other.right
            && self.top < other.bottom
    }
}

/// True iff the ball's bounding box overlaps the paddle
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> bool {
    let b = Bounds::from_circle(ball.pos, ball.radius);
    let p = Bounds::from_rect(paddle.pos, paddle.width, paddle.height);
    b.overlaps(&p)
}
