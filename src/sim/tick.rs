//! Fixed-rate simulation tick
//!
//! One call advances the ball by one frame's worth of velocity. Speeds are
//! per-tick values tuned for the 50 Hz frame driver; there is no delta time.

use serde::{Deserialize, Serialize};

use super::ball_paddle_collision;
use super::state::{GamePhase, GameState, Side};
use crate::consts::*;

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a paddle; `speed` is the speed after the rally speed-up
    PaddleHit { side: Side, speed: f32 },
    /// Ball bounced off the top or bottom edge
    WallBounce,
    /// Ball passed a paddle; `scorer` gets the point
    Scored { scorer: Side },
    /// Miss limit reached
    GameOver { winner: Side },
}

/// Advance the game state by one tick
///
/// Does nothing once the game is over. Returns the events of this tick in
/// the order they happened.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.is_over() {
        return events;
    }

    state.time_ticks += 1;

    // Integrate
    let vel = state.ball.vel;
    state.ball.pos += vel;

    // AI pulls its center toward the ball (damped, never snaps)
    let ai_center = state.ai.center_y();
    state.ai.pos.y += (state.ball.pos.y - ai_center) * AI_TRACKING_GAIN;

    // Top/bottom walls: flip vertical velocity, no clamping
    let ball = &mut state.ball;
    if ball.pos.y + ball.radius > state.field.height || ball.pos.y - ball.radius < 0.0 {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    // Only the paddle on the ball's half is tested
    let on_left = state.ball.pos.x < state.field.width / 2.0;
    let side = if on_left { Side::User } else { Side::Ai };
    if ball_paddle_collision(&state.ball, state.paddle(side)) {
        let speed = paddle_bounce(state, side, on_left);
        events.push(GameEvent::PaddleHit { side, speed });
    }

    // Scoring
    let ball = &state.ball;
    let scorer = if ball.pos.x - ball.radius < 0.0 {
        Some(Side::Ai)
    } else if ball.pos.x + ball.radius > state.field.width {
        Some(Side::User)
    } else {
        None
    };
    if let Some(scorer) = scorer {
        award_point(state, scorer);
        events.push(GameEvent::Scored { scorer });
    }

    if let Some(winner) = state.check_winner() {
        state.phase = GamePhase::GameOver { winner };
        events.push(GameEvent::GameOver { winner });
    }

    events
}

/// Redirect the ball off a paddle and speed it up; returns the new speed
///
/// The bounce angle depends on where the ball meets the paddle: dead center
/// sends it straight back, the edges deflect it up to `MAX_BOUNCE_ANGLE`.
fn paddle_bounce(state: &mut GameState, side: Side, on_left: bool) -> f32 {
    let paddle = state.paddle(side);
    let half_height = paddle.height / 2.0;
    let collide_point = (state.ball.pos.y - paddle.center_y()) / half_height;
    let angle = collide_point * MAX_BOUNCE_ANGLE;

    let direction = if on_left { 1.0 } else { -1.0 };
    let ball = &mut state.ball;
    ball.vel.x = direction * ball.speed * angle.cos();
    ball.vel.y = ball.speed * angle.sin();
    ball.speed += BALL_SPEED_INCREMENT;
    ball.speed
}

/// Charge a miss to the scorer's opponent and re-serve
fn award_point(state: &mut GameState, scorer: Side) {
    state.paddle_mut(scorer).score += 1;
    state.paddle_mut(scorer.opponent()).misses += 1;
    let field = state.field;
    state.ball.reset(&field);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_tick_integrates_ball() {
        let mut state = GameState::default();
        let events = tick(&mut state);
        assert!(events.is_empty());
        assert_eq!(state.ball.pos, Vec2::new(405.0, 305.0));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_center_hit_goes_straight_back() {
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(16.0, 300.0);
        state.ball.vel = Vec2::new(-1.0, 0.0);

        let events = tick(&mut state);
        assert_eq!(
            events,
            vec![GameEvent::PaddleHit {
                side: Side::User,
                speed: 5.5
            }]
        );
        assert_eq!(state.ball.vel, Vec2::new(5.0, 0.0));
        assert_eq!(state.ball.speed, 5.5);
    }

    #[test]
    fn test_ai_paddle_sends_ball_left() {
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(784.0, 300.0);
        state.ball.vel = Vec2::new(1.0, 0.0);

        let events = tick(&mut state);
        assert!(matches!(
            events[..],
            [GameEvent::PaddleHit { side: Side::Ai, .. }]
        ));
        assert_eq!(state.ball.vel, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_edge_hit_deflects_45_degrees() {
        let mut state = GameState::default();
        // Ends up level with the user paddle's top edge
        state.ball.pos = Vec2::new(16.0, 250.0);
        state.ball.vel = Vec2::new(-1.0, 0.0);

        tick(&mut state);
        let expected = 5.0 * std::f32::consts::FRAC_1_SQRT_2;
        assert!(approx(state.ball.vel.x, expected));
        assert!(approx(state.ball.vel.y, -expected));
    }

    #[test]
    fn test_user_miss_scores_for_ai() {
        let mut state = GameState::default();
        // Keep the user paddle out of the ball's way
        state.user.pos.y = 0.0;
        state.ball.pos = Vec2::new(-1.0, 300.0);

        let events = tick(&mut state);
        assert!(events.contains(&GameEvent::Scored { scorer: Side::Ai }));
        assert_eq!(state.ai.score, 1);
        assert_eq!(state.user.misses, 1);
        assert_eq!(state.user.score, 0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::new(-5.0, 5.0));
        assert_eq!(state.ball.speed, BALL_BASE_SPEED);
    }

    #[test]
    fn test_ai_miss_scores_for_user() {
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(792.0, 300.0);
        state.ball.vel = Vec2::new(5.0, 0.0);
        // AI paddle far away and it only closes 30% of the gap per tick
        state.ai.pos.y = -500.0;

        let events = tick(&mut state);
        assert_eq!(events, vec![GameEvent::Scored { scorer: Side::User }]);
        assert_eq!(state.user.score, 1);
        assert_eq!(state.ai.misses, 1);
        assert_eq!(state.ball.vel.x, -5.0);
    }

    #[test]
    fn test_wall_bounce_inverts_vertical() {
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(300.0, 5.0);
        state.ball.vel = Vec2::new(0.0, -5.0);

        let events = tick(&mut state);
        assert_eq!(events, vec![GameEvent::WallBounce]);
        assert_eq!(state.ball.pos.y, 0.0);
        assert_eq!(state.ball.vel.y, 5.0);
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(300.0, 588.0);
        state.ball.vel = Vec2::new(0.0, 5.0);

        tick(&mut state);
        assert_eq!(state.ball.vel.y, -5.0);
        // Overshoot is left alone
        assert_eq!(state.ball.pos.y, 593.0);
    }

    #[test]
    fn test_ai_tracks_proportionally() {
        let mut state = GameState::default();
        state.ai.pos.y = 350.0; // center at 400
        state.ball.pos = Vec2::new(500.0, 500.0);
        state.ball.vel = Vec2::new(1.0, 0.0);

        tick(&mut state);
        assert!(approx(state.ai.pos.y, 380.0));
    }

    #[test]
    fn test_third_miss_ends_game() {
        let mut state = GameState::default();
        state.user.misses = 2;
        state.user.pos.y = 0.0;
        state.ball.pos = Vec2::new(-1.0, 300.0);

        let events = tick(&mut state);
        assert_eq!(
            events.last(),
            Some(&GameEvent::GameOver { winner: Side::Ai })
        );
        assert_eq!(state.phase, GamePhase::GameOver { winner: Side::Ai });
        assert_eq!(state.user.misses, 3);

        // Frozen until restart
        let ball_pos = state.ball.pos;
        let ai_y = state.ai.pos.y;
        let ticks = state.time_ticks;
        for _ in 0..10 {
            assert!(tick(&mut state).is_empty());
        }
        assert_eq!(state.ball.pos, ball_pos);
        assert_eq!(state.ai.pos.y, ai_y);
        assert_eq!(state.ai.score, 1);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_user_wins_on_ai_third_miss() {
        let mut state = GameState::default();
        state.ai.misses = 2;
        state.ai.pos.y = -500.0;
        state.ball.pos = Vec2::new(792.0, 300.0);
        state.ball.vel = Vec2::new(5.0, 0.0);

        tick(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver { winner: Side::User });
    }

    #[test]
    fn test_fast_ball_tunnels_past_paddle() {
        // Known limitation: only the overlap at the end of the tick is tested
        let mut state = GameState::default();
        state.ball.pos = Vec2::new(30.0, 300.0);
        state.ball.vel = Vec2::new(-40.0, 0.0);

        let events = tick(&mut state);
        assert_eq!(events, vec![GameEvent::Scored { scorer: Side::Ai }]);
    }

    proptest! {
        #[test]
        fn prop_speed_only_drops_on_reset(
            x in 50.0f32..750.0,
            y in 50.0f32..550.0,
            vx in prop_oneof![-8.0f32..-1.0, 1.0f32..8.0],
            vy in -8.0f32..8.0,
            pointer in -100.0f32..700.0,
        ) {
            let mut state = GameState::default();
            state.ball.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(vx, vy);
            state.user.pos.y = pointer;

            for _ in 0..3000 {
                let speed = state.ball.speed;
                let scores = (state.user.score, state.ai.score);
                let events = tick(&mut state);
                let scored = events.iter().any(|e| matches!(e, GameEvent::Scored { .. }));

                if scored {
                    prop_assert_eq!(state.ball.speed, BALL_BASE_SPEED);
                } else {
                    prop_assert!(state.ball.speed >= speed);
                }
                prop_assert!(state.user.score >= scores.0);
                prop_assert!(state.ai.score >= scores.1);
                prop_assert!(state.user.misses <= MAX_MISSES);
                prop_assert!(state.ai.misses <= MAX_MISSES);
                prop_assert_eq!(
                    state.is_over(),
                    state.user.misses == MAX_MISSES || state.ai.misses == MAX_MISSES
                );
            }
        }
    }
}
