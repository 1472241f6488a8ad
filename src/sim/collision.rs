//! Collision detection and response
//!
//! At most one ball contact is resolved per tick, picked in a fixed priority
//! order. Fast balls can tunnel through thin colliders between ticks; nothing
//! here tries to catch that.

use super::aabb::Aabb;
use super::state::{GameEvent, GameState, MatchState, Side, Wall};

/// What the ball is touching this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallContact {
    /// Ball reached a scoring zone; `scorer` gets the point
    Goal { scorer: Side },
    /// Ball touches a paddle
    Paddle(Side),
    /// Ball touches a boundary acting as a wall
    Wall(Wall),
}

/// Highest-priority contact for the ball, if any.
///
/// In a match: right goal, left goal, paddles, then top/bottom.
/// In demo mode: left/right walls, then top/bottom.
pub fn detect_ball_contact(state: &GameState) -> Option<BallContact> {
    let ball = state.ball.aabb();
    let table = &state.table;

    match state.match_state {
        MatchState::InProgress => {
            if ball.overlaps(&table.right) {
                return Some(BallContact::Goal { scorer: Side::Left });
            }
            if ball.overlaps(&table.left) {
                return Some(BallContact::Goal { scorer: Side::Right });
            }
            for side in Side::BOTH {
                if ball.overlaps(&state.paddle(side).aabb()) {
                    return Some(BallContact::Paddle(side));
                }
            }
        }
        MatchState::DemoMode => {
            for wall in [Wall::Left, Wall::Right] {
                if ball.overlaps(table.zone(wall)) {
                    return Some(BallContact::Wall(wall));
                }
            }
        }
    }

    [Wall::Top, Wall::Bottom]
        .into_iter()
        .find(|wall| ball.overlaps(table.zone(*wall)))
        .map(BallContact::Wall)
}

/// Detect and apply the tick's ball contact
pub fn resolve_ball(state: &mut GameState) -> Option<GameEvent> {
    let contact = detect_ball_contact(state)?;

    let event = match contact {
        BallContact::Goal { scorer } => {
            let score = &mut state.scores[scorer.index()];
            score.increment();
            let score = score.value;
            log::debug!("{:?} scores ({})", scorer, score);
            state.serve();
            GameEvent::Scored {
                side: scorer,
                score,
            }
        }
        BallContact::Paddle(side) => {
            let paddle = state.paddle(side).aabb();
            state.ball.bounce_x();
            push_out_x(state, &paddle);
            GameEvent::PaddleHit { side }
        }
        BallContact::Wall(wall) => {
            let zone = *state.table.zone(wall);
            match wall {
                Wall::Top | Wall::Bottom => {
                    state.ball.bounce_y();
                    push_out_y(state, &zone);
                }
                Wall::Left | Wall::Right => {
                    state.ball.bounce_x();
                    push_out_x(state, &zone);
                }
            }
            GameEvent::WallBounce { wall }
        }
    };

    Some(event)
}

/// Put the ball flush against the side of `other` it is on
fn push_out_x(state: &mut GameState, other: &Aabb) {
    let half = state.ball.size / 2.0;
    let pos = &mut state.ball.transform.position;
    pos.x = if pos.x < other.center.x {
        other.min().x - half
    } else {
        other.max().x + half
    };
}

fn push_out_y(state: &mut GameState, other: &Aabb) {
    let half = state.ball.size / 2.0;
    let pos = &mut state.ball.transform.position;
    pos.y = if pos.y < other.center.y {
        other.min().y - half
    } else {
        other.max().y + half
    };
}

/// Stop paddles that ran into the top or bottom and clamp them onto the table
pub fn resolve_paddle_bounds(state: &mut GameState) -> Vec<GameEvent> {
    let height = state.table.height;
    let (top, bottom) = (state.table.top, state.table.bottom);
    let mut events = Vec::new();

    for paddle in &mut state.paddles {
        let aabb = paddle.aabb();
        let (wall, y) = if aabb.overlaps(&top) {
            (Wall::Top, paddle.max_y(height))
        } else if aabb.overlaps(&bottom) {
            (Wall::Bottom, paddle.min_y())
        } else {
            continue;
        };

        // A clamped paddle keeps touching its wall; only report real moves
        let moved = paddle.vel != 0.0 || paddle.transform.position.y != y;
        paddle.stop();
        paddle.transform.position.y = y;
        if moved {
            events.push(GameEvent::PaddleClamped {
                side: paddle.side,
                wall,
            });
        }
    }

    events
}
