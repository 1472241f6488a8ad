//! Computer-controlled paddle
//!
//! Chases the ball's height using the same controls a player has.

use super::state::{GameState, Side};

/// How far the ball may sit from the paddle center before it reacts
pub const DEAD_ZONE: f32 = 10.0;

/// Steer `side`'s paddle toward the ball's y
pub fn steer(state: &mut GameState, side: Side) {
    let target = state.ball.pos().y;
    let paddle = state.paddle_mut(side);
    let offset = target - paddle.pos().y;

    if offset > DEAD_ZONE {
        paddle.move_up();
    } else if offset < -DEAD_ZONE {
        paddle.move_down();
    } else {
        paddle.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_steer_follows_ball() {
        let mut state = GameState::new(Config::default(), 9).unwrap();
        state.new_game();

        state.ball.transform.position.y = 400.0;
        steer(&mut state, Side::Right);
        assert!(state.paddle(Side::Right).vel > 0.0);

        state.ball.transform.position.y = 100.0;
        steer(&mut state, Side::Right);
        assert!(state.paddle(Side::Right).vel < 0.0);

        state.ball.transform.position.y = 255.0;
        steer(&mut state, Side::Right);
        assert_eq!(state.paddle(Side::Right).vel, 0.0);

        // Other paddle untouched
        assert_eq!(state.paddle(Side::Left).vel, 0.0);
    }
}
