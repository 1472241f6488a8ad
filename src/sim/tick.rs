//! Fixed timestep simulation tick
//!
//! Advances the match by one step: ball, then (in a match) win check and
//! paddles, then the ball's single contact for the step.

use super::collision::{resolve_ball, resolve_paddle_bounds};
use super::state::{GameEvent, GameState};

/// Advance the game state by one timestep
pub fn tick(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    state.time_ticks += 1;
    let mut events = Vec::new();

    state.ball.move_by(dt);

    if state.is_in_progress() {
        if let Some(winner) = state.winner() {
            events.push(state.game_over(winner));
        } else {
            for paddle in &mut state.paddles {
                paddle.update(dt);
            }
            events.extend(resolve_paddle_bounds(state));
        }
    }

    events.extend(resolve_ball(state));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::consts::SIM_DT;
    use crate::sim::ai;
    use crate::sim::state::{MatchState, Side, Wall, ZoneMode};
    use glam::Vec2;

    fn demo(seed: u64) -> GameState {
        GameState::new(Config::default(), seed).unwrap()
    }

    fn in_match(seed: u64) -> GameState {
        let mut state = demo(seed);
        state.new_game();
        state
    }

    /// Tick until `pred` matches an event or `max` ticks pass
    fn run_until(
        state: &mut GameState,
        max: usize,
        pred: impl Fn(&GameEvent) -> bool,
    ) -> Option<GameEvent> {
        for _ in 0..max {
            if let Some(e) = tick(state, SIM_DT).into_iter().find(|e| pred(e)) {
                return Some(e);
            }
        }
        None
    }

    #[test]
    fn test_ball_out_right_scores_player_one() {
        let mut state = in_match(100);
        state.ball.transform.position = Vec2::new(400.0, 250.0);
        state.ball.vel = Vec2::new(200.0, 0.0);
        // Keep the right paddle out of the ball's path
        state.paddle_mut(Side::Right).transform.position.y = 50.0;

        let event = run_until(&mut state, 300, |e| matches!(e, GameEvent::Scored { .. }));
        assert_eq!(
            event,
            Some(GameEvent::Scored {
                side: Side::Left,
                score: 1
            })
        );
        assert_eq!(state.score(Side::Right).value, 0);
        assert_eq!(state.ball.pos(), Vec2::new(400.0, 250.0));
        assert_ne!(state.ball.vel.x, 0.0);
        assert_ne!(state.ball.vel.y, 0.0);
        assert_eq!(state.match_state, MatchState::InProgress);
    }

    #[test]
    fn test_paddle_at_bottom_stops_and_clamps() {
        let mut state = in_match(101);
        let paddle = state.paddle_mut(Side::Left);
        paddle.transform.position.y = 0.0;
        paddle.move_down();

        let events = tick(&mut state, SIM_DT);
        assert!(events.contains(&GameEvent::PaddleClamped {
            side: Side::Left,
            wall: Wall::Bottom
        }));
        let paddle = state.paddle(Side::Left);
        assert_eq!(paddle.vel, 0.0);
        assert_eq!(paddle.pos().y, paddle.min_y());
    }

    #[test]
    fn test_demo_left_wall_bounces_without_scoring() {
        let mut state = demo(102);
        state.ball.transform.position = Vec2::new(30.0, 250.0);
        state.ball.vel = Vec2::new(-200.0, 0.0);

        let event = run_until(&mut state, 60, |e| matches!(e, GameEvent::WallBounce { .. }));
        assert_eq!(event, Some(GameEvent::WallBounce { wall: Wall::Left }));
        assert!(state.ball.vel.x > 0.0);
        assert_eq!(state.score(Side::Left).value, 0);
        assert_eq!(state.score(Side::Right).value, 0);
        assert_eq!(state.match_state, MatchState::DemoMode);
    }

    #[test]
    fn test_player_two_reaching_win_score_ends_match() {
        let mut state = in_match(103);
        state.scores[Side::Right.index()].value = 10;
        state.ball.transform.position = Vec2::new(-50.0, 250.0);
        state.ball.vel = Vec2::new(-200.0, 0.0);

        let events = tick(&mut state, SIM_DT);
        assert_eq!(
            events,
            vec![GameEvent::Scored {
                side: Side::Right,
                score: 11
            }]
        );

        let events = tick(&mut state, SIM_DT);
        assert_eq!(
            events[0],
            GameEvent::GameOver {
                winner: Side::Right,
                left: 0,
                right: 11
            }
        );
        assert_eq!(state.match_state, MatchState::DemoMode);
        assert_eq!(state.table.mode, ZoneMode::Wall);
        assert_eq!(state.score(Side::Right).value, 11);

        // Paddles no longer move
        let before = state.paddle(Side::Left).pos();
        state.paddle_mut(Side::Left).move_up();
        tick(&mut state, SIM_DT);
        assert_eq!(state.paddle(Side::Left).pos(), before);
    }

    #[test]
    fn test_eleven_points_triggers_game_over() {
        let mut state = in_match(104);
        for expected in 1..=11u8 {
            state.ball.transform.position = Vec2::new(848.0, 250.0);
            state.ball.vel = Vec2::new(200.0, 0.0);
            let events = tick(&mut state, SIM_DT);
            assert!(events.contains(&GameEvent::Scored {
                side: Side::Left,
                score: expected
            }));
        }
        assert_eq!(state.score(Side::Left).value, 11);

        let events = tick(&mut state, SIM_DT);
        assert!(matches!(
            events[0],
            GameEvent::GameOver {
                winner: Side::Left,
                ..
            }
        ));
    }

    #[test]
    fn test_demo_ball_stays_on_table() {
        let mut state = demo(105);
        for _ in 0..10_000 {
            for event in tick(&mut state, SIM_DT) {
                assert!(matches!(event, GameEvent::WallBounce { .. }));
            }
            let pos = state.ball.pos();
            assert!((-10.0..=810.0).contains(&pos.x), "x escaped: {pos}");
            assert!((-10.0..=510.0).contains(&pos.y), "y escaped: {pos}");
        }
        assert_eq!(state.score(Side::Left).value, 0);
        assert_eq!(state.score(Side::Right).value, 0);
    }

    #[test]
    fn test_new_game_resets_scores() {
        let mut state = in_match(106);
        state.scores = [Default::default(); 2];
        state.scores[0].value = 11;
        tick(&mut state, SIM_DT);
        assert_eq!(state.match_state, MatchState::DemoMode);

        state.new_game();
        assert_eq!(state.score(Side::Left).value, 0);
        assert_eq!(state.table.mode, ZoneMode::Goal);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = in_match(99999);
        let mut state2 = in_match(99999);

        for _ in 0..600 {
            for state in [&mut state1, &mut state2] {
                ai::steer(state, Side::Left);
                ai::steer(state, Side::Right);
            }
            let e1 = tick(&mut state1, SIM_DT);
            let e2 = tick(&mut state2, SIM_DT);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.ball.pos(), state2.ball.pos());
        assert_eq!(state1.ball.vel, state2.ball.vel);
        assert_eq!(state1.scores, state2.scores);
    }
}
