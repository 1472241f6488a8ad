//! Game loop driver
//!
//! Owns the single `GameState` and advances it at a fixed rate from whatever
//! frame deltas the platform delivers, draining queued input before each tick
//! and handing the result to a `Renderer`.

use crate::config::Config;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::error::Result;
use crate::render::{Renderer, render};
use crate::sim::{GameEvent, GameState, InputQueue, KeyEvent, Side, ai, tick};

/// Who moves a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Controller {
    /// Key events only
    #[default]
    Keyboard,
    /// Steered toward the ball every tick
    Computer,
}

/// Fixed timestep loop around the simulation
#[derive(Debug)]
pub struct GameLoop {
    state: GameState,
    input: InputQueue,
    controllers: [Controller; 2],
    accumulator: f32,
    paused: bool,
    quit: bool,
}

impl GameLoop {
    pub fn new(config: Config, seed: u64) -> Result<Self> {
        let state = GameState::new(config, seed)?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(Self {
            state,
            input: InputQueue::new(),
            controllers: [Controller::Keyboard; 2],
            accumulator: 0.0,
            paused: false,
            quit: false,
        })
    }

    pub fn with_controller(mut self, side: Side, controller: Controller) -> Self {
        self.controllers[side.index()] = controller;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Queue a key event; applied at the start of the next tick
    pub fn push_key(&mut self, event: KeyEvent) {
        self.input.push(event);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply queued input without advancing time
    fn drain_input(&mut self) -> Vec<GameEvent> {
        let (events, quit) = self.input.drain_into(&mut self.state);
        if quit && !self.quit {
            log::info!("Quit requested");
            self.quit = true;
        }
        events
    }

    /// Run exactly one fixed tick
    pub fn step(&mut self) -> Vec<GameEvent> {
        let mut events = self.drain_input();

        if self.state.is_in_progress() {
            for side in Side::BOTH {
                if self.controllers[side.index()] == Controller::Computer {
                    ai::steer(&mut self.state, side);
                }
            }
        }

        events.extend(tick(&mut self.state, SIM_DT));
        events
    }

    /// Advance by a frame's worth of real time in fixed substeps.
    ///
    /// While paused, input is still applied but no time passes. Non-finite
    /// deltas count as zero.
    pub fn update(&mut self, frame_dt: f32) -> Vec<GameEvent> {
        if self.paused || self.quit {
            return self.drain_input();
        }

        if frame_dt.is_finite() {
            self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);
        } else {
            log::warn!("Ignoring non-finite frame delta {frame_dt}");
        }

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS && !self.quit {
            events.extend(self.step());
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        events
    }

    /// Update, then draw the resulting state
    pub fn frame<R: Renderer + ?Sized>(
        &mut self,
        frame_dt: f32,
        renderer: &mut R,
    ) -> Result<Vec<GameEvent>> {
        let events = self.update(frame_dt);
        render(&self.state, renderer)?;
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;
    use crate::sim::{Key, MatchState};
    use glam::Vec2;

    #[derive(Default)]
    struct CountingRenderer {
        frames: usize,
    }

    impl Renderer for CountingRenderer {
        fn clear_frame(&mut self) {
            self.frames += 1;
        }
        fn draw_rectangle(&mut self, _: Vec2, _: Vec2, _: Color) {}
        fn draw_line_segment(&mut self, _: Vec2, _: Vec2, _: f32, _: Color) {}
    }

    fn game() -> GameLoop {
        GameLoop::new(Config::default(), 77).unwrap()
    }

    #[test]
    fn test_invalid_config() {
        let config = Config {
            paddle_speed: 0.0,
            ..Default::default()
        };
        assert!(GameLoop::new(config, 1).is_err());
    }

    #[test]
    fn test_fixed_substeps() {
        let mut game = game();
        game.update(SIM_DT);
        assert_eq!(game.state().time_ticks, 1);

        // Half a step accumulates without ticking
        game.update(SIM_DT / 2.0);
        assert_eq!(game.state().time_ticks, 1);

        // Long frames are capped
        game.update(5.0);
        let ticks = game.state().time_ticks;
        assert!((6..=8).contains(&ticks), "ticks {ticks}");
    }

    #[test]
    fn test_start_key_applied_on_next_tick() {
        let mut game = game();
        game.push_key(KeyEvent::Down(Key::Start));
        assert_eq!(game.state().match_state, MatchState::DemoMode);

        let events = game.step();
        assert_eq!(events[0], GameEvent::NewGame);
        assert_eq!(game.state().match_state, MatchState::InProgress);
    }

    #[test]
    fn test_pause_freezes_time() {
        let mut game = game();
        game.toggle_pause();
        assert!(game.is_paused());

        game.push_key(KeyEvent::Down(Key::Start));
        game.update(0.05);
        assert_eq!(game.state().time_ticks, 0);
        // Input is still applied
        assert!(game.state().is_in_progress());
        assert_eq!(game.state().ball.pos(), Vec2::new(400.0, 250.0));

        game.toggle_pause();
        game.update(SIM_DT);
        assert_eq!(game.state().time_ticks, 1);
    }

    #[test]
    fn test_quit_stops_ticking() {
        let mut game = game();
        game.push_key(KeyEvent::Down(Key::Quit));
        game.update(0.1);
        assert!(game.should_quit());
        assert_eq!(game.state().time_ticks, 1);
        game.update(0.1);
        assert_eq!(game.state().time_ticks, 1);
        assert!(game.accumulator < MAX_FRAME_DT);
    }

    #[test]
    fn test_non_finite_frame_ignored() {
        let mut game = game();
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            game.update(bad);
        }
        assert_eq!(game.state().time_ticks, 0);

        for _ in 0..10 {
            game.update(SIM_DT);
        }
        assert_eq!(game.state().time_ticks, 10);
    }

    #[test]
    fn test_computer_controller_moves_paddle() {
        let mut game = game().with_controller(Side::Right, Controller::Computer);
        game.push_key(KeyEvent::Down(Key::Start));
        game.step();
        game.state_mut().ball.transform.position = Vec2::new(400.0, 450.0);
        game.state_mut().ball.vel = Vec2::new(10.0, 0.0);
        let before = game.state().paddle(Side::Right).pos().y;
        game.step();
        assert!(game.state().paddle(Side::Right).pos().y > before);
        // Keyboard side stays put
        assert_eq!(game.state().paddle(Side::Left).pos().y, 250.0);
    }

    #[test]
    fn test_frame_renders_once() {
        let mut game = game();
        let mut renderer = CountingRenderer::default();
        game.frame(SIM_DT, &mut renderer).unwrap();
        game.frame(SIM_DT, &mut renderer).unwrap();
        assert_eq!(renderer.frames, 2);
    }
}
