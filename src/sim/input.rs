//! Discrete key input
//!
//! Platforms push key events as they arrive; the driver drains the queue in
//! arrival order at the start of each tick. Since every event is applied in
//! order, the last event for a key wins.

use std::collections::VecDeque;

use super::state::{GameEvent, GameState, MatchState, Side};

/// The game's fixed key set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    P1Up,
    P1Down,
    P2Up,
    P2Down,
    Start,
    Quit,
}

impl Key {
    /// Paddle side and direction (+1 up, -1 down) for movement keys
    fn paddle(self) -> Option<(Side, i8)> {
        match self {
            Key::P1Up => Some((Side::Left, 1)),
            Key::P1Down => Some((Side::Left, -1)),
            Key::P2Up => Some((Side::Right, 1)),
            Key::P2Down => Some((Side::Right, -1)),
            Key::Start | Key::Quit => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

/// What applying an event asks of the caller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputOutcome {
    /// Nothing beyond state changes already made
    Handled,
    /// Event changed the match state
    Event(GameEvent),
    /// Player asked to quit
    Quit,
}

/// Apply one key event to the simulation.
///
/// Paddle keys only act while a match is in progress. Releasing either
/// direction key stops that paddle.
pub fn apply_key_event(state: &mut GameState, event: KeyEvent) -> InputOutcome {
    match event {
        KeyEvent::Down(Key::Quit) => InputOutcome::Quit,
        KeyEvent::Down(Key::Start) => {
            if state.match_state == MatchState::DemoMode {
                InputOutcome::Event(state.new_game())
            } else {
                InputOutcome::Handled
            }
        }
        KeyEvent::Down(key) => {
            match key.paddle() {
                Some((side, dir)) if state.is_in_progress() => {
                    let paddle = state.paddle_mut(side);
                    if dir > 0 {
                        paddle.move_up();
                    } else {
                        paddle.move_down();
                    }
                }
                _ => {}
            }
            InputOutcome::Handled
        }
        KeyEvent::Up(key) => {
            match key.paddle() {
                Some((side, _)) if state.is_in_progress() => state.paddle_mut(side).stop(),
                _ => {}
            }
            InputOutcome::Handled
        }
    }
}

/// FIFO of pending key events
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<KeyEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: KeyEvent) {
        self.pending.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Apply every pending event in arrival order.
    ///
    /// Returns the match events produced and whether quit was requested.
    /// Events after a quit are still applied.
    pub fn drain_into(&mut self, state: &mut GameState) -> (Vec<GameEvent>, bool) {
        let mut events = Vec::new();
        let mut quit = false;
        while let Some(event) = self.pending.pop_front() {
            match apply_key_event(state, event) {
                InputOutcome::Handled => {}
                InputOutcome::Event(e) => events.push(e),
                InputOutcome::Quit => quit = true,
            }
        }
        (events, quit)
    }
}
