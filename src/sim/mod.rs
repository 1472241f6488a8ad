//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Single-threaded, every entity updated in a fixed order
//! - No rendering or platform dependencies

pub mod aabb;
pub mod ai;
pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use aabb::{Aabb, overlaps};
pub use collision::{BallContact, detect_ball_contact, resolve_ball, resolve_paddle_bounds};
pub use input::{InputOutcome, InputQueue, Key, KeyEvent, apply_key_event};
pub use state::{
    Ball, GameEvent, GameState, MatchState, Paddle, Score, Side, Snapshot, Table, Wall,
    ZoneMode,
};
pub use tick::tick;
