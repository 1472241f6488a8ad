//! Pongy - a two-paddle Pong simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, match state)
//! - `driver`: Fixed timestep game loop around the simulation
//! - `render`: Renderer seam and per-frame draw routine
//! - `scoreboard`: Static digit glyphs for the score display
//! - `config`: Immutable game configuration

pub mod config;
pub mod driver;
pub mod error;
pub mod render;
pub mod scoreboard;
pub mod sim;

pub use config::Config;
pub use driver::{Controller, GameLoop};
pub use error::{Error, Result};
pub use render::{Color, Renderer, Transform};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta the driver will accumulate
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Table defaults
    pub const TABLE_WIDTH: f32 = 800.0;
    pub const TABLE_HEIGHT: f32 = 500.0;
    /// Area behind each paddle where the ball is out of play
    pub const GUTTER_WIDTH: f32 = 50.0;
    pub const BOUNDARY_THICKNESS: f32 = 10.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 8.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const PADDLE_SPEED: f32 = 450.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 8.0;
    /// Serve speed ranges in px/s (half-open, like `randrange`)
    pub const SERVE_VX_MIN: u32 = 150;
    pub const SERVE_VX_MAX: u32 = 250;
    pub const SERVE_VY_MIN: u32 = 50;
    pub const SERVE_VY_MAX: u32 = 150;

    /// First side to reach this wins
    pub const WIN_SCORE: u8 = 11;

    /// Scoreboard cell size in pixels
    pub const SCORE_CELL_SIZE: f32 = 6.0;
}
