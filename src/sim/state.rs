//! Game state and core simulation types
//!
//! All state the simulation mutates lives here, owned by a single `GameState`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::config::Config;
use crate::consts::*;
use crate::error::Result;
use crate::render::Transform;

/// Which end of the table a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player one
    Left,
    /// Player two (or the computer)
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Match-level state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Ball bounces off all four edges, no paddles, no scoring
    DemoMode,
    /// Left/right edges score, paddles in play
    InProgress,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new match started
    NewGame,
    /// `side` scored and now has `score` points
    Scored { side: Side, score: u8 },
    /// A side reached the win score
    GameOver { winner: Side, left: u8, right: u8 },
    /// Ball bounced off a paddle
    PaddleHit { side: Side },
    /// Ball bounced off a boundary zone
    WallBounce { wall: Wall },
    /// Paddle ran into the top or bottom and was stopped
    PaddleClamped { side: Side, wall: Wall },
}

/// Boundary zones around the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
    Left,
    Right,
}

/// The ball
#[derive(Debug, Clone, Serialize)]
pub struct Ball {
    pub transform: Transform,
    /// Velocity in px/s
    pub vel: Vec2,
    /// Side length of the square ball
    pub size: f32,
}

impl Ball {
    pub fn new(center: Vec2, size: f32) -> Self {
        Self {
            transform: Transform::at(center),
            vel: Vec2::ZERO,
            size,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.transform.position
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos(), Vec2::splat(self.size / 2.0))
    }

    /// Integrate position. Bounds are the resolver's job.
    pub fn move_by(&mut self, dt: f32) {
        self.transform.position += self.vel * dt;
    }

    pub fn bounce_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn bounce_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Re-center and serve with a fresh random velocity
    pub fn reset<R: Rng>(&mut self, center: Vec2, rng: &mut R) {
        self.transform.position = center;
        let vx = rng.random_range(SERVE_VX_MIN..SERVE_VX_MAX) as f32;
        let vy = rng.random_range(SERVE_VY_MIN..SERVE_VY_MAX) as f32;
        self.vel = Vec2::new(vx * random_sign(rng), vy * random_sign(rng));
    }
}

fn random_sign<R: Rng>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// A player's paddle. x is fixed per side; only y moves.
#[derive(Debug, Clone, Serialize)]
pub struct Paddle {
    pub side: Side,
    pub transform: Transform,
    /// Vertical velocity: `speed`, `-speed` or zero
    pub vel: f32,
    pub speed: f32,
    /// Full width/height
    pub size: Vec2,
}

impl Paddle {
    /// Paddle at its home position: one gutter in from its edge, vertically centered
    pub fn new(side: Side, config: &Config) -> Self {
        let x = match side {
            Side::Left => config.gutter_width,
            Side::Right => config.width - config.gutter_width,
        };
        Self {
            side,
            transform: Transform::at(Vec2::new(x, config.height / 2.0)),
            vel: 0.0,
            speed: config.paddle_speed,
            size: Vec2::new(config.paddle_width, config.paddle_height),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.transform.position
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_size(self.pos(), self.size)
    }

    pub fn move_up(&mut self) {
        self.vel = self.speed;
    }

    pub fn move_down(&mut self) {
        self.vel = -self.speed;
    }

    pub fn stop(&mut self) {
        self.vel = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        self.transform.position.y += self.vel * dt;
    }

    /// Lowest center y that keeps the paddle on the table
    pub fn min_y(&self) -> f32 {
        self.size.y / 2.0
    }

    /// Highest center y that keeps the paddle on the table
    pub fn max_y(&self, table_height: f32) -> f32 {
        table_height - self.size.y / 2.0
    }
}

/// A side's points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub value: u8,
}

impl Score {
    /// Not clamped; the match checks for the win.
    pub fn increment(&mut self) {
        self.value += 1;
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// How the left and right zones treat the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ZoneMode {
    /// Flush with the table edge, ball bounces
    Wall,
    /// Pushed out past the gutter, ball entering scores
    Goal,
}

/// The table's four boundary zones
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub width: f32,
    pub height: f32,
    pub gutter_width: f32,
    pub thickness: f32,
    pub top: Aabb,
    pub bottom: Aabb,
    pub left: Aabb,
    pub right: Aabb,
    pub mode: ZoneMode,
}

impl Table {
    /// Table in wall (demo) mode
    pub fn new(config: &Config) -> Self {
        let (w, h, g, t) = (
            config.width,
            config.height,
            config.gutter_width,
            config.boundary_thickness,
        );
        // Top and bottom run past the gutters so an escaping ball still bounces
        let span = w / 2.0 + g + t;
        let mut table = Self {
            width: w,
            height: h,
            gutter_width: g,
            thickness: t,
            top: Aabb::new(Vec2::new(w / 2.0, h + t / 2.0), Vec2::new(span, t / 2.0)),
            bottom: Aabb::new(Vec2::new(w / 2.0, -t / 2.0), Vec2::new(span, t / 2.0)),
            left: Aabb::new(Vec2::ZERO, Vec2::ZERO),
            right: Aabb::new(Vec2::ZERO, Vec2::ZERO),
            mode: ZoneMode::Wall,
        };
        table.set_demo_mode();
        table
    }

    /// Left/right zones sit on the table edges
    pub fn set_demo_mode(&mut self) {
        self.place_side_zones(0.0);
        self.mode = ZoneMode::Wall;
    }

    /// Left/right zones move out by one gutter so the ball leaves the table first
    pub fn set_game_mode(&mut self) {
        self.place_side_zones(self.gutter_width);
        self.mode = ZoneMode::Goal;
    }

    fn place_side_zones(&mut self, offset: f32) {
        let half = Vec2::new(self.thickness / 2.0, self.height / 2.0);
        let y = self.height / 2.0;
        let edge = offset + self.thickness / 2.0;
        self.left = Aabb::new(Vec2::new(-edge, y), half);
        self.right = Aabb::new(Vec2::new(self.width + edge, y), half);
    }

    pub fn zone(&self, wall: Wall) -> &Aabb {
        match wall {
            Wall::Top => &self.top,
            Wall::Bottom => &self.bottom,
            Wall::Left => &self.left,
            Wall::Right => &self.right,
        }
    }
}

/// Serializable view of the entities at one tick
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub tick: u64,
    pub match_state: MatchState,
    pub table: &'a Table,
    pub ball: &'a Ball,
    pub paddles: &'a [Paddle; 2],
    pub scores: &'a [Score; 2],
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    config: Config,
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub match_state: MatchState,
    pub table: Table,
    pub ball: Ball,
    /// Indexed by `Side::index`
    pub paddles: [Paddle; 2],
    /// Indexed by `Side::index`
    pub scores: [Score; 2],
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Validate `config` and start in demo mode with the ball served
    pub fn new(config: Config, seed: u64) -> Result<Self> {
        config.validate()?;

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            match_state: MatchState::DemoMode,
            table: Table::new(&config),
            ball: Ball::new(config.center(), config.ball_size),
            paddles: [
                Paddle::new(Side::Left, &config),
                Paddle::new(Side::Right, &config),
            ],
            scores: [Score::default(); 2],
            time_ticks: 0,
            config,
        };
        state.serve();
        Ok(state)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn score(&self, side: Side) -> Score {
        self.scores[side.index()]
    }

    pub fn is_in_progress(&self) -> bool {
        self.match_state == MatchState::InProgress
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            tick: self.time_ticks,
            match_state: self.match_state,
            table: &self.table,
            ball: &self.ball,
            paddles: &self.paddles,
            scores: &self.scores,
        }
    }

    /// Ball back to the center with a fresh random velocity
    pub fn serve(&mut self) {
        let center = self.config.center();
        self.ball.reset(center, &mut self.rng);
        log::debug!("Serve {:?}", self.ball.vel);
    }

    /// Side that has reached the win score, if any
    pub fn winner(&self) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|side| self.score(*side).value >= self.config.win_score)
    }

    /// DemoMode -> InProgress
    pub fn new_game(&mut self) -> GameEvent {
        self.match_state = MatchState::InProgress;
        self.table.set_game_mode();
        for score in &mut self.scores {
            score.reset();
        }
        for side in Side::BOTH {
            self.paddles[side.index()] = Paddle::new(side, &self.config);
        }
        self.serve();
        log::info!("New game (seed {}, tick {})", self.seed, self.time_ticks);
        GameEvent::NewGame
    }

    /// InProgress -> DemoMode. Scores stay up until the next new game.
    pub fn game_over(&mut self, winner: Side) -> GameEvent {
        self.match_state = MatchState::DemoMode;
        self.table.set_demo_mode();
        for paddle in &mut self.paddles {
            paddle.stop();
        }
        self.serve();
        let (left, right) = (self.score(Side::Left).value, self.score(Side::Right).value);
        log::info!("Game over: {:?} wins {}-{}", winner, left, right);
        GameEvent::GameOver {
            winner,
            left,
            right,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_serve_never_zero(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut ball = Ball::new(Vec2::ZERO, 8.0);
            for _ in 0..8 {
                ball.reset(Vec2::ZERO, &mut rng);
                prop_assert!(ball.vel.x != 0.0);
                prop_assert!(ball.vel.y != 0.0);
            }
        }

        #[test]
        fn prop_double_bounce_identity(vx in -500.0f32..500.0, vy in -500.0f32..500.0) {
            let mut ball = Ball::new(Vec2::ZERO, 8.0);
            ball.vel = Vec2::new(vx, vy);
            ball.bounce_x();
            ball.bounce_x();
            ball.bounce_y();
            ball.bounce_y();
            prop_assert_eq!(ball.vel, Vec2::new(vx, vy));
        }
    }
}
