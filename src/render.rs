//! Rendering seam
//!
//! The simulation holds no rendering state. Each frame the driver hands the
//! current `GameState` to `render`, which issues primitive draw calls on
//! whatever `Renderer` the platform provides.

use glam::Vec2;
use serde::Serialize;

use crate::error::Result;
use crate::scoreboard::Scoreboard;
use crate::sim::{GameState, MatchState, Side};

/// RGBA color, components in 0.0..=1.0
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

/// Width of the table's center line
pub const CENTER_LINE_WIDTH: f32 = 2.0;

/// Position, rotation and color shared by every drawable entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub position: Vec2,
    /// Rotation in radians about `position`
    pub rotation: f32,
    pub color: Color,
}

impl Transform {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            rotation: 0.0,
            color: WHITE,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec2::ZERO)
    }
}

/// The closed set of shapes the game draws
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle centered on the transform
    Rect { half_extents: Vec2 },
    /// Segment between two points relative to the transform
    Line { from: Vec2, to: Vec2, width: f32 },
}

/// Drawing backend provided by the platform
pub trait Renderer {
    /// Clear the frame before drawing
    fn clear_frame(&mut self);

    /// Draw a filled axis-aligned rectangle
    fn draw_rectangle(&mut self, center: Vec2, half_extents: Vec2, color: Color);

    /// Draw a line segment of the given width
    fn draw_line_segment(&mut self, p0: Vec2, p1: Vec2, width: f32, color: Color);
}

/// Draw one shape placed by `transform`.
///
/// Rectangles stay axis-aligned; rotation applies to line endpoints.
pub fn draw<R: Renderer + ?Sized>(transform: &Transform, shape: Shape, renderer: &mut R) {
    match shape {
        Shape::Rect { half_extents } => {
            renderer.draw_rectangle(transform.position, half_extents, transform.color);
        }
        Shape::Line { from, to, width } => {
            let rot = Vec2::from_angle(transform.rotation);
            let p0 = transform.position + rot.rotate(from);
            let p1 = transform.position + rot.rotate(to);
            renderer.draw_line_segment(p0, p1, width, transform.color);
        }
    }
}

/// Render a full frame: table, scores, ball, and paddles while a match is on
pub fn render<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) -> Result<()> {
    let config = state.config();
    renderer.clear_frame();

    // Center line
    let table = Transform::at(Vec2::new(config.width / 2.0, 0.0));
    draw(
        &table,
        Shape::Line {
            from: Vec2::ZERO,
            to: Vec2::new(0.0, config.height),
            width: CENTER_LINE_WIDTH,
        },
        renderer,
    );

    for side in [Side::Left, Side::Right] {
        let scoreboard = Scoreboard::for_side(side, config);
        let value = state.score(side).value;
        let half = Vec2::splat(scoreboard.cell_size / 2.0);
        for center in scoreboard.cell_centers(value)? {
            draw(&Transform::at(center), Shape::Rect { half_extents: half }, renderer);
        }
    }

    let ball = &state.ball;
    draw(
        &ball.transform,
        Shape::Rect {
            half_extents: Vec2::splat(ball.size / 2.0),
        },
        renderer,
    );

    if state.match_state == MatchState::InProgress {
        for paddle in &state.paddles {
            draw(
                &paddle.transform,
                Shape::Rect {
                    half_extents: paddle.size / 2.0,
                },
                renderer,
            );
        }
    }

    Ok(())
}
