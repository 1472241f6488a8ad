//! Blocky score digits
//!
//! Each value 0..=11 has a 9x8 cell mask. 10 and 11 are the two-column glyphs
//! shown once a side closes in on or reaches the win score.

use glam::Vec2;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::sim::Side;

pub const GLYPH_COLUMNS: usize = 9;
pub const GLYPH_ROWS: usize = 8;
/// Highest value with a glyph
pub const MAX_GLYPH: u8 = 11;

/// One row per entry, most significant of the low 9 bits is the leftmost cell
pub type Glyph = [u16; GLYPH_ROWS];

#[rustfmt::skip]
const GLYPHS: [Glyph; MAX_GLYPH as usize + 1] = [
    // 0
    [0b000111100, 0b000100100, 0b000100100, 0b000100100,
     0b000100100, 0b000100100, 0b000100100, 0b000111100],
    // 1
    [0b000010000, 0b000010000, 0b000010000, 0b000010000,
     0b000010000, 0b000010000, 0b000010000, 0b000010000],
    // 2
    [0b000111100, 0b000000100, 0b000000100, 0b000111100,
     0b000100000, 0b000100000, 0b000100000, 0b000111100],
    // 3
    [0b000111100, 0b000000100, 0b000000100, 0b000111100,
     0b000000100, 0b000000100, 0b000000100, 0b000111100],
    // 4
    [0b000100100, 0b000100100, 0b000100100, 0b000111100,
     0b000000100, 0b000000100, 0b000000100, 0b000000100],
    // 5
    [0b000111100, 0b000100000, 0b000100000, 0b000111100,
     0b000000100, 0b000000100, 0b000000100, 0b000111100],
    // 6
    [0b000100000, 0b000100000, 0b000100000, 0b000111100,
     0b000100100, 0b000100100, 0b000100100, 0b000111100],
    // 7
    [0b000111100, 0b000000100, 0b000000100, 0b000000100,
     0b000000100, 0b000000100, 0b000000100, 0b000000100],
    // 8
    [0b000111100, 0b000100100, 0b000100100, 0b000111100,
     0b000100100, 0b000100100, 0b000100100, 0b000111100],
    // 9
    [0b000111100, 0b000100100, 0b000100100, 0b000111100,
     0b000000100, 0b000000100, 0b000000100, 0b000000100],
    // 10
    [0b001001111, 0b001001001, 0b001001001, 0b001001001,
     0b001001001, 0b001001001, 0b001001001, 0b001001111],
    // 11
    [0b000100100, 0b000100100, 0b000100100, 0b000100100,
     0b000100100, 0b000100100, 0b000100100, 0b000100100],
];

/// Row masks for `value`
pub fn glyph(value: u8) -> Result<&'static Glyph> {
    GLYPHS
        .get(value as usize)
        .ok_or(Error::GlyphOutOfRange(value))
}

/// `(row, column)` of every lit cell, row 0 at the top
pub fn filled_cells(value: u8) -> Result<Vec<(usize, usize)>> {
    let glyph = glyph(value)?;
    let mut cells = Vec::new();
    for (row, mask) in glyph.iter().enumerate() {
        for col in 0..GLYPH_COLUMNS {
            if mask & (1 << (GLYPH_COLUMNS - 1 - col)) != 0 {
                cells.push((row, col));
            }
        }
    }
    Ok(cells)
}

/// Places one side's glyph on the table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scoreboard {
    /// Center of the glyph grid
    pub anchor: Vec2,
    pub cell_size: f32,
}

impl Scoreboard {
    pub fn new(anchor: Vec2, cell_size: f32) -> Self {
        Self { anchor, cell_size }
    }

    /// Left score sits a quarter across the top edge, right score three quarters
    pub fn for_side(side: Side, config: &Config) -> Self {
        let fraction = match side {
            Side::Left => 0.25,
            Side::Right => 0.75,
        };
        Self::new(
            Vec2::new(config.width * fraction, config.height),
            config.score_cell_size,
        )
    }

    /// Center of the top-left cell; rows then step downward
    fn origin(&self) -> Vec2 {
        let grid_anchor = Vec2::new(
            GLYPH_COLUMNS as f32 / 2.0 * self.cell_size,
            GLYPH_ROWS as f32 / 2.0 * self.cell_size,
        );
        self.anchor - grid_anchor
    }

    /// Screen positions of the lit cells for `value`
    pub fn cell_centers(&self, value: u8) -> Result<Vec<Vec2>> {
        let origin = self.origin();
        Ok(filled_cells(value)?
            .into_iter()
            .map(|(row, col)| {
                Vec2::new(
                    origin.x + col as f32 * self.cell_size,
                    origin.y - row as f32 * self.cell_size,
                )
            })
            .collect())
    }
}
