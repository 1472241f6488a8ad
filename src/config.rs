//! Game configuration
//!
//! Built once at startup and passed by reference into the game loop and
//! entity constructors. Loadable from JSON; omitted fields keep defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::scoreboard::MAX_GLYPH;

/// Immutable table, paddle and ball configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window caption
    pub caption: String,

    // === Table ===
    /// Table width in pixels
    pub width: f32,
    /// Table height in pixels
    pub height: f32,
    /// Distance from each table edge to its paddle; also how far the
    /// scoring zones sit beyond the table in game mode
    pub gutter_width: f32,
    /// Thickness of the boundary zones
    pub boundary_thickness: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle speed in px/s
    pub paddle_speed: f32,

    // === Ball ===
    /// Side length of the (square) ball
    pub ball_size: f32,

    // === Match ===
    /// Points needed to win a match
    pub win_score: u8,
    /// Pixel size of one scoreboard cell
    pub score_cell_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            caption: "Pongy".to_string(),

            width: TABLE_WIDTH,
            height: TABLE_HEIGHT,
            gutter_width: GUTTER_WIDTH,
            boundary_thickness: BOUNDARY_THICKNESS,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            ball_size: BALL_SIZE,

            win_score: WIN_SCORE,
            score_cell_size: SCORE_CELL_SIZE,
        }
    }
}

impl Config {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject configurations the simulation cannot run with. Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("score_cell_size", self.score_cell_size),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig { field, value });
            }
        }

        let non_negative = [
            ("gutter_width", self.gutter_width),
            ("boundary_thickness", self.boundary_thickness),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig { field, value });
            }
        }

        if self.paddle_height >= self.height {
            return Err(Error::InvalidConfig {
                field: "paddle_height",
                value: self.paddle_height,
            });
        }
        if self.gutter_width * 2.0 >= self.width {
            return Err(Error::InvalidConfig {
                field: "gutter_width",
                value: self.gutter_width,
            });
        }

        if self.win_score == 0 || self.win_score > MAX_GLYPH {
            return Err(Error::WinScoreOutOfRange(self.win_score));
        }

        Ok(())
    }

    /// Center of the table
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let config = Config {
            width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig { field: "width", .. })
        ));

        let config = Config {
            ball_size: -4.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig { field: "ball_size", .. })
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let config = Config {
            paddle_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig { field: "paddle_speed", .. })
        ));
    }

    #[test]
    fn test_rejects_paddle_taller_than_table() {
        let config = Config {
            paddle_height: 600.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_win_score_bounds() {
        for bad in [0, 12] {
            let config = Config {
                win_score: bad,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(Error::WinScoreOutOfRange(s)) if s == bad
            ));
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "width": 600, "win_score": 5 }"#).unwrap();
        assert_eq!(config.width, 600.0);
        assert_eq!(config.win_score, 5);
        assert_eq!(config.height, TABLE_HEIGHT);
        assert_eq!(config.caption, "Pongy");
    }

    #[test]
    fn test_json_validation_runs() {
        let result = Config::from_json(r#"{ "height": -1 }"#);
        assert!(matches!(
            result,
            Err(Error::InvalidConfig { field: "height", .. })
        ));

        assert!(matches!(Config::from_json("not json"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/pongy.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
