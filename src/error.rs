//! Crate error type

use std::fmt;

/// Everything that can go wrong building or drawing a match
#[derive(Debug)]
pub enum Error {
    /// A dimension, size or speed in the configuration is unusable
    InvalidConfig { field: &'static str, value: f32 },
    /// Win score must fit the scoreboard glyph table
    WinScoreOutOfRange(u8),
    /// Scoreboard asked to draw a value it has no glyph for
    GlyphOutOfRange(u8),
    /// Configuration JSON could not be parsed
    Parse(serde_json::Error),
    /// Configuration file could not be read
    Io(std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig { field, value } => {
                write!(f, "invalid configuration: {field} = {value}")
            }
            Error::WinScoreOutOfRange(score) => {
                write!(f, "win score {score} outside 1..={}", crate::scoreboard::MAX_GLYPH)
            }
            Error::GlyphOutOfRange(value) => {
                write!(f, "no scoreboard glyph for {value}")
            }
            Error::Parse(e) => write!(f, "failed to parse configuration: {e}"),
            Error::Io(e) => write!(f, "failed to read configuration: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
