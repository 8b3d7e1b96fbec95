//! Disc colors and tokens

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Disc color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Black => "black",
            Color::White => "white",
        })
    }
}

impl FromStr for Color {
    type Err = GameError;

    /// Only the two lowercase tokens are recognized
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            other => Err(GameError::InvalidColor(other.to_string())),
        }
    }
}

/// A disc on the board
///
/// Created only when a move is committed; never removed. The color
/// changes via [`Piece::flip`] when the disc is captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    color: Color,
}

impl Piece {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Invert the disc's color in place. Flipping twice is the identity.
    pub fn flip(&mut self) {
        self.color = self.color.opponent();
    }

    /// Single-character rendering, one glyph per color
    pub fn glyph(&self) -> char {
        match self.color {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
