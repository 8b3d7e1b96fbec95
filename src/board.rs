//! Grid geometry: positions, bounds, and the directional search basis

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board edge length (the grid is BOARD_SIZE x BOARD_SIZE)
pub const BOARD_SIZE: i8 = 8;

/// Grid coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i8,
    pub y: i8,
}

impl Pos {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Check if this position is on the board
    pub fn is_valid(&self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// One step along a direction vector
    pub fn offset(&self, (dx, dy): (i8, i8)) -> Pos {
        Pos::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction vectors (dx, dy) for the capture scan: the 8 compass
/// directions, every combination of -1/0/+1 except (0, 0)
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Enumerate all 64 positions in row-major order (x outer, y inner).
///
/// This order is fixed: [`crate::Board::valid_moves`] reports moves in it,
/// and [`crate::Board::slots`] walks cells in it.
pub fn positions() -> impl Iterator<Item = Pos> {
    (0..BOARD_SIZE).flat_map(|x| (0..BOARD_SIZE).map(move |y| Pos::new(x, y)))
}
