//! Board state, move legality, and the capture scan

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{positions, Pos, BOARD_SIZE, DIRECTIONS};
use crate::error::GameError;
use crate::piece::{Color, Piece};

type Grid = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

// ============================================================================
// BOARD
// ============================================================================

/// Authoritative game state: an 8x8 grid where each cell is empty or
/// holds exactly one owned disc.
///
/// All queries are pure; [`Board::place_piece`] is the only mutating
/// operation and it either fully succeeds (placement plus all resulting
/// flips) or fails before touching the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
}

impl Board {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a board with the standard opening position: black discs on
    /// (3,4) and (4,3), white discs on (3,3) and (4,4).
    pub fn new() -> Self {
        let mut grid: Grid = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        grid[3][3] = Some(Piece::new(Color::White));
        grid[3][4] = Some(Piece::new(Color::Black));
        grid[4][3] = Some(Piece::new(Color::Black));
        grid[4][4] = Some(Piece::new(Color::White));
        Self { grid }
    }

    /// Build a board from explicit disc placements.
    ///
    /// Rejects off-grid coordinates and repeated cells; a cell owns at
    /// most one disc.
    pub fn from_setup(discs: &[(Pos, Color)]) -> Result<Self, GameError> {
        let mut grid: Grid = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for &(pos, color) in discs {
            if !pos.is_valid() {
                return Err(GameError::OutOfBounds(pos));
            }
            let cell = &mut grid[pos.x as usize][pos.y as usize];
            if cell.is_some() {
                return Err(GameError::IllegalMove(pos));
            }
            *cell = Some(Piece::new(color));
        }
        Ok(Self { grid })
    }

    // ========================================================================
    // STATE QUERIES
    // ========================================================================

    /// Get the disc at a position, or `None` for an empty cell
    pub fn get_piece(&self, pos: Pos) -> Result<Option<&Piece>, GameError> {
        if !pos.is_valid() {
            return Err(GameError::OutOfBounds(pos));
        }
        Ok(self.grid[pos.x as usize][pos.y as usize].as_ref())
    }

    /// Check if a position lies on the board
    pub fn is_valid_pos(&self, pos: Pos) -> bool {
        pos.is_valid()
    }

    pub fn is_occupied(&self, pos: Pos) -> Result<bool, GameError> {
        Ok(self.get_piece(pos)?.is_some())
    }

    /// True iff the cell holds a disc of `color`. Empty cells and
    /// off-grid positions are simply not mine.
    pub fn is_mine(&self, pos: Pos, color: Color) -> bool {
        self.color_at(pos) == Some(color)
    }

    pub fn is_full(&self) -> bool {
        self.slots().all(|slot| slot.is_some())
    }

    /// Iterate the 64 cell contents in [`positions`] order
    pub fn slots(&self) -> impl Iterator<Item = Option<&Piece>> + '_ {
        positions().map(|pos| self.grid[pos.x as usize][pos.y as usize].as_ref())
    }

    /// Iterate occupied cells in [`positions`] order
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, &Piece)> + '_ {
        positions().filter_map(|pos| {
            self.grid[pos.x as usize][pos.y as usize]
                .as_ref()
                .map(|piece| (pos, piece))
        })
    }

    pub fn count_occupied(&self) -> usize {
        self.slots().filter(Option::is_some).count()
    }

    /// Number of discs currently showing `color`
    pub fn count_of(&self, color: Color) -> usize {
        self.pieces().filter(|(_, piece)| piece.color() == color).count()
    }

    /// Majority color once the game is over; `None` while the game is
    /// ongoing or on an equal disc count.
    pub fn winner(&self) -> Option<Color> {
        if !self.is_over() {
            return None;
        }
        let black = self.count_of(Color::Black);
        let white = self.count_of(Color::White);
        match black.cmp(&white) {
            Ordering::Greater => Some(Color::Black),
            Ordering::Less => Some(Color::White),
            Ordering::Equal => None,
        }
    }

    /// Color at a position; `None` for empty cells and off-grid
    /// positions alike (the scan treats both as a broken run).
    fn color_at(&self, pos: Pos) -> Option<Color> {
        if !pos.is_valid() {
            return None;
        }
        self.grid[pos.x as usize][pos.y as usize].map(|piece| piece.color())
    }

    // ========================================================================
    // MOVE LEGALITY AND CAPTURE
    // ========================================================================

    /// Walk from the immediate neighbor of `origin` along `dir`,
    /// accumulating consecutive opponent discs.
    ///
    /// The run is a capture only when it is closed by an own-color disc:
    /// leaving the grid or reaching an empty cell discards it, and an
    /// own-color disc adjacent to `origin` closes nothing.
    fn captured_in_direction(&self, origin: Pos, color: Color, dir: (i8, i8)) -> Option<Vec<Pos>> {
        let mut run = Vec::new();
        let mut current = origin.offset(dir);

        // The longest possible walk is the grid diagonal
        for _ in 0..BOARD_SIZE {
            match self.color_at(current) {
                None => return None,
                Some(c) if c == color => {
                    return if run.is_empty() { None } else { Some(run) };
                }
                Some(_) => {
                    run.push(current);
                    current = current.offset(dir);
                }
            }
        }
        None
    }

    /// A move is legal on an empty on-board cell from which at least one
    /// of the 8 directions captures. Off-grid positions are not legal
    /// moves rather than errors.
    pub fn valid_move(&self, pos: Pos, color: Color) -> bool {
        if !pos.is_valid() || self.color_at(pos).is_some() {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&dir| self.captured_in_direction(pos, color, dir).is_some())
    }

    /// All legal moves for `color`, in [`positions`] order.
    ///
    /// Pure: repeated calls without an intervening [`Board::place_piece`]
    /// return identical vectors.
    pub fn valid_moves(&self, color: Color) -> Vec<Pos> {
        positions().filter(|&pos| self.valid_move(pos, color)).collect()
    }

    pub fn has_move(&self, color: Color) -> bool {
        positions().any(|pos| self.valid_move(pos, color))
    }

    /// The game is over when neither color has a legal move. A full grid
    /// is one such state, but not the only one; a single stuck color is
    /// not the end (it passes in the surrounding turn protocol).
    pub fn is_over(&self) -> bool {
        !self.has_move(Color::Black) && !self.has_move(Color::White)
    }

    // ========================================================================
    // PLACEMENT
    // ========================================================================

    /// Place a disc for `color` at `pos` and flip every captured run.
    ///
    /// Legality is established before any mutation, so an `Err` leaves
    /// the board unchanged. Returns the number of discs flipped; runs
    /// from different directions are disjoint, so each captured disc
    /// flips exactly once.
    pub fn place_piece(&mut self, pos: Pos, color: Color) -> Result<usize, GameError> {
        if !pos.is_valid() {
            return Err(GameError::OutOfBounds(pos));
        }
        if !self.valid_move(pos, color) {
            return Err(GameError::IllegalMove(pos));
        }

        let captured: Vec<Pos> = DIRECTIONS
            .iter()
            .filter_map(|&dir| self.captured_in_direction(pos, color, dir))
            .flatten()
            .collect();

        self.grid[pos.x as usize][pos.y as usize] = Some(Piece::new(color));
        for &flip in &captured {
            self.grid[flip.x as usize][flip.y as usize]
                .as_mut()
                .expect("captured cell holds a disc")
                .flip();
        }

        debug!(x = pos.x, y = pos.y, %color, flipped = captured.len(), "placed disc");

        Ok(captured.len())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// RENDERING
// ============================================================================

impl fmt::Display for Board {
    /// Textual dump with coordinate headers; rows are x, columns are y.
    /// Presentation only, but the glyphs encode color unambiguously.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for y in 0..BOARD_SIZE {
            write!(f, " {}", y)?;
        }
        writeln!(f)?;
        for x in 0..BOARD_SIZE {
            write!(f, "{}", x)?;
            for y in 0..BOARD_SIZE {
                match &self.grid[x as usize][y as usize] {
                    Some(piece) => write!(f, " {}", piece.glyph())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
