//! REVERSI Core - Rules engine for the 8x8 disc-flipping game
//!
//! This crate provides the authoritative game state for Reversi/Othello:
//! - Board geometry (8x8 grid, compass directions)
//! - Disc colors and in-place flipping
//! - Move legality and the 8-direction capture scan
//! - Turn-termination detection
//!
//! The engine is a synchronous state machine: an external driver discovers
//! legal plays with [`Board::valid_moves`], commits one with
//! [`Board::place_piece`], and alternates colors until [`Board::is_over`].

pub mod board;
pub mod piece;
pub mod error;
pub mod game;

// Re-exports for convenient access
pub use board::{positions, Pos, BOARD_SIZE, DIRECTIONS};
pub use piece::{Color, Piece};
pub use error::GameError;
pub use game::Board;
