//! Common types for Minesweeper: board errors and reveal results.

use crate::bitgrid::BitGridError;

/// Outcome of revealing a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealResult {
    /// The cell was not a mine, or had already been revealed.
    Safe,
    /// The first reveal of a mine cell.
    Mine,
}

/// Errors returned by Board and GameEngine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board size is zero or the mines leave no safe cell.
    InvalidConfiguration { size: usize, mines: usize },
    /// An explicit mine layout listed the same cell twice.
    DuplicateMine { row: usize, col: usize },
    /// Coordinate lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// The game already ended; no further reveals are processed.
    GameOver,
}

impl From<BitGridError> for BoardError {
    fn from(err: BitGridError) -> Self {
        match err {
            BitGridError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidConfiguration { size, mines } => write!(
                f,
                "Invalid configuration: {} mines do not fit a {}x{} board",
                mines, size, size
            ),
            BoardError::DuplicateMine { row, col } => {
                write!(f, "Mine at ({}, {}) listed more than once", row, col)
            }
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
            BoardError::GameOver => write!(f, "Game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
