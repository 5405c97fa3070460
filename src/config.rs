use crate::common::BoardError;

pub const DEFAULT_SIZE: usize = 10;
pub const DEFAULT_MINES: usize = 10;
/// Largest board the terminal renderer can lay out.
pub const MAX_SIZE: usize = 26;

/// Dimensions of a single game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub mines: usize,
}

impl GameConfig {
    pub const fn new(size: usize, mines: usize) -> Self {
        Self { size, mines }
    }

    /// Total number of cells on the board, or `None` if `size²` overflows.
    pub fn cells(&self) -> Option<usize> {
        self.size.checked_mul(self.size)
    }

    /// Number of cells that must be revealed to win.
    pub fn safe_cells(&self) -> usize {
        self.cells().map_or(0, |cells| cells.saturating_sub(self.mines))
    }

    /// Rejects empty or overflowing boards and mine counts that leave no safe cell.
    pub fn validate(&self) -> Result<(), BoardError> {
        match self.cells() {
            Some(cells) if self.size > 0 && self.mines < cells => Ok(()),
            _ => Err(BoardError::InvalidConfiguration {
                size: self.size,
                mines: self.mines,
            }),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_MINES)
    }
}
