//! Minefield state: mine layout, revealed cells and the flood-fill reveal.

use alloc::vec::Vec;

use crate::bitgrid::BitGrid;
use crate::common::{BoardError, RevealResult};
use crate::config::GameConfig;
use rand::Rng;

/// Offsets of the eight cells surrounding a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// In-bounds cells surrounding (row, col) on a `size×size` board.
pub fn neighbors(size: usize, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < size && c < size).then_some((r, c))
    })
}

/// A square minefield. Mines are fixed at construction; revealed cells only grow.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    mines: BitGrid,
    revealed: BitGrid,
    mine_count: usize,
    mines_revealed: usize,
}

impl Board {
    /// Create a board with `mines` mines placed using the thread-local RNG.
    #[cfg(feature = "std")]
    pub fn new(size: usize, mines: usize) -> Result<Self, BoardError> {
        Self::with_rng(size, mines, &mut rand::rng())
    }

    /// Create a board, sampling mine positions from `rng`.
    ///
    /// Positions are drawn uniformly and redrawn on collision until exactly
    /// `mines` distinct cells are mined. The configuration is validated first,
    /// so the sampling always terminates.
    pub fn with_rng<R: Rng>(
        size: usize,
        mines: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        GameConfig::new(size, mines).validate()?;
        let mut grid = BitGrid::new(size);
        let mut placed = 0;
        while placed < mines {
            let r = rng.random_range(0..size);
            let c = rng.random_range(0..size);
            if grid.set(r, c)? {
                placed += 1;
            }
        }
        log::debug!("placed {} mines on a {}x{} board", mines, size, size);
        Ok(Self::from_layout(size, grid))
    }

    /// Create a board with mines at exactly the given coordinates.
    pub fn with_mines<I>(size: usize, mines: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        GameConfig::new(size, 0).validate()?;
        let mut grid = BitGrid::new(size);
        for (r, c) in mines {
            if !grid.set(r, c)? {
                return Err(BoardError::DuplicateMine { row: r, col: c });
            }
        }
        GameConfig::new(size, grid.count_ones()).validate()?;
        Ok(Self::from_layout(size, grid))
    }

    fn from_layout(size: usize, mines: BitGrid) -> Self {
        Board {
            size,
            mine_count: mines.count_ones(),
            mines,
            revealed: BitGrid::new(size),
            mines_revealed: 0,
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of mines on the board.
    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    /// Number of revealed cells, including a revealed mine.
    pub fn revealed_count(&self) -> usize {
        self.revealed.count_ones()
    }

    /// Safe cells still hidden.
    pub fn safe_cells_remaining(&self) -> usize {
        let safe_revealed = self.revealed_count() - self.mines_revealed;
        (self.size * self.size - self.mine_count) - safe_revealed
    }

    /// Returns `true` once every non-mine cell has been revealed.
    pub fn is_cleared(&self) -> bool {
        self.safe_cells_remaining() == 0
    }

    pub fn is_revealed(&self, row: usize, col: usize) -> bool {
        self.revealed.get(row, col).unwrap_or(false)
    }

    /// Returns `true` for a revealed mine. Hidden cells always report `false`.
    pub fn is_mine(&self, row: usize, col: usize) -> bool {
        self.is_revealed(row, col) && self.has_mine(row, col)
    }

    fn has_mine(&self, row: usize, col: usize) -> bool {
        self.mines.get(row, col).unwrap_or(false)
    }

    /// Number of mines among the eight cells around (row, col).
    ///
    /// The cell itself is not counted, so a mine cell reports only its
    /// neighbours. Cells past the edge contribute nothing.
    pub fn count_adjacent_mines(&self, row: usize, col: usize) -> usize {
        neighbors(self.size, row, col)
            .filter(|&(r, c)| self.has_mine(r, c))
            .count()
    }

    /// Reveal (row, col).
    ///
    /// Revealing an already revealed cell is a no-op that reports `Safe`. A
    /// hidden mine reports `Mine` and stops there. A hidden cell with no
    /// adjacent mines also reveals its whole zero region and the numbered
    /// cells bordering it.
    pub fn reveal(&mut self, row: usize, col: usize) -> Result<RevealResult, BoardError> {
        if !self.revealed.set(row, col)? {
            return Ok(RevealResult::Safe);
        }
        if self.has_mine(row, col) {
            self.mines_revealed += 1;
            log::debug!("revealed mine at ({}, {})", row, col);
            return Ok(RevealResult::Mine);
        }
        if self.count_adjacent_mines(row, col) == 0 {
            self.flood_from(row, col)?;
        }
        log::debug!(
            "revealed ({}, {}), {} cells open",
            row,
            col,
            self.revealed_count()
        );
        Ok(RevealResult::Safe)
    }

    /// Worklist flood fill from a revealed zero cell.
    fn flood_from(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let mut stack: Vec<(usize, usize)> = alloc::vec![(row, col)];
        while let Some((r, c)) = stack.pop() {
            // every neighbour of a zero cell is safe
            for (nr, nc) in neighbors(self.size, r, c) {
                if !self.revealed.set(nr, nc)? {
                    continue;
                }
                let count = self.count_adjacent_mines(nr, nc);
                log::trace!("flood opened ({}, {}), count {}", nr, nc, count);
                if count == 0 {
                    stack.push((nr, nc));
                }
            }
        }
        Ok(())
    }
}
