//! A square bit grid sized at runtime.
//!
//! Cells are packed row-major into a vector of unsigned words `T`, so a
//! `size×size` grid costs `size²` bits. The mine layout and the revealed
//! cells of a board are both stored this way.

use alloc::vec::Vec;
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bit grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitGridError {
    /// Row or column index is out of bounds [0..size).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitGridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A `size×size` grid of bits stored in words of type `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct BitGrid<T = u64>
where
    T: PrimInt + Unsigned + Zero,
{
    size: usize,
    words: Vec<T>,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    const WORD_BITS: usize = mem::size_of::<T>() * 8;

    /// Create an empty grid (all bits cleared).
    pub fn new(size: usize) -> Self {
        let cells = size * size;
        let len = cells.div_ceil(Self::WORD_BITS);
        BitGrid {
            size,
            words: alloc::vec![T::zero(); len],
        }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Returns true when (row, col) lies on the grid.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitGridError> {
        let (word, bit) = self.locate(row, col)?;
        Ok(((self.words[word] >> bit) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col). Returns `false` if it was already set.
    pub fn set(&mut self, row: usize, col: usize) -> Result<bool, BitGridError> {
        let (word, bit) = self.locate(row, col)?;
        let mask = T::one() << bit;
        let was_clear = (self.words[word] & mask).is_zero();
        self.words[word] = self.words[word] | mask;
        Ok(was_clear)
    }

    /// Clears the bit at (row, col).
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] = self.words[word] & !(T::one() << bit);
        Ok(())
    }

    /// Clears all bits.
    pub fn clear_all(&mut self) {
        self.words.iter_mut().for_each(|w| *w = T::zero());
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> Result<(usize, usize), BitGridError> {
        if !self.contains(row, col) {
            return Err(BitGridError::IndexOutOfBounds { row, col });
        }
        let idx = row * self.size + col;
        Ok((idx / Self::WORD_BITS, idx % Self::WORD_BITS))
    }

    /// Creates a grid from an iterator over `(row, col)` positions.
    pub fn from_iter<I>(size: usize, iter: I) -> Result<Self, BitGridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(size);
        for (r, c) in iter {
            grid.set(r, c)?;
        }
        Ok(grid)
    }

    /// Iterator over the set bits of the grid, in row-major order.
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits { grid: self, idx: 0 }
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}, {}>:", core::any::type_name::<T>(), self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let bit = if self.get(r, c).unwrap_or(false) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a grid.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: &'a BitGrid<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.grid.size;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            let word = self.grid.words[idx / BitGrid::<T>::WORD_BITS];
            if ((word >> (idx % BitGrid::<T>::WORD_BITS)) & T::one()) != T::zero() {
                return Some((idx / n, idx % n));
            }
        }
        None
    }
}
