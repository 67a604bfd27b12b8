//! A fixed-size set of board coordinates packed into one unsigned integer.
//!
//! The type is `no_std` friendly and avoids heap allocations. The playable
//! `N×N` region is addressed with 1-indexed [`Coordinate`]s; bit `(row - 1) * N
//! + (col - 1)` holds the membership of `(col, row)`.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coordinate;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Column or row lies outside `1..=N`.
    IndexOutOfBounds { col: usize, row: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { col, row } => {
                write!(f, "IndexOutOfBounds: col={}, row={}", col, row)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// A set of coordinates on an N×N board stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    /// Fails to compile when `T` cannot hold `N * N` bits.
    const FITS: () = assert!(N * N <= mem::size_of::<T>() * 8);

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// An empty set.
    #[inline]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    /// A set holding every playable coordinate.
    #[inline]
    pub fn full() -> Self {
        let mut board = Self::new();
        board.bits = Self::mask();
        board
    }

    #[inline]
    fn index(at: Coordinate) -> Result<usize, BitBoardError> {
        if at.col == 0 || at.row == 0 || at.col > N || at.row > N {
            Err(BitBoardError::IndexOutOfBounds {
                col: at.col,
                row: at.row,
            })
        } else {
            Ok((at.row - 1) * N + (at.col - 1))
        }
    }

    #[inline]
    fn coordinate(idx: usize) -> Coordinate {
        Coordinate::new(idx % N + 1, idx / N + 1)
    }

    /// Number of coordinates in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test; out-of-range coordinates are never members.
    pub fn contains(&self, at: Coordinate) -> bool {
        match Self::index(at) {
            Ok(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            Err(_) => false,
        }
    }

    /// Adds `at`, returning whether it was newly inserted.
    pub fn insert(&mut self, at: Coordinate) -> Result<bool, BitBoardError> {
        let idx = Self::index(at)?;
        let bit = T::one() << idx;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Removes `at`, returning whether it was present.
    pub fn remove(&mut self, at: Coordinate) -> Result<bool, BitBoardError> {
        let idx = Self::index(at)?;
        let bit = T::one() << idx;
        let present = !(self.bits & bit).is_zero();
        self.bits = self.bits & !bit;
        Ok(present)
    }

    /// The `n`-th member in row-major order.
    pub fn nth(&self, n: usize) -> Option<Coordinate> {
        self.iter().nth(n)
    }

    /// Iterator over the members in row-major order.
    #[inline]
    pub fn iter(&self) -> Members<'_, T, N> {
        Members {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=N {
            for col in 1..=N {
                let bit = if self.contains(Coordinate::new(col, row)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if row < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the members of a bitboard.
#[derive(Clone, Copy)]
pub struct Members<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Members<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(BitBoard::<T, N>::coordinate(idx));
            }
        }
        None
    }
}

impl<T, const N: usize> FromIterator<Coordinate> for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Collects coordinates, silently skipping any outside the board.
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut board = Self::new();
        for at in iter {
            let _ = board.insert(at);
        }
        board
    }
}
