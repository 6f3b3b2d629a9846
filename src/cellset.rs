//! A set of board coordinates packed into an unsigned integer.
//!
//! The board side length is chosen at runtime but must satisfy
//! `size * size <= T::BITS`. Cells are stored row-major. The set backs the
//! battleship "available" bookkeeping, where it only ever shrinks.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coordinate;

/// Errors returned by cell-set construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellSetError {
    /// Requested size*size exceeds the capacity of `T`.
    SizeTooLarge { size: usize, capacity: usize },
}

impl fmt::Display for CellSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSetError::SizeTooLarge { size, capacity } => write!(
                f,
                "SizeTooLarge: size*size={} exceeds capacity {}",
                size * size,
                capacity
            ),
        }
    }
}

/// Set of coordinates on a `size`×`size` grid stored in `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet<T = u128>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    size: usize,
}

impl<T> CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn capacity() -> usize {
        mem::size_of::<T>() * 8
    }

    /// Create an empty set for a `size`×`size` grid.
    pub fn empty(size: usize) -> Result<Self, CellSetError> {
        let capacity = Self::capacity();
        if size * size > capacity {
            Err(CellSetError::SizeTooLarge { size, capacity })
        } else {
            Ok(CellSet {
                bits: T::zero(),
                size,
            })
        }
    }

    /// Create a set holding every cell of the grid.
    pub fn full(size: usize) -> Result<Self, CellSetError> {
        let mut set = Self::empty(size)?;
        let cells = size * size;
        set.bits = if cells == Self::capacity() {
            !T::zero()
        } else {
            (T::one() << cells) - T::one()
        };
        Ok(set)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    fn bit(&self, c: Coordinate) -> Option<T> {
        c.index(self.size)
            .map(|(r, col)| T::one() << (r * self.size + col))
    }

    /// Off-grid coordinates are never members.
    pub fn contains(&self, c: Coordinate) -> bool {
        self.bit(c).map_or(false, |b| (self.bits & b) != T::zero())
    }

    /// Removes `c`, returning whether it was present.
    pub fn remove(&mut self, c: Coordinate) -> bool {
        match self.bit(c) {
            Some(b) if (self.bits & b) != T::zero() => {
                self.bits = self.bits & !b;
                true
            }
            _ => false,
        }
    }

    /// Coordinates in the set, row-major.
    pub fn iter(&self) -> Cells<'_, T> {
        Cells { set: self, idx: 0 }
    }
}

impl<T> fmt::Debug for CellSet<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet<{}>:", self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let ch = if self.contains(Coordinate::new(r as i32, c as i32)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the members of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct Cells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    set: &'a CellSet<T>,
    idx: usize,
}

impl<'a, T> Iterator for Cells<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.set.size;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            if ((self.set.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new((idx / n) as i32, (idx % n) as i32));
            }
        }
        None
    }
}
