//! Set of grid coordinates packed into a single `u128`.
//!
//! Bit `i` stands for the coordinate with row-major index `i`, so the whole
//! 10×10 grid fits in the low 100 bits. Used for ship footprints, the
//! placement occupancy snapshot and the shot pool.

use core::fmt;
use core::ops::{BitAnd, BitOr, Not, Sub};

use crate::config::{BOARD_SIZE, CELL_COUNT};
use crate::coord::Coordinate;

const GRID_MASK: u128 = (1u128 << CELL_COUNT) - 1;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CoordSet {
    bits: u128,
}

impl CoordSet {
    /// Empty set.
    #[inline]
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Every coordinate on the grid.
    #[inline]
    pub const fn full() -> Self {
        Self { bits: GRID_MASK }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        (self.bits >> c.index()) & 1 == 1
    }

    /// Adds `c`, returning `true` if it was not present.
    #[inline]
    pub fn insert(&mut self, c: Coordinate) -> bool {
        let absent = !self.contains(c);
        self.bits |= 1u128 << c.index();
        absent
    }

    /// Removes `c`, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, c: Coordinate) -> bool {
        let present = self.contains(c);
        self.bits &= !(1u128 << c.index());
        present
    }

    /// True when the two sets share at least one coordinate.
    #[inline]
    pub fn intersects(&self, other: &CoordSet) -> bool {
        self.bits & other.bits != 0
    }

    /// The set grown by one cell in all eight directions (the set itself
    /// included), clipped to the grid.
    pub fn dilated(&self) -> CoordSet {
        let size = BOARD_SIZE as u32;
        let mut col_mask = 0u128;
        for row in 0..size {
            col_mask |= 1u128 << (row * size);
        }
        let first_col = col_mask;
        let last_col = col_mask << (size - 1);

        // Horizontal spread must not wrap between rows.
        let b = self.bits;
        let horizontal = b | ((b & !last_col) << 1) | ((b & !first_col) >> 1);
        let grown = horizontal | (horizontal << size) | (horizontal >> size);
        CoordSet {
            bits: grown & GRID_MASK,
        }
    }

    /// Coordinates in row-major order.
    #[inline]
    pub fn iter(&self) -> Iter {
        Iter { bits: self.bits }
    }

    /// The `n`-th coordinate in row-major order.
    pub fn nth(&self, n: usize) -> Option<Coordinate> {
        self.iter().nth(n)
    }
}

impl FromIterator<Coordinate> for CoordSet {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut set = CoordSet::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl Extend<Coordinate> for CoordSet {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

impl<'a> IntoIterator for &'a CoordSet {
    type Item = Coordinate;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the members of a [`CoordSet`].
#[derive(Clone, Copy)]
pub struct Iter {
    bits: u128,
}

impl Iterator for Iter {
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Coordinate> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Coordinate::from_index(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter {}

impl BitAnd for CoordSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CoordSet {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitOr for CoordSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CoordSet {
            bits: self.bits | rhs.bits,
        }
    }
}

impl Sub for CoordSet {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        CoordSet {
            bits: self.bits & !rhs.bits,
        }
    }
}

/// Complement within the grid.
impl Not for CoordSet {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        CoordSet {
            bits: !self.bits & GRID_MASK,
        }
    }
}

impl fmt::Debug for CoordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for CoordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in Coordinate::all() {
            let bit = if self.contains(c) { '■' } else { '□' };
            write!(f, "{} ", bit)?;
            if c.col() + 1 == BOARD_SIZE && c.row() + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
