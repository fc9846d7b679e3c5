//! Source of randomness for placement and targeting.
//!
//! Every `rand::Rng` is a [`Dice`]; tests can script their own.

use rand::Rng;

use crate::config::CELL_COUNT;
use crate::coord::{Coordinate, Orientation};

pub trait Dice {
    /// Uniform coordinate over the whole grid.
    fn coordinate(&mut self) -> Coordinate;

    /// Uniform choice between the two orientations.
    fn orientation(&mut self) -> Orientation;

    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> Dice for R {
    fn coordinate(&mut self) -> Coordinate {
        let idx = self.random_range(0..CELL_COUNT);
        Coordinate::from_index(idx).unwrap_or_default()
    }

    fn orientation(&mut self) -> Orientation {
        if self.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}
