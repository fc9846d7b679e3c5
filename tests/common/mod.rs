#![allow(dead_code)]

use std::collections::VecDeque;

use salvo::{Coordinate, Dice, Orientation};

/// Dice that replays a fixed script and panics when it runs out.
#[derive(Default)]
pub struct Scripted {
    pub coordinates: VecDeque<Coordinate>,
    pub orientations: VecDeque<Orientation>,
    pub indices: VecDeque<usize>,
}

impl Scripted {
    pub fn with_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn push_ship(&mut self, col: u8, row: u8, orientation: Orientation) {
        self.coordinates.push_back(at(col, row));
        self.orientations.push_back(orientation);
    }
}

impl Dice for Scripted {
    fn coordinate(&mut self) -> Coordinate {
        self.coordinates.pop_front().expect("coordinate script exhausted")
    }

    fn orientation(&mut self) -> Orientation {
        self.orientations.pop_front().expect("orientation script exhausted")
    }

    fn index(&mut self, len: usize) -> usize {
        let i = self.indices.pop_front().expect("index script exhausted");
        assert!(i < len, "scripted index {} out of range {}", i, len);
        i
    }
}

pub fn at(col: u8, row: u8) -> Coordinate {
    Coordinate::new(col, row).unwrap()
}
