//! A straight run of ship segments with a hit counter.

use core::fmt;

use crate::common::BoardError;
use crate::config::MAX_SHIP_SIZE;
use crate::coord::{Coordinate, Orientation};
use crate::coordset::CoordSet;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    anchor: Coordinate,
    size: u8,
    /// `None` for single-segment ships.
    orientation: Option<Orientation>,
    footprint: CoordSet,
    active_units: u8,
}

impl Ship {
    /// Ship of `size` segments starting at `anchor` and extending along
    /// `orientation`. The orientation is dropped for size 1.
    pub fn new(anchor: Coordinate, size: u8, orientation: Orientation) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_SHIP_SIZE {
            return Err(BoardError::InvalidShipSize(size));
        }
        let orientation = (size > 1).then_some(orientation);
        let mut footprint = CoordSet::new();
        for i in 0..size {
            let c = match orientation {
                Some(o) => anchor.step(o, i).ok_or(BoardError::ShipOutOfBounds)?,
                None => anchor,
            };
            footprint.insert(c);
        }
        Ok(Ship {
            anchor,
            size,
            orientation,
            footprint,
            active_units: size,
        })
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Segments still afloat.
    pub fn active_units(&self) -> u8 {
        self.active_units
    }

    /// Segments from the anchor to the tail. Each call starts over.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.size).filter_map(move |i| match self.orientation {
            Some(o) => self.anchor.step(o, i),
            None => Some(self.anchor),
        })
    }

    /// Last segment.
    pub fn tail(&self) -> Coordinate {
        self.cells().last().unwrap_or(self.anchor)
    }

    /// Occupied coordinates as a set.
    pub fn footprint(&self) -> CoordSet {
        self.footprint
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        self.footprint.contains(c)
    }

    /// Register one hit on the ship.
    pub fn hit(&mut self) -> Result<(), BoardError> {
        self.active_units = self
            .active_units
            .checked_sub(1)
            .ok_or(BoardError::ShipAlreadySunk)?;
        Ok(())
    }

    pub fn is_destroyed(&self) -> bool {
        self.active_units == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ anchor: {}, size: {}, orientation: {:?}, active: {} }}",
            self.anchor, self.size, self.orientation, self.active_units,
        )
    }
}
