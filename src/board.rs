//! Game board: fleet placement, shot resolution and the move pool.

use alloc::string::String;
use alloc::vec::Vec;

use log::trace;

use crate::cell::{Cell, CellState, Visible};
use crate::common::{BoardError, Report};
use crate::config::{PlacementConfig, CELL_COUNT};
use crate::coord::{Coordinate, Orientation, Position};
use crate::coordset::{self, CoordSet};
use crate::dice::Dice;
use crate::placement::{place_fleet, validate_layout};
use crate::ship::Ship;

/// Coordinates that may still be fired at. Starts full and only shrinks;
/// the only way to remove a coordinate is through [`Board::shoot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovePool {
    open: CoordSet,
}

impl MovePool {
    fn new() -> Self {
        Self {
            open: CoordSet::full(),
        }
    }

    fn take(&mut self, c: Coordinate) -> bool {
        self.open.remove(c)
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        self.open.contains(c)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn iter(&self) -> coordset::Iter {
        self.open.iter()
    }

    /// Snapshot of the open coordinates.
    pub fn to_set(&self) -> CoordSet {
        self.open
    }

    /// Open orthogonal neighbours of `c` on `axis` (both axes when `None`).
    pub fn orthogonal(&self, c: Coordinate, axis: Option<Orientation>) -> CoordSet {
        c.orthogonal(axis).filter(|n| self.contains(*n)).collect()
    }

    /// Open neighbours of `c` in all eight directions.
    pub fn surrounding(&self, c: Coordinate) -> CoordSet {
        c.surrounding().filter(|n| self.contains(*n)).collect()
    }

    /// Uniform pick among the open coordinates.
    pub fn pick<D: Dice + ?Sized>(&self, dice: &mut D) -> Option<Coordinate> {
        if self.open.is_empty() {
            return None;
        }
        self.open.nth(dice.index(self.open.len()))
    }
}

pub struct Board {
    name: String,
    hidden: bool,
    cells: [Cell; CELL_COUNT],
    ships: Vec<Ship>,
    remaining: MovePool,
}

impl Board {
    /// Board with a randomly placed standard fleet. A `hidden` board shows
    /// its unrevealed squares as fog.
    pub fn new<D: Dice + ?Sized>(
        name: impl Into<String>,
        hidden: bool,
        dice: &mut D,
    ) -> Result<Self, BoardError> {
        Self::with_config(name, hidden, dice, &PlacementConfig::default())
    }

    /// Like [`Board::new`] with an explicit placement retry budget.
    pub fn with_config<D: Dice + ?Sized>(
        name: impl Into<String>,
        hidden: bool,
        dice: &mut D,
        config: &PlacementConfig,
    ) -> Result<Self, BoardError> {
        let ships = place_fleet(dice, config)?;
        Self::commit(name.into(), hidden, ships)
    }

    /// Board holding exactly `ships`, which must not overlap or touch.
    /// The fleet composition is not checked.
    pub fn with_fleet(
        name: impl Into<String>,
        hidden: bool,
        ships: Vec<Ship>,
    ) -> Result<Self, BoardError> {
        validate_layout(&ships)?;
        Self::commit(name.into(), hidden, ships)
    }

    fn commit(name: String, hidden: bool, ships: Vec<Ship>) -> Result<Self, BoardError> {
        let mut cells = [Cell::new(); CELL_COUNT];
        for ship in &ships {
            for c in ship.cells() {
                let cell = &mut cells[c.index()];
                cell.mark_ship(c)?;
                if hidden {
                    cell.mark_hidden();
                }
            }
        }
        Ok(Board {
            name,
            hidden,
            cells,
            ships,
            remaining: MovePool::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn cell(&self, c: Coordinate) -> Cell {
        self.cells[c.index()]
    }

    /// What the opponent sees at `c`.
    pub fn visible(&self, c: Coordinate) -> Visible {
        self.cells[c.index()].visible()
    }

    pub fn ship_at(&self, c: Coordinate) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(c))
    }

    pub fn remaining_moves(&self) -> &MovePool {
        &self.remaining
    }

    /// Uniform pick among the coordinates still open to fire at.
    pub fn random_remaining<D: Dice + ?Sized>(&self, dice: &mut D) -> Option<Position> {
        self.remaining.pick(dice).map(Position::from)
    }

    pub fn are_all_ships_destroyed(&self) -> bool {
        self.ships.iter().all(Ship::is_destroyed)
    }

    pub fn to_position(c: Coordinate) -> Position {
        Position::from(c)
    }

    pub fn to_coordinate(p: Position) -> Coordinate {
        Coordinate::from(p)
    }

    /// Fire at `target`.
    ///
    /// A target outside the move pool yields `Report::NotValid` and leaves
    /// the board untouched. Sinking a ship also removes every open square
    /// around it from the pool and marks it missed. Errors mean the board's
    /// bookkeeping is inconsistent; they are raised before anything changes.
    pub fn shoot(&mut self, target: impl Into<Coordinate>) -> Result<Report, BoardError> {
        let at = target.into();
        if !self.remaining.contains(at) {
            trace!("{}: {} is not open", self.name, Position::from(at));
            return Ok(Report::NotValid);
        }

        let report = match self.cells[at.index()].state() {
            CellState::Empty => {
                self.remaining.take(at);
                self.cells[at.index()].mark_missed(at)?;
                Report::Missed
            }
            CellState::Occupied => self.hit_ship(at)?,
            from => {
                return Err(BoardError::IllegalTransition {
                    at,
                    from,
                    to: CellState::Missed,
                })
            }
        };
        trace!("{}: {} -> {:?}", self.name, Position::from(at), report);
        Ok(report)
    }

    fn hit_ship(&mut self, at: Coordinate) -> Result<Report, BoardError> {
        let index = self
            .ships
            .iter()
            .position(|s| s.contains(at))
            .ok_or(BoardError::UnknownShipHit(at))?;
        let ship = self.ships[index];
        if ship.is_destroyed() {
            return Err(BoardError::ShipAlreadySunk);
        }

        let sinking = ship.active_units() == 1;
        let mut cleared = CoordSet::new();
        if sinking {
            cleared = ship.footprint().dilated() & self.remaining.to_set();
            cleared.remove(at);
            if let Some(c) = cleared.iter().find(|c| !self.cells[c.index()].is_empty()) {
                return Err(BoardError::IllegalTransition {
                    at: c,
                    from: self.cells[c.index()].state(),
                    to: CellState::Missed,
                });
            }
        }

        self.remaining.take(at);
        self.cells[at.index()].mark_destroyed(at)?;
        self.ships[index].hit()?;
        if !sinking {
            return Ok(Report::Hit);
        }

        for c in &cleared {
            self.remaining.take(c);
            self.cells[c.index()].mark_missed(c)?;
        }
        trace!("{}: sink cleared {} squares", self.name, cleared.len());
        Ok(Report::Destroyed)
    }
}

impl core::fmt::Debug for Board {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Board")
            .field("name", &self.name)
            .field("hidden", &self.hidden)
            .field("ships", &self.ships)
            .field("remaining", &self.remaining.len())
            .finish()
    }
}
