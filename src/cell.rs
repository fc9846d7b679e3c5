//! State of a single grid square.

use core::fmt;

use crate::common::BoardError;
use crate::coord::Coordinate;

/// What a square actually holds. Moves only forward:
/// `Empty -> Missed` or `Empty -> Occupied -> Destroyed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Missed,
    Occupied,
    Destroyed,
}

/// What a viewer sees for a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visible {
    /// Fog over a concealed square.
    Unknown,
    Empty,
    Missed,
    Occupied,
    Destroyed,
}

impl Visible {
    /// Single-character glyph used by text views.
    pub fn glyph(self) -> char {
        match self {
            Visible::Unknown | Visible::Empty => '_',
            Visible::Missed => '.',
            Visible::Destroyed => 'X',
            Visible::Occupied => 'O',
        }
    }
}

impl fmt::Display for Visible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A square: its state plus the concealment overlay of the owner's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    state: CellState,
    hidden: bool,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_empty(&self) -> bool {
        self.state == CellState::Empty
    }

    pub fn is_ship(&self) -> bool {
        self.state == CellState::Occupied
    }

    pub fn is_destroyed(&self) -> bool {
        self.state == CellState::Destroyed
    }

    /// Displayed state. Concealment only covers squares that have not been
    /// revealed by a shot or a cascade.
    pub fn visible(&self) -> Visible {
        match (self.state, self.hidden) {
            (CellState::Empty | CellState::Occupied, true) => Visible::Unknown,
            (CellState::Empty, false) => Visible::Empty,
            (CellState::Occupied, false) => Visible::Occupied,
            (CellState::Missed, _) => Visible::Missed,
            (CellState::Destroyed, _) => Visible::Destroyed,
        }
    }

    pub fn mark_hidden(&mut self) {
        self.hidden = true;
    }

    pub fn mark_ship(&mut self, at: Coordinate) -> Result<(), BoardError> {
        self.advance(at, CellState::Occupied, CellState::Empty)
    }

    pub fn mark_missed(&mut self, at: Coordinate) -> Result<(), BoardError> {
        self.advance(at, CellState::Missed, CellState::Empty)
    }

    pub fn mark_destroyed(&mut self, at: Coordinate) -> Result<(), BoardError> {
        self.advance(at, CellState::Destroyed, CellState::Occupied)
    }

    fn advance(&mut self, at: Coordinate, to: CellState, from: CellState) -> Result<(), BoardError> {
        if self.state == to {
            return Ok(());
        }
        if self.state != from {
            return Err(BoardError::IllegalTransition {
                at,
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.visible())
    }
}
