//! Common types: shot reports and error enums.

use crate::cell::CellState;
use crate::coord::{Coordinate, Position};

/// Outcome of a shot at a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Report {
    /// Target is no longer in the move pool; nothing changed.
    NotValid,
    /// Target was empty water.
    Missed,
    /// Target held a ship segment and the ship is still afloat.
    Hit,
    /// Target held the last live segment of a ship.
    Destroyed,
}

/// Errors returned by board and ship operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Part of a ship would lie outside the grid.
    ShipOutOfBounds,
    /// Ship size outside `1..=MAX_SHIP_SIZE`.
    InvalidShipSize(u8),
    /// Two ships overlap or touch, diagonals included.
    ShipsTouching { a: usize, b: usize },
    /// A ship was hit more times than it has segments.
    ShipAlreadySunk,
    /// A square was asked to move backwards through its states.
    IllegalTransition {
        at: Coordinate,
        from: CellState,
        to: CellState,
    },
    /// A square marked as ship belongs to no ship in the fleet.
    UnknownShipHit(Coordinate),
    /// Random placement ran out of retries.
    UnableToPlaceFleet { restarts: u32 },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::InvalidShipSize(size) => write!(f, "Invalid ship size {}", size),
            BoardError::ShipsTouching { a, b } => {
                write!(f, "Ships {} and {} overlap or touch", a, b)
            }
            BoardError::ShipAlreadySunk => write!(f, "Ship is already sunk"),
            BoardError::IllegalTransition { at, from, to } => {
                write!(f, "Cell {} cannot go from {:?} to {:?}", at, from, to)
            }
            BoardError::UnknownShipHit(at) => write!(f, "No ship owns the segment at {}", at),
            BoardError::UnableToPlaceFleet { restarts } => {
                write!(f, "Unable to place fleet after {} restarts", restarts)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors raised by the targeting engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetingError {
    /// Board failed while resolving the engine's shot.
    Board(BoardError),
    /// The board refused a shot the engine proposed.
    RejectedShot(Position),
    /// A result was recorded with no shot pending.
    NoPendingShot,
    /// The board has no legal targets left.
    NoMovesLeft,
}

impl From<BoardError> for TargetingError {
    fn from(err: BoardError) -> Self {
        TargetingError::Board(err)
    }
}

impl core::fmt::Display for TargetingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TargetingError::Board(e) => write!(f, "Board error: {}", e),
            TargetingError::RejectedShot(p) => write!(f, "Board rejected proposed shot at {}", p),
            TargetingError::NoPendingShot => write!(f, "No shot is pending"),
            TargetingError::NoMovesLeft => write!(f, "No legal targets left"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TargetingError {}
