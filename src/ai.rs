//! Hunt/target strategy for an automated player.
//!
//! While hunting the engine fires at random open squares. The first hit
//! switches it to targeting: it probes the open orthogonal neighbours of the
//! hit, and once a second hit reveals the ship's axis it only extends along
//! that line. Sinking the ship returns it to hunting.

use core::mem;

use log::{debug, warn};

use crate::board::Board;
use crate::common::{Report, TargetingError};
use crate::coord::{Coordinate, Orientation, Position};
use crate::coordset::CoordSet;
use crate::dice::Dice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// No wounded ship known.
    Hunting,
    /// A ship has been hit but not sunk.
    Targeting {
        first_hit: Coordinate,
        /// Known once two hits share a row or column.
        orientation: Option<Orientation>,
        /// Squares believed to hold more of the ship.
        candidates: CoordSet,
    },
}

/// Opponent strategy. Call [`choose_next_shot`](Self::choose_next_shot),
/// fire at the returned position, then hand the report to
/// [`record_result`](Self::record_result) before choosing again.
#[derive(Debug, Clone)]
pub struct TargetingEngine {
    mode: Mode,
    pending: Option<Coordinate>,
}

impl Default for TargetingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetingEngine {
    pub fn new() -> Self {
        Self {
            mode: Mode::Hunting,
            pending: None,
        }
    }

    pub fn is_hunting(&self) -> bool {
        self.mode == Mode::Hunting
    }

    /// First hit on the ship being targeted.
    pub fn first_hit(&self) -> Option<Coordinate> {
        match self.mode {
            Mode::Targeting { first_hit, .. } => Some(first_hit),
            Mode::Hunting => None,
        }
    }

    /// Inferred axis of the ship being targeted.
    pub fn orientation(&self) -> Option<Orientation> {
        match self.mode {
            Mode::Targeting { orientation, .. } => orientation,
            Mode::Hunting => None,
        }
    }

    /// Current candidate squares; always empty while hunting.
    pub fn candidates(&self) -> CoordSet {
        match self.mode {
            Mode::Targeting { candidates, .. } => candidates,
            Mode::Hunting => CoordSet::new(),
        }
    }

    /// Shot chosen but not yet recorded.
    pub fn pending(&self) -> Option<Position> {
        self.pending.map(Position::from)
    }

    /// Pick the next square to fire at on `board` and remember it as pending.
    pub fn choose_next_shot<D: Dice + ?Sized>(
        &mut self,
        board: &Board,
        dice: &mut D,
    ) -> Result<Position, TargetingError> {
        let pool = board.remaining_moves();
        let target = match &mut self.mode {
            Mode::Hunting => pool.pick(dice),
            Mode::Targeting {
                first_hit,
                orientation,
                candidates,
            } => {
                if candidates.is_empty() {
                    *candidates = pool.orthogonal(*first_hit, *orientation);
                    debug!(
                        "candidates exhausted, {} open around {}",
                        candidates.len(),
                        Position::from(*first_hit)
                    );
                }
                if candidates.is_empty() {
                    warn!(
                        "no open squares next to {}, firing at random",
                        Position::from(*first_hit)
                    );
                    pool.pick(dice)
                } else {
                    candidates.nth(dice.index(candidates.len()))
                }
            }
        };
        let target = target.ok_or(TargetingError::NoMovesLeft)?;
        self.pending = Some(target);
        Ok(Position::from(target))
    }

    /// Update the strategy with the report for the pending shot. `board` is
    /// the board that was fired at, after it resolved the shot.
    pub fn record_result(&mut self, board: &Board, report: Report) -> Result<(), TargetingError> {
        let shot = self.pending.take().ok_or(TargetingError::NoPendingShot)?;
        match report {
            Report::NotValid => return Err(TargetingError::RejectedShot(Position::from(shot))),
            Report::Missed => {
                if let Mode::Targeting { candidates, .. } = &mut self.mode {
                    candidates.remove(shot);
                }
            }
            Report::Destroyed => {
                if !self.is_hunting() {
                    debug!("target sunk at {}, back to hunting", Position::from(shot));
                }
                self.mode = Mode::Hunting;
            }
            Report::Hit => {
                let pool = board.remaining_moves();
                self.mode = match mem::replace(&mut self.mode, Mode::Hunting) {
                    Mode::Hunting => {
                        debug!("hit at {}, targeting", Position::from(shot));
                        Mode::Targeting {
                            first_hit: shot,
                            orientation: None,
                            candidates: pool.orthogonal(shot, None),
                        }
                    }
                    Mode::Targeting {
                        first_hit,
                        orientation,
                        ..
                    } => {
                        let orientation = orientation.or_else(|| {
                            let inferred = Orientation::between(first_hit, shot);
                            if inferred.is_none() {
                                debug!(
                                    "hits {} and {} share no axis, searching both",
                                    Position::from(first_hit),
                                    Position::from(shot)
                                );
                            }
                            inferred
                        });
                        Mode::Targeting {
                            first_hit,
                            orientation,
                            candidates: pool.orthogonal(shot, orientation),
                        }
                    }
                };
            }
        }
        Ok(())
    }

    /// Choose a target on `board`, fire at it and record the result.
    pub fn take_turn<D: Dice + ?Sized>(
        &mut self,
        board: &mut Board,
        dice: &mut D,
    ) -> Result<(Position, Report), TargetingError> {
        let target = self.choose_next_shot(board, dice)?;
        let report = board.shoot(target)?;
        self.record_result(board, report)?;
        Ok((target, report))
    }
}
