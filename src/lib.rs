//! Naval combat engine: random fleet placement, shot resolution with the
//! sink cascade, and a hunt/target opponent.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod board;
mod cell;
mod common;
mod config;
mod coord;
pub mod coordset;
mod dice;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod ship;

pub use ai::TargetingEngine;
pub use board::{Board, MovePool};
pub use cell::{Cell, CellState, Visible};
pub use common::{BoardError, Report, TargetingError};
pub use config::*;
pub use coord::{Coordinate, Orientation, Position, PositionError};
pub use coordset::CoordSet;
pub use dice::Dice;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placement::{place_fleet, validate_layout};
pub use ship::Ship;
