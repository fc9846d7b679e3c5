//! Random fleet placement.
//!
//! Rejection sampling, largest ships first: draw an anchor and an
//! orientation, keep the ship if it fits on the grid and stays clear of the
//! 8-neighbourhood of every ship already placed. A ship that cannot be
//! placed within the per-ship budget throws the whole fleet away and starts
//! over, up to the configured number of restarts.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::common::BoardError;
use crate::config::{fleet_sizes, PlacementConfig, NUM_SHIPS};
use crate::coordset::CoordSet;
use crate::dice::Dice;
use crate::ship::Ship;

/// Place a full fleet at random positions.
pub fn place_fleet<D: Dice + ?Sized>(
    dice: &mut D,
    config: &PlacementConfig,
) -> Result<Vec<Ship>, BoardError> {
    for attempt in 0..=config.fleet_restarts {
        if let Some(ships) = try_place_fleet(dice, config.attempts_per_ship) {
            if attempt > 0 {
                debug!("fleet placed after {} restarts", attempt);
            }
            return Ok(ships);
        }
        debug!("fleet placement attempt {} exhausted, restarting", attempt + 1);
    }
    Err(BoardError::UnableToPlaceFleet {
        restarts: config.fleet_restarts,
    })
}

fn try_place_fleet<D: Dice + ?Sized>(dice: &mut D, attempts_per_ship: u32) -> Option<Vec<Ship>> {
    let mut ships = Vec::with_capacity(NUM_SHIPS);
    let mut occupied = CoordSet::new();
    for size in fleet_sizes() {
        let blocked = occupied.dilated();
        let ship = (0..attempts_per_ship).find_map(|_| {
            let anchor = dice.coordinate();
            let orientation = dice.orientation();
            Ship::new(anchor, size, orientation)
                .ok()
                .filter(|ship| !ship.footprint().intersects(&blocked))
        });
        let Some(ship) = ship else {
            trace!("no room for a size {} ship", size);
            return None;
        };
        occupied = occupied | ship.footprint();
        ships.push(ship);
    }
    Some(ships)
}

/// Check that no two ships overlap or touch, diagonals included.
pub fn validate_layout(ships: &[Ship]) -> Result<(), BoardError> {
    for (a, first) in ships.iter().enumerate() {
        let halo = first.footprint().dilated();
        for (b, second) in ships.iter().enumerate().skip(a + 1) {
            if halo.intersects(&second.footprint()) {
                return Err(BoardError::ShipsTouching { a, b });
            }
        }
    }
    Ok(())
}
