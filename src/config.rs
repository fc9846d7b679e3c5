//! Grid geometry, fleet composition and placement limits.

/// Width and height of the square grid.
pub const BOARD_SIZE: u8 = 10;
/// Number of coordinates on the grid.
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;
/// Column letters of the external `A1` encoding, indexed by column.
pub const COLUMN_LETTERS: &str = "ABCDEFGHIJ";

/// Fleet composition as `(ship size, number of ships)`, largest first.
/// Placement walks this table in order.
pub const FLEET: [(u8, usize); 4] = [(4, 1), (3, 2), (2, 3), (1, 4)];
/// Largest ship size in the fleet.
pub const MAX_SHIP_SIZE: u8 = 4;
/// Total number of ships in a fleet.
pub const NUM_SHIPS: usize = 1 + 2 + 3 + 4;
/// Total number of ship segments in a fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 2 * 3 + 3 * 2 + 4;

/// Retry budget for random fleet placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Candidate positions sampled for a single ship before the whole fleet
    /// is thrown away and placed again.
    pub attempts_per_ship: u32,
    /// Whole-fleet restarts allowed before placement gives up.
    pub fleet_restarts: u32,
}

impl PlacementConfig {
    pub const fn new(attempts_per_ship: u32, fleet_restarts: u32) -> Self {
        Self {
            attempts_per_ship,
            fleet_restarts,
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self::new(1000, 64)
    }
}

/// Sizes of every ship in placement order: `4, 3, 3, 2, 2, 2, 1, 1, 1, 1`.
pub fn fleet_sizes() -> impl Iterator<Item = u8> + Clone {
    FLEET
        .iter()
        .flat_map(|&(size, count)| core::iter::repeat(size).take(count))
}
