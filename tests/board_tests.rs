mod common;

use common::{at, Scripted};
use salvo::{
    Board, BoardError, CellState, Coordinate, Orientation, PlacementConfig, Position, Report,
    Ship, Visible,
};

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

#[test]
fn test_single_ship_in_corner_sinks_and_clears_neighbours() {
    let ship = Ship::new(at(0, 0), 1, Orientation::Vertical).unwrap();
    let mut board = Board::with_fleet("corner", false, vec![ship]).unwrap();

    assert_eq!(board.shoot(pos("A1")).unwrap(), Report::Destroyed);
    let pool = board.remaining_moves();
    assert_eq!(pool.len(), 100 - 4);
    for p in ["A1", "A2", "B1", "B2"] {
        assert!(!pool.contains(pos(p).into()), "{} still open", p);
    }
    assert_eq!(board.visible(at(0, 0)), Visible::Destroyed);
    for c in [at(1, 0), at(0, 1), at(1, 1)] {
        assert_eq!(board.visible(c), Visible::Missed);
    }
    assert!(board.are_all_ships_destroyed());
}

#[test]
fn test_not_valid_leaves_board_unchanged() {
    let ship = Ship::new(at(4, 4), 2, Orientation::Vertical).unwrap();
    let mut board = Board::with_fleet("repeat", false, vec![ship]).unwrap();
    assert_eq!(board.shoot(at(4, 4)).unwrap(), Report::Hit);
    assert_eq!(board.shoot(at(0, 0)).unwrap(), Report::Missed);

    let cells: Vec<_> = Coordinate::all().map(|c| board.cell(c)).collect();
    let pool = board.remaining_moves().to_set();
    let health: Vec<_> = board.ships().iter().map(Ship::active_units).collect();

    assert_eq!(board.shoot(at(4, 4)).unwrap(), Report::NotValid);
    assert_eq!(board.shoot(at(0, 0)).unwrap(), Report::NotValid);

    let cells_after: Vec<_> = Coordinate::all().map(|c| board.cell(c)).collect();
    assert_eq!(cells, cells_after);
    assert_eq!(pool, board.remaining_moves().to_set());
    let health_after: Vec<_> = board.ships().iter().map(Ship::active_units).collect();
    assert_eq!(health, health_after);
}

#[test]
fn test_hit_then_sink_clears_ring() {
    let ship = Ship::new(at(3, 5), 3, Orientation::Horizontal).unwrap();
    let mut board = Board::with_fleet("ring", false, vec![ship]).unwrap();

    assert_eq!(board.shoot(pos("D6")).unwrap(), Report::Hit);
    assert_eq!(board.shoot(pos("E6")).unwrap(), Report::Hit);
    assert_eq!(board.remaining_moves().len(), 98);
    assert_eq!(board.ships()[0].active_units(), 1);

    assert_eq!(board.shoot(pos("F6")).unwrap(), Report::Destroyed);
    // 5x3 block around the ship, minus the three segments.
    assert_eq!(board.remaining_moves().len(), 100 - 15);
    for col in 2..=6 {
        for row in 4..=6 {
            let c = at(col, row);
            assert!(!board.remaining_moves().contains(c));
            let expected = if row == 5 && (3..=5).contains(&col) {
                CellState::Destroyed
            } else {
                CellState::Missed
            };
            assert_eq!(board.cell(c).state(), expected);
        }
    }
    assert_eq!(board.shoot(pos("C5")).unwrap(), Report::NotValid);
}

#[test]
fn test_miss_marks_cell() {
    let ship = Ship::new(at(9, 9), 1, Orientation::Horizontal).unwrap();
    let mut board = Board::with_fleet("miss", false, vec![ship]).unwrap();
    assert_eq!(board.shoot(pos("A1")).unwrap(), Report::Missed);
    assert_eq!(board.cell(at(0, 0)).state(), CellState::Missed);
    assert_eq!(board.remaining_moves().len(), 99);
    assert!(!board.are_all_ships_destroyed());
}

#[test]
fn test_hidden_board_fogs_ships_until_hit() {
    let ship = Ship::new(at(2, 2), 2, Orientation::Horizontal).unwrap();
    let mut board = Board::with_fleet("fog", true, vec![ship]).unwrap();
    assert!(board.is_hidden());
    assert_eq!(board.visible(at(2, 2)), Visible::Unknown);
    assert_eq!(board.visible(at(0, 0)), Visible::Empty);
    assert!(board.cell(at(2, 2)).is_ship());

    assert_eq!(board.shoot(at(2, 2)).unwrap(), Report::Hit);
    assert_eq!(board.visible(at(2, 2)), Visible::Destroyed);
    assert_eq!(board.visible(at(3, 2)), Visible::Unknown);
}

#[test]
fn test_with_fleet_rejects_touching_ships() {
    let a = Ship::new(at(0, 0), 2, Orientation::Horizontal).unwrap();
    let b = Ship::new(at(2, 1), 1, Orientation::Horizontal).unwrap();
    let err = Board::with_fleet("touch", false, vec![a, b]).unwrap_err();
    assert_eq!(err, BoardError::ShipsTouching { a: 0, b: 1 });

    let c = Ship::new(at(3, 0), 1, Orientation::Horizontal).unwrap();
    assert!(Board::with_fleet("gap", false, vec![a, c]).is_ok());
}

#[test]
fn test_placement_follows_dice_largest_first() {
    let mut dice = Scripted::default();
    // Out of bounds, then accepted.
    dice.push_ship(8, 0, Orientation::Horizontal);
    dice.push_ship(0, 0, Orientation::Horizontal);
    // Touches the battleship diagonally, then accepted.
    dice.push_ship(4, 1, Orientation::Horizontal);
    dice.push_ship(0, 2, Orientation::Horizontal);
    dice.push_ship(5, 0, Orientation::Horizontal);
    dice.push_ship(0, 4, Orientation::Horizontal);
    dice.push_ship(3, 4, Orientation::Horizontal);
    dice.push_ship(6, 4, Orientation::Vertical);
    for col in [0, 2, 4, 8] {
        dice.push_ship(col, 8, Orientation::Vertical);
    }

    let board = Board::new("scripted", false, &mut dice).unwrap();
    assert!(dice.coordinates.is_empty());
    let layout: Vec<_> = board
        .ships()
        .iter()
        .map(|s| (s.anchor(), s.size(), s.orientation()))
        .collect();
    assert_eq!(layout[0], (at(0, 0), 4, Some(Orientation::Horizontal)));
    assert_eq!(layout[1], (at(0, 2), 3, Some(Orientation::Horizontal)));
    assert_eq!(layout[5], (at(6, 4), 2, Some(Orientation::Vertical)));
    assert_eq!(layout[9], (at(8, 8), 1, None));
}

#[test]
fn test_placement_gives_up_when_budget_is_empty() {
    let mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(3);
    let config = PlacementConfig::new(0, 2);
    let err = Board::with_config("none", false, &mut rng, &config).unwrap_err();
    assert_eq!(err, BoardError::UnableToPlaceFleet { restarts: 2 });
}

#[test]
fn test_random_remaining_is_open() {
    let ship = Ship::new(at(0, 0), 1, Orientation::Horizontal).unwrap();
    let mut board = Board::with_fleet("pick", false, vec![ship]).unwrap();
    board.shoot(at(0, 0)).unwrap();
    let mut dice = Scripted::with_indices([0]);
    let pick = board.random_remaining(&mut dice).unwrap();
    assert_eq!(pick, pos("C1"));
}

#[test]
fn test_position_conversions() {
    assert_eq!(Board::to_position(at(0, 0)), pos("A1"));
    assert_eq!(Board::to_position(at(9, 9)), pos("J10"));
    assert_eq!(Board::to_coordinate(pos("B7")), at(1, 6));
}
