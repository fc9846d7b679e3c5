//! Grid coordinates and their external `A1` encoding.

use core::fmt;
use core::str::FromStr;

use crate::config::{BOARD_SIZE, CELL_COUNT, COLUMN_LETTERS};

/// Axis a ship lies along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Axis shared by two distinct coordinates, if they share a row or column.
    pub fn between(a: Coordinate, b: Coordinate) -> Option<Self> {
        if a == b {
            None
        } else if a.row == b.row {
            Some(Orientation::Horizontal)
        } else if a.col == b.col {
            Some(Orientation::Vertical)
        } else {
            None
        }
    }

    fn delta(self) -> (i8, i8) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// Internal integer coordinate: column and row, both `0..BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coordinate {
    col: u8,
    row: u8,
}

impl Coordinate {
    /// Checked constructor, `None` when outside the grid.
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(Self { col, row })
        } else {
            None
        }
    }

    /// Coordinate for a row-major cell index in `0..CELL_COUNT`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let size = BOARD_SIZE as usize;
        Some(Self {
            col: (index % size) as u8,
            row: (index / size) as u8,
        })
    }

    /// Row-major index of this coordinate.
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    /// Coordinate shifted by `(dc, dr)`, or `None` if that leaves the grid.
    pub fn offset(self, dc: i8, dr: i8) -> Option<Self> {
        let col = self.col as i16 + dc as i16;
        let row = self.row as i16 + dr as i16;
        if col < 0 || row < 0 {
            return None;
        }
        Self::new(col as u8, row as u8)
    }

    /// Coordinate `steps` cells further along `orientation`.
    pub fn step(self, orientation: Orientation, steps: u8) -> Option<Self> {
        let (dc, dr) = orientation.delta();
        let steps = steps as i8;
        self.offset(dc * steps, dr * steps)
    }

    /// In-grid neighbours on the given axis (both axes when `None`).
    pub fn orthogonal(self, axis: Option<Orientation>) -> impl Iterator<Item = Coordinate> {
        let horizontal = axis != Some(Orientation::Vertical);
        let vertical = axis != Some(Orientation::Horizontal);
        [
            (horizontal, -1, 0),
            (horizontal, 1, 0),
            (vertical, 0, -1),
            (vertical, 0, 1),
        ]
        .into_iter()
        .filter(|&(on, _, _)| on)
        .filter_map(move |(_, dc, dr)| self.offset(dc, dr))
    }

    /// In-grid 8-neighbourhood, excluding the coordinate itself.
    pub fn surrounding(self) -> impl Iterator<Item = Coordinate> {
        (-1i8..=1)
            .flat_map(|dr| (-1i8..=1).map(move |dc| (dc, dr)))
            .filter(|&(dc, dr)| dc != 0 || dr != 0)
            .filter_map(move |(dc, dr)| self.offset(dc, dr))
    }

    /// Every coordinate on the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> + Clone {
        (0..CELL_COUNT).filter_map(Coordinate::from_index)
    }
}

// Decoded values go through `Coordinate::new` so nothing off the grid gets in.
#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for Coordinate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            col: u8,
            row: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        Coordinate::new(raw.col, raw.row).ok_or_else(|| {
            serde::de::Error::custom(format_args!(
                "coordinate ({}, {}) is outside the {}x{} grid",
                raw.col, raw.row, BOARD_SIZE, BOARD_SIZE
            ))
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Errors from parsing a textual position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Input was blank.
    Empty,
    /// First character is not a column letter `A`..`J`.
    BadColumn(char),
    /// Row part is not a number in `1..=10`.
    BadRow,
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::Empty => write!(f, "position is empty"),
            PositionError::BadColumn(c) => write!(f, "column {:?} is not one of A-J", c),
            PositionError::BadRow => write!(f, "row must be a number from 1 to 10"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PositionError {}

/// External encoding of a coordinate: column letter plus 1-based row,
/// e.g. `A1` for `(0, 0)` and `J10` for `(9, 9)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    letter: char,
    number: u8,
}

impl Position {
    /// Build a position from a column letter (either case) and a 1-based row.
    pub fn new(letter: char, number: u8) -> Result<Self, PositionError> {
        let letter = letter.to_ascii_uppercase();
        if !COLUMN_LETTERS.contains(letter) {
            return Err(PositionError::BadColumn(letter));
        }
        if number == 0 || number > BOARD_SIZE {
            return Err(PositionError::BadRow);
        }
        Ok(Self { letter, number })
    }

    pub fn letter(self) -> char {
        self.letter
    }

    pub fn number(self) -> u8 {
        self.number
    }
}

impl From<Coordinate> for Position {
    fn from(c: Coordinate) -> Self {
        Position {
            letter: char::from(COLUMN_LETTERS.as_bytes()[c.col as usize]),
            number: c.row + 1,
        }
    }
}

impl From<Position> for Coordinate {
    fn from(p: Position) -> Self {
        // `Position::new` guarantees both parts are in range.
        let col = COLUMN_LETTERS.find(p.letter).unwrap_or_default() as u8;
        Coordinate {
            col,
            row: p.number - 1,
        }
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(PositionError::Empty)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PositionError::BadRow);
        }
        let number: u8 = digits.parse().map_err(|_| PositionError::BadRow)?;
        Position::new(letter, number)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.number)
    }
}

#[cfg(feature = "std")]
impl serde::Serialize for Position {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for Position {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = std::string::String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
