//! Geometry primitives: [`Coord`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward and columns grow to
//! the right, so "up" is `row - 1`.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell coordinate on a grid.
///
/// With the `serde` feature a coordinate is encoded as the two-element array
/// `[row, col]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[i32; 2]", into = "[i32; 2]")
)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    pub const UP: Self = Self { row: -1, col: 0 };
    pub const RIGHT: Self = Self { row: 0, col: 1 };
    pub const DOWN: Self = Self { row: 1, col: 0 };
    pub const LEFT: Self = Self { row: 0, col: -1 };

    /// Unit offsets in neighbor order: up, right, down, left.
    ///
    /// Every strategy expands neighbors in this order, which fixes tie-breaks
    /// and makes exploration traces reproducible.
    pub const DIRS: [Self; 4] = [Self::UP, Self::RIGHT, Self::DOWN, Self::LEFT];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours (up, right, down, left).
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        Self::DIRS.map(|d| self + d)
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }

    /// Unit step from `self` toward `other` along each axis (`signum` of the
    /// difference).
    #[inline]
    pub fn step_toward(self, other: Coord) -> Coord {
        Coord::new(
            (other.row - self.row).signum(),
            (other.col - self.col).signum(),
        )
    }

    /// Whether this offset moves along the column axis only.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        self.row == 0 && self.col != 0
    }

    /// Whether this offset moves along the row axis only.
    #[inline]
    pub fn is_vertical(self) -> bool {
        self.col == 0 && self.row != 0
    }
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<[i32; 2]> for Coord {
    fn from([row, col]: [i32; 2]) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for [i32; 2] {
    fn from(c: Coord) -> Self {
        [c.row, c.col]
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_encodes_as_pair() {
        let json = serde_json::to_string(&Coord::new(3, 7)).unwrap();
        assert_eq!(json, "[3,7]");
        let back: Coord = serde_json::from_str("[4,1]").unwrap();
        assert_eq!(back, Coord::new(4, 1));
    }
}
