//! The [`Grid`] type: an immutable 2D occupancy matrix.
//!
//! Cells live in one flat row-major buffer. Searches address cells either by
//! [`Coord`] or by flat index ([`Grid::idx`] / [`Grid::coord`]), which lets
//! per-search bookkeeping use plain `Vec`s instead of hash maps.

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::error::{GridError, ShapeError};
use crate::geom::Coord;

/// A rectangular occupancy grid. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create an all-free grid. Dimensions are clamped to at least 1x1.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            cells: vec![Cell::Free; rows * cols],
            rows,
            cols,
        }
    }

    /// Build a grid from already-decoded cells in row-major order.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if rows == 0 {
            return Err(ShapeError::Empty.into());
        }
        if cols == 0 {
            return Err(ShapeError::EmptyRow { row: 0 }.into());
        }
        if cells.len() != rows * cols {
            return Err(ShapeError::CellCount {
                len: cells.len(),
                expected: rows * cols,
            }
            .into());
        }
        Ok(Self { cells, rows, cols })
    }

    /// Build a grid from raw wire rows (`0` free, `1` wall).
    ///
    /// The shape is checked first (see [`Grid::check_shape`]), then every
    /// cell value, so a ragged grid reports a shape error even if it also
    /// holds bad values.
    pub fn from_rows(raw: &[Vec<i64>]) -> Result<Self, GridError> {
        let cols = Self::check_shape(raw.iter().map(Vec::len))?;
        let mut cells = Vec::with_capacity(raw.len() * cols);
        for (row, r) in raw.iter().enumerate() {
            for (col, &value) in r.iter().enumerate() {
                let cell =
                    Cell::from_value(value).ok_or(GridError::CellValue { row, col, value })?;
                cells.push(cell);
            }
        }
        Ok(Self {
            cells,
            rows: raw.len(),
            cols,
        })
    }

    /// Check that row lengths describe a non-empty rectangular matrix and
    /// return the column count.
    ///
    /// Rows are checked in order; the first empty or mismatched row wins.
    pub fn check_shape(row_lens: impl IntoIterator<Item = usize>) -> Result<usize, ShapeError> {
        let mut lens = row_lens.into_iter();
        let cols = lens.next().ok_or(ShapeError::Empty)?;
        if cols == 0 {
            return Err(ShapeError::EmptyRow { row: 0 });
        }
        for (i, len) in lens.enumerate() {
            let row = i + 1;
            if len == 0 {
                return Err(ShapeError::EmptyRow { row });
            }
            if len != cols {
                return Err(ShapeError::Ragged {
                    row,
                    len,
                    expected: cols,
                });
            }
        }
        Ok(cols)
    }

    /// Parse an ASCII map: one line per row, `.`/`0` free, `#`/`1` wall.
    ///
    /// Leading/trailing blank lines are ignored and each line is trimmed, so
    /// maps can be indented inside string literals.
    pub fn parse_ascii(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        if lines.iter().all(|l| l.is_empty()) {
            return Err(ShapeError::Empty.into());
        }
        let cols = Self::check_shape(lines.iter().map(|l| l.chars().count()))?;
        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or(ShapeError::InvalidChar { row, col, ch })?;
                cells.push(cell);
            }
        }
        Ok(Self {
            cells,
            rows: lines.len(),
            cols,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols
    }

    /// Convert a coordinate to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols + c.col as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// The cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.idx(c).map(|i| self.cells[i])
    }

    /// Whether `c` is inside the grid and not a wall.
    #[inline]
    pub fn is_free(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Cell::is_free)
    }

    /// Number of free cells.
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_free()).count()
    }

    /// Iterate over all `(Coord, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (self.coord(i), cell))
    }

    /// The grid as wire rows (`0`/`1`).
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.cells
            .chunks(self.cols)
            .map(|r| r.iter().map(|c| c.value()).collect())
            .collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_ascii(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
        ....
        .##.
        ....";

    #[test]
    fn parse_and_size() {
        let g = Grid::parse_ascii(ROOM).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.free_count(), 10);
        assert_eq!(g.at(Coord::new(1, 1)), Some(Cell::Wall));
        assert_eq!(g.at(Coord::new(0, 0)), Some(Cell::Free));
    }

    #[test]
    fn display_round_trips_ascii() {
        let g = Grid::parse_ascii(ROOM).unwrap();
        assert_eq!(g.to_string(), "....\n.##.\n....");
        let again: Grid = g.to_string().parse().unwrap();
        assert_eq!(again, g);
    }

    #[test]
    fn bounds_and_free() {
        let g = Grid::parse_ascii(ROOM).unwrap();
        assert!(g.contains(Coord::new(2, 3)));
        assert!(!g.contains(Coord::new(3, 0)));
        assert!(!g.contains(Coord::new(0, -1)));
        assert!(!g.is_free(Coord::new(-1, 0)));
        assert!(!g.is_free(Coord::new(1, 2)));
        assert!(g.is_free(Coord::new(1, 3)));
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::new(3, 5);
        for (c, _) in g.iter() {
            let i = g.idx(c).unwrap();
            assert_eq!(g.coord(i), c);
        }
        assert_eq!(g.idx(Coord::new(1, 2)), Some(7));
        assert_eq!(g.idx(Coord::new(3, 0)), None);
    }

    #[test]
    fn from_rows_accepts_matrix() {
        let g = Grid::from_rows(&[vec![0, 1], vec![0, 0]]).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.at(Coord::new(0, 1)), Some(Cell::Wall));
        assert_eq!(g.to_rows(), vec![vec![0, 1], vec![0, 0]]);
    }

    #[test]
    fn from_rows_rejects_empty() {
        let raw: Vec<Vec<i64>> = vec![];
        assert_eq!(Grid::from_rows(&raw), Err(GridError::Shape(ShapeError::Empty)));
        assert_eq!(
            Grid::from_rows(&[Vec::<i64>::new()]),
            Err(GridError::Shape(ShapeError::EmptyRow { row: 0 }))
        );
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = Grid::from_rows(&[vec![0, 0, 0], vec![0, 0]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Shape(ShapeError::Ragged {
                row: 1,
                len: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn shape_checked_before_values() {
        let err = Grid::from_rows(&[vec![7, 0], vec![0]]).unwrap_err();
        assert!(matches!(err, GridError::Shape(_)));
    }

    #[test]
    fn from_rows_rejects_bad_value() {
        let err = Grid::from_rows(&[vec![0, 0], vec![0, 2]]).unwrap_err();
        assert_eq!(
            err,
            GridError::CellValue {
                row: 1,
                col: 1,
                value: 2
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_char() {
        let err = Grid::parse_ascii("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::Shape(ShapeError::InvalidChar {
                row: 1,
                col: 1,
                ch: 'x'
            })
        );
    }

    #[test]
    fn from_cells_checks_length() {
        assert!(Grid::from_cells(2, 2, vec![Cell::Free; 4]).is_ok());
        assert!(Grid::from_cells(0, 2, Vec::new()).is_err());
        // A count mismatch names both totals rather than a row that may not exist.
        assert_eq!(
            Grid::from_cells(2, 2, vec![Cell::Free; 3]),
            Err(GridError::Shape(ShapeError::CellCount {
                len: 3,
                expected: 4
            }))
        );
        assert_eq!(
            Grid::from_cells(2, 3, vec![Cell::Free; 9]),
            Err(GridError::Shape(ShapeError::CellCount {
                len: 9,
                expected: 6
            }))
        );
    }

    #[test]
    fn check_shape_reports_first_bad_row() {
        assert_eq!(Grid::check_shape([3, 3]), Ok(3));
        assert_eq!(Grid::check_shape(Vec::new()), Err(ShapeError::Empty));
        assert_eq!(Grid::check_shape([0, 2]), Err(ShapeError::EmptyRow { row: 0 }));
        assert_eq!(Grid::check_shape([2, 2, 0, 1]), Err(ShapeError::EmptyRow { row: 2 }));
        assert_eq!(
            Grid::check_shape([2, 1]),
            Err(ShapeError::Ragged {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }
}
