//! Request validation: everything that can be wrong with the input is caught
//! here, before any strategy runs.
//!
//! Wire fields are decoded leniently as [`Raw`] values so that a malformed
//! field (a grid that is not a matrix, a cell that is not an integer, a
//! missing selector) surfaces as a classified [`ValidationError`] rather than
//! a decode failure.

use pathgrid_core::{Cell, Coord, Grid, GridError, ShapeError};

use crate::algorithm::Algorithm;
use crate::config::SearchConfig;
use crate::error::{Endpoint, SearchError, ValidationError};
use crate::result::SearchResult;

/// A wire value that either decoded as `T` or held something else.
///
/// A missing field decodes as [`Raw::Invalid`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Raw<T> {
    Valid(T),
    Invalid,
}

impl<T> Raw<T> {
    pub fn valid(&self) -> Option<&T> {
        match self {
            Self::Valid(v) => Some(v),
            Self::Invalid => None,
        }
    }
}

impl<T> Default for Raw<T> {
    fn default() -> Self {
        Self::Invalid
    }
}

impl<T> From<T> for Raw<T> {
    fn from(v: T) -> Self {
        Self::Valid(v)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Raw<T> {
    fn deserialize<D: serde::Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Wire<U> {
            Valid(U),
            Invalid(serde::de::IgnoredAny),
        }

        Ok(match Wire::<T>::deserialize(de)? {
            Wire::Valid(v) => Self::Valid(v),
            Wire::Invalid(_) => Self::Invalid,
        })
    }
}

/// A wire grid: a list of rows, each a list of cells.
pub type RawGrid = Raw<Vec<Raw<Vec<Raw<i64>>>>>;

impl RawGrid {
    /// Wrap well-formed rows.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Self {
        Raw::Valid(
            rows.into_iter()
                .map(|r| Raw::Valid(r.into_iter().map(Raw::Valid).collect()))
                .collect(),
        )
    }

    /// Decode into a [`Grid`].
    ///
    /// The shape is checked first (a list of lists, non-empty, rectangular),
    /// then every cell in row-major order.
    pub fn decode(&self) -> Result<Grid, GridError> {
        let Raw::Valid(raw) = self else {
            return Err(ShapeError::NotMatrix.into());
        };
        let rows = raw
            .iter()
            .enumerate()
            .map(|(row, r)| r.valid().ok_or(ShapeError::NotARow { row }))
            .collect::<Result<Vec<_>, _>>()?;
        let cols = Grid::check_shape(rows.iter().map(|r| r.len()))?;

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, r) in rows.iter().enumerate() {
            for (col, v) in r.iter().enumerate() {
                let &Raw::Valid(value) = v else {
                    return Err(GridError::CellType { row, col });
                };
                let cell =
                    Cell::from_value(value).ok_or(GridError::CellValue { row, col, value })?;
                cells.push(cell);
            }
        }
        Grid::from_cells(rows.len(), cols, cells)
    }
}

/// A raw, unvalidated solve request as it arrives on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct SolveRequest {
    /// Row-major matrix of `0` (free) and `1` (wall).
    #[cfg_attr(feature = "serde", serde(default))]
    pub grid: RawGrid,
    /// `[row, col]` of the start cell.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start: Raw<[i64; 2]>,
    /// `[row, col]` of the end cell.
    #[cfg_attr(feature = "serde", serde(default))]
    pub end: Raw<[i64; 2]>,
    /// Strategy selector, e.g. `"astar"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub algorithm: Raw<String>,
}

impl SolveRequest {
    /// A well-formed request.
    pub fn new(
        grid: Vec<Vec<i64>>,
        start: [i64; 2],
        end: [i64; 2],
        algorithm: impl Into<String>,
    ) -> Self {
        Self {
            grid: RawGrid::from_rows(grid),
            start: start.into(),
            end: end.into(),
            algorithm: Raw::Valid(algorithm.into()),
        }
    }

    /// Check the request and turn it into a [`Query`].
    ///
    /// Checks run in a fixed order and the first failure wins: grid shape,
    /// cell values, start bounds, end bounds, start wall, end wall, then the
    /// algorithm name.
    pub fn validate(&self) -> Result<Query, ValidationError> {
        let grid = self.grid.decode()?;
        let start = locate(&grid, Endpoint::Start, &self.start)?;
        let end = locate(&grid, Endpoint::End, &self.end)?;
        let Raw::Valid(algorithm) = &self.algorithm else {
            check_endpoints(&grid, start, end)?;
            return Err(ValidationError::NoAlgorithm);
        };
        Query::new(grid, start, end, algorithm)
    }
}

/// A validated search: both endpoints are free cells of `grid`.
#[derive(Clone, Debug)]
pub struct Query {
    pub grid: Grid,
    pub start: Coord,
    pub end: Coord,
    pub algorithm: Algorithm,
}

impl Query {
    /// Validate already-typed inputs.
    pub fn new(
        grid: Grid,
        start: Coord,
        end: Coord,
        algorithm: &str,
    ) -> Result<Self, ValidationError> {
        check_endpoints(&grid, start, end)?;
        let algorithm = algorithm.parse()?;
        Ok(Self {
            grid,
            start,
            end,
            algorithm,
        })
    }

    /// Same query, different strategy.
    pub fn with_algorithm(self, algorithm: Algorithm) -> Self {
        Self { algorithm, ..self }
    }

    /// Run the query through the dispatcher.
    pub fn solve(&self, config: &SearchConfig) -> Result<SearchResult, SearchError> {
        crate::algorithm::solve(self, config)
    }
}

/// Both endpoints in bounds, then both free.
fn check_endpoints(grid: &Grid, start: Coord, end: Coord) -> Result<(), ValidationError> {
    for (endpoint, c) in [(Endpoint::Start, start), (Endpoint::End, end)] {
        if !grid.contains(c) {
            return Err(ValidationError::Bounds {
                endpoint,
                row: c.row.into(),
                col: c.col.into(),
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
    }
    for (endpoint, coord) in [(Endpoint::Start, start), (Endpoint::End, end)] {
        if !grid.is_free(coord) {
            return Err(ValidationError::Wall { endpoint, coord });
        }
    }
    Ok(())
}

/// Bounds-check a raw `[row, col]` pair.
fn locate(grid: &Grid, endpoint: Endpoint, raw: &Raw<[i64; 2]>) -> Result<Coord, ValidationError> {
    let &Raw::Valid([row, col]) = raw else {
        return Err(ValidationError::Point { endpoint });
    };
    let within = |v: i64, n: usize| usize::try_from(v).is_ok_and(|v| v < n);
    let out_of_bounds = || ValidationError::Bounds {
        endpoint,
        row,
        col,
        rows: grid.rows(),
        cols: grid.cols(),
    };
    if !within(row, grid.rows()) || !within(col, grid.cols()) {
        return Err(out_of_bounds());
    }
    let row = i32::try_from(row).map_err(|_| out_of_bounds())?;
    let col = i32::try_from(col).map_err(|_| out_of_bounds())?;
    Ok(Coord::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn request(grid: Vec<Vec<i64>>, start: [i64; 2], end: [i64; 2], algo: &str) -> SolveRequest {
        SolveRequest::new(grid, start, end, algo)
    }

    fn kind(req: &SolveRequest) -> ErrorKind {
        req.validate().unwrap_err().kind()
    }

    #[test]
    fn accepts_valid_request() {
        let req = request(vec![vec![0, 1], vec![0, 0]], [0, 0], [1, 1], " BFS ");
        let q = req.validate().unwrap();
        assert_eq!(q.start, Coord::new(0, 0));
        assert_eq!(q.end, Coord::new(1, 1));
        assert_eq!(q.algorithm, Algorithm::Bfs);
        assert_eq!(q.grid.rows(), 2);
    }

    #[test]
    fn each_failure_has_its_kind() {
        let ok = vec![vec![0, 0, 0], vec![0, 1, 0]];
        assert_eq!(kind(&request(vec![], [0, 0], [0, 0], "bfs")), ErrorKind::Shape);
        assert_eq!(
            kind(&request(vec![vec![0, 0], vec![0]], [0, 0], [0, 1], "bfs")),
            ErrorKind::Shape
        );
        assert_eq!(
            kind(&request(vec![vec![0, 2]], [0, 0], [0, 0], "bfs")),
            ErrorKind::CellValue
        );
        assert_eq!(
            kind(&request(ok.clone(), [2, 0], [0, 0], "bfs")),
            ErrorKind::Bounds
        );
        assert_eq!(
            kind(&request(ok.clone(), [0, 0], [0, -1], "bfs")),
            ErrorKind::Bounds
        );
        assert_eq!(kind(&request(ok.clone(), [1, 1], [0, 0], "bfs")), ErrorKind::Wall);
        assert_eq!(
            kind(&request(ok, [0, 0], [1, 2], "breadth")),
            ErrorKind::UnknownAlgorithm
        );
    }

    #[test]
    fn checks_run_in_order() {
        // Ragged and bad value: shape wins.
        assert_eq!(
            kind(&request(vec![vec![0, 7], vec![0]], [0, 0], [0, 0], "bfs")),
            ErrorKind::Shape
        );
        // Out-of-bounds end and walled start: bounds win.
        assert_eq!(
            kind(&request(vec![vec![1, 0]], [0, 0], [5, 5], "bfs")),
            ErrorKind::Bounds
        );
        // Walled end and bad algorithm: wall wins.
        assert_eq!(
            kind(&request(vec![vec![0, 1]], [0, 0], [0, 1], "nope")),
            ErrorKind::Wall
        );
        // Start is reported before end.
        let err = request(vec![vec![0]], [9, 0], [9, 0], "bfs")
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Bounds {
                endpoint: Endpoint::Start,
                ..
            }
        ));
    }

    #[test]
    fn huge_coordinates_are_out_of_bounds() {
        let req = request(vec![vec![0]], [0, 0], [i64::MAX, i64::MIN], "bfs");
        assert_eq!(kind(&req), ErrorKind::Bounds);
    }

    #[test]
    fn query_from_typed_inputs() {
        let grid: Grid = "\
            ..
            #."
        .parse()
        .unwrap();
        let q = Query::new(grid.clone(), Coord::new(0, 0), Coord::new(1, 1), "a*").unwrap();
        assert_eq!(q.algorithm, Algorithm::Astar);
        let r = q.with_algorithm(Algorithm::Dfs).solve(&SearchConfig::default()).unwrap();
        assert_eq!(r.path.len(), 3);

        let err = Query::new(grid, Coord::new(1, 0), Coord::new(1, 1), "bfs").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Wall);
    }

    #[test]
    fn malformed_grid_is_classified() {
        let mut req = request(vec![vec![0]], [0, 0], [0, 0], "bfs");
        req.grid = Raw::Invalid;
        assert_eq!(
            req.validate().unwrap_err(),
            ValidationError::Grid(GridError::Shape(ShapeError::NotMatrix))
        );

        req.grid = Raw::Valid(vec![Raw::Valid(vec![Raw::Valid(0)]), Raw::Invalid]);
        assert_eq!(
            req.validate().unwrap_err(),
            ValidationError::Grid(GridError::Shape(ShapeError::NotARow { row: 1 }))
        );

        req.grid = Raw::Valid(vec![Raw::Valid(vec![Raw::Valid(0), Raw::Invalid])]);
        assert_eq!(
            req.validate().unwrap_err(),
            ValidationError::Grid(GridError::CellType { row: 0, col: 1 })
        );
        assert_eq!(kind(&req), ErrorKind::CellValue);
    }

    #[test]
    fn malformed_endpoints_and_selector_are_classified() {
        let mut req = request(vec![vec![0, 0], vec![1, 0]], [0, 0], [1, 1], "bfs");
        req.end = Raw::Invalid;
        assert_eq!(
            req.validate().unwrap_err(),
            ValidationError::Point {
                endpoint: Endpoint::End
            }
        );
        assert_eq!(kind(&req), ErrorKind::Bounds);

        req.end = [1, 1].into();
        req.algorithm = Raw::Invalid;
        assert_eq!(req.validate().unwrap_err(), ValidationError::NoAlgorithm);
        assert_eq!(kind(&req), ErrorKind::UnknownAlgorithm);

        // A walled endpoint is still reported ahead of the selector.
        req.start = [1, 0].into();
        assert_eq!(kind(&req), ErrorKind::Wall);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn decodes_wire_request() {
        let req: SolveRequest = serde_json::from_str(
            r#"{"grid": [[0, 0], [1, 0]], "start": [0, 0], "end": [1, 1], "algorithm": "jps"}"#,
        )
        .unwrap();
        assert_eq!(req.start, Raw::Valid([0, 0]));
        assert_eq!(req.validate().unwrap().algorithm, Algorithm::Jps);
    }

    fn decode(json: &str) -> SolveRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn non_matrix_grid_is_a_shape_error() {
        let req = decode(r#"{"grid": [0, 1], "start": [0, 0], "end": [0, 1], "algorithm": "bfs"}"#);
        assert_eq!(
            req.validate().unwrap_err(),
            ValidationError::Grid(GridError::Shape(ShapeError::NotARow { row: 0 }))
        );
        let req = decode(r#"{"grid": "..#", "start": [0, 0], "end": [0, 1], "algorithm": "bfs"}"#);
        assert_eq!(req.validate().unwrap_err().kind(), ErrorKind::Shape);
        let req = decode(r#"{"start": [0, 0], "end": [0, 1], "algorithm": "bfs"}"#);
        assert_eq!(req.validate().unwrap_err().kind(), ErrorKind::Shape);
    }

    #[test]
    fn non_integer_cells_are_cell_value_errors() {
        for cell in [r#""x""#, "2.5", "null", "true"] {
            let req = decode(&format!(
                r#"{{"grid": [[0, {cell}]], "start": [0, 0], "end": [0, 0], "algorithm": "bfs"}}"#
            ));
            assert_eq!(
                req.validate().unwrap_err(),
                ValidationError::Grid(GridError::CellType { row: 0, col: 1 }),
                "{cell}"
            );
        }
    }

    #[test]
    fn missing_or_non_string_algorithm_is_unknown() {
        for tail in ["", r#", "algorithm": 3"#, r#", "algorithm": null"#] {
            let req = decode(&format!(
                r#"{{"grid": [[0]], "start": [0, 0], "end": [0, 0]{tail}}}"#
            ));
            assert_eq!(req.validate().unwrap_err(), ValidationError::NoAlgorithm, "{tail:?}");
        }
    }

    #[test]
    fn malformed_point_is_a_bounds_error() {
        for start in ["[0]", "[0, 0, 0]", r#""0,0""#, "[0.5, 0]"] {
            let req = decode(&format!(
                r#"{{"grid": [[0]], "start": {start}, "end": [0, 0], "algorithm": "bfs"}}"#
            ));
            assert_eq!(req.validate().unwrap_err().kind(), ErrorKind::Bounds, "{start}");
        }
    }
}
