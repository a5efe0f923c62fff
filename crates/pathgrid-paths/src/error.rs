//! Error taxonomy: validation failures (raised before any search runs) and
//! search failures (resource exhaustion while running).

use std::fmt;

use pathgrid_core::{Coord, GridError};
use thiserror::Error;

use crate::algorithm::Algorithm;

/// Stable, caller-facing error kind names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Shape,
    CellValue,
    Bounds,
    Wall,
    UnknownAlgorithm,
    Capacity,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shape => "ShapeError",
            Self::CellValue => "CellValueError",
            Self::Bounds => "BoundsError",
            Self::Wall => "WallError",
            Self::UnknownAlgorithm => "UnknownAlgorithm",
            Self::Capacity => "CapacityError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which search endpoint a validation error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// Input rejected before any search runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(
        "{endpoint} [{row}, {col}] is out of grid bounds (0 <= row < {rows}, 0 <= col < {cols})"
    )]
    Bounds {
        endpoint: Endpoint,
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
    /// The endpoint is missing or is not a pair of integers.
    #[error("{endpoint} must be a [row, col] pair of integers")]
    Point { endpoint: Endpoint },
    #[error("{endpoint} {coord} is a wall cell")]
    Wall { endpoint: Endpoint, coord: Coord },
    #[error("unknown algorithm {name:?} (supported: {})", Algorithm::selectors())]
    UnknownAlgorithm { name: String },
    /// The selector is missing or is not a string.
    #[error("algorithm must be a string (supported: {})", Algorithm::selectors())]
    NoAlgorithm,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Grid(GridError::Shape(_)) => ErrorKind::Shape,
            Self::Grid(GridError::CellValue { .. } | GridError::CellType { .. }) => {
                ErrorKind::CellValue
            }
            Self::Bounds { .. } | Self::Point { .. } => ErrorKind::Bounds,
            Self::Wall { .. } => ErrorKind::Wall,
            Self::UnknownAlgorithm { .. } | Self::NoAlgorithm => ErrorKind::UnknownAlgorithm,
        }
    }
}

/// The resource a search ran out of.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CapacityLimit {
    Depth,
    Expansions,
}

impl fmt::Display for CapacityLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Depth => "depth",
            Self::Expansions => "expansion",
        })
    }
}

/// A running search failed. Only resource exhaustion can cause this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{algorithm} exceeded its {limit} limit of {max}")]
    Capacity {
        algorithm: Algorithm,
        limit: CapacityLimit,
        max: usize,
    },
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Capacity { .. } => ErrorKind::Capacity,
        }
    }
}

/// Any failure of a validate-then-solve call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(e) => e.kind(),
            Self::Search(e) => e.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathgrid_core::ShapeError;

    #[test]
    fn kinds_map_to_stable_names() {
        let shape: ValidationError = GridError::Shape(ShapeError::Empty).into();
        assert_eq!(shape.kind().as_str(), "ShapeError");
        let cell: ValidationError = GridError::CellValue {
            row: 0,
            col: 0,
            value: 3,
        }
        .into();
        assert_eq!(cell.kind().as_str(), "CellValueError");
        let cap = Error::from(SearchError::Capacity {
            algorithm: Algorithm::Rbfs,
            limit: CapacityLimit::Depth,
            max: 10,
        });
        assert_eq!(cap.kind(), ErrorKind::Capacity);
        assert_eq!(cap.to_string(), "rbfs exceeded its depth limit of 10");
    }

    #[test]
    fn messages_name_the_endpoint() {
        let e = ValidationError::Wall {
            endpoint: Endpoint::End,
            coord: Coord::new(1, 2),
        };
        assert_eq!(e.to_string(), "end (1, 2) is a wall cell");
        let e = ValidationError::Bounds {
            endpoint: Endpoint::Start,
            row: -1,
            col: 0,
            rows: 3,
            cols: 4,
        };
        assert_eq!(
            e.to_string(),
            "start [-1, 0] is out of grid bounds (0 <= row < 3, 0 <= col < 4)"
        );
    }

    #[test]
    fn unknown_algorithm_lists_selectors() {
        let e = ValidationError::UnknownAlgorithm {
            name: "dijkstar".into(),
        };
        let msg = e.to_string();
        assert!(msg.starts_with("unknown algorithm \"dijkstar\""));
        assert!(msg.contains("astar"));
        assert!(msg.contains("rbfs"));
    }

    #[test]
    fn malformed_fields_share_kinds_with_their_checks() {
        let cell: ValidationError = GridError::CellType { row: 0, col: 1 }.into();
        assert_eq!(cell.kind(), ErrorKind::CellValue);
        let rows: ValidationError = GridError::Shape(ShapeError::NotMatrix).into();
        assert_eq!(rows.kind(), ErrorKind::Shape);
        let point = ValidationError::Point {
            endpoint: Endpoint::End,
        };
        assert_eq!(point.kind(), ErrorKind::Bounds);
        assert_eq!(point.to_string(), "end must be a [row, col] pair of integers");
        let algo = ValidationError::NoAlgorithm;
        assert_eq!(algo.kind(), ErrorKind::UnknownAlgorithm);
        assert!(algo.to_string().contains("dijkstra"));
    }
}
