//! **pathgrid-core**: occupancy grid model for the pathgrid search engine.
//!
//! This crate provides the foundational types shared by every search
//! strategy: the [`Coord`] cell address, the [`Cell`] occupancy state, and
//! the immutable [`Grid`] built from raw wire rows or ASCII maps.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use error::{GridError, ShapeError};
pub use geom::Coord;
pub use grid::Grid;
