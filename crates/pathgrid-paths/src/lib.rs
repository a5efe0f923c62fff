//! Search strategies for uniform-cost 4-connected occupancy grids.
//!
//! Every strategy reports both the order in which it settled cells (the
//! exploration trace) and the path it found, as a [`SearchResult`]:
//!
//! | Strategy | Function | Shortest path |
//! |---|---|---|
//! | Breadth-first search | [`bfs`] | yes |
//! | Depth-first search | [`dfs`] | no |
//! | Dijkstra | [`dijkstra`] | yes |
//! | A\* (Manhattan heuristic) | [`astar`] | yes |
//! | Greedy best-first search | [`greedy`] | no |
//! | Bidirectional BFS | [`bidirectional`] | no |
//! | Jump Point Search | [`jps`] | no |
//! | Recursive best-first search | [`rbfs`] | yes |
//!
//! Callers normally go through the dispatcher: build a [`SolveRequest`] (or
//! a [`Query`] from typed inputs), validate it, and hand it to [`solve`] /
//! [`solve_request`]. The strategy is picked by name through [`Algorithm`].
//!
//! Each call owns all of its bookkeeping and only reads the grid, so
//! searches may run concurrently on separate threads.

mod algorithm;
mod astar;
mod bfs;
mod bidirectional;
mod config;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod greedy;
mod jps;
mod neighbors;
mod parents;
mod rbfs;
mod result;
mod validate;

pub use algorithm::{Algorithm, SolveFn, solve, solve_request};
pub use astar::astar;
pub use bfs::bfs;
pub use bidirectional::bidirectional;
pub use config::{
    DEFAULT_RBFS_MAX_DEPTH, DEFAULT_RBFS_MAX_EXPANSIONS, RbfsLimits, SearchConfig,
};
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use error::{CapacityLimit, Endpoint, Error, ErrorKind, SearchError, ValidationError};
pub use frontier::UNREACHABLE;
pub use greedy::greedy;
pub use jps::jps;
pub use neighbors::Neighbors;
pub use rbfs::rbfs;
pub use result::SearchResult;
pub use validate::{Query, Raw, RawGrid, SolveRequest};
