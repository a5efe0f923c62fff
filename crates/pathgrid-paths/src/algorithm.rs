//! Strategy selection and dispatch.
//!
//! The eight strategies form a closed set ([`Algorithm`]) behind one static
//! dispatch table. Adding a strategy means one enum variant, one selector in
//! [`Algorithm::name`], and one row in `REGISTRY`.

use std::fmt;
use std::str::FromStr;

use log::debug;
use pathgrid_core::{Coord, Grid};

use crate::config::SearchConfig;
use crate::error::{Error, SearchError, ValidationError};
use crate::result::SearchResult;
use crate::validate::{Query, SolveRequest};
use crate::{astar, bfs, bidirectional, dfs, dijkstra, greedy, jps, rbfs};

/// A search strategy selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Astar,
    Greedy,
    Bidirectional,
    Jps,
    Rbfs,
}

/// Uniform strategy signature used by the dispatch table.
pub type SolveFn = fn(&Grid, Coord, Coord, &SearchConfig) -> Result<SearchResult, SearchError>;

/// Dispatch table, in declaration order of [`Algorithm`].
const REGISTRY: [(Algorithm, SolveFn); 8] = [
    (Algorithm::Bfs, |g, s, e, _| Ok(bfs(g, s, e))),
    (Algorithm::Dfs, |g, s, e, _| Ok(dfs(g, s, e))),
    (Algorithm::Dijkstra, |g, s, e, _| Ok(dijkstra(g, s, e))),
    (Algorithm::Astar, |g, s, e, _| Ok(astar(g, s, e))),
    (Algorithm::Greedy, |g, s, e, _| Ok(greedy(g, s, e))),
    (Algorithm::Bidirectional, |g, s, e, _| {
        Ok(bidirectional(g, s, e))
    }),
    (Algorithm::Jps, |g, s, e, _| Ok(jps(g, s, e))),
    (Algorithm::Rbfs, |g, s, e, cfg| rbfs(g, s, e, &cfg.rbfs)),
];

impl Algorithm {
    /// Every strategy, in dispatch-table order.
    pub const ALL: [Algorithm; 8] = [
        Self::Bfs,
        Self::Dfs,
        Self::Dijkstra,
        Self::Astar,
        Self::Greedy,
        Self::Bidirectional,
        Self::Jps,
        Self::Rbfs,
    ];

    /// Canonical lowercase selector.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::Astar => "astar",
            Self::Greedy => "greedy",
            Self::Bidirectional => "bidirectional",
            Self::Jps => "jps",
            Self::Rbfs => "rbfs",
        }
    }

    /// Comma-separated list of canonical selectors.
    pub fn selectors() -> String {
        Self::ALL.map(Self::name).join(", ")
    }

    /// Whether the strategy always returns a shortest path.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::Bfs | Self::Dijkstra | Self::Astar | Self::Rbfs)
    }

    /// The table entry for this strategy.
    #[inline]
    pub fn solver(self) -> SolveFn {
        REGISTRY[self as usize].1
    }

    /// Run this strategy.
    pub fn solve(
        self,
        grid: &Grid,
        start: Coord,
        end: Coord,
        config: &SearchConfig,
    ) -> Result<SearchResult, SearchError> {
        debug!(
            "[{self}] solving {}x{} grid from {start} to {end}",
            grid.rows(),
            grid.cols()
        );
        let result = self.solver()(grid, start, end, config)?;
        debug!(
            "[{self}] settled {} cells, path of {} cells",
            result.visited_order.len(),
            result.path.len()
        );
        Ok(result)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ValidationError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let algo = match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Self::Bfs,
            "dfs" => Self::Dfs,
            "dijkstra" => Self::Dijkstra,
            "astar" | "a*" | "a-star" => Self::Astar,
            "greedy" | "gbfs" | "greedy_best_first" => Self::Greedy,
            "bidirectional" | "bidir" => Self::Bidirectional,
            "jps" | "jump_point" => Self::Jps,
            "rbfs" | "recursive_best_first" => Self::Rbfs,
            _ => {
                return Err(ValidationError::UnknownAlgorithm {
                    name: s.to_string(),
                });
            }
        };
        Ok(algo)
    }
}

/// Run a validated query.
pub fn solve(query: &Query, config: &SearchConfig) -> Result<SearchResult, SearchError> {
    query
        .algorithm
        .solve(&query.grid, query.start, query.end, config)
}

/// Validate a raw request, then run it.
pub fn solve_request(req: &SolveRequest, config: &SearchConfig) -> Result<SearchResult, Error> {
    let query = req.validate()?;
    Ok(solve(&query, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_in_declaration_order() {
        for (i, (algo, _)) in REGISTRY.iter().enumerate() {
            assert_eq!(*algo as usize, i);
            assert_eq!(Algorithm::ALL[i], *algo);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("BFS".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
        assert_eq!(" AStar ".parse::<Algorithm>().unwrap(), Algorithm::Astar);
        assert_eq!("a*".parse::<Algorithm>().unwrap(), Algorithm::Astar);
        assert_eq!("GBFS".parse::<Algorithm>().unwrap(), Algorithm::Greedy);
        for algo in Algorithm::ALL {
            assert_eq!(algo.name().parse::<Algorithm>().unwrap(), algo);
            assert_eq!(algo.to_string().to_uppercase().parse::<Algorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "dijkstar".parse::<Algorithm>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownAlgorithm {
                name: "dijkstar".into()
            }
        );
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn every_strategy_dispatches() {
        let grid = Grid::new(5, 5);
        let cfg = SearchConfig::default();
        for algo in Algorithm::ALL {
            let r = algo
                .solve(&grid, Coord::new(0, 0), Coord::new(4, 4), &cfg)
                .unwrap();
            assert_eq!(r.path.first(), Some(&Coord::new(0, 0)), "{algo}");
            assert_eq!(r.path.last(), Some(&Coord::new(4, 4)), "{algo}");
            if algo.is_optimal() {
                assert_eq!(r.path.len(), 9, "{algo}");
            }
        }
    }

    #[test]
    fn solve_request_validates_first() {
        let req = SolveRequest::new(vec![vec![0, 0], vec![0, 0]], [0, 0], [1, 1], "Dijkstra");
        let r = solve_request(&req, &SearchConfig::default()).unwrap();
        assert_eq!(r.path.len(), 3);

        let bad = SolveRequest {
            algorithm: String::from("teleport").into(),
            ..req
        };
        let err = solve_request(&bad, &SearchConfig::default()).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::UnknownAlgorithm);
    }
}
