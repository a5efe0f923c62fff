//! Recursive best-first search (RBFS).
//!
//! RBFS is a linear-space approximation of A*. Each node carries an f-limit
//! inherited from its parent: the best alternative available elsewhere. The
//! search descends into the most promising successor until every successor
//! exceeds the limit, then backs up, reporting the smallest f-value it saw so
//! the parent can rank that subtree against its siblings.
//!
//! The recursion runs on an explicit stack of [`Frame`]s so deep searches
//! cannot exhaust the call stack. Cycle exclusion uses an "on the current
//! path" mask, not a global visited set, so two branches may expand the same
//! cell.
//!
//! Without a path to the goal RBFS keeps backing up and re-descending until a
//! limit trips, so reachability is settled first with a breadth-first sweep.
//! An unreachable goal yields that sweep's trace (the start's component) and
//! an empty path.

use log::{debug, trace, warn};
use pathgrid_core::{Coord, Grid};

use crate::algorithm::Algorithm;
use crate::bfs::bfs;
use crate::config::RbfsLimits;
use crate::distance::manhattan;
use crate::error::{CapacityLimit, SearchError};
use crate::frontier::UNREACHABLE;
use crate::neighbors::{Neighbors, endpoints};
use crate::result::SearchResult;

/// A successor and its backed-up f-value.
#[derive(Clone, Copy, Debug)]
struct Successor {
    idx: usize,
    f: i32,
}

/// One level of the (former) recursion.
struct Frame {
    idx: usize,
    g: i32,
    f_limit: i32,
    /// Sorted ascending by `f`; `successors[0]` is the child being explored.
    successors: Vec<Successor>,
}

/// What the driver loop does next.
enum Step {
    /// Visit a node: `f` is the value its parent stored for it.
    Enter {
        idx: usize,
        g: i32,
        f: i32,
        f_limit: i32,
    },
    /// Pick the best successor of the top frame, or back up.
    Advance,
    /// The child of the top frame failed with this backed-up f-value.
    Return(i32),
}

/// Recursive best-first search from `start` to `end`.
///
/// The trace lists each cell the first time it is expanded; re-expansions
/// after a backtrack are not repeated. When `end` is unreachable the trace is
/// the start's component in breadth-first order. Fails with
/// [`SearchError::Capacity`] when the stack would grow past
/// `limits.max_depth` frames or the search expands more than
/// `limits.max_expansions` nodes.
pub fn rbfs(
    grid: &Grid,
    start: Coord,
    end: Coord,
    limits: &RbfsLimits,
) -> Result<SearchResult, SearchError> {
    let Some((start_idx, end_idx)) = endpoints(grid, start, end) else {
        return Ok(SearchResult::default());
    };
    let sweep = bfs(grid, start, end);
    if !sweep.found() {
        debug!(
            "[RBFS] {end} unreachable from {start}, settled {} cells",
            sweep.visited_order.len()
        );
        return Ok(sweep);
    }
    let h = |idx: usize| manhattan(grid.coord(idx), end);

    let mut on_path = vec![false; grid.len()];
    let mut expanded = vec![false; grid.len()];
    let mut visited_order = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut nbrs = Neighbors::new();
    let mut expansions = 0usize;

    let mut step = Step::Enter {
        idx: start_idx,
        g: 0,
        f: h(start_idx),
        f_limit: UNREACHABLE,
    };

    loop {
        step = match step {
            Step::Enter { idx, g, f, f_limit } => {
                expansions += 1;
                if expansions > limits.max_expansions {
                    return Err(capacity(CapacityLimit::Expansions, limits.max_expansions));
                }
                if !expanded[idx] {
                    expanded[idx] = true;
                    visited_order.push(grid.coord(idx));
                }

                if idx == end_idx {
                    let path: Vec<Coord> = stack
                        .iter()
                        .map(|frame| grid.coord(frame.idx))
                        .chain(std::iter::once(end))
                        .collect();
                    debug!("[RBFS] reached goal after {expansions} expansions");
                    return Ok(SearchResult {
                        visited_order,
                        path,
                    });
                }

                // A node is worth at least what its parent backed up for it.
                let f = (g + h(idx)).max(f);
                let mut successors: Vec<Successor> = nbrs
                    .passable(grid, idx)
                    .iter()
                    .filter(|&&ni| !on_path[ni])
                    .map(|&ni| Successor {
                        idx: ni,
                        f: (g + 1 + h(ni)).max(f),
                    })
                    .collect();

                if successors.is_empty() {
                    Step::Return(UNREACHABLE)
                } else {
                    if stack.len() >= limits.max_depth {
                        return Err(capacity(CapacityLimit::Depth, limits.max_depth));
                    }
                    // Stable sort keeps neighbor order among equal f-values.
                    successors.sort_by_key(|s| s.f);
                    on_path[idx] = true;
                    stack.push(Frame {
                        idx,
                        g,
                        f_limit,
                        successors,
                    });
                    Step::Advance
                }
            }

            Step::Return(value) => {
                let Some(frame) = stack.last_mut() else {
                    break;
                };
                frame.successors[0].f = value;
                frame.successors.sort_by_key(|s| s.f);
                Step::Advance
            }

            Step::Advance => {
                let Some(frame) = stack.last() else {
                    break;
                };
                let best = frame.successors[0];
                if best.f == UNREACHABLE || best.f > frame.f_limit {
                    trace!(
                        "[RBFS] backtrack from {} with f = {}",
                        grid.coord(frame.idx),
                        best.f
                    );
                    on_path[frame.idx] = false;
                    stack.pop();
                    Step::Return(best.f)
                } else {
                    let alternative = frame.successors.get(1).map_or(UNREACHABLE, |s| s.f);
                    Step::Enter {
                        idx: best.idx,
                        g: frame.g + 1,
                        f: best.f,
                        f_limit: frame.f_limit.min(alternative),
                    }
                }
            }
        };
    }

    debug!("[RBFS] exhausted after {expansions} expansions");
    Ok(SearchResult {
        visited_order,
        path: Vec::new(),
    })
}

fn capacity(limit: CapacityLimit, max: usize) -> SearchError {
    warn!("[RBFS] {limit} limit of {max} reached, aborting");
    SearchError::Capacity {
        algorithm: Algorithm::Rbfs,
        limit,
        max,
    }
}
