//! Jump Point Search (JPS) on 4-connected uniform-cost grids.
//!
//! JPS is an A* variant that "jumps" along straight lines, only adding cells
//! to the open list at *jump points*: the goal, cells with a forced
//! neighbour, and (for vertical runs) cells from which a horizontal run
//! reaches a jump point. The trace lists settled jump points; the returned
//! path is interpolated back to single steps.

use log::trace;
use pathgrid_core::{Coord, Grid};

use crate::distance::manhattan;
use crate::frontier::{Frontier, UNREACHABLE};
use crate::neighbors::endpoints;
use crate::parents::ParentMap;
use crate::result::SearchResult;

/// Jump Point Search from `start` to `end`.
///
/// `g` between successive jump points is their Manhattan distance: the
/// skipped cells are still walked, one unit each.
pub fn jps(grid: &Grid, start: Coord, end: Coord) -> SearchResult {
    let Some((start_idx, end_idx)) = endpoints(grid, start, end) else {
        return SearchResult::default();
    };

    let mut g = vec![UNREACHABLE; grid.len()];
    let mut closed = vec![false; grid.len()];
    let mut parents = ParentMap::new(grid.len());
    let mut visited_order = Vec::new();
    let mut open = Frontier::new();

    g[start_idx] = 0;
    open.push(manhattan(start, end), start_idx);

    let found = 'search: loop {
        let Some(cur) = open.pop() else {
            break 'search false;
        };
        let ci = cur.idx;
        if closed[ci] {
            continue;
        }
        closed[ci] = true;
        let cp = grid.coord(ci);
        visited_order.push(cp);
        if ci == end_idx {
            break 'search true;
        }

        for dir in Coord::DIRS {
            let Some(jp) = jump(grid, cp, dir, end) else {
                continue;
            };
            let Some(ji) = grid.idx(jp) else {
                continue;
            };
            if closed[ji] {
                continue;
            }
            let tentative_g = g[ci] + manhattan(cp, jp);
            if tentative_g >= g[ji] {
                continue;
            }
            trace!("[JPS] jump point {jp} from {cp} (g = {tentative_g})");
            g[ji] = tentative_g;
            parents.set(ji, ci);
            open.push(tentative_g + manhattan(jp, end), ji);
        }
    };

    if !found {
        return SearchResult {
            visited_order,
            path: Vec::new(),
        };
    }

    // Reconstruct jump-point path, then interpolate to get a step-by-step path.
    let jp_path = parents.path_to(grid, start_idx, end_idx);
    SearchResult {
        visited_order,
        path: interpolate_path(&jp_path),
    }
}

// ---------------------------------------------------------------------------
// JPS internals
// ---------------------------------------------------------------------------

/// Whether stepping from `cur` to `next` (along `dir`) exposes a forced
/// neighbour: a side cell of `next` that is open while the same side of
/// `cur` is blocked.
fn has_forced_neighbor(grid: &Grid, cur: Coord, next: Coord, dir: Coord) -> bool {
    let sides = if dir.is_horizontal() {
        [Coord::UP, Coord::DOWN]
    } else {
        [Coord::LEFT, Coord::RIGHT]
    };
    sides
        .into_iter()
        .any(|s| grid.is_free(next + s) && !grid.is_free(cur + s))
}

/// Walk from `from` along `dir` until a jump point is found or the run hits
/// a wall or the grid edge.
fn jump(grid: &Grid, from: Coord, dir: Coord, goal: Coord) -> Option<Coord> {
    let mut cur = from;
    loop {
        let next = cur + dir;
        if !grid.is_free(next) {
            return None;
        }
        if next == goal {
            return Some(next);
        }
        if has_forced_neighbor(grid, cur, next, dir) {
            return Some(next);
        }
        // A vertical run stops wherever a horizontal run would find something.
        // Horizontal runs never branch, so this nests at most one level.
        if dir.is_vertical()
            && (jump(grid, next, Coord::LEFT, goal).is_some()
                || jump(grid, next, Coord::RIGHT, goal).is_some())
        {
            return Some(next);
        }
        cur = next;
    }
}

/// Expand jump-point path into a step-by-step path.
///
/// Consecutive jump points always share a row or a column.
fn interpolate_path(jp_path: &[Coord]) -> Vec<Coord> {
    let Some(&last) = jp_path.last() else {
        return Vec::new();
    };
    let mut result = Vec::new();
    for window in jp_path.windows(2) {
        let (a, b) = (window[0], window[1]);
        let step = a.step_toward(b);
        let mut c = a;
        while c != b {
            result.push(c);
            c = c + step;
        }
    }
    result.push(last);
    result
}
