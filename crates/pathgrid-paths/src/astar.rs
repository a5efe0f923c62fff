use log::debug;
use pathgrid_core::{Coord, Grid};

use crate::distance::manhattan;
use crate::frontier::{Frontier, UNREACHABLE};
use crate::neighbors::{Neighbors, endpoints};
use crate::parents::ParentMap;
use crate::result::SearchResult;

/// A* search from `start` to `end` with the Manhattan heuristic.
///
/// The frontier is keyed by `f = g + h`. There is no open-set membership
/// test and no decrease-key: every strict improvement of a cell's `g` pushes
/// a fresh record, so a cell may have several records pending at once. The
/// stale ones are discarded when popped because the cell is already closed,
/// which keeps the trace free of repeats. Manhattan distance is consistent on
/// a 4-connected unit-cost grid, so the first pop of `end` yields an optimal
/// path.
pub fn astar(grid: &Grid, start: Coord, end: Coord) -> SearchResult {
    let Some((start_idx, end_idx)) = endpoints(grid, start, end) else {
        return SearchResult::default();
    };

    let mut g = vec![UNREACHABLE; grid.len()];
    let mut closed = vec![false; grid.len()];
    let mut parents = ParentMap::new(grid.len());
    let mut visited_order = Vec::new();
    let mut open = Frontier::new();
    let mut nbrs = Neighbors::new();

    g[start_idx] = 0;
    open.push(manhattan(start, end), start_idx);

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };
        let ci = current.idx;
        if closed[ci] {
            continue;
        }
        closed[ci] = true;
        visited_order.push(grid.coord(ci));

        if ci == end_idx {
            break 'search true;
        }

        let current_g = g[ci];
        for &ni in nbrs.passable(grid, ci) {
            if closed[ni] {
                continue;
            }
            let tentative_g = current_g + 1;
            if tentative_g >= g[ni] {
                continue;
            }
            g[ni] = tentative_g;
            parents.set(ni, ci);
            open.push(tentative_g + manhattan(grid.coord(ni), end), ni);
        }
    };

    debug!(
        "[A*] closed {} cells, {} records left on the frontier",
        visited_order.len(),
        open.len()
    );

    let path = if found {
        parents.path_to(grid, start_idx, end_idx)
    } else {
        Vec::new()
    };
    SearchResult {
        visited_order,
        path,
    }
}
