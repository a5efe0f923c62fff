use pathgrid_core::{Coord, Grid};

use crate::frontier::{Frontier, UNREACHABLE};
use crate::neighbors::{Neighbors, endpoints};
use crate::parents::ParentMap;
use crate::result::SearchResult;

/// Step cost between adjacent free cells.
const STEP_COST: i32 = 1;

/// Dijkstra's shortest-path search from `start` to `end`.
///
/// The frontier is keyed by the cumulative cost `g`. Deletion is lazy: a
/// popped cell that is already settled is discarded. A cell joins the trace
/// on its first successful pop. With unit step costs the path length equals
/// the BFS path length.
pub fn dijkstra(grid: &Grid, start: Coord, end: Coord) -> SearchResult {
    let Some((start_idx, end_idx)) = endpoints(grid, start, end) else {
        return SearchResult::default();
    };

    let mut dist = vec![UNREACHABLE; grid.len()];
    let mut settled = vec![false; grid.len()];
    let mut parents = ParentMap::new(grid.len());
    let mut visited_order = Vec::new();
    let mut open = Frontier::new();
    let mut nbrs = Neighbors::new();

    dist[start_idx] = 0;
    open.push(0, start_idx);

    let mut found = false;
    while let Some(current) = open.pop() {
        let ci = current.idx;
        // Skip stale entries.
        if settled[ci] {
            continue;
        }
        settled[ci] = true;
        visited_order.push(grid.coord(ci));

        if ci == end_idx {
            found = true;
            break;
        }

        let current_g = dist[ci];
        for &ni in nbrs.passable(grid, ci) {
            if settled[ni] {
                continue;
            }
            let tentative = current_g + STEP_COST;
            if tentative < dist[ni] {
                dist[ni] = tentative;
                parents.set(ni, ci);
                open.push(tentative, ni);
            }
        }
    }

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
