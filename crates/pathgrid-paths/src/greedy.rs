use pathgrid_core::{Coord, Grid};

use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::neighbors::{Neighbors, endpoints};
use crate::parents::ParentMap;
use crate::result::SearchResult;

/// Greedy best-first search from `start` to `end`.
///
/// Frontier mechanics match [`astar`](crate::astar) but the key is the
/// heuristic `h` alone. There is no accumulated cost to improve, so each cell
/// is pushed once, on discovery, and keeps the parent it was discovered from.
pub fn greedy(grid: &Grid, start: Coord, end: Coord) -> SearchResult {
    let Some((start_idx, end_idx)) = endpoints(grid, start, end) else {
        return SearchResult::default();
    };

    let mut discovered = vec![false; grid.len()];
    let mut closed = vec![false; grid.len()];
    let mut parents = ParentMap::new(grid.len());
    let mut visited_order = Vec::new();
    let mut open = Frontier::new();
    let mut nbrs = Neighbors::new();

    discovered[start_idx] = true;
    open.push(manhattan(start, end), start_idx);

    let mut found = false;
    while let Some(current) = open.pop() {
        let ci = current.idx;
        if closed[ci] {
            continue;
        }
        closed[ci] = true;
        visited_order.push(grid.coord(ci));

        if ci == end_idx {
            found = true;
            break;
        }

        for &ni in nbrs.passable(grid, ci) {
            if discovered[ni] {
                continue;
            }
            discovered[ni] = true;
            parents.set(ni, ci);
            open.push(manhattan(grid.coord(ni), end), ni);
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
