use pathgrid_core::{Coord, Grid};

use crate::neighbors::{Neighbors, endpoints};
use crate::parents::ParentMap;
use crate::result::SearchResult;

/// Depth-first search from `start` to `end`.
///
/// Same bookkeeping as [`bfs`](crate::bfs) but with a LIFO stack: neighbors
/// are pushed up, right, down, left, so the most recently pushed direction
/// (left) is explored first. The returned path is the first one discovered
/// and is generally not the shortest.
pub fn dfs(grid: &Grid, start: Coord, end: Coord) -> SearchResult {
    let Some((start_idx, end_idx)) = endpoints(grid, start, end) else {
        return SearchResult::default();
    };

    let mut visited = vec![false; grid.len()];
    let mut parents = ParentMap::new(grid.len());
    let mut visited_order = Vec::new();
    let mut stack = vec![start_idx];
    let mut nbrs = Neighbors::new();
    visited[start_idx] = true;

    let mut found = false;
    while let Some(ci) = stack.pop() {
        visited_order.push(grid.coord(ci));
        if ci == end_idx {
            found = true;
            break;
        }

        for &ni in nbrs.passable(grid, ci) {
            if !visited[ni] {
                visited[ni] = true;
                parents.set(ni, ci);
                stack.push(ni);
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
