use std::collections::VecDeque;

use pathgrid_core::{Coord, Grid};

use crate::neighbors::{Neighbors, endpoints};
use crate::parents::ParentMap;
use crate::result::SearchResult;

/// Breadth-first search from `start` to `end`.
///
/// Cells are marked visited when enqueued and settled (appended to the
/// trace) when dequeued. Every edge costs 1, so the path has the minimum
/// number of cells.
pub fn bfs(grid: &Grid, start: Coord, end: Coord) -> SearchResult {
    let Some((start_idx, end_idx)) = endpoints(grid, start, end) else {
        return SearchResult::default();
    };

    let mut visited = vec![false; grid.len()];
    let mut parents = ParentMap::new(grid.len());
    let mut visited_order = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut nbrs = Neighbors::new();

    visited[start_idx] = true;
    queue.push_back(start_idx);

    let mut found = false;
    while let Some(ci) = queue.pop_front() {
        visited_order.push(grid.coord(ci));
        if ci == end_idx {
            found = true;
            break;
        }

        for &ni in nbrs.passable(grid, ci) {
            if visited[ni] {
                continue;
            }
            visited[ni] = true;
            parents.set(ni, ci);
            queue.push_back(ni);
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
