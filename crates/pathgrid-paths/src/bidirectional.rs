//! Bidirectional breadth-first search.
//!
//! Two BFS frontiers, one from each endpoint, are expanded a full layer at a
//! time in alternating rounds (forward first). The search stops as soon as
//! either side discovers a cell the other side has already reached: the
//! meeting cell. A side whose queue runs dry simply skips its turn, so an
//! unreachable `end` leaves both components fully settled. The path is the forward parent chain from `start` to the
//! meeting cell followed by the backward chain from the meeting cell to
//! `end`.

use std::collections::VecDeque;

use pathgrid_core::{Coord, Grid};

use crate::neighbors::{Neighbors, endpoints};
use crate::parents::ParentMap;
use crate::result::SearchResult;

/// One direction of the search.
struct Side {
    queue: VecDeque<usize>,
    reached: Vec<bool>,
    parents: ParentMap,
}

impl Side {
    fn new(len: usize, origin: usize) -> Self {
        let mut reached = vec![false; len];
        reached[origin] = true;
        Self {
            queue: VecDeque::from([origin]),
            reached,
            parents: ParentMap::new(len),
        }
    }

    /// Expand every cell currently queued on this side. Settled cells are
    /// appended to `trace`. Returns the meeting cell if a newly discovered
    /// neighbor was already reached by `other`.
    fn expand_layer(
        &mut self,
        grid: &Grid,
        other: &Side,
        nbrs: &mut Neighbors,
        trace: &mut Vec<Coord>,
    ) -> Option<usize> {
        for _ in 0..self.queue.len() {
            let ci = self.queue.pop_front()?;
            trace.push(grid.coord(ci));
            for &ni in nbrs.passable(grid, ci) {
                if self.reached[ni] {
                    continue;
                }
                self.reached[ni] = true;
                self.parents.set(ni, ci);
                self.queue.push_back(ni);
                if other.reached[ni] {
                    return Some(ni);
                }
            }
        }
        None
    }
}

/// Bidirectional BFS from `start` to `end`.
///
/// The trace interleaves both sides' settle order round by round. The path is
/// valid and connected but not guaranteed to be the shortest.
pub fn bidirectional(grid: &Grid, start: Coord, end: Coord) -> SearchResult {
    let Some((start_idx, end_idx)) = endpoints(grid, start, end) else {
        return SearchResult::default();
    };
    if start_idx == end_idx {
        return SearchResult::single(start);
    }

    let mut forward = Side::new(grid.len(), start_idx);
    let mut backward = Side::new(grid.len(), end_idx);
    let mut visited_order = Vec::new();
    let mut nbrs = Neighbors::new();

    let mut meet = None;
    while meet.is_none() && (!forward.queue.is_empty() || !backward.queue.is_empty()) {
        meet = forward.expand_layer(grid, &backward, &mut nbrs, &mut visited_order);
        if meet.is_some() {
            break;
        }
        meet = backward.expand_layer(grid, &forward, &mut nbrs, &mut visited_order);
    }

    let Some(meet_idx) = meet else {
        return SearchResult {
            visited_order,
            path: Vec::new(),
        };
    };

    let path = join_at(grid, &forward, &backward, start_idx, meet_idx, end_idx);
    SearchResult {
        visited_order,
        path,
    }
}

/// Concatenate `start..=meet` (forward chain, reversed) with `meet..=end`
/// (backward chain) without repeating the meeting cell.
fn join_at(
    grid: &Grid,
    forward: &Side,
    backward: &Side,
    start_idx: usize,
    meet_idx: usize,
    end_idx: usize,
) -> Vec<Coord> {
    let (Some(mut head), Some(tail)) = (
        forward.parents.walk_back(grid, meet_idx, start_idx),
        backward.parents.walk_back(grid, meet_idx, end_idx),
    ) else {
        return Vec::new();
    };
    head.reverse();
    head.extend(tail.into_iter().skip(1));
    head
}
