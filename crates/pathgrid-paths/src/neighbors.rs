use pathgrid_core::{Coord, Grid};

/// Cached neighbor computation helper.
///
/// Enumerates the passable 4-neighbors of a cell as flat grid indices, always
/// in the order up, right, down, left.
pub struct Neighbors {
    buf: Vec<usize>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the free in-bounds neighbors of the cell at flat index `idx`.
    pub fn passable(&mut self, grid: &Grid, idx: usize) -> &[usize] {
        self.buf.clear();
        let c = grid.coord(idx);
        for n in c.neighbors_4() {
            if grid.is_free(n) {
                if let Some(ni) = grid.idx(n) {
                    self.buf.push(ni);
                }
            }
        }
        &self.buf
    }
}

/// Flat indices of `start` and `end` if both are in bounds and free.
///
/// Strategies are only handed validated endpoints, but they stay total: a bad
/// endpoint yields an empty result instead of a panic.
pub(crate) fn endpoints(grid: &Grid, start: Coord, end: Coord) -> Option<(usize, usize)> {
    if !grid.is_free(start) || !grid.is_free(end) {
        return None;
    }
    Some((grid.idx(start)?, grid.idx(end)?))
}
