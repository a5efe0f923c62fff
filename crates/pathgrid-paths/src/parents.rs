use pathgrid_core::{Coord, Grid};

/// Sentinel for "no parent".
const NONE: usize = usize::MAX;

/// Flat parent map: for each cell index, the index it was reached from.
pub(crate) struct ParentMap {
    parents: Vec<usize>,
}

impl ParentMap {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            parents: vec![NONE; len],
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, child: usize, parent: usize) {
        self.parents[child] = parent;
    }

    #[inline]
    pub(crate) fn get(&self, child: usize) -> Option<usize> {
        match self.parents[child] {
            NONE => None,
            p => Some(p),
        }
    }

    /// Follow parents from `from` until `until` is reached.
    ///
    /// Returns the cells in walk order, both ends included, or `None` if the
    /// chain breaks before reaching `until`.
    pub(crate) fn walk_back(&self, grid: &Grid, from: usize, until: usize) -> Option<Vec<Coord>> {
        let mut out = vec![grid.coord(from)];
        let mut ci = from;
        while ci != until {
            ci = self.get(ci)?;
            out.push(grid.coord(ci));
        }
        Some(out)
    }

    /// The path `start..=end` reconstructed by walking back from `end`.
    ///
    /// Empty if `end` was never reached from `start`.
    pub(crate) fn path_to(&self, grid: &Grid, start: usize, end: usize) -> Vec<Coord> {
        match self.walk_back(grid, end, start) {
            Some(mut path) => {
                path.reverse();
                path
            }
            None => Vec::new(),
        }
    }
}
