use pathgrid_core::Coord;

/// Outcome of one search: the exploration trace and the path found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells in first-settled order.
    pub visited_order: Vec<Coord>,
    /// Cells from start to end inclusive, or empty if the end is unreachable.
    pub path: Vec<Coord>,
}

impl SearchResult {
    /// Result for a search whose start is also its end.
    pub fn single(c: Coord) -> Self {
        Self {
            visited_order: vec![c],
            path: vec![c],
        }
    }

    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path (cell count minus one), or `None` if
    /// no path was found.
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn encodes_output_contract() {
        let r = SearchResult {
            visited_order: vec![Coord::new(0, 0), Coord::new(0, 1)],
            path: vec![Coord::new(0, 0), Coord::new(0, 1)],
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "visited_order": [[0, 0], [0, 1]],
                "path": [[0, 0], [0, 1]],
            })
        );
    }
}
