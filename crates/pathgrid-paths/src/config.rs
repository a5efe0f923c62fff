//! Search configuration.
//!
//! Only strategies whose resource use is not bounded by the grid size take
//! settings; everything else is a total function of its inputs.

/// Default maximum RBFS recursion depth (frames on the explicit stack).
pub const DEFAULT_RBFS_MAX_DEPTH: usize = 100_000;

/// Default maximum number of RBFS node expansions, re-expansions included.
pub const DEFAULT_RBFS_MAX_EXPANSIONS: usize = 2_000_000;

/// Settings shared by every search run through the dispatcher.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct SearchConfig {
    /// Recursive best-first search limits.
    pub rbfs: RbfsLimits,
}

/// Resource limits for recursive best-first search.
///
/// RBFS re-expands subtrees as its f-limits rise, so its running time is not
/// bounded by the grid size. Hitting either limit ends the search with
/// [`SearchError::Capacity`](crate::SearchError::Capacity).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct RbfsLimits {
    /// Maximum number of frames on the search stack.
    pub max_depth: usize,

    /// Maximum number of node expansions.
    pub max_expansions: usize,
}

impl Default for RbfsLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_RBFS_MAX_DEPTH,
            max_expansions: DEFAULT_RBFS_MAX_EXPANSIONS,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"rbfs": {"max_depth": 12}}"#).unwrap();
        assert_eq!(cfg.rbfs.max_depth, 12);
        assert_eq!(cfg.rbfs.max_expansions, DEFAULT_RBFS_MAX_EXPANSIONS);

        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SearchConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<SearchConfig>(r#"{"rbfs": {"depth": 1}}"#).is_err());
    }
}
