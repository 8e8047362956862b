use serde::{Deserialize, Serialize};

use crate::entities::RRTree;
use crate::rrt::TreePath;

/// How a planning run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanOutcome {
    /// The goal was attached to the tree and a path from start to goal exists
    PathFound,
    /// The iteration or time budget ran out before the goal could be attached
    NoPathFound,
}

/// Result of a planning run: the final tree, the path to the goal (if any) and some statistics
#[derive(Clone, Debug)]
pub struct RRTSolution {
    pub tree: RRTree,
    pub path: Option<TreePath>,
    pub outcome: PlanOutcome,
    /// Number of completed growth iterations (the one attaching the goal is not counted)
    pub n_iterations: usize,
    /// Wall-clock time spent growing the tree
    pub elapsed_ms: f64,
}

impl RRTSolution {
    pub fn is_success(&self) -> bool {
        self.outcome == PlanOutcome::PathFound
    }
}
