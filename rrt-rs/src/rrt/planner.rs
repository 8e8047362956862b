use std::time::Instant;

use anyhow::{Result, ensure};
use log::{debug, info, trace, warn};
use rand::Rng;

use crate::entities::{NodeId, RRTree, Scene, TreeNode};
use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::{Circle, Edge, Point};
use crate::rrt::{PlanOutcome, RRTSolution, UniformRectSampler, extract_path};
use crate::util::{RRTConfig, assertions};
use crate::validity::ValidityChecker;

/// State of the tree grower
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthState {
    Growing,
    /// The goal node is attached to the tree (terminal)
    GoalReached,
    /// The iteration or time budget ran out (terminal)
    Exhausted,
}

/// Rapidly-exploring Random Tree planner.
///
/// Grows a tree from the start node, one iteration at a time, until the goal node can be attached.
/// Every iteration:
/// 1. tries to connect the most recently added node directly to the goal, if it lies within one step,
/// 2. picks a target: the goal every `goal_bias_freq`-th iteration, a uniform sample of the region otherwise,
/// 3. steers exactly one step from the nearest node towards the target,
/// 4. commits the new node and edge if both are admissible.
///
/// The direct goal connection takes precedence over the goal bias.
pub struct RRTPlanner<'a, R: Rng> {
    pub scene: &'a Scene,
    pub config: RRTConfig,
    pub tree: RRTree,
    pub state: GrowthState,
    /// Number of completed iterations, drives the goal bias
    pub n_iterations: usize,
    sampler: UniformRectSampler,
    rng: R,
    started: Option<Instant>,
}

impl<'a, R: Rng> RRTPlanner<'a, R> {
    /// Creates a planner for the path from `start` to `goal`.
    /// Fails if the disk of the endpoint radius around either of them does not lie in free space.
    pub fn new(
        scene: &'a Scene,
        start: Point,
        goal: Point,
        config: RRTConfig,
        rng: R,
    ) -> Result<Self> {
        config.validate()?;
        let sampler = UniformRectSampler::new(scene.region.bbox())?;
        let palette = config.palette;
        let tree = RRTree::new(
            TreeNode::new(start, config.endpoint_radius, palette.start),
            TreeNode::new(goal, config.endpoint_radius, palette.goal),
        );
        let checker = ValidityChecker::new(scene, &tree);
        for (name, center) in [("start", start), ("goal", goal)] {
            let disk = Circle::try_new(center, config.endpoint_radius)?;
            ensure!(
                checker.is_free(&center) && checker.is_free(&disk),
                "{name} ({}, {}) does not lie in free space",
                center.0,
                center.1
            );
        }

        Ok(Self {
            scene,
            config,
            tree,
            state: GrowthState::Growing,
            n_iterations: 0,
            sampler,
            rng,
            started: None,
        })
    }

    /// Performs a single iteration of the growth loop and returns the resulting state.
    /// Does nothing once a terminal state has been reached.
    pub fn step(&mut self) -> GrowthState {
        if self.state != GrowthState::Growing {
            return self.state;
        }
        let started = *self.started.get_or_insert_with(Instant::now);

        if self.budget_exhausted(started) {
            warn!(
                "[RRT] budget exhausted after {} iterations ({} nodes), no path found",
                self.n_iterations,
                self.tree.n_nodes()
            );
            self.state = GrowthState::Exhausted;
            return self.state;
        }

        if let Some(parent) = self.try_reach_goal() {
            let (goal_id, _) = self.tree.attach_goal(parent, self.config.palette.edge);
            info!(
                "[RRT] goal attached to {} as {} after {} iterations",
                parent, goal_id, self.n_iterations
            );
            self.state = GrowthState::GoalReached;
            debug_assert!(assertions::tree_is_consistent(&self.tree));
            return self.state;
        }

        let target = match self.n_iterations % self.config.goal_bias_freq == 0 {
            true => self.tree.goal_position(),
            false => self.sampler.sample(&mut self.rng),
        };
        let nearest = self.tree.nearest(&target);

        if let Some(candidate) = self.steer(nearest, &target) {
            let node = TreeNode::new(candidate, self.config.node_radius, self.config.palette.node);
            let (node_id, _) = self
                .tree
                .add_child(nearest, node, self.config.palette.edge);
            trace!(
                "[RRT] iteration {}: added {} at ({:.3}, {:.3}) below {}",
                self.n_iterations, node_id, candidate.0, candidate.1, nearest
            );
        }

        self.n_iterations += 1;
        self.state
    }

    /// Runs the growth loop until a terminal state is reached
    pub fn grow(&mut self) -> GrowthState {
        while self.step() == GrowthState::Growing {}
        self.state
    }

    /// Grows the tree, extracts and marks the path to the goal
    pub fn solve(mut self) -> RRTSolution {
        let start = Instant::now();
        let state = self.grow();
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let (outcome, path) = match state {
            GrowthState::GoalReached => {
                let path = extract_path(&mut self.tree, &self.config.palette);
                debug_assert!(path.is_some(), "goal attached but not reachable from the root");
                (PlanOutcome::PathFound, path)
            }
            _ => (PlanOutcome::NoPathFound, None),
        };

        info!(
            "[RRT] finished in {:.3}ms: {:?}, {} nodes, {} edges, {} iterations",
            elapsed_ms,
            outcome,
            self.tree.n_nodes(),
            self.tree.n_edges(),
            self.n_iterations
        );
        if let Some(path) = &path {
            debug!(
                "[RRT] path of {} edges with length {:.3}",
                path.links.len(),
                path.length(&self.tree)
            );
        }

        RRTSolution {
            tree: self.tree,
            path,
            outcome,
            n_iterations: self.n_iterations,
            elapsed_ms,
        }
    }

    /// Returns the node to attach the goal to, if the most recently added node lies within one step
    /// of the goal and the connecting edge is admissible.
    fn try_reach_goal(&self) -> Option<NodeId> {
        let last_id = self.tree.last_node_id();
        let last = self.tree.node(last_id).position;
        let goal = self.tree.goal_position();

        if last.distance_to(&goal) > self.config.step_length {
            return None;
        }
        let edge = Edge::new(last, goal).ok()?;
        match ValidityChecker::new(self.scene, &self.tree).is_admissible(&edge) {
            true => Some(last_id),
            false => None,
        }
    }

    /// Advances exactly one step from `from` towards `target` and returns the new point if it is
    /// in free space and the edge leading to it is admissible.
    fn steer(&self, from: NodeId, target: &Point) -> Option<Point> {
        let origin = self.tree.node(from).position;
        let candidate = origin.towards(target, self.config.step_length)?;

        let checker = ValidityChecker::new(self.scene, &self.tree);
        let edge = Edge::new(origin, candidate).ok()?;
        match checker.is_free(&candidate) && checker.is_admissible(&edge) {
            true => Some(candidate),
            false => None,
        }
    }

    fn budget_exhausted(&self, started: Instant) -> bool {
        let iterations_exhausted = self
            .config
            .max_iterations
            .is_some_and(|max| self.n_iterations >= max);
        let time_exhausted = self
            .config
            .time_limit_ms
            .is_some_and(|limit| started.elapsed().as_millis() >= limit as u128);
        iterations_exhausted || time_exhausted
    }
}
