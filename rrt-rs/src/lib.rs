//! A Rapidly-exploring Random Tree (RRT) planner for 2D scenes with polygonal obstacles.
//!
//! The tree is grown from a start node towards random targets (and periodically towards the goal)
//! until the goal can be attached. A depth-first search over the finished tree then recovers the
//! unique root-to-goal path.

/// Geometric primitives and the predicates used for validity checking
pub mod geometry;

/// Entities describing a planning problem: the scene, its obstacles and the tree being grown
pub mod entities;

/// Admissibility of candidate nodes and edges with respect to the scene and the current tree
pub mod validity;

/// The tree grower and the path extractor
pub mod rrt;

/// Exporting planning runs to JSON and SVG
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
