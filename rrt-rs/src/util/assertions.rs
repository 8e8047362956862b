//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and in tests

use itertools::Itertools;
use log::error;

use crate::entities::{NodeId, Obstacle, RRTree, Region, Scene};
use crate::geometry::geo_traits::Contains;

/// All obstacles lie inside the region and no two obstacles share interior points
pub fn scene_is_consistent(scene: &Scene) -> bool {
    scene_is_consistent_with(&scene.region, &scene.obstacles)
}

pub fn scene_is_consistent_with(region: &Region, obstacles: &[Obstacle]) -> bool {
    for obstacle in obstacles.iter() {
        if !region.shape.contains(&obstacle.shape) {
            error!("obstacle {} is not contained in the region", obstacle.id);
            return false;
        }
    }
    for (a, b) in obstacles.iter().tuple_combinations() {
        let (ra, rb) = (&a.rect, &b.rect);
        let overlapping = f32::max(ra.x_min, rb.x_min) < f32::min(ra.x_max, rb.x_max)
            && f32::max(ra.y_min, rb.y_min) < f32::min(ra.y_max, rb.y_max);
        if overlapping {
            error!("obstacles {} and {} overlap", a.id, b.id);
            return false;
        }
    }
    true
}

/// The node/edge graph is a tree rooted at [`RRTree::ROOT`]:
/// every other node has exactly one incoming edge, the parent/child bookkeeping of edges and nodes agree,
/// edge geometry matches the node positions and every node is reachable from the root.
pub fn tree_is_consistent(tree: &RRTree) -> bool {
    let mut n_incoming = vec![0; tree.n_nodes()];
    for (i, edge) in tree.edges().iter().enumerate() {
        n_incoming[edge.child.0] += 1;
        let parent = tree.node(edge.parent);
        if !parent
            .children
            .iter()
            .any(|(child, e)| *child == edge.child && e.0 == i)
        {
            error!("edge e{i} is not registered at its parent {}", edge.parent);
            return false;
        }
        if edge.segment.start != parent.position
            || edge.segment.end != tree.node(edge.child).position
        {
            error!("edge e{i} does not connect the positions of its nodes");
            return false;
        }
    }
    if n_incoming[RRTree::ROOT.0] != 0 {
        error!("root has an incoming edge");
        return false;
    }
    if let Some(i) = n_incoming.iter().skip(1).position(|n| *n != 1) {
        error!("node n{} has {} incoming edges", i + 1, n_incoming[i + 1]);
        return false;
    }

    //every node reachable from the root
    let mut visited = vec![false; tree.n_nodes()];
    let mut stack = vec![RRTree::ROOT];
    while let Some(NodeId(i)) = stack.pop() {
        if visited[i] {
            error!("node n{i} is reachable along multiple paths");
            return false;
        }
        visited[i] = true;
        stack.extend(tree.node(NodeId(i)).children.iter().map(|(c, _)| *c));
    }
    if let Some(i) = visited.iter().position(|v| !v) {
        error!("node n{i} is not reachable from the root");
        return false;
    }
    true
}
