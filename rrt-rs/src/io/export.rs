use itertools::Itertools;

use crate::entities::{RRTree, Scene};
use crate::geometry::primitives::Point;
use crate::io::ext_repr::{ExtEdge, ExtNode, ExtObstacle, ExtScene, ExtShape, ExtSolution};
use crate::rrt::RRTSolution;

/// Exports a scene and the endpoints of a query to an external representation.
pub fn export_scene(scene: &Scene, start: Point, goal: Point) -> ExtScene {
    let region = ExtShape::SimplePolygon(
        scene
            .region
            .shape
            .vertices
            .iter()
            .map(|&p| p.into())
            .collect(),
    );

    let obstacles = scene
        .obstacles
        .iter()
        .map(|o| ExtObstacle {
            id: o.id as u64,
            x_min: o.rect.x_min,
            y_min: o.rect.y_min,
            width: o.width(),
            height: o.height(),
        })
        .collect();

    ExtScene {
        region,
        obstacles,
        start: start.into(),
        goal: goal.into(),
    }
}

/// Exports the outcome of a planning run, including the full tree.
pub fn export_solution(scene: &Scene, solution: &RRTSolution) -> ExtSolution {
    let tree = &solution.tree;
    let ext_scene = export_scene(scene, tree.root().position, tree.goal_position());

    let path = solution.path.as_ref().map(|path| {
        std::iter::once(RRTree::ROOT)
            .chain(path.node_ids())
            .map(|id| id.0 as u64)
            .collect_vec()
    });

    ExtSolution {
        scene: ext_scene,
        outcome: solution.outcome,
        n_iterations: solution.n_iterations as u64,
        elapsed_ms: solution.elapsed_ms,
        nodes: export_nodes(tree),
        edges: export_edges(tree),
        path,
    }
}

fn export_nodes(tree: &RRTree) -> Vec<ExtNode> {
    tree.nodes()
        .iter()
        .enumerate()
        .map(|(id, node)| ExtNode {
            id: id as u64,
            position: node.position.into(),
            radius: node.radius,
            color: node.color,
            is_goal: node.is_goal,
        })
        .collect()
}

fn export_edges(tree: &RRTree) -> Vec<ExtEdge> {
    tree.edges()
        .iter()
        .enumerate()
        .map(|(id, edge)| ExtEdge {
            id: id as u64,
            parent: edge.parent.0 as u64,
            child: edge.child.0 as u64,
            color: edge.color,
        })
        .collect()
}
