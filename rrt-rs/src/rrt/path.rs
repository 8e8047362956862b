use itertools::Itertools;

use crate::entities::{EdgeId, NodeId, RRTree};
use crate::geometry::primitives::Point;
use crate::util::TreePalette;

/// Path from the root of the tree to the goal.
/// Every node on the path (except the root) is paired with the edge leading into it.
#[derive(Clone, Debug, PartialEq)]
pub struct TreePath {
    pub links: Vec<(NodeId, EdgeId)>,
}

impl TreePath {
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.links.iter().map(|(n, _)| *n)
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.links.iter().map(|(_, e)| *e)
    }

    /// Positions visited by the path, starting at the root
    pub fn polyline(&self, tree: &RRTree) -> Vec<Point> {
        std::iter::once(tree.root().position)
            .chain(self.node_ids().map(|id| tree.node(id).position))
            .collect_vec()
    }

    /// Sum of the lengths of all edges on the path
    pub fn length(&self, tree: &RRTree) -> f32 {
        self.edge_ids()
            .map(|id| tree.edge(id).segment.length())
            .sum()
    }
}

/// Depth-first search from the root for the goal node.
///
/// Children are explored in insertion order and the first path found is returned.
/// As the graph is a tree, this is the only path. Uses an explicit stack, so deep trees are fine.
pub fn find_path(tree: &RRTree) -> Option<TreePath> {
    struct Frame {
        node: NodeId,
        incoming: Option<EdgeId>,
        next_child: usize,
    }

    let mut stack = vec![Frame {
        node: RRTree::ROOT,
        incoming: None,
        next_child: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let node = tree.node(frame.node);
        if node.is_goal {
            let links = stack
                .iter()
                .filter_map(|f| f.incoming.map(|e| (f.node, e)))
                .collect_vec();
            return Some(TreePath { links });
        }
        match node.children.get(frame.next_child) {
            Some(&(child, edge)) => {
                frame.next_child += 1;
                stack.push(Frame {
                    node: child,
                    incoming: Some(edge),
                    next_child: 0,
                });
            }
            None => {
                stack.pop();
            }
        }
    }
    None
}

/// Colors every node and edge on `path` with the path color, and the goal with the goal color.
pub fn mark_path(tree: &mut RRTree, path: &TreePath, palette: &TreePalette) {
    for &(node_id, edge_id) in path.links.iter() {
        tree.node_mut(node_id).color = palette.path;
        tree.edge_mut(edge_id).color = palette.path;
    }
    if let Some(goal_id) = tree.goal_id() {
        tree.node_mut(goal_id).color = palette.goal;
    }
}

/// Finds the path to the goal and marks it. Leaves the tree untouched if the goal is unreachable.
pub fn extract_path(tree: &mut RRTree, palette: &TreePalette) -> Option<TreePath> {
    let path = find_path(tree)?;
    mark_path(tree, &path, palette);
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::TreeNode;

    fn node(x: f32, y: f32) -> TreeNode {
        TreeNode::new(Point(x, y), 0.1, TreePalette::default().node)
    }

    /// root ─┬─ a ── b
    ///       └─ c ── goal
    fn branching_tree() -> (RRTree, [NodeId; 3]) {
        let palette = TreePalette::default();
        let mut tree = RRTree::new(
            TreeNode::new(Point(0.0, 0.0), 1.0, palette.start),
            TreeNode::new(Point(2.0, -2.0), 1.0, palette.goal),
        );
        let (a, _) = tree.add_child(RRTree::ROOT, node(1.0, 1.0), palette.edge);
        tree.add_child(a, node(2.0, 2.0), palette.edge);
        let (c, _) = tree.add_child(RRTree::ROOT, node(1.0, -1.0), palette.edge);
        let (goal, _) = tree.attach_goal(c, palette.edge);
        (tree, [a, c, goal])
    }

    #[test]
    fn finds_the_branch_leading_to_the_goal() {
        let (tree, [_, c, goal]) = branching_tree();
        let path = find_path(&tree).unwrap();

        assert_eq!(path.node_ids().collect_vec(), vec![c, goal]);
        for (node_id, edge_id) in path.links.iter() {
            assert_eq!(tree.edge(*edge_id).child, *node_id);
        }
        assert_eq!(
            path.polyline(&tree),
            vec![Point(0.0, 0.0), Point(1.0, -1.0), Point(2.0, -2.0)]
        );
    }

    #[test]
    fn marking_is_idempotent_and_leaves_other_branches_alone() {
        let palette = TreePalette::default();
        let (mut tree, [a, c, goal]) = branching_tree();

        let first = extract_path(&mut tree, &palette).unwrap();
        let second = extract_path(&mut tree, &palette).unwrap();
        assert_eq!(first, second);

        assert_eq!(tree.root().color, palette.start);
        assert_eq!(tree.node(a).color, palette.node);
        assert_eq!(tree.node(c).color, palette.path);
        assert_eq!(tree.node(goal).color, palette.goal);
        for edge in tree.edges() {
            let on_path = first.edge_ids().any(|id| tree.edge(id).child == edge.child);
            match on_path {
                true => assert_eq!(edge.color, palette.path),
                false => assert_eq!(edge.color, palette.edge),
            }
        }
    }

    #[test]
    fn unreachable_goal_is_not_found() {
        let palette = TreePalette::default();
        let mut tree = RRTree::new(node(0.0, 0.0), node(5.0, 5.0));
        let (a, _) = tree.add_child(RRTree::ROOT, node(1.0, 0.0), palette.edge);

        assert_eq!(extract_path(&mut tree, &palette), None);
        assert_eq!(tree.node(a).color, palette.node);
        assert!(tree.edges().iter().all(|e| e.color == palette.edge));
    }

    #[test]
    fn deep_chains_do_not_overflow() {
        let palette = TreePalette::default();
        let mut tree = RRTree::new(node(0.0, 0.0), node(-1.0, 0.0));
        let mut parent = RRTree::ROOT;
        for i in 1..100_000 {
            parent = tree.add_child(parent, node(i as f32, 0.0), palette.edge).0;
        }
        tree.attach_goal(parent, palette.edge);

        let path = find_path(&tree).unwrap();
        assert_eq!(path.links.len(), 100_000);
    }
}
