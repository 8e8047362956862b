use std::fmt::{Display, Formatter};

use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::{Edge, Point};
use crate::io::svg::svg_util::Color;

/// Index of a [`TreeNode`] in the node arena of an [`RRTree`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Index of a [`TreeEdge`] in the edge arena of an [`RRTree`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct TreeNode {
    pub position: Point,
    /// Presentation radius. For the start and end node this is also the radius of the disk that
    /// has to lie in free space.
    pub radius: f32,
    pub color: Color,
    pub is_goal: bool,
    /// Outgoing relations in insertion order: the child node and the edge leading to it
    pub children: Vec<(NodeId, EdgeId)>,
}

impl TreeNode {
    pub fn new(position: Point, radius: f32, color: Color) -> Self {
        Self {
            position,
            radius,
            color,
            is_goal: false,
            children: vec![],
        }
    }
}

#[derive(Clone, Debug)]
pub struct TreeEdge {
    pub parent: NodeId,
    pub child: NodeId,
    pub segment: Edge,
    pub color: Color,
}

/// The planning state: a tree rooted at the start node, stored in two flat arenas.
///
/// Nodes and edges are only ever appended, a node and the edge leading to it are always added together.
/// The goal node is held aside until it gets attached to the tree.
#[derive(Clone, Debug)]
pub struct RRTree {
    nodes: Vec<TreeNode>,
    edges: Vec<TreeEdge>,
    goal: TreeNode,
    goal_id: Option<NodeId>,
}

impl RRTree {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new(start: TreeNode, mut goal: TreeNode) -> Self {
        goal.is_goal = true;
        goal.children.clear();
        Self {
            nodes: vec![start],
            edges: vec![],
            goal,
            goal_id: None,
        }
    }

    /// Appends `node` as a child of `parent`, together with the connecting edge
    pub fn add_child(
        &mut self,
        parent: NodeId,
        node: TreeNode,
        edge_color: Color,
    ) -> (NodeId, EdgeId) {
        let node_id = NodeId(self.nodes.len());
        let edge_id = EdgeId(self.edges.len());
        let segment = Edge {
            start: self.node(parent).position,
            end: node.position,
        };
        self.nodes.push(node);
        self.edges.push(TreeEdge {
            parent,
            child: node_id,
            segment,
            color: edge_color,
        });
        self.nodes[parent.0].children.push((node_id, edge_id));
        (node_id, edge_id)
    }

    /// Attaches the goal node as a child of `parent`
    pub fn attach_goal(&mut self, parent: NodeId, edge_color: Color) -> (NodeId, EdgeId) {
        assert!(self.goal_id.is_none(), "goal is already attached");
        let (node_id, edge_id) = self.add_child(parent, self.goal.clone(), edge_color);
        self.goal_id = Some(node_id);
        (node_id, edge_id)
    }

    /// Returns the node closest to `target`. Ties are resolved in favor of the earliest inserted node.
    pub fn nearest(&self, target: &Point) -> NodeId {
        let mut nearest = Self::ROOT;
        let mut min_sq_d = self.nodes[0].position.sq_distance_to(target);
        for (i, node) in self.nodes.iter().enumerate().skip(1) {
            let sq_d = node.position.sq_distance_to(target);
            if sq_d < min_sq_d {
                nearest = NodeId(i);
                min_sq_d = sq_d;
            }
        }
        nearest
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }

    pub fn edge(&self, id: EdgeId) -> &TreeEdge {
        &self.edges[id.0]
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> &mut TreeEdge {
        &mut self.edges[id.0]
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    pub fn root(&self) -> &TreeNode {
        self.node(Self::ROOT)
    }

    /// Most recently added node
    pub fn last_node_id(&self) -> NodeId {
        NodeId(self.nodes.len() - 1)
    }

    pub fn goal_position(&self) -> Point {
        self.goal.position
    }

    /// Goal node, whether or not it is attached to the tree yet
    pub fn goal(&self) -> &TreeNode {
        match self.goal_id {
            Some(id) => self.node(id),
            None => &self.goal,
        }
    }

    pub fn goal_id(&self) -> Option<NodeId> {
        self.goal_id
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }
}
