use crate::entities::{RRTree, Scene};
use crate::geometry::geo_traits::{CollidesWith, Contains, Crosses};
use crate::geometry::primitives::{Edge, SPolygon};

/// Decides whether candidate nodes and edges can be added to the tree.
///
/// Both checks scan the obstacles, nodes and edges linearly.
/// This is fine for scenes with tens of obstacles and trees with hundreds to thousands of nodes,
/// larger problems should put a spatial index behind the same interface.
pub struct ValidityChecker<'a> {
    pub scene: &'a Scene,
    pub tree: &'a RRTree,
}

impl<'a> ValidityChecker<'a> {
    pub fn new(scene: &'a Scene, tree: &'a RRTree) -> Self {
        Self { scene, tree }
    }

    /// Free-space check: `shape` lies inside the region and does not touch any obstacle.
    pub fn is_free<T>(&self, shape: &T) -> bool
    where
        SPolygon: Contains<T> + CollidesWith<T>,
    {
        Contains::<T>::contains(&self.scene.region.shape, shape)
            && !self
                .scene
                .obstacle_shapes()
                .any(|obstacle| CollidesWith::<T>::collides_with(obstacle, shape))
    }

    /// Crossing check: `edge` lies inside the region and does not cross any obstacle, any edge of
    /// the tree, or pass through any node of the tree. Touching is tolerated.
    pub fn is_admissible(&self, edge: &Edge) -> bool {
        self.scene.region.shape.contains(edge)
            && !self.scene.obstacle_shapes().any(|o| edge.crosses(o))
            && !self.tree.edges().iter().any(|e| edge.crosses(&e.segment))
            && !self.tree.nodes().iter().any(|n| edge.crosses(&n.position))
    }
}
