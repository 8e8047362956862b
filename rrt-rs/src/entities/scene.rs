use crate::entities::{Obstacle, Region};
use crate::geometry::primitives::SPolygon;
use crate::util::assertions;

/// The static environment of a planning run: a region and the obstacles placed inside it.
///
/// Obstacles are expected to lie fully inside the region and not to overlap each other.
/// This is established by whoever constructs the scene and only verified in debug builds.
#[derive(Clone, Debug)]
pub struct Scene {
    pub region: Region,
    pub obstacles: Vec<Obstacle>,
}

impl Scene {
    pub fn new(region: Region, obstacles: Vec<Obstacle>) -> Self {
        let scene = Self { region, obstacles };
        debug_assert!(assertions::scene_is_consistent(&scene));
        scene
    }

    pub fn obstacle_shapes(&self) -> impl Iterator<Item = &SPolygon> {
        self.obstacles.iter().map(|o| &o.shape)
    }

    /// Total area of the region covered by obstacles
    pub fn obstacle_coverage(&self) -> f32 {
        let covered: f32 = self.obstacles.iter().map(|o| o.shape.area).sum();
        covered / self.region.shape.area
    }
}
