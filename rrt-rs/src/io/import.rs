use anyhow::{Result, bail, ensure};
use itertools::Itertools;

use crate::entities::{Obstacle, Region, Scene};
use crate::geometry::geo_traits::{CollidesWith, Contains};
use crate::geometry::primitives::{Circle, Point, Rect, SPolygon};
use crate::io::ext_repr::{ExtScene, ExtShape};
use crate::util::assertions;

/// A scene together with the start and goal of a planning query
#[derive(Clone, Debug)]
pub struct SceneQuery {
    pub scene: Scene,
    pub start: Point,
    pub goal: Point,
}

impl SceneQuery {
    /// Ensures the disks of radius `endpoint_radius` around the start and the goal lie inside the
    /// region and clear of every obstacle.
    pub fn validate_endpoints(&self, endpoint_radius: f32) -> Result<()> {
        for (name, center) in [("start", self.start), ("goal", self.goal)] {
            let disk = Circle::try_new(center, endpoint_radius)?;
            ensure!(
                self.scene.region.shape.contains(&disk),
                "{name} ({}, {}) with radius {endpoint_radius} does not lie inside the region",
                center.0,
                center.1
            );
            if let Some(o) = self
                .scene
                .obstacles
                .iter()
                .find(|o| o.shape.collides_with(&disk))
            {
                bail!(
                    "{name} ({}, {}) with radius {endpoint_radius} collides with obstacle {}",
                    center.0,
                    center.1,
                    o.id
                );
            }
        }
        Ok(())
    }
}

/// Converts an external scene into an internal one.
/// Fails if any shape is degenerate, if the obstacles do not lie inside the region or overlap,
/// or if the disk of radius `endpoint_radius` around the start or goal is not in free space.
pub fn import_scene(ext_scene: &ExtScene, endpoint_radius: f32) -> Result<SceneQuery> {
    let region = Region::new(import_shape(&ext_scene.region)?);

    let obstacles = ext_scene
        .obstacles
        .iter()
        .map(|o| Obstacle::new(o.id as usize, Point(o.x_min, o.y_min), o.width, o.height))
        .collect::<Result<Vec<_>>>()?;

    ensure!(
        assertions::scene_is_consistent_with(&region, &obstacles),
        "obstacles must lie inside the region and must not overlap"
    );

    let query = SceneQuery {
        scene: Scene::new(region, obstacles),
        start: ext_scene.start.into(),
        goal: ext_scene.goal.into(),
    };
    query.validate_endpoints(endpoint_radius)?;
    Ok(query)
}

fn import_shape(ext_shape: &ExtShape) -> Result<SPolygon> {
    match ext_shape {
        ExtShape::Rectangle {
            x_min,
            y_min,
            width,
            height,
        } => {
            let rect = Rect::try_new(*x_min, *y_min, x_min + width, y_min + height)?;
            Ok(SPolygon::from(rect))
        }
        ExtShape::SimplePolygon(points) => {
            SPolygon::new(points.iter().map(|&p| Point::from(p)).collect_vec())
        }
    }
}
