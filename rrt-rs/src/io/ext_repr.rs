use serde::{Deserialize, Serialize};

use crate::io::svg::svg_util::Color;
use crate::rrt::PlanOutcome;

/// External representation of a [`Scene`](crate::entities::Scene) together with the
/// start and goal positions of a planning query.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtScene {
    /// Shape of the region in which the tree is grown
    pub region: ExtShape,
    /// Obstacles inside the region
    #[serde(default)]
    pub obstacles: Vec<ExtObstacle>,
    pub start: (f32, f32),
    pub goal: (f32, f32),
}

/// Various ways to represent the shape of a region
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtShape {
    /// Axis-aligned rectangle. With its left bottom corner at (x_min, y_min), a width and height
    Rectangle {
        x_min: f32,
        y_min: f32,
        width: f32,
        height: f32,
    },
    /// Polygon with a single outer boundary, no holes and no self-intersections
    SimplePolygon(Vec<(f32, f32)>),
}

/// External representation of an [`Obstacle`](crate::entities::Obstacle)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtObstacle {
    pub id: u64,
    pub x_min: f32,
    pub y_min: f32,
    pub width: f32,
    pub height: f32,
}

/// External representation of a [`TreeNode`](crate::entities::TreeNode)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtNode {
    pub id: u64,
    pub position: (f32, f32),
    pub radius: f32,
    pub color: Color,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_goal: bool,
}

/// External representation of a [`TreeEdge`](crate::entities::TreeEdge)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtEdge {
    pub id: u64,
    pub parent: u64,
    pub child: u64,
    pub color: Color,
}

/// External representation of an [`RRTSolution`](crate::rrt::RRTSolution)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub scene: ExtScene,
    pub outcome: PlanOutcome,
    pub n_iterations: u64,
    pub elapsed_ms: f64,
    pub nodes: Vec<ExtNode>,
    pub edges: Vec<ExtEdge>,
    /// Ids of the nodes visited by the path, from start to goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<u64>>,
}
