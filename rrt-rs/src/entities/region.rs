use crate::geometry::primitives::{Rect, SPolygon};
use anyhow::Result;

/// The planning domain. Every node and edge of the tree must lie within it.
#[derive(Clone, Debug)]
pub struct Region {
    pub shape: SPolygon,
}

impl Region {
    pub fn new(shape: SPolygon) -> Self {
        Self { shape }
    }

    /// Axis-aligned region spanning `[0, width] × [0, height]`
    pub fn rectangular(width: f32, height: f32) -> Result<Self> {
        let rect = Rect::try_new(0.0, 0.0, width, height)?;
        Ok(Self::new(SPolygon::from(rect)))
    }

    pub fn bbox(&self) -> Rect {
        self.shape.bbox
    }

    pub fn width(&self) -> f32 {
        self.shape.bbox.width()
    }

    pub fn height(&self) -> f32 {
        self.shape.bbox.height()
    }
}
