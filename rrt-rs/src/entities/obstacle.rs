use crate::geometry::primitives::{Point, Rect, SPolygon};
use anyhow::Result;

/// Rectangular obstacle, immutable during planning.
#[derive(Clone, Debug)]
pub struct Obstacle {
    pub id: usize,
    pub rect: Rect,
    pub shape: SPolygon,
}

impl Obstacle {
    pub fn new(id: usize, lower_left: Point, width: f32, height: f32) -> Result<Self> {
        let rect = Rect::from_corner(lower_left, width, height)?;
        Ok(Self {
            id,
            rect,
            shape: SPolygon::from(rect),
        })
    }

    pub fn lower_left(&self) -> Point {
        Point(self.rect.x_min, self.rect.y_min)
    }

    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    pub fn height(&self) -> f32 {
        self.rect.height()
    }
}
