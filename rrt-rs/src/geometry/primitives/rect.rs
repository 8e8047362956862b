use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Edge, Point};
use anyhow::Result;
use anyhow::ensure;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Rect {
    pub fn try_new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle defined by its lower-left corner and its dimensions
    pub fn from_corner(lower_left: Point, width: f32, height: f32) -> Result<Self> {
        let Point(x, y) = lower_left;
        Rect::try_new(x, y, x + width, y + height)
    }

    /// Returns the four corners of `self`, counterclockwise starting from the lower-left corner.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Whether the bounding box of `edge` overlaps with `self`
    #[inline(always)]
    pub fn collides_with_bbox_of(&self, edge: &Edge) -> bool {
        f32::max(self.x_min, edge.x_min()) <= f32::min(self.x_max, edge.x_max())
            && f32::max(self.y_min, edge.y_min()) <= f32::min(self.y_max, edge.y_max())
    }
}

impl Shape for Rect {
    fn area(&self) -> f32 {
        self.width() * self.height()
    }

    fn bbox(&self) -> Rect {
        *self
    }
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        f32::max(self.x_min, other.x_min) <= f32::min(self.x_max, other.x_max)
            && f32::max(self.y_min, other.y_min) <= f32::min(self.y_max, other.y_max)
    }
}

impl CollidesWith<Point> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_rect() {
        assert!(Rect::try_new(1.0, 0.0, 1.0, 2.0).is_err());
        assert!(Rect::from_corner(Point(0.0, 0.0), -1.0, 2.0).is_err());
    }

    #[test]
    fn touching_rects_collide() {
        let a = Rect::try_new(0.0, 0.0, 1.0, 1.0).unwrap();
        let b = Rect::try_new(1.0, 0.0, 2.0, 1.0).unwrap();
        let c = Rect::try_new(1.5, 0.0, 2.0, 1.0).unwrap();
        assert!(a.collides_with(&b));
        assert!(!a.collides_with(&c));
    }
}
