use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Shape};
use crate::geometry::primitives::{Edge, Point, Rect};
use anyhow::{Result, ensure};
use std::f32::consts::PI;

/// Geometric primitive representing a circle (or rather a closed disk)
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub fn try_new(center: Point, radius: f32) -> Result<Self> {
        ensure!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}",
        );
        ensure!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid circle center: {center:?}",
        );

        Ok(Self { center, radius })
    }
}

impl CollidesWith<Circle> for Circle {
    fn collides_with(&self, other: &Circle) -> bool {
        let sq_d = self.center.sq_distance_to(&other.center);
        sq_d <= (self.radius + other.radius).powi(2)
    }
}

impl CollidesWith<Edge> for Circle {
    fn collides_with(&self, edge: &Edge) -> bool {
        edge.sq_distance_to(&self.center) <= self.radius.powi(2)
    }
}

impl CollidesWith<Rect> for Circle {
    #[inline(always)]
    fn collides_with(&self, rect: &Rect) -> bool {
        //Based on: https://yal.cc/rectangle-circle-intersection-test/
        let Point(c_x, c_y) = self.center;

        let nearest_x = f32::max(rect.x_min, f32::min(c_x, rect.x_max));
        let nearest_y = f32::max(rect.y_min, f32::min(c_y, rect.y_max));

        (nearest_x - c_x).powi(2) + (nearest_y - c_y).powi(2) <= self.radius.powi(2)
    }
}

impl CollidesWith<Point> for Circle {
    fn collides_with(&self, point: &Point) -> bool {
        point.sq_distance_to(&self.center) <= self.radius.powi(2)
    }
}

impl Shape for Circle {
    fn area(&self) -> f32 {
        self.radius * self.radius * PI
    }

    fn bbox(&self) -> Rect {
        let (r, x, y) = (self.radius, self.center.0, self.center.1);
        Rect {
            x_min: x - r,
            y_min: y - r,
            x_max: x + r,
            y_max: y + r,
        }
    }
}
