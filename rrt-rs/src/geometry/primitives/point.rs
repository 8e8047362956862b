use std::hash::{Hash, Hasher};

use crate::geometry::geo_traits::{CollidesWith, DistanceTo};

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Point(pub f32, pub f32);

impl Point {
    pub fn x(&self) -> f32 {
        self.0
    }

    pub fn y(&self) -> f32 {
        self.1
    }

    /// Returns the point at `distance` from `self` in the direction of `target`.
    /// Returns `None` when `target` coincides with `self`, as no direction can be derived.
    pub fn towards(&self, target: &Point, distance: f32) -> Option<Point> {
        let (dx, dy) = (target.0 - self.0, target.1 - self.1);
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        let angle = f32::atan2(dy, dx);
        Some(Point(
            self.0 + distance * angle.cos(),
            self.1 + distance * angle.sin(),
        ))
    }
}

impl DistanceTo<Point> for Point {
    #[inline(always)]
    fn distance_to(&self, other: &Point) -> f32 {
        self.sq_distance_to(other).sqrt()
    }

    #[inline(always)]
    fn sq_distance_to(&self, other: &Point) -> f32 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let x = self.0.to_bits();
        let y = self.1.to_bits();
        x.hash(state);
        y.hash(state);
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f32, f32)> for Point {
    fn from(p: (f32, f32)) -> Self {
        Point(p.0, p.1)
    }
}

impl<T> CollidesWith<T> for Point
where
    T: CollidesWith<Point>,
{
    fn collides_with(&self, other: &T) -> bool {
        other.collides_with(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn towards_advances_exactly_the_requested_distance() {
        let origin = Point(1.0, 1.0);
        let p = origin.towards(&Point(10.0, 5.0), 1.5).unwrap();
        assert!(approx_eq!(f32, origin.distance_to(&p), 1.5, epsilon = 1e-5));
    }

    #[test]
    fn towards_does_not_stop_at_a_close_target() {
        let origin = Point(0.0, 0.0);
        let p = origin.towards(&Point(0.1, 0.0), 2.0).unwrap();
        assert!(approx_eq!(f32, p.0, 2.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, p.1, 0.0, epsilon = 1e-5));
    }

    #[test]
    fn towards_itself_has_no_direction() {
        let p = Point(3.0, 4.0);
        assert_eq!(p.towards(&p, 1.0), None);
    }

    #[test]
    fn distance() {
        assert_eq!(Point(0.0, 0.0).distance_to(&Point(3.0, 4.0)), 5.0);
        assert_eq!(Point(0.0, 0.0).sq_distance_to(&Point(3.0, 4.0)), 25.0);
    }
}
