use crate::geometry::geo_traits::{CollidesWith, Crosses, DistanceTo};
use crate::geometry::primitives::Point;
use crate::util::GEO_TOLERANCE;
use anyhow::Result;
use anyhow::ensure;

/// Line segment between two [`Point`]s
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Result<Self> {
        ensure!(start != end, "degenerate edge, {start:?} == {end:?}");
        Ok(Edge { start, end })
    }

    /// Returns the closest point which lies on the edge to the given point
    pub fn closest_point_on_edge(&self, point: &Point) -> Point {
        //from https://stackoverflow.com/a/6853926
        let Point(x1, y1) = self.start;
        let Point(x2, y2) = self.end;
        let Point(x, y) = point;

        let a = x - x1;
        let b = y - y1;
        let c = x2 - x1;
        let d = y2 - y1;

        let dot = a * c + b * d;
        let len_sq = c * c + d * d;
        let mut param = -1.0;
        if len_sq != 0.0 {
            param = dot / len_sq;
        }
        let (xx, yy) = match param {
            p if p < 0.0 => (x1, y1),              //start is the closest point
            p if p > 1.0 => (x2, y2),              //end is the closest point
            _ => (x1 + param * c, y1 + param * d), //closest point is on the edge
        };

        Point(xx, yy)
    }

    /// Parameter `t` in `[0, 1]` of the projection of `point` onto the edge (`0` = start, `1` = end)
    pub fn projection_param(&self, point: &Point) -> f32 {
        let (dx, dy) = (self.end.0 - self.start.0, self.end.1 - self.start.1);
        let len_sq = dx * dx + dy * dy;
        let t = ((point.0 - self.start.0) * dx + (point.1 - self.start.1) * dy) / len_sq;
        t.clamp(0.0, 1.0)
    }

    /// Point on the edge at parameter `t` (`0` = start, `1` = end)
    pub fn point_at(&self, t: f32) -> Point {
        Point(
            self.start.0 + t * (self.end.0 - self.start.0),
            self.start.1 + t * (self.end.1 - self.start.1),
        )
    }

    /// Parameter along `self` at which the supporting lines of `self` and `other` meet,
    /// provided the meeting point lies on both edges. `None` for parallel or disjoint edges.
    pub fn intersection_param(&self, other: &Edge) -> Option<f32> {
        //based on: https://en.wikipedia.org/wiki/Line%E2%80%93line_intersection#Given_two_points_on_each_line_segment
        let Point(x1, y1) = self.start;
        let Point(x2, y2) = self.end;
        let Point(x3, y3) = other.start;
        let Point(x4, y4) = other.end;

        let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if denom == 0.0 {
            //parallel edges
            return None;
        }
        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
        let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;

        match (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            true => Some(t),
            false => None,
        }
    }

    pub fn x_min(&self) -> f32 {
        f32::min(self.start.0, self.end.0)
    }

    pub fn y_min(&self) -> f32 {
        f32::min(self.start.1, self.end.1)
    }

    pub fn x_max(&self) -> f32 {
        f32::max(self.start.0, self.end.0)
    }

    pub fn y_max(&self) -> f32 {
        f32::max(self.start.1, self.end.1)
    }

    pub fn length(&self) -> f32 {
        self.start.distance_to(&self.end)
    }

    /// Whether `point`, known to be collinear with the edge, lies within its bounding box
    fn spans(&self, point: &Point) -> bool {
        self.x_min() <= point.0
            && point.0 <= self.x_max()
            && self.y_min() <= point.1
            && point.1 <= self.y_max()
    }
}

/// Twice the signed area of the triangle `o`, `a`, `b`.
/// Positive for a counterclockwise turn, negative for clockwise, zero for collinear points.
#[inline(always)]
pub fn orientation(o: Point, a: Point, b: Point) -> f32 {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

impl DistanceTo<Point> for Edge {
    #[inline(always)]
    fn distance_to(&self, point: &Point) -> f32 {
        f32::sqrt(self.sq_distance_to(point))
    }

    #[inline(always)]
    fn sq_distance_to(&self, point: &Point) -> f32 {
        let Point(x, y) = point;
        let Point(xx, yy) = self.closest_point_on_edge(point);

        let (dx, dy) = (x - xx, y - yy);
        dx.powi(2) + dy.powi(2)
    }
}

impl CollidesWith<Edge> for Edge {
    #[inline(always)]
    fn collides_with(&self, other: &Edge) -> bool {
        if f32::max(self.x_min(), other.x_min()) > f32::min(self.x_max(), other.x_max())
            || f32::max(self.y_min(), other.y_min()) > f32::min(self.y_max(), other.y_max())
        {
            //bounding boxes do not overlap
            return false;
        }

        let d1 = orientation(other.start, other.end, self.start);
        let d2 = orientation(other.start, other.end, self.end);
        let d3 = orientation(self.start, self.end, other.start);
        let d4 = orientation(self.start, self.end, other.end);

        if d1 * d2 < 0.0 && d3 * d4 < 0.0 {
            return true;
        }

        //touching or collinear configurations
        (d1 == 0.0 && other.spans(&self.start))
            || (d2 == 0.0 && other.spans(&self.end))
            || (d3 == 0.0 && self.spans(&other.start))
            || (d4 == 0.0 && self.spans(&other.end))
    }
}

impl Crosses<Edge> for Edge {
    /// Two edges cross when their interiors meet in a single point.
    /// Shared endpoints, an endpoint resting on the other edge and collinear overlap do not count.
    #[inline(always)]
    fn crosses(&self, other: &Edge) -> bool {
        let d1 = orientation(other.start, other.end, self.start);
        let d2 = orientation(other.start, other.end, self.end);
        let d3 = orientation(self.start, self.end, other.start);
        let d4 = orientation(self.start, self.end, other.end);

        d1 * d2 < 0.0 && d3 * d4 < 0.0
    }
}

impl Crosses<Point> for Edge {
    /// An edge crosses a point when the point lies strictly between its endpoints.
    fn crosses(&self, point: &Point) -> bool {
        let sq_tol = GEO_TOLERANCE.powi(2);
        self.sq_distance_to(point) <= sq_tol
            && self.start.sq_distance_to(point) > sq_tol
            && self.end.sq_distance_to(point) > sq_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn e(x1: f32, y1: f32, x2: f32, y2: f32) -> Edge {
        Edge::new(Point(x1, y1), Point(x2, y2)).unwrap()
    }

    #[test]
    fn degenerate_edge_is_rejected() {
        assert!(Edge::new(Point(1.0, 1.0), Point(1.0, 1.0)).is_err());
    }

    #[test_case(e(0.0, 0.0, 2.0, 2.0), e(0.0, 2.0, 2.0, 0.0), true, true; "proper x")]
    #[test_case(e(0.0, 0.0, 2.0, 0.0), e(1.0, 0.0, 1.0, 2.0), true, false; "t junction")]
    #[test_case(e(0.0, 0.0, 1.0, 1.0), e(1.0, 1.0, 2.0, 0.0), true, false; "shared endpoint")]
    #[test_case(e(0.0, 0.0, 2.0, 0.0), e(1.0, 0.0, 3.0, 0.0), true, false; "collinear overlap")]
    #[test_case(e(0.0, 0.0, 1.0, 0.0), e(2.0, 0.0, 3.0, 0.0), false, false; "collinear disjoint")]
    #[test_case(e(0.0, 0.0, 1.0, 0.0), e(0.0, 1.0, 1.0, 1.0), false, false; "parallel")]
    #[test_case(e(0.0, 0.0, 1.0, 1.0), e(3.0, 0.0, 2.0, 1.0), false, false; "disjoint")]
    fn edge_vs_edge(a: Edge, b: Edge, collides: bool, crosses: bool) {
        assert_eq!(a.collides_with(&b), collides);
        assert_eq!(b.collides_with(&a), collides);
        assert_eq!(a.crosses(&b), crosses);
        assert_eq!(b.crosses(&a), crosses);
    }

    #[test_case(Point(1.0, 0.0), true; "interior point")]
    #[test_case(Point(0.0, 0.0), false; "start")]
    #[test_case(Point(2.0, 0.0), false; "end")]
    #[test_case(Point(1.0, 0.5), false; "off the edge")]
    #[test_case(Point(3.0, 0.0), false; "beyond the end")]
    fn edge_vs_point(p: Point, crosses: bool) {
        assert_eq!(e(0.0, 0.0, 2.0, 0.0).crosses(&p), crosses);
    }

    #[test]
    fn intersection_param_locates_crossing() {
        let a = e(0.0, 0.0, 4.0, 0.0);
        let b = e(1.0, -1.0, 1.0, 1.0);
        assert_eq!(a.intersection_param(&b), Some(0.25));
        assert_eq!(a.intersection_param(&e(0.0, 1.0, 4.0, 1.0)), None);
    }
}
