use std::borrow::Borrow;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::geo_traits::{CollidesWith, Contains, Crosses, DistanceTo, Shape};
use crate::geometry::primitives::{Circle, Edge, Point, Rect};
use crate::util::{FPA, GEO_TOLERANCE};
use anyhow::{Result, bail};

/// A Simple Polygon is a polygon that does not intersect itself and contains no holes.
/// It is a closed shape with a finite number of vertices and edges.
/// [read more](https://en.wikipedia.org/wiki/Simple_polygon)
#[derive(Clone, Debug)]
pub struct SPolygon {
    /// Set of points that form the polygon, ordered counterclockwise
    pub vertices: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
    /// Area of its interior
    pub area: f32,
}

impl SPolygon {
    pub fn new(mut points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            bail!("Simple polygon must have at least 3 points: {points:?}");
        }
        if points.iter().unique().count() != points.len() {
            bail!("Simple polygon should not contain duplicate points: {points:?}");
        }

        let area = match SPolygon::calculate_area(&points) {
            0.0 => bail!("Simple polygon has no area: {points:?}"),
            area if area < 0.0 => {
                //edges should always be ordered counterclockwise (positive area)
                points.reverse();
                -area
            }
            area => area,
        };

        let bbox = SPolygon::generate_bounding_box(&points)?;

        Ok(SPolygon {
            vertices: points,
            bbox,
            area,
        })
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn edge(&self, i: usize) -> Edge {
        let j = (i + 1) % self.n_vertices();
        Edge {
            start: self.vertices[i],
            end: self.vertices[j],
        }
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n_vertices()).map(move |i| self.edge(i))
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn generate_bounding_box(points: &[Point]) -> Result<Rect> {
        let (mut x_min, mut y_min) = (f32::MAX, f32::MAX);
        let (mut x_max, mut y_max) = (f32::MIN, f32::MIN);

        for point in points.iter() {
            x_min = x_min.min(point.0);
            y_min = y_min.min(point.1);
            x_max = x_max.max(point.0);
            y_max = y_max.max(point.1);
        }
        Rect::try_new(x_min, y_min, x_max, y_max)
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn calculate_area(points: &[Point]) -> f32 {
        let mut sigma: f32 = 0.0;
        for i in 0..points.len() {
            //next point
            let j = (i + 1) % points.len();

            let (x_i, y_i) = points[i].into();
            let (x_j, y_j) = points[j].into();

            sigma += (y_i + y_j) * (x_i - x_j)
        }

        0.5 * sigma
    }

    /// Classifies `point` as lying in the interior, on the boundary or in the exterior of the polygon.
    /// Points within [`GEO_TOLERANCE`] of an edge are considered to be on the boundary.
    pub fn position_of(&self, point: &Point) -> GeoPosition {
        let bbox = &self.bbox;
        if point.0 < bbox.x_min - GEO_TOLERANCE
            || point.0 > bbox.x_max + GEO_TOLERANCE
            || point.1 < bbox.y_min - GEO_TOLERANCE
            || point.1 > bbox.y_max + GEO_TOLERANCE
        {
            return GeoPosition::Exterior;
        }
        let sq_tol = GEO_TOLERANCE.powi(2);
        if self.edge_iter().any(|e| e.sq_distance_to(point) <= sq_tol) {
            return GeoPosition::Boundary;
        }

        //based on the ray casting algorithm: https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
        //horizontal ray shot to the right.
        //Starting from the point to another point that is certainly outside the shape
        let point_outside = Point(bbox.x_max + bbox.width(), point.1);
        let ray = Edge {
            start: *point,
            end: point_outside,
        };

        let mut n_intersections = 0;
        for edge in self.edge_iter() {
            //Check if the ray does not go through (or almost through) a vertex
            //Therefore we handle this case
            let (s_x, s_y) = (FPA(edge.start.0), FPA(edge.start.1));
            let (e_x, e_y) = (FPA(edge.end.0), FPA(edge.end.1));
            let (p_x, p_y) = (FPA(point.0), FPA(point.1));

            if (s_y == p_y && s_x > p_x) || (e_y == p_y && e_x > p_x) {
                //in this case, the ray passes through (or dangerously close to) a vertex
                //We handle this case by only counting an intersection if the edge is below the ray
                if s_y < p_y || e_y < p_y {
                    n_intersections += 1;
                }
            } else if ray.collides_with(&edge) {
                n_intersections += 1;
            }
        }
        match n_intersections % 2 == 1 {
            true => GeoPosition::Interior,
            false => GeoPosition::Exterior,
        }
    }

    /// Splits `edge` at every point where it meets the boundary of the polygon and classifies
    /// the open pieces in between. Together, the pieces cover the interior of `edge`.
    pub fn edge_piece_positions(&self, edge: &Edge) -> Vec<GeoPosition> {
        if !self.bbox.collides_with_bbox_of(edge) {
            return vec![GeoPosition::Exterior];
        }

        let sq_tol = GEO_TOLERANCE.powi(2);
        let mut split_params = vec![0.0, 1.0];
        for poly_edge in self.edge_iter() {
            if let Some(t) = edge.intersection_param(&poly_edge) {
                split_params.push(t);
            }
        }
        //vertices touching the edge split it as well (this also covers collinear overlap)
        for vertex in self.vertices.iter() {
            if edge.sq_distance_to(vertex) <= sq_tol {
                split_params.push(edge.projection_param(vertex));
            }
        }
        split_params.sort_by_key(|t| OrderedFloat(*t));

        split_params
            .iter()
            .tuple_windows()
            .filter(|(t1, t2)| FPA(**t1) != FPA(**t2))
            .map(|(t1, t2)| self.position_of(&edge.point_at((t1 + t2) / 2.0)))
            .collect()
    }
}

impl Shape for SPolygon {
    fn area(&self) -> f32 {
        self.area
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl CollidesWith<Point> for SPolygon {
    fn collides_with(&self, point: &Point) -> bool {
        self.position_of(point) != GeoPosition::Exterior
    }
}

impl CollidesWith<Edge> for SPolygon {
    fn collides_with(&self, edge: &Edge) -> bool {
        self.bbox.collides_with_bbox_of(edge)
            && (self.collides_with(&edge.start)
                || self.edge_iter().any(|e| e.collides_with(edge)))
    }
}

impl CollidesWith<Circle> for SPolygon {
    fn collides_with(&self, circle: &Circle) -> bool {
        circle.collides_with(&self.bbox)
            && (self.collides_with(&circle.center)
                || self.edge_iter().any(|e| circle.collides_with(&e)))
    }
}

impl CollidesWith<SPolygon> for SPolygon {
    fn collides_with(&self, other: &SPolygon) -> bool {
        self.bbox.collides_with(&other.bbox)
            && (self.edge_iter().any(|e| other.collides_with(&e))
                || self.collides_with(&other.vertex(0)))
    }
}

impl Contains<Point> for SPolygon {
    fn contains(&self, point: &Point) -> bool {
        self.position_of(point) == GeoPosition::Interior
    }
}

impl Contains<Edge> for SPolygon {
    fn contains(&self, edge: &Edge) -> bool {
        let positions = self.edge_piece_positions(edge);
        !positions.contains(&GeoPosition::Exterior) && positions.contains(&GeoPosition::Interior)
    }
}

impl Contains<Circle> for SPolygon {
    fn contains(&self, circle: &Circle) -> bool {
        self.contains(&circle.center)
            && self
                .edge_iter()
                .all(|e| e.sq_distance_to(&circle.center) >= circle.radius.powi(2))
    }
}

impl Contains<SPolygon> for SPolygon {
    /// Without holes, `other` lies within `self` as soon as its entire boundary does.
    fn contains(&self, other: &SPolygon) -> bool {
        other.edge_iter().all(|e| {
            !self
                .edge_piece_positions(&e)
                .contains(&GeoPosition::Exterior)
        }) && other.vertices.iter().all(|v| self.collides_with(v))
    }
}

impl Crosses<SPolygon> for Edge {
    /// An edge crosses a polygon when its interior passes through both the interior and the exterior
    /// of the polygon. Edges running along the boundary, or touching it from the outside, do not cross.
    fn crosses(&self, polygon: &SPolygon) -> bool {
        let positions = polygon.edge_piece_positions(self);
        positions.contains(&GeoPosition::Interior) && positions.contains(&GeoPosition::Exterior)
    }
}

impl<T> From<T> for SPolygon
where
    T: Borrow<Rect>,
{
    fn from(r: T) -> Self {
        let r = r.borrow();
        SPolygon {
            vertices: r.corners().to_vec(),
            bbox: *r,
            area: r.area(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn square() -> SPolygon {
        SPolygon::from(Rect::try_new(0.0, 0.0, 2.0, 2.0).unwrap())
    }

    fn e(x1: f32, y1: f32, x2: f32, y2: f32) -> Edge {
        Edge::new(Point(x1, y1), Point(x2, y2)).unwrap()
    }

    #[test]
    fn clockwise_input_is_reoriented() {
        let poly = SPolygon::new(vec![
            Point(0.0, 0.0),
            Point(0.0, 1.0),
            Point(1.0, 1.0),
            Point(1.0, 0.0),
        ])
        .unwrap();
        assert_eq!(poly.area, 1.0);
        assert!(SPolygon::calculate_area(&poly.vertices) > 0.0);
    }

    #[test]
    fn degenerate_polygons_are_rejected() {
        assert!(SPolygon::new(vec![Point(0.0, 0.0), Point(1.0, 0.0)]).is_err());
        assert!(SPolygon::new(vec![Point(0.0, 0.0), Point(1.0, 0.0), Point(2.0, 0.0)]).is_err());
    }

    #[test_case(Point(1.0, 1.0), GeoPosition::Interior; "center")]
    #[test_case(Point(0.0, 1.0), GeoPosition::Boundary; "on edge")]
    #[test_case(Point(2.0, 2.0), GeoPosition::Boundary; "on vertex")]
    #[test_case(Point(3.0, 1.0), GeoPosition::Exterior; "outside")]
    #[test_case(Point(-1.0, 2.0), GeoPosition::Exterior; "outside, aligned with vertex")]
    fn point_position(p: Point, expected: GeoPosition) {
        assert_eq!(square().position_of(&p), expected);
    }

    #[test_case(e(-1.0, 1.0, 3.0, 1.0), true, true; "through")]
    #[test_case(e(-1.0, 1.0, 1.0, 1.0), true, true; "into")]
    #[test_case(e(-1.0, 0.0, 3.0, 0.0), true, false; "along the boundary")]
    #[test_case(e(-1.0, -1.0, 0.0, 0.0), true, false; "touching a vertex")]
    #[test_case(e(1.0, 3.0, 3.0, 1.0), true, false; "touching a vertex diagonally")]
    #[test_case(e(0.5, 0.5, 1.5, 1.5), true, false; "inside")]
    #[test_case(e(-1.0, -1.0, -1.0, 3.0), false, false; "outside")]
    fn edge_vs_polygon(edge: Edge, collides: bool, crosses: bool) {
        let poly = square();
        assert_eq!(poly.collides_with(&edge), collides);
        assert_eq!(edge.crosses(&poly), crosses);
    }

    #[test]
    fn containment() {
        let poly = square();
        assert!(poly.contains(&Point(1.0, 1.0)));
        assert!(!poly.contains(&Point(0.0, 1.0)));
        assert!(poly.contains(&e(0.5, 0.5, 1.5, 1.5)));
        assert!(poly.contains(&e(0.0, 0.0, 2.0, 2.0)));
        assert!(!poly.contains(&e(0.0, 0.0, 2.0, 0.0)));
        assert!(!poly.contains(&e(1.0, 1.0, 3.0, 1.0)));

        let inner = SPolygon::from(Rect::try_new(0.5, 0.5, 2.0, 1.0).unwrap());
        let straddling = SPolygon::from(Rect::try_new(1.5, 1.5, 2.5, 2.5).unwrap());
        assert!(poly.contains(&inner));
        assert!(!poly.contains(&straddling));

        assert!(poly.contains(&Circle::try_new(Point(1.0, 1.0), 0.5).unwrap()));
        assert!(!poly.contains(&Circle::try_new(Point(0.2, 1.0), 0.5).unwrap()));
    }

    #[test]
    fn polygon_collisions() {
        let poly = square();
        let touching = SPolygon::from(Rect::try_new(2.0, 0.0, 3.0, 1.0).unwrap());
        let apart = SPolygon::from(Rect::try_new(2.5, 0.0, 3.0, 1.0).unwrap());
        let enclosed = SPolygon::from(Rect::try_new(0.5, 0.5, 1.0, 1.0).unwrap());
        assert!(poly.collides_with(&touching));
        assert!(!poly.collides_with(&apart));
        assert!(poly.collides_with(&enclosed));
        assert!(enclosed.collides_with(&poly));

        assert!(poly.collides_with(&Circle::try_new(Point(2.5, 1.0), 0.5).unwrap()));
        assert!(!poly.collides_with(&Circle::try_new(Point(3.0, 1.0), 0.5).unwrap()));
    }
}
