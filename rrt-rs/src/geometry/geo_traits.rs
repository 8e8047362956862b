use crate::geometry::primitives::Rect;

/// Trait for types that can detect collisions between `Self` and `T`.
/// Two shapes collide if they share at least one point, touching included.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can detect whether `T` lies entirely within `Self`.
///
/// Mirrors the usual topological definition: no point of `T` lies in the exterior of `Self`
/// and the interiors of both shapes meet. A point on the boundary of `Self` is therefore *not* contained.
pub trait Contains<T> {
    fn contains(&self, other: &T) -> bool;
}

/// Trait for types that can detect a *proper* crossing between `Self` and `T`.
///
/// Stricter than [`CollidesWith`]: shapes which merely touch (an endpoint resting on another segment,
/// a segment grazing the boundary of a polygon, collinear overlap) do not cross.
pub trait Crosses<T> {
    fn crosses(&self, other: &T) -> bool;
}

/// Trait for types that can compute the minimum distance between `Self` and `T`.
pub trait DistanceTo<T> {
    /// Minimum distance between two primitives. Will be 0 in case of a collision.
    fn distance_to(&self, other: &T) -> f32;

    /// Squared version of [DistanceTo::distance_to]
    fn sq_distance_to(&self, other: &T) -> f32;
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Area of the interior of the shape
    fn area(&self) -> f32;

    /// Bounding box of the shape
    fn bbox(&self) -> Rect;
}
