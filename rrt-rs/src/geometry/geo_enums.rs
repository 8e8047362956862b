/// Position of a point relative to a closed shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoPosition {
    Exterior,
    Boundary,
    Interior,
}
