/// Serializable representations of scenes and planning results
pub mod ext_repr;

/// Conversion between the internal entities and their external representation
pub mod export;
pub mod import;

/// Rendering of scenes and trees to SVG
pub mod svg;
