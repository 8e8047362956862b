/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;
mod fpa;

#[doc(inline)]
pub use config::RRTConfig;
#[doc(inline)]
pub use config::TreePalette;
#[doc(inline)]
pub use fpa::FPA;

/// Absolute tolerance used when classifying points as lying *on* a segment or the boundary of a polygon.
pub const GEO_TOLERANCE: f32 = 1e-4;
