mod solution_to_svg;
pub mod svg_util;

#[doc(inline)]
pub use solution_to_svg::solution_to_svg;
