mod path;
mod planner;
mod sampler;
mod solution;

#[doc(inline)]
pub use path::{TreePath, extract_path, find_path, mark_path};
#[doc(inline)]
pub use planner::{GrowthState, RRTPlanner};
#[doc(inline)]
pub use sampler::UniformRectSampler;
#[doc(inline)]
pub use solution::{PlanOutcome, RRTSolution};
