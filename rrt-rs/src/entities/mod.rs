mod obstacle;
mod region;
mod scene;
mod tree;

#[doc(inline)]
pub use obstacle::Obstacle;
#[doc(inline)]
pub use region::Region;
#[doc(inline)]
pub use scene::Scene;
#[doc(inline)]
pub use tree::{EdgeId, NodeId, RRTree, TreeEdge, TreeNode};
