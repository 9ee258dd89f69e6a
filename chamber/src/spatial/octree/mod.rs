mod iter;
mod node;
mod ops;
mod svo;

pub use iter::SpatialNodeIterator;
pub use node::{NodeKind, SpatialNode};
pub use ops::{OctreeOpsConfig, OctreeOpsDirty, OctreeOpsRead, OctreeOpsState, OctreeOpsWrite};
pub use svo::SparseOctree;
