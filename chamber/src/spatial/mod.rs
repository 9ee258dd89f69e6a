mod octree;

pub use octree::{
    NodeKind, OctreeOpsConfig, OctreeOpsDirty, OctreeOpsRead, OctreeOpsState, OctreeOpsWrite,
    SparseOctree, SpatialNode, SpatialNodeIterator,
};
