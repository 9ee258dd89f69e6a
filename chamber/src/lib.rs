pub mod core;
pub mod io;
pub mod spatial;
pub mod world;

pub use core::{ChamberError, Octant, PayloadTrait, TextureId};
pub use spatial::{NodeKind, SparseOctree, SpatialNode};
pub use world::{ChamberConfig, ChamberVolume, Vertex, VoxelData};
