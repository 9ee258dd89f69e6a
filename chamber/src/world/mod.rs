mod config;
mod mesh;
mod vertex;
mod volume;
mod voxel_data;

pub use config::{ChamberConfig, DEFAULT_RESOLUTION, MAX_CHAMBER_SIZE};
pub use mesh::{CUBE_FACES, CubeFace, QUAD_UVS, VERTICES_PER_CUBE, VERTICES_PER_FACE, add_cube};
pub use vertex::Vertex;
pub use volume::ChamberVolume;
pub use voxel_data::VoxelData;
