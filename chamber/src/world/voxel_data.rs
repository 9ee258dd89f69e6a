use crate::TextureId;

/// Payload of a chamber voxel.
///
/// The default value, without a texture, is air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VoxelData {
    pub texture: TextureId,
}

impl VoxelData {
    pub const AIR: VoxelData = VoxelData {
        texture: TextureId::NONE,
    };

    #[must_use]
    pub const fn new(texture: TextureId) -> Self {
        Self { texture }
    }

    #[must_use]
    pub const fn with_texture(texture: u32) -> Self {
        Self {
            texture: TextureId::new(texture),
        }
    }
}

impl From<TextureId> for VoxelData {
    fn from(texture: TextureId) -> Self {
        Self::new(texture)
    }
}
