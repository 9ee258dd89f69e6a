use glam::IVec3;

use crate::{
    ChamberError, PayloadTrait, SparseOctree, SpatialNode,
    spatial::{OctreeOpsDirty, OctreeOpsRead, OctreeOpsWrite},
};

use super::{ChamberConfig, Vertex, VoxelData, mesh::add_cube};

/// The edited chamber: a sparse octree of [`VoxelData`] spanning the
/// configured extent, plus the last mesh built from it.
pub struct ChamberVolume {
    config: ChamberConfig,
    octree: SparseOctree<VoxelData>,
    mesh: Vec<Vertex>,
    mesh_valid: bool,
}

/// Walks the subtree under `node` depth-first, children in octant order,
/// and emits a cube for every leaf that is not air.
fn volume_collect_vertices<T: PayloadTrait>(vertices: &mut Vec<Vertex>, node: &SpatialNode<T>) {
    let mut stack = vec![node];

    while let Some(node) = stack.pop() {
        match node.children() {
            Some(children) => {
                stack.extend(children.iter().rev().flatten());
            }
            None => {
                if node.payload().is_some_and(|payload| !payload.is_air()) {
                    add_cube(vertices, node.center(), node.half_size());
                }
            }
        }
    }
}

impl Default for ChamberVolume {
    fn default() -> Self {
        Self::with_config(ChamberConfig::default())
    }
}

impl ChamberVolume {
    /// Creates an empty chamber of [`super::MAX_CHAMBER_SIZE`] with the
    /// default edit resolution.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ChamberConfig) -> Self {
        log::debug!("Creating chamber: {config}");

        Self {
            config,
            octree: SparseOctree::with_valid_size(config.max_extent()),
            mesh: Vec::new(),
            mesh_valid: false,
        }
    }

    /// Creates a chamber after validating `max_extent` and `edit_resolution`.
    ///
    /// # Errors
    /// See [`ChamberConfig::new`].
    pub fn with_dimensions(max_extent: i32, edit_resolution: i32) -> Result<Self, ChamberError> {
        Ok(Self::with_config(ChamberConfig::new(
            max_extent,
            edit_resolution,
        )?))
    }

    #[inline(always)]
    pub fn config(&self) -> &ChamberConfig {
        &self.config
    }

    #[inline(always)]
    pub fn edit_resolution(&self) -> i32 {
        self.config.edit_resolution()
    }

    #[inline(always)]
    pub fn octree(&self) -> &SparseOctree<VoxelData> {
        &self.octree
    }

    /// Mutable access to the octree. Edits made through it still invalidate
    /// the cached mesh through the octree's dirty flag.
    #[inline(always)]
    pub fn octree_mut(&mut self) -> &mut SparseOctree<VoxelData> {
        &mut self.octree
    }

    pub fn set(&mut self, position: IVec3, voxel: VoxelData) -> bool {
        self.octree.set(position, voxel)
    }

    pub fn force_set(&mut self, position: IVec3, voxel: VoxelData) -> bool {
        self.octree.force_set(position, voxel)
    }

    pub fn get(&mut self, position: IVec3) -> Option<&SpatialNode<VoxelData>> {
        self.octree.get(position)
    }

    pub fn exists(&self, position: IVec3) -> bool {
        self.octree.exists(position)
    }

    /// Stores `voxel` in the edit grid cell `cell`.
    ///
    /// Returns `false` if the cell is outside the grid or the octree refused
    /// the write.
    pub fn set_cell(&mut self, cell: IVec3, voxel: VoxelData) -> bool {
        match self.config.cell_center(cell) {
            Some(center) => self.octree.set(center, voxel),
            None => false,
        }
    }

    /// The voxel stored in the edit grid cell `cell`, if that cell is a node
    /// of its own.
    ///
    /// Cells absorbed into a larger leaf by [`ChamberVolume::simplify`] are no
    /// longer nodes of their own and return `None`, even though the merged
    /// leaf still covers them.
    pub fn cell(&self, cell: IVec3) -> Option<&VoxelData> {
        let center = self.config.cell_center(cell)?;

        self.octree
            .find(center)
            .filter(|node| node.center() == center)
            .and_then(|node| node.payload())
    }

    /// Collapses uniform regions into single leaves and returns how many
    /// branches were merged.
    ///
    /// Merging is destructive for later edits: a [`ChamberVolume::set_cell`]
    /// inside a merged region subdivides that leaf again and its payload is
    /// dropped, so the sibling cells it covered become air.
    pub fn simplify(&mut self) -> usize {
        self.octree.simplify()
    }

    pub fn clear(&mut self) {
        self.octree.clear();
    }

    /// Builds a fresh triangle list of the chamber, ignoring the cache.
    pub fn build_mesh(&self) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        volume_collect_vertices(&mut vertices, self.octree.root());
        vertices
    }

    /// Returns the chamber's triangle list, rebuilding it only if the
    /// octree changed since the last call.
    pub fn render(&mut self) -> &[Vertex] {
        #[cfg(feature = "tracy")]
        let _span = tracy_client::span!("ChamberVolume::render");

        if !self.mesh_valid || self.octree.is_dirty() {
            self.mesh.clear();
            volume_collect_vertices(&mut self.mesh, self.octree.root());
            self.octree.clear_dirty();
            self.mesh_valid = true;

            log::debug!(
                "Rebuilt chamber mesh: {} vertices from {} leaves",
                self.mesh.len(),
                self.octree.leaves().count()
            );
        }

        &self.mesh
    }
}
