use glam::IVec3;

use crate::{ChamberError, Octant, PayloadTrait};

use super::{
    OctreeOpsConfig, OctreeOpsDirty, OctreeOpsRead, OctreeOpsState, OctreeOpsWrite, SpatialNode,
    SpatialNodeIterator, node::Children,
};

/// Sparse octree keyed by integer voxel centers.
///
/// The root covers a cube of edge `size` centered at the origin. A voxel is
/// addressed by the exact center of the node holding it; nodes are split on
/// demand while descending towards that center and children are created
/// lazily.
///
/// Splitting a leaf drops its payload. Storing a voxel below an existing
/// voxel therefore erases the coarser one.
///
/// # Examples
///
/// ```rust
/// use chamber::SparseOctree;
/// use chamber::spatial::{OctreeOpsRead, OctreeOpsWrite};
/// use glam::IVec3;
///
/// let mut octree = SparseOctree::<i32>::new(16).unwrap();
/// assert!(octree.exists(IVec3::ZERO));
///
/// assert!(octree.set(IVec3::new(4, 4, 4), 42));
/// assert_eq!(octree.get(IVec3::new(4, 4, 4)).and_then(|n| n.payload()), Some(&42));
/// ```
#[derive(Debug, Clone)]
pub struct SparseOctree<T: PayloadTrait> {
    size: i32,
    root: SpatialNode<T>,
    dirty: bool,
}

/// Collapses, bottom-up, every branch whose eight slots hold leaves with the
/// same payload. An empty slot counts as an air leaf.
///
/// Returns the number of collapsed branches.
fn octree_simplify_node<T: PayloadTrait>(node: &mut SpatialNode<T>) -> usize {
    if node.is_leaf() {
        return 0;
    }

    let mut merged = 0;

    for octant in Octant::ALL {
        if let Some(child) = node.child_mut(octant) {
            merged += octree_simplify_node(child);
        }
    }

    if let Some(payload) = octree_uniform_children_payload(node) {
        node.merge(payload);
        merged += 1;
    }

    merged
}

fn octree_uniform_children_payload<T: PayloadTrait>(node: &SpatialNode<T>) -> Option<T> {
    let children = node.children()?;

    let payload_of = |child: &Option<SpatialNode<T>>| -> Option<T> {
        match child {
            Some(child) => child.payload().cloned(),
            None => Some(T::default()),
        }
    };

    let first = payload_of(&children[0])?;

    for child in children.iter().skip(1) {
        match payload_of(child) {
            Some(payload) if payload == first => continue,
            _ => return None,
        }
    }

    Some(first)
}

/// Heap bytes owned by `node`: its boxed child array and everything below.
fn octree_node_heap_size<T: PayloadTrait>(node: &SpatialNode<T>) -> usize {
    match node.children() {
        None => 0,
        Some(children) => {
            let children_size: usize = children
                .iter()
                .flatten()
                .map(octree_node_heap_size)
                .sum();
            std::mem::size_of::<Children<T>>() + children_size
        }
    }
}

impl<T: PayloadTrait> SparseOctree<T> {
    /// Creates an octree whose root covers a cube of edge `size` centered at
    /// the origin, holding a single air leaf.
    ///
    /// # Errors
    /// - [`ChamberError::InvalidSize`] if `size < 2`, the root needs a positive
    ///   half size.
    pub fn new(size: i32) -> Result<Self, ChamberError> {
        if size < 2 {
            return Err(ChamberError::InvalidSize { size });
        }

        Ok(Self::with_valid_size(size))
    }

    /// Same as [`SparseOctree::new`] for a size already known to be valid.
    pub(crate) fn with_valid_size(size: i32) -> Self {
        debug_assert!(size >= 2, "Octree size must be at least 2");

        log::debug!("Creating octree of size {size}");

        Self {
            size,
            root: SpatialNode::new_leaf(IVec3::ZERO, size / 2, T::default()),
            dirty: false,
        }
    }

    #[inline(always)]
    pub fn root(&self) -> &SpatialNode<T> {
        &self.root
    }

    /// Mutable access to the root. The tree is marked dirty since any change
    /// made through it is invisible to the octree.
    #[inline(always)]
    pub fn root_mut(&mut self) -> &mut SpatialNode<T> {
        self.dirty = true;
        &mut self.root
    }

    pub fn iter(&self) -> SpatialNodeIterator<'_, T> {
        SpatialNodeIterator::new(&self.root)
    }

    /// Leaves in depth-first order.
    pub fn leaves(&self) -> impl Iterator<Item = &SpatialNode<T>> {
        self.iter()
            .map(|(node, _)| node)
            .filter(|node| node.is_leaf())
    }

    /// Depth of the deepest allocated node, the root being at depth 0.
    pub fn max_depth(&self) -> usize {
        self.iter().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    pub fn total_memory_size(&self) -> usize {
        std::mem::size_of::<Self>() + octree_node_heap_size(&self.root)
    }

    fn set_at(&mut self, position: IVec3, payload: T, force_merge: bool) -> bool {
        let mut touched = false;
        let mut node = &mut self.root;

        let result = loop {
            if !node.is_position_within_bounds(position) {
                break false;
            }

            if node.center() == position {
                if node.has_children() && !force_merge {
                    break false;
                }

                node.merge(payload);
                touched = true;
                break true;
            }

            touched |= node.subdivide();

            let octant = node.octant_of(position);
            node = match node.child_or_insert(octant) {
                Some(child) => child,
                None => break false,
            };
        };

        if touched {
            self.dirty = true;
        }

        result
    }
}

impl<T: PayloadTrait> OctreeOpsRead<T> for SparseOctree<T> {
    /// Read-only counterpart of [`OctreeOpsWrite::get`]: returns `None`
    /// instead of allocating when the descent reaches an empty slot.
    fn find(&self, position: IVec3) -> Option<&SpatialNode<T>> {
        let mut node = &self.root;

        loop {
            if !node.is_position_within_bounds(position) {
                return None;
            }

            if node.is_leaf() {
                return Some(node);
            }

            node = node.child(node.octant_of(position))?;
        }
    }

    /// Whether a node centered exactly at `position` is allocated.
    fn exists(&self, position: IVec3) -> bool {
        let mut node = &self.root;

        loop {
            if !node.is_position_within_bounds(position) {
                return false;
            }

            if node.center() == position {
                return true;
            }

            match node.child(node.octant_of(position)) {
                Some(child) => node = child,
                None => return false,
            }
        }
    }
}

impl<T: PayloadTrait> OctreeOpsWrite<T> for SparseOctree<T> {
    /// Stores `payload` in the voxel centered at `position`.
    ///
    /// Fails when `position` is not strictly inside a node met on the way
    /// down, or when it is the center of a branch.
    fn set(&mut self, position: IVec3, payload: T) -> bool {
        self.set_at(position, payload, false)
    }

    /// Like [`OctreeOpsWrite::set`], but collapses a branch centered at
    /// `position` into a leaf instead of failing.
    fn force_set(&mut self, position: IVec3, payload: T) -> bool {
        self.set_at(position, payload, true)
    }

    /// Descends towards `position` and returns the leaf reached, creating
    /// air leaves in empty slots along the way.
    ///
    /// The leaf's center is not necessarily `position`.
    fn get(&mut self, position: IVec3) -> Option<&SpatialNode<T>> {
        let mut node = &mut self.root;

        loop {
            if !node.is_position_within_bounds(position) {
                return None;
            }

            if node.is_leaf() {
                break;
            }

            let octant = node.octant_of(position);
            node = node.child_or_insert(octant)?;
        }

        Some(node)
    }

    fn simplify(&mut self) -> usize {
        #[cfg(feature = "tracy")]
        let _span = tracy_client::span!("SparseOctree::simplify");

        let merged = octree_simplify_node(&mut self.root);

        if merged > 0 {
            log::trace!("Simplify collapsed {merged} branches");
            self.dirty = true;
        }

        merged
    }

    fn clear(&mut self) {
        self.root = SpatialNode::new_leaf(IVec3::ZERO, self.size / 2, T::default());
        self.dirty = true;
    }
}

impl<T: PayloadTrait> OctreeOpsConfig for SparseOctree<T> {
    #[inline(always)]
    fn size(&self) -> i32 {
        self.size
    }

    #[inline(always)]
    fn half_size(&self) -> i32 {
        self.root.half_size()
    }
}

impl<T: PayloadTrait> OctreeOpsState for SparseOctree<T> {
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.root.payload().is_some_and(|payload| payload.is_air())
    }

    #[inline(always)]
    fn is_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    fn node_count(&self) -> usize {
        self.iter().count()
    }

    fn leaf_count(&self) -> usize {
        self.leaves().count()
    }
}

impl<T: PayloadTrait> OctreeOpsDirty for SparseOctree<T> {
    #[inline(always)]
    fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline(always)]
    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[inline(always)]
    fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
