use glam::IVec3;

use crate::{Octant, PayloadTrait};

pub type Children<T> = [Option<SpatialNode<T>>; Octant::COUNT];

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<T: PayloadTrait> {
    Branch(Box<Children<T>>),
    Leaf(T),
}

/// A cubical region of the octree, either a leaf holding a payload or a
/// branch owning eight optional children.
///
/// The region spans `center - half_size ..= center + half_size` on every
/// axis. The child in octant `i` is centered at
/// `center + half_size / 2 * signs(i)` and has half the parent's half size.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialNode<T: PayloadTrait> {
    center: IVec3,
    half_size: i32,
    kind: NodeKind<T>,
}

impl<T: PayloadTrait> NodeKind<T> {
    fn new_branch() -> Self {
        NodeKind::Branch(Box::new([None, None, None, None, None, None, None, None]))
    }
}

impl<T: PayloadTrait> SpatialNode<T> {
    #[must_use]
    pub fn new_leaf(center: IVec3, half_size: i32, payload: T) -> Self {
        debug_assert!(half_size > 0, "Half size must be positive");

        Self {
            center,
            half_size,
            kind: NodeKind::Leaf(payload),
        }
    }

    /// The center of the voxel.
    #[inline(always)]
    pub fn center(&self) -> IVec3 {
        self.center
    }

    #[inline(always)]
    pub fn half_size(&self) -> i32 {
        self.half_size
    }

    #[inline(always)]
    pub fn size(&self) -> i32 {
        self.half_size * 2
    }

    #[inline(always)]
    pub fn kind(&self) -> &NodeKind<T> {
        &self.kind
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    #[inline(always)]
    pub fn has_children(&self) -> bool {
        matches!(self.kind, NodeKind::Branch(_))
    }

    #[inline(always)]
    pub fn payload(&self) -> Option<&T> {
        match &self.kind {
            NodeKind::Leaf(payload) => Some(payload),
            NodeKind::Branch(_) => None,
        }
    }

    #[inline(always)]
    pub fn children(&self) -> Option<&Children<T>> {
        match &self.kind {
            NodeKind::Branch(children) => Some(children),
            NodeKind::Leaf(_) => None,
        }
    }

    /// Returns the child in `octant` without allocating it.
    #[inline(always)]
    pub fn child(&self, octant: Octant) -> Option<&SpatialNode<T>> {
        self.children()
            .and_then(|children| children[octant.index()].as_ref())
    }

    #[inline(always)]
    pub fn child_mut(&mut self, octant: Octant) -> Option<&mut SpatialNode<T>> {
        match &mut self.kind {
            NodeKind::Branch(children) => children[octant.index()].as_mut(),
            NodeKind::Leaf(_) => None,
        }
    }

    /// Returns the child in `octant`, creating an air leaf in an empty slot.
    ///
    /// Returns `None` for leaves, they have no slots to fill.
    pub fn child_or_insert(&mut self, octant: Octant) -> Option<&mut SpatialNode<T>> {
        let center = octant.child_center(self.center, self.half_size);
        let half_size = self.half_size / 2;

        match &mut self.kind {
            NodeKind::Branch(children) => Some(
                children[octant.index()]
                    .get_or_insert_with(|| SpatialNode::new_leaf(center, half_size, T::default())),
            ),
            NodeKind::Leaf(_) => None,
        }
    }

    /// Splits a leaf into a branch with eight empty slots.
    ///
    /// The leaf's payload is dropped, it is not copied into the new children.
    /// Returns `false` when the node already was a branch.
    pub fn subdivide(&mut self) -> bool {
        if self.has_children() {
            return false;
        }

        self.kind = NodeKind::new_branch();
        true
    }

    /// Turns the node into a leaf holding `payload`, dropping any children.
    pub fn merge(&mut self, payload: T) {
        self.kind = NodeKind::Leaf(payload);
    }

    #[inline(always)]
    pub fn octant_of(&self, position: IVec3) -> Octant {
        Octant::of(self.center, position)
    }

    /// Largest per-axis distance between `position` and the center.
    ///
    /// Computed in `u32`, so it holds for any pair of `i32` coordinates.
    #[inline(always)]
    fn max_axis_distance(&self, position: IVec3) -> u32 {
        let center = self.center;

        position
            .x
            .abs_diff(center.x)
            .max(position.y.abs_diff(center.y))
            .max(position.z.abs_diff(center.z))
    }

    /// Whether `position` lies strictly inside the region, every axis offset
    /// from the center within `-half_size + 1 ..= half_size - 1`.
    #[inline(always)]
    pub fn is_position_within_bounds(&self, position: IVec3) -> bool {
        self.max_axis_distance(position) < self.half_size.unsigned_abs()
    }

    /// Whether `position` lies on one of the six faces of the region.
    #[inline(always)]
    pub fn is_position_on_bounds(&self, position: IVec3) -> bool {
        self.max_axis_distance(position) == self.half_size.unsigned_abs()
    }
}
