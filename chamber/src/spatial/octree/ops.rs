use glam::IVec3;

use crate::PayloadTrait;

use super::SpatialNode;

pub trait OctreeOpsRead<T: PayloadTrait> {
    fn find(&self, position: IVec3) -> Option<&SpatialNode<T>>;
    fn exists(&self, position: IVec3) -> bool;
}

pub trait OctreeOpsWrite<T: PayloadTrait> {
    fn set(&mut self, position: IVec3, payload: T) -> bool;
    fn force_set(&mut self, position: IVec3, payload: T) -> bool;
    fn get(&mut self, position: IVec3) -> Option<&SpatialNode<T>>;
    fn simplify(&mut self) -> usize;
    fn clear(&mut self);
}

pub trait OctreeOpsConfig {
    fn size(&self) -> i32;
    fn half_size(&self) -> i32;
}

pub trait OctreeOpsState {
    fn is_empty(&self) -> bool;
    fn is_leaf(&self) -> bool;
    fn node_count(&self) -> usize;
    fn leaf_count(&self) -> usize;
}

pub trait OctreeOpsDirty {
    fn is_dirty(&self) -> bool;
    fn mark_dirty(&mut self);
    fn clear_dirty(&mut self);
}
