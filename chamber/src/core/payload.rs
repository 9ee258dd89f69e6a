/// Data stored in an octree leaf.
///
/// The `Default` value is air: lazily created children hold it and mesh
/// extraction skips leaves carrying it.
pub trait PayloadTrait: Clone + PartialEq + Default + std::fmt::Debug {
    #[inline(always)]
    fn is_air(&self) -> bool {
        *self == Self::default()
    }
}

impl<T> PayloadTrait for T where T: Clone + PartialEq + Default + std::fmt::Debug {}
