use crate::PayloadTrait;

use super::SpatialNode;

/// Depth-first, pre-order walk over every allocated node.
///
/// Children are visited in octant order and empty slots are skipped.
pub struct SpatialNodeIterator<'a, T: PayloadTrait> {
    stack: Vec<(&'a SpatialNode<T>, usize)>,
}

impl<'a, T: PayloadTrait> SpatialNodeIterator<'a, T> {
    pub fn new(root: &'a SpatialNode<T>) -> Self {
        Self {
            stack: vec![(root, 0)],
        }
    }
}

impl<'a, T: PayloadTrait> Iterator for SpatialNodeIterator<'a, T> {
    /// The node and its depth below the start node.
    type Item = (&'a SpatialNode<T>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;

        if let Some(children) = node.children() {
            for child in children.iter().rev().filter_map(|child| child.as_ref()) {
                self.stack.push((child, depth + 1));
            }
        }

        Some((node, depth))
    }
}
