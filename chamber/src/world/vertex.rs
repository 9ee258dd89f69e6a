use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// A mesh vertex laid out for direct upload to a vertex buffer: three
/// position floats followed by two UV floats, 20 bytes, no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    #[must_use]
    #[inline(always)]
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            uv: uv.to_array(),
        }
    }

    #[inline(always)]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    #[inline(always)]
    pub fn uv(&self) -> Vec2 {
        Vec2::from_array(self.uv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 20);
        assert_eq!(std::mem::align_of::<Vertex>(), 4);
    }

    #[test]
    fn test_cast_to_bytes() {
        let vertices = [
            Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec2::new(0.0, 1.0)),
            Vertex::new(Vec3::new(-1.0, 0.5, 8.0), Vec2::new(1.0, 1.0)),
        ];

        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 40);

        let floats: &[f32] = bytemuck::cast_slice(&vertices);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 1.0, -1.0, 0.5, 8.0, 1.0, 1.0]);
    }

    #[test]
    fn test_accessors() {
        let vertex = Vertex::new(Vec3::new(4.0, 5.0, 6.0), Vec2::new(1.0, 0.0));

        assert_eq!(vertex.position(), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(vertex.uv(), Vec2::new(1.0, 0.0));
    }
}
