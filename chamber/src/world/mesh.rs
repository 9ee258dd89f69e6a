use glam::{IVec3, Vec2, Vec3};

use super::Vertex;

pub const VERTICES_PER_FACE: usize = 6;
pub const VERTICES_PER_CUBE: usize = VERTICES_PER_FACE * 6;

/// One side of a unit cube.
///
/// `corners` are listed counter-clockwise as seen from outside the cube, so
/// the two triangles `0, 1, 2` and `2, 3, 0` face along `normal`.
pub struct CubeFace {
    pub normal: Vec3,
    pub corners: [Vec3; 4],
}

/// Texture coordinates of the four face corners, shared by every face so a
/// texture tiles the same way on all sides.
pub const QUAD_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

const QUAD_TRIANGLES: [usize; VERTICES_PER_FACE] = [0, 1, 2, 2, 3, 0];

/// Faces in emission order: -Z, +Z, -X, +X, -Y, +Y.
pub const CUBE_FACES: [CubeFace; 6] = [
    CubeFace {
        normal: Vec3::NEG_Z,
        corners: [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ],
    },
    CubeFace {
        normal: Vec3::Z,
        corners: [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        ],
    },
    CubeFace {
        normal: Vec3::NEG_X,
        corners: [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
        ],
    },
    CubeFace {
        normal: Vec3::X,
        corners: [
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
        ],
    },
    CubeFace {
        normal: Vec3::NEG_Y,
        corners: [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        ],
    },
    CubeFace {
        normal: Vec3::Y,
        corners: [
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ],
    },
];

/// Appends the 36 vertices of the cube centered at `center` with the given
/// `half_size` as a triangle list.
pub fn add_cube(vertices: &mut Vec<Vertex>, center: IVec3, half_size: i32) {
    let min = (center - IVec3::splat(half_size)).as_vec3();
    let size = (half_size * 2) as f32;

    vertices.reserve(VERTICES_PER_CUBE);

    for face in CUBE_FACES.iter() {
        for &corner in QUAD_TRIANGLES.iter() {
            vertices.push(Vertex::new(
                min + face.corners[corner] * size,
                QUAD_UVS[corner],
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(center: IVec3, half_size: i32) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        add_cube(&mut vertices, center, half_size);
        vertices
    }

    #[test]
    fn test_vertex_count() {
        assert_eq!(cube(IVec3::ZERO, 1).len(), VERTICES_PER_CUBE);
        assert_eq!(VERTICES_PER_CUBE, 36);
    }

    #[test]
    fn test_bounds() {
        let vertices = cube(IVec3::new(4, -4, 12), 2);

        let min = vertices
            .iter()
            .map(Vertex::position)
            .fold(Vec3::splat(f32::MAX), Vec3::min);
        let max = vertices
            .iter()
            .map(Vertex::position)
            .fold(Vec3::splat(f32::MIN), Vec3::max);

        assert_eq!(min, Vec3::new(2.0, -6.0, 10.0));
        assert_eq!(max, Vec3::new(6.0, -2.0, 14.0));
    }

    #[test]
    fn test_faces_lie_on_their_plane() {
        let vertices = cube(IVec3::ZERO, 1);

        for (face, chunk) in CUBE_FACES.iter().zip(vertices.chunks(VERTICES_PER_FACE)) {
            for vertex in chunk {
                assert_eq!(vertex.position().dot(face.normal), 1.0);
            }
        }
    }

    #[test]
    fn test_winding_faces_outward() {
        let center = IVec3::new(10, 20, 30);
        let vertices = cube(center, 4);

        for (face, chunk) in CUBE_FACES.iter().zip(vertices.chunks(VERTICES_PER_FACE)) {
            for triangle in chunk.chunks(3) {
                let a = triangle[0].position();
                let b = triangle[1].position();
                let c = triangle[2].position();

                let normal = (b - a).cross(c - a).normalize();
                assert_eq!(normal, face.normal);

                let centroid = (a + b + c) / 3.0;
                assert!((centroid - center.as_vec3()).dot(normal) > 0.0);
            }
        }
    }

    #[test]
    fn test_uvs_cover_unit_square_per_face() {
        let vertices = cube(IVec3::ZERO, 1);

        for chunk in vertices.chunks(VERTICES_PER_FACE) {
            let uvs: Vec<Vec2> = chunk.iter().map(Vertex::uv).collect();

            assert_eq!(
                uvs,
                vec![
                    Vec2::new(0.0, 0.0),
                    Vec2::new(1.0, 0.0),
                    Vec2::new(1.0, 1.0),
                    Vec2::new(1.0, 1.0),
                    Vec2::new(0.0, 1.0),
                    Vec2::new(0.0, 0.0),
                ]
            );
        }
    }
}
