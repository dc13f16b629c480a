//! Edge meshes for the polyhedron patterns.
//!
//! Particles are spread along these edges, so the edge order matters: the
//! generators color and phase-shift by edge index.

use glam::Vec3;

/// A polyhedron described only by its edges.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMesh {
    /// Edges as pairs of endpoints (start, end), unit-scale.
    pub edges: Vec<(Vec3, Vec3)>,
}

impl EdgeMesh {
    /// Build a mesh from a vertex table and index pairs.
    pub fn from_indices(vertices: &[Vec3], edges: &[(usize, usize)]) -> Self {
        Self {
            edges: edges
                .iter()
                .map(|&(a, b)| (vertices[a], vertices[b]))
                .collect(),
        }
    }

    /// Cube with corners at ±1 (12 edges).
    pub fn cube() -> Self {
        let v = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);
        Self {
            edges: vec![
                // Bottom square
                (v(-1.0, -1.0, -1.0), v(1.0, -1.0, -1.0)),
                (v(1.0, -1.0, -1.0), v(1.0, -1.0, 1.0)),
                (v(1.0, -1.0, 1.0), v(-1.0, -1.0, 1.0)),
                (v(-1.0, -1.0, 1.0), v(-1.0, -1.0, -1.0)),
                // Top square
                (v(-1.0, 1.0, -1.0), v(1.0, 1.0, -1.0)),
                (v(1.0, 1.0, -1.0), v(1.0, 1.0, 1.0)),
                (v(1.0, 1.0, 1.0), v(-1.0, 1.0, 1.0)),
                (v(-1.0, 1.0, 1.0), v(-1.0, 1.0, -1.0)),
                // Vertical edges
                (v(-1.0, -1.0, -1.0), v(-1.0, 1.0, -1.0)),
                (v(1.0, -1.0, -1.0), v(1.0, 1.0, -1.0)),
                (v(1.0, -1.0, 1.0), v(1.0, 1.0, 1.0)),
                (v(-1.0, -1.0, 1.0), v(-1.0, 1.0, 1.0)),
            ],
        }
    }

    /// Square pyramid: base at y = -0.5, apex at y = 1 (8 edges).
    ///
    /// The caller scales y separately from x/z to set the height.
    pub fn pyramid() -> Self {
        let b0 = Vec3::new(-1.0, -0.5, -1.0);
        let b1 = Vec3::new(1.0, -0.5, -1.0);
        let b2 = Vec3::new(1.0, -0.5, 1.0);
        let b3 = Vec3::new(-1.0, -0.5, 1.0);
        let apex = Vec3::new(0.0, 1.0, 0.0);

        Self {
            edges: vec![
                // Base
                (b0, b1),
                (b1, b2),
                (b2, b3),
                (b3, b0),
                // To apex
                (b0, apex),
                (b1, apex),
                (b2, apex),
                (b3, apex),
            ],
        }
    }

    /// Octahedron with vertices on the unit axes (12 edges).
    ///
    /// Edges come in three groups of four: upper pyramid, lower pyramid,
    /// equator.
    pub fn octahedron() -> Self {
        let vertices = [
            Vec3::Y,     // top
            Vec3::NEG_Y, // bottom
            Vec3::X,     // right
            Vec3::NEG_X, // left
            Vec3::Z,     // front
            Vec3::NEG_Z, // back
        ];
        Self::from_indices(
            &vertices,
            &[
                (0, 2), (0, 4), (0, 3), (0, 5),
                (1, 2), (1, 4), (1, 3), (1, 5),
                (2, 4), (4, 3), (3, 5), (5, 2),
            ],
        )
    }

    /// Icosahedron from golden-ratio rectangles, vertices on the unit
    /// sphere (30 edges).
    pub fn icosahedron() -> Self {
        let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;

        let vertices = [
            Vec3::new(-1.0, phi, 0.0),
            Vec3::new(1.0, phi, 0.0),
            Vec3::new(-1.0, -phi, 0.0),
            Vec3::new(1.0, -phi, 0.0),
            Vec3::new(0.0, -1.0, phi),
            Vec3::new(0.0, 1.0, phi),
            Vec3::new(0.0, -1.0, -phi),
            Vec3::new(0.0, 1.0, -phi),
            Vec3::new(phi, 0.0, -1.0),
            Vec3::new(phi, 0.0, 1.0),
            Vec3::new(-phi, 0.0, -1.0),
            Vec3::new(-phi, 0.0, 1.0),
        ]
        .map(Vec3::normalize);

        Self::from_indices(
            &vertices,
            &[
                (0, 11), (0, 5), (0, 1), (0, 7), (0, 10),
                (1, 5), (1, 7), (1, 9), (1, 8),
                (2, 3), (2, 4), (2, 6), (2, 10), (2, 11),
                (3, 4), (3, 6), (3, 8), (3, 9),
                (4, 5), (4, 9), (4, 11),
                (5, 9), (5, 11),
                (6, 7), (6, 8), (6, 10),
                (7, 8), (7, 10),
                (8, 9),
                (10, 11),
            ],
        )
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
