//! Particle Icosahedron: thirty edges of a slowly spinning icosahedron.

use crate::buffers::AttributeBuffers;
use crate::color::phase_trio;
use crate::config::GenerationConfig;
use crate::mesh::EdgeMesh;
use crate::sweep::edge_sweep;
use glam::{Mat3, Vec3};

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, .. } = *config;

    let mesh = EdgeMesh::icosahedron();
    let scale = 200.0 * spread;
    let spin = Mat3::from_rotation_y(-time * 0.5);

    for s in edge_sweep(count, mesh.edge_count()) {
        let (start, end) = mesh.edges[s.segment];
        let point = start.lerp(end, s.t) * scale;
        let breathe = 1.0 + (time * 1.5 + s.segment as f32 * 0.1).sin() * 0.1;

        let color = if config.black_white {
            Vec3::ONE
        } else {
            phase_trio(point.length() * 0.01 + time)
        };

        out.set(s.index, spin * point * breathe, color, config.size);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_on_sphere() {
        // 300 particles -> 10 per edge; t = 0 samples are vertices
        let out = generate(300, &GenerationConfig::new());
        for edge in 0..30 {
            let p = out.positions[edge * 10];
            let breathe = 1.0 + (edge as f32 * 0.1).sin() * 0.1;
            assert!((p.length() / breathe - 200.0).abs() < 1e-2);
        }
    }

    #[test]
    fn test_uniform_size() {
        let out = generate(300, &GenerationConfig::new().with_size(3.0));
        assert!(out.sizes.iter().all(|&s| s == 3.0));
    }
}
