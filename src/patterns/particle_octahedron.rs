//! Particle Octahedron: a double pyramid tumbling about two axes.

use crate::buffers::AttributeBuffers;
use crate::config::GenerationConfig;
use crate::mesh::EdgeMesh;
use crate::sweep::edge_sweep;
use glam::{Mat3, Vec3};
use std::f32::consts::TAU;

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, .. } = *config;

    let mesh = EdgeMesh::octahedron();
    let scale = 200.0 * spread;
    let tumble = Mat3::from_rotation_x(time * 0.5) * Mat3::from_rotation_y(-time * 0.7);

    for s in edge_sweep(count, mesh.edge_count()) {
        let (start, end) = mesh.edges[s.segment];
        let point = tumble * (start.lerp(end, s.t) * scale);
        let pulse = 1.0 + (time * 2.5 + s.segment as f32 * 0.3).sin() * 0.15;

        // Upper pyramid, lower pyramid, equator
        let color = if config.black_white {
            Vec3::ONE
        } else {
            let face = s.segment / 4;
            let lit = |group: usize| if face == group { 1.0 } else { 0.3 };
            Vec3::new(lit(0), lit(1), lit(2))
        };

        let size = config.size * (0.9 + (s.t * TAU + time).sin() * 0.3);
        out.set(s.index, point * pulse, color, size);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_apex() {
        let out = generate(120, &GenerationConfig::new());
        assert!((out.positions[0] - Vec3::new(0.0, 200.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_rotation_preserves_radius() {
        let time = 1.3;
        let out = generate(120, &GenerationConfig::new().with_time(time));
        let pulse = 1.0 + (time * 2.5_f32).sin() * 0.15;
        assert!((out.positions[0].length() / pulse - 200.0).abs() < 1e-2);
    }

    #[test]
    fn test_face_groups() {
        let out = generate(120, &GenerationConfig::new());
        assert_eq!(out.colors[0], Vec3::new(1.0, 0.3, 0.3));
        assert_eq!(out.colors[40], Vec3::new(0.3, 1.0, 0.3));
        assert_eq!(out.colors[80], Vec3::new(0.3, 0.3, 1.0));
    }
}
