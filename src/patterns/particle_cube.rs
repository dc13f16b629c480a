//! Particle Cube: particles strung along the twelve edges of a breathing
//! cube.

use crate::buffers::AttributeBuffers;
use crate::config::GenerationConfig;
use crate::mesh::EdgeMesh;
use crate::sweep::edge_sweep;
use glam::Vec3;
use std::f32::consts::PI;

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;

    let mesh = EdgeMesh::cube();
    let scale = 200.0 * spread;
    let breathe = 1.0 + (time * 2.0).sin() * 0.1;

    for s in edge_sweep(count, mesh.edge_count()) {
        let (start, end) = mesh.edges[s.segment];
        let e = s.segment as f32;
        let point = start.lerp(end, s.t) * scale;
        let noise = (s.t * 10.0 + time + e).sin() * 5.0 * complexity;

        let color = if config.black_white {
            Vec3::ONE
        } else {
            let lit = |channel: usize| if s.segment % 3 == channel { 1.0 } else { 0.2 };
            Vec3::new(lit(0), lit(1), lit(2))
        };

        out.set(
            s.index,
            point * breathe + Vec3::splat(noise),
            color,
            config.size * (0.8 + (s.t * PI).sin() * 0.4),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_particle_at_corner() {
        // t = 0 on edge 0, time 0: breathe 1, noise sin(0) = 0
        let out = generate(120, &GenerationConfig::new());
        assert_eq!(out.positions[0], Vec3::splat(-200.0));
    }

    #[test]
    fn test_edge_colors_rotate() {
        let out = generate(120, &GenerationConfig::new());
        assert_eq!(out.colors[0], Vec3::new(1.0, 0.2, 0.2));
        assert_eq!(out.colors[10], Vec3::new(0.2, 1.0, 0.2));
        assert_eq!(out.colors[20], Vec3::new(0.2, 0.2, 1.0));
    }

    #[test]
    fn test_fewer_particles_than_edges() {
        let out = generate(11, &GenerationConfig::new());
        assert!(out.sizes.iter().all(|&s| s == 0.0));
    }
}
