//! Particle Pyramid: a square pyramid pulsing along each edge.

use crate::buffers::AttributeBuffers;
use crate::config::GenerationConfig;
use crate::mesh::EdgeMesh;
use crate::sweep::edge_sweep;
use glam::Vec3;
use std::f32::consts::TAU;

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, .. } = *config;

    let mesh = EdgeMesh::pyramid();
    let height = 300.0 * spread;
    let scale = Vec3::new(200.0 * spread, height, 200.0 * spread);

    for s in edge_sweep(count, mesh.edge_count()) {
        let (start, end) = mesh.edges[s.segment];
        let point = start.lerp(end, s.t) * scale;
        let pulse = 1.0 + (time * 2.0 + s.t * TAU).sin() * 0.15;

        // Base to apex, measured before the pulse
        let color = if config.black_white {
            Vec3::ONE
        } else {
            let rise = (point.y + height * 0.5) / (height * 1.5);
            Vec3::new(
                1.0 - rise * 0.7,
                rise,
                0.5 + (time + s.segment as f32).sin() * 0.5,
            )
        };

        out.set(s.index, point * pulse, color, config.size * (1.5 - s.t * 0.5));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_sits_below_origin() {
        // edge 0 is a base edge, y = -0.5 * 300 at pulse 1 (time 0, t 0)
        let out = generate(80, &GenerationConfig::new());
        assert!((out.positions[0].y + 150.0).abs() < 1e-3);
        assert_eq!(out.colors[0].y, 0.0);
    }

    #[test]
    fn test_sizes_taper_along_edges() {
        let out = generate(80, &GenerationConfig::new());
        assert!((out.sizes[0] - 3.0).abs() < 1e-6);
        assert!(out.sizes[9] < out.sizes[0]);
    }
}
