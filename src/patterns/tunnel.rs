//! Tunnel Vision: fifty rings scrolling toward the viewer.

use crate::buffers::AttributeBuffers;
use crate::color::{band, gray, hue_cycle, wrap01};
use crate::config::GenerationConfig;
use crate::sweep::segments;
use glam::Vec3;
use std::f32::consts::TAU;

const RINGS: usize = 50;

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;
    let scroll = (time * 100.0) % 800.0;

    for sample in segments(0, count, RINGS, count / RINGS) {
        let ring = sample.segment as f32;
        let z = (ring / RINGS as f32 - 0.5) * 800.0 * spread - scroll;
        let depth_fade = 1.0 - (z / 400.0).abs();
        let radius = 150.0 * depth_fade;

        let angle = sample.t * TAU + ring * 0.5 + time * complexity;
        let r = radius + (angle * 8.0 * complexity + time * 3.0).sin() * 10.0;

        let color = if config.black_white {
            gray(band(ring + time * 2.0))
        } else {
            hue_cycle(wrap01(ring / RINGS as f32 + time * 0.1))
        };

        out.set(
            sample.index,
            Vec3::new(angle.cos() * r, angle.sin() * r, z),
            color,
            config.size * depth_fade * 2.0,
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_slots_untouched() {
        // 120 / 50 rings -> 2 per ring, 20 slots left at zero
        let out = generate(120, &GenerationConfig::new());
        assert!(out.sizes[..100].iter().any(|&s| s > 0.0));
        assert!(out.sizes[100..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_rings_share_depth() {
        let out = generate(500, &GenerationConfig::new());
        let z0 = out.positions[0].z;
        assert!(out.positions[..10].iter().all(|p| p.z == z0));
        assert!(out.positions[10].z > z0);
    }
}
