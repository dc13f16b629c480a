//! Pulse Rings: rings whose spacing breathes with time and whose depth
//! follows a slow cone-shaped wave.

use crate::buffers::AttributeBuffers;
use crate::color::{gray, hue_cycle, wrap01};
use crate::config::GenerationConfig;
use glam::Vec3;
use std::f32::consts::TAU;

const BASE_SPACING: f32 = 15.0;
const MIN_PER_RING: usize = 10;

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;

    let max_radius = 400.0 * spread;
    let mut idx = 0;
    let mut radius = 0.0_f32;

    while radius < max_radius && idx < count {
        let spacing = (radius * 0.02 * complexity + time).sin() * 0.5 + 1.0;
        radius += BASE_SPACING * spacing;

        let in_ring = ((TAU * radius / 5.0).floor() as usize).max(MIN_PER_RING);
        let z = (radius * 0.01 * complexity - time).sin() * 50.0;

        let odd = (radius / 30.0).floor() as i64 % 2 == 1;
        let color = if config.black_white {
            gray(if odd { 0.0 } else { 1.0 })
        } else {
            hue_cycle(wrap01(radius / max_radius + time * 0.1))
        };

        for i in 0..in_ring {
            if idx >= count {
                break;
            }
            let angle = (i as f32 / in_ring as f32) * TAU + time * 0.5;
            let position = Vec3::new(angle.cos() * radius, angle.sin() * radius, z);
            out.set(idx, position, color, config.size * spacing);
            idx += 1;
        }
    }

    out
}
