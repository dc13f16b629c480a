//! Wave Field: a radial wave crossed with two planar waves.

use crate::buffers::AttributeBuffers;
use crate::color::gray;
use crate::config::GenerationConfig;
use crate::sweep::grid_sweep;
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;

    for (idx, cell) in grid_sweep(count) {
        let x = cell.u * 600.0 * spread;
        let z = cell.v * 600.0 * spread;

        let dist = Vec2::new(x, z).length();
        let wave1 = (dist * 0.02 * complexity - time * 2.0).sin() * 50.0;
        let wave2 = (x * 0.01 * complexity + time).cos() * 30.0;
        let wave3 = (z * 0.01 * complexity - time * 1.5).sin() * 30.0;
        let y = wave1 + wave2 + wave3;

        // Peak amplitude is 110
        let height = (y + 110.0) / 220.0;
        let color = if config.black_white {
            gray(height)
        } else {
            Vec3::new(height, (height * PI).sin() * 0.8 + 0.2, 1.0 - height)
        };

        out.set(idx, Vec3::new(x, y, z), color, config.size * (0.8 + height * 0.4));
    }

    out
}
