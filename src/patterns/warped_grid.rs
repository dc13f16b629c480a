//! Warped Grid: a checkerboard bulging into a dome.

use crate::buffers::AttributeBuffers;
use crate::color::gray;
use crate::config::GenerationConfig;
use crate::helpers::clamp;
use crate::sweep::grid_sweep;
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;
    let max_dist = 300.0 * spread;
    let cell_size = 50.0 * complexity;

    for (idx, cell) in grid_sweep(count) {
        let x = cell.u * 600.0 * spread;
        let z = cell.v * 600.0 * spread;

        let dist = Vec2::new(x, z).length();
        let bulge = ((dist / max_dist) * PI * 0.5).sin() * 200.0;
        let warp = (1.0 - clamp(dist / max_dist, 0.0, 1.0)).powi(2) * bulge;
        let pulse = (time * 2.0 + dist * 0.01).sin() * 30.0;
        let y = warp + pulse;

        let cell_x = ((x + max_dist) / cell_size).floor() as i64;
        let cell_z = ((z + max_dist) / cell_size).floor() as i64;
        let dark = (cell_x + cell_z).rem_euclid(2) == 0;

        let hue = (y + 200.0) / 400.0;
        let color = match (config.black_white, dark) {
            (true, true) => gray(0.0),
            (true, false) => gray(1.0),
            (false, true) => Vec3::new(hue, 0.2, 1.0 - hue),
            (false, false) => Vec3::new(1.0 - hue, 0.8, hue),
        };

        out.set(idx, Vec3::new(x, y, z), color, config.size * (0.5 + hue * 0.5));
    }

    out
}
