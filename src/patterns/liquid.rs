//! Liquid Metal: three interfering surface waves and an orbiting droplet.

use crate::buffers::AttributeBuffers;
use crate::color::gray;
use crate::config::GenerationConfig;
use crate::helpers::distance_3d;
use crate::sweep::grid_sweep;
use glam::Vec3;

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;

    let droplet_center = Vec3::new(
        (time * 0.7).sin() * 200.0 * spread,
        0.0,
        (time * 0.7).cos() * 200.0 * spread,
    );

    for (idx, cell) in grid_sweep(count) {
        let x = cell.u * 600.0 * spread;
        let z = cell.v * 600.0 * spread;
        let c = complexity;

        let f1 = (x * 0.01 * c + time * 1.5).sin() * (z * 0.01 * c + time).cos();
        let f2 = (x * 0.02 * c - time * 2.0).sin() * (z * 0.015 * c + time * 1.3).sin();
        let f3 = (x * 0.005 * c + z * 0.005 * c - time * 0.8).cos();
        let y = f1 * 40.0 + f2 * 30.0 + f3 * 20.0;

        let dist = distance_3d(Vec3::new(x, 0.0, z), droplet_center);
        let droplet = (dist * 0.05 - time * 5.0).sin() * (-dist * 0.005).exp() * 30.0;

        let height = (y + droplet + 90.0) / 180.0;
        let color = if config.black_white {
            gray(height)
        } else {
            // Chrome
            Vec3::new(height * 0.8 + 0.2, height * 0.9 + 0.1, height)
        };

        out.set(
            idx,
            Vec3::new(x, y + droplet, z),
            color,
            config.size * (0.8 + height * 0.4),
        );
    }

    out
}
