//! Flowing Fabric: a cloth sheet in a moving wind, pinned at two corners.

use crate::buffers::AttributeBuffers;
use crate::color::gray;
use crate::config::GenerationConfig;
use crate::helpers::distance_3d;
use crate::sweep::grid_sweep;
use glam::Vec3;

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;
    let c = complexity;
    let half = 300.0 * spread;

    let wind = Vec3::new((time * 0.5).sin() * 100.0, 0.0, (time * 0.7).cos() * 100.0);

    for (idx, cell) in grid_sweep(count) {
        let x = cell.u * 600.0 * spread;
        let z = cell.v * 600.0 * spread;

        let from_wind = distance_3d(Vec3::new(x, 0.0, z), wind);

        let wave1 = (x * 0.015 * c + time * 2.0).sin() * 30.0;
        let wave2 = (z * 0.012 * c - time * 1.7).cos() * 25.0;
        let wave3 = ((x + z) * 0.01 * c + time * 1.5).sin() * 20.0;
        let gust = (from_wind * 0.02 - time * 3.0).sin() * (-from_wind * 0.003).exp() * 40.0;
        let y = wave1 + wave2 + wave3 + gust;

        // Manhattan distance to the nearer pinned corner
        let corner_dist = ((x + half).abs() + (z + half).abs())
            .min((x - half).abs() + (z + half).abs());
        let pin = (1.0 - corner_dist / (600.0 * spread)).max(0.0);

        let height = (y + 115.0) / 230.0;
        let color = if config.black_white {
            gray(height)
        } else {
            Vec3::new(0.3 + height * 0.5, 0.2 + height * 0.6, 0.5 + height * 0.5)
        };

        out.set(
            idx,
            Vec3::new(x, y * (1.0 - pin * 0.8), z),
            color,
            config.size * (0.9 + height * 0.2),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_corner_barely_moves() {
        let config = GenerationConfig::new().with_time(1.7);
        let out = generate(100, &config);
        // First cell sits on the (-half, -half) corner: pin weight 1
        let amplitude = 30.0 + 25.0 + 20.0 + 40.0;
        assert!(out.positions[0].y.abs() <= amplitude * 0.2 + 1e-3);
    }
}
