//! Ripple Pool: interference of four damped point sources.

use crate::buffers::AttributeBuffers;
use crate::color::{cos01, gray, wave01};
use crate::config::GenerationConfig;
use crate::helpers::distance_3d;
use crate::sweep::grid_sweep;
use glam::Vec3;

/// A wave source on the XZ plane with its own phase.
#[derive(Debug, Clone, Copy)]
struct Source {
    position: Vec3,
    phase: f32,
}

fn sources(time: f32, spread: f32) -> [Source; 4] {
    let at = |x: f32, z: f32, rate: f32| Source {
        position: Vec3::new(x * spread, 0.0, z * spread),
        phase: time * rate,
    };
    [
        at(100.0, 100.0, 1.0),
        at(-150.0, -100.0, 1.3),
        at(50.0, -150.0, 0.8),
        at(-100.0, 150.0, 1.1),
    ]
}

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;
    let sources = sources(time, spread);

    for (idx, cell) in grid_sweep(count) {
        let x = cell.u * 600.0 * spread;
        let z = cell.v * 600.0 * spread;
        let surface = Vec3::new(x, 0.0, z);

        let total: f32 = sources
            .iter()
            .map(|s| {
                let dist = distance_3d(surface, s.position);
                (dist * 0.02 * complexity - s.phase * 2.0).sin() * (-dist * 0.001).exp()
            })
            .sum();

        let y = total * 40.0;
        let amplitude = (total + 2.0) / 4.0;

        let color = if config.black_white {
            gray(amplitude)
        } else {
            Vec3::new(
                wave01(total + time),
                cos01(total + time * 1.5),
                wave01(total * 2.0 - time),
            )
        };

        out.set(idx, Vec3::new(x, y, z), color, config.size * (0.8 + amplitude * 0.4));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_stays_within_four_sources() {
        let out = generate(2500, &GenerationConfig::new().with_time(2.0));
        for p in &out.positions {
            assert!(p.y.abs() <= 160.0);
            assert!(p.x.abs() <= 300.0 + 1e-3);
            assert!(p.z.abs() <= 300.0 + 1e-3);
        }
    }

    #[test]
    fn test_time_moves_the_surface() {
        let a = generate(400, &GenerationConfig::new().with_time(0.0));
        let b = generate(400, &GenerationConfig::new().with_time(0.5));
        assert_ne!(a.positions, b.positions);
        assert_eq!(a.positions[7].x, b.positions[7].x);
    }

    #[test]
    fn test_black_white_is_gray() {
        let out = generate(400, &GenerationConfig::new().with_black_white(true));
        assert!(out.colors.iter().all(|c| c.x == c.y && c.y == c.z));
    }
}
