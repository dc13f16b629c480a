//! Spiral Vortex: a widening helix swept bottom to top.

use crate::buffers::AttributeBuffers;
use crate::color::{cos01, gray, wave01};
use crate::config::GenerationConfig;
use crate::sweep::parametric;
use glam::Vec3;
use std::f32::consts::PI;

/// Radius grows linearly with `t` up to `300 * spread`; height runs from
/// `-250 * spread` to `+250 * spread`.
pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;

    for (i, t) in parametric(count) {
        let angle = t * PI * 20.0 * complexity + time;
        let radius = t * 300.0 * spread;
        let height = (t - 0.5) * 500.0 * spread;
        let twist = (t * PI * 4.0 * complexity + time).sin() * 50.0;

        let position = Vec3::new(
            angle.cos() * (radius + twist),
            height,
            angle.sin() * (radius + twist),
        );

        let color = if config.black_white {
            gray(t)
        } else {
            Vec3::new(
                wave01(t * PI * 2.0 + time),
                cos01(t * PI * 3.0 + time * 1.3),
                wave01(t * PI * 5.0 + time * 0.7),
            )
        };

        let size = config.size * (1.0 + (t * PI * 10.0).sin() * 0.5);
        out.set(i, position, color, size);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GenerationConfig {
        GenerationConfig::new().with_time(0.0).with_size(2.0)
    }

    #[test]
    fn test_first_particle_at_bottom_axis() {
        let out = generate(100, &config());
        assert_eq!(out.positions[0], Vec3::new(0.0, -250.0, 0.0));
    }

    #[test]
    fn test_last_particle_near_top_rim() {
        let out = generate(100, &config());
        let p = out.positions[99];
        assert!((p.y - 245.0).abs() < 1e-3);
        let horizontal = (p.x * p.x + p.z * p.z).sqrt();
        assert!(horizontal > 280.0 && horizontal < 300.0, "radius {}", horizontal);
    }

    #[test]
    fn test_spread_scales_height() {
        let out = generate(100, &config().with_spread(2.0));
        assert_eq!(out.positions[0].y, -500.0);
    }

    #[test]
    fn test_small_time_step_moves_little() {
        let a = generate(500, &config().with_time(1.0));
        let b = generate(500, &config().with_time(1.001));
        for (pa, pb) in a.positions.iter().zip(&b.positions) {
            assert!(pa.distance(*pb) < 1.0);
        }
    }

    #[test]
    fn test_monochrome_follows_progress() {
        let out = generate(4, &config().with_black_white(true));
        assert_eq!(out.colors[2], Vec3::splat(0.5));
    }
}
