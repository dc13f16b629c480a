//! Sphere Burst: a Fibonacci sphere with a pulsing, noisy radius.
//!
//! The golden-angle azimuth grows without bound with the particle index,
//! so it is accumulated in `f64` and only reduced to `f32` after the
//! trigonometry.

use crate::buffers::AttributeBuffers;
use crate::color::{band, gray, wave01};
use crate::config::GenerationConfig;
use crate::helpers::spherical_to_cartesian;
use crate::sweep::parametric;
use glam::Vec3;
use std::f32::consts::PI;

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;
    let golden_angle = std::f64::consts::PI * (1.0 + 5.0_f64.sqrt());

    for (i, t) in parametric(count) {
        let phi = (1.0 - 2.0 * t).acos();
        let theta = golden_angle * i as f64;
        // sin/cos of `theta * scale + offset`, evaluated in f64
        let sin_at = |scale: f32, offset: f32| (theta * scale as f64 + offset as f64).sin() as f32;
        let cos_at = |scale: f32, offset: f32| (theta * scale as f64 + offset as f64).cos() as f32;

        let pulse = (time * 2.0 + t * PI * complexity).sin() * 0.3 + 1.0;
        let radius = 200.0 * spread * pulse;
        let noise = sin_at(complexity * 2.0, time) * (phi * complexity * 2.0 - time).cos() * 20.0;

        let azimuth = theta.rem_euclid(std::f64::consts::TAU) as f32;
        let position = spherical_to_cartesian(radius + noise, phi, azimuth);

        let color = if config.black_white {
            gray(band(phi * 10.0 * complexity))
        } else {
            Vec3::new(
                wave01(phi * complexity * 2.0 + time),
                cos_at(complexity, time * 1.2) * 0.5 + 0.5,
                sin_at(complexity * 0.5, -time * 0.8) * 0.5 + 0.5,
            )
        };

        out.set(i, position, color, config.size * pulse);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_lie_near_shell() {
        let config = GenerationConfig::new().with_time(0.0);
        let out = generate(2000, &config);
        // radius in [140, 260] from the pulse, +/- 20 noise
        for p in &out.positions {
            let r = p.length();
            assert!(r >= 119.0 && r <= 281.0, "radius {}", r);
        }
    }

    #[test]
    fn test_first_particle_at_north_pole() {
        let out = generate(10, &GenerationConfig::new());
        let p = out.positions[0];
        assert!(p.x.abs() < 1e-3 && p.z.abs() < 1e-3);
        assert!(p.y > 0.0);
    }
}
