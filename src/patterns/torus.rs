//! Torus Knot: a (p, q) knot whose winding numbers grow with complexity.

use crate::buffers::AttributeBuffers;
use crate::color::{gray, hue_cycle, wrap01};
use crate::config::GenerationConfig;
use crate::sweep::parametric;
use glam::Vec3;
use std::f32::consts::TAU;

/// Winding numbers `(p, q)` for a given complexity.
pub fn knot_windings(complexity: f32) -> (f32, f32) {
    (2.0 + complexity.floor(), 3.0 + (complexity * 1.5).floor())
}

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;
    let (p, q) = knot_windings(complexity);
    let tube = 100.0 * spread;

    for (i, progress) in parametric(count) {
        let t = progress * TAU;

        let r = tube + (t * q + time * 2.0).sin() * 20.0;
        let theta = p * t + time * 0.5;
        let phi = q * t;
        let wave = (t * 10.0 * complexity - time * 3.0).sin() * 15.0;

        let position = Vec3::new(
            (r + tube) * theta.cos() + wave,
            (r + tube) * theta.sin(),
            tube * phi.sin() + wave * 0.5,
        );

        let hue = wrap01(progress + time * 0.1);
        let color = if config.black_white { gray(hue) } else { hue_cycle(hue) };

        let size = config.size * (1.0 + (t * 8.0 + time).sin() * 0.3);
        out.set(i, position, color, size);
    }

    out
}
