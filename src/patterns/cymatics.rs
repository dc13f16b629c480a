//! Cymatics: standing waves of a vibrating square plate.
//!
//! Height follows the Chladni superposition
//! `sin(n·x)·sin(m·z) + sin(m·x)·sin(n·z)` with mode numbers picked from
//! complexity. Nodal lines (amplitude near zero) get small particles, the
//! antinodes large ones.

use crate::buffers::AttributeBuffers;
use crate::color::{gray, wave01};
use crate::config::GenerationConfig;
use crate::sweep::grid_sweep;
use glam::Vec3;
use std::f32::consts::PI;

/// Mode numbers `(n, m)` of the plate for a given complexity.
pub fn plate_modes(complexity: f32) -> (f32, f32) {
    ((2.0 + complexity).floor(), (2.0 + complexity * 1.3).floor())
}

/// Chladni amplitude at plate coordinates already scaled to `[0, 2π)`.
pub fn chladni(n: f32, m: f32, x: f32, z: f32) -> f32 {
    (n * x).sin() * (m * z).sin() + (m * x).sin() * (n * z).sin()
}

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;
    let (n, m) = plate_modes(complexity);
    let half = 250.0 * spread;
    let vibration = (time * 2.0).sin() * 0.3 + 0.7;

    for (idx, cell) in grid_sweep(count) {
        let x = cell.u * 500.0 * spread;
        let z = cell.v * 500.0 * spread;

        let value = chladni(n, m, (x / half + 1.0) * PI, (z / half + 1.0) * PI);
        let y = value * 60.0 * vibration;

        let amplitude = value.abs();
        let color = if config.black_white {
            gray(amplitude)
        } else {
            Vec3::new(amplitude, wave01(amplitude * PI + time), 1.0 - amplitude)
        };
        let size = config.size * if amplitude > 0.3 { 1.5 } else { 0.5 };

        out.set(idx, Vec3::new(x, y, z), color, size);
    }

    out
}
