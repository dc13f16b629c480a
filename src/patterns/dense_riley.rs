//! Dense Riley Waves: tightly spaced lines with three wave octaves, grouped
//! in pairs for high contrast.

use crate::buffers::AttributeBuffers;
use crate::color::gray;
use crate::config::GenerationConfig;
use crate::sweep::segments;
use glam::Vec3;
use std::f32::consts::TAU;

const LINE_SPACING: f32 = 8.0;

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;

    let lines = (600.0 * spread / LINE_SPACING).floor() as usize;
    if lines == 0 {
        return out;
    }
    let freq1 = 0.015 * complexity;
    let freq2 = 0.008 * complexity;
    let freq3 = 0.003 * complexity;

    for s in segments(0, count, lines, count / lines) {
        let line = s.segment as f32;
        let y = (line / lines as f32 - 0.5) * 600.0 * spread;
        let x = (s.t - 0.5) * 900.0 * spread;

        let z = (x * freq1 + time * 2.0 + line * 0.2).sin() * 30.0
            + (x * freq2 - time + line * 0.15).sin() * 20.0
            + (x * freq3 + time * 0.5).sin() * 40.0;

        let paired = (s.segment / 2) % 2 == 1;
        let wave_t = (z + 90.0) / 180.0;
        let shimmer = (wave_t * TAU).sin().abs();
        let color = match (config.black_white, paired) {
            (true, _) => gray(if paired { 1.0 } else { 0.0 }),
            (false, true) => Vec3::new(wave_t, shimmer, 1.0 - wave_t),
            (false, false) => Vec3::new(1.0 - wave_t, shimmer, wave_t),
        };

        out.set(s.index, Vec3::new(x, y, z), color, config.size * 1.5);
    }

    out
}
