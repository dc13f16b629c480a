//! Radial Burst: rays fanning out from the origin with a slight spiral.

use crate::buffers::AttributeBuffers;
use crate::color::gray;
use crate::config::GenerationConfig;
use crate::sweep::segments;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;

    let rays = (60.0 * complexity).floor() as usize;
    if rays == 0 {
        return out;
    }
    let max_radius = 500.0 * spread;

    for sample in segments(0, count, rays, count / rays) {
        let t = sample.t;
        let base_angle = (sample.segment as f32 / rays as f32) * TAU;
        let angle = base_angle + time * 0.3 + t * 0.5;
        let radius = t * max_radius;

        let position = Vec3::new(
            angle.cos() * radius,
            angle.sin() * radius,
            (t * TAU + time).sin() * 20.0,
        );

        let odd = sample.segment % 2 == 1;
        let color = match (config.black_white, odd) {
            (true, _) => gray(if odd { 1.0 } else { 0.0 }),
            (false, true) => Vec3::new(t, (t * PI).sin(), 1.0 - t),
            (false, false) => Vec3::new(1.0 - t, (t * PI).sin(), t),
        };

        let density = (t * PI * 3.0 + time).sin() * 0.5 + 1.0;
        out.set(sample.index, position, color, config.size * density);
    }

    out
}
