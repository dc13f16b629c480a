//! Tornado: a funnel whose radius and angular speed grow away from the
//! waist.

use crate::buffers::AttributeBuffers;
use crate::color::{band, gray, hue_cycle, wrap01};
use crate::config::GenerationConfig;
use crate::sweep::parametric;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;

    for (i, t) in parametric(count) {
        let y = (t - 0.5) * 600.0 * spread;

        let radius_noise = (t * PI * 10.0 * complexity + time * 3.0).sin() * 20.0;
        let radius = y.abs() * 0.5 + radius_noise;

        // Angular speed doubles at the ends
        let angle_speed = (1.0 + (t - 0.5).abs() * 2.0) * complexity;
        let angle = t * PI * 20.0 * angle_speed + time * 2.0;

        let wobble = (angle * 5.0 + time * 4.0).sin() * 15.0;

        let position = Vec3::new(
            angle.cos() * radius + wobble,
            y,
            angle.sin() * radius + wobble,
        );

        let color = if config.black_white {
            gray(band((angle / PI + time) * 4.0))
        } else {
            hue_cycle(wrap01(angle / TAU + time * 0.2))
        };

        let size = config.size * (0.8 + (t * PI * 8.0 + time).sin() * 0.4);
        out.set(i, position, color, size);
    }

    out
}
