//! Concentric Rings: densely packed rings whose spacing beats slowly,
//! producing a moiré against the fixed arc step.

use crate::buffers::AttributeBuffers;
use crate::color::{band, gray};
use crate::config::GenerationConfig;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;

    let max_radius = 500.0 * spread;
    let arc_step = 3.0 / complexity;
    let mut idx = 0;
    let mut radius = 10.0_f32;

    while radius < max_radius && idx < count {
        let ring_num = radius / 20.0;
        let spacing = (ring_num * 0.3 * complexity + time * 0.5).sin() * 0.7 + 1.3;

        let in_ring = ((TAU * radius) / arc_step).floor() as usize;
        let ring_color = band(ring_num);
        let gradient_t = radius / max_radius;

        let color = if config.black_white {
            gray(ring_color)
        } else if ring_color > 0.0 {
            Vec3::new(gradient_t, (gradient_t * PI).sin() * 0.5 + 0.5, 1.0 - gradient_t)
        } else {
            Vec3::new(1.0 - gradient_t, (gradient_t * PI).sin() * 0.5 + 0.5, gradient_t)
        };
        let size = config.size * (1.0 + spacing * 0.3);

        for i in 0..in_ring {
            if idx >= count {
                break;
            }
            let angle = (i as f32 / in_ring as f32) * TAU + time * 0.2;
            let position = Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0);
            out.set(idx, position, color, size);
            idx += 1;
        }

        // Far out, f32 steps vanish below the radius' precision
        let next = radius + 8.0 * spacing;
        if next <= radius {
            break;
        }
        radius = next;
    }

    out
}
