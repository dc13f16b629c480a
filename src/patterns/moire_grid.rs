//! Moiré Grid: two line grids rotating against each other. Half the budget
//! draws vertical lines, the other half horizontal ones.

use crate::buffers::AttributeBuffers;
use crate::color::gray;
use crate::config::GenerationConfig;
use crate::sweep::segments;
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;

    let half = count / 2;
    let extent = 600.0 * spread;
    let lines = (extent / (20.0 * complexity)).floor() as usize;
    if lines == 0 {
        return out;
    }
    let per_line = half / lines;
    let line_offset = |line: usize| (line as f32 / lines as f32 - 0.5) * extent;

    let first = Vec2::from_angle(time * 0.3);
    let first_color = if config.black_white { gray(1.0) } else { Vec3::new(0.8, 0.2, 0.3) };
    for s in segments(0, half, lines, per_line) {
        let p = first.rotate(Vec2::new(line_offset(s.segment), (s.t - 0.5) * extent));
        out.set(s.index, p.extend(0.0), first_color, config.size);
    }

    let second = Vec2::from_angle(-time * 0.2 + PI / 6.0);
    let second_color = if config.black_white { gray(1.0) } else { Vec3::new(0.3, 0.7, 0.9) };
    for s in segments(lines * per_line, count, lines, per_line) {
        let p = second.rotate(Vec2::new((s.t - 0.5) * extent, line_offset(s.segment)));
        out.set(s.index, p.extend(0.0), second_color, config.size);
    }

    out
}
