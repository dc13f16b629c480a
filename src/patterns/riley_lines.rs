//! Riley Lines: stacked horizontal lines displaced in depth by three
//! waves, after Bridget Riley's wave paintings.

use crate::buffers::AttributeBuffers;
use crate::color::gray;
use crate::config::GenerationConfig;
use crate::sweep::segments;
use glam::Vec3;
use std::f32::consts::PI;

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;

    // Line count is fractional; a partial last line still gets drawn.
    let lines = 30.0 * spread;
    let per_line = (count as f32 / lines).floor() as usize;
    let c = complexity;

    for s in segments(0, count, lines.ceil() as usize, per_line) {
        let line = s.segment as f32;
        let y = (line / lines - 0.5) * 600.0 * spread;
        let x = (s.t - 0.5) * 800.0 * spread;

        let wave1 = (x * 0.01 * c + time + line * 0.3).sin() * 40.0;
        let wave2 = (x * 0.02 * c - time * 0.5 + line * 0.2).sin() * 20.0;
        let wave3 = (x * 0.005 * c + time * 1.5).sin() * 60.0;
        let z = wave1 + wave2 + wave3;

        let odd = s.segment % 2 == 1;
        let amp = (z + 120.0) / 240.0;
        let color = match (config.black_white, odd) {
            (true, _) => gray(if odd { 1.0 } else { 0.0 }),
            (false, true) => Vec3::new(amp, (amp * PI).sin() * 0.8 + 0.2, 1.0 - amp),
            (false, false) => Vec3::new(1.0 - amp, (amp * PI).sin() * 0.8 + 0.2, amp),
        };

        out.set(s.index, Vec3::new(x, y, z), color, config.size * 1.2);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_last_line_is_drawn() {
        // 31.5 lines -> 32 drawn, 20 per line, the last one cut off at 630
        let config = GenerationConfig::new().with_spread(1.05);
        let out = generate(630, &config);
        assert!(out.sizes.iter().all(|&s| s > 0.0));
        assert!((out.positions[620].x + 420.0).abs() < 1e-2);
        assert!(out.positions[629].y > out.positions[619].y + 10.0);
    }

    #[test]
    fn test_lines_stack_vertically() {
        let out = generate(3000, &GenerationConfig::new());
        // 100 per line
        assert!(out.positions[0].y < out.positions[100].y);
        assert_eq!(out.positions[0].y, out.positions[99].y);
    }

    #[test]
    fn test_black_white_alternates_lines() {
        let out = generate(300, &GenerationConfig::new().with_black_white(true));
        assert_eq!(out.colors[0], Vec3::ZERO);
        assert_eq!(out.colors[10], Vec3::ONE);
    }
}
