//! Color policies shared by the generators.
//!
//! Generators map a scalar feature to color either by grayscale
//! replication ([`gray`]) when the config's `black_white` flag is set, or
//! through phase-shifted sinusoids ([`hue_cycle`], [`phase_trio`]) and
//! per-pattern blends otherwise.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Same value on all three channels.
#[inline]
pub fn gray(value: f32) -> Vec3 {
    Vec3::splat(value)
}

/// Map `sin(x)` from `[-1, 1]` to `[0, 1]`.
#[inline]
pub fn wave01(x: f32) -> f32 {
    x.sin() * 0.5 + 0.5
}

/// Map `cos(x)` from `[-1, 1]` to `[0, 1]`.
#[inline]
pub fn cos01(x: f32) -> f32 {
    x.cos() * 0.5 + 0.5
}

/// Smooth rainbow for a hue in `[0, 1)`.
///
/// Channels are sinusoids offset by roughly a third of a turn:
/// `sin(2π·h)`, `sin(2π·(h + 0.33))`, `sin(2π·(h + 0.66))`.
#[inline]
pub fn hue_cycle(hue: f32) -> Vec3 {
    Vec3::new(
        wave01(hue * TAU),
        wave01((hue + 0.33) * TAU),
        wave01((hue + 0.66) * TAU),
    )
}

/// Three sinusoids of the same phase `x`, offset by `0`, `0.66π` and `1.33π`.
#[inline]
pub fn phase_trio(x: f32) -> Vec3 {
    Vec3::new(wave01(x), wave01(x + PI * 0.66), wave01(x + PI * 1.33))
}

/// Fractional part in `[0, 1)` that stays positive for negative input.
#[inline]
pub fn wrap01(value: f32) -> f32 {
    value.rem_euclid(1.0)
}

/// `1.0` for odd bands, `0.0` for even ones, with `floor` semantics for
/// negative input.
#[inline]
pub fn band(value: f32) -> f32 {
    (value.floor() as i64).rem_euclid(2) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_is_uniform() {
        let c = gray(0.4);
        assert_eq!(c.x, c.y);
        assert_eq!(c.y, c.z);
    }

    #[test]
    fn test_hue_cycle_in_range() {
        for i in 0..100 {
            let c = hue_cycle(i as f32 / 100.0);
            assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
        }
    }

    #[test]
    fn test_hue_cycle_start() {
        let c = hue_cycle(0.0);
        assert!((c.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_wrap01_negative() {
        assert!((wrap01(-0.25) - 0.75).abs() < 1e-6);
        assert!((wrap01(1.25) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_band() {
        assert_eq!(band(0.5), 0.0);
        assert_eq!(band(1.5), 1.0);
        assert_eq!(band(-0.5), 1.0);
        assert_eq!(band(-1.5), 0.0);
    }
}
