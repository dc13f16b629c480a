//! Small stateless math utilities shared by the generators and the host.

use crate::error::PatternError;
use glam::Vec3;
use std::f32::consts::PI;

/// Linearly remap `value` from `[start1, stop1]` to `[start2, stop2]`.
///
/// Fails with [`PatternError::Domain`] when the source range has zero width.
pub fn map_range(
    value: f32,
    start1: f32,
    stop1: f32,
    start2: f32,
    stop2: f32,
) -> Result<f32, PatternError> {
    let width = stop1 - start1;
    if width == 0.0 {
        return Err(PatternError::Domain("map_range: zero-width source range"));
    }
    Ok(start2 + (stop2 - start2) * ((value - start1) / width))
}

/// Clamp `value` into `[min, max]`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Sine ease-in-out over `t` in `[0, 1]`.
#[inline]
pub fn ease_in_out_sine(t: f32) -> f32 {
    -((PI * t).cos() - 1.0) / 2.0
}

/// Cubic ease-in-out over `t` in `[0, 1]`.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

/// Spherical to Cartesian, with `theta` the polar angle from +Y and `phi`
/// the azimuth in the XZ plane.
#[inline]
pub fn spherical_to_cartesian(radius: f32, theta: f32, phi: f32) -> Vec3 {
    Vec3::new(
        radius * theta.sin() * phi.cos(),
        radius * theta.cos(),
        radius * theta.sin() * phi.sin(),
    )
}

/// Euclidean distance between two points.
#[inline]
pub fn distance_3d(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range() {
        let v = map_range(5.0, 0.0, 10.0, 0.0, 100.0).unwrap();
        assert!((v - 50.0).abs() < 1e-5);

        let inverted = map_range(0.25, 0.0, 1.0, 1.0, 0.0).unwrap();
        assert!((inverted - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_map_range_zero_width() {
        assert!(matches!(
            map_range(1.0, 2.0, 2.0, 0.0, 1.0),
            Err(PatternError::Domain(_))
        ));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-2.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.3, 0.0, 1.0), 0.3);
    }

    #[test]
    fn test_easing_endpoints() {
        for ease in [ease_in_out_sine, ease_in_out_cubic] {
            assert!(ease(0.0).abs() < 1e-6);
            assert!((ease(0.5) - 0.5).abs() < 1e-6);
            assert!((ease(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_spherical_poles() {
        let north = spherical_to_cartesian(2.0, 0.0, 1.234);
        assert!((north - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);

        let equator = spherical_to_cartesian(1.0, PI / 2.0, 0.0);
        assert!((equator - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_distance_3d() {
        let d = distance_3d(Vec3::ZERO, Vec3::new(3.0, 4.0, 12.0));
        assert!((d - 13.0).abs() < 1e-5);
    }
}
