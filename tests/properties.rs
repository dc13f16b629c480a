//! Property tests over random configs and counts.

use opart::helpers::{map_range, spherical_to_cartesian};
use opart::prelude::*;
use proptest::prelude::*;

fn any_config() -> impl Strategy<Value = GenerationConfig> {
    (-100.0f32..100.0, 0.1f32..3.0, 0.1f32..4.0, 0.0f32..8.0, any::<bool>()).prop_map(
        |(time, spread, complexity, size, black_white)| GenerationConfig {
            time,
            spread,
            complexity,
            size,
            black_white,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_pattern_fills_exact_lengths(
        index in 0usize..22,
        count in 0usize..2500,
        config in any_config(),
    ) {
        let registry = PatternRegistry::builtin();
        let id = registry.list_identifiers()[index];
        let out = registry.generate(id, count, &config).unwrap();
        prop_assert_eq!(out.positions.len(), count);
        prop_assert_eq!(out.colors.len(), count);
        prop_assert_eq!(out.sizes.len(), count);
    }

    #[test]
    fn every_pattern_stays_in_color_domain(
        index in 0usize..22,
        count in 1usize..2500,
        config in any_config(),
    ) {
        let registry = PatternRegistry::builtin();
        let id = registry.list_identifiers()[index];
        let out = registry.generate(id, count, &config).unwrap();
        for c in &out.colors {
            prop_assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0, "{} {:?}", id, c);
            if config.black_white {
                prop_assert!(c.x == c.y && c.y == c.z, "{} {:?}", id, c);
            }
        }
        prop_assert!(out.positions_flat().iter().all(|v| v.is_finite()), "{}", id);
    }

    #[test]
    fn map_range_hits_endpoints(a in -1e3f32..1e3, width in 1.0f32..1e3, lo in -10.0f32..10.0, hi in -10.0f32..10.0) {
        let start = map_range(a, a, a + width, lo, hi).unwrap();
        let end = map_range(a + width, a, a + width, lo, hi).unwrap();
        prop_assert!((start - lo).abs() < 1e-3);
        prop_assert!((end - hi).abs() < 1e-2);
    }

    #[test]
    fn spherical_preserves_radius(r in 0.0f32..1000.0, theta in 0.0f32..std::f32::consts::PI, phi in -6.3f32..6.3) {
        let p = spherical_to_cartesian(r, theta, phi);
        prop_assert!((p.length() - r).abs() <= r * 1e-4 + 1e-4);
    }
}
