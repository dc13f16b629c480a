//! Properties every registered pattern must satisfy.

use opart::prelude::*;

fn configs() -> Vec<GenerationConfig> {
    vec![
        GenerationConfig::new(),
        GenerationConfig::new().with_time(3.7).with_spread(1.6).with_complexity(2.4),
        GenerationConfig::new().with_time(-12.0).with_spread(0.5).with_complexity(0.5).with_size(5.0),
        GenerationConfig::new().with_time(250.0).with_black_white(true),
    ]
}

#[test]
fn test_buffer_lengths() {
    let registry = PatternRegistry::builtin();
    for pattern in registry.iter() {
        for count in [0usize, 1, 7, 1234] {
            let out = pattern.generate(count, &GenerationConfig::new()).unwrap();
            assert_eq!(out.positions_flat().len(), 3 * count, "{}", pattern.id);
            assert_eq!(out.colors_flat().len(), 3 * count, "{}", pattern.id);
            assert_eq!(out.sizes.len(), count, "{}", pattern.id);
        }
    }
}

#[test]
fn test_zero_count_is_empty() {
    let registry = PatternRegistry::builtin();
    for pattern in registry.iter() {
        let out = pattern.generate(0usize, &GenerationConfig::new()).unwrap();
        assert!(out.is_empty(), "{}", pattern.id);
    }
}

#[test]
fn test_deterministic() {
    let registry = PatternRegistry::builtin();
    for pattern in registry.iter() {
        for config in configs() {
            let a = pattern.generate(2000usize, &config).unwrap();
            let b = pattern.generate(2000usize, &config).unwrap();
            assert_eq!(a, b, "{}", pattern.id);
        }
    }
}

#[test]
fn test_colors_in_unit_range() {
    let registry = PatternRegistry::builtin();
    for pattern in registry.iter() {
        for config in configs() {
            let out = pattern.generate(3000usize, &config).unwrap();
            for &c in out.colors_flat() {
                assert!((-1e-6..=1.0 + 1e-6).contains(&c), "{}: {}", pattern.id, c);
            }
            assert!(out.sizes.iter().all(|&s| s >= 0.0), "{}", pattern.id);
        }
    }
}

#[test]
fn test_monochrome_is_gray() {
    let registry = PatternRegistry::builtin();
    let config = GenerationConfig::new().with_time(1.3).with_black_white(true);
    for pattern in registry.iter() {
        let out = pattern.generate(3000usize, &config).unwrap();
        for c in &out.colors {
            assert!(c.x == c.y && c.y == c.z, "{}: {:?}", pattern.id, c);
        }
    }
}

#[test]
fn test_positions_finite() {
    let registry = PatternRegistry::builtin();
    for pattern in registry.iter() {
        for config in configs() {
            let out = pattern.generate(3000usize, &config).unwrap();
            assert!(out.positions_flat().iter().all(|v| v.is_finite()), "{}", pattern.id);
        }
    }
}

#[test]
fn test_spread_grows_concentric_rings() {
    let registry = PatternRegistry::builtin();
    let small = registry
        .generate("concentricRings", 60_000usize, &GenerationConfig::new().with_spread(1.0))
        .unwrap();
    let large = registry
        .generate("concentricRings", 60_000usize, &GenerationConfig::new().with_spread(2.0))
        .unwrap();
    assert!(large.max_extent() > small.max_extent());
}

#[test]
fn test_spiral_scenario() {
    let registry = PatternRegistry::builtin();
    let out = registry.generate("spiral", 100usize, &GenerationConfig::new()).unwrap();

    assert!((out.positions[0] - Vec3::new(0.0, -250.0, 0.0)).length() < 1e-3);

    let last = out.positions[99];
    assert!((last.y - 245.0).abs() < 1e-2);
    let radius = (last.x * last.x + last.z * last.z).sqrt();
    assert!(radius > 280.0 && radius < 300.0, "radius {}", radius);
}

#[test]
fn test_spiral_continuous_in_time() {
    let registry = PatternRegistry::builtin();
    let a = registry
        .generate("spiral", 500usize, &GenerationConfig::new().with_time(2.0))
        .unwrap();
    let b = registry
        .generate("spiral", 500usize, &GenerationConfig::new().with_time(2.0001))
        .unwrap();
    for (p, q) in a.positions.iter().zip(&b.positions) {
        assert!(p.distance(*q) < 0.1);
    }
}

#[test]
fn test_cube_scenario() {
    let registry = PatternRegistry::builtin();
    let out = registry
        .generate("particleCube", 120usize, &GenerationConfig::new().with_spread(1.5))
        .unwrap();
    assert!((out.positions[0] - Vec3::splat(-300.0)).length() < 1e-3);
}

#[test]
fn test_registry_order_and_names() {
    let registry = PatternRegistry::builtin();
    assert_eq!(
        registry.list_identifiers(),
        vec![
            "concentricRings",
            "denseRiley",
            "radialBurst",
            "particleCube",
            "particlePyramid",
            "particleOctahedron",
            "particleIcosahedron",
            "rileyLines",
            "warpedGrid",
            "moireGrid",
            "pulseRings",
            "spiral",
            "wave",
            "ripple",
            "liquid",
            "cymatics",
            "fabric",
            "torus",
            "sphere",
            "tunnel",
            "moire",
            "tornado",
        ]
    );
    assert_eq!(registry.get("moireGrid").unwrap().name, "Moiré Grid");
    assert_eq!(registry.get("moire").unwrap().name, "3D Moiré");
}

#[test]
fn test_unknown_pattern() {
    let registry = PatternRegistry::builtin();
    let err = registry
        .generate("nope", 10usize, &GenerationConfig::new())
        .unwrap_err();
    assert_eq!(err, PatternError::UnknownPattern("nope".into()));
}

#[test]
fn test_invalid_config_rejected_before_generation() {
    let registry = PatternRegistry::builtin();
    for bad in [
        GenerationConfig::new().with_spread(0.0),
        GenerationConfig::new().with_complexity(-1.0),
        GenerationConfig::new().with_size(-1.0),
        GenerationConfig::new().with_time(f32::NAN),
    ] {
        assert!(matches!(
            registry.generate("wave", 10usize, &bad),
            Err(PatternError::InvalidConfig { .. })
        ));
    }
}

#[test]
fn test_invalid_counts() {
    assert!(matches!(ParticleCount::try_from(-1i64), Err(PatternError::InvalidCount(_))));
    assert!(matches!(ParticleCount::try_from(2.5f64), Err(PatternError::InvalidCount(_))));
    assert!(matches!(ParticleCount::try_from(f64::NAN), Err(PatternError::InvalidCount(_))));
    assert_eq!(ParticleCount::try_from(300.0f64).unwrap().get(), 300);
}
