//! The built-in pattern generators.
//!
//! Each submodule exposes one `generate(count, config)` function. They are
//! pure: the same count and config always produce bit-identical buffers,
//! and nothing here logs or touches global state.
//!
//! Generators are plain function values. [`PatternDescriptor`] pairs one
//! with its identifier and display name; [`BUILTIN`] lists all of them in
//! registration order.

use crate::buffers::AttributeBuffers;
use crate::config::{GenerationConfig, ParticleCount};
use crate::error::PatternError;
use std::fmt;

pub mod concentric_rings;
pub mod cymatics;
pub mod dense_riley;
pub mod fabric;
pub mod liquid;
pub mod moire;
pub mod moire_grid;
pub mod particle_cube;
pub mod particle_icosahedron;
pub mod particle_octahedron;
pub mod particle_pyramid;
pub mod pulse_rings;
pub mod radial_burst;
pub mod riley_lines;
pub mod ripple;
pub mod sphere;
pub mod spiral;
pub mod tornado;
pub mod torus;
pub mod tunnel;
pub mod warped_grid;
pub mod wave;

/// A pattern generator: particle count and config in, one frame out.
///
/// Callers must pass a validated config; use
/// [`PatternDescriptor::generate`] to validate and dispatch in one step.
pub type Generator = fn(usize, &GenerationConfig) -> AttributeBuffers;

/// A registered pattern.
#[derive(Clone, Copy)]
pub struct PatternDescriptor {
    /// Stable identifier, e.g. `"concentricRings"`.
    pub id: &'static str,
    /// Human-readable name, e.g. `"Concentric Rings"`.
    pub name: &'static str,
    /// The generator function.
    pub generator: Generator,
}

impl PatternDescriptor {
    pub const fn new(id: &'static str, name: &'static str, generator: Generator) -> Self {
        Self { id, name, generator }
    }

    /// Validate `config` and run the generator.
    ///
    /// Nothing is allocated when validation fails.
    pub fn generate(
        &self,
        count: impl Into<ParticleCount>,
        config: &GenerationConfig,
    ) -> Result<AttributeBuffers, PatternError> {
        config.validate()?;
        Ok((self.generator)(count.into().get(), config))
    }
}

impl fmt::Debug for PatternDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Every built-in pattern, in registration order.
pub const BUILTIN: [PatternDescriptor; 22] = [
    PatternDescriptor::new("concentricRings", "Concentric Rings", concentric_rings::generate),
    PatternDescriptor::new("denseRiley", "Dense Riley Waves", dense_riley::generate),
    PatternDescriptor::new("radialBurst", "Radial Burst", radial_burst::generate),
    PatternDescriptor::new("particleCube", "Particle Cube", particle_cube::generate),
    PatternDescriptor::new("particlePyramid", "Particle Pyramid", particle_pyramid::generate),
    PatternDescriptor::new("particleOctahedron", "Particle Octahedron", particle_octahedron::generate),
    PatternDescriptor::new("particleIcosahedron", "Particle Icosahedron", particle_icosahedron::generate),
    PatternDescriptor::new("rileyLines", "Riley Lines", riley_lines::generate),
    PatternDescriptor::new("warpedGrid", "Warped Grid", warped_grid::generate),
    PatternDescriptor::new("moireGrid", "Moiré Grid", moire_grid::generate),
    PatternDescriptor::new("pulseRings", "Pulse Rings", pulse_rings::generate),
    PatternDescriptor::new("spiral", "Spiral Vortex", spiral::generate),
    PatternDescriptor::new("wave", "Wave Field", wave::generate),
    PatternDescriptor::new("ripple", "Ripple Pool", ripple::generate),
    PatternDescriptor::new("liquid", "Liquid Metal", liquid::generate),
    PatternDescriptor::new("cymatics", "Cymatics", cymatics::generate),
    PatternDescriptor::new("fabric", "Flowing Fabric", fabric::generate),
    PatternDescriptor::new("torus", "Torus Knot", torus::generate),
    PatternDescriptor::new("sphere", "Sphere Burst", sphere::generate),
    PatternDescriptor::new("tunnel", "Tunnel Vision", tunnel::generate),
    PatternDescriptor::new("moire", "3D Moiré", moire::generate),
    PatternDescriptor::new("tornado", "Tornado", tornado::generate),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_unique() {
        for (i, a) in BUILTIN.iter().enumerate() {
            for b in &BUILTIN[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_descriptor_rejects_invalid_config() {
        let config = GenerationConfig::new().with_complexity(-1.0);
        assert!(BUILTIN[0].generate(100usize, &config).is_err());
    }

    #[test]
    fn test_descriptor_debug_omits_fn() {
        let debug = format!("{:?}", BUILTIN[11]);
        assert!(debug.contains("spiral"));
        assert!(debug.contains("Spiral Vortex"));
    }
}
