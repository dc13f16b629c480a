//! # opart - Op-Art Particle Patterns
//!
//! Deterministic generators that turn a particle count and a handful of
//! animation parameters into per-frame particle attributes: positions,
//! colors and sizes. A renderer uploads the buffers and draws points.
//!
//! ## Quick Start
//!
//! ```ignore
//! use opart::prelude::*;
//!
//! let registry = PatternRegistry::builtin();
//! let config = GenerationConfig::new()
//!     .with_time(1.5)
//!     .with_spread(1.2)
//!     .with_complexity(2.0);
//!
//! let frame = registry.generate("concentricRings", 20_000usize, &config)?;
//! assert_eq!(frame.positions_flat().len(), 60_000);
//! ```
//!
//! ## Core Concepts
//!
//! ### Generators
//!
//! A generator is a plain function `fn(usize, &GenerationConfig) ->
//! AttributeBuffers`. Generators are pure: the same inputs always give
//! bit-identical output. Every built-in lives in [`patterns`].
//!
//! ### Config
//!
//! [`GenerationConfig`] carries `time`, `spread` (spatial scale),
//! `complexity` (frequency and density), the base particle `size` and a
//! `black_white` flag that forces grayscale output.
//!
//! ### Buffers
//!
//! [`AttributeBuffers`] always has exactly `count` entries per attribute.
//! Generators whose structure runs out before `count` (rings reaching their
//! maximum radius, remainders after dividing among edges) leave the tail
//! zeroed: origin, black, size 0.
//!
//! ### Registry
//!
//! [`PatternRegistry`] maps identifiers to [`PatternDescriptor`]s in
//! registration order. [`PatternRegistry::builtin`] holds all 22 patterns.
//!
//! ## Host
//!
//! The [`host`] module is an optional driver for interactive front ends:
//! an animation clock, eased view rotation, randomization and sprite shape
//! assignment. [`snapshot`] renders a frame to PNG on the CPU.

pub mod buffers;
pub mod color;
pub mod config;
pub mod error;
pub mod helpers;
pub mod host;
pub mod mesh;
pub mod patterns;
pub mod registry;
pub mod shapes;
pub mod snapshot;
pub mod sweep;

pub use buffers::AttributeBuffers;
pub use config::{GenerationConfig, ParticleCount};
pub use error::{PatternError, SnapshotError};
pub use glam::{Vec2, Vec3};
pub use patterns::{Generator, PatternDescriptor};
pub use registry::{DuplicatePolicy, PatternRegistry};
pub use shapes::{ShapeMode, SpriteShape};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use opart::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffers::AttributeBuffers;
    pub use crate::config::{GenerationConfig, ParticleCount};
    pub use crate::error::{PatternError, SnapshotError};
    pub use crate::helpers::{
        clamp, distance_3d, ease_in_out_cubic, ease_in_out_sine, map_range, spherical_to_cartesian,
    };
    pub use crate::host::{AnimationClock, HostSettings, ViewState, Visualizer};
    pub use crate::patterns::{Generator, PatternDescriptor};
    pub use crate::registry::{DuplicatePolicy, PatternRegistry};
    pub use crate::shapes::{ShapeMode, SpriteShape};
    pub use crate::{Vec2, Vec3};
}
