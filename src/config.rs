//! Per-call generation parameters.
//!
//! A [`GenerationConfig`] and a [`ParticleCount`] are the only inputs a
//! pattern generator ever sees. The host builds both fresh every tick.

use crate::error::PatternError;
use serde::{Deserialize, Serialize};

/// Animation parameters shared by every pattern.
///
/// ```ignore
/// let config = GenerationConfig::default()
///     .with_time(1.5)
///     .with_spread(2.0)
///     .with_black_white(true);
/// config.validate()?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Animation time in seconds.
    pub time: f32,
    /// Global spatial scale multiplier. Must be > 0.
    pub spread: f32,
    /// Frequency/density multiplier for procedural detail. Must be > 0.
    pub complexity: f32,
    /// Base particle size. Must be >= 0.
    pub size: f32,
    /// Grayscale output instead of chromatic coloring.
    pub black_white: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            time: 0.0,
            spread: 1.0,
            complexity: 1.0,
            size: 2.0,
            black_white: false,
        }
    }
}

impl GenerationConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the animation time.
    pub fn with_time(mut self, time: f32) -> Self {
        self.time = time;
        self
    }

    /// Set the spatial spread.
    pub fn with_spread(mut self, spread: f32) -> Self {
        self.spread = spread;
        self
    }

    /// Set the detail complexity.
    pub fn with_complexity(mut self, complexity: f32) -> Self {
        self.complexity = complexity;
        self
    }

    /// Set the base particle size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Enable or disable grayscale output.
    pub fn with_black_white(mut self, black_white: bool) -> Self {
        self.black_white = black_white;
        self
    }

    /// Check every field against its documented domain.
    pub fn validate(&self) -> Result<(), PatternError> {
        if !self.time.is_finite() {
            return Err(PatternError::InvalidConfig {
                field: "time",
                value: self.time,
                expected: "a finite number",
            });
        }
        if !(self.spread.is_finite() && self.spread > 0.0) {
            return Err(PatternError::InvalidConfig {
                field: "spread",
                value: self.spread,
                expected: "a finite number > 0",
            });
        }
        if !(self.complexity.is_finite() && self.complexity > 0.0) {
            return Err(PatternError::InvalidConfig {
                field: "complexity",
                value: self.complexity,
                expected: "a finite number > 0",
            });
        }
        if !(self.size.is_finite() && self.size >= 0.0) {
            return Err(PatternError::InvalidConfig {
                field: "size",
                value: self.size,
                expected: "a finite number >= 0",
            });
        }
        Ok(())
    }
}

/// Number of particles a generator must emit.
///
/// Construction from signed or floating-point sources is checked, so a
/// count that reaches a generator is always a valid buffer length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ParticleCount(usize);

impl ParticleCount {
    /// Wrap an already non-negative count.
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    /// The count as a buffer length.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for ParticleCount {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

impl From<u32> for ParticleCount {
    fn from(count: u32) -> Self {
        Self(count as usize)
    }
}

impl TryFrom<i64> for ParticleCount {
    type Error = PatternError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        usize::try_from(count)
            .map(Self)
            .map_err(|_| PatternError::InvalidCount(count.to_string()))
    }
}

impl TryFrom<f64> for ParticleCount {
    type Error = PatternError;

    fn try_from(count: f64) -> Result<Self, Self::Error> {
        if !count.is_finite() || count < 0.0 || count.fract() != 0.0 || count >= usize::MAX as f64 {
            return Err(PatternError::InvalidCount(count.to_string()));
        }
        Ok(Self(count as usize))
    }
}
