//! Per-frame particle attribute buffers.

use glam::Vec3;

/// The three parallel arrays describing every particle of one frame.
///
/// Index `i` of `positions`, `colors` and `sizes` all describe the same
/// particle. Buffers start zeroed (origin, black, size 0); generators that
/// run out of structure before `count` leave the tail untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeBuffers {
    /// World-space positions.
    pub positions: Vec<Vec3>,
    /// RGB colors, each channel in `[0, 1]`.
    pub colors: Vec<Vec3>,
    /// Non-negative point sizes.
    pub sizes: Vec<f32>,
}

impl AttributeBuffers {
    /// Allocate zeroed buffers for `count` particles.
    pub fn zeroed(count: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; count],
            colors: vec![Vec3::ZERO; count],
            sizes: vec![0.0; count],
        }
    }

    /// Number of particles (the length of every buffer).
    #[inline]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// True for a zero-particle frame.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Write one particle.
    ///
    /// Color channels are clamped to `[0, 1]` and size to `>= 0`. Clamping
    /// is per channel, so a gray input stays gray.
    #[inline]
    pub fn set(&mut self, index: usize, position: Vec3, color: Vec3, size: f32) {
        self.positions[index] = position;
        self.colors[index] = color.clamp(Vec3::ZERO, Vec3::ONE);
        self.sizes[index] = size.max(0.0);
    }

    /// Positions as a flat `[x0, y0, z0, x1, ...]` slice of length `3 * len`.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors as a flat `[r0, g0, b0, r1, ...]` slice of length `3 * len`.
    pub fn colors_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Largest distance of any particle from the origin.
    pub fn max_extent(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| p.length())
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_lengths() {
        let buffers = AttributeBuffers::zeroed(7);
        assert_eq!(buffers.len(), 7);
        assert_eq!(buffers.positions_flat().len(), 21);
        assert_eq!(buffers.colors_flat().len(), 21);
        assert!(buffers.sizes.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_set_clamps_color_and_size() {
        let mut buffers = AttributeBuffers::zeroed(1);
        buffers.set(0, Vec3::ONE, Vec3::new(1.5, -0.2, 0.5), -3.0);
        assert_eq!(buffers.colors[0], Vec3::new(1.0, 0.0, 0.5));
        assert_eq!(buffers.sizes[0], 0.0);
    }

    #[test]
    fn test_flat_layout() {
        let mut buffers = AttributeBuffers::zeroed(2);
        buffers.set(1, Vec3::new(1.0, 2.0, 3.0), Vec3::splat(0.5), 1.0);
        assert_eq!(&buffers.positions_flat()[3..6], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_empty() {
        let buffers = AttributeBuffers::zeroed(0);
        assert!(buffers.is_empty());
        assert_eq!(buffers.max_extent(), 0.0);
    }
}
