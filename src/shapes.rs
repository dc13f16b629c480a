//! Per-particle sprite shapes.
//!
//! Each particle is drawn as a small sprite. The shape only affects how the
//! sprite is rasterized, never where the particle is.
//!
//! Masks take a point `p` in sprite space, where `(0, 0)` is the sprite
//! center and the sprite spans `[-0.5, 0.5]` on both axes. They return
//! coverage in `[0, 1]`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// Sprite shape for one particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpriteShape {
    /// Disc with a soft rim (default).
    #[default]
    Circle,
    /// Axis-aligned square.
    Square,
    /// Triangle with a flat edge on the left.
    Triangle,
    /// Five-petal flower.
    Flower,
    /// Five-pointed star.
    Star,
    /// Plus sign.
    Cross,
    /// Vertically stretched rhombus.
    Diamond,
    /// Regular hexagon.
    Hexagon,
    /// Thin annulus.
    Ring,
}

impl SpriteShape {
    /// All shapes, ordered by [`SpriteShape::id`].
    pub const ALL: [SpriteShape; 9] = [
        SpriteShape::Circle,
        SpriteShape::Square,
        SpriteShape::Triangle,
        SpriteShape::Flower,
        SpriteShape::Star,
        SpriteShape::Cross,
        SpriteShape::Diamond,
        SpriteShape::Hexagon,
        SpriteShape::Ring,
    ];

    /// Stable numeric id (0-8).
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Shape for a numeric id, `None` when out of range.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Filled coverage at `p`.
    pub fn mask(self, p: Vec2) -> f32 {
        match self {
            SpriteShape::Circle => 1.0 - smoothstep(0.35, 0.45, p.length()),
            SpriteShape::Square => {
                let d = p.abs();
                1.0 - smoothstep(0.30, 0.40, d.x.max(d.y))
            }
            SpriteShape::Triangle => {
                let sector_angle = TAU / 3.0;
                let a = p.y.atan2(p.x) + PI;
                let sector = (a / sector_angle).floor();
                let local = a - sector * sector_angle - sector_angle * 0.5;
                let dist = p.length() * local.cos() / (sector_angle * 0.5).cos();
                1.0 - smoothstep(0.35, 0.45, dist)
            }
            SpriteShape::Flower => {
                let petal = (p.y.atan2(p.x) * 2.5).cos().abs() * 0.25 + 0.25;
                1.0 - smoothstep(petal - 0.02, petal + 0.02, p.length())
            }
            SpriteShape::Star => {
                let sector_angle = TAU / 5.0;
                let a = p.y.atan2(p.x) + PI;
                let sector = ((a + sector_angle * 0.5) / sector_angle).floor();
                let local = a - sector * sector_angle;
                let t = (local / (sector_angle * 0.5)).abs();
                let radius = 0.4 + (0.15 - 0.4) * t;
                1.0 - smoothstep(radius - 0.05, radius + 0.05, p.length())
            }
            SpriteShape::Cross => cross(p),
            SpriteShape::Diamond => {
                let dist = p.x.abs() + (p.y * 1.5).abs();
                1.0 - smoothstep(0.45, 0.55, dist)
            }
            SpriteShape::Hexagon => hexagon(p),
            SpriteShape::Ring => {
                let band = (p.length() - 0.30).abs();
                1.0 - smoothstep(0.05, 0.10, band)
            }
        }
    }

    /// Coverage at `p`, either filled or reduced to an outline band.
    pub fn coverage(self, p: Vec2, filled: bool) -> f32 {
        let fill = self.mask(p);
        if filled {
            fill
        } else {
            outline(fill)
        }
    }
}

/// How shapes are assigned to particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeMode {
    /// Every particle uses the same shape.
    Uniform(SpriteShape),
    /// Each particle draws a shape at random.
    Mixed,
}

impl Default for ShapeMode {
    fn default() -> Self {
        ShapeMode::Uniform(SpriteShape::Circle)
    }
}

impl ShapeMode {
    /// Number of selectable modes: nine uniform shapes plus mixed.
    pub const COUNT: usize = SpriteShape::ALL.len() + 1;

    /// Mode for a selector index: `0..9` are uniform shapes, `9` is mixed.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            i if i < SpriteShape::ALL.len() => Some(ShapeMode::Uniform(SpriteShape::ALL[i])),
            9 => Some(ShapeMode::Mixed),
            _ => None,
        }
    }

    /// Whether assignments must be redrawn every frame.
    pub fn is_mixed(self) -> bool {
        matches!(self, ShapeMode::Mixed)
    }
}

/// One shape per particle.
///
/// `Mixed` draws uniformly from all nine shapes; a seeded `rng` reproduces
/// the same assignment.
pub fn assign_shapes<R: Rng + ?Sized>(count: usize, mode: ShapeMode, rng: &mut R) -> Vec<SpriteShape> {
    match mode {
        ShapeMode::Uniform(shape) => vec![shape; count],
        ShapeMode::Mixed => (0..count)
            .map(|_| SpriteShape::ALL[rng.gen_range(0..SpriteShape::ALL.len())])
            .collect(),
    }
}

/// Hermite step between two edges. Edges may be given in either order.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn cross(p: Vec2) -> f32 {
    const THICKNESS: f32 = 0.15;
    const ARM: f32 = 0.40;

    let d = p.abs();
    let horizontal = d.y < THICKNESS && d.x < ARM;
    let vertical = d.x < THICKNESS && d.y < ARM;
    if !horizontal && !vertical {
        return 0.0;
    }

    let to_edge = match (horizontal, vertical) {
        (true, false) => (THICKNESS - d.y).min(ARM - d.x),
        (false, true) => (THICKNESS - d.x).min(ARM - d.y),
        _ => (THICKNESS - d.y)
            .min(THICKNESS - d.x)
            .min(ARM - d.x)
            .min(ARM - d.y),
    };
    1.0 - smoothstep(0.0, 0.05, -to_edge)
}

fn hexagon(p: Vec2) -> f32 {
    let k = Vec2::new(-0.866_025_4, 0.5);
    let half_side = 0.577_350_27 * 0.5;

    let mut q = p.abs();
    q -= 2.0 * k.dot(q).min(0.0) * k;
    q -= Vec2::new(q.x.clamp(-half_side, half_side), 0.0);
    let dist = q.length() + 0.15;
    1.0 - smoothstep(0.35, 0.45, dist)
}

/// Keep only the rim band of a filled mask.
fn outline(fill: f32) -> f32 {
    const INNER: f32 = 0.4;
    const OUTER: f32 = 0.05;

    if fill < 0.01 {
        0.0
    } else if fill > INNER {
        smoothstep(1.0, INNER, fill)
    } else if fill > OUTER {
        1.0
    } else {
        smoothstep(0.0, OUTER, fill)
    }
}
