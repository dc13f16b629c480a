//! 3D Moiré: three stacked grids, each rotated a further 60° and spinning
//! with time, so their interference shimmers.

use crate::buffers::AttributeBuffers;
use crate::color::gray;
use crate::config::GenerationConfig;
use crate::sweep::{grid_side, lattice};
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

const LAYERS: usize = 3;

pub fn generate(count: usize, config: &GenerationConfig) -> AttributeBuffers {
    let mut out = AttributeBuffers::zeroed(count);
    let GenerationConfig { time, spread, complexity, .. } = *config;
    let side = grid_side(count / LAYERS);
    let c = complexity;

    // A layer's lattice can hold more than its share; later layers get
    // whatever budget is left.
    let mut idx = 0;
    for layer in 0..LAYERS {
        let z_offset = (layer as f32 - 1.0) * 100.0 * spread;
        let rotation = Vec2::from_angle(layer as f32 * PI / 3.0 + time * c * 0.5);

        for cell in lattice(side) {
            if idx >= count {
                break;
            }
            let flat = Vec2::new(cell.u * 400.0 * spread, cell.v * 400.0 * spread);
            let rot = rotation.rotate(flat);

            let displacement =
                (rot.x * 0.02 * c + time).sin() * (rot.y * 0.02 * c - time).cos() * 20.0;
            let interference = (rot.x * 0.03 * c + time).sin() * (rot.y * 0.03 * c - time).cos();

            let color = if config.black_white {
                gray((interference + 1.0) / 2.0)
            } else {
                Vec3::new(
                    ((interference * PI + time).sin() + 1.0) / 2.0,
                    ((interference * PI + time * 1.5).cos() + 1.0) / 2.0,
                    ((interference * PI * 2.0 - time).sin() + 1.0) / 2.0,
                )
            };

            out.set(
                idx,
                Vec3::new(rot.x, rot.y, z_offset + displacement),
                color,
                config.size * (1.0 + interference.abs() * 0.5),
            );
            idx += 1;
        }
    }

    out
}
