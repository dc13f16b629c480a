//! CPU snapshot of a single frame, written as PNG.
//!
//! Particles are projected through a perspective camera looking at the
//! origin, drawn as sprites whose pixel size shrinks with depth, and blended
//! additively on black.

use crate::buffers::AttributeBuffers;
use crate::error::SnapshotError;
use crate::helpers::{clamp, map_range};
use crate::host::{ViewState, Visualizer};
use crate::shapes::{smoothstep, SpriteShape};
use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};
use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// Pixel size of a size-1 particle at distance 1.
const POINT_SCALE: f32 = 300.0;
/// Largest image area rendered, 16384 x 16384.
pub const MAX_PIXELS: usize = 1 << 28;

/// Perspective camera looking at a target point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    /// Camera offset from the target point.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
}

impl Camera {
    /// 75° field of view, clipping at 1 and 10 000, `distance` out on +Z.
    pub fn new(distance: f32) -> Self {
        Self {
            fov_y: 75.0_f32.to_radians(),
            near: 1.0,
            far: 10_000.0,
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
        }
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        self.target + self.eye
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Projection matrix for an image of the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, aspect, self.near, self.far)
    }
}

/// Renders frames at a fixed resolution.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    width: u32,
    height: u32,
    camera: Camera,
    model: Mat3,
    filled: bool,
}

impl Rasterizer {
    /// Default camera distance, no rotation, filled sprites.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            camera: Camera::new(crate::host::DEFAULT_CAMERA_Z),
            model: Mat3::IDENTITY,
            filled: true,
        }
    }

    /// Take rotation and camera position from a view.
    pub fn with_view(mut self, view: &ViewState) -> Self {
        self.model = view.rotation();
        self.camera.eye = view.camera_position();
        self
    }

    /// Draw outlines instead of filled sprites.
    pub fn with_filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Render one frame.
    ///
    /// `shapes` gives one sprite per particle; particles past its end are
    /// drawn as circles.
    pub fn render(
        &self,
        frame: &AttributeBuffers,
        shapes: &[SpriteShape],
    ) -> Result<RgbImage, SnapshotError> {
        let (w, h) = (self.width as f32, self.height as f32);
        let view = self.camera.view_matrix();
        let projection = self.camera.projection_matrix(w / h);
        let pixels = (self.width as usize)
            .checked_mul(self.height as usize)
            .filter(|&n| n <= MAX_PIXELS)
            .ok_or(SnapshotError::Dimensions(self.width, self.height))?;
        let mut accum = vec![Vec3::ZERO; pixels];

        for i in 0..frame.len() {
            if frame.sizes[i] <= 0.0 {
                continue;
            }
            let eye = view * (self.model * frame.positions[i]).extend(1.0);
            let depth = -eye.z;
            if depth < self.camera.near || depth > self.camera.far {
                continue;
            }

            let clip: Vec4 = projection * eye;
            let ndc = clip.truncate() / clip.w;
            let center = Vec2::new(
                map_range(ndc.x, -1.0, 1.0, 0.0, w)?,
                map_range(ndc.y, 1.0, -1.0, 0.0, h)?,
            );
            let sprite = frame.sizes[i] * POINT_SCALE / depth;
            let shape = shapes.get(i).copied().unwrap_or_default();

            self.splat(&mut accum, center, sprite, frame.colors[i], shape);
        }

        let mut image = RgbImage::new(self.width, self.height);
        for (pixel, color) in image.pixels_mut().zip(&accum) {
            let to_byte = |c: f32| (clamp(c, 0.0, 1.0) * 255.0).round() as u8;
            *pixel = Rgb([to_byte(color.x), to_byte(color.y), to_byte(color.z)]);
        }
        Ok(image)
    }

    fn splat(&self, accum: &mut [Vec3], center: Vec2, sprite: f32, color: Vec3, shape: SpriteShape) {
        let half = sprite * 0.5;
        let min = (center - Vec2::splat(half)).floor().max(Vec2::ZERO);
        let max = (center + Vec2::splat(half))
            .ceil()
            .min(Vec2::new(self.width as f32, self.height as f32));
        if min.x >= max.x || min.y >= max.y {
            return;
        }

        let stride = self.width as usize;
        for y in min.y as usize..max.y as usize {
            for x in min.x as usize..max.x as usize {
                let pixel = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let p = (pixel - center) / sprite;
                let alpha = shape.coverage(p, self.filled);
                if alpha < 0.01 {
                    continue;
                }
                let (rgb, a) = shade(color, p, alpha);
                accum[y * stride + x] += rgb * a;
            }
        }
    }
}

/// Sprite color and opacity at sprite-space point `p`: soft glow,
/// iridescent tint and a bright rim.
fn shade(color: Vec3, p: Vec2, alpha: f32) -> (Vec3, f32) {
    let dist = p.length();
    let glow = (-dist * dist / 0.25).exp();

    let hue = p.y.atan2(p.x) * 0.1 + dist * 2.0;
    let iridescence = Vec3::new(hue.sin(), (hue + 2.094).sin(), (hue + 4.189).sin()) * 0.3;
    let rim = smoothstep(0.1, 0.4, dist) * smoothstep(0.5, 0.4, dist);

    let rgb = color + iridescence * alpha * 0.4 + Vec3::splat(0.3) * rim * alpha;
    (rgb, alpha * (0.7 + glow * 0.3))
}

/// Render the visualizer's current frame with its view and settings.
pub fn render_visualizer(viz: &Visualizer, width: u32, height: u32) -> Result<RgbImage, SnapshotError> {
    Rasterizer::new(width, height)
        .with_view(viz.view())
        .with_filled(viz.settings().filled_shapes)
        .render(viz.frame(), viz.shapes())
}

/// Write an image as PNG.
pub fn save_png(image: &RgbImage, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Snapshot file name for a pattern at a Unix timestamp in milliseconds.
pub fn file_name(pattern_id: &str, unix_millis: u128) -> String {
    format!("particle-opArt_{}_{}.png", pattern_id, unix_millis)
}
