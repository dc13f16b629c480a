//! Eased view rotation, camera distance and the orbiting camera path.

use glam::{Mat3, Vec3};

/// Fraction of the remaining rotation closed each tick.
pub const EASING: f32 = 0.05;
/// Radians of rotation per pixel dragged.
pub const DRAG_FACTOR: f32 = 0.005;
/// Target Y rotation added per tick at rotation speed 1.0.
pub const AUTO_ROTATE_STEP: f32 = 0.001;
/// Closest allowed camera distance.
pub const MIN_CAMERA_Z: f32 = 100.0;
/// Farthest allowed camera distance.
pub const MAX_CAMERA_Z: f32 = 2000.0;
/// Starting camera distance.
pub const DEFAULT_CAMERA_Z: f32 = 500.0;
/// Orbit angle advanced per tick while following the camera path.
pub const CAMERA_PATH_STEP: f32 = 0.005;
/// Horizontal radius of the camera path.
pub const CAMERA_PATH_RADIUS: f32 = 600.0;
/// Vertical swing of the camera path.
pub const CAMERA_PATH_HEIGHT: f32 = 200.0;

/// How the particle system is oriented and how far the camera sits.
///
/// Input sets target rotations; [`ViewState::step`] eases the current
/// rotation toward them. With the camera path on, the particle system holds
/// still and the camera orbits the origin instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Rotation about X the view is easing toward.
    pub target_x: f32,
    /// Rotation about Y the view is easing toward.
    pub target_y: f32,
    /// Rotation about X applied this frame.
    pub current_x: f32,
    /// Rotation about Y applied this frame.
    pub current_y: f32,
    camera_z: f32,
    camera_path: Option<f32>,
    dragging: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            target_x: 0.0,
            target_y: 0.0,
            current_x: 0.0,
            current_y: 0.0,
            camera_z: DEFAULT_CAMERA_Z,
            camera_path: None,
            dragging: false,
        }
    }

    /// Advance one frame.
    ///
    /// On the camera path the orbit advances unless a drag is in progress.
    /// Otherwise: optional auto-rotation, then easing.
    pub fn step(&mut self, auto_rotate: bool, rotation_speed: f32) {
        if let Some(angle) = self.camera_path.as_mut() {
            if !self.dragging {
                *angle += CAMERA_PATH_STEP;
            }
            return;
        }
        if auto_rotate {
            self.target_y += AUTO_ROTATE_STEP * rotation_speed;
        }
        self.current_x += (self.target_x - self.current_x) * EASING;
        self.current_y += (self.target_y - self.current_y) * EASING;
    }

    /// Turn the orbiting camera path on or off.
    ///
    /// Turning it on clears every rotation and starts the orbit from angle
    /// 0. Turning it off puts the camera back on +Z at the default distance.
    pub fn set_camera_path(&mut self, enabled: bool) {
        if enabled == self.camera_path.is_some() {
            return;
        }
        if enabled {
            self.target_x = 0.0;
            self.target_y = 0.0;
            self.current_x = 0.0;
            self.current_y = 0.0;
            self.camera_path = Some(0.0);
        } else {
            self.camera_path = None;
            self.camera_z = DEFAULT_CAMERA_Z;
        }
    }

    /// Orbit angle, if the camera path is on.
    pub fn camera_path(&self) -> Option<f32> {
        self.camera_path
    }

    /// Mark a pointer drag as started or finished.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Apply a pointer drag in pixels.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.target_y += dx * DRAG_FACTOR;
        self.target_x += dy * DRAG_FACTOR;
    }

    /// Apply a scroll-wheel delta. Positive scrolls away.
    pub fn zoom(&mut self, wheel_delta: f32) {
        self.set_camera_z(self.camera_z + wheel_delta * 0.5);
    }

    /// Apply a change in pinch distance. Spreading fingers moves closer.
    pub fn pinch(&mut self, distance_delta: f32) {
        self.set_camera_z(self.camera_z - distance_delta * 2.0);
    }

    /// Camera distance from the origin along +Z.
    #[inline]
    pub fn camera_z(&self) -> f32 {
        self.camera_z
    }

    /// Set camera distance, clamped to the allowed range.
    pub fn set_camera_z(&mut self, z: f32) {
        self.camera_z = z.clamp(MIN_CAMERA_Z, MAX_CAMERA_Z);
    }

    /// Model rotation for the current frame (X applied after Y).
    /// Identity while the camera path is on.
    pub fn rotation(&self) -> Mat3 {
        if self.camera_path.is_some() {
            return Mat3::IDENTITY;
        }
        Mat3::from_rotation_x(self.current_x) * Mat3::from_rotation_y(self.current_y)
    }

    /// Camera position in world space. The camera always looks at the origin.
    pub fn camera_position(&self) -> Vec3 {
        match self.camera_path {
            Some(angle) => Vec3::new(
                angle.sin() * CAMERA_PATH_RADIUS,
                (angle * 0.5).sin() * CAMERA_PATH_HEIGHT,
                angle.cos() * CAMERA_PATH_RADIUS,
            ),
            None => Vec3::new(0.0, 0.0, self.camera_z),
        }
    }

    /// Snap back to the initial orientation and distance.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
