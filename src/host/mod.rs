//! Caller-owned host state driving the generators frame by frame.
//!
//! [`Visualizer`] bundles everything an interactive front end needs: the
//! active pattern, user settings, the animation clock, the view and the
//! most recent frame. Nothing here is global; a front end owns one
//! `Visualizer` and calls [`Visualizer::tick`] once per frame.
//!
//! ```ignore
//! use opart::host::Visualizer;
//! use opart::PatternRegistry;
//!
//! let mut viz = Visualizer::new(PatternRegistry::builtin())?;
//! viz.select_pattern("tunnel")?;
//! for _ in 0..60 {
//!     let frame = viz.tick()?;
//!     // upload frame.positions_flat(), frame.colors_flat(), frame.sizes
//! }
//! ```

mod clock;
mod view;

pub use clock::{AnimationClock, FRAME_STEP};
pub use view::{
    ViewState, CAMERA_PATH_HEIGHT, CAMERA_PATH_RADIUS, CAMERA_PATH_STEP, DEFAULT_CAMERA_Z, MAX_CAMERA_Z,
    MIN_CAMERA_Z,
};

use crate::buffers::AttributeBuffers;
use crate::config::{GenerationConfig, ParticleCount};
use crate::error::{PatternError, SnapshotError};
use crate::patterns::PatternDescriptor;
use crate::registry::PatternRegistry;
use crate::shapes::{assign_shapes, ShapeMode, SpriteShape};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Pattern selected when a host starts, if registered.
pub const DEFAULT_PATTERN: &str = "spiral";

/// User-adjustable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Particles generated per frame.
    pub particle_count: usize,
    /// Animation speed multiplier.
    pub speed: f32,
    /// Spatial scale passed to the generators.
    pub spread: f32,
    /// Detail multiplier passed to the generators.
    pub complexity: f32,
    /// Base particle size.
    pub size: f32,
    /// Sprite shape selection.
    pub shape: ShapeMode,
    /// Auto-rotation rate.
    pub rotation_speed: f32,
    /// Whether pattern time advances.
    pub animate: bool,
    /// Whether the view spins on its own.
    pub auto_rotate: bool,
    /// Orbit the camera around a still particle system.
    pub camera_paths: bool,
    /// Filled sprites, or outlines only.
    pub filled_shapes: bool,
    /// Grayscale output.
    pub black_white: bool,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            particle_count: 10_000,
            speed: 1.0,
            spread: 1.0,
            complexity: 1.0,
            size: 2.0,
            shape: ShapeMode::default(),
            rotation_speed: 0.5,
            animate: true,
            auto_rotate: true,
            camera_paths: false,
            filled_shapes: true,
            black_white: false,
        }
    }
}

impl HostSettings {
    /// Generator config for these settings at pattern time `time`.
    pub fn generation_config(&self, time: f32) -> GenerationConfig {
        GenerationConfig {
            time,
            spread: self.spread,
            complexity: self.complexity,
            size: self.size,
            black_white: self.black_white,
        }
    }

    /// Check the fields the generators depend on.
    pub fn validate(&self) -> Result<(), PatternError> {
        self.generation_config(0.0).validate()?;
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(PatternError::InvalidConfig {
                field: "speed",
                value: self.speed,
                expected: "finite and >= 0",
            });
        }
        Ok(())
    }

    /// Draw a random configuration from the defaults.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::default().randomized(rng)
    }

    /// Redraw every look-and-feel setting, keeping `animate`, `auto_rotate`
    /// and `camera_paths` as they are.
    ///
    /// Particle count is a multiple of 1000 in `[5000, 29000]`; shapes are
    /// filled 70% of the time and grayscale 30% of the time. The shape
    /// mode is uniform over the nine shapes plus mixed.
    pub fn randomized<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let count = (rng.gen_range(5000.0..30000.0_f32) / 1000.0).floor() as usize * 1000;
        let shape = ShapeMode::from_index(rng.gen_range(0..ShapeMode::COUNT)).unwrap_or_default();
        Self {
            particle_count: count,
            speed: rng.gen_range(0.2..3.0),
            spread: rng.gen_range(0.5..2.0),
            complexity: rng.gen_range(0.5..3.0),
            size: rng.gen_range(1.0..6.0),
            rotation_speed: rng.gen_range(0.0..1.5),
            filled_shapes: rng.gen::<f32>() > 0.3,
            black_white: rng.gen::<f32>() > 0.7,
            shape,
            ..self.clone()
        }
    }

    /// Save the settings to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let json = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        Ok(settings)
    }
}

/// Interactive host state: one active pattern animated over time.
#[derive(Debug, Clone)]
pub struct Visualizer {
    registry: PatternRegistry,
    current: PatternDescriptor,
    settings: HostSettings,
    clock: AnimationClock,
    view: ViewState,
    frame: AttributeBuffers,
    shapes: Vec<SpriteShape>,
    rng: SmallRng,
}

impl Visualizer {
    /// Start on [`DEFAULT_PATTERN`], or the first registered pattern when
    /// that one is missing, with default settings.
    pub fn new(registry: PatternRegistry) -> Result<Self, PatternError> {
        let current = match registry.get(DEFAULT_PATTERN) {
            Ok(descriptor) => *descriptor,
            Err(e) => *registry.iter().next().ok_or(e)?,
        };

        let mut viz = Self {
            registry,
            current,
            settings: HostSettings::default(),
            clock: AnimationClock::new(),
            view: ViewState::new(),
            frame: AttributeBuffers::default(),
            shapes: Vec::new(),
            rng: SmallRng::from_entropy(),
        };
        viz.rebuild()?;
        Ok(viz)
    }

    /// Reseed the generator used for mixed shape assignment.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self.reassign_shapes();
        self
    }

    /// Advance one frame.
    ///
    /// Pattern time and buffers only move while `animate` is on; the view
    /// eases either way. Returns the current frame.
    pub fn tick(&mut self) -> Result<&AttributeBuffers, PatternError> {
        self.clock.tick();
        if self.settings.animate {
            self.regenerate()?;
            if self.settings.shape.is_mixed() {
                self.reassign_shapes();
            }
        }
        self.view.step(self.settings.auto_rotate, self.settings.rotation_speed);
        Ok(&self.frame)
    }

    /// Switch the active pattern.
    ///
    /// On failure the previous selection stays active.
    pub fn select_pattern(&mut self, id: &str) -> Result<(), PatternError> {
        let descriptor = *self.registry.get(id).map_err(|e| {
            log::warn!("Cannot select pattern: {}", e);
            e
        })?;
        log::info!("Switching pattern: {} -> {}", self.current.id, descriptor.id);
        self.current = descriptor;
        self.regenerate()
    }

    /// Replace the settings, validating first.
    ///
    /// On failure the previous settings stay active.
    pub fn apply_settings(&mut self, settings: HostSettings) -> Result<(), PatternError> {
        settings.validate()?;
        self.settings = settings;
        self.clock.set_speed(self.settings.speed);
        if self.settings.animate {
            self.clock.resume();
        } else {
            self.clock.pause();
        }
        self.view.set_camera_path(self.settings.camera_paths);
        self.rebuild()
    }

    /// Pick a random pattern and random settings. Animation, auto-rotation
    /// and the camera path stay as they were.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PatternError> {
        let descriptor = match self.registry.choose(rng) {
            Some(descriptor) => *descriptor,
            None => return Err(PatternError::UnknownPattern(String::new())),
        };
        let settings = self.settings.randomized(rng);
        log::info!(
            "Randomized: pattern={} count={} speed={:.1} spread={:.1} complexity={:.1} size={:.1}",
            descriptor.id,
            settings.particle_count,
            settings.speed,
            settings.spread,
            settings.complexity,
            settings.size
        );
        self.current = descriptor;
        self.apply_settings(settings)
    }

    /// Toggle animation on or off.
    pub fn toggle_animation(&mut self) {
        self.settings.animate = !self.settings.animate;
        self.clock.toggle_pause();
        log::debug!("Animation {}", if self.settings.animate { "resumed" } else { "paused" });
    }

    /// Generate the current pattern at the current time into the frame.
    pub fn regenerate(&mut self) -> Result<(), PatternError> {
        let config = self.settings.generation_config(self.clock.time());
        let count = ParticleCount::new(self.settings.particle_count);
        match self.current.generate(count, &config) {
            Ok(frame) => {
                self.frame = frame;
                Ok(())
            }
            Err(e) => {
                log::error!("Generation failed for {}: {}", self.current.id, e);
                Err(e)
            }
        }
    }

    fn rebuild(&mut self) -> Result<(), PatternError> {
        self.regenerate()?;
        self.reassign_shapes();
        log::debug!(
            "Rebuilt {} with {} particles",
            self.current.id,
            self.settings.particle_count
        );
        Ok(())
    }

    fn reassign_shapes(&mut self) {
        self.shapes = assign_shapes(self.settings.particle_count, self.settings.shape, &mut self.rng);
    }

    /// The active pattern.
    pub fn pattern(&self) -> &PatternDescriptor {
        &self.current
    }

    /// Identifier of the active pattern.
    pub fn pattern_id(&self) -> &'static str {
        self.current.id
    }

    /// The most recent frame.
    pub fn frame(&self) -> &AttributeBuffers {
        &self.frame
    }

    /// Sprite shape per particle of the most recent frame.
    pub fn shapes(&self) -> &[SpriteShape] {
        &self.shapes
    }

    pub fn settings(&self) -> &HostSettings {
        &self.settings
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Mutable view for pointer and zoom input.
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }
}
