//! Frame-stepped animation clock.
//!
//! Pattern time advances by a fixed step per frame rather than by wall-clock
//! time, so a given number of ticks always lands on the same frame.
//!
//! # Example
//!
//! ```ignore
//! use opart::host::AnimationClock;
//!
//! let mut clock = AnimationClock::new();
//! clock.set_speed(2.0);
//!
//! // In your frame loop:
//! let time = clock.tick();
//! ```

/// Time added per tick at speed 1.0.
pub const FRAME_STEP: f32 = 0.016;

/// Time tracking for pattern animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    /// Pattern time fed to the generators.
    time: f32,
    /// Multiplier on [`FRAME_STEP`].
    speed: f32,
    /// Total ticks since start, paused or not.
    frame_count: u64,
    /// Whether time is paused.
    paused: bool,
}

impl AnimationClock {
    /// Create a clock at time zero, speed 1.0, running.
    pub fn new() -> Self {
        Self {
            time: 0.0,
            speed: 1.0,
            frame_count: 0,
            paused: false,
        }
    }

    /// Advance one frame. Call once per frame.
    ///
    /// Returns the pattern time after the step.
    pub fn tick(&mut self) -> f32 {
        self.frame_count += 1;
        if !self.paused {
            self.time += FRAME_STEP * self.speed;
        }
        self.time
    }

    /// Current pattern time.
    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Total ticks since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Current speed multiplier.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Whether time is currently paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Set speed multiplier. Negative values clamp to 0.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    /// Pause time progression. Ticks still count frames.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume time progression after pausing.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle pause state.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Reset time and frame count, keeping speed and pause state.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.frame_count = 0;
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_new() {
        let clock = AnimationClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.time(), 0.0);
        assert!(!clock.is_paused());
        assert_eq!(clock.speed(), 1.0);
    }

    #[test]
    fn test_clock_tick() {
        let mut clock = AnimationClock::new();
        clock.set_speed(2.0);
        let time = clock.tick();
        assert!((time - 0.032).abs() < 1e-6);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn test_clock_pause() {
        let mut clock = AnimationClock::new();
        clock.tick();
        clock.pause();

        let before = clock.time();
        clock.tick();

        // Time holds while paused, frames keep counting
        assert_eq!(clock.time(), before);
        assert_eq!(clock.frame(), 2);

        clock.toggle_pause();
        assert!(clock.tick() > before);
    }

    #[test]
    fn test_speed_clamps() {
        let mut clock = AnimationClock::new();
        clock.set_speed(-1.0);
        assert_eq!(clock.speed(), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = AnimationClock::new();
        clock.set_speed(3.0);
        clock.tick();
        clock.reset();
        assert_eq!(clock.time(), 0.0);
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.speed(), 3.0);
    }
}
