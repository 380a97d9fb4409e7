use std::time::Instant;

use crate::transform::Transform;

/// Whether a per-frame behavior wants to keep running.
///
/// Replaces the implicit "return the continue sentinel" convention of
/// engine task callbacks with an explicit result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

/// Continuous rotation about the heading axis.
///
/// Pure mapping from total elapsed time to a heading angle; holds no clock
/// of its own, so the caller decides where time comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spinner {
    pub degrees_per_second: f32,
}

impl Spinner {
    pub const fn new(degrees_per_second: f32) -> Self {
        Self { degrees_per_second }
    }

    /// Heading in degrees after `elapsed` seconds.
    pub fn heading_at(&self, elapsed: f32) -> f32 {
        elapsed * self.degrees_per_second
    }

    /// Writes the heading for `elapsed` seconds into `transform`, leaving
    /// pitch and roll untouched.
    pub fn tick(&self, elapsed: f32, transform: &mut Transform) -> FrameControl {
        let hpr = transform.hpr;
        transform.set_hpr(self.heading_at(elapsed), hpr.y, hpr.z);
        FrameControl::Continue
    }
}

/// Frame clock tracking both total elapsed time and per-frame delta.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }

    /// Seconds since the clock was created or last reset.
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Seconds since the previous tick; advances the clock.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last_tick = now;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_heading_is_linear_in_time() {
        let spinner = Spinner::new(10.0);
        assert_eq!(spinner.heading_at(0.0), 0.0);
        assert_eq!(spinner.heading_at(1.0), 10.0);
        assert_eq!(spinner.heading_at(36.0), 360.0);
    }

    #[test]
    fn test_tick_writes_heading_only() {
        let spinner = Spinner::new(10.0);
        let mut transform = Transform::IDENTITY;
        transform.set_hpr(0.0, -30.0, 5.0);

        let control = spinner.tick(2.0, &mut transform);

        assert_eq!(control, FrameControl::Continue);
        assert_eq!(transform.hpr.x, 20.0);
        assert_eq!(transform.hpr.y, -30.0);
        assert_eq!(transform.hpr.z, 5.0);
    }

    #[test]
    fn test_tick_is_idempotent_for_same_time() {
        let spinner = Spinner::new(45.0);
        let mut a = Transform::IDENTITY;
        let mut b = Transform::IDENTITY;

        spinner.tick(3.0, &mut a);
        spinner.tick(1.0, &mut b);
        spinner.tick(3.0, &mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009 && delta <= 0.050);
    }

    #[test]
    fn test_clock_elapsed_accumulates() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(5));
        clock.tick();
        thread::sleep(Duration::from_millis(5));

        assert!(clock.elapsed() >= 0.009);
    }

    #[test]
    fn test_clock_resets() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        assert!(clock.elapsed() < 0.005);
    }
}
