//! Time abstraction traits for platform-agnostic timing, and the [`Timebase`]
//! every waveform is evaluated against.

use core::f32::consts::TAU;

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// A resettable clock scaled by a speed multiplier.
///
/// Elapsed time is always derived from `now - start`, so sampling late or at an
/// irregular cadence never accumulates drift.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct Timebase<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    start: I,
    speed: f32,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> Timebase<'t, I, T> {
    /// Creates a timebase starting now with a speed of 1.0.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            start: time_source.now(),
            speed: 1.0,
        }
    }

    /// Rebinds the start instant to the current time.
    #[inline]
    pub fn reset(&mut self) {
        self.start = self.time_source.now();
    }

    /// Returns the speed multiplier.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Sets the speed multiplier. Takes effect retroactively from the start instant.
    #[inline]
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Returns the instant the timebase was last reset at.
    #[inline]
    pub fn start(&self) -> I {
        self.start
    }

    /// Scaled elapsed time in milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f32 {
        let elapsed = self.time_source.now().duration_since(self.start);
        self.speed * elapsed.as_millis() as f32
    }

    /// Scaled elapsed time in seconds.
    #[inline]
    pub fn elapsed_s(&self) -> f32 {
        self.elapsed_ms() / 1000.0
    }

    /// Angular time `2π·t`.
    #[inline]
    pub fn wt(&self) -> f32 {
        TAU * self.elapsed_s()
    }

    /// Angular phase `2π·freq·t + phase0` in radians.
    #[inline]
    pub fn angular_phase(&self, freq: f32, phase0: f32) -> f32 {
        phase0 + self.wt() * freq
    }
}
