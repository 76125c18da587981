//! Periodic function evaluation against a [`Timebase`].
//!
//! Provides [`WaveformEngine`], which owns a timebase, a [`PeriodicData`] set and
//! a [`FunctionKind`], and evaluates the selected waveform on demand. Evaluation
//! is a pure function of the elapsed time, so calling [`WaveformEngine::value`]
//! late or at an irregular cadence simply samples the waveform later.

use crate::periodic::PeriodicData;
use crate::shapes::{self, DEFAULT_SHAPE_PARAM, frac, wrap_unit};
use crate::time::{TimeInstant, TimeSource, Timebase};
use crate::types::{CircleAround, FunctionKind, PeriodicTerm, WaveformError};
use core::f32::consts::{PI, TAU};
use libm::{cosf, sinf};

/// Evaluates periodic functions over time.
///
/// The engine starts with an empty owned parameter set and [`FunctionKind::None`],
/// so it evaluates to zero until configured.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `N` - Capacity of the owned parameter buffer
pub struct WaveformEngine<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> {
    timebase: Timebase<'t, I, T>,
    data: PeriodicData<N>,
    kind: FunctionKind,
    shape_param: f32,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> WaveformEngine<'t, I, T, N> {
    /// Creates an engine with its timer started now.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            timebase: Timebase::new(time_source),
            data: PeriodicData::empty(),
            kind: FunctionKind::None,
            shape_param: DEFAULT_SHAPE_PARAM,
        }
    }

    // ------------------------------------------------------------------
    // Timebase
    // ------------------------------------------------------------------

    /// Restarts the waveform from phase zero.
    #[inline]
    pub fn reset_timer(&mut self) {
        self.timebase.reset();
    }

    /// Returns the timebase.
    #[inline]
    pub fn timebase(&self) -> &Timebase<'t, I, T> {
        &self.timebase
    }

    /// Returns the speed multiplier.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.timebase.speed()
    }

    /// Sets the speed multiplier.
    #[inline]
    pub fn set_speed(&mut self, speed: f32) {
        self.timebase.set_speed(speed);
    }

    /// Scaled elapsed time in milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f32 {
        self.timebase.elapsed_ms()
    }

    /// Scaled elapsed time in seconds.
    #[inline]
    pub fn elapsed_s(&self) -> f32 {
        self.timebase.elapsed_s()
    }

    // ------------------------------------------------------------------
    // Periodic data
    // ------------------------------------------------------------------

    /// Installs a copy of `terms` as owned data.
    ///
    /// The previous owned buffer, if any, is dropped. An empty slice is valid and
    /// yields an evaluator that always returns zero.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `terms` is longer than `N`. The current data is kept.
    pub fn set_periodic_data(&mut self, terms: &[PeriodicTerm]) -> Result<(), WaveformError> {
        self.data = PeriodicData::owned(terms)?;
        Ok(())
    }

    /// Installs a constant table without copying it.
    pub fn set_periodic_data_const(&mut self, terms: &'static [PeriodicTerm]) {
        self.data = PeriodicData::borrowed(terms);
    }

    /// Installs a single owned term.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `N` is zero
    pub fn set_single_term(
        &mut self,
        amplitude: f32,
        frequency: f32,
        phase: f32,
    ) -> Result<(), WaveformError> {
        self.set_periodic_data(&[PeriodicTerm::new(amplitude, frequency, phase)])
    }

    /// Replaces the data with `size` owned zero terms.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `size` is larger than `N`. The current data is kept.
    pub fn reset_periodic_data(&mut self, size: usize) -> Result<(), WaveformError> {
        self.data = PeriodicData::zeroed(size)?;
        Ok(())
    }

    /// Sets the amplitude of the first term.
    ///
    /// Constant data is copied into the owned buffer first.
    pub fn set_base_amplitude(&mut self, amplitude: f32) -> Result<(), WaveformError> {
        self.data.update_base(|base| base.amplitude = amplitude)
    }

    /// Sets the frequency of the first term, in Hz.
    pub fn set_base_frequency(&mut self, frequency: f32) -> Result<(), WaveformError> {
        self.data.update_base(|base| base.frequency = frequency)
    }

    /// Sets the period of the first term, in seconds. A zero period stops the term.
    pub fn set_base_period(&mut self, period: f32) -> Result<(), WaveformError> {
        let frequency = if period == 0.0 { 0.0 } else { 1.0 / period };
        self.set_base_frequency(frequency)
    }

    /// Sets the initial phase of the first term, in radians.
    pub fn set_base_phase(&mut self, phase: f32) -> Result<(), WaveformError> {
        self.data.update_base(|base| base.phase = phase)
    }

    /// Returns the installed parameter set.
    #[inline]
    pub fn periodic_data(&self) -> &PeriodicData<N> {
        &self.data
    }

    /// Returns the installed terms.
    #[inline]
    pub fn terms(&self) -> &[PeriodicTerm] {
        self.data.terms()
    }

    // ------------------------------------------------------------------
    // Function selection
    // ------------------------------------------------------------------

    /// Selects the evaluation rule. Does not touch the data or the timer.
    #[inline]
    pub fn set_function_kind(&mut self, kind: FunctionKind) {
        self.kind = kind;
    }

    /// Returns the selected evaluation rule.
    #[inline]
    pub fn function_kind(&self) -> FunctionKind {
        self.kind
    }

    /// Sets the shape parameter `k` used by single-waveform kinds.
    #[inline]
    pub fn set_shape_param(&mut self, k: f32) {
        self.shape_param = k;
    }

    /// Returns the shape parameter `k`.
    #[inline]
    pub fn shape_param(&self) -> f32 {
        self.shape_param
    }

    /// Evaluates the selected function at the current time.
    ///
    /// Sum kinds add up every term without wrapping the result. Single-waveform
    /// kinds scale the shape of the first term by its amplitude. An empty set
    /// and [`FunctionKind::None`] evaluate to zero.
    pub fn value(&self) -> f32 {
        let terms = self.data.terms();
        match self.kind {
            FunctionKind::None => 0.0,
            FunctionKind::CosineSum => self.cosines(terms),
            FunctionKind::SineSum => self.sines(terms),
            FunctionKind::CircleSum => self.circles(terms),
            kind => match self.data.base() {
                Some(base) => {
                    let angle = self.timebase.angular_phase(base.frequency, base.phase);
                    base.amplitude * shapes::shape(kind, angle, self.shape_param)
                }
                None => 0.0,
            },
        }
    }

    // ------------------------------------------------------------------
    // Sums
    // ------------------------------------------------------------------

    /// `Σ amplitude · cos(frequency·2πt + phase)` over `terms`.
    ///
    /// A zero frequency turns a term into a constant offset, and a phase of `-π/2`
    /// turns it into a sine.
    pub fn cosines(&self, terms: &[PeriodicTerm]) -> f32 {
        let wt = self.timebase.wt();
        terms
            .iter()
            .map(|term| term.amplitude * cosf(wt * term.frequency + term.phase))
            .sum()
    }

    /// `Σ amplitude · sin(frequency·2πt + phase)` over `terms`.
    pub fn sines(&self, terms: &[PeriodicTerm]) -> f32 {
        let wt = self.timebase.wt();
        terms
            .iter()
            .map(|term| term.amplitude * sinf(wt * term.frequency + term.phase))
            .sum()
    }

    /// `Σ amplitude · frac(frequency·t + phase/2π)` over `terms`.
    pub fn circles(&self, terms: &[PeriodicTerm]) -> f32 {
        let t = self.timebase.elapsed_s();
        terms
            .iter()
            .map(|term| term.amplitude * frac(term.frequency * t + term.phase / TAU))
            .sum()
    }

    /// Position on the unit circle after `frequency` turns per second.
    pub fn circle(&self, frequency: f32, phase: f32) -> f32 {
        wrap_unit(frequency * self.timebase.elapsed_s() + phase / TAU)
    }

    // ------------------------------------------------------------------
    // Single waveforms
    // ------------------------------------------------------------------

    /// Rising ramp in `[0, 1)`.
    pub fn sawtooth(&self, frequency: f32, phase0: f32) -> f32 {
        shapes::sawtooth(self.timebase.angular_phase(frequency, phase0))
    }

    /// Falling ramp in `(0, 1]`.
    pub fn inverse_sawtooth(&self, frequency: f32, phase0: f32) -> f32 {
        shapes::inverse_sawtooth(self.timebase.angular_phase(frequency, phase0))
    }

    /// Triangle peaking at phase `k`.
    pub fn triangular(&self, frequency: f32, phase0: f32, k: f32) -> f32 {
        shapes::triangular(self.timebase.angular_phase(frequency, phase0), k)
    }

    /// Bipolar square wave with duty cycle `k`.
    pub fn square(&self, frequency: f32, phase0: f32, k: f32) -> f32 {
        shapes::square(self.timebase.angular_phase(frequency, phase0), k)
    }

    /// Linearly decaying pulse of width `k`.
    pub fn pulse(&self, frequency: f32, phase0: f32, k: f32) -> f32 {
        shapes::pulse(self.timebase.angular_phase(frequency, phase0), k)
    }

    /// Unipolar on/off wave with duty cycle `k`.
    pub fn rectangular(&self, frequency: f32, phase0: f32, k: f32) -> f32 {
        shapes::rectangular(self.timebase.angular_phase(frequency, phase0), k)
    }

    /// Trapezoid with ramps of total width `k`.
    pub fn rhomboidal(&self, frequency: f32, phase0: f32, k: f32) -> f32 {
        shapes::rhomboidal(self.timebase.angular_phase(frequency, phase0), k)
    }

    /// Half-sine bump of width `k`.
    pub fn sine_pulse(&self, frequency: f32, phase0: f32, k: f32) -> f32 {
        shapes::sine_pulse(self.timebase.angular_phase(frequency, phase0), k)
    }

    /// Uniform motion: `x0 + velocity·t`.
    pub fn linear_movement(&self, x0: f32, velocity: f32) -> f32 {
        x0 + velocity * self.timebase.elapsed_s()
    }

    // ------------------------------------------------------------------
    // Circular interpolation
    // ------------------------------------------------------------------

    /// Oscillates from `start` to `end` and back on the unit circle.
    ///
    /// One full swing takes `period` seconds when the arc is half a turn; the
    /// swing frequency scales with the arc length. With `shortest_path` the
    /// shorter arc is followed, otherwise the longer one. Values are positions on
    /// `[0, 1)`; hues map in by dividing degrees by 360.
    pub fn circular_interpolate(
        &self,
        start: f32,
        end: f32,
        period: f32,
        shortest_path: bool,
    ) -> f32 {
        let (distance, direction) = arc(start, end, shortest_path);
        let amplitude = direction * distance / 2.0;
        let frequency = 2.0 * distance / period;
        let angle = self.timebase.angular_phase(frequency, 0.0);
        wrap_unit((start + amplitude) - amplitude * cosf(angle))
    }

    /// Computes the swing from `start` to `end` as standalone parameters.
    pub fn circle_around_params(
        &self,
        start: f32,
        end: f32,
        period: f32,
        shortest_path: bool,
    ) -> CircleAround {
        let (distance, direction) = arc(start, end, shortest_path);
        let amplitude = direction * distance / 2.0;
        CircleAround {
            center: start + amplitude,
            amplitude,
            angular_frequency: TAU * distance / period,
        }
    }

    /// Samples a swing computed by [`circle_around_params`](Self::circle_around_params).
    pub fn circle_around(&self, params: &CircleAround) -> f32 {
        let t = self.timebase.elapsed_s();
        wrap_unit(params.center - params.amplitude * cosf(params.angular_frequency * t))
    }

    /// Installs the swing from `start` to `end` as a standing two-term cosine sum.
    ///
    /// The data becomes `{(start + a, 0, 0), (a, b, π)}` with the kind set to
    /// [`FunctionKind::CosineSum`], and the timer restarts. The sum itself is not
    /// wrapped, so callers feeding a hue setter rely on its wrapping.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `N` is smaller than 2. Nothing changes.
    pub fn configure_circular_interpolation(
        &mut self,
        start: f32,
        end: f32,
        period: f32,
        shortest_path: bool,
    ) -> Result<(), WaveformError> {
        let (distance, direction) = arc(start, end, shortest_path);
        let amplitude = direction * distance / 2.0;
        let frequency = 2.0 * distance / period;

        self.set_periodic_data(&[
            PeriodicTerm::new(start + amplitude, 0.0, 0.0),
            PeriodicTerm::new(amplitude, frequency, PI),
        ])?;
        self.kind = FunctionKind::CosineSum;
        self.reset_timer();

        debug!("circular interpolation installed: {} -> {}", start, end);
        Ok(())
    }
}

/// Picks the arc between two points of the unit circle.
///
/// Returns `(distance, direction)`: `-1` walks clockwise (decreasing), `+1`
/// counter-clockwise. Ties resolve clockwise.
fn arc(start: f32, end: f32, shortest_path: bool) -> (f32, f32) {
    let clockwise = wrap_unit(start - end);
    let counter_clockwise = wrap_unit(end - start);

    let take_counter_clockwise = if shortest_path {
        counter_clockwise < clockwise
    } else {
        counter_clockwise > clockwise
    };

    if take_counter_clockwise {
        (counter_clockwise, 1.0)
    } else {
        (clockwise, -1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_prefers_shorter_side_when_asked() {
        let (distance, direction) = arc(0.1, 0.3, true);
        assert!((distance - 0.2).abs() < 1e-6);
        assert_eq!(direction, 1.0);

        let (distance, direction) = arc(0.1, 0.3, false);
        assert!((distance - 0.8).abs() < 1e-6);
        assert_eq!(direction, -1.0);
    }

    #[test]
    fn arc_ties_resolve_clockwise() {
        assert_eq!(arc(0.0, 0.5, true), (0.5, -1.0));
        assert_eq!(arc(0.0, 0.5, false), (0.5, -1.0));
    }

    #[test]
    fn arc_crosses_zero() {
        let (distance, direction) = arc(0.9, 0.1, true);
        assert!((distance - 0.2).abs() < 1e-6);
        assert_eq!(direction, 1.0);
    }
}
