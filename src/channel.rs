//! Animation channels and built-in composite presets.
//!
//! An [`AnimationChannel`] wraps a [`WaveformEngine`] with an output amplitude and
//! a program id. Ids below [`MIN_PRESET_ID`] select a raw [`FunctionKind`]; ids
//! from [`MIN_PRESET_ID`] upward select one of the [`Preset`] tables.

use crate::shapes::positive_wave;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{FunctionKind, PeriodicTerm};
use crate::waveform::WaveformEngine;
use core::f32::consts::PI;

/// Program id that disables a channel.
pub const NO_ANIMATION: u8 = 0;

/// Smallest program id that selects a preset.
pub const MIN_PRESET_ID: u8 = 128;

/// Beat frequency of the [`Preset::Beating`] table, in Hz.
pub const BEAT_FREQUENCY: f32 = 0.5;

/// Smooth pulse between 0 and 1.
pub static BEATING_TERMS: [PeriodicTerm; 2] = [
    PeriodicTerm::new(0.5, 0.0, 0.0),
    PeriodicTerm::new(0.5, BEAT_FREQUENCY, PI),
];

/// Slow full sweep starting at the top of the range.
pub static RAINBOW1_TERMS: [PeriodicTerm; 2] = [
    PeriodicTerm::new(0.5, 0.0, 0.0),
    PeriodicTerm::new(-0.5, 0.05, PI),
];

/// Slow sweep with a faster ripple on top.
pub static RAINBOW2_TERMS: [PeriodicTerm; 3] = [
    PeriodicTerm::new(0.25, 0.0, 0.0),
    PeriodicTerm::new(0.5, 0.05, 0.0),
    PeriodicTerm::new(0.25, 0.4, 0.0),
];

/// Full sweep every 2.5 s.
pub static FAST_RAINBOW_TERMS: [PeriodicTerm; 2] = [
    PeriodicTerm::new(0.5, 0.0, 0.0),
    PeriodicTerm::new(0.5, 0.4, PI),
];

/// Bipolar sweep around the starting point every 10 s.
pub static CIRCLE_RAINBOW_TERMS: [PeriodicTerm; 1] = [PeriodicTerm::new(1.0, 0.1, 0.0)];

/// Built-in composite animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Preset {
    /// Brightness pulse at [`BEAT_FREQUENCY`].
    Beating = MIN_PRESET_ID,
    /// Slow rainbow.
    Rainbow1,
    /// Slow rainbow with ripple.
    Rainbow2,
    /// Fast rainbow.
    FastRainbow,
    /// Rainbow swinging around the starting hue.
    CircleRainbow,
}

impl Preset {
    /// Every preset, in id order.
    pub const ALL: [Preset; 5] = [
        Preset::Beating,
        Preset::Rainbow1,
        Preset::Rainbow2,
        Preset::FastRainbow,
        Preset::CircleRainbow,
    ];

    /// Looks up a preset by program id.
    pub const fn from_id(id: u8) -> Option<Self> {
        let preset = match id {
            128 => Preset::Beating,
            129 => Preset::Rainbow1,
            130 => Preset::Rainbow2,
            131 => Preset::FastRainbow,
            132 => Preset::CircleRainbow,
            _ => return None,
        };
        Some(preset)
    }

    /// Returns the program id.
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Returns the evaluation rule the preset installs.
    #[inline]
    pub const fn kind(self) -> FunctionKind {
        FunctionKind::CosineSum
    }

    /// Returns the constant term table the preset installs.
    pub fn terms(self) -> &'static [PeriodicTerm] {
        match self {
            Preset::Beating => &BEATING_TERMS,
            Preset::Rainbow1 => &RAINBOW1_TERMS,
            Preset::Rainbow2 => &RAINBOW2_TERMS,
            Preset::FastRainbow => &FAST_RAINBOW_TERMS,
            Preset::CircleRainbow => &CIRCLE_RAINBOW_TERMS,
        }
    }
}

/// Typed view of a program id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationProgram {
    /// Id 0: no animation.
    None,
    /// Ids 1-127 naming a known function kind.
    Raw(FunctionKind),
    /// Ids 128-132.
    Preset(Preset),
    /// Any other id. Recorded by a channel but installs nothing.
    Unknown(u8),
}

impl AnimationProgram {
    /// Classifies a program id.
    pub const fn from_id(id: u8) -> Self {
        if id == NO_ANIMATION {
            return AnimationProgram::None;
        }
        if id < MIN_PRESET_ID {
            return match FunctionKind::from_id(id) {
                Some(kind) => AnimationProgram::Raw(kind),
                None => AnimationProgram::Unknown(id),
            };
        }
        match Preset::from_id(id) {
            Some(preset) => AnimationProgram::Preset(preset),
            None => AnimationProgram::Unknown(id),
        }
    }

    /// Returns the program id.
    pub const fn id(self) -> u8 {
        match self {
            AnimationProgram::None => NO_ANIMATION,
            AnimationProgram::Raw(kind) => kind.id(),
            AnimationProgram::Preset(preset) => preset.id(),
            AnimationProgram::Unknown(id) => id,
        }
    }
}

impl From<u8> for AnimationProgram {
    fn from(id: u8) -> Self {
        AnimationProgram::from_id(id)
    }
}

impl From<AnimationProgram> for u8 {
    fn from(program: AnimationProgram) -> Self {
        program.id()
    }
}

impl From<Preset> for AnimationProgram {
    fn from(preset: Preset) -> Self {
        AnimationProgram::Preset(preset)
    }
}

/// A waveform engine with an output amplitude and a program selector.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `N` - Capacity of the owned parameter buffer
pub struct AnimationChannel<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> {
    engine: WaveformEngine<'t, I, T, N>,
    amplitude: f32,
    program: u8,
    positive_clamp: bool,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> AnimationChannel<'t, I, T, N> {
    /// Creates an idle channel scaling its output by `amplitude`.
    pub fn new(time_source: &'t T, amplitude: f32) -> Self {
        Self {
            engine: WaveformEngine::new(time_source),
            amplitude,
            program: NO_ANIMATION,
            positive_clamp: false,
        }
    }

    /// Selects a program.
    ///
    /// Requesting the program that is already installed does nothing, so the
    /// animation keeps its phase. Raw ids only change the function kind and keep
    /// the current data. Preset ids install the preset's kind and constant table.
    /// Unknown preset ids are recorded without installing anything.
    pub fn set_program(&mut self, id: u8) {
        if id == self.program {
            return;
        }
        self.program = id;

        match AnimationProgram::from_id(id) {
            AnimationProgram::None => self.engine.set_function_kind(FunctionKind::None),
            AnimationProgram::Raw(kind) => self.engine.set_function_kind(kind),
            AnimationProgram::Preset(preset) => {
                self.engine.set_function_kind(preset.kind());
                self.engine.set_periodic_data_const(preset.terms());
            }
            AnimationProgram::Unknown(id) if id < MIN_PRESET_ID => {
                self.engine.set_function_kind(FunctionKind::None)
            }
            AnimationProgram::Unknown(_) => {}
        }

        debug!("channel program set to {}", id);
    }

    /// Returns the current program id.
    #[inline]
    pub fn program(&self) -> u8 {
        self.program
    }

    /// Returns the typed view of the current program.
    #[inline]
    pub fn animation_program(&self) -> AnimationProgram {
        AnimationProgram::from_id(self.program)
    }

    /// True unless the program is [`NO_ANIMATION`].
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.program != NO_ANIMATION
    }

    /// Scaled waveform value at the current time.
    ///
    /// With positive clamping enabled the raw value is folded to `|value|` before
    /// scaling.
    pub fn output(&self) -> f32 {
        let value = self.engine.value();
        let value = if self.positive_clamp {
            positive_wave(value)
        } else {
            value
        };
        self.amplitude * value
    }

    /// Evaluates `preset` against this channel's timer without installing it.
    pub fn preset_output(&self, preset: Preset) -> f32 {
        self.amplitude * self.engine.cosines(preset.terms())
    }

    /// Restarts the animation from phase zero.
    #[inline]
    pub fn reset_timer(&mut self) {
        self.engine.reset_timer();
    }

    /// Returns the output amplitude.
    #[inline]
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Sets the output amplitude.
    #[inline]
    pub fn set_amplitude(&mut self, amplitude: f32) {
        self.amplitude = amplitude;
    }

    /// True if negative half-cycles are folded up.
    #[inline]
    pub fn positive_clamp(&self) -> bool {
        self.positive_clamp
    }

    /// Enables or disables folding of negative half-cycles.
    #[inline]
    pub fn set_positive_clamp(&mut self, enabled: bool) {
        self.positive_clamp = enabled;
    }

    /// Returns the speed multiplier.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.engine.speed()
    }

    /// Sets the speed multiplier.
    #[inline]
    pub fn set_speed(&mut self, speed: f32) {
        self.engine.set_speed(speed);
    }

    /// Returns the underlying engine.
    #[inline]
    pub fn engine(&self) -> &WaveformEngine<'t, I, T, N> {
        &self.engine
    }

    /// Returns the underlying engine for custom data or shape tweaks.
    #[inline]
    pub fn engine_mut(&mut self) -> &mut WaveformEngine<'t, I, T, N> {
        &mut self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_ids_classify() {
        assert_eq!(AnimationProgram::from_id(0), AnimationProgram::None);
        assert_eq!(
            AnimationProgram::from_id(1),
            AnimationProgram::Raw(FunctionKind::CosineSum)
        );
        assert_eq!(AnimationProgram::from_id(50), AnimationProgram::Unknown(50));
        assert_eq!(
            AnimationProgram::from_id(130),
            AnimationProgram::Preset(Preset::Rainbow2)
        );
        assert_eq!(AnimationProgram::from_id(200), AnimationProgram::Unknown(200));
    }

    #[test]
    fn program_ids_round_trip() {
        for id in 0..=u8::MAX {
            assert_eq!(AnimationProgram::from_id(id).id(), id);
        }
    }

    #[test]
    fn presets_have_contiguous_ids() {
        for (offset, preset) in Preset::ALL.iter().enumerate() {
            assert_eq!(preset.id(), MIN_PRESET_ID + offset as u8);
            assert_eq!(Preset::from_id(preset.id()), Some(*preset));
        }
    }

    #[test]
    fn preset_tables_match_their_sizes() {
        assert_eq!(Preset::Beating.terms().len(), 2);
        assert_eq!(Preset::Rainbow1.terms().len(), 2);
        assert_eq!(Preset::Rainbow2.terms().len(), 3);
        assert_eq!(Preset::FastRainbow.terms().len(), 2);
        assert_eq!(Preset::CircleRainbow.terms().len(), 1);
    }
}
