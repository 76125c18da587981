#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Timebase`**: Resettable clock scaled by a speed multiplier
//! - **`PeriodicTerm`**: One `(amplitude, frequency, phase)` triple of a periodic sum
//! - **`PeriodicData`**: A borrowed constant table or an owned buffer of terms
//! - **`FunctionKind`**: Which evaluation rule a waveform engine applies
//! - **`WaveformEngine`**: Evaluates the selected waveform against its timebase
//! - **`AnimationChannel`**: Engine plus amplitude plus program selector
//! - **`Preset`**: Built-in composite animations (beat, rainbows)
//! - **`Color`**: RGB and HSV kept in sync on every write
//! - **`ColorAnimator`**: Hue and brightness channels driving one `Color`
//! - **`RgbLed`**: Trait to implement for your LED hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`AnimatorAction`**: Commands that can be sent to an animator
//!
//! Colors are 8-bit throughout. [`RgbLed`] receives `Srgb<u8>`; convert it to
//! your device's native format (PWM duty cycles, GPIO levels).

#[macro_use]
mod fmt;

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod time;
pub mod types;
pub mod periodic;
pub mod shapes;
pub mod waveform;
pub mod channel;
pub mod colors;
pub mod color;
pub mod animator;
pub mod command;
pub mod led;

pub use time::{TimeDuration, TimeInstant, TimeSource, Timebase};
pub use types::{CircleAround, FunctionKind, PeriodicTerm, WaveformError};
pub use periodic::PeriodicData;
pub use waveform::WaveformEngine;
pub use channel::{AnimationChannel, AnimationProgram, MIN_PRESET_ID, NO_ANIMATION, Preset};
pub use colors::{BRIGHTNESS_MAX, HUE_MAX, Hsv8, Rgb8, SATURATION_MAX};
pub use color::Color;
pub use animator::{AnimatorBuilder, ColorAnimator};
pub use command::{AnimatorAction, ChannelId};
pub use led::{CommonAnode, Digital, RgbLed};
