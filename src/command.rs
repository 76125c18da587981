//! Command-based control for animators.

use crate::colors::{Hsv8, Rgb8};
use crate::types::{FunctionKind, PeriodicTerm};
use heapless::Vec;

/// Selects one of an animator's two channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelId {
    /// Hue offset channel.
    Hue,
    /// Brightness channel.
    Brightness,
}

/// Actions for controlling a [`ColorAnimator`](crate::ColorAnimator).
///
/// # Type Parameters
/// * `N` - Capacity of the owned parameter buffer
#[derive(Debug, Clone)]
pub enum AnimatorAction<const N: usize> {
    /// Route a program id through `set_animation`.
    SetAnimation(u8),
    /// Set the hue channel's program.
    SetHueAnimation(u8),
    /// Set the brightness channel's program.
    SetBrightnessAnimation(u8),
    /// Load custom terms into a channel and run them under `kind`.
    Load {
        channel: ChannelId,
        kind: FunctionKind,
        terms: Vec<PeriodicTerm, N>,
    },
    /// Restart both channels from phase zero.
    ResetTimers,
    /// Set both channels' speed multiplier.
    SetSpeed(f32),
    /// Set the static color from RGB.
    SetRgb(Rgb8),
    /// Set the static color from HSV.
    SetHsv(Hsv8),
    /// Set the static color to a black body color.
    SetTemperature { kelvin: u16, brightness: u8 },
}
