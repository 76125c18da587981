//! Hue and brightness animation over a single [`Color`].
//!
//! Provides [`ColorAnimator`], which layers a hue channel and a brightness
//! channel on one color and produces a new color on every [`ColorAnimator::update`].
//! The two channels toggle independently.

use crate::channel::{AnimationChannel, NO_ANIMATION, Preset};
use crate::color::Color;
use crate::colors::{BRIGHTNESS_MAX, HUE_MAX, Hsv8, Rgb8, SATURATION_MAX, hue_in_range};
use crate::command::{AnimatorAction, ChannelId};
use crate::led::RgbLed;
use crate::time::{TimeInstant, TimeSource};
use crate::types::WaveformError;

/// Drives a color's hue and brightness with two animation channels.
///
/// While the hue channel runs, the displayed hue is the static hue captured when
/// the channel started plus the channel output. While the brightness channel runs,
/// its output is the displayed brightness. Saturation is held at maximum by
/// [`update`](Self::update).
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `N` - Capacity of each channel's owned parameter buffer
pub struct ColorAnimator<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> {
    color: Color,
    hue: AnimationChannel<'t, I, T, N>,
    brightness: AnimationChannel<'t, I, T, N>,
    previous_hue: u16,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> ColorAnimator<'t, I, T, N> {
    /// Creates an idle animator over black with default amplitudes.
    pub fn new(time_source: &'t T) -> Self {
        AnimatorBuilder::new(time_source).build()
    }

    /// Creates a builder for configuring amplitudes, speed and the initial color.
    pub fn builder(time_source: &'t T) -> AnimatorBuilder<'t, I, T, N> {
        AnimatorBuilder::new(time_source)
    }

    /// Handles an animator action by dispatching to the appropriate method.
    ///
    /// # Errors
    /// * `CapacityExceeded` - only from [`AnimatorAction::Load`]
    pub fn handle_action(&mut self, action: AnimatorAction<N>) -> Result<(), WaveformError> {
        match action {
            AnimatorAction::SetAnimation(id) => self.set_animation(id),
            AnimatorAction::SetHueAnimation(id) => self.set_hue_animation(id),
            AnimatorAction::SetBrightnessAnimation(id) => self.set_brightness_animation(id),
            AnimatorAction::Load {
                channel,
                kind,
                terms,
            } => {
                self.channel_mut(channel)
                    .engine_mut()
                    .set_periodic_data(&terms)?;
                match channel {
                    ChannelId::Hue => self.set_hue_animation(kind.id()),
                    ChannelId::Brightness => self.set_brightness_animation(kind.id()),
                }
                self.channel_mut(channel).reset_timer();
            }
            AnimatorAction::ResetTimers => self.reset_timers(),
            AnimatorAction::SetSpeed(speed) => self.set_speed(speed),
            AnimatorAction::SetRgb(rgb) => self.set_rgb(rgb.red, rgb.green, rgb.blue),
            AnimatorAction::SetHsv(hsv) => {
                self.set_hsv(hsv.hue as i32, hsv.saturation, hsv.value)
            }
            AnimatorAction::SetTemperature { kelvin, brightness } => {
                self.color.set_temperature(kelvin, brightness);
                self.store_static_hue();
            }
        }
        Ok(())
    }

    /// Selects an animation.
    ///
    /// * [`NO_ANIMATION`] stops both channels, restores the static hue and sets
    ///   full brightness.
    /// * [`Preset::Beating`] starts the brightness channel and leaves the hue alone.
    /// * Any other id starts the hue channel with that program.
    pub fn set_animation(&mut self, id: u8) {
        debug!("set animation {}", id);

        if id == NO_ANIMATION {
            self.set_hue_animation(NO_ANIMATION);
            self.set_brightness_animation(NO_ANIMATION);
        } else if id == Preset::Beating.id() {
            self.set_brightness_animation(id);
        } else {
            self.set_hue_animation(id);
        }
    }

    /// Sets the hue channel's program.
    ///
    /// Starting the channel captures the current hue as the static hue and resets
    /// the channel's timer. Switching between programs keeps the captured hue.
    /// Requesting the running program does nothing. [`NO_ANIMATION`] stops the
    /// channel and restores the static hue.
    pub fn set_hue_animation(&mut self, id: u8) {
        if id == NO_ANIMATION {
            self.hue.set_program(NO_ANIMATION);
            self.color.set_hue(self.previous_hue as i32);
            return;
        }
        if id == self.hue.program() {
            return;
        }

        if !self.hue.is_animating() {
            self.previous_hue = self.color.hue();
        }
        self.hue.set_program(id);
        self.hue.reset_timer();
    }

    /// Sets the brightness channel's program.
    ///
    /// Starting a program resets the channel's timer. Requesting the running
    /// program does nothing. [`NO_ANIMATION`] stops the channel and sets full
    /// brightness.
    pub fn set_brightness_animation(&mut self, id: u8) {
        if id == NO_ANIMATION {
            self.brightness.set_program(NO_ANIMATION);
            self.color.set_brightness(BRIGHTNESS_MAX);
            return;
        }
        if id == self.brightness.program() {
            return;
        }

        self.brightness.set_program(id);
        self.brightness.reset_timer();
    }

    /// Samples both channels and writes the resulting color.
    ///
    /// Call once per tick. The hue wraps into `[0, 359]`, and the brightness
    /// output is clamped to `[0, 255]`.
    pub fn update(&mut self) {
        let hue = if self.hue.is_animating() {
            // wrap first: the saturating cast can land on i32::MAX
            self.previous_hue as i32 + hue_in_range(self.hue.output() as i32) as i32
        } else {
            self.color.hue() as i32
        };

        let brightness = if self.brightness.is_animating() {
            clamp_u8(self.brightness.output())
        } else {
            BRIGHTNESS_MAX
        };

        self.color.set_hsv(hue, SATURATION_MAX, brightness);
    }

    /// Updates and writes the color to `led`.
    pub fn update_led<L: RgbLed>(&mut self, led: &mut L) {
        self.update();
        led.set_color(self.color.to_srgb());
    }

    /// Sets the brightness from the beat preset on the brightness channel's timer.
    ///
    /// Returns `true` while the brightness is above 1, which lets callers fade out
    /// by polling until it returns `false`.
    pub fn beat_to_zero(&mut self) -> bool {
        let level = clamp_u8(self.brightness.preset_output(Preset::Beating));
        self.color.set_brightness(level);
        self.color.brightness() > 1
    }

    /// Restarts both channels from phase zero.
    pub fn reset_timers(&mut self) {
        self.hue.reset_timer();
        self.brightness.reset_timer();
    }

    /// Sets both channels' speed multiplier.
    pub fn set_speed(&mut self, speed: f32) {
        self.hue.set_speed(speed);
        self.brightness.set_speed(speed);
    }

    // Static color

    /// Sets the static color from RGB.
    ///
    /// While hue animation runs, the next [`update`](Self::update) overrides the hue.
    pub fn set_rgb(&mut self, red: u8, green: u8, blue: u8) {
        self.color.set_rgb(red, green, blue);
        self.store_static_hue();
    }

    /// Sets the static color from HSV.
    pub fn set_hsv(&mut self, hue: i32, saturation: u8, value: u8) {
        self.color.set_hsv(hue, saturation, value);
        self.store_static_hue();
    }

    /// Sets the static hue.
    pub fn set_hue(&mut self, hue: i32) {
        self.color.set_hue(hue);
        self.store_static_hue();
    }

    fn store_static_hue(&mut self) {
        if !self.hue.is_animating() {
            self.previous_hue = self.color.hue();
        }
    }

    // Accessors

    /// Returns the current color.
    #[inline]
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Returns the hue restored when hue animation stops.
    #[inline]
    pub fn previous_hue(&self) -> u16 {
        self.previous_hue
    }

    #[inline]
    pub fn is_hue_animating(&self) -> bool {
        self.hue.is_animating()
    }

    #[inline]
    pub fn is_brightness_animating(&self) -> bool {
        self.brightness.is_animating()
    }

    /// True if either channel is running.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.is_hue_animating() || self.is_brightness_animating()
    }

    #[inline]
    pub fn hue_channel(&self) -> &AnimationChannel<'t, I, T, N> {
        &self.hue
    }

    #[inline]
    pub fn hue_channel_mut(&mut self) -> &mut AnimationChannel<'t, I, T, N> {
        &mut self.hue
    }

    #[inline]
    pub fn brightness_channel(&self) -> &AnimationChannel<'t, I, T, N> {
        &self.brightness
    }

    #[inline]
    pub fn brightness_channel_mut(&mut self) -> &mut AnimationChannel<'t, I, T, N> {
        &mut self.brightness
    }

    fn channel_mut(&mut self, channel: ChannelId) -> &mut AnimationChannel<'t, I, T, N> {
        match channel {
            ChannelId::Hue => &mut self.hue,
            ChannelId::Brightness => &mut self.brightness,
        }
    }
}

#[inline]
fn clamp_u8(value: f32) -> u8 {
    value.clamp(0.0, BRIGHTNESS_MAX as f32) as u8
}

/// Builder for [`ColorAnimator`].
pub struct AnimatorBuilder<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> {
    time_source: &'t T,
    hue_amplitude: f32,
    brightness_amplitude: f32,
    speed: f32,
    initial_color: Color,
    _instant: core::marker::PhantomData<I>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> AnimatorBuilder<'t, I, T, N> {
    /// Creates a builder with hue amplitude 359, brightness amplitude 255, speed
    /// 1.0 and a black initial color.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            hue_amplitude: HUE_MAX as f32,
            brightness_amplitude: BRIGHTNESS_MAX as f32,
            speed: 1.0,
            initial_color: Color::BLACK,
            _instant: core::marker::PhantomData,
        }
    }

    /// Degrees of hue swept by a unit of hue channel output.
    pub fn hue_amplitude(mut self, amplitude: f32) -> Self {
        self.hue_amplitude = amplitude;
        self
    }

    /// Brightness reached by a unit of brightness channel output.
    pub fn brightness_amplitude(mut self, amplitude: f32) -> Self {
        self.brightness_amplitude = amplitude;
        self
    }

    /// Speed multiplier of both channels.
    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Static color before any animation runs.
    pub fn initial_color(mut self, color: Color) -> Self {
        self.initial_color = color;
        self
    }

    /// Static color from RGB.
    pub fn initial_rgb(self, rgb: Rgb8) -> Self {
        self.initial_color(Color::from(rgb))
    }

    /// Static color from HSV.
    pub fn initial_hsv(self, hsv: Hsv8) -> Self {
        self.initial_color(Color::from(hsv))
    }

    /// Builds the animator. Both channels start idle.
    pub fn build(self) -> ColorAnimator<'t, I, T, N> {
        let mut hue = AnimationChannel::new(self.time_source, self.hue_amplitude);
        let mut brightness = AnimationChannel::new(self.time_source, self.brightness_amplitude);
        hue.set_speed(self.speed);
        brightness.set_speed(self.speed);

        ColorAnimator {
            color: self.initial_color,
            hue,
            brightness,
            previous_hue: self.initial_color.hue(),
        }
    }
}
