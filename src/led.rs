//! Hardware abstraction for RGB LEDs.
//!
//! Implement [`RgbLed`] for your driver (PWM, GPIO, SPI, ...). Wiring variants are
//! adapters around any driver rather than separate driver types.

use palette::Srgb;

/// Trait for abstracting RGB LED hardware.
pub trait RgbLed {
    /// Sets the LED to the specified 8-bit color.
    ///
    /// Implementations convert to their native format (PWM duty cycles, GPIO
    /// levels) and handle hardware errors internally. This method cannot fail.
    fn set_color(&mut self, color: Srgb<u8>);
}

impl<L: RgbLed + ?Sized> RgbLed for &mut L {
    fn set_color(&mut self, color: Srgb<u8>) {
        (**self).set_color(color);
    }
}

/// Inverts every channel for common-anode wiring, where a low output lights the LED.
#[derive(Debug)]
pub struct CommonAnode<L> {
    led: L,
}

impl<L: RgbLed> CommonAnode<L> {
    pub fn new(led: L) -> Self {
        Self { led }
    }

    /// Returns the wrapped driver.
    pub fn into_inner(self) -> L {
        self.led
    }

    pub fn inner(&self) -> &L {
        &self.led
    }
}

impl<L: RgbLed> RgbLed for CommonAnode<L> {
    fn set_color(&mut self, color: Srgb<u8>) {
        self.led.set_color(Srgb::new(
            u8::MAX - color.red,
            u8::MAX - color.green,
            u8::MAX - color.blue,
        ));
    }
}

/// Reduces every channel to fully on or off, for LEDs on plain GPIO pins.
///
/// A channel is on from [`Digital::THRESHOLD`] upward.
#[derive(Debug)]
pub struct Digital<L> {
    led: L,
}

impl<L: RgbLed> Digital<L> {
    /// Smallest channel level that switches the output on.
    pub const THRESHOLD: u8 = 128;

    pub fn new(led: L) -> Self {
        Self { led }
    }

    /// Returns the wrapped driver.
    pub fn into_inner(self) -> L {
        self.led
    }

    pub fn inner(&self) -> &L {
        &self.led
    }
}

impl<L: RgbLed> RgbLed for Digital<L> {
    fn set_color(&mut self, color: Srgb<u8>) {
        let level = |c: u8| if c >= Self::THRESHOLD { u8::MAX } else { 0 };
        self.led
            .set_color(Srgb::new(level(color.red), level(color.green), level(color.blue)));
    }
}
