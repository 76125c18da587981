//! A color cached in both RGB and HSV.
//!
//! Every setter writes one representation and recomputes the other before
//! returning, so both are valid at all times.

use crate::colors::{Hsv8, Rgb8, hsv_to_rgb, hue_in_range, rgb_to_hsv, temperature_to_rgb};
use palette::Srgb;

/// A color kept in sync between RGB and HSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    rgb: Rgb8,
    hsv: Hsv8,
}

impl Color {
    /// Black.
    pub const BLACK: Color = Color {
        rgb: Rgb8::new(0, 0, 0),
        hsv: Hsv8::new(0, 0, 0),
    };

    /// Creates a color from RGB components.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        let mut color = Self::BLACK;
        color.set_rgb(red, green, blue);
        color
    }

    /// Creates a color from HSV components. The hue is wrapped into `[0, 359]`.
    pub fn from_hsv(hue: i32, saturation: u8, value: u8) -> Self {
        let mut color = Self::BLACK;
        color.set_hsv(hue, saturation, value);
        color
    }

    /// Creates a color from a packed `0xBBGGRR` integer.
    pub fn from_packed(color: u32) -> Self {
        let mut out = Self::BLACK;
        out.set_packed(color);
        out
    }

    #[inline]
    fn sync_hsv(&mut self) {
        self.hsv = rgb_to_hsv(self.rgb.red, self.rgb.green, self.rgb.blue);
    }

    #[inline]
    fn sync_rgb(&mut self) {
        self.rgb = hsv_to_rgb(self.hsv.hue, self.hsv.saturation, self.hsv.value);
    }

    // RGB setters

    /// Sets all RGB components.
    pub fn set_rgb(&mut self, red: u8, green: u8, blue: u8) {
        self.rgb = Rgb8::new(red, green, blue);
        self.sync_hsv();
    }

    /// Sets the red component.
    pub fn set_red(&mut self, red: u8) {
        self.rgb.red = red;
        self.sync_hsv();
    }

    /// Sets the green component.
    pub fn set_green(&mut self, green: u8) {
        self.rgb.green = green;
        self.sync_hsv();
    }

    /// Sets the blue component.
    pub fn set_blue(&mut self, blue: u8) {
        self.rgb.blue = blue;
        self.sync_hsv();
    }

    /// Copies an RGB triple.
    pub fn set_from_rgb(&mut self, rgb: Rgb8) {
        self.set_rgb(rgb.red, rgb.green, rgb.blue);
    }

    /// Sets RGB from a packed `0xBBGGRR` integer.
    pub fn set_packed(&mut self, color: u32) {
        self.set_from_rgb(Rgb8::from_packed(color));
    }

    /// Sets RGB to a black body color at `kelvin`, scaled by `brightness`.
    pub fn set_temperature(&mut self, kelvin: u16, brightness: u8) {
        self.rgb = temperature_to_rgb(kelvin, brightness);
        self.sync_hsv();
    }

    /// Sets RGB to a black body color at `kelvin`, keeping the current brightness.
    pub fn set_temperature_kelvin(&mut self, kelvin: u16) {
        self.set_temperature(kelvin, self.hsv.value);
    }

    // HSV setters

    /// Sets all HSV components. The hue is wrapped into `[0, 359]`.
    pub fn set_hsv(&mut self, hue: i32, saturation: u8, value: u8) {
        self.hsv = Hsv8::new(hue_in_range(hue), saturation, value);
        self.sync_rgb();
    }

    /// Copies an HSV triple. The hue is wrapped into `[0, 359]`.
    pub fn set_from_hsv(&mut self, hsv: Hsv8) {
        self.set_hsv(hsv.hue as i32, hsv.saturation, hsv.value);
    }

    /// Sets the hue in degrees, wrapped into `[0, 359]`.
    pub fn set_hue(&mut self, hue: i32) {
        self.hsv.hue = hue_in_range(hue);
        self.sync_rgb();
    }

    /// Sets the saturation.
    pub fn set_saturation(&mut self, saturation: u8) {
        self.hsv.saturation = saturation;
        self.sync_rgb();
    }

    /// Sets the brightness (HSV value).
    pub fn set_brightness(&mut self, brightness: u8) {
        self.hsv.value = brightness;
        self.sync_rgb();
    }

    /// Alias of [`set_brightness`](Self::set_brightness).
    #[inline]
    pub fn set_value(&mut self, value: u8) {
        self.set_brightness(value);
    }

    // Getters

    #[inline]
    pub fn red(&self) -> u8 {
        self.rgb.red
    }

    #[inline]
    pub fn green(&self) -> u8 {
        self.rgb.green
    }

    #[inline]
    pub fn blue(&self) -> u8 {
        self.rgb.blue
    }

    /// Hue in degrees, `[0, 359]`.
    #[inline]
    pub fn hue(&self) -> u16 {
        self.hsv.hue
    }

    #[inline]
    pub fn saturation(&self) -> u8 {
        self.hsv.saturation
    }

    #[inline]
    pub fn brightness(&self) -> u8 {
        self.hsv.value
    }

    /// Alias of [`brightness`](Self::brightness).
    #[inline]
    pub fn value(&self) -> u8 {
        self.hsv.value
    }

    /// Packs RGB into a `0xBBGGRR` integer.
    #[inline]
    pub fn to_int(&self) -> u32 {
        self.rgb.to_int()
    }

    #[inline]
    pub fn to_rgb(&self) -> Rgb8 {
        self.rgb
    }

    #[inline]
    pub fn to_hsv(&self) -> Hsv8 {
        self.hsv
    }

    /// RGB as a `palette` color, for drivers.
    #[inline]
    pub fn to_srgb(&self) -> Srgb<u8> {
        self.rgb.into()
    }
}

impl From<Rgb8> for Color {
    fn from(rgb: Rgb8) -> Self {
        Self::from_rgb(rgb.red, rgb.green, rgb.blue)
    }
}

impl From<Hsv8> for Color {
    fn from(hsv: Hsv8) -> Self {
        let mut color = Self::BLACK;
        color.set_from_hsv(hsv);
        color
    }
}

impl From<Color> for Srgb<u8> {
    fn from(color: Color) -> Self {
        color.to_srgb()
    }
}
