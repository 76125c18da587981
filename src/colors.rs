//! Color space conversion helpers.
//!
//! 8-bit RGB and integer-degree HSV value types, the conversions between them,
//! color temperature, and linear progression between two colors. All functions
//! are pure. Conversions round to the nearest integer, so an RGB → HSV → RGB round
//! trip may move a channel by a couple of counts: a one-degree hue step spans up
//! to 4.25 counts in the steepest sector.

use libm::{fabsf, fmodf, logf, powf};
use palette::Srgb;

/// Largest hue in degrees.
pub const HUE_MAX: u16 = 359;

/// Largest saturation.
pub const SATURATION_MAX: u8 = 255;

/// Largest brightness (HSV value).
pub const BRIGHTNESS_MAX: u8 = 255;

/// Named hues, in degrees.
pub mod tone {
    pub const RED: u16 = 0;
    pub const ORANGE: u16 = 30;
    pub const YELLOW: u16 = 60;
    pub const YELLOW_GREEN: u16 = 90;
    pub const GREEN: u16 = 120;
    pub const GREEN_BLUE: u16 = 150;
    pub const CYAN: u16 = 180;
    pub const AZURE: u16 = 210;
    pub const BLUE: u16 = 240;
    pub const VIOLET: u16 = 270;
    pub const MAGENTA: u16 = 300;
    pub const PINK: u16 = 330;

    /// Outside the hue circle. Marks "no hue" for callers that store white
    /// alongside hues in one `u16`.
    pub const WHITE: u16 = 0xFFFF;
}

/// Named color temperatures, in kelvin.
pub mod temperature {
    pub const LOW_LIMIT: u16 = 1000;
    pub const MATCH: u16 = 1200;
    pub const CANDLE: u16 = 1800;
    pub const SUNSET: u16 = 2000;
    pub const WARM: u16 = 2400;
    pub const TUNGSTEN_60W: u16 = 2750;
    pub const TUNGSTEN_120W: u16 = 3000;
    pub const NEUTRAL: u16 = 3500;
    pub const SUN_RISED: u16 = 3501;
    pub const FLUORESCENT: u16 = 4000;
    pub const FLASH: u16 = 5000;
    pub const DAYLIGHT: u16 = 5600;
    pub const CLOUDY: u16 = 6000;
    pub const COLD: u16 = 6500;
    pub const SHADE: u16 = 7000;
    pub const BLUE_SKY: u16 = 10000;
}

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb8 {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// An HSV triple with hue in degrees `[0, 359]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv8 {
    pub hue: u16,
    pub saturation: u8,
    pub value: u8,
}

impl Hsv8 {
    /// Creates an HSV triple. The hue is not wrapped.
    #[inline]
    pub const fn new(hue: u16, saturation: u8, value: u8) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Converts to RGB.
    #[inline]
    pub fn to_rgb(self) -> Rgb8 {
        hsv_to_rgb(self.hue, self.saturation, self.value)
    }
}

impl Rgb8 {
    /// Creates an RGB triple.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates an RGB triple scaled by `level / max_level`.
    ///
    /// A zero `max_level` yields black.
    pub fn scaled(red: u8, green: u8, blue: u8, level: u8, max_level: u8) -> Self {
        if max_level == 0 {
            return Self::default();
        }
        let scale = |c: u8| ((c as u16 * level as u16) / max_level as u16).min(255) as u8;
        Self::new(scale(red), scale(green), scale(blue))
    }

    /// Unpacks a `0xBBGGRR` integer.
    #[inline]
    pub const fn from_packed(color: u32) -> Self {
        Self::new(
            (color & 0xff) as u8,
            ((color >> 8) & 0xff) as u8,
            ((color >> 16) & 0xff) as u8,
        )
    }

    /// Packs into a `0xBBGGRR` integer.
    #[inline]
    pub const fn to_int(self) -> u32 {
        self.red as u32 | (self.green as u32) << 8 | (self.blue as u32) << 16
    }

    /// Largest component.
    #[inline]
    pub fn brightness(self) -> u8 {
        self.red.max(self.green).max(self.blue)
    }

    /// Scales the color so its largest component equals `max_value`.
    ///
    /// Black stays black.
    pub fn maximize(&mut self, max_value: u8) {
        let max_component = self.brightness();
        if max_component == 0 {
            return;
        }
        let scale = |c: u8| (c as u16 * max_value as u16 / max_component as u16) as u8;
        self.red = scale(self.red);
        self.green = scale(self.green);
        self.blue = scale(self.blue);
    }

    /// Converts to HSV.
    #[inline]
    pub fn to_hsv(self) -> Hsv8 {
        rgb_to_hsv(self.red, self.green, self.blue)
    }

    /// Converts from HSV.
    #[inline]
    pub fn from_hsv(hsv: Hsv8) -> Self {
        hsv.to_rgb()
    }

    /// Color of a black body at `kelvin`, scaled by `brightness / 255`.
    #[inline]
    pub fn from_temperature(kelvin: u16, brightness: u8) -> Self {
        temperature_to_rgb(kelvin, brightness)
    }

    /// Interpolates from `self` towards `end` as `progress` goes from `start` to
    /// `finish`.
    pub fn progress_to(self, progress: u32, start: u32, finish: u32, end: Rgb8) -> Self {
        Self::progression(progress, start, finish, self, end)
    }

    /// Component-wise linear interpolation from `from` to `to`.
    ///
    /// Returns `from` up to `start` and `to` from `finish` on.
    pub fn progression(progress: u32, start: u32, finish: u32, from: Rgb8, to: Rgb8) -> Self {
        if progress >= finish {
            return to;
        }
        if progress <= start {
            return from;
        }

        let done = (progress - start) as i64;
        let span = (finish - start) as i64;
        let lerp = |a: u8, b: u8| (a as i64 + (b as i64 - a as i64) * done / span) as u8;

        Self::new(
            lerp(from.red, to.red),
            lerp(from.green, to.green),
            lerp(from.blue, to.blue),
        )
    }

    /// [`progression`](Self::progression) over a percentage.
    #[inline]
    pub fn progression100(percent: u32, from: Rgb8, to: Rgb8) -> Self {
        Self::progression(percent, 0, 100, from, to)
    }
}

impl From<Srgb<u8>> for Rgb8 {
    fn from(color: Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

impl From<Rgb8> for Srgb<u8> {
    fn from(color: Rgb8) -> Self {
        Srgb::new(color.red, color.green, color.blue)
    }
}

/// Wraps any hue in degrees into `[0, 359]`.
#[inline]
pub fn hue_in_range(hue: i32) -> u16 {
    hue.rem_euclid(HUE_MAX as i32 + 1) as u16
}

#[inline]
fn to_channel(unit: f32) -> u8 {
    // float-to-int casts saturate
    (unit * 255.0 + 0.5) as u8
}

/// Converts HSV to RGB. The hue is taken modulo 360.
pub fn hsv_to_rgb(hue: u16, saturation: u8, value: u8) -> Rgb8 {
    let s = saturation as f32 / 255.0;
    let v = value as f32 / 255.0;
    let c = v * s;
    let h = (hue % 360) as f32 / 60.0;
    let x = c * (1.0 - fabsf(fmodf(h, 2.0) - 1.0));
    let m = v - c;

    let (r, g, b) = match h as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb8::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// Converts RGB to HSV.
///
/// Grays have hue 0 and saturation 0.
pub fn rgb_to_hsv(red: u8, green: u8, blue: u8) -> Hsv8 {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    if max == min {
        return Hsv8::new(0, 0, max);
    }

    let (r, g, b) = (red as f32, green as f32, blue as f32);
    let delta = (max - min) as f32;

    let hue = if max == red {
        let h = 60.0 * (g - b) / delta;
        if h < 0.0 { h + 360.0 } else { h }
    } else if max == green {
        60.0 * (b - r) / delta + 120.0
    } else {
        60.0 * (r - g) / delta + 240.0
    };

    let saturation = 255.0 * (1.0 - min as f32 / max as f32);

    Hsv8::new(
        (hue + 0.5) as u16 % 360,
        (saturation + 0.5) as u8,
        max,
    )
}

/// Approximates the color of a black body at `kelvin`.
///
/// Uses Tanner Helland's fit over `kelvin / 100`, valid for roughly 1000 K to
/// 40000 K. Each channel is clamped to `[0, 255]` and then scaled by
/// `brightness / 255`.
pub fn temperature_to_rgb(kelvin: u16, brightness: u8) -> Rgb8 {
    let temp = (kelvin as f32).clamp(0.0, 65500.0) / 100.0;

    let (r, g, b) = if temp > 66.0 {
        (
            329.69873 * powf(temp - 60.0, -0.13320476),
            288.12216 * powf(temp - 60.0, -0.07551485),
            255.0,
        )
    } else {
        let g = 99.4708 * logf(temp) - 161.11957;
        let b = if temp <= 19.0 {
            0.0
        } else {
            138.51773 * logf(temp - 10.0) - 305.0448
        };
        (255.0, g, b)
    };

    let scale = |c: f32| (c.clamp(0.0, 255.0) as u16 * brightness as u16 / 255) as u8;
    Rgb8::new(scale(r), scale(g), scale(b))
}
