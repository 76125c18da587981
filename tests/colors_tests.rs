//! Integration tests for colors and Color

mod common;
use common::*;

use palette::{FromColor, Hsv, Srgb};
use rgb_waveform::colors::{self, temperature, tone};
use rgb_waveform::{Color, Hsv8, Rgb8};

// ============================================================================
// HSV <-> RGB
// ============================================================================

#[test]
fn rgb_to_hsv_finds_primary_hues() {
    assert_eq!(colors::rgb_to_hsv(255, 0, 0), Hsv8::new(0, 255, 255));
    assert_eq!(colors::rgb_to_hsv(0, 255, 0), Hsv8::new(120, 255, 255));
    assert_eq!(colors::rgb_to_hsv(0, 0, 255), Hsv8::new(240, 255, 255));
}

#[test]
fn rgb_to_hsv_finds_secondary_hues() {
    assert_eq!(colors::rgb_to_hsv(255, 255, 0).hue, tone::YELLOW);
    assert_eq!(colors::rgb_to_hsv(0, 255, 255).hue, tone::CYAN);
    assert_eq!(colors::rgb_to_hsv(255, 0, 255).hue, tone::MAGENTA);
}

#[test]
fn grays_have_no_hue_or_saturation() {
    for level in [0u8, 1, 77, 128, 254, 255] {
        assert_eq!(
            colors::rgb_to_hsv(level, level, level),
            Hsv8::new(0, 0, level)
        );
        assert_eq!(
            colors::hsv_to_rgb(123, 0, level),
            Rgb8::new(level, level, level)
        );
    }
}

#[test]
fn hsv_to_rgb_creates_primary_and_secondary_colors() {
    assert_eq!(colors::hsv_to_rgb(0, 255, 255), Rgb8::new(255, 0, 0));
    assert_eq!(colors::hsv_to_rgb(60, 255, 255), Rgb8::new(255, 255, 0));
    assert_eq!(colors::hsv_to_rgb(120, 255, 255), Rgb8::new(0, 255, 0));
    assert_eq!(colors::hsv_to_rgb(180, 255, 255), Rgb8::new(0, 255, 255));
    assert_eq!(colors::hsv_to_rgb(240, 255, 255), Rgb8::new(0, 0, 255));
    assert_eq!(colors::hsv_to_rgb(300, 255, 255), Rgb8::new(255, 0, 255));
}

#[test]
fn hsv_to_rgb_takes_hue_modulo_360() {
    assert_eq!(colors::hsv_to_rgb(360, 255, 255), colors::hsv_to_rgb(0, 255, 255));
    assert_eq!(colors::hsv_to_rgb(480, 255, 255), colors::hsv_to_rgb(120, 255, 255));
}

#[test]
fn hsv_to_rgb_matches_palette() {
    for hue in (0..360u16).step_by(7) {
        for (saturation, value) in [(255u8, 255u8), (128, 200), (40, 90)] {
            let ours: Srgb<u8> = colors::hsv_to_rgb(hue, saturation, value).into();

            let hsv: Hsv = Hsv::new(
                hue as f32,
                saturation as f32 / 255.0,
                value as f32 / 255.0,
            );
            let theirs: Srgb<f32> = Srgb::from_color(hsv);
            let theirs: Srgb<u8> = theirs.into_format();

            assert!(
                max_channel_delta(ours, theirs) <= 1,
                "hsv({}, {}, {}): {:?} vs {:?}",
                hue,
                saturation,
                value,
                ours,
                theirs
            );
        }
    }
}

#[test]
fn rgb_hsv_round_trip_stays_within_two_counts() {
    for red in (0..=255u16).step_by(5) {
        for green in (0..=255u16).step_by(5) {
            for blue in (0..=255u16).step_by(5) {
                let original = Rgb8::new(red as u8, green as u8, blue as u8);
                let back = original.to_hsv().to_rgb();
                let delta = max_channel_delta(original.into(), back.into());
                assert!(delta <= 2, "{:?} -> {:?}", original, back);
            }
        }
    }
}

// ============================================================================
// Hue wrapping
// ============================================================================

#[test]
fn hue_in_range_wraps_every_integer() {
    assert_eq!(colors::hue_in_range(0), 0);
    assert_eq!(colors::hue_in_range(359), 359);
    assert_eq!(colors::hue_in_range(360), 0);
    assert_eq!(colors::hue_in_range(725), 5);
    assert_eq!(colors::hue_in_range(-1), 359);
    assert_eq!(colors::hue_in_range(-360), 0);
    assert_eq!(colors::hue_in_range(-725), 355);

    for hue in [i32::MIN, i32::MIN + 1, i32::MAX, i32::MAX - 1] {
        assert!(colors::hue_in_range(hue) <= colors::HUE_MAX);
    }
}

// ============================================================================
// Temperature
// ============================================================================

#[test]
fn low_temperature_is_deep_orange() {
    let rgb = colors::temperature_to_rgb(temperature::LOW_LIMIT, 255);
    assert_eq!(rgb.red, 255);
    assert!((60..=75).contains(&rgb.green), "green = {}", rgb.green);
    assert_eq!(rgb.blue, 0);
}

#[test]
fn high_temperature_is_bluish() {
    let rgb = colors::temperature_to_rgb(temperature::BLUE_SKY, 255);
    assert_eq!(rgb.blue, 255);
    assert!(rgb.red < rgb.green);
    assert!(rgb.green < rgb.blue);
}

#[test]
fn daylight_white_is_nearly_neutral() {
    let rgb = colors::temperature_to_rgb(6600, 255);
    assert!(rgb.red >= 250);
    assert!(rgb.green >= 250);
    assert!(rgb.blue >= 245);
}

#[test]
fn temperature_scales_with_brightness() {
    assert_eq!(
        colors::temperature_to_rgb(temperature::LOW_LIMIT, 128).red,
        128
    );
    assert_eq!(
        colors::temperature_to_rgb(temperature::DAYLIGHT, 0),
        Rgb8::new(0, 0, 0)
    );
}

#[test]
fn temperature_handles_extremes() {
    // degenerate inputs still produce clamped channels
    let _ = colors::temperature_to_rgb(0, 255);
    let _ = colors::temperature_to_rgb(u16::MAX, 255);
}

// ============================================================================
// Progression
// ============================================================================

#[test]
fn progression_interpolates_linearly() {
    let from = Rgb8::new(0, 0, 0);
    let to = Rgb8::new(200, 100, 50);

    assert_eq!(Rgb8::progression(50, 0, 100, from, to), Rgb8::new(100, 50, 25));
    assert_eq!(Rgb8::progression100(25, to, from), Rgb8::new(150, 75, 38));
    assert_eq!(from.progress_to(15, 10, 20, to), Rgb8::new(100, 50, 25));
}

#[test]
fn progression_clamps_outside_the_window() {
    let from = Rgb8::new(10, 20, 30);
    let to = Rgb8::new(200, 100, 50);

    assert_eq!(Rgb8::progression(5, 10, 20, from, to), from);
    assert_eq!(Rgb8::progression(10, 10, 20, from, to), from);
    assert_eq!(Rgb8::progression(20, 10, 20, from, to), to);
    assert_eq!(Rgb8::progression(500, 10, 20, from, to), to);
}

// ============================================================================
// Color
// ============================================================================

#[test]
fn color_keeps_both_representations_in_sync() {
    let mut color = Color::from_rgb(255, 0, 0);
    assert_eq!(color.hue(), 0);
    assert_eq!(color.saturation(), 255);
    assert_eq!(color.brightness(), 255);

    color.set_green(255);
    assert_eq!(color.hue(), tone::YELLOW);

    color.set_red(0);
    assert_eq!(color.hue(), tone::GREEN);

    color.set_blue(255);
    assert_eq!(color.hue(), tone::CYAN);

    color.set_hue(tone::BLUE as i32);
    assert_eq!(color.to_rgb(), Rgb8::new(0, 0, 255));

    color.set_saturation(0);
    assert_eq!(color.to_rgb(), Rgb8::new(255, 255, 255));

    color.set_brightness(0);
    assert_eq!(color.to_rgb(), Rgb8::new(0, 0, 0));
}

#[test]
fn color_wraps_hue_on_every_setter() {
    let color = Color::from_hsv(-120, 255, 255);
    assert_eq!(color.hue(), 240);
    assert_eq!(color.to_rgb(), Rgb8::new(0, 0, 255));

    let mut color = Color::BLACK;
    color.set_hue(720 + 120);
    assert_eq!(color.hue(), 120);

    color.set_hsv(i32::MIN, 255, 255);
    assert!(color.hue() <= colors::HUE_MAX);
}

#[test]
fn color_brightness_keeps_hue() {
    let mut color = Color::from_hsv(tone::ORANGE as i32, 255, 255);
    color.set_value(128);

    assert_eq!(color.hue(), tone::ORANGE);
    assert_eq!(color.value(), 128);
    assert_eq!(color.red(), 128);
    assert_eq!(color.blue(), 0);
}

#[test]
fn color_packs_and_unpacks() {
    let color = Color::from_packed(0x00_80_FF);
    assert_eq!(color.to_rgb(), Rgb8::new(0xFF, 0x80, 0x00));
    assert_eq!(color.to_int(), 0x00_80_FF);

    let mut other = Color::BLACK;
    other.set_packed(color.to_int());
    assert_eq!(other, color);
}

#[test]
fn color_temperature_updates_hsv() {
    let mut color = Color::BLACK;
    color.set_temperature(temperature::LOW_LIMIT, 255);

    assert_eq!(color.red(), 255);
    assert_eq!(color.blue(), 0);
    assert_eq!(color.brightness(), 255);
    assert!(color.hue() > 0 && color.hue() < tone::YELLOW);

    color.set_brightness(100);
    color.set_temperature_kelvin(temperature::BLUE_SKY);
    assert_eq!(color.blue(), 100);
    assert_eq!(color.brightness(), 100);
}

#[test]
fn color_converts_to_palette() {
    let color = Color::from(Rgb8::new(1, 2, 3));
    let srgb: Srgb<u8> = color.into();
    assert_eq!(srgb, Srgb::new(1, 2, 3));
    assert_eq!(Rgb8::from(srgb), color.to_rgb());

    let from_hsv = Color::from(Hsv8::new(tone::GREEN, 255, 255));
    assert_eq!(from_hsv.to_srgb(), Srgb::new(0, 255, 0));
}
