//! Single-period waveform shapes and unit-circle helpers.
//!
//! Every shape takes an angle in radians and the shape parameter `k` in `[0, 1]`.
//! The angle is reduced to a phase `p` in `[0, 1)` first, so all shapes repeat
//! every `2π`. Apart from [`square`], shapes are unipolar in `[0, 1]`.

use crate::types::FunctionKind;
use core::f32::consts::{PI, TAU};
use libm::{fabsf, sinf, truncf};

/// Default shape parameter: symmetric duty cycle.
pub const DEFAULT_SHAPE_PARAM: f32 = 0.5;

/// Maps any finite `x` into `[0, 1)`.
///
/// The truncated integer part is removed and negative remainders are shifted
/// up by one. Non-finite input maps to `0.0`.
#[inline]
pub fn wrap_unit(x: f32) -> f32 {
    if !x.is_finite() {
        return 0.0;
    }
    let mut f = frac(x);
    if f < 0.0 {
        f += 1.0;
    }
    // -tiny + 1.0 rounds to exactly 1.0
    if f >= 1.0 { 0.0 } else { f }
}

/// Fractional part keeping the sign of `x`: `x - trunc(x)`.
#[inline]
pub fn frac(x: f32) -> f32 {
    x - truncf(x)
}

/// Folds negative half-cycles up: `|x|`.
#[inline]
pub fn positive_wave(x: f32) -> f32 {
    fabsf(x)
}

#[inline]
fn phase(angle: f32) -> f32 {
    wrap_unit(angle / TAU)
}

/// Rising ramp from 0 to 1.
pub fn sawtooth(angle: f32) -> f32 {
    phase(angle)
}

/// Falling ramp from 1 to 0.
pub fn inverse_sawtooth(angle: f32) -> f32 {
    1.0 - phase(angle)
}

/// Triangle rising to 1 at phase `k` and falling back to 0.
pub fn triangular(angle: f32, k: f32) -> f32 {
    let k = k.clamp(0.0, 1.0);
    let p = phase(angle);
    if p < k { p / k } else { (1.0 - p) / (1.0 - k) }
}

/// `+1` for the first `k` of the period, `-1` for the rest.
pub fn square(angle: f32, k: f32) -> f32 {
    if phase(angle) < k { 1.0 } else { -1.0 }
}

/// `1` for the first `k` of the period, `0` for the rest.
pub fn rectangular(angle: f32, k: f32) -> f32 {
    if phase(angle) < k { 1.0 } else { 0.0 }
}

/// Jumps to 1 and decays linearly to 0 over the first `k` of the period.
pub fn pulse(angle: f32, k: f32) -> f32 {
    let p = phase(angle);
    if p < k { 1.0 - p / k } else { 0.0 }
}

/// Half-sine bump over the first `k` of the period.
pub fn sine_pulse(angle: f32, k: f32) -> f32 {
    let p = phase(angle);
    if p < k { sinf(PI * p / k) } else { 0.0 }
}

/// Trapezoid: ramps up over `k/2`, holds 1, ramps down over the last `k/2`.
pub fn rhomboidal(angle: f32, k: f32) -> f32 {
    let ramp = k.clamp(0.0, 1.0) / 2.0;
    let p = phase(angle);
    if p < ramp {
        p / ramp
    } else if p < 1.0 - ramp {
        1.0
    } else {
        (1.0 - p) / ramp
    }
}

/// Evaluates the single-waveform `kind` at `angle`.
///
/// Sum kinds and [`FunctionKind::None`] have no single-period shape and return 0.
pub fn shape(kind: FunctionKind, angle: f32, k: f32) -> f32 {
    match kind {
        FunctionKind::Triangular => triangular(angle, k),
        FunctionKind::Square => square(angle, k),
        FunctionKind::Pulse => pulse(angle, k),
        FunctionKind::Rectangular => rectangular(angle, k),
        FunctionKind::Sawtooth => sawtooth(angle),
        FunctionKind::InverseSawtooth => inverse_sawtooth(angle),
        FunctionKind::Rhomboidal => rhomboidal(angle, k),
        FunctionKind::SinePulse => sine_pulse(angle, k),
        FunctionKind::None
        | FunctionKind::CosineSum
        | FunctionKind::SineSum
        | FunctionKind::CircleSum => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn wrap_unit_stays_in_unit_interval() {
        let inputs = [
            0.0, 0.25, 0.999, 1.0, 1.5, 2.0, 359.7, -0.25, -1.0, -1.5, -2.75, -1e-9, 1e7,
            -1e7, f32::MAX, f32::MIN,
        ];
        for x in inputs {
            let w = wrap_unit(x);
            assert!((0.0..1.0).contains(&w), "wrap_unit({}) = {}", x, w);
        }
    }

    #[test]
    fn wrap_unit_keeps_fraction() {
        assert!(close(wrap_unit(1.25), 0.25));
        assert!(close(wrap_unit(-0.25), 0.75));
        assert!(close(wrap_unit(-1.75), 0.25));
        assert_eq!(wrap_unit(f32::NAN), 0.0);
        assert_eq!(wrap_unit(f32::INFINITY), 0.0);
    }

    #[test]
    fn frac_keeps_sign() {
        assert!(close(frac(2.5), 0.5));
        assert!(close(frac(-2.5), -0.5));
    }

    #[test]
    fn triangular_peaks_at_k() {
        assert!(close(triangular(0.0, 0.5), 0.0));
        assert!(close(triangular(TAU * 0.25, 0.5), 0.5));
        assert!(close(triangular(TAU * 0.5, 0.5), 1.0));
        assert!(close(triangular(TAU * 0.75, 0.5), 0.5));
        assert!(close(triangular(TAU * 0.2, 0.2), 1.0));
    }

    #[test]
    fn triangular_tolerates_degenerate_k() {
        assert!(triangular(TAU * 0.3, 0.0).is_finite());
        assert!(triangular(TAU * 0.3, 1.0).is_finite());
    }

    #[test]
    fn duty_cycle_shapes_switch_at_k() {
        assert_eq!(square(TAU * 0.1, 0.25), 1.0);
        assert_eq!(square(TAU * 0.3, 0.25), -1.0);
        assert_eq!(rectangular(TAU * 0.1, 0.25), 1.0);
        assert_eq!(rectangular(TAU * 0.3, 0.25), 0.0);
    }

    #[test]
    fn pulses_are_zero_outside_window() {
        assert!(close(pulse(0.0, 0.5), 1.0));
        assert!(close(pulse(TAU * 0.25, 0.5), 0.5));
        assert_eq!(pulse(TAU * 0.75, 0.5), 0.0);
        assert!(close(sine_pulse(TAU * 0.25, 0.5), 1.0));
        assert_eq!(sine_pulse(TAU * 0.75, 0.5), 0.0);
    }

    #[test]
    fn ramps_cover_the_period() {
        assert!(close(sawtooth(TAU * 0.25), 0.25));
        assert!(close(inverse_sawtooth(TAU * 0.25), 0.75));
        assert!(close(sawtooth(TAU * 1.25), 0.25));
    }

    #[test]
    fn rhomboidal_holds_between_ramps() {
        assert!(close(rhomboidal(TAU * 0.125, 0.5), 0.5));
        assert!(close(rhomboidal(TAU * 0.5, 0.5), 1.0));
        assert!(close(rhomboidal(TAU * 0.875, 0.5), 0.5));
        assert_eq!(rhomboidal(TAU * 0.5, 0.0), 1.0);
    }

    #[test]
    fn sum_kinds_have_no_shape() {
        assert_eq!(shape(FunctionKind::CosineSum, 1.0, 0.5), 0.0);
        assert_eq!(shape(FunctionKind::None, 1.0, 0.5), 0.0);
    }

    #[test]
    fn positive_wave_folds_negative_values() {
        assert_eq!(positive_wave(-0.5), 0.5);
        assert_eq!(positive_wave(0.5), 0.5);
    }
}
