//! Core types shared by the waveform engine and the animation layer.

/// One term of a periodic sum: `amplitude · f(frequency·t + phase)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeriodicTerm {
    /// Output scale of the term.
    pub amplitude: f32,

    /// Frequency in Hz. A zero frequency makes the term a constant offset.
    pub frequency: f32,

    /// Initial phase in radians.
    pub phase: f32,
}

impl PeriodicTerm {
    /// Creates a new periodic term.
    #[inline]
    pub const fn new(amplitude: f32, frequency: f32, phase: f32) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    /// A term that contributes nothing.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
}

/// Which evaluation rule a waveform engine applies to its periodic data.
///
/// The discriminants are stable ids: animation programs below 128 select a
/// function kind by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FunctionKind {
    /// Always evaluates to zero.
    #[default]
    None = 0,

    /// Sum of cosines over every term.
    CosineSum = 1,

    /// Sum of sines over every term.
    SineSum = 2,

    /// Sum of fractional ramps over every term.
    CircleSum = 3,

    /// Skewed triangle over the first term.
    Triangular = 4,

    /// Bipolar square wave with duty cycle `k` over the first term.
    Square = 5,

    /// Linearly decaying pulse of width `k` over the first term.
    Pulse = 6,

    /// Unipolar on/off wave with duty cycle `k` over the first term.
    Rectangular = 7,

    /// Rising ramp over the first term.
    Sawtooth = 8,

    /// Falling ramp over the first term.
    InverseSawtooth = 9,

    /// Trapezoid with ramps of total width `k` over the first term.
    Rhomboidal = 10,

    /// Half-sine bump of width `k` over the first term.
    SinePulse = 11,
}

impl FunctionKind {
    /// Looks up a function kind by its id.
    pub const fn from_id(id: u8) -> Option<Self> {
        let kind = match id {
            0 => FunctionKind::None,
            1 => FunctionKind::CosineSum,
            2 => FunctionKind::SineSum,
            3 => FunctionKind::CircleSum,
            4 => FunctionKind::Triangular,
            5 => FunctionKind::Square,
            6 => FunctionKind::Pulse,
            7 => FunctionKind::Rectangular,
            8 => FunctionKind::Sawtooth,
            9 => FunctionKind::InverseSawtooth,
            10 => FunctionKind::Rhomboidal,
            11 => FunctionKind::SinePulse,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns the stable id of this kind.
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// True for kinds that sum over every term rather than shaping the first one.
    #[inline]
    pub const fn is_sum(self) -> bool {
        matches!(
            self,
            FunctionKind::CosineSum | FunctionKind::SineSum | FunctionKind::CircleSum
        )
    }
}

/// Parameters of a single cosine swing around a point on the unit circle.
///
/// Produced by [`WaveformEngine::circle_around_params`](crate::WaveformEngine::circle_around_params).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CircleAround {
    /// Midpoint of the swing.
    pub center: f32,

    /// Signed half-distance of the swing. The sign carries the direction.
    pub amplitude: f32,

    /// Angular frequency in rad/s.
    pub angular_frequency: f32,
}

/// Waveform configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaveformError {
    /// More periodic terms were requested than the owned buffer can hold.
    CapacityExceeded {
        /// Number of terms requested.
        requested: usize,
        /// Capacity of the owned buffer.
        capacity: usize,
    },
}

impl core::fmt::Display for WaveformError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WaveformError::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "periodic data capacity exceeded: requested {} terms, capacity is {}",
                    requested, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WaveformError {}
