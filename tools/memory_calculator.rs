//! Memory calculator for rgb-waveform
//!
//! Prints the footprint of engines, channels and animators for a few time
//! source and buffer capacity choices, so the cost of `N` and of the instant
//! type can be judged before picking them for a target.
//!
//! Usage:
//!   cargo run --bin memory_calculator

use embassy_time::Duration as EmbassyDurationInner;
use embassy_time::Instant as EmbassyInstantInner;
use rgb_waveform::{
    AnimationChannel, Color, ColorAnimator, PeriodicData, PeriodicTerm, TimeDuration, TimeInstant,
    TimeSource, Timebase, WaveformEngine,
};
use std::mem::size_of;

// ============================================================================
// Time Types
// ============================================================================

// u32 milliseconds, as on a SysTick counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Duration32(u32);

impl TimeDuration for Duration32 {
    fn as_millis(&self) -> u64 {
        self.0 as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Instant32(u32);

impl TimeInstant for Instant32 {
    type Duration = Duration32;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration32(self.0.wrapping_sub(earlier.0))
    }
}

#[allow(dead_code)]
struct Clock32;

impl TimeSource<Instant32> for Clock32 {
    fn now(&self) -> Instant32 {
        Instant32(0)
    }
}

// embassy-time wrappers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EmbassyDuration(EmbassyDurationInner);

impl TimeDuration for EmbassyDuration {
    fn as_millis(&self) -> u64 {
        self.0.as_millis()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EmbassyInstant(EmbassyInstantInner);

impl TimeInstant for EmbassyInstant {
    type Duration = EmbassyDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        EmbassyDuration(self.0 - earlier.0)
    }
}

#[allow(dead_code)]
struct EmbassyClock;

impl TimeSource<EmbassyInstant> for EmbassyClock {
    fn now(&self) -> EmbassyInstant {
        EmbassyInstant(EmbassyInstantInner::from_ticks(0))
    }
}

// ============================================================================
// Display Functions
// ============================================================================

fn print_header() {
    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║        RGB Waveform Memory Footprint Calculator                ║");
    println!("╚════════════════════════════════════════════════════════════════╝");
    println!();
}

fn print_component_sizes() {
    println!("Component Sizes:");
    println!(
        "├─ PeriodicTerm:                  {} bytes",
        size_of::<PeriodicTerm>()
    );
    println!(
        "├─ Color:                         {} bytes",
        size_of::<Color>()
    );
    println!(
        "├─ Timebase (u32 clock):          {} bytes",
        size_of::<Timebase<'static, Instant32, Clock32>>()
    );
    println!(
        "└─ Timebase (embassy):            {} bytes",
        size_of::<Timebase<'static, EmbassyInstant, EmbassyClock>>()
    );
    println!();
}

fn print_data_sizes() {
    println!("PeriodicData Sizes (by capacity):");
    println!(
        "├─ N = 0 (presets only):          {} bytes",
        size_of::<PeriodicData<0>>()
    );
    println!(
        "├─ N = 2:                         {} bytes",
        size_of::<PeriodicData<2>>()
    );
    println!(
        "├─ N = 4:                         {} bytes",
        size_of::<PeriodicData<4>>()
    );
    println!(
        "└─ N = 8:                         {} bytes",
        size_of::<PeriodicData<8>>()
    );
    println!();
}

macro_rules! print_stack {
    ($label:literal, $instant:ty, $clock:ty, $n:literal) => {
        println!("{} (N = {}):", $label, $n);
        println!(
            "├─ WaveformEngine:                {} bytes",
            size_of::<WaveformEngine<'static, $instant, $clock, $n>>()
        );
        println!(
            "├─ AnimationChannel:              {} bytes",
            size_of::<AnimationChannel<'static, $instant, $clock, $n>>()
        );
        println!(
            "└─ ColorAnimator:                 {} bytes",
            size_of::<ColorAnimator<'static, $instant, $clock, $n>>()
        );
        println!();
    };
}

fn print_stack_sizes() {
    print_stack!("u32 clock", Instant32, Clock32, 0);
    print_stack!("u32 clock", Instant32, Clock32, 4);
    print_stack!("embassy clock", EmbassyInstant, EmbassyClock, 4);
    print_stack!("embassy clock", EmbassyInstant, EmbassyClock, 8);
}

fn main() {
    print_header();
    print_component_sizes();
    print_data_sizes();
    print_stack_sizes();
}
