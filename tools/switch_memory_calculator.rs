#!/usr/bin/env rust-script
//! Memory calculator for debounced-switch
//!
//! This utility calculates and displays the memory footprint of a bound switch
//! with different time and callback types. Run it to see what a `static`
//! `SwitchCell` costs before putting one on a small MCU.
//!
//! Usage:
//!   cargo run --bin switch_memory_calculator

use core::convert::Infallible;
use std::mem::size_of;

use debounced_switch::{
    DebouncedInput, EdgeOutcome, InterruptPin, PinId, SwitchCell, SwitchConfig, TickDuration,
    TickInstant, TimeDuration, TimeInstant, TimeSource, Trigger,
};
use embassy_time::{Duration as EmbassyDurationInner, Instant as EmbassyInstantInner};
use embedded_hal::digital::{ErrorType, InputPin};

// Pin with no hardware behind it; the driver only stores a handle

struct NullPin;

impl ErrorType for NullPin {
    type Error = Infallible;
}

impl InputPin for NullPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }
}

impl InterruptPin for NullPin {
    fn id(&self) -> PinId {
        PinId(0)
    }

    fn listen(&mut self, _trigger: Trigger) -> Result<(), Self::Error> {
        Ok(())
    }

    fn unlisten(&mut self) {}
}

// u32 millisecond counter (like a SysTick driven time source)

struct TickSource;

impl TimeSource<TickInstant> for TickSource {
    fn now(&self) -> TickInstant {
        TickInstant(0)
    }
}

// Embassy Instant wrapper (64-bit tick counter)

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EmbassyDuration(EmbassyDurationInner);

impl TimeDuration for EmbassyDuration {
    const ZERO: Self = EmbassyDuration(EmbassyDurationInner::from_ticks(0));

    fn as_millis(&self) -> u64 {
        self.0.as_millis()
    }

    fn from_millis(millis: u64) -> Self {
        EmbassyDuration(EmbassyDurationInner::from_millis(millis))
    }
}

#[derive(Debug, Clone, Copy)]
struct EmbassyInstant(EmbassyInstantInner);

impl TimeInstant for EmbassyInstant {
    type Duration = EmbassyDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        self.0
            .checked_duration_since(earlier.0)
            .map(EmbassyDuration)
            .unwrap_or(EmbassyDuration::ZERO)
    }
}

struct EmbassySource;

impl TimeSource<EmbassyInstant> for EmbassySource {
    fn now(&self) -> EmbassyInstant {
        EmbassyInstant(EmbassyInstantInner::from_ticks(0))
    }
}

type FnCallback = fn(PinId);

type TickSwitch<C> = DebouncedInput<'static, TickInstant, NullPin, TickSource, C>;
type EmbassySwitch<C> = DebouncedInput<'static, EmbassyInstant, NullPin, EmbassySource, C>;

fn print_header() {
    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║        Debounced Switch Memory Footprint Calculator            ║");
    println!("╚════════════════════════════════════════════════════════════════╝");
    println!();
}

fn print_component_sizes() {
    println!("Component Sizes:");
    println!("├─ PinId:                        {} bytes", size_of::<PinId>());
    println!("├─ Trigger (enum):               {} bytes", size_of::<Trigger>());
    println!("├─ EdgeOutcome (enum):           {} bytes", size_of::<EdgeOutcome>());
    println!("├─ fn(PinId) callback:           {} bytes", size_of::<FnCallback>());
    println!("└─ &mut dyn FnMut(PinId):        {} bytes", size_of::<&mut dyn FnMut(PinId)>());
    println!();
}

fn print_time_sizes() {
    println!("Time Type Sizes:");
    println!("├─ TickInstant (u32):            {} bytes", size_of::<TickInstant>());
    println!("├─ Option<TickInstant>:          {} bytes", size_of::<Option<TickInstant>>());
    println!("├─ SwitchConfig<TickDuration>:   {} bytes", size_of::<SwitchConfig<TickDuration>>());
    println!("├─ EmbassyInstant (u64 ticks):   {} bytes", size_of::<EmbassyInstant>());
    println!("├─ Option<EmbassyInstant>:       {} bytes", size_of::<Option<EmbassyInstant>>());
    println!("└─ SwitchConfig<EmbassyDuration>: {} bytes", size_of::<SwitchConfig<EmbassyDuration>>());
    println!();
}

fn print_switch_table() {
    println!("Bound Switch Memory Usage:");
    println!("┌────────────────┬──────────────────┬─────────────────┬─────────────────┐");
    println!("│ Time source    │ Callback         │ DebouncedInput  │ SwitchCell      │");
    println!("├────────────────┼──────────────────┼─────────────────┼─────────────────┤");

    let rows: [(&str, &str, usize, usize); 4] = [
        (
            "u32 ticks",
            "fn(PinId)",
            size_of::<TickSwitch<FnCallback>>(),
            size_of::<SwitchCell<TickSwitch<FnCallback>>>(),
        ),
        (
            "u32 ticks",
            "&mut dyn FnMut",
            size_of::<TickSwitch<&'static mut dyn FnMut(PinId)>>(),
            size_of::<SwitchCell<TickSwitch<&'static mut dyn FnMut(PinId)>>>(),
        ),
        (
            "embassy",
            "fn(PinId)",
            size_of::<EmbassySwitch<FnCallback>>(),
            size_of::<SwitchCell<EmbassySwitch<FnCallback>>>(),
        ),
        (
            "embassy",
            "&mut dyn FnMut",
            size_of::<EmbassySwitch<&'static mut dyn FnMut(PinId)>>(),
            size_of::<SwitchCell<EmbassySwitch<&'static mut dyn FnMut(PinId)>>>(),
        ),
    ];

    for (time, callback, switch, cell) in rows {
        println!(
            "│ {:<14} │ {:<16} │ {:>13} B │ {:>13} B │",
            time, callback, switch, cell
        );
    }

    println!("└────────────────┴──────────────────┴─────────────────┴─────────────────┘");
    println!();
}

fn main() {
    print_header();
    print_component_sizes();
    print_time_sizes();
    print_switch_table();
}
