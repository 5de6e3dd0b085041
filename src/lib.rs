#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DebouncedInput`**: Owns one input pin and forwards the first edge after each quiet period to a callback
//! - **`InterruptPin`**: Trait to implement for your pin hardware (level read + edge interrupt control)
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`TickInstant`** / **`TickDuration`**: Ready-made wrapping 32-bit millisecond time types
//! - **`SwitchConfig`**: Edge polarity (`Trigger`) and debounce interval
//! - **`InterruptHandler`**: What an interrupt vector calls on each raw edge
//! - **`SwitchCell`**: Critical-section protected `static` slot connecting a vector to a switch
//! - **`SquareWave`**: Ideal square-wave signal for simulation and documentation figures
//!
//! An edge is accepted when strictly more than the debounce interval has passed since the
//! previously accepted edge. Everything inside the window is dropped without error.

// Re-export PinState from embedded-hal for user convenience
pub use embedded_hal::digital::PinState;

pub mod time;
pub mod types;
pub mod pin;
pub mod switch;
pub mod irq;
pub mod waveform;

pub use types::{Edge, EdgeOutcome, PinId, SwitchConfig, Trigger, WaveformError};
pub use time::{TickDuration, TickInstant, TimeDuration, TimeInstant, TimeSource};
pub use pin::InterruptPin;
pub use switch::{DebouncedInput, InterruptHandler, SwitchError};
pub use irq::SwitchCell;
pub use waveform::{Sample, SquareWave, Transition};

/// Debounce interval used by [`SwitchConfig::default`], in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;
