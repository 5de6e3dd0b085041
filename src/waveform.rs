//! Ideal square-wave signals.
//!
//! [`SquareWave`] describes a periodic digital signal by period, duty cycle and
//! phase. It answers level queries, enumerates transitions in a time window and
//! produces evenly spaced voltage samples. The transitions drive simulated
//! switches in tests; the samples feed the documentation figures.

use crate::types::{Edge, WaveformError};
use embedded_hal::digital::PinState;
use heapless::Vec;

/// Default high level in millivolts (3.3 V logic).
pub const DEFAULT_HIGH_MV: u32 = 3_300;

/// A periodic signal that is high for the first `duty_percent` of every period.
///
/// Rising edges occur at `phase + k * period`. Before the first rising edge the
/// pattern extends backwards, so the signal is defined for every `t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SquareWave {
    period_ms: u32,
    duty_percent: u8,
    phase_ms: u32,
    high_mv: u32,
}

/// One level change of a [`SquareWave`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Time of the change in milliseconds.
    pub at_ms: u32,

    /// Direction of the change.
    pub edge: Edge,
}

/// A single voltage sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Sample time in milliseconds.
    pub t_ms: u32,

    /// Signal voltage in millivolts.
    pub millivolts: u32,
}

impl SquareWave {
    /// Creates a wave with zero phase and a 3.3 V high level.
    ///
    /// # Errors
    /// * `ZeroPeriod` - `period_ms` is zero
    /// * `InvalidDuty` - `duty_percent` is above 100
    pub fn new(period_ms: u32, duty_percent: u8) -> Result<Self, WaveformError> {
        if period_ms == 0 {
            return Err(WaveformError::ZeroPeriod);
        }
        if duty_percent > 100 {
            return Err(WaveformError::InvalidDuty(duty_percent));
        }

        Ok(Self {
            period_ms,
            duty_percent,
            phase_ms: 0,
            high_mv: DEFAULT_HIGH_MV,
        })
    }

    /// Shifts the wave so a rising edge falls on `phase_ms`.
    pub fn with_phase(mut self, phase_ms: u32) -> Self {
        self.phase_ms = phase_ms % self.period_ms;
        self
    }

    /// Sets the high level voltage.
    pub fn with_high_millivolts(mut self, high_mv: u32) -> Self {
        self.high_mv = high_mv;
        self
    }

    /// Returns the period in milliseconds.
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Returns the duty cycle in percent.
    pub fn duty_percent(&self) -> u8 {
        self.duty_percent
    }

    /// Returns how long the signal stays high in each period.
    pub fn high_ms(&self) -> u32 {
        (self.period_ms as u64 * self.duty_percent as u64 / 100) as u32
    }

    /// Returns the signal level at `t_ms`.
    pub fn level_at(&self, t_ms: u32) -> PinState {
        PinState::from(self.position(t_ms) < self.high_ms())
    }

    /// Returns the signal voltage at `t_ms`.
    pub fn millivolts_at(&self, t_ms: u32) -> u32 {
        match self.level_at(t_ms) {
            PinState::High => self.high_mv,
            PinState::Low => 0,
        }
    }

    /// Returns every level change after `start_ms` up to and including `end_ms`.
    pub fn transitions(&self, start_ms: u32, end_ms: u32) -> Transitions {
        let pos = self.position(start_ms);
        Transitions {
            period_ms: self.period_ms as i64,
            high_ms: self.high_ms() as i64,
            cycle_start: start_ms as i64 - pos as i64,
            next_falling: pos < self.high_ms(),
            end_ms: end_ms as i64,
        }
    }

    /// Samples the signal at `N` evenly spaced times from `start_ms` to `end_ms`.
    ///
    /// Both ends are included when `N >= 2`.
    pub fn samples<const N: usize>(&self, start_ms: u32, end_ms: u32) -> Vec<Sample, N> {
        let span = end_ms.saturating_sub(start_ms) as u64;
        let intervals = N.saturating_sub(1).max(1) as u64;

        // Yields exactly N items, the capacity of the Vec
        (0..N as u64)
            .map(|i| {
                let t_ms = start_ms + (span * i / intervals) as u32;
                Sample {
                    t_ms,
                    millivolts: self.millivolts_at(t_ms),
                }
            })
            .collect()
    }

    fn position(&self, t_ms: u32) -> u32 {
        let period = self.period_ms as u64;
        ((t_ms as u64 + period - self.phase_ms as u64) % period) as u32
    }
}

/// Iterator over the transitions of a [`SquareWave`] in a time window.
#[derive(Debug, Clone)]
pub struct Transitions {
    period_ms: i64,
    high_ms: i64,
    cycle_start: i64,
    next_falling: bool,
    end_ms: i64,
}

impl Iterator for Transitions {
    type Item = Transition;

    fn next(&mut self) -> Option<Self::Item> {
        // Constant signal at 0% or 100% duty
        if self.high_ms == 0 || self.high_ms == self.period_ms {
            return None;
        }

        let (at, edge) = if self.next_falling {
            (self.cycle_start + self.high_ms, Edge::Falling)
        } else {
            (self.cycle_start + self.period_ms, Edge::Rising)
        };

        if at > self.end_ms {
            return None;
        }

        if !self.next_falling {
            self.cycle_start += self.period_ms;
        }
        self.next_falling = !self.next_falling;

        Some(Transition {
            at_ms: at as u32,
            edge,
        })
    }
}
