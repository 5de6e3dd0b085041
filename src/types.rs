//! Core types shared by the switch driver and waveform helpers.

use crate::DEFAULT_DEBOUNCE_MS;
use crate::time::TimeDuration;

/// An identifier for a physical input line.
///
/// This is a simple wrapper around `u8` that the callback receives on every
/// accepted press, so a single handler can serve several switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

impl From<u8> for PinId {
    fn from(id: u8) -> Self {
        PinId(id)
    }
}

impl From<PinId> for u8 {
    fn from(id: PinId) -> Self {
        id.0
    }
}

impl core::fmt::Display for PinId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "pin {}", self.0)
    }
}

/// A single level change on a digital signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low to high.
    Rising,

    /// High to low.
    Falling,
}

/// Which edges raise the pin interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    /// Low to high transitions only.
    #[default]
    Rising,

    /// High to low transitions only.
    Falling,

    /// Both transitions.
    Both,
}

impl Trigger {
    /// Returns true if a pin listening with this trigger fires on `edge`.
    #[inline]
    pub fn matches(self, edge: Edge) -> bool {
        matches!(
            (self, edge),
            (Trigger::Both, _) | (Trigger::Rising, Edge::Rising) | (Trigger::Falling, Edge::Falling)
        )
    }
}

/// What the interrupt handler did with a raw edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// First edge after a quiet period. Callback was invoked.
    Accepted,

    /// Edge fell inside the debounce window and was dropped.
    Discarded,
}

impl EdgeOutcome {
    /// Returns true for [`EdgeOutcome::Accepted`].
    pub fn is_accepted(&self) -> bool {
        *self == EdgeOutcome::Accepted
    }
}

/// Construction options for a debounced switch.
///
/// `Default` listens for rising edges with a 200 ms debounce interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchConfig<D: TimeDuration> {
    /// Edge polarity to register the interrupt for.
    pub trigger: Trigger,

    /// Minimum time between accepted edges. An edge is accepted only when
    /// strictly more than this has elapsed since the previous accepted edge.
    pub debounce: D,
}

impl<D: TimeDuration> SwitchConfig<D> {
    /// Creates a config with the given trigger and debounce interval.
    #[inline]
    pub fn new(trigger: Trigger, debounce: D) -> Self {
        Self { trigger, debounce }
    }

    /// Replaces the trigger polarity.
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Replaces the debounce interval.
    pub fn with_debounce(mut self, debounce: D) -> Self {
        self.debounce = debounce;
        self
    }
}

impl<D: TimeDuration> Default for SwitchConfig<D> {
    fn default() -> Self {
        Self {
            trigger: Trigger::default(),
            debounce: D::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

/// Waveform validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaveformError {
    /// Period of zero milliseconds.
    ZeroPeriod,

    /// Duty cycle above 100 percent.
    InvalidDuty(u8),
}

impl core::fmt::Display for WaveformError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WaveformError::ZeroPeriod => {
                write!(f, "waveform period must be non-zero")
            }
            WaveformError::InvalidDuty(duty) => {
                write!(f, "duty cycle {}% is outside 0-100%", duty)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WaveformError {}
