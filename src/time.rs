//! Time abstraction traits for platform-agnostic timing.
//!
//! Also provides [`TickInstant`] and [`TickDuration`], a ready-made pair for the
//! common case of a free-running 32-bit millisecond counter (SysTick, RTC, etc.).

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by a fixed-width counter must handle counter
    /// rollover.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Millisecond duration measured on a 32-bit tick counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickDuration(pub u32);

impl TickDuration {
    /// Creates a duration of `millis` milliseconds.
    pub const fn from_ms(millis: u32) -> Self {
        TickDuration(millis)
    }
}

impl TimeDuration for TickDuration {
    const ZERO: Self = TickDuration(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        TickDuration(millis.min(u32::MAX as u64) as u32)
    }
}

/// Reading of a free-running 32-bit millisecond counter.
///
/// The counter wraps after ~49.7 days. Differences are taken modulo 2^32, so
/// elapsed time is correct across the wrap as long as less than one full
/// counter period separates the two readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickInstant(pub u32);

impl TickInstant {
    /// Returns the raw counter value.
    pub const fn ticks(&self) -> u32 {
        self.0
    }
}

impl TimeInstant for TickInstant {
    type Duration = TickDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TickDuration(self.0.wrapping_sub(earlier.0))
    }
}
