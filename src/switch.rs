//! Interrupt-driven switch debouncing.
//!
//! Provides [`DebouncedInput`], which owns one interrupt-capable input pin and
//! forwards the first edge after each quiet period to a user callback. Also
//! defines the [`InterruptHandler`] trait through which interrupt vectors reach
//! the driver.

use crate::pin::InterruptPin;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{EdgeOutcome, PinId, SwitchConfig, Trigger};
use embedded_hal::digital::PinState;

/// Trait for anything that reacts to a raw hardware edge.
///
/// Call this from the interrupt vector of the line the implementor is bound to.
/// It must run to completion without blocking and must not be reentered.
pub trait InterruptHandler {
    /// Processes one raw edge event.
    fn on_interrupt(&mut self) -> EdgeOutcome;
}

/// Errors that can occur while binding a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchError<E> {
    /// The pin could not be claimed or its interrupt could not be registered.
    ResourceUnavailable {
        /// The pin that failed to bind
        pin: PinId,
        /// Error reported by the pin driver
        source: E,
    },
}

impl<E: core::fmt::Debug> core::fmt::Display for SwitchError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SwitchError::ResourceUnavailable { pin, source } => {
                write!(f, "{} unavailable for interrupts: {:?}", pin, source)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for SwitchError<E> {}

/// A mechanical switch on an interrupt-capable pin, debounced in software.
///
/// On every raw edge the driver compares the time since the last accepted edge
/// with the configured debounce interval. If strictly more time has passed, the
/// edge is accepted: the timestamp is stored and the callback runs. Otherwise
/// the edge is dropped silently. The first edge after construction is always
/// accepted.
///
/// The new pin level is not consulted. If the contacts settle in a different
/// state inside the window, that change is not reported.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Pin implementation type
/// * `T` - Time source implementation type
/// * `C` - Callback type, invoked with the pin's [`PinId`]
pub struct DebouncedInput<'t, I, P, T, C>
where
    I: TimeInstant,
    P: InterruptPin,
    T: TimeSource<I>,
    C: FnMut(PinId),
{
    pin: P,
    pin_id: PinId,
    callback: C,
    time_source: &'t T,
    trigger: Trigger,
    debounce: I::Duration,
    last_accepted: Option<I>,
}

impl<'t, I, P, T, C> DebouncedInput<'t, I, P, T, C>
where
    I: TimeInstant,
    P: InterruptPin,
    T: TimeSource<I>,
    C: FnMut(PinId),
{
    /// Binds a switch to `pin` and enables its interrupt.
    ///
    /// The callback may be a closure, a function, or `&mut F` if the caller
    /// wants to keep ownership of it.
    ///
    /// # Errors
    /// * `ResourceUnavailable` - The pin refused to listen for `config.trigger`
    pub fn new(
        mut pin: P,
        callback: C,
        time_source: &'t T,
        config: SwitchConfig<I::Duration>,
    ) -> Result<Self, SwitchError<P::Error>> {
        let pin_id = pin.id();

        if let Err(source) = pin.listen(config.trigger) {
            #[cfg(feature = "defmt")]
            defmt::warn!("{}: interrupt registration failed", pin_id);
            return Err(SwitchError::ResourceUnavailable {
                pin: pin_id,
                source,
            });
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: listening on {}, debounce {} ms",
            pin_id,
            config.trigger,
            config.debounce.as_millis()
        );

        Ok(Self {
            pin,
            pin_id,
            callback,
            time_source,
            trigger: config.trigger,
            debounce: config.debounce,
            last_accepted: None,
        })
    }

    /// Returns the instantaneous pin level, unaffected by debouncing.
    pub fn value(&mut self) -> Result<PinState, P::Error> {
        self.pin.is_high().map(PinState::from)
    }

    /// Returns the identifier of the bound pin.
    pub fn pin_id(&self) -> PinId {
        self.pin_id
    }

    /// Returns the edge polarity the interrupt was registered for.
    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    /// Returns the debounce interval.
    pub fn debounce(&self) -> I::Duration {
        self.debounce
    }

    /// Returns when the last edge was accepted, or `None` if none has been yet.
    pub fn last_accepted(&self) -> Option<I> {
        self.last_accepted
    }

    /// Disables the interrupt and hands the pin back.
    pub fn release(mut self) -> P {
        self.pin.unlisten();

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: released", self.pin_id);

        self.pin
    }

    fn window_elapsed(&self, now: I) -> bool {
        match self.last_accepted {
            None => true,
            Some(last) => now.duration_since(last).as_millis() > self.debounce.as_millis(),
        }
    }
}

impl<'t, I, P, T, C> InterruptHandler for DebouncedInput<'t, I, P, T, C>
where
    I: TimeInstant,
    P: InterruptPin,
    T: TimeSource<I>,
    C: FnMut(PinId),
{
    /// Accepts or discards one raw edge.
    ///
    /// Panics raised by the callback are not caught.
    fn on_interrupt(&mut self) -> EdgeOutcome {
        self.pin.clear_pending();

        let now = self.time_source.now();
        if !self.window_elapsed(now) {
            #[cfg(feature = "defmt")]
            defmt::trace!("{}: bounce discarded", self.pin_id);
            return EdgeOutcome::Discarded;
        }

        self.last_accepted = Some(now);

        #[cfg(feature = "defmt")]
        defmt::trace!("{}: edge accepted", self.pin_id);

        (self.callback)(self.pin_id);
        EdgeOutcome::Accepted
    }
}
