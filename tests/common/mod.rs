//! Shared test infrastructure for debounced-switch integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use debounced_switch::waveform::Transition;
use debounced_switch::{
    DebouncedInput, Edge, InterruptHandler, InterruptPin, PinId, SwitchConfig, TickDuration,
    TickInstant, TimeSource, Trigger,
};
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};

// ============================================================================
// Mock Pin
// ============================================================================

/// Error returned by the mock pin when told to refuse an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Simulated pin hardware, shared between the test and the pin handle
pub struct MockPinState {
    level: Cell<bool>,
    listening: Cell<Option<Trigger>>,
    pending_clears: Cell<u32>,
    refuse_listen: Cell<bool>,
}

impl MockPinState {
    pub fn new() -> Self {
        Self {
            level: Cell::new(false),
            listening: Cell::new(None),
            pending_clears: Cell::new(0),
            refuse_listen: Cell::new(false),
        }
    }

    /// A pin whose interrupt line is already claimed
    pub fn unavailable() -> Self {
        let state = Self::new();
        state.refuse_listen.set(true);
        state
    }

    /// Drives the simulated line without raising an interrupt
    pub fn set_high(&self, high: bool) {
        self.level.set(high);
    }

    pub fn listening(&self) -> Option<Trigger> {
        self.listening.get()
    }

    pub fn pending_clears(&self) -> u32 {
        self.pending_clears.get()
    }

    /// Returns a handle to hand to the driver
    pub fn pin(&self, id: u8) -> MockPin<'_> {
        MockPin {
            id: PinId(id),
            state: self,
        }
    }
}

/// Pin handle backed by a [`MockPinState`]
pub struct MockPin<'a> {
    id: PinId,
    state: &'a MockPinState,
}

impl ErrorType for MockPin<'_> {
    type Error = MockPinError;
}

impl InputPin for MockPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.state.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.state.level.get())
    }
}

impl InterruptPin for MockPin<'_> {
    fn id(&self) -> PinId {
        self.id
    }

    fn listen(&mut self, trigger: Trigger) -> Result<(), Self::Error> {
        if self.state.refuse_listen.get() {
            return Err(MockPinError);
        }
        self.state.listening.set(Some(trigger));
        Ok(())
    }

    fn unlisten(&mut self) {
        self.state.listening.set(None);
    }

    fn clear_pending(&mut self) {
        self.state
            .pending_clears
            .set(self.state.pending_clears.get() + 1);
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock millisecond counter with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TickInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TickInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds, wrapping like hardware
    pub fn advance(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time.set(TickInstant(current.0.wrapping_add(millis)));
    }

    pub fn set_time(&self, millis: u32) {
        self.current_time.set(TickInstant(millis));
    }
}

impl TimeSource<TickInstant> for MockTimeSource {
    fn now(&self) -> TickInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Fake Interrupt Source
// ============================================================================

/// Raises one interrupt at each timestamp and returns the accepted ones
pub fn fire_at<H: InterruptHandler>(handler: &mut H, timer: &MockTimeSource, times: &[u32]) -> Vec<u32> {
    times
        .iter()
        .copied()
        .filter(|&t| {
            timer.set_time(t);
            handler.on_interrupt().is_accepted()
        })
        .collect()
}

/// Replays signal transitions onto the pin, raising an interrupt for each edge
/// matching the polarity the pin is listening for. Returns accepted times.
pub fn replay<H: InterruptHandler>(
    handler: &mut H,
    timer: &MockTimeSource,
    pin: &MockPinState,
    transitions: impl IntoIterator<Item = Transition>,
) -> Vec<u32> {
    let mut accepted = Vec::new();

    for transition in transitions {
        timer.set_time(transition.at_ms);
        pin.set_high(transition.edge == Edge::Rising);

        let Some(trigger) = pin.listening() else {
            continue;
        };
        if trigger.matches(transition.edge) && handler.on_interrupt().is_accepted() {
            accepted.push(transition.at_ms);
        }
    }

    accepted
}

/// Contact bounce: a burst of alternating edges starting with `first`
pub fn bounce(start_ms: u32, first: Edge, count: u32, spacing_ms: u32) -> Vec<Transition> {
    (0..count)
        .map(|i| Transition {
            at_ms: start_ms + i * spacing_ms,
            edge: if (i % 2 == 0) == (first == Edge::Rising) {
                Edge::Rising
            } else {
                Edge::Falling
            },
        })
        .collect()
}

// ============================================================================
// Switch Construction
// ============================================================================

/// Switch type used throughout the integration tests
pub type TestSwitch<'t, C> = DebouncedInput<'t, TickInstant, MockPin<'t>, MockTimeSource, C>;

/// Binds a switch on pin 4 of `state`, panicking if the pin refuses
pub fn bind<'t, C: FnMut(PinId)>(
    state: &'t MockPinState,
    timer: &'t MockTimeSource,
    config: SwitchConfig<TickDuration>,
    callback: C,
) -> TestSwitch<'t, C> {
    DebouncedInput::new(state.pin(4), callback, timer, config).unwrap()
}

/// Debounce config with the given interval and rising-edge trigger
pub fn debounce_ms(millis: u32) -> SwitchConfig<TickDuration> {
    SwitchConfig::default().with_debounce(TickDuration(millis))
}
