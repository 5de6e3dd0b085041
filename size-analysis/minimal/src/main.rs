#![no_std]
#![no_main]

use core::cell::Cell;
use core::convert::Infallible;
use cortex_m_rt::{entry, exception};
use critical_section::Mutex;
use debounced_switch::{
    DebouncedInput, InterruptPin, PinId, SwitchCell, SwitchConfig, TickDuration, TickInstant,
    TimeSource, Trigger,
};
use embedded_hal::digital::{ErrorType, InputPin};
use panic_halt as _;

// ============================================================================
// Minimal Pin Implementation
// ============================================================================

/// Zero-size pin implementation for measuring library overhead
pub struct MinimalPin;

impl ErrorType for MinimalPin {
    type Error = Infallible;
}

impl InputPin for MinimalPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(core::hint::black_box(false))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(core::hint::black_box(true))
    }
}

impl InterruptPin for MinimalPin {
    fn id(&self) -> PinId {
        PinId(13)
    }

    fn listen(&mut self, _trigger: Trigger) -> Result<(), Self::Error> {
        // Minimal no-op implementation
        core::hint::black_box(());
        Ok(())
    }

    fn unlisten(&mut self) {
        core::hint::black_box(());
    }
}

// ============================================================================
// Minimal TimeSource Implementation
// ============================================================================

/// Millisecond counter incremented by SysTick, wraps after ~49.7 days
static MILLIS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

pub struct MinimalTimeSource;

impl TimeSource<TickInstant> for MinimalTimeSource {
    fn now(&self) -> TickInstant {
        critical_section::with(|cs| TickInstant(MILLIS.borrow(cs).get()))
    }
}

#[exception]
fn SysTick() {
    critical_section::with(|cs| {
        let counter = MILLIS.borrow(cs);
        counter.set(counter.get().wrapping_add(1));
    });
}

// ============================================================================
// Switch Wiring
// ============================================================================

type Button = DebouncedInput<'static, TickInstant, MinimalPin, MinimalTimeSource, fn(PinId)>;

static TIME_SOURCE: MinimalTimeSource = MinimalTimeSource;
static BUTTON: SwitchCell<Button> = SwitchCell::new();
static PRESSES: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

fn on_press(_pin: PinId) {
    critical_section::with(|cs| {
        let presses = PRESSES.borrow(cs);
        presses.set(presses.get() + 1);
    });
}

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn test_switch() {
    let config = SwitchConfig::default()
        .with_trigger(Trigger::Falling)
        .with_debounce(TickDuration::from_ms(50));

    if let Ok(button) = DebouncedInput::new(MinimalPin, on_press as fn(PinId), &TIME_SOURCE, config) {
        BUTTON.install(button);
    }

    // Stand-in for the EXTI vector of the button line
    core::hint::black_box(BUTTON.on_interrupt());
    core::hint::black_box(BUTTON.with(|button| button.value()));

    if let Some(button) = BUTTON.take() {
        core::hint::black_box(button.release());
    }
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    test_switch();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
