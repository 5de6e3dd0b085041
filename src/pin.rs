//! Hardware abstraction for interrupt-capable input pins.

use crate::types::{PinId, Trigger};
use embedded_hal::digital::InputPin;

/// Trait for abstracting an input pin that can raise edge interrupts.
///
/// Implement this for your HAL's pin type (EXTI line, GPIOTE channel, GPIO
/// interrupt, etc.). Level reads come from the [`InputPin`] supertrait.
///
/// The driver never touches interrupt vectors itself. Your vector for this
/// line calls [`InterruptHandler::on_interrupt`](crate::InterruptHandler::on_interrupt),
/// usually through a [`SwitchCell`](crate::SwitchCell).
pub trait InterruptPin: InputPin {
    /// Returns the identifier passed to the switch callback.
    fn id(&self) -> PinId;

    /// Enables the interrupt for the given edge polarity.
    ///
    /// Returns an error if the line is claimed elsewhere or cannot generate
    /// interrupts for this polarity.
    fn listen(&mut self, trigger: Trigger) -> Result<(), Self::Error>;

    /// Disables the interrupt for this line.
    fn unlisten(&mut self);

    /// Clears the pending interrupt flag, if the hardware latches one.
    fn clear_pending(&mut self) {}
}
