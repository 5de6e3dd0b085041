//! Interrupt-safe storage for a switch that lives in a `static`.
//!
//! Interrupt vectors take no arguments, so the driver they service has to be
//! reachable from a global. [`SwitchCell`] wraps it in a
//! `critical_section::Mutex` so main-line code can install or take it while
//! the vector may fire.
//!
//! ```ignore
//! static BUTTON: SwitchCell<Button> = SwitchCell::new();
//!
//! #[interrupt]
//! fn EXTI4_15() {
//!     BUTTON.on_interrupt();
//! }
//! ```

use crate::switch::InterruptHandler;
use crate::types::EdgeOutcome;
use core::cell::RefCell;
use critical_section::Mutex;

/// A critical-section protected slot holding at most one handler.
pub struct SwitchCell<S> {
    inner: Mutex<RefCell<Option<S>>>,
}

impl<S> SwitchCell<S> {
    /// Creates an empty cell. Usable in `static` initializers.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Stores `switch`, returning whatever was installed before.
    pub fn install(&self, switch: S) -> Option<S> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(switch))
    }

    /// Removes and returns the installed switch.
    pub fn take(&self) -> Option<S> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    /// Returns true if a switch is installed.
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }

    /// Runs `f` on the installed switch inside a critical section.
    ///
    /// Returns `None` if the cell is empty.
    pub fn with<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }
}

impl<S: InterruptHandler> SwitchCell<S> {
    /// Forwards one raw edge to the installed switch.
    ///
    /// Returns `None` when nothing is installed yet; the edge is ignored.
    pub fn on_interrupt(&self) -> Option<EdgeOutcome> {
        self.with(|switch| switch.on_interrupt())
    }
}

impl<S> Default for SwitchCell<S> {
    fn default() -> Self {
        Self::new()
    }
}
