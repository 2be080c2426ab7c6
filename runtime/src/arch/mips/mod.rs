//! The console's interrupt runtime instance.
//!
//! Boot code calls [`init_interrupts`] once; everything else goes through
//! the free functions here, which all act on the one process-wide
//! [`Interrupts`] instance.

pub mod exception;

use common::arch::mips::Vr4300Irq;
use common::sync::InterruptState;
use drivers::hal::mmio::Mmio;
use drivers::platform::n64::InterruptSource;

use crate::irq::{Callback, Interrupts, RegistryError};

/// Runtime type on real hardware.
pub type SystemInterrupts = Interrupts<Mmio, Vr4300Irq>;

// SAFETY: the N64 register map in `drivers::hw::n64` names mapped KSEG1
// registers only.
static INTERRUPTS: SystemInterrupts = Interrupts::new(unsafe { Mmio::new() }, Vr4300Irq);

/// The process-wide runtime.
pub fn interrupts() -> &'static SystemInterrupts {
    &INTERRUPTS
}

/// Initialize the interrupt controller.
pub fn init_interrupts() {
    INTERRUPTS.initialize();
}

/// Disable interrupts systemwide.
///
/// Has no effect before [`init_interrupts`].
pub fn disable_interrupts() {
    INTERRUPTS.disable();
}

/// Enable interrupts systemwide, once every nested disable is balanced.
pub fn enable_interrupts() {
    INTERRUPTS.enable();
}

pub fn get_interrupts_state() -> InterruptState {
    INTERRUPTS.state()
}

pub fn register_handler(source: InterruptSource, callback: Callback) -> Result<(), RegistryError> {
    INTERRUPTS.register(source, callback)
}

pub fn unregister_handler(source: InterruptSource, callback: Callback) {
    INTERRUPTS.unregister(source, callback);
}

pub fn set_interrupt(source: InterruptSource, active: bool) {
    INTERRUPTS.set_interrupt(source, active);
}

/// Enable or disable the VI interrupt; `line` is ignored when disabling.
pub fn set_vi_interrupt(active: bool, line: u32) {
    INTERRUPTS.set_vi_interrupt(active, line);
}
