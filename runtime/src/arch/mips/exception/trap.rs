//! Entry points for the exception vector.
//!
//! The vector saves context, decides which interrupt fired and calls one of
//! these with interrupts still masked.

use crate::arch::mips::interrupts;

/// MI (RCP) interrupt.
#[unsafe(no_mangle)]
pub extern "C" fn mi_interrupt_entry() {
    interrupts().dispatch();
}

/// Count/Compare timer interrupt, already acknowledged by the vector.
#[unsafe(no_mangle)]
pub extern "C" fn timer_interrupt_entry() {
    interrupts().dispatch_timer();
}

/// Interrupt exception with the raw CP0 Cause value, for vectors that do
/// not demultiplex themselves.
#[unsafe(no_mangle)]
pub extern "C" fn irq_entry_rust(cause: u32) {
    interrupts().dispatch_cause(cause);
}
