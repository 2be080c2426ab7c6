//! Shared fixtures for the runtime integration tests.

#![allow(dead_code)]

use std::cell::RefCell;

use drivers::sim::{SimBus, SimCpu};
use runtime::Interrupts;

pub type SimInterrupts = Interrupts<SimBus, SimCpu>;

thread_local! {
    static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

/// Note that a callback ran.
pub fn record(name: &'static str) {
    CALLS.with_borrow_mut(|calls| calls.push(name));
}

/// Callbacks run on this thread since the last call.
pub fn take_calls() -> Vec<&'static str> {
    CALLS.with_borrow_mut(std::mem::take)
}

/// Runtime on fresh simulated hardware, not yet initialized.
pub fn system() -> SimInterrupts {
    Interrupts::new(SimBus::new(), SimCpu::new())
}

/// Initialized runtime with an empty bus log.
pub fn initialized() -> SimInterrupts {
    let irq = system();
    irq.initialize();
    irq.bus().clear_log();
    take_calls();
    irq
}
