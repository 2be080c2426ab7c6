//! Interrupt dispatch runtime for the N64.
//!
//! Turns the console's interrupt lines into registrable callbacks and
//! provides nestable global interrupt masking:
//!
//! ```no_run
//! use runtime::{InterruptSource, Interrupts};
//! # fn vblank() {}
//! # fn demo<B: drivers::RegisterBus, I: common::sync::IrqControl>(irq: &Interrupts<B, I>) {
//! irq.initialize();
//! irq.register(InterruptSource::Vi, vblank).ok();
//! irq.set_vi_interrupt(true, 2);
//!
//! irq.disable();
//! // ... not interruptible ...
//! irq.enable();
//! # }
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod arch;
pub mod irq;

pub use common::sync::InterruptState;
pub use drivers::platform::n64::InterruptSource;
pub use irq::{Callback, Interrupts, Registry, RegistryError};
