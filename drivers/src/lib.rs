//! Hardware Driver Subsystem
//!
//! # Module Organization
//!
//! - [`hal`]: Platform-independent trait definitions (register access,
//!   interrupt controllers)
//! - [`hw`]: Raw register maps per device
//! - [`platform`]: Platform-specific drivers built on the register maps
//! - `sim`: Simulated register bus and CPU flag for host-side tests
//!   (feature `sim`)
//!
//! # Usage Example
//!
//! ```no_run
//! use drivers::hal::interrupt::InterruptController;
//! use drivers::hal::mmio::Mmio;
//! use drivers::platform::n64::{InterruptSource, MipsInterface};
//!
//! let mi = MipsInterface::new(unsafe { Mmio::new() });
//! mi.mask_all();
//! mi.enable(InterruptSource::Vi);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod hal;
pub mod hw;
pub mod platform;

#[cfg(feature = "sim")]
pub mod sim;

// Re-export commonly used types
pub use hal::interrupt::{ConfigurableInterruptController, InterruptController};
pub use hal::mmio::{Register, RegisterBus};
