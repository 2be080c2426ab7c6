//! Hardware Abstraction Layer (HAL) - Platform-Independent Traits
//!
//! These traits are implemented by platform drivers and by the simulated
//! hardware in `sim`, so the interrupt runtime is written once against
//! them.
//!
//! # Available Interfaces
//!
//! - [`mmio`]: 32-bit register access on a memory-mapped bus
//! - [`interrupt`]: Interrupt controller management

pub mod interrupt;
pub mod mmio;
