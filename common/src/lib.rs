//! Architecture and synchronization primitives shared by the driver and
//! runtime crates.
//!
//! - [`sync`]: the CPU interrupt-masking interface, the nesting critical
//!   section built on top of it, and an interrupt-safe cell.
//! - [`arch`]: CPU-specific implementations (MIPS VR4300 CP0 access).

#![cfg_attr(not(test), no_std)]
#![cfg_attr(
    any(target_arch = "mips", target_arch = "mips64"),
    feature(asm_experimental_arch)
)]

pub mod arch;
pub mod sync;
