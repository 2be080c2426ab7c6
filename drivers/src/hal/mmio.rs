//! Memory-mapped register access.
//!
//! Device registers are addressed as a base address plus a byte offset.
//! Drivers never dereference addresses themselves; they go through a
//! [`RegisterBus`] so the same driver code runs against real hardware
//! ([`Mmio`]) and against a simulated bus in tests.

use core::fmt;
use core::ptr::{read_volatile, write_volatile};

/// A 32-bit register inside a device's register block.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Register {
    base: usize,
    offset: usize,
}

impl Register {
    /// Register at `offset` bytes from the block at `base`.
    pub const fn new(base: usize, offset: usize) -> Self {
        Self { base, offset }
    }

    /// Base address of the owning register block.
    pub const fn base(self) -> usize {
        self.base
    }

    /// Byte offset within the block.
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Absolute address of the register.
    pub const fn address(self) -> usize {
        self.base + self.offset
    }
}

impl fmt::Debug for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Register({:#010x})", self.address())
    }
}

/// Register bus trait.
///
/// Reads and writes are unbuffered and happen in program order.
pub trait RegisterBus {
    /// Read a register.
    fn read(&self, reg: Register) -> u32;

    /// Write a register.
    fn write(&self, reg: Register, value: u32);
}

impl<B: RegisterBus + ?Sized> RegisterBus for &B {
    fn read(&self, reg: Register) -> u32 {
        (**self).read(reg)
    }

    fn write(&self, reg: Register, value: u32) {
        (**self).write(reg, value)
    }
}

/// Direct volatile access to physical register addresses.
#[derive(Debug, Clone, Copy)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Create a bus handle.
    ///
    /// # Safety
    ///
    /// Every [`Register`] passed to this bus must name a mapped, 32-bit
    /// aligned device register.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterBus for Mmio {
    #[inline(always)]
    fn read(&self, reg: Register) -> u32 {
        // SAFETY: guaranteed by the contract of `Mmio::new`.
        unsafe { read_volatile(reg.address() as *const u32) }
    }

    #[inline(always)]
    fn write(&self, reg: Register, value: u32) {
        // SAFETY: guaranteed by the contract of `Mmio::new`.
        unsafe { write_volatile(reg.address() as *mut u32, value) }
    }
}
