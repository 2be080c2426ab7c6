//! Peripheral Interface registers.

use crate::hal::mmio::Register;

pub const PI_BASE: usize = 0xa460_0000;

pub const DRAM_ADDR: Register = Register::new(PI_BASE, 0x00);
pub const CART_ADDR: Register = Register::new(PI_BASE, 0x04);
pub const RD_LEN: Register = Register::new(PI_BASE, 0x08);
pub const WR_LEN: Register = Register::new(PI_BASE, 0x0c);
pub const STATUS: Register = Register::new(PI_BASE, 0x10);

/// STATUS write bit: reset the DMA controller.
pub const STATUS_RESET: u32 = 1 << 0;
/// STATUS write bit: clear the PI interrupt.
pub const STATUS_CLEAR_INTERRUPT: u32 = 1 << 1;
