//! Audio Interface registers.

use crate::hal::mmio::Register;

pub const AI_BASE: usize = 0xa450_0000;

pub const DRAM_ADDR: Register = Register::new(AI_BASE, 0x00);
pub const LEN: Register = Register::new(AI_BASE, 0x04);
pub const CONTROL: Register = Register::new(AI_BASE, 0x08);
/// Any write clears the AI interrupt.
pub const STATUS: Register = Register::new(AI_BASE, 0x0c);
pub const DACRATE: Register = Register::new(AI_BASE, 0x10);
pub const BITRATE: Register = Register::new(AI_BASE, 0x14);
