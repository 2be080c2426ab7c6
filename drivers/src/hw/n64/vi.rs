//! Video Interface registers.

use crate::hal::mmio::Register;

pub const VI_BASE: usize = 0xa440_0000;

pub const CONTROL: Register = Register::new(VI_BASE, 0x00);
pub const ORIGIN: Register = Register::new(VI_BASE, 0x04);
pub const WIDTH: Register = Register::new(VI_BASE, 0x08);
/// Half-line at which the VI interrupt fires.
pub const V_INTR: Register = Register::new(VI_BASE, 0x0c);
/// Current half-line; any write clears the VI interrupt.
pub const V_CURRENT: Register = Register::new(VI_BASE, 0x10);
pub const BURST: Register = Register::new(VI_BASE, 0x14);
pub const V_SYNC: Register = Register::new(VI_BASE, 0x18);
pub const H_SYNC: Register = Register::new(VI_BASE, 0x1c);
