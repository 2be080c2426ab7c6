//! MIPS Interface registers.
//!
//! The MI collects the interrupt lines of the six RCP devices and drives
//! the CPU's IP2 line. `INTR` reports asserted lines; `MASK` selects which
//! of them may raise the CPU interrupt.

use crate::hal::mmio::Register;

pub const MI_BASE: usize = 0xa430_0000;

pub const MODE: Register = Register::new(MI_BASE, 0x00);
pub const VERSION: Register = Register::new(MI_BASE, 0x04);
pub const INTR: Register = Register::new(MI_BASE, 0x08);
pub const MASK: Register = Register::new(MI_BASE, 0x0c);

/// MODE write pattern that clears the DP interrupt.
pub const MODE_CLEAR_DP: u32 = 0x0800;

bitflags::bitflags! {
    /// MI interrupt lines, as read from `INTR` and `MASK`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MiInterrupts: u32 {
        /// Signal Processor (RSP)
        const SP = 1 << 0;
        /// Serial Interface (controllers)
        const SI = 1 << 1;
        /// Audio Interface
        const AI = 1 << 2;
        /// Video Interface
        const VI = 1 << 3;
        /// Peripheral Interface (cartridge DMA)
        const PI = 1 << 4;
        /// Display Processor (RDP)
        const DP = 1 << 5;
    }
}

bitflags::bitflags! {
    /// Command word written to `MASK`.
    ///
    /// Each line has an independent clear/set bit pair, so a write only
    /// affects the lines it names and no read-modify-write is needed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MaskCommand: u32 {
        const CLEAR_SP = 1 << 0;
        const SET_SP = 1 << 1;
        const CLEAR_SI = 1 << 2;
        const SET_SI = 1 << 3;
        const CLEAR_AI = 1 << 4;
        const SET_AI = 1 << 5;
        const CLEAR_VI = 1 << 6;
        const SET_VI = 1 << 7;
        const CLEAR_PI = 1 << 8;
        const SET_PI = 1 << 9;
        const CLEAR_DP = 1 << 10;
        const SET_DP = 1 << 11;
    }
}

impl MaskCommand {
    /// Command that arms (`active`) or masks every line in `lines`.
    pub fn new(lines: MiInterrupts, active: bool) -> Self {
        let op: u32 = if active { 0b10 } else { 0b01 };
        let bits = lines
            .iter()
            .fold(0, |acc, line| acc | op << (line.bits().trailing_zeros() * 2));
        Self::from_bits_truncate(bits)
    }

    /// Mask state after the hardware applies this command to `mask`.
    ///
    /// A line with both bits set is left unchanged.
    pub fn apply(self, mask: MiInterrupts) -> MiInterrupts {
        let mut result = mask;
        for line in MiInterrupts::all().iter() {
            let shift = line.bits().trailing_zeros() * 2;
            match (self.bits() >> shift) & 0b11 {
                0b01 => result.remove(line),
                0b10 => result.insert(line),
                _ => {}
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_all_command() {
        assert_eq!(MaskCommand::new(MiInterrupts::all(), false).bits(), 0x0555);
    }

    #[test]
    fn single_line_commands() {
        assert_eq!(MaskCommand::new(MiInterrupts::AI, true), MaskCommand::SET_AI);
        assert_eq!(MaskCommand::new(MiInterrupts::VI, false), MaskCommand::CLEAR_VI);
        assert_eq!(MaskCommand::new(MiInterrupts::DP, true).bits(), 0x0800);
    }

    #[test]
    fn apply_only_touches_named_lines() {
        let mask = MiInterrupts::SP | MiInterrupts::PI;
        let mask = MaskCommand::SET_AI.apply(mask);
        assert_eq!(mask, MiInterrupts::SP | MiInterrupts::AI | MiInterrupts::PI);

        let mask = (MaskCommand::CLEAR_SP | MaskCommand::SET_DP).apply(mask);
        assert_eq!(mask, MiInterrupts::AI | MiInterrupts::PI | MiInterrupts::DP);
    }

    #[test]
    fn conflicting_bits_leave_line_alone() {
        let mask = (MaskCommand::CLEAR_VI | MaskCommand::SET_VI).apply(MiInterrupts::VI);
        assert_eq!(mask, MiInterrupts::VI);
    }
}
