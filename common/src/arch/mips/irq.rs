use super::cp0::Status;
use crate::sync::irq::IrqControl;

/// Interrupt control for the VR4300 through the CP0 Status register.
///
/// # Assembly Details
///
/// - `mfc0 {0}, $12`: read Status into a general purpose register
/// - `mtc0 {0}, $12`: write Status back; the trailing `nop` covers the
///   CP0 hazard before the new value takes effect
///
/// The asm blocks are not marked `nomem` so they also act as compiler
/// barriers around critical sections.
#[derive(Debug, Default, Clone, Copy)]
pub struct Vr4300Irq;

#[inline(always)]
fn read_status() -> Status {
    let raw: u32;
    unsafe {
        core::arch::asm!("mfc0 {0}, $12", out(reg) raw, options(nostack));
    }
    Status::from_bits_retain(raw)
}

#[inline(always)]
fn write_status(status: Status) {
    unsafe {
        core::arch::asm!("mtc0 {0}, $12", "nop", in(reg) status.bits(), options(nostack));
    }
}

impl IrqControl for Vr4300Irq {
    #[inline(always)]
    fn arm(&self) {
        write_status(read_status() | Status::IE | Status::IM2);
    }

    #[inline(always)]
    fn enable(&self) {
        write_status(read_status() | Status::IE);
    }

    #[inline(always)]
    fn disable(&self) {
        write_status(read_status() - Status::IE);
    }
}
