//! N64 platform: the MIPS Interface interrupt controller and the interrupt
//! sources it multiplexes, plus the CPU-internal timer.

mod interrupt;
mod source;

pub use interrupt::MipsInterface;
pub use source::InterruptSource;
