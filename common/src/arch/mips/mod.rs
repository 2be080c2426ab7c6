//! MIPS VR4300 support.
//!
//! The coprocessor 0 bit layouts are available on every target so host
//! code can decode Cause values; the register accessors only exist when
//! building for MIPS.

pub mod cp0;

cfg_if::cfg_if! {
    if #[cfg(any(target_arch = "mips", target_arch = "mips64"))] {
        mod irq;
        pub use irq::Vr4300Irq;
    }
}
