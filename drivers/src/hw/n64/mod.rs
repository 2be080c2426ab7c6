//! N64 RCP register maps.
//!
//! Base addresses are KSEG1 (uncached) views of the physical blocks.

pub mod ai;
pub mod mi;
pub mod pi;
pub mod vi;
