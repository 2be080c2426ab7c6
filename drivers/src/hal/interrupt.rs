//! Interrupt Controller Hardware Abstraction Layer.
//!
//! This module defines platform-independent traits for interrupt management.

/// Interrupt controller trait.
///
/// This trait represents a controller that multiplexes several device
/// interrupt sources onto one CPU interrupt line. All operations take
/// `&self`: they are single register accesses that may be issued from
/// normal and interrupt context alike.
pub trait InterruptController {
    /// Identity of an interrupt source.
    type Source: Copy;

    /// Set of sources, as reported by [`pending`](Self::pending).
    type Pending: Copy;

    /// Enable (unmask) a source.
    fn enable(&self, source: Self::Source);

    /// Disable (mask) a source.
    fn disable(&self, source: Self::Source);

    /// Sources that are both asserted and unmasked.
    fn pending(&self) -> Self::Pending;

    /// Clear a source's pending interrupt at the device.
    fn acknowledge(&self, source: Self::Source);

    /// Mask every source.
    fn mask_all(&self);
}

/// Extension trait for controllers whose sources have a configurable
/// trigger condition.
pub trait ConfigurableInterruptController: InterruptController {
    /// Program a source's trigger parameter, then unmask it.
    ///
    /// The trigger is in place before the mask is armed, so the first
    /// interrupt observed after this call uses the new value.
    fn enable_with_trigger(&self, source: Self::Source, trigger: u32);
}
