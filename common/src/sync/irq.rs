/// CPU-level interrupt masking interface.
///
/// Implemented by the architecture layer and by the simulated CPU used in
/// host tests. Implementations touch hardware unconditionally; nesting is
/// tracked by [`CriticalSection`](super::CriticalSection).
pub trait IrqControl {
    /// Unmask the CPU interrupt lines serviced by the runtime and set the
    /// global interrupt-enable flag.
    fn arm(&self);

    /// Set the global interrupt-enable flag.
    fn enable(&self);

    /// Clear the global interrupt-enable flag.
    fn disable(&self);
}

impl<I: IrqControl + ?Sized> IrqControl for &I {
    fn arm(&self) {
        (**self).arm()
    }

    fn enable(&self) {
        (**self).enable()
    }

    fn disable(&self) {
        (**self).disable()
    }
}
