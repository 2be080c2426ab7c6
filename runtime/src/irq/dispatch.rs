//! Interrupt Dispatch
//!
//! Called from the exception vector with interrupts masked.

use common::arch::mips::cp0::Cause;
use common::sync::IrqControl;
use drivers::hal::interrupt::InterruptController;
use drivers::hal::mmio::RegisterBus;
use drivers::platform::n64::InterruptSource;

use super::Interrupts;

impl<B: RegisterBus, I: IrqControl> Interrupts<B, I> {
    /// Service the MI.
    ///
    /// # Process
    /// 1. Read `MI_INTR & MI_MASK`
    /// 2. For each active line, lowest bit first: acknowledge it at the
    ///    device, then run that source's callbacks
    ///
    /// Every callback of one source finishes before the next source is
    /// acknowledged.
    pub fn dispatch(&self) {
        let active = self.controller.pending();
        log::trace!("MI dispatch: {active:?}");

        for source in InterruptSource::SHARED {
            let Some(line) = source.mi_line() else {
                continue;
            };

            if active.contains(line) {
                self.controller.acknowledge(source);
                self.invoke_all(source);
            }
        }
    }

    /// Service the CPU timer.
    ///
    /// The exception path has already acknowledged it.
    pub fn dispatch_timer(&self) {
        self.invoke_all(InterruptSource::Timer);
    }

    /// Route a trap by its CP0 Cause value: MI first, then the timer.
    pub fn dispatch_cause(&self, cause: u32) {
        let cause = Cause::from_bits_truncate(cause);

        if cause.contains(Cause::IP2) {
            self.dispatch();
        }
        if cause.contains(Cause::IP7) {
            self.dispatch_timer();
        }
    }

    /// Run every callback registered for `source`, most recent first.
    ///
    /// The list is walked one node at a time without holding the registry
    /// across a callback, so callbacks may register and unregister. The walk
    /// visits at most as many nodes as the registry has allocated.
    pub fn invoke_all(&self, source: InterruptSource) {
        let registry = self.registry(source);

        let Some(mut cursor) = registry.try_with(|r| r.head()) else {
            log::warn!("{source}: registry busy, callbacks skipped");
            return;
        };

        let mut visited = 0;
        while let Some(index) = cursor {
            let Some(((callback, next), capacity)) =
                registry.try_with(|r| (r.link(index), r.capacity()))
            else {
                break;
            };

            visited += 1;
            if visited > capacity {
                break;
            }

            if let Some(callback) = callback {
                callback();
            }
            cursor = next;
        }
    }
}
