//! Interrupt runtime
//!
//! [`Interrupts`] is the single context object behind the interrupt layer:
//! the critical section controller that owns the CPU's global enable flag,
//! the MI driver, and one callback registry per [`InterruptSource`].
//!
//! Exactly one instance exists per console. On MIPS targets it lives in a
//! `static` (see `arch::mips`); tests build their own on simulated hardware.

mod dispatch;
mod mask;
pub mod registry;

pub use registry::{Callback, Registry, RegistryError};

use common::sync::{CriticalGuard, CriticalSection, InterruptState, IrqCell, IrqControl};
use drivers::hal::interrupt::InterruptController;
use drivers::hal::mmio::RegisterBus;
use drivers::platform::n64::{InterruptSource, MipsInterface};

/// Interrupt runtime context.
pub struct Interrupts<B: RegisterBus, I: IrqControl> {
    controller: MipsInterface<B>,
    critical: CriticalSection<I>,
    registries: [IrqCell<Registry>; InterruptSource::COUNT],
}

impl<B: RegisterBus, I: IrqControl> Interrupts<B, I> {
    /// Create the runtime in the uninitialized state.
    pub const fn new(bus: B, cpu: I) -> Self {
        Self {
            controller: MipsInterface::new(bus),
            critical: CriticalSection::new(cpu),
            registries: [const { IrqCell::new(Registry::new()) }; InterruptSource::COUNT],
        }
    }

    /// Bring the interrupt system up.
    ///
    /// Masks every MI source, then enables interrupts on the CPU. Calling
    /// it again is a no-op.
    pub fn initialize(&self) {
        self.critical.initialize(|| self.controller.mask_all());
    }

    /// Disable interrupts system-wide. Nests.
    pub fn disable(&self) {
        self.critical.disable();
    }

    /// Undo one [`disable`](Self::disable); interrupts come back on at the
    /// outermost level.
    pub fn enable(&self) {
        self.critical.enable();
    }

    /// Enter a critical section that lasts until the guard is dropped.
    pub fn critical_section(&self) -> CriticalGuard<'_, I> {
        self.critical.lock()
    }

    pub fn state(&self) -> InterruptState {
        self.critical.state()
    }

    /// Raw nesting depth; negative while uninitialized.
    pub fn depth(&self) -> i32 {
        self.critical.depth()
    }

    /// Register `callback` to run when `source` fires.
    ///
    /// Later registrations run before earlier ones.
    pub fn register(
        &self,
        source: InterruptSource,
        callback: Callback,
    ) -> Result<(), RegistryError> {
        self.registry(source)
            .with(&self.critical, |registry| registry.register(callback))
            .inspect(|_| log::trace!("{source}: registered callback {callback:p}"))
            .inspect_err(|err| log::warn!("{source}: {err}"))
    }

    /// Remove one registration of `callback` from `source`.
    ///
    /// Unknown callbacks are ignored; the return value says whether one was
    /// removed.
    pub fn unregister(&self, source: InterruptSource, callback: Callback) -> bool {
        let removed = self
            .registry(source)
            .with(&self.critical, |registry| registry.unregister(callback));

        log::trace!("{source}: unregister {callback:p} removed={removed}");
        removed
    }

    /// Whether `callback` is registered at least once for `source`.
    pub fn is_registered(&self, source: InterruptSource, callback: Callback) -> bool {
        self.registry(source)
            .with(&self.critical, |registry| registry.contains(callback))
    }

    /// Number of callbacks registered for `source`.
    pub fn callback_count(&self, source: InterruptSource) -> usize {
        self.registry(source).with(&self.critical, |registry| registry.len())
    }

    /// The MI driver.
    pub fn controller(&self) -> &MipsInterface<B> {
        &self.controller
    }

    /// The register bus behind the MI driver.
    pub fn bus(&self) -> &B {
        self.controller.bus()
    }

    /// The CPU interrupt control.
    pub fn cpu(&self) -> &I {
        self.critical.cpu()
    }

    fn registry(&self, source: InterruptSource) -> &IrqCell<Registry> {
        &self.registries[source.index()]
    }
}
