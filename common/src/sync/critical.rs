//! Nestable global interrupt masking.
//!
//! A single signed depth counter gates the CPU's global interrupt-enable
//! flag:
//!
//! - negative: the interrupt system has not been initialized
//! - zero: interrupts are enabled
//! - `N > 0`: interrupts are disabled and `N` enable calls are owed
//!
//! The CPU flag is only touched at the 0 <-> 1 boundary, so disable/enable
//! pairs can nest arbitrarily deep.

use core::sync::atomic::{AtomicI32, Ordering};

use super::irq::IrqControl;

const UNINITIALIZED: i32 = -1;

/// Observable state of the interrupt system.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InterruptState {
    /// [`CriticalSection::initialize`] has not run (or enable calls
    /// outnumbered disable calls).
    Uninitialized,
    /// Interrupts are globally enabled.
    Enabled,
    /// Interrupts are globally disabled by at least one pending disable.
    Disabled,
}

/// Critical section controller.
///
/// Exactly one of these exists per CPU; it owns the interrupt-enable flag.
/// Operations before initialization are silent no-ops so interrupt-context
/// code never faults on misuse.
///
/// The depth is only modified with interrupts disabled or at the 0 -> 1
/// transition before the flag is cleared, so a plain load/store pair is
/// sufficient on a single core.
pub struct CriticalSection<I: IrqControl> {
    depth: AtomicI32,
    cpu: I,
}

impl<I: IrqControl> CriticalSection<I> {
    /// Create an uninitialized controller.
    pub const fn new(cpu: I) -> Self {
        Self {
            depth: AtomicI32::new(UNINITIALIZED),
            cpu,
        }
    }

    /// Bring the interrupt system up.
    ///
    /// Runs `prepare` (used to mask every controller source), marks the
    /// system enabled and arms the CPU. Returns `false` without doing
    /// anything if already initialized.
    pub fn initialize(&self, prepare: impl FnOnce()) -> bool {
        if self.depth.load(Ordering::Relaxed) >= 0 {
            return false;
        }

        prepare();
        self.depth.store(0, Ordering::Relaxed);
        self.cpu.arm();

        log::debug!("interrupts initialized");
        true
    }

    /// Disable interrupts system-wide.
    ///
    /// Only the outermost call clears the CPU flag; nested calls just
    /// record the extra depth.
    pub fn disable(&self) {
        let depth = self.depth.load(Ordering::Relaxed);
        if depth < 0 {
            return;
        }

        if depth == 0 {
            self.cpu.disable();
        }

        self.depth.store(depth + 1, Ordering::Relaxed);
    }

    /// Re-enable interrupts system-wide.
    ///
    /// Interrupts are re-armed only when the balancing call for the
    /// outermost [`disable`](Self::disable) arrives.
    pub fn enable(&self) {
        let depth = self.depth.load(Ordering::Relaxed);
        if depth < 0 {
            return;
        }

        let depth = depth - 1;
        self.depth.store(depth, Ordering::Relaxed);

        if depth == 0 {
            self.cpu.enable();
        } else if depth < 0 {
            log::warn!("enable without matching disable; interrupt system now uninitialized");
        }
    }

    /// Current state, derived purely from the nesting depth.
    pub fn state(&self) -> InterruptState {
        match self.depth.load(Ordering::Relaxed) {
            d if d < 0 => InterruptState::Uninitialized,
            0 => InterruptState::Enabled,
            _ => InterruptState::Disabled,
        }
    }

    /// Raw nesting depth.
    pub fn depth(&self) -> i32 {
        self.depth.load(Ordering::Relaxed)
    }

    /// Enter a critical section that ends when the guard is dropped.
    pub fn lock(&self) -> CriticalGuard<'_, I> {
        self.disable();
        CriticalGuard { section: self }
    }

    /// The CPU interrupt control this controller drives.
    pub fn cpu(&self) -> &I {
        &self.cpu
    }
}

/// Guard returned by [`CriticalSection::lock`].
///
/// Calls [`CriticalSection::enable`] on drop.
#[must_use = "the critical section ends as soon as the guard is dropped"]
pub struct CriticalGuard<'a, I: IrqControl> {
    section: &'a CriticalSection<I>,
}

impl<I: IrqControl> Drop for CriticalGuard<'_, I> {
    fn drop(&mut self) {
        self.section.enable();
    }
}
