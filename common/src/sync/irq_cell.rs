use core::{
    cell::UnsafeCell,
    sync::atomic::{AtomicBool, Ordering},
};

use super::{critical::CriticalSection, irq::IrqControl};

/// Interrupt-safe cell for data shared between normal and interrupt context.
///
/// - Normal context goes through [`with`](Self::with), which holds a
///   critical section for the duration of the access
/// - Interrupt context goes through [`try_with`](Self::try_with); interrupts
///   are already masked there, so no critical section is taken
///
/// Single-core only. Not reentrant: accessing the same cell from inside the
/// closure is a bug.
pub struct IrqCell<T> {
    borrowed: AtomicBool,
    data: UnsafeCell<T>,
}

// SAFETY: access to `data` is serialized by the `borrowed` flag.
unsafe impl<T: Send> Sync for IrqCell<T> {}

impl<T> IrqCell<T> {
    /// Create a new cell.
    pub const fn new(data: T) -> Self {
        Self {
            borrowed: AtomicBool::new(false),
            data: UnsafeCell::new(data),
        }
    }

    /// Access the data with interrupts disabled.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already borrowed, which can only happen when
    /// `f` reaches back into the same cell.
    pub fn with<I: IrqControl, R>(
        &self,
        section: &CriticalSection<I>,
        f: impl FnOnce(&mut T) -> R,
    ) -> R {
        let _critical = section.lock();
        match self.try_with(f) {
            Some(result) => result,
            None => panic!("IrqCell accessed reentrantly"),
        }
    }

    /// Access the data if nobody else is; returns `None` when the cell is
    /// borrowed by the context that was interrupted.
    pub fn try_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        if self
            .borrowed
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return None;
        }

        // SAFETY: the flag was clear, so this is the only live reference.
        let result = f(unsafe { &mut *self.data.get() });

        self.borrowed.store(false, Ordering::Release);
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct NullCpu {
        cleared: Cell<bool>,
    }

    impl IrqControl for NullCpu {
        fn arm(&self) {}
        fn enable(&self) {}
        fn disable(&self) {
            self.cleared.set(true);
        }
    }

    #[test]
    fn with_runs_inside_critical_section() {
        let cs = CriticalSection::new(NullCpu {
            cleared: Cell::new(false),
        });
        cs.initialize(|| {});
        let cell = IrqCell::new(1u32);

        let depth = cell.with(&cs, |value| {
            *value += 1;
            cs.depth()
        });

        assert_eq!(depth, 1);
        assert!(cs.cpu().cleared.get());
        assert_eq!(cs.depth(), 0);
        assert_eq!(cell.try_with(|v| *v), Some(2));
    }

    #[test]
    fn try_with_refuses_nested_borrow() {
        let cell = IrqCell::new(0u8);
        let inner = cell.try_with(|_| cell.try_with(|v| *v));
        assert_eq!(inner, Some(None));
    }
}
