//! Registration when the allocator is out of memory.
//!
//! Runs in its own test binary so it can install an allocator that fails
//! on request.

mod support;

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use drivers::hw::n64::mi::MiInterrupts;
use runtime::{InterruptSource, RegistryError};
use support::{initialized, record, take_calls};

thread_local! {
    static FAIL: Cell<bool> = const { Cell::new(false) };
}

struct FailingAlloc;

unsafe impl GlobalAlloc for FailingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if FAIL.try_with(Cell::get).unwrap_or(false) {
            return std::ptr::null_mut();
        }
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: FailingAlloc = FailingAlloc;

fn out_of_memory<R>(f: impl FnOnce() -> R) -> R {
    FAIL.set(true);
    let result = f();
    FAIL.set(false);
    result
}

fn first() {
    record("first");
}

fn second() {
    record("second");
}

#[test]
fn failed_registration_leaves_registry_unchanged() {
    let irq = initialized();
    irq.set_interrupt(InterruptSource::Ai, true);

    let result = out_of_memory(|| irq.register(InterruptSource::Ai, first));

    assert_eq!(result, Err(RegistryError::AllocationFailure));
    assert_eq!(irq.callback_count(InterruptSource::Ai), 0);

    irq.bus().raise(MiInterrupts::AI);
    irq.dispatch();
    assert!(take_calls().is_empty());

    assert_eq!(irq.register(InterruptSource::Ai, first), Ok(()));
    irq.bus().raise(MiInterrupts::AI);
    irq.dispatch();
    assert_eq!(take_calls(), ["first"]);
}

#[test]
fn released_node_is_reused_without_allocating() {
    let irq = initialized();
    irq.register(InterruptSource::Dp, first).unwrap();
    irq.unregister(InterruptSource::Dp, first);

    let result = out_of_memory(|| irq.register(InterruptSource::Dp, second));

    assert_eq!(result, Ok(()));
    assert_eq!(irq.callback_count(InterruptSource::Dp), 1);
}
