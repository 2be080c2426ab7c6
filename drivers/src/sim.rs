//! Simulated hardware for host-side tests.
//!
//! [`SimBus`] stands in for the RCP register blocks. It keeps a log of every
//! access in program order and models the parts of the hardware the
//! interrupt runtime depends on:
//!
//! - `MI_MASK` takes set/clear command words, reads return the mask
//! - `MI_INTR` is read-only and reflects lines raised with [`SimBus::raise`]
//! - acknowledgment writes to AI, VI, PI and `MI_MODE` drop their line
//!
//! [`SimCpu`] stands in for the CPU's global interrupt-enable flag.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use common::sync::IrqControl;
use spin::Mutex;

use crate::hal::mmio::{Register, RegisterBus};
use crate::hw::n64::mi::{self, MaskCommand, MiInterrupts};
use crate::hw::n64::{ai, pi, vi};

/// One bus access.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Access {
    Read(Register, u32),
    Write(Register, u32),
}

struct State {
    regs: BTreeMap<Register, u32>,
    intr: MiInterrupts,
    mask: MiInterrupts,
    log: Vec<Access>,
}

/// Simulated register bus.
pub struct SimBus {
    state: Mutex<State>,
}

impl SimBus {
    /// All registers zero, nothing raised, everything masked.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(State {
                regs: BTreeMap::new(),
                intr: MiInterrupts::empty(),
                mask: MiInterrupts::empty(),
                log: Vec::new(),
            }),
        }
    }

    /// Assert interrupt lines in `MI_INTR`.
    pub fn raise(&self, lines: MiInterrupts) {
        self.state.lock().intr.insert(lines);
    }

    /// Currently asserted lines.
    pub fn raised(&self) -> MiInterrupts {
        self.state.lock().intr
    }

    /// Current mask.
    pub fn mask(&self) -> MiInterrupts {
        self.state.lock().mask
    }

    /// Set a plain register without logging the access.
    pub fn poke(&self, reg: Register, value: u32) {
        self.state.lock().regs.insert(reg, value);
    }

    /// Value last stored in a plain register.
    pub fn peek(&self, reg: Register) -> u32 {
        self.state.lock().regs.get(&reg).copied().unwrap_or(0)
    }

    /// Every access since creation or the last [`clear_log`](Self::clear_log).
    pub fn accesses(&self) -> Vec<Access> {
        self.state.lock().log.clone()
    }

    /// Writes only, in order.
    pub fn writes(&self) -> Vec<(Register, u32)> {
        self.state
            .lock()
            .log
            .iter()
            .filter_map(|access| match *access {
                Access::Write(reg, value) => Some((reg, value)),
                Access::Read(..) => None,
            })
            .collect()
    }

    /// Values written to one register, in order.
    pub fn writes_to(&self, reg: Register) -> Vec<u32> {
        self.writes()
            .into_iter()
            .filter(|(r, _)| *r == reg)
            .map(|(_, value)| value)
            .collect()
    }

    pub fn clear_log(&self) {
        self.state.lock().log.clear();
    }
}

impl Default for SimBus {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterBus for SimBus {
    fn read(&self, reg: Register) -> u32 {
        let mut state = self.state.lock();
        let value = match reg {
            mi::INTR => state.intr.bits(),
            mi::MASK => state.mask.bits(),
            _ => state.regs.get(&reg).copied().unwrap_or(0),
        };
        state.log.push(Access::Read(reg, value));
        value
    }

    fn write(&self, reg: Register, value: u32) {
        let mut state = self.state.lock();
        state.log.push(Access::Write(reg, value));

        match reg {
            mi::INTR => {}
            mi::MASK => {
                state.mask = MaskCommand::from_bits_truncate(value).apply(state.mask);
            }
            mi::MODE => {
                if value & mi::MODE_CLEAR_DP != 0 {
                    state.intr.remove(MiInterrupts::DP);
                }
            }
            ai::STATUS => state.intr.remove(MiInterrupts::AI),
            vi::V_CURRENT => state.intr.remove(MiInterrupts::VI),
            pi::STATUS => {
                if value & pi::STATUS_CLEAR_INTERRUPT != 0 {
                    state.intr.remove(MiInterrupts::PI);
                }
            }
            _ => {
                state.regs.insert(reg, value);
            }
        }
    }
}

/// Simulated CPU interrupt-enable flag.
///
/// Starts with interrupts disabled, like the CPU at reset.
#[derive(Debug, Default)]
pub struct SimCpu {
    enabled: AtomicBool,
    armed: AtomicUsize,
    sets: AtomicUsize,
    clears: AtomicUsize,
}

impl SimCpu {
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
            armed: AtomicUsize::new(0),
            sets: AtomicUsize::new(0),
            clears: AtomicUsize::new(0),
        }
    }

    /// Global interrupt-enable flag.
    pub fn enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Number of [`IrqControl::arm`] calls.
    pub fn arm_count(&self) -> usize {
        self.armed.load(Ordering::SeqCst)
    }

    /// Number of [`IrqControl::enable`] calls.
    pub fn set_count(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    /// Number of [`IrqControl::disable`] calls.
    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl IrqControl for SimCpu {
    fn arm(&self) {
        self.armed.fetch_add(1, Ordering::SeqCst);
        self.enabled.store(true, Ordering::SeqCst);
    }

    fn enable(&self) {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.enabled.store(true, Ordering::SeqCst);
    }

    fn disable(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.enabled.store(false, Ordering::SeqCst);
    }
}
