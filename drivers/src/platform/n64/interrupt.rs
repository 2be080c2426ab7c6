//! N64 MIPS Interface interrupt controller driver

use super::source::InterruptSource;
use crate::hal::interrupt::{ConfigurableInterruptController, InterruptController};
use crate::hal::mmio::RegisterBus;
use crate::hw::n64::mi::{self, MaskCommand, MiInterrupts};
use crate::hw::n64::{ai, pi, vi};

/// MIPS Interface interrupt controller.
///
/// Owns the bus used for every access to the MI and to the device blocks
/// that need a write to acknowledge their interrupt.
#[derive(Debug)]
pub struct MipsInterface<B> {
    bus: B,
}

impl<B: RegisterBus> MipsInterface<B> {
    /// Create a driver on top of `bus`.
    pub const fn new(bus: B) -> Self {
        Self { bus }
    }

    /// The underlying register bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    fn write_mask(&self, source: InterruptSource, active: bool) {
        let Some(line) = source.mi_line() else {
            log::warn!("{source} is not routed through the MI; mask unchanged");
            return;
        };

        self.bus.write(mi::MASK, MaskCommand::new(line, active).bits());
    }
}

impl<B: RegisterBus> InterruptController for MipsInterface<B> {
    type Source = InterruptSource;
    type Pending = MiInterrupts;

    fn enable(&self, source: InterruptSource) {
        self.write_mask(source, true);
    }

    fn disable(&self, source: InterruptSource) {
        self.write_mask(source, false);
    }

    fn pending(&self) -> MiInterrupts {
        let intr = self.bus.read(mi::INTR);
        let mask = self.bus.read(mi::MASK);
        MiInterrupts::from_bits_truncate(intr & mask)
    }

    fn acknowledge(&self, source: InterruptSource) {
        match source {
            // TODO: clear SP and SI at the device once RSP and SI drivers
            // define how; until then their callbacks must do it.
            InterruptSource::Sp | InterruptSource::Si => {}
            InterruptSource::Ai => self.bus.write(ai::STATUS, 0),
            InterruptSource::Vi => {
                let line = self.bus.read(vi::V_CURRENT);
                self.bus.write(vi::V_CURRENT, line);
            }
            InterruptSource::Pi => self.bus.write(pi::STATUS, pi::STATUS_CLEAR_INTERRUPT),
            InterruptSource::Dp => self.bus.write(mi::MODE, mi::MODE_CLEAR_DP),
            // Cleared by the exception path when it rewrites Compare.
            InterruptSource::Timer => {}
        }
    }

    fn mask_all(&self) {
        self.bus
            .write(mi::MASK, MaskCommand::new(MiInterrupts::all(), false).bits());
    }
}

impl<B: RegisterBus> ConfigurableInterruptController for MipsInterface<B> {
    /// Only VI has a trigger: the half-line written to `VI_V_INTR`. For any
    /// other source the trigger is ignored and the source is just enabled.
    fn enable_with_trigger(&self, source: InterruptSource, trigger: u32) {
        match source {
            InterruptSource::Vi => self.bus.write(vi::V_INTR, trigger),
            other => log::warn!("{other} has no trigger parameter; ignoring {trigger}"),
        }
        self.enable(source);
    }
}
