//! Per-source mask configuration.

use common::sync::IrqControl;
use drivers::hal::interrupt::{ConfigurableInterruptController, InterruptController};
use drivers::hal::mmio::RegisterBus;
use drivers::platform::n64::InterruptSource;

use super::Interrupts;

impl<B: RegisterBus, I: IrqControl> Interrupts<B, I> {
    /// Arm or mask `source` at the MI.
    ///
    /// A single command write; other sources' mask bits are untouched. The
    /// timer is not an MI source and is left alone.
    pub fn set_interrupt(&self, source: InterruptSource, active: bool) {
        if !Self::is_maskable(source) {
            return;
        }

        if active {
            self.controller.enable(source);
        } else {
            self.controller.disable(source);
        }
        log::debug!("{source}: interrupt {}", if active { "armed" } else { "masked" });
    }

    /// Like [`set_interrupt`](Self::set_interrupt), but when arming also
    /// programs the source's trigger first.
    ///
    /// Only VI has a trigger (the half-line to interrupt on); for other
    /// sources `trigger` is ignored.
    pub fn set_interrupt_with_trigger(&self, source: InterruptSource, active: bool, trigger: u32) {
        if !Self::is_maskable(source) {
            return;
        }

        if active {
            self.controller.enable_with_trigger(source, trigger);
            log::debug!("{source}: interrupt armed, trigger {trigger}");
        } else {
            self.set_interrupt(source, false);
        }
    }

    /// Arm the VI interrupt on half-line `line`, or mask it.
    pub fn set_vi_interrupt(&self, active: bool, line: u32) {
        self.set_interrupt_with_trigger(InterruptSource::Vi, active, line);
    }

    fn is_maskable(source: InterruptSource) -> bool {
        let maskable = source.mi_line().is_some();
        if !maskable {
            log::warn!("{source}: not an MI source; mask unchanged");
        }
        maskable
    }
}
