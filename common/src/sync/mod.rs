pub mod critical;
pub use critical::{CriticalGuard, CriticalSection, InterruptState};
pub mod irq;
pub use irq::IrqControl;
pub mod irq_cell;
pub use irq_cell::IrqCell;
