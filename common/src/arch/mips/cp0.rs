//! Coprocessor 0 register bits used by the interrupt layer.

bitflags::bitflags! {
    /// CP0 Status register (`$12`) bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u32 {
        /// Global interrupt enable.
        const IE = 1 << 0;
        /// Exception level.
        const EXL = 1 << 1;
        /// Mask for the RCP (MI) interrupt line.
        const IM2 = 1 << 10;
        /// Mask for the Count/Compare timer interrupt line.
        const IM7 = 1 << 15;
    }
}

bitflags::bitflags! {
    /// CP0 Cause register (`$13`) pending-interrupt bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Cause: u32 {
        /// RCP interrupt pending (routed through the MI).
        const IP2 = 1 << 10;
        /// Count/Compare timer interrupt pending.
        const IP7 = 1 << 15;
    }
}
