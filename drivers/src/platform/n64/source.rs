use core::fmt;

use crate::hw::n64::mi::MiInterrupts;

/// Interrupt sources serviced by the runtime.
///
/// The first six are lines of the MIPS Interface, declared in hardware bit
/// order, which is also the order they are serviced in. `Timer` is the
/// VR4300's Count/Compare interrupt and never goes through the MI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum InterruptSource {
    Sp = 0,
    Si = 1,
    Ai = 2,
    Vi = 3,
    Pi = 4,
    Dp = 5,
    Timer = 6,
}

impl InterruptSource {
    /// Number of sources.
    pub const COUNT: usize = 7;

    /// Every source, MI lines first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Sp,
        Self::Si,
        Self::Ai,
        Self::Vi,
        Self::Pi,
        Self::Dp,
        Self::Timer,
    ];

    /// Sources behind the MI, in service order.
    pub const SHARED: [Self; 6] = [Self::Sp, Self::Si, Self::Ai, Self::Vi, Self::Pi, Self::Dp];

    /// Dense index, usable for per-source tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The MI line for this source, or `None` for the CPU timer.
    pub fn mi_line(self) -> Option<MiInterrupts> {
        match self {
            Self::Timer => None,
            other => MiInterrupts::from_bits(1 << other.index()),
        }
    }

    /// Short hardware name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sp => "SP",
            Self::Si => "SI",
            Self::Ai => "AI",
            Self::Vi => "VI",
            Self::Pi => "PI",
            Self::Dp => "DP",
            Self::Timer => "TI",
        }
    }
}

impl fmt::Display for InterruptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mi_lines_match_hardware_bits() {
        assert_eq!(InterruptSource::Sp.mi_line(), Some(MiInterrupts::SP));
        assert_eq!(InterruptSource::Ai.mi_line(), Some(MiInterrupts::AI));
        assert_eq!(InterruptSource::Dp.mi_line(), Some(MiInterrupts::DP));
        assert_eq!(InterruptSource::Timer.mi_line(), None);
    }

    #[test]
    fn shared_order_is_ascending_bit_order() {
        let bits: [u32; 6] =
            InterruptSource::SHARED.map(|s| s.mi_line().map_or(0, |line| line.bits()));
        assert_eq!(bits, [0x01, 0x02, 0x04, 0x08, 0x10, 0x20]);
    }

    #[test]
    fn indices_are_dense() {
        for (i, source) in InterruptSource::ALL.iter().enumerate() {
            assert_eq!(source.index(), i);
        }
    }
}
