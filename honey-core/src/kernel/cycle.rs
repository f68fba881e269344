//! Cycle counter

/// Number of frames rendered since boot
///
/// Wraps to zero after `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleCounter(u32);

impl CycleCounter {
    /// Counter at zero
    pub const fn new() -> Self {
        Self(0)
    }

    /// Counter at an arbitrary value
    pub const fn starting_at(value: u32) -> Self {
        Self(value)
    }

    /// Current value
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Move to the next cycle
    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}
