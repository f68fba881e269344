//! Kernel configuration
//!
//! The kernel image reads `kernel.toml` at build time and bakes a
//! [`KernelConfig`] into the binary. There is no runtime configuration
//! source.

use crate::fmt::Radix;

/// Default signature line
pub const DEFAULT_SIGNATURE: &str = "With love! <3 - GetAGripGal";

/// Default label printed before the cycle counter
pub const DEFAULT_LABEL: &str = "Cycle: ";

/// What the render loop draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KernelConfig<'a> {
    /// Draw the colour icon above the signature
    pub icon: bool,
    /// Signature line under the icon
    pub signature: &'a str,
    /// Label preceding the counter
    pub label: &'a str,
    /// Base the counter is rendered in
    pub radix: Radix,
}

impl KernelConfig<'static> {
    /// Configuration matching the stock splash screen
    pub const DEFAULT: KernelConfig<'static> = KernelConfig {
        icon: true,
        signature: DEFAULT_SIGNATURE,
        label: DEFAULT_LABEL,
        radix: Radix::DECIMAL,
    };
}

impl Default for KernelConfig<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}
