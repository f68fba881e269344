//! Kernel version

/// Kernel name
pub const KERNEL_NAME: &str = "honeyos-kernel";

/// Major version
pub const KERNEL_MAJOR_VERSION: u32 = 0;

/// Minor version
pub const KERNEL_MINOR_VERSION: u32 = 1;

/// Name and version joined, e.g. `honeyos-kernel0.1`
pub const KERNEL_VERSION_STRING: &str = "honeyos-kernel0.1";
