//! Build-time configuration
//!
//! `KERNEL_CONFIG` is generated by build.rs from kernel.toml.

use honey_core::config::KernelConfig;
use honey_core::fmt::Radix;

include!(concat!(env!("OUT_DIR"), "/kernel_config.rs"));
