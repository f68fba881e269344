//! Text-mode display for the Honey kernel
//!
//! This crate provides:
//! - `RegisterDisplay`, the kernel-side driver implementing
//!   `honey_core::traits::TextModeDisplay` over the shared register block
//! - `TextModeDevice`, a host-side emulator of the display that services
//!   the same block the way the virtual machine does
//!
//! # Architecture
//!
//! The kernel and the host never call each other. They meet in the
//! register block:
//!
//! - **Kernel**: stages text, raises push/swap/clear, spins until each flag
//!   drops back to zero.
//!
//! - **Host**: polls the flags, performs the action, writes the flag back
//!   to zero. In production this is the virtual machine's worker; in tests
//!   it is `TextModeDevice` running on another thread.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod driver;
pub mod emulator;

// Re-export key types
pub use driver::{DriverStats, RegisterDisplay};
pub use emulator::{DeviceError, Serviced, TextModeDevice, FRAME_CAPACITY};
