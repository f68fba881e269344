//! Target-agnostic core logic for the Honey kernel
//!
//! This crate contains everything the kernel does that does not touch the
//! shared register block directly:
//!
//! - Integer formatting in any base 2..=36
//! - The text-mode display trait the render loop drives
//! - The render loop state machine and cycle counter
//! - Banner composition and kernel configuration types
//! - Kernel version constants

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod fmt;
pub mod kernel;
pub mod traits;
pub mod version;
