//! Honey text-mode display protocol
//!
//! This crate defines the shared-memory protocol between the Honey kernel
//! and the text-mode display implemented by the hosting virtual machine.
//! The protocol is a request/acknowledge handshake over single-byte flags.
//!
//! # Protocol Overview
//!
//! The kernel exposes one transfer buffer and three command registers:
//! ```text
//! ┌──────────────────────────────┬──────┬──────┬───────┐
//! │ TRANSFER BUFFER              │ PUSH │ SWAP │ CLEAR │
//! │ 1028B                        │ 1B   │ 1B   │ 1B    │
//! └──────────────────────────────┴──────┴──────┴───────┘
//! ```
//!
//! 1. The kernel writes a command register to [`FLAG_PENDING`].
//! 2. The host performs the action and writes the register back to
//!    [`FLAG_IDLE`].
//! 3. The kernel spins on the register until it reads [`FLAG_IDLE`].
//!
//! Only one request per register may be outstanding. The host locates the
//! registers through the exported accessors named in [`symbols`].

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod register_map;
pub mod revision;
pub mod symbols;

pub use command::{Command, FLAG_IDLE, FLAG_PENDING};
pub use register_map::{Address, RegisterMap, RegisterMapError};
pub use revision::{ProtocolRevision, CURRENT_REVISION};

/// Capacity of the transfer buffer in bytes
pub const TEXTMODE_BUFFER_LENGTH: usize = 1028;
