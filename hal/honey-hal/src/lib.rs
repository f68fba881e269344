//! Honey Hardware Abstraction Layer
//!
//! This crate models the text-mode register block that the kernel shares
//! with its host. The block lives in the kernel's linear memory; the host
//! finds it through exported addresses and services it from another thread.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Kernel (honey-kernel, honey-display)   │
//! └─────────────────────────────────────────┘
//!                     │  raise / spin
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  honey-hal (this crate - register block)│
//! └─────────────────────────────────────────┘
//!                     ▲  acknowledge
//!                     │
//! ┌─────────────────────────────────────────┐
//! │  Host display (VM worker, emulator)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Every byte is an atomic so the block can sit in a `static` that another
//! agent mutates. Access capabilities are encoded in the handle types:
//!
//! - [`Register<ReadWrite>`], [`TransferBuffer<ReadWrite>`] - kernel side
//! - [`Register<Acknowledge>`], [`TransferBuffer<Acknowledge>`] - host side

#![no_std]
#![deny(unsafe_code)]

pub mod block;
pub mod buffer;
pub mod register;

// Re-export key types at crate root for convenience
pub use block::TextModeRegisters;
pub use buffer::TransferBuffer;
pub use register::{Access, Acknowledge, ReadWrite, Register};
