//! Text-mode register block
//!
//! One block exists per kernel image, as a `static`. The kernel and the host
//! each take handles with their own capability from the same block.

use core::sync::atomic::AtomicU8;

use honey_protocol::{Command, RegisterMap, FLAG_IDLE, TEXTMODE_BUFFER_LENGTH};

use crate::buffer::TransferBuffer;
use crate::register::{Acknowledge, ReadWrite, Register};

/// Transfer buffer plus the three command registers
pub struct TextModeRegisters<const N: usize = TEXTMODE_BUFFER_LENGTH> {
    transfer: [AtomicU8; N],
    push: AtomicU8,
    swap: AtomicU8,
    clear: AtomicU8,
}

impl<const N: usize> Default for TextModeRegisters<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TextModeRegisters<N> {
    /// Create a zeroed block with every register idle
    pub const fn new() -> Self {
        Self {
            transfer: [const { AtomicU8::new(0) }; N],
            push: AtomicU8::new(FLAG_IDLE),
            swap: AtomicU8::new(FLAG_IDLE),
            clear: AtomicU8::new(FLAG_IDLE),
        }
    }

    fn cell(&self, command: Command) -> &AtomicU8 {
        match command {
            Command::Push => &self.push,
            Command::Swap => &self.swap,
            Command::Clear => &self.clear,
        }
    }

    /// Kernel handle to a command register
    pub fn register(&self, command: Command) -> Register<'_, ReadWrite> {
        Register::new(command, self.cell(command))
    }

    /// Kernel handle to the transfer buffer
    pub fn transfer_buffer(&self) -> TransferBuffer<'_, ReadWrite> {
        TransferBuffer::new(&self.transfer)
    }

    /// Host handle to a command register
    pub fn host_register(&self, command: Command) -> Register<'_, Acknowledge> {
        Register::new(command, self.cell(command))
    }

    /// Host handle to the transfer buffer
    pub fn host_transfer_buffer(&self) -> TransferBuffer<'_, Acknowledge> {
        TransferBuffer::new(&self.transfer)
    }

    /// Transfer buffer capacity
    pub const fn buffer_len(&self) -> usize {
        N
    }

    /// Describe the block for the host
    pub fn register_map(&self) -> RegisterMap {
        RegisterMap {
            transfer_buffer: self.transfer_buffer().address(),
            transfer_buffer_len: N,
            push: self.register(Command::Push).address(),
            swap: self.register(Command::Swap).address(),
            clear: self.register(Command::Clear).address(),
        }
    }
}
