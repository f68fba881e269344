//! Register map descriptor
//!
//! Addresses are opaque: the protocol never adds offsets to a register
//! address, so [`Address`] exposes no arithmetic.

use crate::command::Command;

/// Location of a register or buffer in the kernel's linear memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address(usize);

impl Address {
    /// Wrap a raw address
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Raw address value
    pub const fn get(self) -> usize {
        self.0
    }

    /// Address as exported to the host
    ///
    /// Linear memory on wasm32 is 32-bit addressed, so this is lossless on
    /// the kernel target. Host-side test builds only compare these values.
    pub const fn to_u32(self) -> u32 {
        self.0 as u32
    }
}

/// Errors found when validating a register map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterMapError {
    /// Transfer buffer has zero length
    EmptyTransferBuffer,
    /// Two command registers share an address
    SharedRegister(Command, Command),
    /// A command register lies inside the transfer buffer
    RegisterInBuffer(Command),
}

/// Everything the host needs to drive the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterMap {
    /// Start of the transfer buffer
    pub transfer_buffer: Address,
    /// Transfer buffer length in bytes
    pub transfer_buffer_len: usize,
    /// Push command register
    pub push: Address,
    /// Swap command register
    pub swap: Address,
    /// Clear command register
    pub clear: Address,
}

impl RegisterMap {
    /// Address of a command register
    pub const fn address_of(&self, command: Command) -> Address {
        match command {
            Command::Push => self.push,
            Command::Swap => self.swap,
            Command::Clear => self.clear,
        }
    }

    /// Check that the map describes a usable register block
    pub fn validate(&self) -> Result<(), RegisterMapError> {
        if self.transfer_buffer_len == 0 {
            return Err(RegisterMapError::EmptyTransferBuffer);
        }

        let start = self.transfer_buffer.get();
        let end = start.saturating_add(self.transfer_buffer_len);

        for (i, &a) in Command::ALL.iter().enumerate() {
            let addr = self.address_of(a).get();
            if (start..end).contains(&addr) {
                return Err(RegisterMapError::RegisterInBuffer(a));
            }
            for &b in &Command::ALL[i + 1..] {
                if self.address_of(a) == self.address_of(b) {
                    return Err(RegisterMapError::SharedRegister(a, b));
                }
            }
        }

        Ok(())
    }
}
