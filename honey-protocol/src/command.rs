//! Command registers
//!
//! Each command owns one byte of shared memory. The byte is a flag, not a
//! counter: writing it twice before the host answers is a protocol error.

use crate::symbols;

/// Register value when no request is outstanding
pub const FLAG_IDLE: u8 = 0;

/// Register value written by the kernel to request an action
pub const FLAG_PENDING: u8 = 1;

/// Display commands issued through the command registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Adopt the transfer buffer contents as pending content
    Push,
    /// Present the pending content as the visible frame
    Swap,
    /// Blank the visible frame
    Clear,
}

impl Command {
    /// All commands, in the order the host services them in one pass
    pub const ALL: [Command; 3] = [Command::Clear, Command::Push, Command::Swap];

    /// Name of the export returning this command's register address
    pub const fn export_symbol(self) -> &'static str {
        match self {
            Command::Push => symbols::PUSH_REGISTER_ADDR,
            Command::Swap => symbols::SWAP_REGISTER_ADDR,
            Command::Clear => symbols::CLEAR_REGISTER_ADDR,
        }
    }

    /// Short lowercase name, as used in host-side diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            Command::Push => "push",
            Command::Swap => "swap",
            Command::Clear => "clear",
        }
    }

    /// Check whether a raw register value carries an outstanding request
    ///
    /// Any non-zero value counts as pending; the host only ever tests for
    /// `> 0`.
    pub const fn is_pending(raw: u8) -> bool {
        raw != FLAG_IDLE
    }
}
