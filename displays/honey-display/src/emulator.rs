//! Host-side text-mode device
//!
//! Plays the virtual machine's part of the handshake so the protocol can be
//! exercised without a browser. One [`TextModeDevice::service`] call is one
//! pass of the host's worker loop: clear, then push, then swap, each only if
//! its flag is raised.
//!
//! Pushed text accumulates in a back frame. A swap makes the back frame
//! visible and starts a new, empty one. A clear blanks the visible frame.

use heapless::Vec;
use honey_hal::TextModeRegisters;
use honey_protocol::{Command, RegisterMapError, TEXTMODE_BUFFER_LENGTH};

/// Capacity of the back and visible frames in bytes
pub const FRAME_CAPACITY: usize = 4096;

/// Frame contents
pub type Frame = Vec<u8, FRAME_CAPACITY>;

/// Device errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// The register block cannot be driven
    InvalidRegisterMap(RegisterMapError),
}

impl From<RegisterMapError> for DeviceError {
    fn from(e: RegisterMapError) -> Self {
        DeviceError::InvalidRegisterMap(e)
    }
}

/// Requests handled in one service pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Serviced {
    /// Visible frame was blanked
    pub cleared: bool,
    /// Staged text was appended to the back frame
    pub pushed: bool,
    /// Back frame became visible
    pub swapped: bool,
}

impl Serviced {
    /// Check if any request was handled
    pub fn any(&self) -> bool {
        self.cleared || self.pushed || self.swapped
    }
}

/// Emulated text-mode display attached to a register block
pub struct TextModeDevice<'a, const N: usize = TEXTMODE_BUFFER_LENGTH> {
    registers: &'a TextModeRegisters<N>,
    back: Frame,
    visible: Frame,
    clears: u32,
    pushes: u32,
    swaps: u32,
    dropped_bytes: usize,
}

impl<'a, const N: usize> TextModeDevice<'a, N> {
    /// Attach to a register block
    ///
    /// Fails if the block's register map is not usable.
    pub fn attach(registers: &'a TextModeRegisters<N>) -> Result<Self, DeviceError> {
        registers.register_map().validate()?;

        Ok(Self {
            registers,
            back: Frame::new(),
            visible: Frame::new(),
            clears: 0,
            pushes: 0,
            swaps: 0,
            dropped_bytes: 0,
        })
    }

    /// Handle every raised request once
    pub fn service(&mut self) -> Serviced {
        let mut serviced = Serviced::default();

        let clear = self.registers.host_register(Command::Clear);
        if clear.is_pending() {
            self.visible.clear();
            clear.acknowledge();
            self.clears = self.clears.wrapping_add(1);
            serviced.cleared = true;
        }

        let push = self.registers.host_register(Command::Push);
        if push.is_pending() {
            // Copy before acknowledging: the kernel may restage right after
            let buffer = self.registers.host_transfer_buffer();
            let mut staged = [0u8; N];
            buffer.read_into(&mut staged);
            let len = buffer.text_len();
            push.acknowledge();

            self.append_back(&staged[..len]);
            self.pushes = self.pushes.wrapping_add(1);
            serviced.pushed = true;
        }

        let swap = self.registers.host_register(Command::Swap);
        if swap.is_pending() {
            self.visible = core::mem::take(&mut self.back);
            swap.acknowledge();
            self.swaps = self.swaps.wrapping_add(1);
            serviced.swapped = true;
        }

        serviced
    }

    fn append_back(&mut self, bytes: &[u8]) {
        let room = FRAME_CAPACITY - self.back.len();
        let take = bytes.len().min(room);
        // Cannot fail: take <= remaining capacity
        let _ = self.back.extend_from_slice(&bytes[..take]);
        self.dropped_bytes += bytes.len() - take;
    }

    /// Currently presented frame
    pub fn visible(&self) -> &[u8] {
        &self.visible
    }

    /// Presented frame as text, if it is valid UTF-8
    pub fn visible_text(&self) -> Option<&str> {
        core::str::from_utf8(&self.visible).ok()
    }

    /// Content pushed since the last swap
    pub fn back(&self) -> &[u8] {
        &self.back
    }

    /// Clear requests handled
    pub fn clears(&self) -> u32 {
        self.clears
    }

    /// Push requests handled
    pub fn pushes(&self) -> u32 {
        self.pushes
    }

    /// Swap requests handled
    pub fn swaps(&self) -> u32 {
        self.swaps
    }

    /// Bytes discarded because the back frame was full
    pub fn dropped_bytes(&self) -> usize {
        self.dropped_bytes
    }
}
