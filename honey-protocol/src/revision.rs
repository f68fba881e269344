//! Protocol revisions
//!
//! The first kernels drove the display through a single push register that
//! wrote straight to the visible frame. The current protocol stages content
//! and presents it with an explicit swap. Hosts only implement the current
//! revision; the old one is kept as an identifier so host diagnostics can
//! name it.

/// Known revisions of the text-mode protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolRevision {
    /// v1: one push register, content appears immediately
    ImmediateWrite = 1,
    /// v2: push, swap and clear registers with a staged back frame
    DoubleBuffered = 2,
}

/// Revision implemented by this crate
pub const CURRENT_REVISION: ProtocolRevision = ProtocolRevision::DoubleBuffered;

impl ProtocolRevision {
    /// Number of command registers the revision exposes
    pub const fn command_registers(self) -> usize {
        match self {
            ProtocolRevision::ImmediateWrite => 1,
            ProtocolRevision::DoubleBuffered => 3,
        }
    }

    /// Whether pushed content waits for a swap before becoming visible
    pub const fn is_double_buffered(self) -> bool {
        matches!(self, ProtocolRevision::DoubleBuffered)
    }
}
