//! Render cycle state machine
//!
//! The loop has a single logical state, "rendering". These steps split one
//! pass of it so the order of requests and waits is explicit.

use honey_protocol::Command;

/// One step of a render cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderStep {
    /// Request a blank frame
    Clear,
    /// Wait for the clear to be acknowledged
    AwaitClear,
    /// Render the cycle counter to text
    Format,
    /// Push icon, signature and label
    PushBanner,
    /// Wait for the banner push to be acknowledged
    AwaitBanner,
    /// Push the counter text
    PushCycle,
    /// Wait for the counter push to be acknowledged
    AwaitCycle,
    /// Request the frame be presented
    Swap,
    /// Wait for the swap to be acknowledged
    AwaitSwap,
    /// Increment the cycle counter
    Advance,
}

impl RenderStep {
    /// Step every cycle starts with
    pub const FIRST: RenderStep = RenderStep::Clear;

    /// Step that follows this one
    ///
    /// `Advance` wraps to `Clear`; there is no terminal step.
    pub fn next(self) -> Self {
        use RenderStep::*;

        match self {
            Clear => AwaitClear,
            AwaitClear => Format,
            Format => PushBanner,
            PushBanner => AwaitBanner,
            AwaitBanner => PushCycle,
            PushCycle => AwaitCycle,
            AwaitCycle => Swap,
            Swap => AwaitSwap,
            AwaitSwap => Advance,
            Advance => Clear,
        }
    }

    /// Check if this step blocks on the device
    pub fn is_rendezvous(self) -> bool {
        self.awaited().is_some()
    }

    /// Command whose acknowledgement this step waits for
    pub fn awaited(self) -> Option<Command> {
        match self {
            RenderStep::AwaitClear => Some(Command::Clear),
            RenderStep::AwaitBanner | RenderStep::AwaitCycle => Some(Command::Push),
            RenderStep::AwaitSwap => Some(Command::Swap),
            _ => None,
        }
    }

    /// Command this step issues
    pub fn issued(self) -> Option<Command> {
        match self {
            RenderStep::Clear => Some(Command::Clear),
            RenderStep::PushBanner | RenderStep::PushCycle => Some(Command::Push),
            RenderStep::Swap => Some(Command::Swap),
            _ => None,
        }
    }
}
