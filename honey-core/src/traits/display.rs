//! Text-mode display trait

/// Double-buffered text-mode display
///
/// Requests (`push`, `swap`, `clear`) return immediately after signalling
/// the device. Each has a matching `poll_*` that blocks until the device has
/// acknowledged it. A request must not be repeated before its poll returns.
///
/// None of these operations fail. Oversized text is truncated silently, and
/// a device that never acknowledges leaves the matching poll spinning
/// forever.
pub trait TextModeDisplay {
    /// Stage `text` in the transfer buffer and request a push
    fn push(&mut self, text: &[u8]);

    /// Request that pushed content become the visible frame
    fn swap(&mut self);

    /// Request that the visible frame be blanked
    fn clear(&mut self);

    /// Block until the device has adopted the pushed text
    fn poll_push(&mut self);

    /// Block until the device has presented the frame
    fn poll_swap(&mut self);

    /// Block until the device has blanked the frame
    fn poll_clear(&mut self);
}

/// Request-and-wait helpers
pub trait TextModeDisplayExt: TextModeDisplay {
    /// Push a string and wait for the device to adopt it
    fn push_blocking(&mut self, text: &str) {
        self.push(text.as_bytes());
        self.poll_push();
    }

    /// Swap and wait for the frame to be presented
    fn present(&mut self) {
        self.swap();
        self.poll_swap();
    }

    /// Clear and wait for the frame to be blanked
    fn clear_blocking(&mut self) {
        self.clear();
        self.poll_clear();
    }
}

// Blanket implementation for all TextModeDisplay types
impl<T: TextModeDisplay + ?Sized> TextModeDisplayExt for T {}
