//! Splash banner
//!
//! The banner is everything drawn above the counter. It is composed once at
//! boot and pushed unchanged every cycle.

use heapless::String;
use honey_protocol::TEXTMODE_BUFFER_LENGTH;

use crate::config::KernelConfig;

/// Honey pot icon, coloured with ANSI escape sequences
pub const ASCII_COLOR_ICON: &str = concat!(
    "  \x1b[31mO\x1b[93mOO\x1b[31mO\n",
    " \x1b[91mO\x1b[31mO\x1b[93mOO\x1b[31mO\x1b[91mO\n",
    " \x1b[31mOO\x1b[93mOO\x1b[31mOO\n",
    "\x1b[37mO\x1b[33mOOOOOO\x1b[37mO\n",
    "\x1b[97mO\x1b[93mOOOOOO\x1b[97mO\n",
    " \x1b[33mOOOOOO\n",
    " \x1b[97mO\x1b[30mOOOO\x1b[97mO\n",
    "  \x1b[97mO\x1b[30mOO\x1b[97mO\n",
);

/// Text pushed before the counter each cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    text: String<TEXTMODE_BUFFER_LENGTH>,
}

impl Banner {
    /// Build the banner for a configuration
    ///
    /// Layout: icon, blank line, signature, newline, label. Anything past
    /// the transfer buffer length is dropped.
    pub fn compose(config: &KernelConfig<'_>) -> Self {
        let mut text = String::new();

        if config.icon {
            push_truncated(&mut text, ASCII_COLOR_ICON);
            push_truncated(&mut text, "\n");
        }
        push_truncated(&mut text, config.signature);
        push_truncated(&mut text, "\n");
        push_truncated(&mut text, config.label);

        Self { text }
    }

    /// Length `compose` would produce without truncation
    pub fn required_len(config: &KernelConfig<'_>) -> usize {
        let icon = if config.icon {
            ASCII_COLOR_ICON.len() + 1
        } else {
            0
        };
        icon + config.signature.len() + 1 + config.label.len()
    }

    /// Check that `compose` keeps the whole banner, label included
    pub fn fits(config: &KernelConfig<'_>) -> bool {
        Self::required_len(config) <= TEXTMODE_BUFFER_LENGTH
    }

    /// Banner text
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Banner bytes, as pushed to the device
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the banner is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Append as much of `s` as fits, stopping on a character boundary
fn push_truncated<const N: usize>(out: &mut String<N>, s: &str) {
    for ch in s.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
}
