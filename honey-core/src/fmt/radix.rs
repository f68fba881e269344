//! Integer to text conversion in an arbitrary base
//!
//! Digits are produced least-significant first by repeated truncating
//! division, then emitted in reverse. The digit table is mirrored around
//! `'0'` so a negative remainder indexes the same digit as its magnitude,
//! which keeps `i64::MIN` representable without negating it.

use heapless::String;

/// Digit table indexed by `35 + remainder`
const DIGITS: &[u8; 71] =
    b"zyxwvutsrqponmlkjihgfedcba9876543210123456789abcdefghijklmnopqrstuvwxyz";

/// Offset of `'0'` in [`DIGITS`]
const ZERO_INDEX: i64 = 35;

/// Capacity of a formatted number: 64 binary digits plus a sign
pub const RADIX_STRING_CAPACITY: usize = 65;

/// Formatted number
pub type RadixString = String<RADIX_STRING_CAPACITY>;

/// Formatting errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Base outside 2..=36
    InvalidBase(u32),
}

/// A numeric base between 2 and 36 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Radix(u8);

impl Radix {
    /// Smallest supported base
    pub const MIN: u32 = 2;
    /// Largest supported base
    pub const MAX: u32 = 36;

    /// Base 2
    pub const BINARY: Radix = Radix(2);
    /// Base 8
    pub const OCTAL: Radix = Radix(8);
    /// Base 10, the stock counter base
    pub const DECIMAL: Radix = Radix(10);
    /// Base 16, lowercase digits
    pub const HEX: Radix = Radix(16);

    /// Validate a base
    pub const fn new(base: u32) -> Option<Self> {
        if base < Self::MIN || base > Self::MAX {
            None
        } else {
            Some(Self(base as u8))
        }
    }

    /// The base as an integer
    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// Render `value` in this base, most significant digit first
    ///
    /// Negative values get a leading `'-'`. Zero renders as `"0"`.
    pub fn format(self, value: i64) -> RadixString {
        let base = i64::from(self.0);
        let mut scratch = [0u8; RADIX_STRING_CAPACITY];
        let mut len = 0;

        let mut rest = value;
        loop {
            // Truncating division: the remainder carries the sign of `rest`
            let remainder = rest % base;
            rest /= base;
            scratch[len] = DIGITS[(ZERO_INDEX + remainder) as usize];
            len += 1;
            if rest == 0 {
                break;
            }
        }

        if value < 0 {
            scratch[len] = b'-';
            len += 1;
        }

        let mut out = RadixString::new();
        for &byte in scratch[..len].iter().rev() {
            // Cannot overflow: len <= RADIX_STRING_CAPACITY
            let _ = out.push(char::from(byte));
        }
        out
    }
}

impl TryFrom<u32> for Radix {
    type Error = FormatError;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        Radix::new(base).ok_or(FormatError::InvalidBase(base))
    }
}

/// Render `value` in `base`, reporting an unsupported base as an error
pub fn try_format_radix(value: i64, base: u32) -> Result<RadixString, FormatError> {
    let radix = Radix::try_from(base)?;
    Ok(radix.format(value))
}

/// Render `value` in `base`
///
/// An unsupported base yields an empty string. Callers that pass a
/// computed base should treat an empty result as "no value".
pub fn format_radix(value: i64, base: u32) -> RadixString {
    try_format_radix(value, base).unwrap_or_default()
}
