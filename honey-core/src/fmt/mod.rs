//! Text formatting helpers
//!
//! The kernel has no allocator and no `core::fmt` machinery on its hot path,
//! so numbers are rendered into fixed-capacity strings.

pub mod radix;

pub use radix::{
    format_radix, try_format_radix, FormatError, Radix, RadixString, RADIX_STRING_CAPACITY,
};
