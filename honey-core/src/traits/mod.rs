//! Hardware abstraction traits
//!
//! These traits define the interface between the render loop and the
//! register-backed display implementation.

pub mod display;

pub use display::{TextModeDisplay, TextModeDisplayExt};
