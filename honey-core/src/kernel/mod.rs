//! Render loop
//!
//! The kernel draws one frame per cycle: blank the screen, push the banner,
//! push the cycle counter, present. Every request is followed by a blocking
//! wait for the device, so the loop advances in lockstep with the host.

pub mod banner;
pub mod cycle;
pub mod machine;
pub mod render;

pub use banner::{Banner, ASCII_COLOR_ICON};
pub use cycle::CycleCounter;
pub use machine::RenderStep;
pub use render::KernelLoop;
