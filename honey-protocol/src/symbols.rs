//! Export names
//!
//! The host instantiates the kernel module and calls these exports to find
//! the register block; there is no shared header.

/// Returns the transfer buffer address
pub const TRANSFER_BUFFER_ADDR: &str = "_textmode_transfer_buffer_addr";

/// Returns the transfer buffer length in bytes
pub const TRANSFER_BUFFER_SIZE: &str = "_textmode_transfer_buffer_size";

/// Returns the push register address
pub const PUSH_REGISTER_ADDR: &str = "_textmode_transfer_push_register_addr";

/// Returns the swap register address
pub const SWAP_REGISTER_ADDR: &str = "_textmode_transfer_swap_register_addr";

/// Returns the clear register address
pub const CLEAR_REGISTER_ADDR: &str = "_textmode_transfer_clear_register_addr";

/// Register map exports, in the order the host reads them at start-up
pub const REGISTER_MAP_EXPORTS: [&str; 5] = [
    TRANSFER_BUFFER_ADDR,
    TRANSFER_BUFFER_SIZE,
    PUSH_REGISTER_ADDR,
    SWAP_REGISTER_ADDR,
    CLEAR_REGISTER_ADDR,
];

/// Returns the kernel log ring address (`defmt` kernel builds only)
pub const LOG_BUFFER_ADDR: &str = "_kernel_log_buffer_addr";

/// Returns the kernel log ring length in bytes
pub const LOG_BUFFER_SIZE: &str = "_kernel_log_buffer_size";

/// Returns the address of the log ring's 32-bit write index
pub const LOG_HEAD_ADDR: &str = "_kernel_log_head_addr";

/// Log ring exports, present only in kernels built with `defmt`
pub const LOG_EXPORTS: [&str; 3] = [LOG_BUFFER_ADDR, LOG_BUFFER_SIZE, LOG_HEAD_ADDR];
