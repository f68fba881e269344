//! defmt transport for the kernel image
//!
//! Encoded frames are appended to a byte ring in linear memory. The host
//! locates the ring through the exports below, keeps its own read index and
//! decodes frames against the image's defmt table. The write index only
//! grows (wrapping at 2^32); the ring length is a power of two so the index
//! maps onto the ring across the wrap.

use core::ptr::addr_of_mut;
use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use honey_protocol::Address;

use crate::registers::exports;

/// Log ring length in bytes
pub const LOG_RING_LENGTH: usize = 4096;

static RING: [AtomicU8; LOG_RING_LENGTH] = [const { AtomicU8::new(0) }; LOG_RING_LENGTH];
static HEAD: AtomicU32 = AtomicU32::new(0);

static TAKEN: AtomicBool = AtomicBool::new(false);
static mut ENCODER: defmt::Encoder = defmt::Encoder::new();

/// Append bytes and publish the new write index
fn write_ring(bytes: &[u8]) {
    let mut head = HEAD.load(Ordering::Relaxed);
    for &byte in bytes {
        RING[head as usize % LOG_RING_LENGTH].store(byte, Ordering::Relaxed);
        head = head.wrapping_add(1);
    }
    HEAD.store(head, Ordering::Release);
}

#[defmt::global_logger]
struct RingLogger;

unsafe impl defmt::Logger for RingLogger {
    fn acquire() {
        if TAKEN.swap(true, Ordering::Acquire) {
            panic!("defmt logger taken reentrantly");
        }

        // SAFETY: TAKEN gives exclusive access to ENCODER until release()
        unsafe { (*addr_of_mut!(ENCODER)).start_frame(write_ring) }
    }

    unsafe fn flush() {}

    unsafe fn release() {
        (*addr_of_mut!(ENCODER)).end_frame(write_ring);
        TAKEN.store(false, Ordering::Release);
    }

    unsafe fn write(bytes: &[u8]) {
        (*addr_of_mut!(ENCODER)).write(bytes, write_ring);
    }
}

exports! { LOG_EXPORTS:
    _kernel_log_buffer_addr => Address::new(RING.as_ptr() as usize).to_u32();
    _kernel_log_buffer_size => LOG_RING_LENGTH as u32;
    _kernel_log_head_addr => Address::new(HEAD.as_ptr() as usize).to_u32();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_write_wraps() {
        let start = HEAD.load(Ordering::Acquire);
        let bytes: [u8; 6] = [1, 2, 3, 4, 5, 6];

        // Land the write across the end of the ring
        let ring = LOG_RING_LENGTH as u32;
        let from = start - start % ring + ring - 3;
        HEAD.store(from, Ordering::Release);
        write_ring(&bytes);

        let head = HEAD.load(Ordering::Acquire);
        assert_eq!(head, from + 6);
        assert_eq!(head as usize % LOG_RING_LENGTH, 3);
        assert_eq!(RING[LOG_RING_LENGTH - 1].load(Ordering::Relaxed), 3);
        assert_eq!(RING[0].load(Ordering::Relaxed), 4);
        assert_eq!(RING[2].load(Ordering::Relaxed), 6);
    }

    #[test]
    fn test_export_names_match_protocol() {
        let names: Vec<&str> = LOG_EXPORTS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, honey_protocol::symbols::LOG_EXPORTS);
    }

    #[test]
    fn test_exports_describe_ring() {
        assert_eq!(_kernel_log_buffer_size(), 4096);
        assert_ne!(_kernel_log_buffer_addr(), _kernel_log_head_addr());
    }
}
