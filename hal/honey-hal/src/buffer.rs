//! Transfer buffer handle
//!
//! The kernel stages display text here before raising a push. The buffer is
//! write-only for the kernel; only the host reads it back.

use core::marker::PhantomData;
use core::sync::atomic::{AtomicU8, Ordering};

use honey_protocol::Address;

use crate::register::{Access, Acknowledge, ReadWrite};

/// Handle to the transfer buffer
pub struct TransferBuffer<'a, A: Access> {
    bytes: &'a [AtomicU8],
    _access: PhantomData<A>,
}

impl<'a, A: Access> TransferBuffer<'a, A> {
    pub(crate) fn new(bytes: &'a [AtomicU8]) -> Self {
        Self {
            bytes,
            _access: PhantomData,
        }
    }

    /// Address of the first byte
    pub fn address(&self) -> Address {
        Address::new(self.bytes.as_ptr() as usize)
    }

    /// Capacity in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check whether the buffer has no capacity
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl<'a> TransferBuffer<'a, ReadWrite> {
    /// Copy `data` into the buffer and zero the remainder
    ///
    /// Data longer than the buffer is cut at the buffer length. Returns the
    /// number of bytes copied.
    pub fn stage(&self, data: &[u8]) -> usize {
        let copied = data.len().min(self.bytes.len());

        for (slot, &byte) in self.bytes.iter().zip(&data[..copied]) {
            slot.store(byte, Ordering::Relaxed);
        }
        for slot in &self.bytes[copied..] {
            slot.store(0, Ordering::Relaxed);
        }

        copied
    }
}

impl<'a> TransferBuffer<'a, Acknowledge> {
    /// Copy the buffer into `out`
    ///
    /// Returns the number of bytes copied, the smaller of both lengths.
    pub fn read_into(&self, out: &mut [u8]) -> usize {
        let count = out.len().min(self.bytes.len());
        for (dst, slot) in out[..count].iter_mut().zip(self.bytes) {
            *dst = slot.load(Ordering::Relaxed);
        }
        count
    }

    /// Length of the staged text, up to the first zero byte
    pub fn text_len(&self) -> usize {
        self.bytes
            .iter()
            .position(|slot| slot.load(Ordering::Relaxed) == 0)
            .unwrap_or(self.bytes.len())
    }
}
