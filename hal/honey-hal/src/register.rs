//! Command register handles
//!
//! A [`Register`] is a borrowed view of one command flag. The access marker
//! decides which side of the handshake the holder plays.

use core::hint::spin_loop;
use core::marker::PhantomData;
use core::sync::atomic::{AtomicU8, Ordering};

use honey_protocol::{Address, Command, FLAG_IDLE, FLAG_PENDING};

mod sealed {
    pub trait Sealed {}
}

/// Access capability carried by a register handle
pub trait Access: sealed::Sealed {}

/// Kernel capability: raise requests and wait for them to clear
#[derive(Debug, Clone, Copy)]
pub struct ReadWrite;

/// Host capability: observe requests and acknowledge them
#[derive(Debug, Clone, Copy)]
pub struct Acknowledge;

impl sealed::Sealed for ReadWrite {}
impl sealed::Sealed for Acknowledge {}
impl Access for ReadWrite {}
impl Access for Acknowledge {}

/// Handle to one command register
pub struct Register<'a, A: Access> {
    command: Command,
    cell: &'a AtomicU8,
    _access: PhantomData<A>,
}

impl<'a, A: Access> Register<'a, A> {
    pub(crate) fn new(command: Command, cell: &'a AtomicU8) -> Self {
        Self {
            command,
            cell,
            _access: PhantomData,
        }
    }

    /// Command this register carries
    pub fn command(&self) -> Command {
        self.command
    }

    /// Address of the register byte
    pub fn address(&self) -> Address {
        Address::new(self.cell.as_ptr() as usize)
    }

    /// Check whether a request is outstanding
    pub fn is_pending(&self) -> bool {
        Command::is_pending(self.cell.load(Ordering::Acquire))
    }
}

impl<'a> Register<'a, ReadWrite> {
    /// Request the command
    ///
    /// Any transfer buffer writes made before this call are visible to the
    /// host once it observes the flag.
    pub fn raise(&self) {
        self.cell.store(FLAG_PENDING, Ordering::Release);
    }

    /// Spin until the host acknowledges the outstanding request
    ///
    /// There is no timeout: a host that never answers stalls the caller
    /// forever. Returns the number of polls that found the flag still set.
    pub fn spin_until_clear(&self) -> u32 {
        let mut polls: u32 = 0;
        while self.is_pending() {
            polls = polls.wrapping_add(1);
            spin_loop();
        }
        polls
    }
}

impl<'a> Register<'a, Acknowledge> {
    /// Mark the outstanding request as done
    pub fn acknowledge(&self) {
        self.cell.store(FLAG_IDLE, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_raise_then_acknowledge() {
        let cell = AtomicU8::new(FLAG_IDLE);
        let kernel: Register<'_, ReadWrite> = Register::new(Command::Push, &cell);
        let host: Register<'_, Acknowledge> = Register::new(Command::Push, &cell);

        assert!(!kernel.is_pending());
        kernel.raise();
        assert!(kernel.is_pending());
        assert!(host.is_pending());

        host.acknowledge();
        assert!(!kernel.is_pending());
        assert_eq!(kernel.spin_until_clear(), 0);
    }

    #[test]
    fn test_handles_share_address() {
        let cell = AtomicU8::new(FLAG_IDLE);
        let kernel: Register<'_, ReadWrite> = Register::new(Command::Swap, &cell);
        let host: Register<'_, Acknowledge> = Register::new(Command::Swap, &cell);

        assert_eq!(kernel.address(), host.address());
        assert_eq!(kernel.command(), Command::Swap);
    }

    #[test]
    fn test_spin_until_clear_waits_for_host() {
        let cell = AtomicU8::new(FLAG_IDLE);
        let kernel: Register<'_, ReadWrite> = Register::new(Command::Clear, &cell);
        kernel.raise();

        thread::scope(|s| {
            s.spawn(|| {
                let host: Register<'_, Acknowledge> = Register::new(Command::Clear, &cell);
                while !host.is_pending() {
                    spin_loop();
                }
                thread::sleep(Duration::from_millis(5));
                host.acknowledge();
            });

            kernel.spin_until_clear();
            assert!(!kernel.is_pending());
        });
    }
}
