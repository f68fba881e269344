//! Register-backed display driver
//!
//! Drives the host display through the shared [`TextModeRegisters`] block.
//! Requests write the flag and return; polls spin on the flag.

use honey_core::traits::TextModeDisplay;
use honey_hal::TextModeRegisters;
use honey_protocol::{Command, RegisterMap, TEXTMODE_BUFFER_LENGTH};

/// Commands issued since the driver was created
///
/// Diagnostics only; counters wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverStats {
    /// Push requests
    pub pushes: u32,
    /// Push requests whose text did not fit the transfer buffer
    pub truncated_pushes: u32,
    /// Swap requests
    pub swaps: u32,
    /// Clear requests
    pub clears: u32,
    /// Polls that found a flag still raised
    pub busy_polls: u32,
}

/// Text-mode display over a shared register block
pub struct RegisterDisplay<'a, const N: usize = TEXTMODE_BUFFER_LENGTH> {
    registers: &'a TextModeRegisters<N>,
    stats: DriverStats,
}

impl<'a, const N: usize> RegisterDisplay<'a, N> {
    /// Create a driver for a register block
    ///
    /// Only one driver should exist per block; the block itself does not
    /// enforce this.
    pub fn new(registers: &'a TextModeRegisters<N>) -> Self {
        Self {
            registers,
            stats: DriverStats::default(),
        }
    }

    /// Command counters
    pub fn stats(&self) -> DriverStats {
        self.stats
    }

    /// Describe the register block for the host
    pub fn register_map(&self) -> RegisterMap {
        self.registers.register_map()
    }

    fn request(&mut self, command: Command) {
        self.registers.register(command).raise();
    }

    fn wait(&mut self, command: Command) {
        let polls = self.registers.register(command).spin_until_clear();
        self.stats.busy_polls = self.stats.busy_polls.wrapping_add(polls);
    }
}

impl<'a, const N: usize> TextModeDisplay for RegisterDisplay<'a, N> {
    fn push(&mut self, text: &[u8]) {
        let staged = self.registers.transfer_buffer().stage(text);
        if staged < text.len() {
            self.stats.truncated_pushes = self.stats.truncated_pushes.wrapping_add(1);
        }
        self.request(Command::Push);
        self.stats.pushes = self.stats.pushes.wrapping_add(1);
    }

    fn swap(&mut self) {
        self.request(Command::Swap);
        self.stats.swaps = self.stats.swaps.wrapping_add(1);
    }

    fn clear(&mut self) {
        self.request(Command::Clear);
        self.stats.clears = self.stats.clears.wrapping_add(1);
    }

    fn poll_push(&mut self) {
        self.wait(Command::Push);
    }

    fn poll_swap(&mut self) {
        self.wait(Command::Swap);
    }

    fn poll_clear(&mut self) {
        self.wait(Command::Clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use honey_core::traits::TextModeDisplayExt;
    use std::thread;

    fn host_view<const N: usize>(registers: &TextModeRegisters<N>) -> Vec<u8> {
        let mut out = vec![0u8; N];
        registers.host_transfer_buffer().read_into(&mut out);
        out
    }

    #[test]
    fn test_push_abc_on_ten_byte_buffer() {
        let registers = TextModeRegisters::<10>::new();
        let mut display = RegisterDisplay::new(&registers);

        assert!(!registers.host_register(Command::Push).is_pending());
        display.push(b"ABC");
        assert!(registers.host_register(Command::Push).is_pending());
        assert_eq!(host_view(&registers), b"ABC\0\0\0\0\0\0\0");

        registers.host_register(Command::Push).acknowledge();
        display.poll_push();
        assert!(!registers.register(Command::Push).is_pending());
    }

    #[test]
    fn test_push_truncates_oversized_text() {
        let registers = TextModeRegisters::<4>::new();
        let mut display = RegisterDisplay::new(&registers);

        display.push(b"honeyos");
        assert_eq!(host_view(&registers), b"hone");
        assert_eq!(display.stats().truncated_pushes, 1);

        registers.host_register(Command::Push).acknowledge();
        display.poll_push();
        display.push(b"ok");
        assert_eq!(host_view(&registers), b"ok\0\0");
        assert_eq!(display.stats().truncated_pushes, 1);
        assert_eq!(display.stats().pushes, 2);
    }

    #[test]
    fn test_requests_raise_their_own_register() {
        let registers = TextModeRegisters::<4>::new();
        let mut display = RegisterDisplay::new(&registers);

        display.swap();
        assert!(registers.host_register(Command::Swap).is_pending());
        assert!(!registers.host_register(Command::Clear).is_pending());

        display.clear();
        assert!(registers.host_register(Command::Clear).is_pending());
        assert!(!registers.host_register(Command::Push).is_pending());

        let stats = display.stats();
        assert_eq!((stats.swaps, stats.clears, stats.pushes), (1, 1, 0));
    }

    #[test]
    fn test_polls_return_with_register_idle() {
        let registers = TextModeRegisters::<8>::new();
        let mut display = RegisterDisplay::new(&registers);

        thread::scope(|s| {
            s.spawn(|| {
                let mut acknowledged = 0;
                while acknowledged < 3 {
                    for command in Command::ALL {
                        let register = registers.host_register(command);
                        if register.is_pending() {
                            register.acknowledge();
                            acknowledged += 1;
                        }
                    }
                    std::hint::spin_loop();
                }
            });

            display.clear_blocking();
            assert!(!registers.register(Command::Clear).is_pending());

            display.push_blocking("abc");
            assert!(!registers.register(Command::Push).is_pending());

            display.present();
            assert!(!registers.register(Command::Swap).is_pending());
        });
    }

    #[test]
    fn test_register_map_matches_block() {
        let registers: TextModeRegisters = TextModeRegisters::new();
        let display = RegisterDisplay::new(&registers);

        let map = display.register_map();
        assert_eq!(map.transfer_buffer_len, TEXTMODE_BUFFER_LENGTH);
        assert_eq!(map.validate(), Ok(()));
    }
}
