//! The kernel's register block and its exports
//!
//! The host calls these once after instantiation to learn where the
//! transfer buffer and command registers live in linear memory.

use honey_hal::TextModeRegisters;
use honey_protocol::Command;

/// The only register block in the image
pub static REGISTERS: TextModeRegisters = TextModeRegisters::new();

/// Declare `u32` exports plus a table of their names
macro_rules! exports {
    ($table:ident: $($name:ident => $value:expr;)*) => {
        $(
            #[no_mangle]
            pub extern "C" fn $name() -> u32 {
                $value
            }
        )*

        /// Export names and functions, in declaration order
        pub const $table: &[(&str, extern "C" fn() -> u32)] =
            &[$((stringify!($name), $name as extern "C" fn() -> u32)),*];
    };
}

#[cfg(feature = "defmt")]
pub(crate) use exports;

exports! { REGISTER_MAP_EXPORTS:
    _textmode_transfer_buffer_addr => REGISTERS.transfer_buffer().address().to_u32();
    _textmode_transfer_buffer_size => REGISTERS.buffer_len() as u32;
    _textmode_transfer_push_register_addr => REGISTERS.register(Command::Push).address().to_u32();
    _textmode_transfer_swap_register_addr => REGISTERS.register(Command::Swap).address().to_u32();
    _textmode_transfer_clear_register_addr => REGISTERS.register(Command::Clear).address().to_u32();
}

#[cfg(test)]
mod tests {
    use super::*;
    use honey_protocol::{symbols, TEXTMODE_BUFFER_LENGTH};

    #[test]
    fn test_export_names_match_protocol() {
        let names: Vec<&str> = REGISTER_MAP_EXPORTS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, symbols::REGISTER_MAP_EXPORTS);
    }

    #[test]
    fn test_exports_describe_static_block() {
        let map = REGISTERS.register_map();

        assert_eq!(_textmode_transfer_buffer_addr(), map.transfer_buffer.to_u32());
        assert_eq!(_textmode_transfer_buffer_size(), TEXTMODE_BUFFER_LENGTH as u32);
        assert_eq!(_textmode_transfer_push_register_addr(), map.push.to_u32());
        assert_eq!(_textmode_transfer_swap_register_addr(), map.swap.to_u32());
        assert_eq!(_textmode_transfer_clear_register_addr(), map.clear.to_u32());
    }

    #[test]
    fn test_export_table_calls_exports() {
        let values: Vec<u32> = REGISTER_MAP_EXPORTS.iter().map(|(_, export)| export()).collect();
        assert_eq!(values[0], _textmode_transfer_buffer_addr());
        assert_eq!(values[1], 1028);
        assert_eq!(values[4], _textmode_transfer_clear_register_addr());
    }

    #[test]
    fn test_exported_map_is_valid() {
        assert_eq!(REGISTERS.register_map().validate(), Ok(()));
    }

    #[test]
    fn test_register_addresses_are_distinct() {
        let addrs = [
            _textmode_transfer_push_register_addr(),
            _textmode_transfer_swap_register_addr(),
            _textmode_transfer_clear_register_addr(),
        ];
        assert_ne!(addrs[0], addrs[1]);
        assert_ne!(addrs[1], addrs[2]);
        assert_ne!(addrs[0], addrs[2]);
    }
}
