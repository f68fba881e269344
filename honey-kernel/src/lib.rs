//! HoneyOS kernel image
//!
//! A freestanding wasm32 module the Honey virtual machine instantiates
//! against a shared memory. The host finds the text-mode register block
//! through the `_textmode_transfer_*` exports, starts a worker that services
//! it, then calls `_start`, which never returns.
//!
//! Everything the kernel draws is decided at build time from kernel.toml.

#![cfg_attr(target_arch = "wasm32", no_std)]

pub mod config;
#[cfg(feature = "defmt")]
pub mod logger;
pub mod registers;

use honey_core::kernel::KernelLoop;
#[cfg(feature = "defmt")]
use honey_core::version::KERNEL_VERSION_STRING;
use honey_display::RegisterDisplay;

use crate::config::KERNEL_CONFIG;
use crate::registers::REGISTERS;

/// Render loop as the image runs it
pub type Kernel<'d> = KernelLoop<'d, RegisterDisplay<'static>>;

/// Build the render loop over the kernel's register block
pub fn boot<'a>(display: &'a mut RegisterDisplay<'static>) -> Kernel<'a> {
    #[cfg(feature = "defmt")]
    defmt::info!(
        "{=str} booting, radix {=u32}",
        KERNEL_VERSION_STRING,
        KERNEL_CONFIG.radix.get()
    );

    let kernel = KernelLoop::new(display, &KERNEL_CONFIG);

    #[cfg(feature = "defmt")]
    defmt::debug!("banner is {=usize} bytes", kernel.banner().len());

    kernel
}

/// Kernel entry: render forever
pub fn kernel_main() -> ! {
    let mut display = RegisterDisplay::new(&REGISTERS);

    boot(&mut display).run(|_cycle| {
        #[cfg(feature = "defmt")]
        defmt::trace!("presented cycle {=u32}", _cycle);
    })
}

#[cfg(target_arch = "wasm32")]
#[export_name = "_start"]
pub extern "C" fn start() -> ! {
    kernel_main()
}

#[cfg(target_arch = "wasm32")]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    #[cfg(feature = "defmt")]
    defmt::error!("kernel panic: {}", defmt::Display2Format(_info));

    // The host reports a trap as a kernel abort
    core::arch::wasm32::unreachable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use honey_display::TextModeDevice;
    use honey_protocol::Command;
    use std::thread;

    #[test]
    fn test_boot_renders_against_host_device() {
        let mut display = RegisterDisplay::new(&REGISTERS);

        let frames = thread::scope(|s| {
            let host = s.spawn(|| {
                let mut device = TextModeDevice::attach(&REGISTERS).unwrap();
                let mut frames = Vec::new();
                while device.swaps() < 2 {
                    if device.service().swapped {
                        frames.push(device.visible_text().unwrap().to_owned());
                    }
                    std::hint::spin_loop();
                }
                frames
            });

            let mut kernel = boot(&mut display);
            assert_eq!(kernel.run_cycle(), 0);
            assert_eq!(kernel.run_cycle(), 1);

            host.join().unwrap()
        });

        assert_eq!(frames.len(), 2);
        assert!(frames[0].contains(KERNEL_CONFIG.signature));
        assert!(frames[0].ends_with(&format!("{}0", KERNEL_CONFIG.label)));
        assert!(frames[1].ends_with(&format!("{}1", KERNEL_CONFIG.label)));
        for command in Command::ALL {
            assert!(!REGISTERS.register(command).is_pending());
        }
    }
}
