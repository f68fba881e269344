//! Render loop driver

use crate::config::KernelConfig;
use crate::fmt::{Radix, RadixString};
use crate::traits::TextModeDisplay;

use super::banner::Banner;
use super::cycle::CycleCounter;
use super::machine::RenderStep;

/// The kernel's permanent render cycle
///
/// Borrows the display for its whole life; nothing else talks to the
/// device while the loop runs.
pub struct KernelLoop<'d, D: TextModeDisplay> {
    display: &'d mut D,
    banner: Banner,
    radix: Radix,
    counter: CycleCounter,
    step: RenderStep,
    cycle_text: RadixString,
}

impl<'d, D: TextModeDisplay> KernelLoop<'d, D> {
    /// Create a loop starting at cycle zero
    pub fn new(display: &'d mut D, config: &KernelConfig<'_>) -> Self {
        Self::with_counter(display, config, CycleCounter::new())
    }

    /// Create a loop starting at a given counter value
    pub fn with_counter(
        display: &'d mut D,
        config: &KernelConfig<'_>,
        counter: CycleCounter,
    ) -> Self {
        Self {
            display,
            banner: Banner::compose(config),
            radix: config.radix,
            counter,
            step: RenderStep::FIRST,
            cycle_text: RadixString::new(),
        }
    }

    /// Step the next call to [`step`](Self::step) will execute
    pub fn current_step(&self) -> RenderStep {
        self.step
    }

    /// Counter value of the cycle in progress
    pub fn counter(&self) -> CycleCounter {
        self.counter
    }

    /// Banner pushed each cycle
    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    /// Execute one step and move to the next
    ///
    /// Returns the step that ran.
    pub fn step(&mut self) -> RenderStep {
        let step = self.step;

        match step {
            RenderStep::Clear => self.display.clear(),
            RenderStep::AwaitClear => self.display.poll_clear(),
            RenderStep::Format => {
                self.cycle_text = self.radix.format(i64::from(self.counter.value()));
            }
            RenderStep::PushBanner => self.display.push(self.banner.as_bytes()),
            RenderStep::AwaitBanner => self.display.poll_push(),
            RenderStep::PushCycle => self.display.push(self.cycle_text.as_bytes()),
            RenderStep::AwaitCycle => self.display.poll_push(),
            RenderStep::Swap => self.display.swap(),
            RenderStep::AwaitSwap => self.display.poll_swap(),
            RenderStep::Advance => self.counter.advance(),
        }

        self.step = step.next();
        step
    }

    /// Run steps until the current cycle has been presented and counted
    ///
    /// Returns the counter value that was drawn.
    pub fn run_cycle(&mut self) -> u32 {
        let drawn = self.counter.value();
        while self.step() != RenderStep::Advance {}
        drawn
    }

    /// Render forever
    ///
    /// `on_cycle` runs after each presented frame with the counter value it
    /// showed.
    pub fn run<F: FnMut(u32)>(mut self, mut on_cycle: F) -> ! {
        loop {
            let drawn = self.run_cycle();
            on_cycle(drawn);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Push(Vec<u8>),
        Swap,
        Clear,
        PollPush,
        PollSwap,
        PollClear,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Recorder {
        fn pushed(&self) -> Vec<String> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Push(bytes) => Some(String::from_utf8(bytes.clone()).unwrap()),
                    _ => None,
                })
                .collect()
        }
    }

    impl TextModeDisplay for Recorder {
        fn push(&mut self, text: &[u8]) {
            self.calls.push(Call::Push(text.to_vec()));
        }
        fn swap(&mut self) {
            self.calls.push(Call::Swap);
        }
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }
        fn poll_push(&mut self) {
            self.calls.push(Call::PollPush);
        }
        fn poll_swap(&mut self) {
            self.calls.push(Call::PollSwap);
        }
        fn poll_clear(&mut self) {
            self.calls.push(Call::PollClear);
        }
    }

    fn plain_config() -> KernelConfig<'static> {
        KernelConfig {
            icon: false,
            ..KernelConfig::DEFAULT
        }
    }

    #[test]
    fn test_one_cycle_call_sequence() {
        let mut display = Recorder::default();
        let drawn = KernelLoop::new(&mut display, &plain_config()).run_cycle();

        assert_eq!(drawn, 0);
        assert_eq!(
            display.calls,
            vec![
                Call::Clear,
                Call::PollClear,
                Call::Push(b"With love! <3 - GetAGripGal\nCycle: ".to_vec()),
                Call::PollPush,
                Call::Push(b"0".to_vec()),
                Call::PollPush,
                Call::Swap,
                Call::PollSwap,
            ]
        );
    }

    #[test]
    fn test_three_cycles_push_zero_one_two() {
        let mut display = Recorder::default();
        {
            let mut kernel = KernelLoop::new(&mut display, &plain_config());
            for expected in 0..3 {
                assert_eq!(kernel.run_cycle(), expected);
            }
            assert_eq!(kernel.counter().value(), 3);
            assert_eq!(kernel.current_step(), RenderStep::FIRST);
        }

        let counters: Vec<String> = display
            .pushed()
            .into_iter()
            .filter(|text| !text.contains("Cycle"))
            .collect();
        assert_eq!(counters, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_counter_uses_configured_radix() {
        let mut display = Recorder::default();
        let config = KernelConfig {
            radix: Radix::HEX,
            ..plain_config()
        };
        KernelLoop::with_counter(&mut display, &config, CycleCounter::starting_at(255)).run_cycle();

        assert_eq!(display.pushed().last().map(String::as_str), Some("ff"));
    }

    #[test]
    fn test_counter_wraps_to_zero() {
        let mut display = Recorder::default();
        {
            let mut kernel = KernelLoop::with_counter(
                &mut display,
                &plain_config(),
                CycleCounter::starting_at(u32::MAX),
            );
            assert_eq!(kernel.run_cycle(), u32::MAX);
            assert_eq!(kernel.run_cycle(), 0);
        }

        let pushed = display.pushed();
        assert_eq!(pushed[1], "4294967295");
        assert_eq!(pushed[3], "0");
    }

    #[test]
    fn test_step_reports_what_ran() {
        let mut display = Recorder::default();
        let mut kernel = KernelLoop::new(&mut display, &plain_config());

        assert_eq!(kernel.step(), RenderStep::Clear);
        assert_eq!(kernel.step(), RenderStep::AwaitClear);
        assert_eq!(kernel.current_step(), RenderStep::Format);
    }

    #[test]
    fn test_stock_banner_pushed_first() {
        let mut display = Recorder::default();
        let banner = {
            let mut kernel = KernelLoop::new(&mut display, &KernelConfig::default());
            kernel.run_cycle();
            kernel.banner().as_str().to_owned()
        };

        assert!(banner.contains("With love! <3 - GetAGripGal"));
        assert_eq!(display.pushed()[0], banner);
    }
}
