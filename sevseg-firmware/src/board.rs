// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Board bring-up: clocks, pins and the timer peripheral.

use rp2040_hal::clocks::init_clocks_and_plls;
use rp2040_hal::gpio::{bank0, FunctionSioOutput, Pin, PinState, Pins, PullDown};
use rp2040_hal::{pac, Sio, Timer, Watchdog};
use sevseg_common::ShiftRegister;

use crate::scheduler::TimerScheduler;

/// External crystal frequency on the board.
const XOSC_CRYSTAL_FREQ_HZ: u32 = 12_000_000;

pub type DataPin = Pin<bank0::Gpio2, FunctionSioOutput, PullDown>;
pub type ClockPin = Pin<bank0::Gpio3, FunctionSioOutput, PullDown>;
pub type OutputEnablePin = Pin<bank0::Gpio4, FunctionSioOutput, PullDown>;
pub type DigitSelectPin = Pin<bank0::Gpio5, FunctionSioOutput, PullDown>;
pub type StatusLedAPin = Pin<bank0::Gpio24, FunctionSioOutput, PullDown>;
pub type StatusLedBPin = Pin<bank0::Gpio25, FunctionSioOutput, PullDown>;

/// Initialized board: the display bus and the timer subsystem.
pub struct Board {
    pub display: ShiftRegister<DataPin, ClockPin, OutputEnablePin>,
    pub scheduler: TimerScheduler,
    /// Only one digit position exists on this board; its select line is
    /// driven high here and never changes again.
    _digit_select: DigitSelectPin,
}

impl Board {
    pub fn init() -> Self {
        let mut pac = defmt::unwrap!(pac::Peripherals::take());
        let mut watchdog = Watchdog::new(pac.WATCHDOG);

        let clocks = defmt::unwrap!(init_clocks_and_plls(
            XOSC_CRYSTAL_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok());

        let sio = Sio::new(pac.SIO);
        let pins = Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );
        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

        // The status pair starts in opposite phases; the blink tick toggles
        // both together from then on.
        let led_a = pins.gpio24.into_push_pull_output_in_state(PinState::Low);
        let led_b = pins.gpio25.into_push_pull_output_in_state(PinState::High);

        let digit_select = pins.gpio5.into_push_pull_output_in_state(PinState::High);

        let display = ShiftRegister::new(
            pins.gpio2.into_push_pull_output(),
            pins.gpio3.into_push_pull_output(),
            pins.gpio4.into_push_pull_output(),
        );

        let scheduler = TimerScheduler::init(&mut timer, led_a, led_b);

        Board {
            display,
            scheduler,
            _digit_select: digit_select,
        }
    }
}
