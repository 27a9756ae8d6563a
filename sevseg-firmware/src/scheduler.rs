// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Timer subsystem: the free-running blink tick and the blocking
//! millisecond sleep.
//!
//! The RP2040 timer block has four alarms, so the two duties that would
//! share a single countdown timer on smaller parts each get their own
//! alarm here: alarm 1 free-runs the blink tick for the status LEDs,
//! alarm 0 runs the one-shot countdown behind [`TimerScheduler::sleep`].
//! The tick handlers are the only code that mutates the counters and the
//! LED pins; the main loop only arms the sleep side and waits.

use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};

use cortex_m::asm;
use critical_section::Mutex;
use embedded_hal::digital::StatefulOutputPin;
use rp2040_hal::fugit::ExtU32;
use rp2040_hal::pac::{self, interrupt};
use rp2040_hal::timer::{Alarm, Alarm0, Alarm1};
use rp2040_hal::Timer;
use sevseg_common::{
    BlinkCounter, SleepCountdown, BLINK_TICK_PERIOD_MS, SLEEP_TICK_PERIOD_US,
};

use crate::board::{StatusLedAPin, StatusLedBPin};

/// State owned by the blink tick handler after init.
struct BlinkTick {
    alarm: Alarm1,
    counter: BlinkCounter,
    led_a: StatusLedAPin,
    led_b: StatusLedBPin,
}

/// State owned by the sleep tick handler after init.
struct SleepTick {
    alarm: Alarm0,
    countdown: Option<SleepCountdown>,
}

static BLINK_TICK: Mutex<RefCell<Option<BlinkTick>>> = Mutex::new(RefCell::new(None));
static SLEEP_TICK: Mutex<RefCell<Option<SleepTick>>> = Mutex::new(RefCell::new(None));

/// Set by the sleep tick handler when the countdown reaches zero.
static SLEEP_DONE: AtomicBool = AtomicBool::new(false);

/// Handle to the timer subsystem.
///
/// Exactly one exists, created by [`TimerScheduler::init`]; `sleep` is not
/// reentrant and the main loop is its only caller.
pub struct TimerScheduler {
    _private: (),
}

impl TimerScheduler {
    /// Claims both alarms, starts the free-running blink tick and unmasks
    /// the two timer interrupts.
    pub fn init(timer: &mut Timer, led_a: StatusLedAPin, led_b: StatusLedBPin) -> Self {
        let sleep_alarm = defmt::unwrap!(timer.alarm_0());
        let mut blink_alarm = defmt::unwrap!(timer.alarm_1());

        blink_alarm.enable_interrupt();
        blink_alarm.schedule((BLINK_TICK_PERIOD_MS * 1_000).micros()).ok();

        critical_section::with(|cs| {
            BLINK_TICK.borrow(cs).replace(Some(BlinkTick {
                alarm: blink_alarm,
                counter: BlinkCounter::new(),
                led_a,
                led_b,
            }));
            SLEEP_TICK.borrow(cs).replace(Some(SleepTick {
                alarm: sleep_alarm,
                countdown: None,
            }));
        });

        unsafe {
            pac::NVIC::unmask(pac::Interrupt::TIMER_IRQ_0);
            pac::NVIC::unmask(pac::Interrupt::TIMER_IRQ_1);
        }

        TimerScheduler { _private: () }
    }

    /// Block for `milliseconds`, parking the core in `wfi` between ticks.
    ///
    /// Returns exactly once, after the sleep tick handler has counted the
    /// request down to zero and disarmed its alarm. A zero-length request
    /// returns immediately without touching the hardware.
    pub fn sleep(&mut self, milliseconds: u32) {
        if milliseconds == 0 {
            return;
        }

        SLEEP_DONE.store(false, Ordering::Release);
        critical_section::with(|cs| {
            let mut sleep_tick = SLEEP_TICK.borrow(cs).borrow_mut();
            let sleep_tick = defmt::unwrap!(sleep_tick.as_mut());
            sleep_tick.countdown = Some(SleepCountdown::new(milliseconds));
            sleep_tick.alarm.enable_interrupt();
            sleep_tick.alarm.schedule(SLEEP_TICK_PERIOD_US.micros()).ok();
        });

        while !SLEEP_DONE.load(Ordering::Acquire) {
            // The flag is re-checked with interrupts masked so the final
            // tick cannot land between the check and the wfi; a wake
            // interrupt pended while masked still exits wfi, and its
            // handler runs once the mask is dropped.
            cortex_m::interrupt::free(|_| {
                if !SLEEP_DONE.load(Ordering::Acquire) {
                    asm::wfi();
                }
            });
        }
    }
}

#[interrupt]
fn TIMER_IRQ_0() {
    critical_section::with(|cs| {
        let mut sleep_tick = SLEEP_TICK.borrow(cs).borrow_mut();
        let Some(sleep_tick) = sleep_tick.as_mut() else {
            return;
        };
        sleep_tick.alarm.clear_interrupt();

        let finished = match sleep_tick.countdown.as_mut() {
            Some(countdown) => countdown.tick(),
            // stale fire after a completed countdown was torn down
            None => return,
        };

        if finished {
            sleep_tick.countdown = None;
            sleep_tick.alarm.disable_interrupt();
            SLEEP_DONE.store(true, Ordering::Release);
        } else {
            sleep_tick.alarm.schedule(SLEEP_TICK_PERIOD_US.micros()).ok();
        }
    });
}

#[interrupt]
fn TIMER_IRQ_1() {
    critical_section::with(|cs| {
        let mut blink_tick = BLINK_TICK.borrow(cs).borrow_mut();
        let Some(blink_tick) = blink_tick.as_mut() else {
            return;
        };
        blink_tick.alarm.clear_interrupt();
        blink_tick.alarm.schedule((BLINK_TICK_PERIOD_MS * 1_000).micros()).ok();

        if blink_tick.counter.tick() {
            blink_tick.led_a.toggle().ok();
            blink_tick.led_b.toggle().ok();
        }
    });
}
