// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Tick-driven state machines behind the two timer duties.
//!
//! Both are pure counters: the interrupt handlers that own them feed in
//! ticks and act on the returned signals. Only the tick-handler context
//! ever mutates them.

use crate::config::BLINK_WRAP;

/// Free-running tick counter deriving the status-LED blink cadence.
///
/// Wraps modulo [`BLINK_WRAP`]; each wrap means the paired status LEDs are
/// due for a toggle. Never reset except by wraparound.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkCounter {
    ticks: u8,
}

impl BlinkCounter {
    pub const fn new() -> Self {
        Self { ticks: 0 }
    }

    /// Advance one hardware tick. Returns `true` exactly when the counter
    /// wraps to zero and the LEDs should toggle.
    pub fn tick(&mut self) -> bool {
        self.ticks = (self.ticks + 1) % BLINK_WRAP;
        self.ticks == 0
    }
}

/// One-shot millisecond countdown backing a blocking sleep.
///
/// Created when a sleep is requested and torn down once it reports
/// completion; at most one is in flight at a time.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SleepCountdown {
    remaining_ms: u32,
}

impl SleepCountdown {
    /// `milliseconds` must be nonzero; zero-length sleeps are rejected at
    /// the call site before a countdown exists.
    pub fn new(milliseconds: u32) -> Self {
        debug_assert!(milliseconds > 0);
        Self {
            remaining_ms: milliseconds,
        }
    }

    /// Count one elapsed millisecond. Returns `true` when the countdown
    /// reaches zero and the sleeper must be woken.
    pub fn tick(&mut self) -> bool {
        self.remaining_ms = self.remaining_ms.saturating_sub(1);
        self.remaining_ms == 0
    }

    /// Milliseconds left before the sleeper wakes.
    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }
}
