// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Fixed timing parameters of the display firmware.
//!
//! The tick period and the derived blink period are hardware-clock
//! approximations inherited from the reference board, not invariants;
//! anything that checks behavior counts ticks instead of wall-clock time.

/// How long each frame of the digit sequence stays on the display.
pub const FRAME_DWELL_MS: u32 = 100;

/// Blink ticks per status-LED toggle. The counter wraps modulo this value
/// and every wrap toggles both LEDs once.
pub const BLINK_WRAP: u8 = 32;

/// Period of the free-running blink tick.
pub const BLINK_TICK_PERIOD_MS: u32 = 65;

/// Period of the sleep countdown tick: one millisecond.
pub const SLEEP_TICK_PERIOD_US: u32 = 1_000;
