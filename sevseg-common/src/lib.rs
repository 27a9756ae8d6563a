// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Shared display logic for the sevseg firmware.
//!
//! Everything in this crate is either pure state-machine logic or generic
//! over `embedded-hal` traits, so it compiles for the RP2040 target and for
//! the host alike; the wire-level and timing tests run on the host against
//! this crate's public API.

#![no_std]

pub mod config;
pub mod frames;
pub mod segments;
pub mod shift;
pub mod tick;

// Re-export commonly used types
pub use config::{BLINK_TICK_PERIOD_MS, BLINK_WRAP, FRAME_DWELL_MS, SLEEP_TICK_PERIOD_US};
pub use frames::{Frame, FrameSequence};
pub use segments::{encode, SegmentPattern};
pub use shift::ShiftRegister;
pub use tick::{BlinkCounter, SleepCountdown};
