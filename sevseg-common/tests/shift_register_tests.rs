// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Wire-level tests for the shift register driver.
//!
//! Recording fake pins capture every level change on the three bus lines;
//! the tests then reconstruct what the external register would have sampled
//! on each rising clock edge.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin};
use sevseg_common::segments::{encode, SegmentPattern};
use sevseg_common::shift::ShiftRegister;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Data,
    Clock,
    OutputEnable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Write {
    line: Line,
    high: bool,
}

/// Fake output pin that appends every write to a shared log.
struct RecordingPin {
    line: Line,
    log: Rc<RefCell<Vec<Write>>>,
}

impl ErrorType for RecordingPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Write {
            line: self.line,
            high: false,
        });
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Write {
            line: self.line,
            high: true,
        });
        Ok(())
    }
}

type Bus = ShiftRegister<RecordingPin, RecordingPin, RecordingPin>;

/// Driver over recording pins, with the log drained of the `new()` idle
/// conditioning so each test sees only the transfer it triggers.
fn recording_bus() -> (Bus, Rc<RefCell<Vec<Write>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let pin = |line| RecordingPin {
        line,
        log: Rc::clone(&log),
    };
    let bus = ShiftRegister::new(
        pin(Line::Data),
        pin(Line::Clock),
        pin(Line::OutputEnable),
    );
    log.borrow_mut().clear();
    (bus, log)
}

/// Data levels as sampled by the register: the data line state at each
/// rising clock edge.
fn sampled_bits(log: &[Write]) -> Vec<bool> {
    let mut data_level = false;
    let mut clock_level = false;
    let mut sampled = Vec::new();

    for write in log {
        match write.line {
            Line::Data => data_level = write.high,
            Line::Clock => {
                if write.high && !clock_level {
                    sampled.push(data_level);
                }
                clock_level = write.high;
            }
            Line::OutputEnable => {}
        }
    }

    sampled
}

fn rising_clock_edges(log: &[Write]) -> usize {
    sampled_bits(log).len()
}

#[test]
fn test_display_emits_nine_clock_pulses() {
    let (mut bus, log) = recording_bus();

    bus.display(encode(3).unwrap());

    assert_eq!(rising_clock_edges(&log.borrow()), 9);
}

#[test]
fn test_display_shifts_msb_first() {
    let (mut bus, log) = recording_bus();

    bus.display(encode(1).unwrap()); // 0x06 = 0b0000_0110

    let sampled = sampled_bits(&log.borrow());
    assert_eq!(
        sampled,
        [false, false, false, false, false, true, true, false, false]
    );
}

#[test]
fn test_trailing_period_carries_zero() {
    let (mut bus, log) = recording_bus();

    bus.display(encode(8).unwrap()); // 0x7F, every data bit of the low 7 set

    let sampled = sampled_bits(&log.borrow());
    assert_eq!(sampled.len(), 9);
    assert_eq!(
        &sampled[..8],
        [false, true, true, true, true, true, true, true]
    );
    assert!(!sampled[8], "ninth period must clock out a fixed 0");
}

#[test]
fn test_decimal_point_pattern_leads_with_one() {
    let (mut bus, log) = recording_bus();

    bus.display(SegmentPattern::DECIMAL_POINT); // 0x80

    let sampled = sampled_bits(&log.borrow());
    assert!(sampled[0]);
    assert!(sampled[1..].iter().all(|&bit| !bit));
}

#[test]
fn test_output_blanked_for_whole_transfer() {
    let (mut bus, log) = recording_bus();

    bus.display(encode(5).unwrap());

    let log = log.borrow();
    let first_clock = log
        .iter()
        .position(|w| w.line == Line::Clock)
        .expect("no clock activity");
    let last_clock = log
        .iter()
        .rposition(|w| w.line == Line::Clock)
        .expect("no clock activity");

    // blanked strictly before the first clock edge
    assert!(log[..first_clock]
        .iter()
        .any(|w| w.line == Line::OutputEnable && w.high));
    // and unblanked strictly after the last
    let oe_writes_during: Vec<_> = log[first_clock..=last_clock]
        .iter()
        .filter(|w| w.line == Line::OutputEnable)
        .collect();
    assert!(oe_writes_during.is_empty());
    assert_eq!(
        log[last_clock + 1..]
            .iter()
            .filter(|w| w.line == Line::OutputEnable)
            .map(|w| w.high)
            .collect::<Vec<_>>(),
        [false]
    );
}

#[test]
fn test_display_is_idempotent() {
    let (mut bus, log) = recording_bus();

    bus.display(encode(7).unwrap());
    let first: Vec<Write> = log.borrow_mut().drain(..).collect();

    bus.display(encode(7).unwrap());
    let second: Vec<Write> = log.borrow_mut().drain(..).collect();

    assert_eq!(first, second);
}

#[test]
fn test_new_parks_the_bus() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let pin = |line| RecordingPin {
        line,
        log: Rc::clone(&log),
    };

    let _bus = ShiftRegister::new(
        pin(Line::Data),
        pin(Line::Clock),
        pin(Line::OutputEnable),
    );

    let log = log.borrow();
    assert!(log.contains(&Write {
        line: Line::Data,
        high: false
    }));
    assert!(log.contains(&Write {
        line: Line::Clock,
        high: false
    }));
    assert!(log.contains(&Write {
        line: Line::OutputEnable,
        high: true
    }));
}
