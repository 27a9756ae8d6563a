// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Bit-banged driver for the 74HC595-class shift register behind the digit.

use embedded_hal::digital::OutputPin;

use crate::segments::SegmentPattern;

/// Clock periods per transfer: 8 data bits plus one trailing period that
/// pushes the last bit through to the register's output stage.
const CLOCK_PERIODS: u8 = 9;

/// Three-wire connection to the shift register.
///
/// `output_enable` is active low on the wire: driving it high blanks the
/// display, driving it low makes the latched pattern visible.
///
/// Not reentrant; the main loop is the only caller.
pub struct ShiftRegister<Data, Clock, Oe> {
    data: Data,
    clock: Clock,
    output_enable: Oe,
}

impl<Data, Clock, Oe> ShiftRegister<Data, Clock, Oe>
where
    Data: OutputPin,
    Clock: OutputPin,
    Oe: OutputPin,
{
    /// Takes ownership of the bus pins and parks them at their idle levels:
    /// data and clock low, output blanked.
    pub fn new(mut data: Data, mut clock: Clock, mut output_enable: Oe) -> Self {
        data.set_low().ok();
        clock.set_low().ok();
        output_enable.set_high().ok();
        Self {
            data,
            clock,
            output_enable,
        }
    }

    /// Serialize `pattern` into the register, MSB first, then make it
    /// visible.
    ///
    /// The output stays blanked for the whole transfer so partial shift
    /// states never reach the display. The register samples the data line
    /// on each rising clock edge; the ninth period carries a fixed 0.
    pub fn display(&mut self, pattern: SegmentPattern) {
        self.output_enable.set_high().ok();

        let bits = pattern.bits();
        let mut mask: u8 = 0x80;
        for _ in 0..CLOCK_PERIODS {
            self.clock.set_low().ok();
            if bits & mask != 0 {
                self.data.set_high().ok();
            } else {
                self.data.set_low().ok();
            }
            self.clock.set_high().ok();
            // after eight shifts the mask is 0, so the trailing period
            // clocks out a 0
            mask >>= 1;
        }

        self.output_enable.set_low().ok();
    }
}
