// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! The display sequence: 9 down to 0, then a decimal-point-only frame.

use crate::segments::{self, SegmentPattern};

/// One frame of the display sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    /// A decimal digit, always 0-9 as produced by [`FrameSequence`].
    Digit(u8),
    /// Blank digit with only the decimal point lit.
    DecimalPoint,
}

impl Frame {
    /// Segment pattern for this frame.
    pub fn pattern(self) -> SegmentPattern {
        match self {
            Frame::Digit(digit) => segments::encode(digit).unwrap_or(SegmentPattern::BLANK),
            Frame::DecimalPoint => SegmentPattern::DECIMAL_POINT,
        }
    }
}

/// Infinite iterator over the frame sequence 9, 8, ... 0, decimal point,
/// starting over forever. Owned exclusively by the main loop.
pub struct FrameSequence {
    step: u8,
}

impl FrameSequence {
    pub const fn new() -> Self {
        Self { step: 0 }
    }
}

impl Iterator for FrameSequence {
    type Item = Frame;

    /// Never returns `None`; the sequence cycles with period 11.
    fn next(&mut self) -> Option<Frame> {
        let frame = if self.step < 10 {
            Frame::Digit(9 - self.step)
        } else {
            Frame::DecimalPoint
        };
        self.step = (self.step + 1) % 11;
        Some(frame)
    }
}
