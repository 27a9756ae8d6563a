// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

#![no_std]
#![no_main]

mod board;
mod scheduler;

use defmt_rtt as _;
use panic_probe as _;

defmt::timestamp!("{=u64:us}", { 0 });

use cortex_m_rt::entry;
use sevseg_common::{FrameSequence, FRAME_DWELL_MS};

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

#[entry]
fn main() -> ! {
    defmt::println!("sevseg {} init", env!("SEVSEG_VERSION"));

    let mut board = board::Board::init();

    defmt::println!("display: counting down");

    for frame in FrameSequence::new() {
        defmt::debug!("frame: {}", frame);
        board.display.display(frame.pattern());
        board.scheduler.sleep(FRAME_DWELL_MS);
    }

    unreachable!()
}
