// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Extended interrupt and event controller.
//!
//! Lines 0 to 15 follow the GPIO pins selected in `SYSCFG_EXTICRx`. The
//! upper lines are wired to internal sources:
//!
//! | Line | Source |
//! |------|--------|
//! | 16 | PVD |
//! | 17 | RTC alarm |
//! | 18 | USB wakeup |
//! | 19..=21 | COMP1 to COMP3 |
//! | 22 | LPTIM1 wakeup |
//! | 23 | LPUART1 wakeup |
//! | 24 | I2C1 wakeup |
//! | 25 | I3C1 wakeup |

use crate::memory_map::EXTI_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite};
use crate::utilities::StaticRef;

/// Number of EXTI lines.
pub const NUM_LINES: usize = 26;

register_structs! {
    pub ExtiRegisters {
        /// Interrupt mask
        (0x000 => pub imr: ReadWrite<u32, LINES::Register>),
        /// Event mask
        (0x004 => pub emr: ReadWrite<u32, LINES::Register>),
        /// Rising trigger selection
        (0x008 => pub rtsr: ReadWrite<u32, LINES::Register>),
        /// Falling trigger selection
        (0x00C => pub ftsr: ReadWrite<u32, LINES::Register>),
        /// Software interrupt event
        (0x010 => pub swier: ReadWrite<u32, LINES::Register>),
        /// Pending, write 1 to clear
        (0x014 => pub pr: ReadWrite<u32, LINES::Register>),
        (0x018 => @END),
    }
}

register_bitfields![u32,
    pub LINES [
        LINE0 OFFSET(0) NUMBITS(1) [],
        LINE1 OFFSET(1) NUMBITS(1) [],
        LINE2 OFFSET(2) NUMBITS(1) [],
        LINE3 OFFSET(3) NUMBITS(1) [],
        LINE4 OFFSET(4) NUMBITS(1) [],
        LINE5 OFFSET(5) NUMBITS(1) [],
        LINE6 OFFSET(6) NUMBITS(1) [],
        LINE7 OFFSET(7) NUMBITS(1) [],
        LINE8 OFFSET(8) NUMBITS(1) [],
        LINE9 OFFSET(9) NUMBITS(1) [],
        LINE10 OFFSET(10) NUMBITS(1) [],
        LINE11 OFFSET(11) NUMBITS(1) [],
        LINE12 OFFSET(12) NUMBITS(1) [],
        LINE13 OFFSET(13) NUMBITS(1) [],
        LINE14 OFFSET(14) NUMBITS(1) [],
        LINE15 OFFSET(15) NUMBITS(1) [],
        LINE16 OFFSET(16) NUMBITS(1) [],
        LINE17 OFFSET(17) NUMBITS(1) [],
        LINE18 OFFSET(18) NUMBITS(1) [],
        LINE19 OFFSET(19) NUMBITS(1) [],
        LINE20 OFFSET(20) NUMBITS(1) [],
        LINE21 OFFSET(21) NUMBITS(1) [],
        LINE22 OFFSET(22) NUMBITS(1) [],
        LINE23 OFFSET(23) NUMBITS(1) [],
        LINE24 OFFSET(24) NUMBITS(1) [],
        LINE25 OFFSET(25) NUMBITS(1) []
    ]
];

pub const EXTI: StaticRef<ExtiRegisters> =
    unsafe { StaticRef::new(EXTI_BASE as *const ExtiRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};
    use crate::utilities::registers::InMemoryRegister;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<ExtiRegisters>(), 0x18);
    }

    #[test]
    fn lines_cover_every_source() {
        let imr = InMemoryRegister::<u32, LINES::Register>::new(0);
        imr.write(LINES::LINE0::SET);
        imr.modify(LINES::LINE25::SET);
        assert_eq!(imr.get(), (1 << 25) | 1);
        assert_eq!(LINES::LINE25.shift + 1, NUM_LINES);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(LINES {
            LINE0, LINE1, LINE2, LINE3, LINE4, LINE5, LINE6, LINE7, LINE8, LINE9, LINE10, LINE11,
            LINE12, LINE13, LINE14, LINE15, LINE16, LINE17, LINE18, LINE19, LINE20, LINE21, LINE22,
            LINE23, LINE24, LINE25,
        });
    }
}
