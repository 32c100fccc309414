// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Low power timer.

use crate::memory_map::LPTIM1_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

register_structs! {
    pub LptimRegisters {
        (0x000 => pub cfg: ReadWrite<u32, CFG::Register>),
        (0x004 => pub ie: ReadWrite<u32, INT::Register>),
        /// Interrupt flags, write 1 to clear
        (0x008 => pub if_: ReadWrite<u32, INT::Register>),
        (0x00C => pub ctrl: ReadWrite<u32, CTRL::Register>),
        (0x010 => pub cnt: ReadOnly<u32, COUNT::Register>),
        (0x014 => pub cmp: ReadWrite<u32, COUNT::Register>),
        /// Auto reload target
        (0x018 => pub target: ReadWrite<u32, COUNT::Register>),
        (0x01C => @END),
    }
}

register_bitfields![u32,
    pub CFG [
        MODE OFFSET(0) NUMBITS(1) [
            Continuous = 0,
            OneShot = 1
        ],
        TMODE OFFSET(1) NUMBITS(2) [
            Normal = 0,
            /// Count external trigger pulses
            PulseCount = 1,
            /// Timeout reset on trigger
            Timeout = 2
        ],
        /// Toggle the output on compare match
        PWM OFFSET(3) NUMBITS(1) [],
        POLARITY OFFSET(4) NUMBITS(1) [
            ActiveHigh = 0,
            ActiveLow = 1
        ],
        /// Input filter enable
        FLTEN OFFSET(5) NUMBITS(1) [],
        TRIGSEL OFFSET(6) NUMBITS(2) [
            Pin = 0,
            Comp1 = 1,
            Comp2 = 2
        ],
        TRIGCFG OFFSET(8) NUMBITS(2) [
            RisingEdge = 0,
            FallingEdge = 1,
            BothEdges = 2
        ],
        /// Counter clock divider, 2^n
        DIVSEL OFFSET(10) NUMBITS(3) []
    ],
    pub INT [
        COMP OFFSET(0) NUMBITS(1) [],
        TRIG OFFSET(1) NUMBITS(1) [],
        OV OFFSET(2) NUMBITS(1) []
    ],
    pub CTRL [
        LPTEN OFFSET(0) NUMBITS(1) []
    ],
    pub COUNT [
        VALUE OFFSET(0) NUMBITS(16) []
    ]
];

pub const LPTIM1: StaticRef<LptimRegisters> =
    unsafe { StaticRef::new(LPTIM1_BASE as *const LptimRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<LptimRegisters>(), 0x1C);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(CFG { MODE, TMODE, PWM, POLARITY, FLTEN, TRIGSEL, TRIGCFG, DIVSEL });
        assert_bitfields!(INT { COMP, TRIG, OV });
        assert_bitfields!(CTRL { LPTEN });
        assert_bitfields!(COUNT { VALUE });
    }
}
