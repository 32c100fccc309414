// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Basic timer, used as the DAC trigger source.

use crate::memory_map::TIM6_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite, WriteOnly};
use crate::utilities::StaticRef;

register_structs! {
    pub Tim6Registers {
        (0x000 => pub cr1: ReadWrite<u32, CR1::Register>),
        (0x004 => pub cr2: ReadWrite<u32, CR2::Register>),
        (0x008 => _reserved0),
        (0x00C => pub dier: ReadWrite<u32, DIER::Register>),
        (0x010 => pub sr: ReadWrite<u32, SR::Register>),
        (0x014 => pub egr: WriteOnly<u32, EGR::Register>),
        (0x018 => _reserved1),
        (0x024 => pub cnt: ReadWrite<u32, CNT::Register>),
        (0x028 => pub psc: ReadWrite<u32, PSC::Register>),
        (0x02C => pub arr: ReadWrite<u32, ARR::Register>),
        (0x030 => @END),
    }
}

register_bitfields![u32,
    pub CR1 [
        CEN OFFSET(0) NUMBITS(1) [],
        UDIS OFFSET(1) NUMBITS(1) [],
        URS OFFSET(2) NUMBITS(1) [],
        OPM OFFSET(3) NUMBITS(1) [],
        ARPE OFFSET(7) NUMBITS(1) []
    ],
    pub CR2 [
        MMS OFFSET(4) NUMBITS(3) [
            Reset = 0,
            Enable = 1,
            Update = 2
        ]
    ],
    pub DIER [
        UIE OFFSET(0) NUMBITS(1) [],
        UDE OFFSET(8) NUMBITS(1) []
    ],
    pub SR [
        UIF OFFSET(0) NUMBITS(1) []
    ],
    pub EGR [
        UG OFFSET(0) NUMBITS(1) []
    ],
    pub CNT [
        CNT OFFSET(0) NUMBITS(16) []
    ],
    pub PSC [
        PSC OFFSET(0) NUMBITS(16) []
    ],
    pub ARR [
        ARR OFFSET(0) NUMBITS(16) []
    ]
];

pub const TIM6: StaticRef<Tim6Registers> =
    unsafe { StaticRef::new(TIM6_BASE as *const Tim6Registers) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<Tim6Registers>(), 0x30);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(CR1 { CEN, UDIS, URS, OPM, ARPE });
        assert_bitfields!(CR2 { MMS });
        assert_bitfields!(DIER { UIE, UDE });
        assert_bitfields!(SR { UIF });
        assert_bitfields!(EGR { UG });
        assert_bitfields!(CNT { CNT });
        assert_bitfields!(PSC { PSC });
        assert_bitfields!(ARR { ARR });
    }
}
