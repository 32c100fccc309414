// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! General purpose 16-bit timer.
//!
//! Same register block as TIM2, with 16-bit counter, reload and compare
//! registers. The control bitfields are those of [`crate::tim2`].

use crate::memory_map::TIM3_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite, WriteOnly};
use crate::utilities::StaticRef;

pub use crate::tim2::{
    CCER, CCMR1_Input, CCMR1_Output, CCMR2_Input, CCMR2_Output, CR1, CR2, DCR, DIER, EGR, OR,
    PDER, PSC, SMCR, SR,
};

register_structs! {
    pub Tim3Registers {
        (0x000 => pub cr1: ReadWrite<u32, CR1::Register>),
        (0x004 => pub cr2: ReadWrite<u32, CR2::Register>),
        (0x008 => pub smcr: ReadWrite<u32, SMCR::Register>),
        (0x00C => pub dier: ReadWrite<u32, DIER::Register>),
        (0x010 => pub sr: ReadWrite<u32, SR::Register>),
        (0x014 => pub egr: WriteOnly<u32, EGR::Register>),
        (0x018 => pub ccmr1_output: ReadWrite<u32, CCMR1_Output::Register>),
        (0x01C => pub ccmr2_output: ReadWrite<u32, CCMR2_Output::Register>),
        (0x020 => pub ccer: ReadWrite<u32, CCER::Register>),
        (0x024 => pub cnt: ReadWrite<u32, CNT::Register>),
        (0x028 => pub psc: ReadWrite<u32, PSC::Register>),
        (0x02C => pub arr: ReadWrite<u32, ARR::Register>),
        (0x030 => _reserved0),
        (0x034 => pub ccr1: ReadWrite<u32, CCR::Register>),
        (0x038 => pub ccr2: ReadWrite<u32, CCR::Register>),
        (0x03C => pub ccr3: ReadWrite<u32, CCR::Register>),
        (0x040 => pub ccr4: ReadWrite<u32, CCR::Register>),
        (0x044 => _reserved1),
        (0x048 => pub dcr: ReadWrite<u32, DCR::Register>),
        (0x04C => pub dmar: ReadWrite<u32>),
        (0x050 => pub or_: ReadWrite<u32, OR::Register>),
        (0x054 => _reserved2),
        (0x05C => pub pder: ReadWrite<u32, PDER::Register>),
        (0x060 => pub ccr1fall: ReadWrite<u32, CCR::Register>),
        (0x064 => pub ccr2fall: ReadWrite<u32, CCR::Register>),
        (0x068 => pub ccr3fall: ReadWrite<u32, CCR::Register>),
        (0x06C => pub ccr4fall: ReadWrite<u32, CCR::Register>),
        (0x070 => @END),
    }
}

register_bitfields![u32,
    pub CNT [
        CNT OFFSET(0) NUMBITS(16) []
    ],
    pub ARR [
        ARR OFFSET(0) NUMBITS(16) []
    ],
    pub CCR [
        CCR OFFSET(0) NUMBITS(16) []
    ]
];

pub const TIM3: StaticRef<Tim3Registers> =
    unsafe { StaticRef::new(TIM3_BASE as *const Tim3Registers) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tim2::Tim2Registers;

    #[test]
    fn block_size() {
        assert_eq!(
            core::mem::size_of::<Tim3Registers>(),
            core::mem::size_of::<Tim2Registers>()
        );
    }

    #[test]
    fn counter_is_16_bits() {
        assert_eq!(CNT::CNT.mask, 0xFFFF);
        assert_eq!(ARR::ARR.mask, 0xFFFF);
        assert_eq!(crate::tim2::CNT::CNT.mask, 0xFFFF_FFFF);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(CNT { CNT });
        assert_bitfields!(ARR { ARR });
        assert_bitfields!(CCR { CCR });
    }
}
