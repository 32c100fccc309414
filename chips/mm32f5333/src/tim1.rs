// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Advanced control timer with complementary outputs, dead time, break input
//! and a fifth compare channel.

use crate::memory_map::TIM1_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite, WriteOnly};
use crate::utilities::StaticRef;

pub use crate::tim2::{CR1, DCR, PSC, SMCR};

register_structs! {
    pub Tim1Registers {
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
        /// repetition counter
        (0x030 => pub rcr: ReadWrite<u32, RCR::Register>),
        (0x034 => pub ccr1: ReadWrite<u32, CCR::Register>),
        (0x038 => pub ccr2: ReadWrite<u32, CCR::Register>),
        (0x03C => pub ccr3: ReadWrite<u32, CCR::Register>),
        (0x040 => pub ccr4: ReadWrite<u32, CCR::Register>),
        /// break and dead-time register
        (0x044 => pub bdtr: ReadWrite<u32, BDTR::Register>),
        (0x048 => pub dcr: ReadWrite<u32, DCR::Register>),
        (0x04C => pub dmar: ReadWrite<u32>),
        (0x050 => _reserved0),
        /// capture/compare mode register 3, channel 5 output only
        (0x054 => pub ccmr3_output: ReadWrite<u32, CCMR3_Output::Register>),
        (0x058 => pub ccr5: ReadWrite<u32, CCR::Register>),
        (0x05C => pub pder: ReadWrite<u32, PDER::Register>),
        (0x060 => pub ccr1fall: ReadWrite<u32, CCR::Register>),
        (0x064 => pub ccr2fall: ReadWrite<u32, CCR::Register>),
        (0x068 => pub ccr3fall: ReadWrite<u32, CCR::Register>),
        (0x06C => pub ccr4fall: ReadWrite<u32, CCR::Register>),
        (0x070 => pub ccr5fall: ReadWrite<u32, CCR::Register>),
        /// break input filter
        (0x074 => pub bkinf: ReadWrite<u32, BKINF::Register>),
        (0x078 => @END),
    }
}

register_bitfields![u32,
    pub CR2 [
        /// Capture/compare preloaded control
        CCPC OFFSET(0) NUMBITS(1) [],
        /// Capture/compare control update on TRGI
        CCUS OFFSET(2) NUMBITS(1) [],
        CCDS OFFSET(3) NUMBITS(1) [],
        MMS OFFSET(4) NUMBITS(3) [
            Reset = 0,
            Enable = 1,
            Update = 2,
            ComparePulse = 3,
            Oc1Ref = 4,
            Oc2Ref = 5,
            Oc3Ref = 6,
            Oc4Ref = 7
        ],
        TI1S OFFSET(7) NUMBITS(1) [],
        OIS1 OFFSET(8) NUMBITS(1) [],
        OIS1N OFFSET(9) NUMBITS(1) [],
        OIS2 OFFSET(10) NUMBITS(1) [],
        OIS2N OFFSET(11) NUMBITS(1) [],
        OIS3 OFFSET(12) NUMBITS(1) [],
        OIS3N OFFSET(13) NUMBITS(1) [],
        OIS4 OFFSET(14) NUMBITS(1) [],
        OIS5 OFFSET(16) NUMBITS(1) []
    ],
    pub DIER [
        UIE OFFSET(0) NUMBITS(1) [],
        CC1IE OFFSET(1) NUMBITS(1) [],
        CC2IE OFFSET(2) NUMBITS(1) [],
        CC3IE OFFSET(3) NUMBITS(1) [],
        CC4IE OFFSET(4) NUMBITS(1) [],
        COMIE OFFSET(5) NUMBITS(1) [],
        TIE OFFSET(6) NUMBITS(1) [],
        BIE OFFSET(7) NUMBITS(1) [],
        UDE OFFSET(8) NUMBITS(1) [],
        CC1DE OFFSET(9) NUMBITS(1) [],
        CC2DE OFFSET(10) NUMBITS(1) [],
        CC3DE OFFSET(11) NUMBITS(1) [],
        CC4DE OFFSET(12) NUMBITS(1) [],
        COMDE OFFSET(13) NUMBITS(1) [],
        TDE OFFSET(14) NUMBITS(1) [],
        CC5IE OFFSET(16) NUMBITS(1) [],
        CC5DE OFFSET(17) NUMBITS(1) []
    ],
    pub SR [
        UIF OFFSET(0) NUMBITS(1) [],
        CC1IF OFFSET(1) NUMBITS(1) [],
        CC2IF OFFSET(2) NUMBITS(1) [],
        CC3IF OFFSET(3) NUMBITS(1) [],
        CC4IF OFFSET(4) NUMBITS(1) [],
        COMIF OFFSET(5) NUMBITS(1) [],
        TIF OFFSET(6) NUMBITS(1) [],
        BIF OFFSET(7) NUMBITS(1) [],
        CC1OF OFFSET(9) NUMBITS(1) [],
        CC2OF OFFSET(10) NUMBITS(1) [],
        CC3OF OFFSET(11) NUMBITS(1) [],
        CC4OF OFFSET(12) NUMBITS(1) [],
        CC5IF OFFSET(16) NUMBITS(1) []
    ],
    pub EGR [
        UG OFFSET(0) NUMBITS(1) [],
        CC1G OFFSET(1) NUMBITS(1) [],
        CC2G OFFSET(2) NUMBITS(1) [],
        CC3G OFFSET(3) NUMBITS(1) [],
        CC4G OFFSET(4) NUMBITS(1) [],
        COMG OFFSET(5) NUMBITS(1) [],
        TG OFFSET(6) NUMBITS(1) [],
        BG OFFSET(7) NUMBITS(1) [],
        CC5G OFFSET(16) NUMBITS(1) []
    ],
    pub CCMR1_Output [
        CC1S OFFSET(0) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        /// Fast enable
        OC1FE OFFSET(2) NUMBITS(1) [],
        /// Preload enable
        OC1PE OFFSET(3) NUMBITS(1) [],
        OC1M OFFSET(4) NUMBITS(3) [
            Frozen = 0,
            ActiveOnMatch = 1,
            InactiveOnMatch = 2,
            Toggle = 3,
            ForceInactive = 4,
            ForceActive = 5,
            Pwm1 = 6,
            Pwm2 = 7
        ],
        /// Clear on ETRF
        OC1CE OFFSET(7) NUMBITS(1) [],
        CC2S OFFSET(8) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        OC2FE OFFSET(10) NUMBITS(1) [],
        OC2PE OFFSET(11) NUMBITS(1) [],
        OC2M OFFSET(12) NUMBITS(3) [
            Frozen = 0,
            ActiveOnMatch = 1,
            InactiveOnMatch = 2,
            Toggle = 3,
            ForceInactive = 4,
            ForceActive = 5,
            Pwm1 = 6,
            Pwm2 = 7
        ],
        OC2CE OFFSET(15) NUMBITS(1) []
    ],
    pub CCMR1_Input [
        CC1S OFFSET(0) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        /// Capture every 2^n events
        IC1PSC OFFSET(2) NUMBITS(2) [],
        /// Input filter
        IC1F OFFSET(4) NUMBITS(4) [],
        CC2S OFFSET(8) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        IC2PSC OFFSET(10) NUMBITS(2) [],
        IC2F OFFSET(12) NUMBITS(4) []
    ],
    pub CCMR2_Output [
        CC3S OFFSET(0) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        /// Fast enable
        OC3FE OFFSET(2) NUMBITS(1) [],
        /// Preload enable
        OC3PE OFFSET(3) NUMBITS(1) [],
        OC3M OFFSET(4) NUMBITS(3) [
            Frozen = 0,
            ActiveOnMatch = 1,
            InactiveOnMatch = 2,
            Toggle = 3,
            ForceInactive = 4,
            ForceActive = 5,
            Pwm1 = 6,
            Pwm2 = 7
        ],
        /// Clear on ETRF
        OC3CE OFFSET(7) NUMBITS(1) [],
        CC4S OFFSET(8) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        OC4FE OFFSET(10) NUMBITS(1) [],
        OC4PE OFFSET(11) NUMBITS(1) [],
        OC4M OFFSET(12) NUMBITS(3) [
            Frozen = 0,
            ActiveOnMatch = 1,
            InactiveOnMatch = 2,
            Toggle = 3,
            ForceInactive = 4,
            ForceActive = 5,
            Pwm1 = 6,
            Pwm2 = 7
        ],
        OC4CE OFFSET(15) NUMBITS(1) []
    ],
    pub CCMR2_Input [
        CC3S OFFSET(0) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        /// Capture every 2^n events
        IC3PSC OFFSET(2) NUMBITS(2) [],
        /// Input filter
        IC3F OFFSET(4) NUMBITS(4) [],
        CC4S OFFSET(8) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        IC4PSC OFFSET(10) NUMBITS(2) [],
        IC4F OFFSET(12) NUMBITS(4) []
    ],
    pub CCMR3_Output [
        OC5FE OFFSET(2) NUMBITS(1) [],
        OC5PE OFFSET(3) NUMBITS(1) [],
        OC5M OFFSET(4) NUMBITS(3) [
            Frozen = 0,
            ActiveOnMatch = 1,
            InactiveOnMatch = 2,
            Toggle = 3,
            ForceInactive = 4,
            ForceActive = 5,
            Pwm1 = 6,
            Pwm2 = 7
        ]
    ],
    pub CCER [
        CC1E OFFSET(0) NUMBITS(1) [],
        CC1P OFFSET(1) NUMBITS(1) [],
        CC1NE OFFSET(2) NUMBITS(1) [],
        CC1NP OFFSET(3) NUMBITS(1) [],
        CC2E OFFSET(4) NUMBITS(1) [],
        CC2P OFFSET(5) NUMBITS(1) [],
        CC2NE OFFSET(6) NUMBITS(1) [],
        CC2NP OFFSET(7) NUMBITS(1) [],
        CC3E OFFSET(8) NUMBITS(1) [],
        CC3P OFFSET(9) NUMBITS(1) [],
        CC3NE OFFSET(10) NUMBITS(1) [],
        CC3NP OFFSET(11) NUMBITS(1) [],
        CC4E OFFSET(12) NUMBITS(1) [],
        CC4P OFFSET(13) NUMBITS(1) [],
        CC4NP OFFSET(15) NUMBITS(1) [],
        CC5E OFFSET(16) NUMBITS(1) [],
        CC5P OFFSET(17) NUMBITS(1) []
    ],
    pub CNT [
        CNT OFFSET(0) NUMBITS(16) []
    ],
    pub ARR [
        ARR OFFSET(0) NUMBITS(16) []
    ],
    pub RCR [
        REP OFFSET(0) NUMBITS(8) []
    ],
    pub CCR [
        CCR OFFSET(0) NUMBITS(16) []
    ],
    pub BDTR [
        /// Dead-time generator setup
        DTG OFFSET(0) NUMBITS(8) [],
        LOCK OFFSET(8) NUMBITS(2) [
            Off = 0,
            Level1 = 1,
            Level2 = 2,
            Level3 = 3
        ],
        /// Off-state selection for idle mode
        OSSI OFFSET(10) NUMBITS(1) [],
        /// Off-state selection for run mode
        OSSR OFFSET(11) NUMBITS(1) [],
        /// Break enable
        BKE OFFSET(12) NUMBITS(1) [],
        BKP OFFSET(13) NUMBITS(1) [
            ActiveLow = 0,
            ActiveHigh = 1
        ],
        /// Automatic output enable
        AOE OFFSET(14) NUMBITS(1) [],
        /// Main output enable
        MOE OFFSET(15) NUMBITS(1) [],
        /// Direct output enable
        DOE OFFSET(16) NUMBITS(1) []
    ],
    pub PDER [
        CCDREPE OFFSET(0) NUMBITS(1) [],
        CCR1_SHIFT_EN OFFSET(1) NUMBITS(1) [],
        CCR2_SHIFT_EN OFFSET(2) NUMBITS(1) [],
        CCR3_SHIFT_EN OFFSET(3) NUMBITS(1) [],
        CCR4_SHIFT_EN OFFSET(4) NUMBITS(1) [],
        CCR5_SHIFT_EN OFFSET(5) NUMBITS(1) []
    ],
    pub BKINF [
        BKINFE OFFSET(0) NUMBITS(1) [],
        /// Filter length
        BKINFF OFFSET(1) NUMBITS(4) []
    ]
];

pub const TIM1: StaticRef<Tim1Registers> =
    unsafe { StaticRef::new(TIM1_BASE as *const Tim1Registers) };

/// Dead time in `BDTR::DTG` encoding for at least `ticks` dead-time clock
/// periods.
///
/// Values between two encodable steps round up to the next step, so the
/// inserted dead time is never shorter than requested. Returns `None` when
/// `ticks` exceeds the 1008 periods the encoding reaches.
pub const fn dead_time(ticks: u32) -> Option<u32> {
    match ticks {
        // DT = DTG[6:0]
        0..=127 => Some(ticks),
        // DT = (64 + DTG[5:0]) * 2
        128..=254 => Some(0b1000_0000 | (ticks.div_ceil(2) - 64)),
        // DT = (32 + DTG[4:0]) * 8
        255..=504 => Some(0b1100_0000 | (ticks.div_ceil(8) - 32)),
        // DT = (32 + DTG[4:0]) * 16
        505..=1008 => Some(0b1110_0000 | (ticks.div_ceil(16) - 32)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::interfaces::{Readable, Writeable};
    use crate::utilities::registers::InMemoryRegister;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<Tim1Registers>(), 0x78);
    }

    #[test]
    fn main_output_with_dead_time() {
        let bdtr = InMemoryRegister::<u32, BDTR::Register>::new(0);
        bdtr.write(BDTR::MOE::SET + BDTR::DTG.val(0x40));
        assert_eq!(bdtr.get(), 0x8040);
    }

    #[test]
    fn dead_time_encoding() {
        assert_eq!(dead_time(0), Some(0));
        assert_eq!(dead_time(127), Some(127));
        assert_eq!(dead_time(128), Some(0x80));
        assert_eq!(dead_time(254), Some(0xBF));
        assert_eq!(dead_time(129), Some(0x81));
        assert_eq!(dead_time(255), Some(0xC0));
        assert_eq!(dead_time(256), Some(0xC0));
        assert_eq!(dead_time(505), Some(0xE0));
        assert_eq!(dead_time(1000), Some(0xFF));
        assert_eq!(dead_time(1008), Some(0xFF));
        assert_eq!(dead_time(1009), None);
    }

    /// Dead-time periods a `DTG` value inserts.
    fn dead_time_periods(dtg: u32) -> u32 {
        match dtg >> 5 {
            0b000..=0b011 => dtg,
            0b100 | 0b101 => (64 + (dtg & 0x3F)) * 2,
            0b110 => (32 + (dtg & 0x1F)) * 8,
            _ => (32 + (dtg & 0x1F)) * 16,
        }
    }

    #[test]
    fn dead_time_rounds_up_to_next_step() {
        for ticks in 0..=1008 {
            let dtg = dead_time(ticks).unwrap();
            assert!(dtg <= 0xFF, "{} -> {:#x}", ticks, dtg);
            let periods = dead_time_periods(dtg);
            let step = match ticks {
                0..=127 => 1,
                128..=254 => 2,
                255..=504 => 8,
                _ => 16,
            };
            assert!(periods >= ticks, "{} -> {}", ticks, periods);
            assert!(periods - ticks < step, "{} -> {}", ticks, periods);
        }
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(CR2 {
            CCPC, CCUS, CCDS, MMS, TI1S, OIS1, OIS1N, OIS2, OIS2N, OIS3, OIS3N, OIS4, OIS5,
        });
        assert_bitfields!(DIER {
            UIE, CC1IE, CC2IE, CC3IE, CC4IE, COMIE, TIE, BIE, UDE, CC1DE, CC2DE, CC3DE, CC4DE,
            COMDE, TDE, CC5IE, CC5DE,
        });
        assert_bitfields!(SR {
            UIF, CC1IF, CC2IF, CC3IF, CC4IF, COMIF, TIF, BIF, CC1OF, CC2OF, CC3OF, CC4OF, CC5IF,
        });
        assert_bitfields!(EGR { UG, CC1G, CC2G, CC3G, CC4G, COMG, TG, BG, CC5G });
        assert_bitfields!(CCMR1_Output {
            CC1S, OC1FE, OC1PE, OC1M, OC1CE, CC2S, OC2FE, OC2PE, OC2M, OC2CE,
        });
        assert_bitfields!(CCMR1_Input { CC1S, IC1PSC, IC1F, CC2S, IC2PSC, IC2F });
        assert_bitfields!(CCMR2_Output {
            CC3S, OC3FE, OC3PE, OC3M, OC3CE, CC4S, OC4FE, OC4PE, OC4M, OC4CE,
        });
        assert_bitfields!(CCMR2_Input { CC3S, IC3PSC, IC3F, CC4S, IC4PSC, IC4F });
        assert_bitfields!(CCMR3_Output { OC5FE, OC5PE, OC5M });
        assert_bitfields!(CCER {
            CC1E, CC1P, CC1NE, CC1NP, CC2E, CC2P, CC2NE, CC2NP, CC3E, CC3P, CC3NE, CC3NP, CC4E,
            CC4P, CC4NP, CC5E, CC5P,
        });
        assert_bitfields!(CNT { CNT });
        assert_bitfields!(ARR { ARR });
        assert_bitfields!(RCR { REP });
        assert_bitfields!(CCR { CCR });
        assert_bitfields!(BDTR { DTG, LOCK, OSSI, OSSR, BKE, BKP, AOE, MOE, DOE });
        assert_bitfields!(PDER {
            CCDREPE, CCR1_SHIFT_EN, CCR2_SHIFT_EN, CCR3_SHIFT_EN, CCR4_SHIFT_EN, CCR5_SHIFT_EN,
        });
        assert_bitfields!(BKINF { BKINFE, BKINFF });
    }
}
