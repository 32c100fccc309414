// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Analog-to-digital converters (ADC1, ADC2).
//!
//! Each converter has 16 input channels. Channel 14 is the internal
//! temperature sensor and channel 15 the internal voltage reference.

use crate::memory_map::{ADC1_BASE, ADC2_BASE};
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

pub const NUM_CHANNELS: usize = 16;
pub const TEMP_SENSOR_CHANNEL: usize = 14;
pub const VREFINT_CHANNEL: usize = 15;

register_structs! {
    pub AdcRegisters {
        /// Data register of the most recent conversion
        (0x000 => pub addata: ReadOnly<u32, ADDR::Register>),
        /// Configuration register
        (0x004 => pub adcfg: ReadWrite<u32, ADCFG::Register>),
        /// Control register
        (0x008 => pub adcr: ReadWrite<u32, ADCR::Register>),
        /// Channel enable register
        (0x00C => pub adchs: ReadWrite<u32, ADCHS::Register>),
        /// Analog watchdog compare register
        (0x010 => pub adcmpr: ReadWrite<u32, ADCMPR::Register>),
        /// Status register
        (0x014 => pub adsta: ReadWrite<u32, ADSTA::Register>),
        /// Per-channel data registers
        (0x018 => pub addr: [ReadOnly<u32, ADDR::Register>; NUM_CHANNELS]),
        /// Extended status register
        (0x058 => pub adsta_ext: ReadWrite<u32, ADSTA_EXT::Register>),
        /// Any-channel sequence, slots 0 to 7
        (0x05C => pub chany0: ReadWrite<u32, CHANY0::Register>),
        /// Any-channel sequence, slots 8 to 15
        (0x060 => pub chany1: ReadWrite<u32, CHANY1::Register>),
        /// Any-channel sequence length
        (0x064 => pub any_cfg: ReadWrite<u32, ANY_CFG::Register>),
        /// Any-channel and injected conversion control
        (0x068 => pub any_cr: ReadWrite<u32, ANY_CR::Register>),
        /// Reference and oversampling configuration
        (0x06C => pub adcfg2: ReadWrite<u32, ADCFG2::Register>),
        /// Sample time, channels 0 to 7
        (0x070 => pub smpr1: ReadWrite<u32, SMPR1::Register>),
        /// Sample time, channels 8 to 15
        (0x074 => pub smpr2: ReadWrite<u32, SMPR2::Register>),
        (0x078 => _reserved0),
        /// Injected channel offsets
        (0x080 => pub jofr: [ReadWrite<u32, JOFR::Register>; 4]),
        /// Injected sequence
        (0x090 => pub jsqr: ReadWrite<u32, JSQR::Register>),
        /// Injected data of the most recent conversion
        (0x094 => pub jaddata: ReadOnly<u32, JDR::Register>),
        (0x098 => _reserved1),
        /// Injected data registers
        (0x0B0 => pub jdr: [ReadOnly<u32, JDR::Register>; 4]),
        (0x0C0 => @END),
    }
}

register_bitfields![u32,
    pub ADDR [
        /// Conversion result
        DATA OFFSET(0) NUMBITS(16) [],
        /// Channel the result belongs to
        CHANNELSEL OFFSET(16) NUMBITS(5) [],
        /// A result was overwritten before being read
        OVERRUN OFFSET(21) NUMBITS(1) [],
        /// The data field holds an unread result
        VALID OFFSET(22) NUMBITS(1) []
    ],
    pub ADCFG [
        /// ADC enable
        ADEN OFFSET(0) NUMBITS(1) [],
        /// Analog watchdog enable
        ADWEN OFFSET(1) NUMBITS(1) [],
        /// Temperature sensor enable
        TSEN OFFSET(2) NUMBITS(1) [],
        /// Voltage reference enable
        VSEN OFFSET(3) NUMBITS(1) [],
        /// Clock prescaler
        ADCPRE OFFSET(4) NUMBITS(4) [],
        /// Resolution
        RSLTCTL OFFSET(8) NUMBITS(3) [
            Bits12 = 0,
            Bits11 = 1,
            Bits10 = 2,
            Bits9 = 3,
            Bits8 = 4
        ],
        /// Injected channel analog watchdog enable
        JADWEN OFFSET(16) NUMBITS(1) []
    ],
    pub ADCR [
        /// End of conversion interrupt enable
        ADIE OFFSET(0) NUMBITS(1) [],
        /// Analog watchdog interrupt enable
        ADWIE OFFSET(1) NUMBITS(1) [],
        /// External trigger enable
        TRGEN OFFSET(2) NUMBITS(1) [],
        DMAEN OFFSET(3) NUMBITS(1) [],
        /// Start conversion
        ADST OFFSET(8) NUMBITS(1) [],
        /// Conversion mode
        ADMD OFFSET(9) NUMBITS(2) [
            Single = 0,
            SingleCycle = 1,
            Continuous = 2
        ],
        /// Data alignment
        ALIGN OFFSET(11) NUMBITS(1) [
            Right = 0,
            Left = 1
        ],
        /// Channel observed by the analog watchdog
        CMPCH OFFSET(12) NUMBITS(5) [],
        /// Scan direction
        SCANDIR OFFSET(17) NUMBITS(1) [],
        /// External trigger delay in ADC clock cycles
        TRGSHIFT OFFSET(18) NUMBITS(3) [],
        /// External trigger source
        TRGSEL OFFSET(21) NUMBITS(5) [],
        TRG_EDGE OFFSET(26) NUMBITS(2) [
            BothEdges = 0,
            Falling = 1,
            Rising = 2,
            Disabled = 3
        ],
        /// End of sampling interrupt enable
        EOSMPIE OFFSET(28) NUMBITS(1) [],
        /// End of single conversion interrupt enable
        EOCIE OFFSET(29) NUMBITS(1) []
    ],
    pub ADCHS [
        /// One enable bit per channel
        CHEN OFFSET(0) NUMBITS(16) []
    ],
    pub ADCMPR [
        CMPLDATA OFFSET(0) NUMBITS(12) [],
        CMPHDATA OFFSET(16) NUMBITS(12) []
    ],
    pub ADSTA [
        /// End of conversion flag, write 1 to clear
        ADIF OFFSET(0) NUMBITS(1) [],
        /// Analog watchdog flag, write 1 to clear
        ADWIF OFFSET(1) NUMBITS(1) [],
        BUSY OFFSET(2) NUMBITS(1) [],
        /// Channel currently converting
        CHANNEL OFFSET(4) NUMBITS(5) []
    ],
    pub ADSTA_EXT [
        EOSMPIF OFFSET(0) NUMBITS(1) [],
        EOCIF OFFSET(1) NUMBITS(1) [],
        JEOSMPIF OFFSET(2) NUMBITS(1) [],
        JEOCIF OFFSET(3) NUMBITS(1) [],
        JEOSIF OFFSET(4) NUMBITS(1) [],
        JBUSY OFFSET(5) NUMBITS(1) []
    ],
    pub CHANY0 [
        SEL0 OFFSET(0) NUMBITS(4) [],
        SEL1 OFFSET(4) NUMBITS(4) [],
        SEL2 OFFSET(8) NUMBITS(4) [],
        SEL3 OFFSET(12) NUMBITS(4) [],
        SEL4 OFFSET(16) NUMBITS(4) [],
        SEL5 OFFSET(20) NUMBITS(4) [],
        SEL6 OFFSET(24) NUMBITS(4) [],
        SEL7 OFFSET(28) NUMBITS(4) []
    ],
    pub CHANY1 [
        SEL8 OFFSET(0) NUMBITS(4) [],
        SEL9 OFFSET(4) NUMBITS(4) [],
        SEL10 OFFSET(8) NUMBITS(4) [],
        SEL11 OFFSET(12) NUMBITS(4) [],
        SEL12 OFFSET(16) NUMBITS(4) [],
        SEL13 OFFSET(20) NUMBITS(4) [],
        SEL14 OFFSET(24) NUMBITS(4) [],
        SEL15 OFFSET(28) NUMBITS(4) []
    ],
    pub ANY_CFG [
        /// Number of slots in the any-channel sequence, minus one
        CHANY_NUM OFFSET(0) NUMBITS(4) []
    ],
    pub ANY_CR [
        /// Any-channel mode enable
        CHANY_MDEN OFFSET(0) NUMBITS(1) [],
        JEOSMPIE OFFSET(1) NUMBITS(1) [],
        JEOCIE OFFSET(2) NUMBITS(1) [],
        JEOSIE OFFSET(3) NUMBITS(1) [],
        /// Run the injected sequence after the regular one
        JAUTO OFFSET(4) NUMBITS(1) [],
        /// Start injected conversion
        JADST OFFSET(5) NUMBITS(1) [],
        JTRGEN OFFSET(6) NUMBITS(1) [],
        JTRGSEL OFFSET(8) NUMBITS(5) [],
        JTRGSHIFT OFFSET(16) NUMBITS(3) [],
        JTRGEDGE OFFSET(20) NUMBITS(2) [
            BothEdges = 0,
            Falling = 1,
            Rising = 2,
            Disabled = 3
        ]
    ],
    pub ADCFG2 [
        /// Reference voltage source
        ADCSREF OFFSET(0) NUMBITS(1) [
            Vdda = 0,
            VrefPlus = 1
        ],
        /// Regular oversampling enable
        ROVSE OFFSET(1) NUMBITS(1) [],
        /// Injected oversampling enable
        JOVSE OFFSET(2) NUMBITS(1) [],
        /// Oversampling ratio
        OVSR OFFSET(4) NUMBITS(3) [
            X2 = 0,
            X4 = 1,
            X8 = 2,
            X16 = 3,
            X32 = 4,
            X64 = 5,
            X128 = 6,
            X256 = 7
        ],
        /// Oversampling right shift
        OVSS OFFSET(8) NUMBITS(4) [],
        /// Triggered oversampling
        TROVS OFFSET(12) NUMBITS(1) []
    ],
    pub SMPR1 [
        SAMCTL0 OFFSET(0) NUMBITS(4) [],
        SAMCTL1 OFFSET(4) NUMBITS(4) [],
        SAMCTL2 OFFSET(8) NUMBITS(4) [],
        SAMCTL3 OFFSET(12) NUMBITS(4) [],
        SAMCTL4 OFFSET(16) NUMBITS(4) [],
        SAMCTL5 OFFSET(20) NUMBITS(4) [],
        SAMCTL6 OFFSET(24) NUMBITS(4) [],
        SAMCTL7 OFFSET(28) NUMBITS(4) []
    ],
    pub SMPR2 [
        SAMCTL8 OFFSET(0) NUMBITS(4) [],
        SAMCTL9 OFFSET(4) NUMBITS(4) [],
        SAMCTL10 OFFSET(8) NUMBITS(4) [],
        SAMCTL11 OFFSET(12) NUMBITS(4) [],
        SAMCTL12 OFFSET(16) NUMBITS(4) [],
        SAMCTL13 OFFSET(20) NUMBITS(4) [],
        SAMCTL14 OFFSET(24) NUMBITS(4) [],
        SAMCTL15 OFFSET(28) NUMBITS(4) []
    ],
    pub JOFR [
        /// Offset subtracted from injected results
        JOFFSET OFFSET(0) NUMBITS(12) []
    ],
    pub JSQR [
        JSQ0 OFFSET(0) NUMBITS(5) [],
        JSQ1 OFFSET(5) NUMBITS(5) [],
        JSQ2 OFFSET(10) NUMBITS(5) [],
        JSQ3 OFFSET(15) NUMBITS(5) [],
        /// Injected sequence length, minus one
        JNUM OFFSET(20) NUMBITS(2) []
    ],
    pub JDR [
        JDATA OFFSET(0) NUMBITS(16) [],
        JCHANNELSEL OFFSET(16) NUMBITS(5) [],
        JOVERRUN OFFSET(21) NUMBITS(1) [],
        JVALID OFFSET(22) NUMBITS(1) []
    ]
];

pub const ADC1: StaticRef<AdcRegisters> =
    unsafe { StaticRef::new(ADC1_BASE as *const AdcRegisters) };
pub const ADC2: StaticRef<AdcRegisters> =
    unsafe { StaticRef::new(ADC2_BASE as *const AdcRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};
    use crate::utilities::registers::{InMemoryRegister, LocalRegisterCopy};

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<AdcRegisters>(), 0xC0);
    }

    #[test]
    fn data_register_decoding() {
        let word = LocalRegisterCopy::<u32, ADDR::Register>::new(0x0060_0abc | (7 << 16));
        assert_eq!(word.read(ADDR::DATA), 0x0abc);
        assert_eq!(word.read(ADDR::CHANNELSEL), 7);
        assert!(word.is_set(ADDR::VALID));
        assert!(word.is_set(ADDR::OVERRUN));
    }

    #[test]
    fn control_encoding() {
        let adcr = InMemoryRegister::<u32, ADCR::Register>::new(0);
        adcr.write(ADCR::ADMD::Continuous + ADCR::TRG_EDGE::Disabled + ADCR::CMPCH.val(14));
        assert_eq!(adcr.get(), (2 << 9) | (3 << 26) | (14 << 12));
        adcr.modify(ADCR::ALIGN::Left);
        assert!(adcr.is_set(ADCR::ALIGN));
        assert!(adcr.matches_all(ADCR::ADMD::Continuous));
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(ADDR { DATA, CHANNELSEL, OVERRUN, VALID });
        assert_bitfields!(ADCFG { ADEN, ADWEN, TSEN, VSEN, ADCPRE, RSLTCTL, JADWEN });
        assert_bitfields!(ADCR {
            ADIE, ADWIE, TRGEN, DMAEN, ADST, ADMD, ALIGN, CMPCH, SCANDIR, TRGSHIFT, TRGSEL,
            TRG_EDGE, EOSMPIE, EOCIE,
        });
        assert_bitfields!(ADCHS { CHEN });
        assert_bitfields!(ADCMPR { CMPLDATA, CMPHDATA });
        assert_bitfields!(ADSTA { ADIF, ADWIF, BUSY, CHANNEL });
        assert_bitfields!(ADSTA_EXT { EOSMPIF, EOCIF, JEOSMPIF, JEOCIF, JEOSIF, JBUSY });
        assert_bitfields!(CHANY0 { SEL0, SEL1, SEL2, SEL3, SEL4, SEL5, SEL6, SEL7 });
        assert_bitfields!(CHANY1 { SEL8, SEL9, SEL10, SEL11, SEL12, SEL13, SEL14, SEL15 });
        assert_bitfields!(ANY_CFG { CHANY_NUM });
        assert_bitfields!(ANY_CR {
            CHANY_MDEN, JEOSMPIE, JEOCIE, JEOSIE, JAUTO, JADST, JTRGEN, JTRGSEL, JTRGSHIFT,
            JTRGEDGE,
        });
        assert_bitfields!(ADCFG2 { ADCSREF, ROVSE, JOVSE, OVSR, OVSS, TROVS });
        assert_bitfields!(SMPR1 {
            SAMCTL0, SAMCTL1, SAMCTL2, SAMCTL3, SAMCTL4, SAMCTL5, SAMCTL6, SAMCTL7,
        });
        assert_bitfields!(SMPR2 {
            SAMCTL8, SAMCTL9, SAMCTL10, SAMCTL11, SAMCTL12, SAMCTL13, SAMCTL14, SAMCTL15,
        });
        assert_bitfields!(JOFR { JOFFSET });
        assert_bitfields!(JSQR { JSQ0, JSQ1, JSQ2, JSQ3, JNUM });
        assert_bitfields!(JDR { JDATA, JCHANNELSEL, JOVERRUN, JVALID });
    }
}
