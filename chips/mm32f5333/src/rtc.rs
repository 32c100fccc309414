// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Real-time clock.
//!
//! The 32-bit counter, prescaler and alarm are each split over a high and a
//! low 16-bit register. Writes to them are only accepted while `CRL::CNF` is
//! set and take effect once `CRL::RTOFF` reads back as 1.

use crate::memory_map::RTC_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

register_structs! {
    pub RtcRegisters {
        /// Control register high
        (0x000 => pub crh: ReadWrite<u32, CRH::Register>),
        /// Control register low
        (0x004 => pub crl: ReadWrite<u32, CRL::Register>),
        /// Prescaler load, high and low halves
        (0x008 => pub prlh: ReadWrite<u32, PRLH::Register>),
        (0x00C => pub prll: ReadWrite<u32, HALF::Register>),
        /// Prescaler divider, high and low halves
        (0x010 => pub divh: ReadOnly<u32, DIVH::Register>),
        (0x014 => pub divl: ReadOnly<u32, HALF::Register>),
        /// Counter, high and low halves
        (0x018 => pub cnth: ReadWrite<u32, HALF::Register>),
        (0x01C => pub cntl: ReadWrite<u32, HALF::Register>),
        /// Alarm, high and low halves
        (0x020 => pub alrh: ReadWrite<u32, HALF::Register>),
        (0x024 => pub alrl: ReadWrite<u32, HALF::Register>),
        /// Millisecond alarm, high and low halves
        (0x028 => pub msrh: ReadWrite<u32, HALF::Register>),
        (0x02C => pub msrl: ReadWrite<u32, HALF::Register>),
        /// LSE oscillator tuning
        (0x030 => pub lse_cfg: ReadWrite<u32, LSE_CFG::Register>),
        (0x034 => @END),
    }
}

register_bitfields![u32,
    pub CRH [
        /// Second interrupt enable
        SECIE OFFSET(0) NUMBITS(1) [],
        /// Alarm interrupt enable
        ALRIE OFFSET(1) NUMBITS(1) [],
        /// Overflow interrupt enable
        OWIE OFFSET(2) NUMBITS(1) []
    ],
    pub CRL [
        /// Second flag
        SECF OFFSET(0) NUMBITS(1) [],
        /// Alarm flag
        ALRF OFFSET(1) NUMBITS(1) [],
        /// Overflow flag
        OWF OFFSET(2) NUMBITS(1) [],
        /// Registers synchronized
        RSF OFFSET(3) NUMBITS(1) [],
        /// Configuration flag
        CNF OFFSET(4) NUMBITS(1) [],
        /// Last write operation completed
        RTOFF OFFSET(5) NUMBITS(1) [],
        /// Millisecond alarm enable
        ALPEN OFFSET(6) NUMBITS(1) []
    ],
    pub PRLH [
        PRL OFFSET(0) NUMBITS(4) []
    ],
    pub DIVH [
        DIV OFFSET(0) NUMBITS(4) []
    ],
    /// Low or high half of a 32-bit quantity
    pub HALF [
        VALUE OFFSET(0) NUMBITS(16) []
    ],
    pub LSE_CFG [
        /// Temperature compensation
        LSE_TC OFFSET(0) NUMBITS(2) [],
        /// Drive strength
        LSE_DR OFFSET(2) NUMBITS(2) [],
        /// Feedback resistor
        LSE_RFB_SEL OFFSET(4) NUMBITS(2) [],
        /// Bias current
        LSE_IB OFFSET(6) NUMBITS(2) [],
        /// Amplitude control enable
        LSE_AAC OFFSET(8) NUMBITS(1) []
    ]
];

pub const RTC: StaticRef<RtcRegisters> = unsafe { StaticRef::new(RTC_BASE as *const RtcRegisters) };

/// Join the high and low halves of a split RTC quantity.
pub const fn join_halves(high: u32, low: u32) -> u32 {
    ((high & 0xFFFF) << 16) | (low & 0xFFFF)
}

/// Split a 32-bit quantity into the (high, low) values to write.
pub const fn split_halves(value: u32) -> (u32, u32) {
    (value >> 16, value & 0xFFFF)
}
