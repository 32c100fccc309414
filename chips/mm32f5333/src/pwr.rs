// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Power control: low power modes, wakeup pins and voltage detector.

use crate::memory_map::PWR_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

register_structs! {
    pub PwrRegisters {
        (0x000 => pub cr1: ReadWrite<u32, CR1::Register>),
        (0x004 => pub csr: ReadOnly<u32, CSR::Register>),
        /// Wakeup pin enable
        (0x008 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// Wakeup pin polarity
        (0x00C => pub cr3: ReadWrite<u32, CR3::Register>),
        /// Wakeup pin filter
        (0x010 => pub cr4: ReadWrite<u32, CR4::Register>),
        /// Voltage detector
        (0x014 => pub cr5: ReadWrite<u32, CR5::Register>),
        (0x018 => pub cr6: ReadWrite<u32, CR6::Register>),
        /// Wakeup flags
        (0x01C => pub sr: ReadOnly<u32, SR::Register>),
        /// Wakeup flag clear
        (0x020 => pub scr: ReadWrite<u32, SCR::Register>),
        (0x024 => _reserved0),
        (0x028 => pub cfgr: ReadWrite<u32, CFGR::Register>),
        (0x02C => @END),
    }
}

register_bitfields![u32,
    pub CR1 [
        /// Regulator in low power mode during stop
        LPDS OFFSET(0) NUMBITS(1) [],
        /// Enter standby instead of stop on deep sleep
        PDDS OFFSET(1) NUMBITS(1) [],
        /// Clear standby flag
        CSBF OFFSET(3) NUMBITS(1) [],
        /// Core voltage scaling
        VOS OFFSET(14) NUMBITS(2) [
            Scale0 = 0,
            Scale1 = 1,
            Scale2 = 2
        ]
    ],
    pub CSR [
        WUF OFFSET(0) NUMBITS(1) [],
        /// Woken up from standby
        SBF OFFSET(1) NUMBITS(1) [],
        /// Voltage detector output
        PVDO OFFSET(2) NUMBITS(1) [],
        VOSRDY OFFSET(14) NUMBITS(1) []
    ],
    pub CR2 [
        EWUP1 OFFSET(0) NUMBITS(1) [],
        EWUP2 OFFSET(1) NUMBITS(1) [],
        EWUP3 OFFSET(2) NUMBITS(1) [],
        EWUP4 OFFSET(3) NUMBITS(1) [],
        EWUP5 OFFSET(4) NUMBITS(1) [],
        EWUP6 OFFSET(5) NUMBITS(1) []
    ],
    pub CR3 [
        WP1 OFFSET(0) NUMBITS(1) [],
        WP2 OFFSET(1) NUMBITS(1) [],
        WP3 OFFSET(2) NUMBITS(1) [],
        WP4 OFFSET(3) NUMBITS(1) [],
        WP5 OFFSET(4) NUMBITS(1) [],
        WP6 OFFSET(5) NUMBITS(1) []
    ],
    pub CR4 [
        /// Wakeup pin routed through the filter
        FILTSEL OFFSET(0) NUMBITS(2) [],
        FILTE OFFSET(2) NUMBITS(2) [
            Disabled = 0,
            Rising = 1,
            Falling = 2,
            BothEdges = 3
        ],
        FILTF OFFSET(4) NUMBITS(1) [],
        FILTCNT OFFSET(8) NUMBITS(8) []
    ],
    pub CR5 [
        /// Voltage detector enable
        PVDE OFFSET(0) NUMBITS(1) [],
        /// Detection level, 1.8 V plus 0.3 V per step
        PLS OFFSET(1) NUMBITS(4) []
    ],
    pub CR6 [
        /// Wakeup delay after standby
        STDBYFSWK OFFSET(0) NUMBITS(3) []
    ],
    pub SR [
        WUF1 OFFSET(0) NUMBITS(1) [],
        WUF2 OFFSET(1) NUMBITS(1) [],
        WUF3 OFFSET(2) NUMBITS(1) [],
        WUF4 OFFSET(3) NUMBITS(1) [],
        WUF5 OFFSET(4) NUMBITS(1) [],
        WUF6 OFFSET(5) NUMBITS(1) []
    ],
    pub SCR [
        CWUF1 OFFSET(0) NUMBITS(1) [],
        CWUF2 OFFSET(1) NUMBITS(1) [],
        CWUF3 OFFSET(2) NUMBITS(1) [],
        CWUF4 OFFSET(3) NUMBITS(1) [],
        CWUF5 OFFSET(4) NUMBITS(1) [],
        CWUF6 OFFSET(5) NUMBITS(1) []
    ],
    pub CFGR [
        /// LSI trim selection
        LSICALSEL OFFSET(0) NUMBITS(5) [],
        LSICAL OFFSET(8) NUMBITS(5) []
    ]
];

pub const PWR: StaticRef<PwrRegisters> =
    unsafe { StaticRef::new(PWR_BASE as *const PwrRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<PwrRegisters>(), 0x2C);
    }

    #[test]
    fn wakeup_pins_line_up() {
        assert_eq!(CR2::EWUP6.shift, SR::WUF6.shift);
        assert_eq!(CR3::WP1.shift, SCR::CWUF1.shift);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(CR1 { LPDS, PDDS, CSBF, VOS });
        assert_bitfields!(CSR { WUF, SBF, PVDO, VOSRDY });
        assert_bitfields!(CR2 { EWUP1, EWUP2, EWUP3, EWUP4, EWUP5, EWUP6 });
        assert_bitfields!(CR3 { WP1, WP2, WP3, WP4, WP5, WP6 });
        assert_bitfields!(CR4 { FILTSEL, FILTE, FILTF, FILTCNT });
        assert_bitfields!(CR5 { PVDE, PLS });
        assert_bitfields!(CR6 { STDBYFSWK });
        assert_bitfields!(SR { WUF1, WUF2, WUF3, WUF4, WUF5, WUF6 });
        assert_bitfields!(SCR { CWUF1, CWUF2, CWUF3, CWUF4, CWUF5, CWUF6 });
        assert_bitfields!(CFGR { LSICALSEL, LSICAL });
    }
}
