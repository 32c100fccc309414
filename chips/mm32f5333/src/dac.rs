// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Digital-to-analog converter, two output channels.

use crate::memory_map::DAC1_BASE;
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

register_structs! {
    pub DacRegisters {
        (0x000 => pub cr: ReadWrite<u32, CR::Register>),
        /// Software trigger
        (0x004 => pub swtrigr: WriteOnly<u32, SWTRIGR::Register>),
        /// Channel 1 holding registers: 12-bit right, 12-bit left, 8-bit right aligned
        (0x008 => pub dhr12r1: ReadWrite<u32, DHR12R::Register>),
        (0x00C => pub dhr12l1: ReadWrite<u32, DHR12L::Register>),
        (0x010 => pub dhr8r1: ReadWrite<u32, DHR8R::Register>),
        /// Channel 2 holding registers
        (0x014 => pub dhr12r2: ReadWrite<u32, DHR12R::Register>),
        (0x018 => pub dhr12l2: ReadWrite<u32, DHR12L::Register>),
        (0x01C => pub dhr8r2: ReadWrite<u32, DHR8R::Register>),
        /// Dual channel holding registers
        (0x020 => pub dhr12rd: ReadWrite<u32, DHR12RD::Register>),
        (0x024 => pub dhr12ld: ReadWrite<u32, DHR12LD::Register>),
        (0x028 => pub dhr8rd: ReadWrite<u32, DHR8RD::Register>),
        /// Output data
        (0x02C => pub dor1: ReadOnly<u32, DOR::Register>),
        (0x030 => pub dor2: ReadOnly<u32, DOR::Register>),
        (0x034 => @END),
    }
}

register_bitfields![u32,
    pub CR [
        EN1 OFFSET(0) NUMBITS(1) [],
        /// Output buffer disable
        BOFF1 OFFSET(1) NUMBITS(1) [],
        /// Trigger enable
        TEN1 OFFSET(2) NUMBITS(1) [],
        /// Trigger selection
        TSEL1 OFFSET(3) NUMBITS(3) [
            Tim6Trgo = 0,
            Tim3Trgo = 1,
            Tim1Trgo = 2,
            Tim2Trgo = 4,
            Exti9 = 6,
            Software = 7
        ],
        /// Noise or triangle wave generation
        WAVE1 OFFSET(6) NUMBITS(2) [
            Disabled = 0,
            Noise = 1,
            Triangle = 2
        ],
        /// Mask or amplitude selector
        MAMP1 OFFSET(8) NUMBITS(4) [],
        DMAEN1 OFFSET(12) NUMBITS(1) [],
        EN2 OFFSET(16) NUMBITS(1) [],
        BOFF2 OFFSET(17) NUMBITS(1) [],
        TEN2 OFFSET(18) NUMBITS(1) [],
        TSEL2 OFFSET(19) NUMBITS(3) [
            Tim6Trgo = 0,
            Tim3Trgo = 1,
            Tim1Trgo = 2,
            Tim2Trgo = 4,
            Exti9 = 6,
            Software = 7
        ],
        WAVE2 OFFSET(22) NUMBITS(2) [
            Disabled = 0,
            Noise = 1,
            Triangle = 2
        ],
        MAMP2 OFFSET(24) NUMBITS(4) [],
        DMAEN2 OFFSET(28) NUMBITS(1) []
    ],
    pub SWTRIGR [
        SWTRIG1 OFFSET(0) NUMBITS(1) [],
        SWTRIG2 OFFSET(1) NUMBITS(1) []
    ],
    pub DHR12R [
        DACCDHR OFFSET(0) NUMBITS(12) []
    ],
    pub DHR12L [
        DACCDHR OFFSET(4) NUMBITS(12) []
    ],
    pub DHR8R [
        DACCDHR OFFSET(0) NUMBITS(8) []
    ],
    pub DHR12RD [
        DACC1DHR OFFSET(0) NUMBITS(12) [],
        DACC2DHR OFFSET(16) NUMBITS(12) []
    ],
    pub DHR12LD [
        DACC1DHR OFFSET(4) NUMBITS(12) [],
        DACC2DHR OFFSET(20) NUMBITS(12) []
    ],
    pub DHR8RD [
        DACC1DHR OFFSET(0) NUMBITS(8) [],
        DACC2DHR OFFSET(8) NUMBITS(8) []
    ],
    pub DOR [
        DACCDOR OFFSET(0) NUMBITS(12) []
    ]
];

pub const DAC1: StaticRef<DacRegisters> =
    unsafe { StaticRef::new(DAC1_BASE as *const DacRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::interfaces::{Readable, Writeable};
    use crate::utilities::registers::InMemoryRegister;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<DacRegisters>(), 0x34);
    }

    #[test]
    fn left_aligned_holding_register() {
        let dhr = InMemoryRegister::<u32, DHR12L::Register>::new(0);
        dhr.write(DHR12L::DACCDHR.val(0xABC));
        assert_eq!(dhr.get(), 0xABC0);

        let dual = InMemoryRegister::<u32, DHR12LD::Register>::new(0);
        dual.write(DHR12LD::DACC1DHR.val(0x123) + DHR12LD::DACC2DHR.val(0x456));
        assert_eq!(dual.get(), 0x4560_1230);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(CR {
            EN1, BOFF1, TEN1, TSEL1, WAVE1, MAMP1, DMAEN1, EN2, BOFF2, TEN2, TSEL2, WAVE2, MAMP2,
            DMAEN2,
        });
        assert_bitfields!(SWTRIGR { SWTRIG1, SWTRIG2 });
        assert_bitfields!(DHR12R { DACCDHR });
        assert_bitfields!(DHR12L { DACCDHR });
        assert_bitfields!(DHR8R { DACCDHR });
        assert_bitfields!(DHR12RD { DACC1DHR, DACC2DHR });
        assert_bitfields!(DHR12LD { DACC1DHR, DACC2DHR });
        assert_bitfields!(DHR8RD { DACC1DHR, DACC2DHR });
        assert_bitfields!(DOR { DACCDOR });
    }
}
