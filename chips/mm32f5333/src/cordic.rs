// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! CORDIC coprocessor.
//!
//! Operands and results are signed fixed point values. X and Y use 24 bits
//! (Q1.23 in rotation mode), the angle Z uses 25 bits with pi mapped to
//! `1 << 23`.

use crate::memory_map::CORDIC_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

register_structs! {
    pub CordicRegisters {
        /// X operand
        (0x000 => pub dxr: ReadWrite<u32, DXR::Register>),
        /// Y operand
        (0x004 => pub dyr: ReadWrite<u32, DYR::Register>),
        /// Z operand (angle)
        (0x008 => pub dzr: ReadWrite<u32, DZR::Register>),
        /// X result
        (0x00C => pub rxr: ReadOnly<u32, RXR::Register>),
        /// Y result
        (0x010 => pub ryr: ReadOnly<u32, RYR::Register>),
        /// Z result
        (0x014 => pub rzr: ReadOnly<u32, RZR::Register>),
        (0x018 => pub cr: ReadWrite<u32, CR::Register>),
        (0x01C => pub sr: ReadOnly<u32, SR::Register>),
        (0x020 => @END),
    }
}

register_bitfields![u32,
    pub DXR [
        DX OFFSET(0) NUMBITS(24) []
    ],
    pub DYR [
        DY OFFSET(0) NUMBITS(24) []
    ],
    pub DZR [
        DZ OFFSET(0) NUMBITS(25) []
    ],
    pub RXR [
        RX OFFSET(0) NUMBITS(25) []
    ],
    pub RYR [
        RY OFFSET(0) NUMBITS(25) []
    ],
    pub RZR [
        RZ OFFSET(0) NUMBITS(25) []
    ],
    pub CR [
        /// Start a calculation in manual start mode
        START OFFSET(0) NUMBITS(1) [],
        ENABLE OFFSET(1) NUMBITS(1) [],
        WORK_MODE OFFSET(2) NUMBITS(1) [
            Rotation = 0,
            Vectoring = 1
        ],
        /// Start automatically when DZR (rotation) or DYR (vectoring) is written
        START_MODE OFFSET(3) NUMBITS(1) [
            Manual = 0,
            Auto = 1
        ]
    ],
    pub SR [
        BUSY OFFSET(0) NUMBITS(1) []
    ]
];

pub const CORDIC: StaticRef<CordicRegisters> =
    unsafe { StaticRef::new(CORDIC_BASE as *const CordicRegisters) };

/// Sign-extend a raw result field of `bits` width to an `i32`.
pub const fn sign_extend(raw: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((raw << shift) as i32) >> shift
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<CordicRegisters>(), 0x20);
    }

    #[test]
    fn sign_extension() {
        assert_eq!(sign_extend(0x00FF_FFFF, 24), -1);
        assert_eq!(sign_extend(0x0080_0000, 25), 0x0080_0000);
        assert_eq!(sign_extend(0x0100_0000, 25), -0x0100_0000);
        assert_eq!(sign_extend(0x0000_1234, 24), 0x1234);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(DXR { DX });
        assert_bitfields!(DYR { DY });
        assert_bitfields!(DZR { DZ });
        assert_bitfields!(RXR { RX });
        assert_bitfields!(RYR { RY });
        assert_bitfields!(RZR { RZ });
        assert_bitfields!(CR { START, ENABLE, WORK_MODE, START_MODE });
        assert_bitfields!(SR { BUSY });
    }
}
