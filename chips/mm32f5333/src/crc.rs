// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! CRC calculation unit.

use crate::memory_map::CRC_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite};
use crate::utilities::StaticRef;

/// Reset value of the polynomial register, the CRC-32 (Ethernet) polynomial.
pub const DEFAULT_POLYNOMIAL: u32 = 0x04C1_1DB7;
pub const DEFAULT_INIT: u32 = 0xFFFF_FFFF;

register_structs! {
    pub CrcRegisters {
        /// Data in, running result out
        (0x000 => pub dr: ReadWrite<u32>),
        /// Independent 8-bit scratch register
        (0x004 => pub idr: ReadWrite<u32, IDR::Register>),
        (0x008 => pub cr: ReadWrite<u32, CR::Register>),
        (0x00C => _reserved0),
        /// Initial value loaded on reset
        (0x010 => pub init: ReadWrite<u32>),
        /// Polynomial
        (0x014 => pub pol: ReadWrite<u32>),
        (0x018 => @END),
    }
}

register_bitfields![u32,
    pub IDR [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    pub CR [
        /// Reload `init` into the data register
        RESET OFFSET(0) NUMBITS(1) [],
        POLYSIZE OFFSET(3) NUMBITS(2) [
            Bits32 = 0,
            Bits16 = 1,
            Bits8 = 2,
            Bits7 = 3
        ],
        /// Input bit order reversal
        REV_IN OFFSET(5) NUMBITS(2) [
            NoReversal = 0,
            Byte = 1,
            HalfWord = 2,
            Word = 3
        ],
        /// Output bit order reversal
        REV_OUT OFFSET(7) NUMBITS(1) []
    ]
];

pub const CRC: StaticRef<CrcRegisters> = unsafe { StaticRef::new(CRC_BASE as *const CrcRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::interfaces::{Readable, Writeable};
    use crate::utilities::registers::InMemoryRegister;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<CrcRegisters>(), 0x18);
    }

    #[test]
    fn reflected_crc32_configuration() {
        let cr = InMemoryRegister::<u32, CR::Register>::new(0);
        cr.write(CR::RESET::SET + CR::REV_IN::Byte + CR::REV_OUT::SET);
        assert_eq!(cr.get(), 0b1010_0001);
        assert!(cr.matches_all(CR::POLYSIZE::Bits32));
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(IDR { DATA });
        assert_bitfields!(CR { RESET, POLYSIZE, REV_IN, REV_OUT });
    }
}
