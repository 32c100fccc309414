// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Low power UART, clocked from LSE or LSI for wakeup from stop mode.
//!
//! Below 9600 baud the bit time is taken from `LPUBAUD::BAUD`. Each bit of
//! `MODU` adds one extra clock to the matching bit period to approximate
//! rates the 32.768 kHz clock does not divide evenly.

use crate::memory_map::LPUART1_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

register_structs! {
    pub LpuartRegisters {
        (0x000 => pub lpubaud: ReadWrite<u32, LPUBAUD::Register>),
        /// Baud modulation
        (0x004 => pub modu: ReadWrite<u32, MODU::Register>),
        /// Interrupt flags, write 1 to clear
        (0x008 => pub lpuif: ReadWrite<u32, LPUIF::Register>),
        (0x00C => pub lpusta: ReadWrite<u32, LPUSTA::Register>),
        (0x010 => pub lpucon: ReadWrite<u32, LPUCON::Register>),
        (0x014 => pub lpuen: ReadWrite<u32, LPUEN::Register>),
        (0x018 => pub lpurxd: ReadOnly<u32, DR::Register>),
        (0x01C => pub lputxd: ReadWrite<u32, DR::Register>),
        /// Address match value
        (0x020 => pub compare: ReadWrite<u32, COMPARE::Register>),
        /// Wakeup clock enable
        (0x024 => pub wkcke: ReadWrite<u32, WKCKE::Register>),
        (0x028 => @END),
    }
}

register_bitfields![u32,
    pub LPUBAUD [
        BAUD OFFSET(0) NUMBITS(3) [
            Baud9600 = 0,
            Baud4800 = 1,
            Baud2400 = 2,
            Baud1200 = 3,
            Baud600 = 4,
            Baud300 = 5
        ],
        /// Use the integer divider in BR instead of BAUD
        BREN OFFSET(8) NUMBITS(1) [],
        BR OFFSET(16) NUMBITS(12) []
    ],
    pub MODU [
        MCOM OFFSET(0) NUMBITS(12) []
    ],
    pub LPUIF [
        RXIF OFFSET(0) NUMBITS(1) [],
        TXIF OFFSET(1) NUMBITS(1) [],
        /// Falling edge on RX
        RXNEGIF OFFSET(2) NUMBITS(1) [],
        TCIF OFFSET(3) NUMBITS(1) [],
        STARTIF OFFSET(4) NUMBITS(1) [],
        MATCHIF OFFSET(5) NUMBITS(1) []
    ],
    pub LPUSTA [
        /// Receive overrun
        RXOV OFFSET(0) NUMBITS(1) [],
        MATCH OFFSET(1) NUMBITS(1) [],
        START OFFSET(2) NUMBITS(1) [],
        PERR OFFSET(3) NUMBITS(1) [],
        /// Transmission complete
        TC OFFSET(4) NUMBITS(1) [],
        /// Receive buffer full
        RXF OFFSET(5) NUMBITS(1) []
    ],
    pub LPUCON [
        /// Wakeup event
        RXEV OFFSET(0) NUMBITS(2) [
            StartBit = 0,
            OneByte = 1,
            AddressMatch = 2,
            FallingEdge = 3
        ],
        DL OFFSET(2) NUMBITS(1) [
            Bits8 = 0,
            Bits7 = 1
        ],
        SL OFFSET(3) NUMBITS(1) [
            One = 0,
            Two = 1
        ],
        PTYEN OFFSET(4) NUMBITS(1) [],
        PTYSEL OFFSET(5) NUMBITS(1) [
            Even = 0,
            Odd = 1
        ],
        RXIE OFFSET(6) NUMBITS(1) [],
        /// Falling edge detect interrupt enable
        NEDET OFFSET(7) NUMBITS(1) [],
        TXIE OFFSET(8) NUMBITS(1) [],
        TCIE OFFSET(9) NUMBITS(1) [],
        TXPOL OFFSET(10) NUMBITS(1) [],
        RXPOL OFFSET(11) NUMBITS(1) [],
        /// Most significant bit first
        MSB OFFSET(12) NUMBITS(1) []
    ],
    pub LPUEN [
        TXEN OFFSET(0) NUMBITS(1) [],
        RXEN OFFSET(1) NUMBITS(1) [],
        DMAT OFFSET(2) NUMBITS(1) [],
        DMAR OFFSET(3) NUMBITS(1) []
    ],
    pub DR [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    pub COMPARE [
        CMPDATA OFFSET(0) NUMBITS(8) []
    ],
    pub WKCKE [
        EN OFFSET(0) NUMBITS(1) []
    ]
];

pub const LPUART1: StaticRef<LpuartRegisters> =
    unsafe { StaticRef::new(LPUART1_BASE as *const LpuartRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::interfaces::{Readable, Writeable};
    use crate::utilities::registers::InMemoryRegister;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<LpuartRegisters>(), 0x28);
    }

    #[test]
    fn frame_format() {
        let con = InMemoryRegister::<u32, LPUCON::Register>::new(0);
        con.write(LPUCON::SL::Two + LPUCON::PTYEN::SET + LPUCON::PTYSEL::Odd);
        assert_eq!(con.get(), 0b11_1000);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(LPUBAUD { BAUD, BREN, BR });
        assert_bitfields!(MODU { MCOM });
        assert_bitfields!(LPUIF { RXIF, TXIF, RXNEGIF, TCIF, STARTIF, MATCHIF });
        assert_bitfields!(LPUSTA { RXOV, MATCH, START, PERR, TC, RXF });
        assert_bitfields!(LPUCON {
            RXEV, DL, SL, PTYEN, PTYSEL, RXIE, NEDET, TXIE, TCIE, TXPOL, RXPOL, MSB,
        });
        assert_bitfields!(LPUEN { TXEN, RXEN, DMAT, DMAR });
        assert_bitfields!(DR { DATA });
        assert_bitfields!(COMPARE { CMPDATA });
        assert_bitfields!(WKCKE { EN });
    }
}
