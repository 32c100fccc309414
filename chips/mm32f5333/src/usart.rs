// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Synchronous/asynchronous receiver transmitter with smart card, IrDA and
//! LIN support.

use crate::memory_map::USART1_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite};
use crate::utilities::StaticRef;

register_structs! {
    pub UsartRegisters {
        /// Status register
        (0x000 => pub sr: ReadWrite<u32, SR::Register>),
        /// Data register
        (0x004 => pub dr: ReadWrite<u32, DR::Register>),
        /// Baud rate register
        (0x008 => pub brr: ReadWrite<u32, BRR::Register>),
        /// Control register 1
        (0x00C => pub cr1: ReadWrite<u32, CR1::Register>),
        /// Control register 2
        (0x010 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// Control register 3
        (0x014 => pub cr3: ReadWrite<u32, CR3::Register>),
        /// Guard time and prescaler register
        (0x018 => pub gtpr: ReadWrite<u32, GTPR::Register>),
        (0x01C => @END),
    }
}

register_bitfields![u32,
    pub SR [
        /// Parity error
        PE OFFSET(0) NUMBITS(1) [],
        /// Framing error
        FE OFFSET(1) NUMBITS(1) [],
        /// Noise detected flag
        NE OFFSET(2) NUMBITS(1) [],
        /// Overrun error
        ORE OFFSET(3) NUMBITS(1) [],
        /// IDLE line detected
        IDLE OFFSET(4) NUMBITS(1) [],
        /// Read data register not empty
        RXNE OFFSET(5) NUMBITS(1) [],
        /// Transmission complete
        TC OFFSET(6) NUMBITS(1) [],
        /// Transmit data register empty
        TXE OFFSET(7) NUMBITS(1) [],
        /// LIN break detection flag
        LBD OFFSET(8) NUMBITS(1) [],
        /// CTS flag
        CTS OFFSET(9) NUMBITS(1) []
    ],
    pub DR [
        DR OFFSET(0) NUMBITS(9) []
    ],
    pub BRR [
        DIV_FRACTION OFFSET(0) NUMBITS(4) [],
        DIV_MANTISSA OFFSET(4) NUMBITS(12) []
    ],
    pub CR1 [
        /// Send break
        SBK OFFSET(0) NUMBITS(1) [],
        /// Receiver wakeup
        RWU OFFSET(1) NUMBITS(1) [],
        RE OFFSET(2) NUMBITS(1) [],
        TE OFFSET(3) NUMBITS(1) [],
        IDLEIE OFFSET(4) NUMBITS(1) [],
        RXNEIE OFFSET(5) NUMBITS(1) [],
        TCIE OFFSET(6) NUMBITS(1) [],
        TXEIE OFFSET(7) NUMBITS(1) [],
        PEIE OFFSET(8) NUMBITS(1) [],
        /// Parity selection
        PS OFFSET(9) NUMBITS(1) [
            Even = 0,
            Odd = 1
        ],
        /// Parity control enable
        PCE OFFSET(10) NUMBITS(1) [],
        WAKE OFFSET(11) NUMBITS(1) [],
        /// Word length
        M OFFSET(12) NUMBITS(1) [
            Bits8 = 0,
            Bits9 = 1
        ],
        /// USART enable
        UE OFFSET(13) NUMBITS(1) []
    ],
    pub CR2 [
        /// Node address
        ADD OFFSET(0) NUMBITS(4) [],
        /// LIN break detection length
        LBDL OFFSET(5) NUMBITS(1) [],
        LBDIE OFFSET(6) NUMBITS(1) [],
        /// Last bit clock pulse
        LBCL OFFSET(8) NUMBITS(1) [],
        CPHA OFFSET(9) NUMBITS(1) [],
        CPOL OFFSET(10) NUMBITS(1) [],
        CLKEN OFFSET(11) NUMBITS(1) [],
        STOP OFFSET(12) NUMBITS(2) [
            One = 0,
            Half = 1,
            Two = 2,
            OneAndHalf = 3
        ],
        LINEN OFFSET(14) NUMBITS(1) []
    ],
    pub CR3 [
        /// Error interrupt enable
        EIE OFFSET(0) NUMBITS(1) [],
        IREN OFFSET(1) NUMBITS(1) [],
        IRLP OFFSET(2) NUMBITS(1) [],
        /// Half-duplex selection
        HDSEL OFFSET(3) NUMBITS(1) [],
        NACK OFFSET(4) NUMBITS(1) [],
        SCEN OFFSET(5) NUMBITS(1) [],
        DMAR OFFSET(6) NUMBITS(1) [],
        DMAT OFFSET(7) NUMBITS(1) [],
        RTSE OFFSET(8) NUMBITS(1) [],
        CTSE OFFSET(9) NUMBITS(1) [],
        CTSIE OFFSET(10) NUMBITS(1) []
    ],
    pub GTPR [
        PSC OFFSET(0) NUMBITS(8) [],
        /// Guard time
        GT OFFSET(8) NUMBITS(8) []
    ]
];

pub const USART1: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(USART1_BASE as *const UsartRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::interfaces::{Readable, Writeable};
    use crate::utilities::registers::InMemoryRegister;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<UsartRegisters>(), 0x1C);
    }

    #[test]
    fn brr_packs_mantissa_and_fraction() {
        // 72 MHz at 115200 baud: 39 + 1/16.
        let brr = InMemoryRegister::<u32, BRR::Register>::new(0);
        brr.write(BRR::DIV_MANTISSA.val(39) + BRR::DIV_FRACTION.val(1));
        assert_eq!(brr.get(), 0x271);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(SR { PE, FE, NE, ORE, IDLE, RXNE, TC, TXE, LBD, CTS });
        assert_bitfields!(DR { DR });
        assert_bitfields!(BRR { DIV_FRACTION, DIV_MANTISSA });
        assert_bitfields!(CR1 {
            SBK, RWU, RE, TE, IDLEIE, RXNEIE, TCIE, TXEIE, PEIE, PS, PCE, WAKE, M, UE,
        });
        assert_bitfields!(CR2 { ADD, LBDL, LBDIE, LBCL, CPHA, CPOL, CLKEN, STOP, LINEN });
        assert_bitfields!(CR3 {
            EIE, IREN, IRLP, HDSEL, NACK, SCEN, DMAR, DMAT, RTSE, CTSE, CTSIE,
        });
        assert_bitfields!(GTPR { PSC, GT });
    }
}
