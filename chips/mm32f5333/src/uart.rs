// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! UART1 to UART3.
//!
//! The baud rate divisor is split over two registers: `BRR` holds the
//! mantissa and `FRA` the fraction in sixteenths. See [`divisor`].

use crate::memory_map::{UART1_BASE, UART2_BASE, UART3_BASE};
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

register_structs! {
    pub UartRegisters {
        (0x000 => pub tdr: WriteOnly<u32, DR::Register>),
        (0x004 => pub rdr: ReadOnly<u32, DR::Register>),
        /// Current status
        (0x008 => pub csr: ReadOnly<u32, CSR::Register>),
        (0x00C => pub isr: ReadOnly<u32, INT::Register>),
        (0x010 => pub ier: ReadWrite<u32, INT::Register>),
        (0x014 => pub icr: WriteOnly<u32, INT::Register>),
        /// Global control
        (0x018 => pub gcr: ReadWrite<u32, GCR::Register>),
        /// Frame format control
        (0x01C => pub ccr: ReadWrite<u32, CCR::Register>),
        (0x020 => pub brr: ReadWrite<u32, BRR::Register>),
        (0x024 => pub fra: ReadWrite<u32, FRA::Register>),
        /// Receive address in 9-bit multiprocessor mode
        (0x028 => pub rxaddr: ReadWrite<u32, RXADDR::Register>),
        (0x02C => pub rxmask: ReadWrite<u32, RXMASK::Register>),
        /// Smart card control
        (0x030 => pub scr: ReadWrite<u32, SCR::Register>),
        /// Idle frame length
        (0x034 => pub idlr: ReadWrite<u32, IDLR::Register>),
        /// Auto baud rate control
        (0x038 => pub abrcr: ReadWrite<u32, ABRCR::Register>),
        (0x03C => pub irda: ReadWrite<u32, IRDA::Register>),
        (0x040 => @END),
    }
}

register_bitfields![u32,
    pub DR [
        DATA OFFSET(0) NUMBITS(9) []
    ],
    pub CSR [
        /// Transmission complete
        TXC OFFSET(0) NUMBITS(1) [],
        RXAVL OFFSET(1) NUMBITS(1) [],
        TXFULL OFFSET(2) NUMBITS(1) [],
        /// Transmit buffer empty
        TXEPT OFFSET(3) NUMBITS(1) []
    ],
    pub INT [
        TX_INTF OFFSET(0) NUMBITS(1) [],
        RX_INTF OFFSET(1) NUMBITS(1) [],
        TXC_INTF OFFSET(2) NUMBITS(1) [],
        RXOERR_INTF OFFSET(3) NUMBITS(1) [],
        RXPERR_INTF OFFSET(4) NUMBITS(1) [],
        RXFERR_INTF OFFSET(5) NUMBITS(1) [],
        RXBRK_INTF OFFSET(6) NUMBITS(1) [],
        TXBRK_INTF OFFSET(7) NUMBITS(1) [],
        RXB8_INTF OFFSET(8) NUMBITS(1) [],
        RXIDLE_INTF OFFSET(9) NUMBITS(1) [],
        ABREND_INTF OFFSET(10) NUMBITS(1) [],
        ABRERR_INTF OFFSET(11) NUMBITS(1) []
    ],
    pub GCR [
        UARTEN OFFSET(0) NUMBITS(1) [],
        DMAMODE OFFSET(1) NUMBITS(1) [],
        AUTOFLOWEN OFFSET(2) NUMBITS(1) [],
        RXEN OFFSET(3) NUMBITS(1) [],
        TXEN OFFSET(4) NUMBITS(1) [],
        /// Ninth bit is an address marker
        SELB8 OFFSET(7) NUMBITS(1) [],
        /// Swap the TX and RX pins
        SWAP OFFSET(8) NUMBITS(1) [],
        RXTOG OFFSET(9) NUMBITS(1) [],
        TXTOG OFFSET(10) NUMBITS(1) []
    ],
    pub CCR [
        /// Parity enable
        PEN OFFSET(0) NUMBITS(1) [],
        PSEL OFFSET(1) NUMBITS(1) [
            Even = 0,
            Odd = 1
        ],
        /// Stop bits, low bit
        SPB0 OFFSET(2) NUMBITS(1) [],
        /// Send break
        BRK OFFSET(3) NUMBITS(1) [],
        CHAR OFFSET(4) NUMBITS(2) [
            Bits5 = 0,
            Bits6 = 1,
            Bits7 = 2,
            Bits8 = 3
        ],
        /// Stop bits, high bit
        SPB1 OFFSET(6) NUMBITS(1) [],
        B8RXD OFFSET(7) NUMBITS(1) [],
        B8TXD OFFSET(8) NUMBITS(1) [],
        B8POL OFFSET(9) NUMBITS(1) [],
        B8TOG OFFSET(10) NUMBITS(1) [],
        /// Nine data bits
        B8EN OFFSET(11) NUMBITS(1) [],
        /// Receiver wakeup
        RWU OFFSET(12) NUMBITS(1) [],
        WAKE OFFSET(13) NUMBITS(1) [
            IdleLine = 0,
            AddressMark = 1
        ],
        LIN OFFSET(14) NUMBITS(1) []
    ],
    pub BRR [
        DIV_MANTISSA OFFSET(0) NUMBITS(16) []
    ],
    pub FRA [
        DIV_FRACTION OFFSET(0) NUMBITS(4) []
    ],
    pub RXADDR [
        ADDR OFFSET(0) NUMBITS(8) []
    ],
    pub RXMASK [
        MASK OFFSET(0) NUMBITS(8) []
    ],
    pub SCR [
        /// Smart card mode enable
        SCEN OFFSET(0) NUMBITS(1) [],
        NACK OFFSET(1) NUMBITS(1) [],
        /// Guard time in baud clocks
        SCFCNT OFFSET(4) NUMBITS(8) []
    ],
    pub IDLR [
        IDLE OFFSET(0) NUMBITS(16) []
    ],
    pub ABRCR [
        ABREN OFFSET(0) NUMBITS(1) [],
        /// Bits measured during auto baud detection
        BITCNT OFFSET(1) NUMBITS(2) [
            One = 0,
            Two = 1,
            Four = 2,
            Eight = 3
        ],
        FORMER OFFSET(3) NUMBITS(1) [],
        LATTER OFFSET(4) NUMBITS(1) []
    ],
    pub IRDA [
        SIREN OFFSET(0) NUMBITS(1) [],
        /// IrDA low power mode
        SIRLP OFFSET(1) NUMBITS(1) [],
        PSC_REG OFFSET(8) NUMBITS(8) []
    ]
];

pub const UART1: StaticRef<UartRegisters> =
    unsafe { StaticRef::new(UART1_BASE as *const UartRegisters) };
pub const UART2: StaticRef<UartRegisters> =
    unsafe { StaticRef::new(UART2_BASE as *const UartRegisters) };
pub const UART3: StaticRef<UartRegisters> =
    unsafe { StaticRef::new(UART3_BASE as *const UartRegisters) };

/// `(BRR, FRA)` values for `baud` from a `pclk` Hz clock, rounded to the
/// nearest sixteenth.
///
/// Returns `None` for a zero `baud` or when the mantissa does not fit
/// `BRR::DIV_MANTISSA`.
pub const fn divisor(pclk: u32, baud: u32) -> Option<(u32, u32)> {
    if baud == 0 {
        return None;
    }
    let sixteenths = match pclk.checked_add(baud / 2) {
        Some(rounded) => rounded / baud,
        None => return None,
    };
    let mantissa = sixteenths / 16;
    if mantissa > BRR::DIV_MANTISSA.mask {
        return None;
    }
    Some((mantissa, sixteenths % 16))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::interfaces::{Readable, Writeable};
    use crate::utilities::registers::InMemoryRegister;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<UartRegisters>(), 0x40);
    }

    #[test]
    fn baud_divisor() {
        assert_eq!(divisor(72_000_000, 115_200), Some((39, 1)));
        assert_eq!(divisor(8_000_000, 9_600), Some((52, 1)));
    }

    #[test]
    fn baud_divisor_out_of_range() {
        assert_eq!(divisor(72_000_000, 0), None);
        assert_eq!(divisor(u32::MAX, u32::MAX), None);
        // 2^20 sixteenths is a mantissa of 0x10000, one past the field.
        assert_eq!(divisor(1 << 20, 1), None);
        assert_eq!(divisor((1 << 20) - 16, 1), Some((0xFFFF, 0)));
    }

    #[test]
    fn eight_n_one() {
        let ccr = InMemoryRegister::<u32, CCR::Register>::new(0);
        ccr.write(CCR::CHAR::Bits8);
        assert_eq!(ccr.get(), 0x30);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(DR { DATA });
        assert_bitfields!(CSR { TXC, RXAVL, TXFULL, TXEPT });
        assert_bitfields!(INT {
            TX_INTF, RX_INTF, TXC_INTF, RXOERR_INTF, RXPERR_INTF, RXFERR_INTF, RXBRK_INTF,
            TXBRK_INTF, RXB8_INTF, RXIDLE_INTF, ABREND_INTF, ABRERR_INTF,
        });
        assert_bitfields!(GCR {
            UARTEN, DMAMODE, AUTOFLOWEN, RXEN, TXEN, SELB8, SWAP, RXTOG, TXTOG,
        });
        assert_bitfields!(CCR {
            PEN, PSEL, SPB0, BRK, CHAR, SPB1, B8RXD, B8TXD, B8POL, B8TOG, B8EN, RWU, WAKE, LIN,
        });
        assert_bitfields!(BRR { DIV_MANTISSA });
        assert_bitfields!(FRA { DIV_FRACTION });
        assert_bitfields!(RXADDR { ADDR });
        assert_bitfields!(RXMASK { MASK });
        assert_bitfields!(SCR { SCEN, NACK, SCFCNT });
        assert_bitfields!(IDLR { IDLE });
        assert_bitfields!(ABRCR { ABREN, BITCNT, FORMER, LATTER });
        assert_bitfields!(IRDA { SIREN, SIRLP, PSC_REG });
    }
}
