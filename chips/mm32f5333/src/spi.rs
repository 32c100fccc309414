// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! SPI controllers, with I2S mode selected through `I2SCFGR`.

use crate::memory_map::{SPI1_BASE, SPI2_BASE};
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

register_structs! {
    pub SpiRegisters {
        (0x000 => pub txreg: WriteOnly<u32>),
        (0x004 => pub rxreg: ReadOnly<u32>),
        /// Current status
        (0x008 => pub cstat: ReadOnly<u32, CSTAT::Register>),
        (0x00C => pub intstat: ReadOnly<u32, INT::Register>),
        (0x010 => pub inten: ReadWrite<u32, INT::Register>),
        (0x014 => pub intclr: WriteOnly<u32, INT::Register>),
        /// Global control
        (0x018 => pub gctl: ReadWrite<u32, GCTL::Register>),
        /// Common control
        (0x01C => pub cctl: ReadWrite<u32, CCTL::Register>),
        /// Baud rate generator
        (0x020 => pub spbrg: ReadWrite<u32, SPBRG::Register>),
        /// Number of bytes to receive in master receive-only mode
        (0x024 => pub rxdnr: ReadWrite<u32, RXDNR::Register>),
        /// Chip select output
        (0x028 => pub nssr: ReadWrite<u32, NSSR::Register>),
        /// Data length beyond 8 bits
        (0x02C => pub extctl: ReadWrite<u32, EXTCTL::Register>),
        (0x030 => pub i2scfgr: ReadWrite<u32, I2SCFGR::Register>),
        (0x034 => @END),
    }
}

register_bitfields![u32,
    pub CSTAT [
        /// Transmitter empty
        TXEPT OFFSET(0) NUMBITS(1) [],
        /// Receive data available
        RXAVL OFFSET(1) NUMBITS(1) [],
        TXFULL OFFSET(2) NUMBITS(1) [],
        /// Four bytes available in the receive FIFO
        RXAVL_4BYTE OFFSET(3) NUMBITS(1) [],
        TXFADDR OFFSET(4) NUMBITS(4) [],
        RXFADDR OFFSET(8) NUMBITS(4) [],
        BUSY OFFSET(12) NUMBITS(1) [],
        /// Current channel in I2S mode
        CHSIDE OFFSET(13) NUMBITS(1) [
            Left = 0,
            Right = 1
        ]
    ],
    pub INT [
        TX_INTF OFFSET(0) NUMBITS(1) [],
        RX_INTF OFFSET(1) NUMBITS(1) [],
        UNDERRUN_INTF OFFSET(2) NUMBITS(1) [],
        RXOERR_INTF OFFSET(3) NUMBITS(1) [],
        RXMATCH_INTF OFFSET(4) NUMBITS(1) [],
        RXFULL_INTF OFFSET(5) NUMBITS(1) [],
        TXEPT_INTF OFFSET(6) NUMBITS(1) [],
        /// I2S frame error
        FRE_INTF OFFSET(7) NUMBITS(1) []
    ],
    pub GCTL [
        SPIEN OFFSET(0) NUMBITS(1) [],
        INT_EN OFFSET(1) NUMBITS(1) [],
        MM OFFSET(2) NUMBITS(1) [
            Slave = 0,
            Master = 1
        ],
        TXEN OFFSET(3) NUMBITS(1) [],
        RXEN OFFSET(4) NUMBITS(1) [],
        /// Receive FIFO trigger level
        RXTLF OFFSET(5) NUMBITS(2) [],
        TXTLF OFFSET(7) NUMBITS(2) [],
        DMAMODE OFFSET(9) NUMBITS(1) [],
        /// Chip select driven by hardware
        NSS OFFSET(10) NUMBITS(1) [],
        /// 32-bit data register access
        DW8_32 OFFSET(11) NUMBITS(1) [],
        NSSTOG OFFSET(12) NUMBITS(1) [],
        PAD_SEL OFFSET(13) NUMBITS(5) []
    ],
    pub CCTL [
        CPHA OFFSET(0) NUMBITS(1) [],
        CPOL OFFSET(1) NUMBITS(1) [],
        /// LSB first
        LSBFE OFFSET(2) NUMBITS(1) [],
        SPILEN OFFSET(3) NUMBITS(1) [
            Bits7 = 0,
            Bits8 = 1
        ],
        RXEDGE OFFSET(4) NUMBITS(1) [],
        TXEDGE OFFSET(5) NUMBITS(1) [],
        CPHASEL OFFSET(6) NUMBITS(1) [],
        /// High speed mode, above 48 MHz
        HISPD OFFSET(7) NUMBITS(1) []
    ],
    pub SPBRG [
        SPBRG OFFSET(0) NUMBITS(16) []
    ],
    pub RXDNR [
        RXDNR OFFSET(0) NUMBITS(16) []
    ],
    pub NSSR [
        NSS OFFSET(0) NUMBITS(1) []
    ],
    pub EXTCTL [
        /// Data length in bits, 0 for 32
        EXTLEN OFFSET(0) NUMBITS(5) []
    ],
    pub I2SCFGR [
        /// 32-bit channel length
        CHLEN OFFSET(0) NUMBITS(1) [],
        DATLEN OFFSET(1) NUMBITS(2) [
            Bits16 = 0,
            Bits24 = 1,
            Bits32 = 2
        ],
        I2SSTD OFFSET(4) NUMBITS(2) [
            Philips = 0,
            MsbJustified = 1,
            LsbJustified = 2,
            Pcm = 3
        ],
        /// PCM long frame sync
        PCMSYNC OFFSET(6) NUMBITS(1) [],
        SPI_I2S OFFSET(10) NUMBITS(1) [
            Spi = 0,
            I2s = 1
        ],
        /// Master clock output enable
        MCKOE OFFSET(11) NUMBITS(1) [],
        I2SDIV OFFSET(16) NUMBITS(9) []
    ]
];

pub const SPI1: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(SPI1_BASE as *const SpiRegisters) };
pub const SPI2: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(SPI2_BASE as *const SpiRegisters) };
