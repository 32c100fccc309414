// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! FlexCAN controller with CAN FD support and 32 message buffers.

use crate::memory_map::FLEXCAN1_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

/// Number of message buffers in classic CAN layout.
pub const NUM_MESSAGE_BUFFERS: usize = 32;

register_structs! {
    /// One classic CAN message buffer.
    pub MessageBuffer {
        /// Control and status
        (0x000 => pub cs: ReadWrite<u32, MB_CS::Register>),
        (0x004 => pub id: ReadWrite<u32, MB_ID::Register>),
        /// Data bytes 0 to 3, byte 0 in the most significant position
        (0x008 => pub word0: ReadWrite<u32>),
        /// Data bytes 4 to 7
        (0x00C => pub word1: ReadWrite<u32>),
        (0x010 => @END),
    },

    pub FlexcanRegisters {
        /// Module configuration
        (0x000 => pub mcr: ReadWrite<u32, MCR::Register>),
        (0x004 => pub ctrl1: ReadWrite<u32, CTRL1::Register>),
        /// Free running timer
        (0x008 => pub timer: ReadWrite<u32, TIMER::Register>),
        (0x00C => _reserved0),
        /// Rx mailboxes global mask
        (0x010 => pub rxmgmask: ReadWrite<u32>),
        (0x014 => pub rx14mask: ReadWrite<u32>),
        (0x018 => pub rx15mask: ReadWrite<u32>),
        /// Error counter
        (0x01C => pub ecr: ReadWrite<u32, ECR::Register>),
        (0x020 => pub esr1: ReadWrite<u32, ESR1::Register>),
        (0x024 => _reserved1),
        /// Interrupt masks, one bit per message buffer
        (0x028 => pub imask1: ReadWrite<u32>),
        (0x02C => _reserved2),
        /// Interrupt flags, one bit per message buffer, write 1 to clear
        (0x030 => pub iflag1: ReadWrite<u32>),
        (0x034 => pub ctrl2: ReadWrite<u32, CTRL2::Register>),
        (0x038 => pub esr2: ReadOnly<u32, ESR2::Register>),
        (0x03C => _reserved3),
        (0x044 => pub crcr: ReadOnly<u32, CRCR::Register>),
        /// Legacy Rx FIFO global mask
        (0x048 => pub rxfgmask: ReadWrite<u32>),
        /// Legacy Rx FIFO information
        (0x04C => pub rxfir: ReadOnly<u32, RXFIR::Register>),
        /// CAN bit timing
        (0x050 => pub cbt: ReadWrite<u32, CBT::Register>),
        (0x054 => _reserved4),
        (0x080 => pub mb: [MessageBuffer; NUM_MESSAGE_BUFFERS]),
        (0x280 => _reserved5),
        /// Rx individual masks
        (0x880 => pub rximr: [ReadWrite<u32>; NUM_MESSAGE_BUFFERS]),
        (0x900 => _reserved6),
        (0xC00 => pub fdctrl: ReadWrite<u32, FDCTRL::Register>),
        /// CAN FD data phase bit timing
        (0xC04 => pub fdcbt: ReadWrite<u32, FDCBT::Register>),
        (0xC08 => pub fdcrc: ReadOnly<u32, FDCRC::Register>),
        (0xC0C => @END),
    }
}

register_bitfields![u32,
    pub MCR [
        /// Number of the last message buffer
        MAXMB OFFSET(0) NUMBITS(7) [],
        /// ID acceptance mode of the legacy Rx FIFO
        IDAM OFFSET(8) NUMBITS(2) [
            FormatA = 0,
            FormatB = 1,
            FormatC = 2,
            FormatD = 3
        ],
        FDEN OFFSET(11) NUMBITS(1) [],
        /// Abort enable
        AEN OFFSET(12) NUMBITS(1) [],
        LPRIOEN OFFSET(13) NUMBITS(1) [],
        /// Individual Rx masking and queue enable
        IRMQ OFFSET(16) NUMBITS(1) [],
        /// Self reception disable
        SRXDIS OFFSET(17) NUMBITS(1) [],
        LPMACK OFFSET(20) NUMBITS(1) [],
        WRNEN OFFSET(21) NUMBITS(1) [],
        SUPV OFFSET(23) NUMBITS(1) [],
        FRZACK OFFSET(24) NUMBITS(1) [],
        SOFTRST OFFSET(25) NUMBITS(1) [],
        NOTRDY OFFSET(27) NUMBITS(1) [],
        HALT OFFSET(28) NUMBITS(1) [],
        /// Legacy Rx FIFO enable
        RFEN OFFSET(29) NUMBITS(1) [],
        FRZ OFFSET(30) NUMBITS(1) [],
        /// Module disable
        MDIS OFFSET(31) NUMBITS(1) []
    ],
    pub CTRL1 [
        PROPSEG OFFSET(0) NUMBITS(3) [],
        /// Listen-only mode
        LOM OFFSET(3) NUMBITS(1) [],
        /// Lowest buffer transmitted first
        LBUF OFFSET(4) NUMBITS(1) [],
        TSYN OFFSET(5) NUMBITS(1) [],
        BOFFREC OFFSET(6) NUMBITS(1) [],
        /// Three samples per bit
        SMP OFFSET(7) NUMBITS(1) [],
        RWRNMSK OFFSET(10) NUMBITS(1) [],
        TWRNMSK OFFSET(11) NUMBITS(1) [],
        /// Loop back
        LPB OFFSET(12) NUMBITS(1) [],
        CLKSRC OFFSET(13) NUMBITS(1) [
            Oscillator = 0,
            PeripheralClock = 1
        ],
        ERRMSK OFFSET(14) NUMBITS(1) [],
        BOFFMSK OFFSET(15) NUMBITS(1) [],
        PSEG2 OFFSET(16) NUMBITS(3) [],
        PSEG1 OFFSET(19) NUMBITS(3) [],
        RJW OFFSET(22) NUMBITS(2) [],
        PRESDIV OFFSET(24) NUMBITS(8) []
    ],
    pub TIMER [
        CNT OFFSET(0) NUMBITS(16) []
    ],
    pub ECR [
        TXERRCNT OFFSET(0) NUMBITS(8) [],
        RXERRCNT OFFSET(8) NUMBITS(8) [],
        TXERRCNT_FAST OFFSET(16) NUMBITS(8) [],
        RXERRCNT_FAST OFFSET(24) NUMBITS(8) []
    ],
    pub ESR1 [
        WAKINT OFFSET(0) NUMBITS(1) [],
        ERRINT OFFSET(1) NUMBITS(1) [],
        BOFFINT OFFSET(2) NUMBITS(1) [],
        RX OFFSET(3) NUMBITS(1) [],
        /// Fault confinement state
        FLTCONF OFFSET(4) NUMBITS(2) [
            ErrorActive = 0,
            ErrorPassive = 1,
            BusOff = 2
        ],
        TX OFFSET(6) NUMBITS(1) [],
        IDLE OFFSET(7) NUMBITS(1) [],
        RXWRN OFFSET(8) NUMBITS(1) [],
        TXWRN OFFSET(9) NUMBITS(1) [],
        STFERR OFFSET(10) NUMBITS(1) [],
        FRMERR OFFSET(11) NUMBITS(1) [],
        CRCERR OFFSET(12) NUMBITS(1) [],
        ACKERR OFFSET(13) NUMBITS(1) [],
        BIT0ERR OFFSET(14) NUMBITS(1) [],
        BIT1ERR OFFSET(15) NUMBITS(1) [],
        RWRNINT OFFSET(16) NUMBITS(1) [],
        TWRNINT OFFSET(17) NUMBITS(1) [],
        SYNCH OFFSET(18) NUMBITS(1) [],
        BOFFDONEINT OFFSET(19) NUMBITS(1) [],
        ERRINT_FAST OFFSET(20) NUMBITS(1) [],
        ERROVR OFFSET(21) NUMBITS(1) [],
        STFERR_FAST OFFSET(26) NUMBITS(1) [],
        FRMERR_FAST OFFSET(27) NUMBITS(1) [],
        CRCERR_FAST OFFSET(28) NUMBITS(1) [],
        BIT0ERR_FAST OFFSET(30) NUMBITS(1) [],
        BIT1ERR_FAST OFFSET(31) NUMBITS(1) []
    ],
    pub CTRL2 [
        /// Edge filter disable
        EDFLTDIS OFFSET(11) NUMBITS(1) [],
        ISOCANFDEN OFFSET(12) NUMBITS(1) [],
        /// Protocol exception enable
        PREXCEN OFFSET(14) NUMBITS(1) [],
        TIMER_SRC OFFSET(15) NUMBITS(1) [],
        /// Entire frame arbitration field comparison
        EACEN OFFSET(16) NUMBITS(1) [],
        /// Remote request storing
        RRS OFFSET(17) NUMBITS(1) [],
        /// Mailboxes reception priority
        MRP OFFSET(18) NUMBITS(1) [],
        /// Tx arbitration start delay
        TASD OFFSET(19) NUMBITS(5) [],
        /// Number of legacy Rx FIFO filters
        RFFN OFFSET(24) NUMBITS(4) [],
        BOFFDONEMSK OFFSET(30) NUMBITS(1) [],
        ERRMSK_FAST OFFSET(31) NUMBITS(1) []
    ],
    pub ESR2 [
        /// Inactive mailbox
        IMB OFFSET(13) NUMBITS(1) [],
        /// Valid priority status
        VPS OFFSET(14) NUMBITS(1) [],
        /// Lowest priority Tx mailbox
        LPTM OFFSET(16) NUMBITS(7) []
    ],
    pub CRCR [
        TXCRC OFFSET(0) NUMBITS(15) [],
        MBCRC OFFSET(16) NUMBITS(7) []
    ],
    pub RXFIR [
        IDHIT OFFSET(0) NUMBITS(9) []
    ],
    pub CBT [
        EPSEG2 OFFSET(0) NUMBITS(5) [],
        EPSEG1 OFFSET(5) NUMBITS(5) [],
        EPROPSEG OFFSET(10) NUMBITS(6) [],
        ERJW OFFSET(16) NUMBITS(5) [],
        EPRESDIV OFFSET(21) NUMBITS(10) [],
        /// Use the extended bit timing fields of this register
        BTF OFFSET(31) NUMBITS(1) []
    ],
    pub FDCTRL [
        /// Transceiver delay compensation value
        TDCVAL OFFSET(0) NUMBITS(6) [],
        TDCOFF OFFSET(8) NUMBITS(5) [],
        TDCFAIL OFFSET(14) NUMBITS(1) [],
        TDCEN OFFSET(15) NUMBITS(1) [],
        /// Message buffer data size
        MBDSR0 OFFSET(16) NUMBITS(2) [
            Bytes8 = 0,
            Bytes16 = 1,
            Bytes32 = 2,
            Bytes64 = 3
        ],
        /// Bit rate switch enable
        FDRATE OFFSET(31) NUMBITS(1) []
    ],
    pub FDCBT [
        FPSEG2 OFFSET(0) NUMBITS(3) [],
        FPSEG1 OFFSET(5) NUMBITS(3) [],
        FPROPSEG OFFSET(10) NUMBITS(5) [],
        FRJW OFFSET(16) NUMBITS(3) [],
        FPRESDIV OFFSET(20) NUMBITS(10) []
    ],
    pub FDCRC [
        FD_TXCRC OFFSET(0) NUMBITS(21) [],
        FD_MBCRC OFFSET(24) NUMBITS(7) []
    ],
    pub MB_CS [
        TIME_STAMP OFFSET(0) NUMBITS(16) [],
        /// Data length code
        DLC OFFSET(16) NUMBITS(4) [],
        RTR OFFSET(20) NUMBITS(1) [],
        /// Extended identifier
        IDE OFFSET(21) NUMBITS(1) [],
        SRR OFFSET(22) NUMBITS(1) [],
        CODE OFFSET(24) NUMBITS(4) [
            RxInactive = 0x0,
            RxFull = 0x2,
            RxEmpty = 0x4,
            RxOverrun = 0x6,
            TxInactive = 0x8,
            TxAbort = 0x9,
            RxRanswer = 0xA,
            TxData = 0xC,
            TxTanswer = 0xE
        ],
        /// Error state indicator
        ESI OFFSET(29) NUMBITS(1) [],
        /// Bit rate switch
        BRS OFFSET(30) NUMBITS(1) [],
        /// Extended data length, marks a CAN FD frame
        EDL OFFSET(31) NUMBITS(1) []
    ],
    pub MB_ID [
        /// Low 18 bits of an extended identifier
        EXT OFFSET(0) NUMBITS(18) [],
        /// Standard identifier, or the high 11 bits of an extended one
        STD OFFSET(18) NUMBITS(11) [],
        /// Local priority
        PRIO OFFSET(29) NUMBITS(3) []
    ]
];

pub const FLEXCAN1: StaticRef<FlexcanRegisters> =
    unsafe { StaticRef::new(FLEXCAN1_BASE as *const FlexcanRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::interfaces::{Readable, Writeable};
    use crate::utilities::registers::InMemoryRegister;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<MessageBuffer>(), 0x10);
        assert_eq!(core::mem::size_of::<FlexcanRegisters>(), 0xC0C);
    }

    #[test]
    fn message_buffer_identifiers() {
        let id = InMemoryRegister::<u32, MB_ID::Register>::new(0);
        id.write(MB_ID::STD.val(0x123));
        assert_eq!(id.get(), 0x048C_0000);

        // A 29-bit identifier spans both fields.
        id.set(0x1ABC_DEF0);
        assert_eq!((id.read(MB_ID::STD) << 18) | id.read(MB_ID::EXT), 0x1ABC_DEF0);
    }

    #[test]
    fn transmit_code() {
        let cs = InMemoryRegister::<u32, MB_CS::Register>::new(0);
        cs.write(MB_CS::CODE::TxData + MB_CS::DLC.val(8) + MB_CS::SRR::SET);
        assert_eq!(cs.get(), 0x0C48_0000);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(MCR {
            MAXMB, IDAM, FDEN, AEN, LPRIOEN, IRMQ, SRXDIS, LPMACK, WRNEN, SUPV, FRZACK, SOFTRST,
            NOTRDY, HALT, RFEN, FRZ, MDIS,
        });
        assert_bitfields!(CTRL1 {
            PROPSEG, LOM, LBUF, TSYN, BOFFREC, SMP, RWRNMSK, TWRNMSK, LPB, CLKSRC, ERRMSK, BOFFMSK,
            PSEG2, PSEG1, RJW, PRESDIV,
        });
        assert_bitfields!(TIMER { CNT });
        assert_bitfields!(ECR { TXERRCNT, RXERRCNT, TXERRCNT_FAST, RXERRCNT_FAST });
        assert_bitfields!(ESR1 {
            WAKINT, ERRINT, BOFFINT, RX, FLTCONF, TX, IDLE, RXWRN, TXWRN, STFERR, FRMERR, CRCERR,
            ACKERR, BIT0ERR, BIT1ERR, RWRNINT, TWRNINT, SYNCH, BOFFDONEINT, ERRINT_FAST, ERROVR,
            STFERR_FAST, FRMERR_FAST, CRCERR_FAST, BIT0ERR_FAST, BIT1ERR_FAST,
        });
        assert_bitfields!(CTRL2 {
            EDFLTDIS, ISOCANFDEN, PREXCEN, TIMER_SRC, EACEN, RRS, MRP, TASD, RFFN, BOFFDONEMSK,
            ERRMSK_FAST,
        });
        assert_bitfields!(ESR2 { IMB, VPS, LPTM });
        assert_bitfields!(CRCR { TXCRC, MBCRC });
        assert_bitfields!(RXFIR { IDHIT });
        assert_bitfields!(CBT { EPSEG2, EPSEG1, EPROPSEG, ERJW, EPRESDIV, BTF });
        assert_bitfields!(FDCTRL { TDCVAL, TDCOFF, TDCFAIL, TDCEN, MBDSR0, FDRATE });
        assert_bitfields!(FDCBT { FPSEG2, FPSEG1, FPROPSEG, FRJW, FPRESDIV });
        assert_bitfields!(FDCRC { FD_TXCRC, FD_MBCRC });
        assert_bitfields!(MB_CS { TIME_STAMP, DLC, RTR, IDE, SRR, CODE, ESI, BRS, EDL });
        assert_bitfields!(MB_ID { EXT, STD, PRIO });
    }
}
