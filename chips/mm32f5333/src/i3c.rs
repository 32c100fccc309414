// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! MIPI I3C controller and target.

use crate::memory_map::I3C1_BASE;
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

/// Number of targets described by `DEVR1` to `DEVR4`.
pub const NUM_TARGETS: usize = 4;

register_structs! {
    pub I3cRegisters {
        (0x000 => pub cfgr: ReadWrite<u32, CFGR::Register>),
        /// Message control, written once per frame
        (0x004 => pub cr: WriteOnly<u32, CR::Register>),
        /// Common command code for the next direct or broadcast message
        (0x008 => pub cccr: ReadWrite<u32, CCCR::Register>),
        (0x00C => pub tdr: WriteOnly<u32, BYTE::Register>),
        (0x010 => pub tdwr: WriteOnly<u32, WORD::Register>),
        (0x014 => pub rdr: ReadOnly<u32, BYTE::Register>),
        (0x018 => pub rdwr: ReadOnly<u32, WORD::Register>),
        (0x01C => pub sr: ReadOnly<u32, SR::Register>),
        /// Error status
        (0x020 => pub ser: ReadOnly<u32, SER::Register>),
        (0x024 => pub evr: ReadOnly<u32, EVENTS::Register>),
        (0x028 => pub ier: ReadWrite<u32, EVENTS::Register>),
        /// Clear events, write 1 to clear
        (0x02C => pub cevr: WriteOnly<u32, EVENTS::Register>),
        (0x030 => _reserved0),
        /// Own dynamic address and target mode capabilities
        (0x034 => pub devr0: ReadWrite<u32, DEVR0::Register>),
        /// Per target settings in controller mode
        (0x038 => pub devr: [ReadWrite<u32, DEVR::Register>; NUM_TARGETS]),
        (0x048 => _reserved1),
        (0x050 => pub maxrlr: ReadWrite<u32, MAXRLR::Register>),
        (0x054 => pub maxwlr: ReadWrite<u32, MAXWLR::Register>),
        (0x058 => _reserved2),
        (0x060 => pub timingr0: ReadWrite<u32, TIMINGR0::Register>),
        (0x064 => pub timingr1: ReadWrite<u32, TIMINGR1::Register>),
        (0x068 => pub timingr2: ReadWrite<u32, TIMINGR2::Register>),
        (0x06C => _reserved3),
        /// Bus characteristics
        (0x090 => pub bcr: ReadWrite<u32, BCR::Register>),
        /// Device characteristics
        (0x094 => pub dcr: ReadWrite<u32, DCR::Register>),
        (0x098 => pub getcapr: ReadWrite<u32, GETCAPR::Register>),
        (0x09C => pub crcapr: ReadWrite<u32, CRCAPR::Register>),
        (0x0A0 => pub getmxdsr: ReadWrite<u32, GETMXDSR::Register>),
        /// Provisioned ID
        (0x0A4 => pub epidr: ReadWrite<u32, EPIDR::Register>),
        (0x0A8 => @END),
    }
}

register_bitfields![u32,
    pub CFGR [
        EN OFFSET(0) NUMBITS(1) [],
        CRINIT OFFSET(1) NUMBITS(1) [
            Target = 0,
            Controller = 1
        ],
        /// No arbitrable header after START
        NOARBH OFFSET(2) NUMBITS(1) [],
        RSTPTRN OFFSET(3) NUMBITS(1) [],
        EXITPTRN OFFSET(4) NUMBITS(1) [],
        /// High-keeper on SDA
        HKSDAEN OFFSET(5) NUMBITS(1) [],
        /// Hot-join acknowledge
        HJACK OFFSET(7) NUMBITS(1) [],
        RXDMAEN OFFSET(8) NUMBITS(1) [],
        RXFLUSH OFFSET(9) NUMBITS(1) [],
        RXTHRES OFFSET(10) NUMBITS(1) [],
        TXDMAEN OFFSET(12) NUMBITS(1) [],
        TXFLUSH OFFSET(13) NUMBITS(1) [],
        TXTHRES OFFSET(14) NUMBITS(1) []
    ],
    pub CR [
        /// Data byte count
        DCNT OFFSET(0) NUMBITS(16) [],
        RNW OFFSET(16) NUMBITS(1) [],
        /// Target address
        ADD OFFSET(17) NUMBITS(7) [],
        MTYPE OFFSET(27) NUMBITS(4) [
            Release = 0,
            Header = 1,
            Private = 2,
            DirectCcc = 3,
            LegacyI2c = 4,
            BroadcastCcc = 6
        ],
        /// Last message of the frame
        MEND OFFSET(31) NUMBITS(1) []
    ],
    pub CCCR [
        CCC OFFSET(0) NUMBITS(8) []
    ],
    pub BYTE [
        DB0 OFFSET(0) NUMBITS(8) []
    ],
    pub WORD [
        DB0 OFFSET(0) NUMBITS(8) [],
        DB1 OFFSET(8) NUMBITS(8) [],
        DB2 OFFSET(16) NUMBITS(8) [],
        DB3 OFFSET(24) NUMBITS(8) []
    ],
    pub SR [
        /// Transferred data byte count
        XDCNT OFFSET(0) NUMBITS(16) [],
        /// Read aborted by the target
        ABT OFFSET(17) NUMBITS(1) [],
        DIR OFFSET(18) NUMBITS(1) [],
        /// Message identifier
        MID OFFSET(24) NUMBITS(8) []
    ],
    pub SER [
        /// Protocol error code
        CODERR OFFSET(0) NUMBITS(4) [],
        PERR OFFSET(4) NUMBITS(1) [],
        STALL OFFSET(5) NUMBITS(1) [],
        /// Data overrun or underrun
        DOVR OFFSET(6) NUMBITS(1) [],
        /// Control or status overrun
        COVR OFFSET(7) NUMBITS(1) [],
        /// Address not acknowledged
        ANACK OFFSET(8) NUMBITS(1) [],
        /// Data not acknowledged
        DNACK OFFSET(9) NUMBITS(1) [],
        DERR OFFSET(10) NUMBITS(1) []
    ],
    pub EVENTS [
        TXFNF OFFSET(0) NUMBITS(1) [],
        RXFNE OFFSET(1) NUMBITS(1) [],
        /// Frame complete
        FC OFFSET(2) NUMBITS(1) [],
        ERR OFFSET(4) NUMBITS(1) [],
        /// In-band interrupt
        IBI OFFSET(8) NUMBITS(1) [],
        /// Hot-join
        HJ OFFSET(9) NUMBITS(1) [],
        WKP OFFSET(10) NUMBITS(1) [],
        GETF OFFSET(11) NUMBITS(1) [],
        STAF OFFSET(12) NUMBITS(1) [],
        /// Dynamic address update
        DAUPD OFFSET(13) NUMBITS(1) [],
        MWLUPD OFFSET(14) NUMBITS(1) [],
        MRLUPD OFFSET(15) NUMBITS(1) [],
        RST OFFSET(16) NUMBITS(1) [],
        ASUPD OFFSET(17) NUMBITS(1) [],
        INTUPD OFFSET(18) NUMBITS(1) [],
        DEF OFFSET(19) NUMBITS(1) [],
        GRP OFFSET(20) NUMBITS(1) []
    ],
    pub DEVR0 [
        /// Dynamic address valid
        DAVAL OFFSET(0) NUMBITS(1) [],
        DA OFFSET(1) NUMBITS(7) [],
        IBIEN OFFSET(16) NUMBITS(1) [],
        HJEN OFFSET(17) NUMBITS(1) [],
        /// Activity state
        AS OFFSET(20) NUMBITS(2) [],
        RSTACT OFFSET(22) NUMBITS(2) [],
        RSTVAL OFFSET(24) NUMBITS(1) []
    ],
    pub DEVR [
        DA OFFSET(1) NUMBITS(7) [],
        IBIACK OFFSET(16) NUMBITS(1) [],
        /// Controller-role request acknowledge
        CRACK OFFSET(17) NUMBITS(1) [],
        /// IBI with data payload
        IBIDEN OFFSET(18) NUMBITS(1) [],
        SUSP OFFSET(19) NUMBITS(1) [],
        DIS OFFSET(31) NUMBITS(1) []
    ],
    pub MAXRLR [
        MRL OFFSET(0) NUMBITS(16) [],
        /// IBI payload size
        IBIP OFFSET(16) NUMBITS(3) []
    ],
    pub MAXWLR [
        MWL OFFSET(0) NUMBITS(16) []
    ],
    pub TIMINGR0 [
        SCLL_PP OFFSET(0) NUMBITS(8) [],
        SCLH_I3C OFFSET(8) NUMBITS(8) [],
        SCLL_OD OFFSET(16) NUMBITS(8) [],
        SCLH_I2C OFFSET(24) NUMBITS(8) []
    ],
    pub TIMINGR1 [
        AVAL OFFSET(0) NUMBITS(8) [],
        ASNCR OFFSET(8) NUMBITS(2) [],
        /// Bus free time
        FREE OFFSET(16) NUMBITS(6) [],
        SDA_HD OFFSET(28) NUMBITS(1) []
    ],
    pub TIMINGR2 [
        STALLT OFFSET(0) NUMBITS(1) [],
        STALLD OFFSET(1) NUMBITS(1) [],
        STALLC OFFSET(2) NUMBITS(1) [],
        STALLA OFFSET(3) NUMBITS(1) [],
        STALL OFFSET(8) NUMBITS(8) []
    ],
    pub BCR [
        MAX_DATA_SPEED_LIM OFFSET(0) NUMBITS(1) [],
        IBI_REQ OFFSET(1) NUMBITS(1) [],
        IBI_PAYLOAD OFFSET(2) NUMBITS(1) [],
        OFFLINE OFFSET(3) NUMBITS(1) [],
        BRIDGE OFFSET(4) NUMBITS(1) [],
        HDR_CAPABLE OFFSET(5) NUMBITS(1) [],
        DEVICE_ROLE OFFSET(6) NUMBITS(2) [
            Target = 0,
            Controller = 1
        ]
    ],
    pub DCR [
        DC OFFSET(0) NUMBITS(8) []
    ],
    pub GETCAPR [
        /// Pending read notification capability
        CAPPEND OFFSET(14) NUMBITS(1) []
    ],
    pub CRCAPR [
        CAPDHOFF OFFSET(3) NUMBITS(1) [],
        CAPGRP OFFSET(9) NUMBITS(1) []
    ],
    pub GETMXDSR [
        HOFFAS OFFSET(0) NUMBITS(2) [],
        FMT OFFSET(8) NUMBITS(2) [],
        /// Read turnaround time
        RDTURN OFFSET(16) NUMBITS(8) [],
        TSCO OFFSET(24) NUMBITS(1) []
    ],
    pub EPIDR [
        MIPIID OFFSET(12) NUMBITS(4) [],
        IDTSEL OFFSET(16) NUMBITS(1) [],
        /// MIPI manufacturer ID
        MIPIMID OFFSET(17) NUMBITS(15) []
    ]
];

pub const I3C1: StaticRef<I3cRegisters> =
    unsafe { StaticRef::new(I3C1_BASE as *const I3cRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::interfaces::{Readable, Writeable};
    use crate::utilities::registers::InMemoryRegister;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<I3cRegisters>(), 0xA8);
    }

    #[test]
    fn private_read_message() {
        let cr = InMemoryRegister::<u32, CR::Register>::new(0);
        cr.write(CR::MTYPE::Private + CR::ADD.val(0x08) + CR::RNW::SET + CR::DCNT.val(4));
        assert_eq!(cr.get(), (2 << 27) | (0x08 << 17) | (1 << 16) | 4);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(CFGR {
            EN, CRINIT, NOARBH, RSTPTRN, EXITPTRN, HKSDAEN, HJACK, RXDMAEN, RXFLUSH, RXTHRES,
            TXDMAEN, TXFLUSH, TXTHRES,
        });
        assert_bitfields!(CR { DCNT, RNW, ADD, MTYPE, MEND });
        assert_bitfields!(CCCR { CCC });
        assert_bitfields!(BYTE { DB0 });
        assert_bitfields!(WORD { DB0, DB1, DB2, DB3 });
        assert_bitfields!(SR { XDCNT, ABT, DIR, MID });
        assert_bitfields!(SER { CODERR, PERR, STALL, DOVR, COVR, ANACK, DNACK, DERR });
        assert_bitfields!(EVENTS {
            TXFNF, RXFNE, FC, ERR, IBI, HJ, WKP, GETF, STAF, DAUPD, MWLUPD, MRLUPD, RST, ASUPD,
            INTUPD, DEF, GRP,
        });
        assert_bitfields!(DEVR0 { DAVAL, DA, IBIEN, HJEN, AS, RSTACT, RSTVAL });
        assert_bitfields!(DEVR { DA, IBIACK, CRACK, IBIDEN, SUSP, DIS });
        assert_bitfields!(MAXRLR { MRL, IBIP });
        assert_bitfields!(MAXWLR { MWL });
        assert_bitfields!(TIMINGR0 { SCLL_PP, SCLH_I3C, SCLL_OD, SCLH_I2C });
        assert_bitfields!(TIMINGR1 { AVAL, ASNCR, FREE, SDA_HD });
        assert_bitfields!(TIMINGR2 { STALLT, STALLD, STALLC, STALLA, STALL });
        assert_bitfields!(BCR {
            MAX_DATA_SPEED_LIM, IBI_REQ, IBI_PAYLOAD, OFFLINE, BRIDGE, HDR_CAPABLE, DEVICE_ROLE,
        });
        assert_bitfields!(DCR { DC });
        assert_bitfields!(GETCAPR { CAPPEND });
        assert_bitfields!(CRCAPR { CAPDHOFF, CAPGRP });
        assert_bitfields!(GETMXDSR { HOFFAS, FMT, RDTURN, TSCO });
        assert_bitfields!(EPIDR { MIPIID, IDTSEL, MIPIMID });
    }
}
