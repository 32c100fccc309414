// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! USB full-speed OTG controller.
//!
//! Endpoint buffers are described by a buffer descriptor table in SRAM
//! whose 512-byte aligned address is split over `BDTPAGE1..3`.

use crate::memory_map::USB_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

pub const NUM_ENDPOINTS: usize = 16;

register_structs! {
    pub UsbRegisters {
        /// Peripheral ID
        (0x000 => pub perid: ReadOnly<u32, PERID::Register>),
        (0x004 => pub idcomp: ReadOnly<u32, IDCOMP::Register>),
        (0x008 => pub rev: ReadOnly<u32, REV::Register>),
        (0x00C => pub addinfo: ReadOnly<u32, ADDINFO::Register>),
        /// OTG interrupt status, write 1 to clear
        (0x010 => pub otgistat: ReadWrite<u32, OTGINT::Register>),
        (0x014 => pub otgicr: ReadWrite<u32, OTGINT::Register>),
        (0x018 => pub otgstat: ReadOnly<u32, OTGSTAT::Register>),
        (0x01C => pub otgctl: ReadWrite<u32, OTGCTL::Register>),
        (0x020 => _reserved0),
        /// Interrupt status, write 1 to clear
        (0x080 => pub istat: ReadWrite<u32, USBINT::Register>),
        (0x084 => pub inten: ReadWrite<u32, USBINT::Register>),
        /// Error interrupt status, write 1 to clear
        (0x088 => pub errstat: ReadWrite<u32, ERR::Register>),
        (0x08C => pub erren: ReadWrite<u32, ERR::Register>),
        /// Last completed transaction
        (0x090 => pub stat: ReadOnly<u32, STAT::Register>),
        (0x094 => pub ctl: ReadWrite<u32, CTL::Register>),
        (0x098 => pub addr: ReadWrite<u32, ADDR::Register>),
        (0x09C => pub bdtpage1: ReadWrite<u32, BDTPAGE1::Register>),
        (0x0A0 => pub frmnuml: ReadOnly<u32, FRMNUML::Register>),
        (0x0A4 => pub frmnumh: ReadOnly<u32, FRMNUMH::Register>),
        /// Host mode token
        (0x0A8 => pub token: ReadWrite<u32, TOKEN::Register>),
        /// SOF threshold
        (0x0AC => pub softhld: ReadWrite<u32, SOFTHLD::Register>),
        (0x0B0 => pub bdtpage2: ReadWrite<u32, BDTPAGE::Register>),
        (0x0B4 => pub bdtpage3: ReadWrite<u32, BDTPAGE::Register>),
        (0x0B8 => _reserved1),
        (0x0C0 => pub endpt: [ReadWrite<u32, ENDPT::Register>; NUM_ENDPOINTS]),
        (0x100 => pub usbctrl: ReadWrite<u32, USBCTRL::Register>),
        (0x104 => @END),
    }
}

register_bitfields![u32,
    pub PERID [
        ID OFFSET(0) NUMBITS(6) []
    ],
    pub IDCOMP [
        /// Ones complement of ID
        NID OFFSET(0) NUMBITS(6) []
    ],
    pub REV [
        REV OFFSET(0) NUMBITS(8) []
    ],
    pub ADDINFO [
        IEHOST OFFSET(0) NUMBITS(1) [],
        IRQNUM OFFSET(3) NUMBITS(5) []
    ],
    pub OTGINT [
        AVBUSCHG OFFSET(0) NUMBITS(1) [],
        B_SESS_CHG OFFSET(2) NUMBITS(1) [],
        SESSVLDCHG OFFSET(3) NUMBITS(1) [],
        LINE_STATE_CHG OFFSET(5) NUMBITS(1) [],
        ONEMSEC OFFSET(6) NUMBITS(1) [],
        IDCHG OFFSET(7) NUMBITS(1) []
    ],
    pub OTGSTAT [
        AVBUSVLD OFFSET(0) NUMBITS(1) [],
        BSESSEND OFFSET(2) NUMBITS(1) [],
        SESS_VLD OFFSET(3) NUMBITS(1) [],
        LINESTATESTABLE OFFSET(5) NUMBITS(1) [],
        ONEMSECEN OFFSET(6) NUMBITS(1) [],
        ID OFFSET(7) NUMBITS(1) []
    ],
    pub OTGCTL [
        OTGEN OFFSET(2) NUMBITS(1) [],
        DMLOW OFFSET(4) NUMBITS(1) [],
        DPLOW OFFSET(5) NUMBITS(1) [],
        DPHIGH OFFSET(7) NUMBITS(1) []
    ],
    pub USBINT [
        USBRST OFFSET(0) NUMBITS(1) [],
        ERROR OFFSET(1) NUMBITS(1) [],
        SOFTOK OFFSET(2) NUMBITS(1) [],
        TOKDNE OFFSET(3) NUMBITS(1) [],
        SLEEP OFFSET(4) NUMBITS(1) [],
        RESUME OFFSET(5) NUMBITS(1) [],
        ATTACH OFFSET(6) NUMBITS(1) [],
        STALL OFFSET(7) NUMBITS(1) []
    ],
    pub ERR [
        PIDERR OFFSET(0) NUMBITS(1) [],
        CRC5EOF OFFSET(1) NUMBITS(1) [],
        CRC16 OFFSET(2) NUMBITS(1) [],
        DFN8 OFFSET(3) NUMBITS(1) [],
        BTOERR OFFSET(4) NUMBITS(1) [],
        DMAERR OFFSET(5) NUMBITS(1) [],
        BTSERR OFFSET(7) NUMBITS(1) []
    ],
    pub STAT [
        /// Transaction used the odd buffer
        ODD OFFSET(2) NUMBITS(1) [],
        TX OFFSET(3) NUMBITS(1) [],
        ENDP OFFSET(4) NUMBITS(4) []
    ],
    pub CTL [
        /// USB enable in device mode, SOF enable in host mode
        USBENSOFEN OFFSET(0) NUMBITS(1) [],
        /// Reset all odd/even buffer pointers
        ODDRST OFFSET(1) NUMBITS(1) [],
        RESUME OFFSET(2) NUMBITS(1) [],
        HOSTMODEEN OFFSET(3) NUMBITS(1) [],
        RESET OFFSET(4) NUMBITS(1) [],
        TXSUSPENDTOKENBUSY OFFSET(5) NUMBITS(1) [],
        SE0 OFFSET(6) NUMBITS(1) [],
        JSTATE OFFSET(7) NUMBITS(1) []
    ],
    pub ADDR [
        ADDR OFFSET(0) NUMBITS(7) [],
        /// Low speed enable, host mode
        LSEN OFFSET(7) NUMBITS(1) []
    ],
    pub BDTPAGE1 [
        /// Bits 15:9 of the buffer descriptor table address
        BDTBA OFFSET(1) NUMBITS(7) []
    ],
    pub BDTPAGE [
        BDTBA OFFSET(0) NUMBITS(8) []
    ],
    pub FRMNUML [
        FRM OFFSET(0) NUMBITS(8) []
    ],
    pub FRMNUMH [
        FRM OFFSET(0) NUMBITS(3) []
    ],
    pub TOKEN [
        TOKENENDPT OFFSET(0) NUMBITS(4) [],
        TOKENPID OFFSET(4) NUMBITS(4) [
            Out = 0x1,
            In = 0x9,
            Setup = 0xD
        ]
    ],
    pub SOFTHLD [
        CNT OFFSET(0) NUMBITS(8) []
    ],
    pub ENDPT [
        /// Handshake during the transaction
        EPHSHK OFFSET(0) NUMBITS(1) [],
        EPSTALL OFFSET(1) NUMBITS(1) [],
        EPTXEN OFFSET(2) NUMBITS(1) [],
        EPRXEN OFFSET(3) NUMBITS(1) [],
        /// Disable control transfers
        EPCTLDIS OFFSET(4) NUMBITS(1) [],
        RETRYDIS OFFSET(6) NUMBITS(1) [],
        HOSTWOHUB OFFSET(7) NUMBITS(1) []
    ],
    pub USBCTRL [
        /// Pull-downs enable
        PDE OFFSET(6) NUMBITS(1) [],
        SUSP OFFSET(7) NUMBITS(1) []
    ]
];

pub const USB: StaticRef<UsbRegisters> =
    unsafe { StaticRef::new(USB_BASE as *const UsbRegisters) };

/// Split a buffer descriptor table address into the `BDTPAGE1`, `BDTPAGE2`
/// and `BDTPAGE3` field values. The low nine bits are dropped.
pub const fn bdt_pages(addr: u32) -> (u32, u32, u32) {
    ((addr >> 9) & 0x7F, (addr >> 16) & 0xFF, addr >> 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<UsbRegisters>(), 0x104);
    }

    #[test]
    fn table_address_split() {
        assert_eq!(bdt_pages(0x2000_7E00), (0x3F, 0x00, 0x20));
        assert_eq!(bdt_pages(0x2001_0200), (0x01, 0x01, 0x20));
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(PERID { ID });
        assert_bitfields!(IDCOMP { NID });
        assert_bitfields!(REV { REV });
        assert_bitfields!(ADDINFO { IEHOST, IRQNUM });
        assert_bitfields!(OTGINT {
            AVBUSCHG, B_SESS_CHG, SESSVLDCHG, LINE_STATE_CHG, ONEMSEC, IDCHG,
        });
        assert_bitfields!(OTGSTAT { AVBUSVLD, BSESSEND, SESS_VLD, LINESTATESTABLE, ONEMSECEN, ID });
        assert_bitfields!(OTGCTL { OTGEN, DMLOW, DPLOW, DPHIGH });
        assert_bitfields!(USBINT { USBRST, ERROR, SOFTOK, TOKDNE, SLEEP, RESUME, ATTACH, STALL });
        assert_bitfields!(ERR { PIDERR, CRC5EOF, CRC16, DFN8, BTOERR, DMAERR, BTSERR });
        assert_bitfields!(STAT { ODD, TX, ENDP });
        assert_bitfields!(CTL {
            USBENSOFEN, ODDRST, RESUME, HOSTMODEEN, RESET, TXSUSPENDTOKENBUSY, SE0, JSTATE,
        });
        assert_bitfields!(ADDR { ADDR, LSEN });
        assert_bitfields!(BDTPAGE1 { BDTBA });
        assert_bitfields!(BDTPAGE { BDTBA });
        assert_bitfields!(FRMNUML { FRM });
        assert_bitfields!(FRMNUMH { FRM });
        assert_bitfields!(TOKEN { TOKENENDPT, TOKENPID });
        assert_bitfields!(SOFTHLD { CNT });
        assert_bitfields!(ENDPT { EPHSHK, EPSTALL, EPTXEN, EPRXEN, EPCTLDIS, RETRYDIS, HOSTWOHUB });
        assert_bitfields!(USBCTRL { PDE, SUSP });
    }
}
