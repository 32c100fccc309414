// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Clock recovery system.
//!
//! Trims the internal 48 MHz oscillator against USB start-of-frame packets,
//! the LSE, or an external sync pin.

use crate::memory_map::CRS_BASE;
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

/// Reset value of `CFGR::RELOAD`: 48 MHz / 1 kHz SOF - 1.
pub const DEFAULT_RELOAD: u32 = 47_999;

register_structs! {
    pub CrsRegisters {
        (0x000 => pub cr: ReadWrite<u32, CR::Register>),
        (0x004 => pub cfgr: ReadWrite<u32, CFGR::Register>),
        (0x008 => pub isr: ReadOnly<u32, ISR::Register>),
        (0x00C => pub icr: WriteOnly<u32, ICR::Register>),
        (0x010 => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// SYNC event OK interrupt enable
        SYNCOKIE OFFSET(0) NUMBITS(1) [],
        /// SYNC warning interrupt enable
        SYNCWARNIE OFFSET(1) NUMBITS(1) [],
        /// Synchronization or trimming error interrupt enable
        ERRIE OFFSET(2) NUMBITS(1) [],
        /// Expected SYNC interrupt enable
        ESYNCIE OFFSET(3) NUMBITS(1) [],
        /// Frequency error counter enable
        CEN OFFSET(5) NUMBITS(1) [],
        /// Automatic trimming enable
        AUTOTRIMEN OFFSET(6) NUMBITS(1) [],
        /// Generate a software SYNC event
        SWSYNC OFFSET(7) NUMBITS(1) [],
        /// Oscillator trim value
        TRIM OFFSET(8) NUMBITS(10) []
    ],
    pub CFGR [
        /// Counter reload value
        RELOAD OFFSET(0) NUMBITS(16) [],
        /// Frequency error limit
        FELIM OFFSET(16) NUMBITS(8) [],
        /// SYNC divider, as a power of two
        SYNCDIV OFFSET(24) NUMBITS(3) [],
        SYNCSRC OFFSET(28) NUMBITS(2) [
            Gpio = 0,
            Lse = 1,
            UsbSof = 2
        ],
        SYNCPOL OFFSET(31) NUMBITS(1) [
            Rising = 0,
            Falling = 1
        ]
    ],
    pub ISR [
        SYNCOKF OFFSET(0) NUMBITS(1) [],
        SYNCWARNF OFFSET(1) NUMBITS(1) [],
        ERRF OFFSET(2) NUMBITS(1) [],
        ESYNCF OFFSET(3) NUMBITS(1) [],
        /// SYNC error
        SYNCERR OFFSET(8) NUMBITS(1) [],
        /// SYNC missed
        SYNCMISS OFFSET(9) NUMBITS(1) [],
        /// Trimming overflow or underflow
        TRIMOVF OFFSET(10) NUMBITS(1) [],
        /// Frequency error direction
        FEDIR OFFSET(15) NUMBITS(1) [
            UpCounting = 0,
            DownCounting = 1
        ],
        /// Frequency error capture
        FECAP OFFSET(16) NUMBITS(16) []
    ],
    pub ICR [
        SYNCOKC OFFSET(0) NUMBITS(1) [],
        SYNCWARNC OFFSET(1) NUMBITS(1) [],
        ERRC OFFSET(2) NUMBITS(1) [],
        ESYNCC OFFSET(3) NUMBITS(1) []
    ]
];

pub const CRS: StaticRef<CrsRegisters> = unsafe { StaticRef::new(CRS_BASE as *const CrsRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<CrsRegisters>(), 0x10);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(CR {
            SYNCOKIE, SYNCWARNIE, ERRIE, ESYNCIE, CEN, AUTOTRIMEN, SWSYNC, TRIM,
        });
        assert_bitfields!(CFGR { RELOAD, FELIM, SYNCDIV, SYNCSRC, SYNCPOL });
        assert_bitfields!(ISR {
            SYNCOKF, SYNCWARNF, ERRF, ESYNCF, SYNCERR, SYNCMISS, TRIMOVF, FEDIR, FECAP,
        });
        assert_bitfields!(ICR { SYNCOKC, SYNCWARNC, ERRC, ESYNCC });
    }
}
