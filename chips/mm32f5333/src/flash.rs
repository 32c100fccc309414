// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Embedded flash controller.

use crate::memory_map::FLASH_REG_BASE;
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

/// First word to write to `KEYR` or `OPTKEYR` to unlock.
pub const KEY1: u32 = 0x4567_0123;
/// Second unlock word.
pub const KEY2: u32 = 0xCDEF_89AB;

register_structs! {
    pub FlashRegisters {
        /// Access control
        (0x000 => pub acr: ReadWrite<u32, ACR::Register>),
        (0x004 => pub keyr: WriteOnly<u32>),
        (0x008 => pub optkeyr: WriteOnly<u32>),
        (0x00C => pub sr: ReadWrite<u32, SR::Register>),
        (0x010 => pub cr: ReadWrite<u32, CR::Register>),
        /// Address for page erase
        (0x014 => pub ar: ReadWrite<u32>),
        (0x018 => _reserved0),
        /// Option bytes as loaded at reset
        (0x01C => pub obr: ReadOnly<u32, OBR::Register>),
        /// Write protection, one bit per 4 KiB sector group
        (0x020 => pub wrpr: ReadOnly<u32>),
        (0x024 => @END),
    }
}

register_bitfields![u32,
    pub ACR [
        /// Wait states, one per 30 MHz of HCLK
        LATENCY OFFSET(0) NUMBITS(3) [
            WaitState0 = 0,
            WaitState1 = 1,
            WaitState2 = 2,
            WaitState3 = 3,
            WaitState4 = 4,
            WaitState5 = 5
        ],
        PRFTBE OFFSET(4) NUMBITS(1) [],
        PRFTBS OFFSET(5) NUMBITS(1) [],
        /// Instruction cache enable
        ICEN OFFSET(8) NUMBITS(1) [],
        /// Data cache enable
        DCEN OFFSET(9) NUMBITS(1) []
    ],
    pub SR [
        BSY OFFSET(0) NUMBITS(1) [],
        PGERR OFFSET(2) NUMBITS(1) [],
        WRPRTERR OFFSET(4) NUMBITS(1) [],
        /// End of operation
        EOP OFFSET(5) NUMBITS(1) []
    ],
    pub CR [
        /// Programming
        PG OFFSET(0) NUMBITS(1) [],
        /// Page erase
        PER OFFSET(1) NUMBITS(1) [],
        /// Mass erase
        MER OFFSET(2) NUMBITS(1) [],
        OPTPG OFFSET(4) NUMBITS(1) [],
        OPTER OFFSET(5) NUMBITS(1) [],
        STRT OFFSET(6) NUMBITS(1) [],
        LOCK OFFSET(7) NUMBITS(1) [],
        OPTWRE OFFSET(9) NUMBITS(1) [],
        ERRIE OFFSET(10) NUMBITS(1) [],
        EOPIE OFFSET(12) NUMBITS(1) []
    ],
    pub OBR [
        OPTERR OFFSET(0) NUMBITS(1) [],
        /// Read protection active
        RDPRT OFFSET(1) NUMBITS(1) [],
        WDG_SW OFFSET(2) NUMBITS(1) [],
        NRST_STOP OFFSET(3) NUMBITS(1) [],
        NRST_STDBY OFFSET(4) NUMBITS(1) [],
        BOOT1 OFFSET(6) NUMBITS(1) [],
        DATA0 OFFSET(10) NUMBITS(8) [],
        DATA1 OFFSET(18) NUMBITS(8) []
    ]
];

pub const FLASH: StaticRef<FlashRegisters> =
    unsafe { StaticRef::new(FLASH_REG_BASE as *const FlashRegisters) };
