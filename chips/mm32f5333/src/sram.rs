// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! SRAM parity checking.

use crate::memory_map::SRAM_REG_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

register_structs! {
    pub SramRegisters {
        (0x000 => pub cr: ReadWrite<u32, CR::Register>),
        /// Parity error flag, write 1 to clear
        (0x004 => pub sr: ReadWrite<u32, SR::Register>),
        /// Address of the last parity error
        (0x008 => pub pear: ReadOnly<u32>),
        (0x00C => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Parity enable
        PEN OFFSET(0) NUMBITS(1) [],
        PEIE OFFSET(1) NUMBITS(1) [],
        /// Reset the system on a parity error
        PERST OFFSET(2) NUMBITS(1) []
    ],
    pub SR [
        PEF OFFSET(0) NUMBITS(1) []
    ]
];

pub const SRAM: StaticRef<SramRegisters> =
    unsafe { StaticRef::new(SRAM_REG_BASE as *const SramRegisters) };
