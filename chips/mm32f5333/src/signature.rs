// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Device electronic signature.
//!
//! Factory programmed values in system memory: the flash size and a 96-bit
//! unique identifier.

use crate::memory_map::{FLASH_SIZE_REG_BASE, UID_BASE};
use crate::utilities::registers::interfaces::Readable;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly};
use crate::utilities::StaticRef;

register_structs! {
    pub FlashSizeRegisters {
        (0x000 => pub f_size: ReadOnly<u32, F_SIZE::Register>),
        (0x004 => @END),
    },

    pub UidRegisters {
        /// Unique ID, least significant word first
        (0x000 => pub uid: [ReadOnly<u32>; 3]),
        (0x00C => @END),
    }
}

register_bitfields![u32,
    pub F_SIZE [
        /// Main flash size in KiB
        SIZE OFFSET(0) NUMBITS(16) []
    ]
];

impl FlashSizeRegisters {
    pub fn kilo_bytes(&self) -> u16 {
        self.f_size.read(F_SIZE::SIZE) as u16
    }

    pub fn bytes(&self) -> usize {
        self.kilo_bytes() as usize * 1024
    }
}

impl UidRegisters {
    pub fn words(&self) -> [u32; 3] {
        [self.uid[0].get(), self.uid[1].get(), self.uid[2].get()]
    }

    /// The identifier as 12 bytes in address order.
    pub fn bytes(&self) -> [u8; 12] {
        let mut out = [0; 12];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.words()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }
}

pub const FLASH_SIZE: StaticRef<FlashSizeRegisters> =
    unsafe { StaticRef::new(FLASH_SIZE_REG_BASE as *const FlashSizeRegisters) };
pub const UID: StaticRef<UidRegisters> =
    unsafe { StaticRef::new(UID_BASE as *const UidRegisters) };
