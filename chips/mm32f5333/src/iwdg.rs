// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Independent watchdog, clocked from LSI.

use crate::memory_map::IWDG_BASE;
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

/// Reload the counter.
pub const KEY_RELOAD: u32 = 0xAAAA;
/// Start the watchdog.
pub const KEY_START: u32 = 0xCCCC;
/// Allow writes to `PR`, `RLR` and `IGEN`.
pub const KEY_UNLOCK: u32 = 0x5555;

register_structs! {
    pub IwdgRegisters {
        (0x000 => pub kr: WriteOnly<u32, KR::Register>),
        /// Prescaler
        (0x004 => pub pr: ReadWrite<u32, PR::Register>),
        /// Reload value
        (0x008 => pub rlr: ReadWrite<u32, RLR::Register>),
        (0x00C => pub sr: ReadOnly<u32, SR::Register>),
        (0x010 => pub cr: ReadWrite<u32, CR::Register>),
        /// Early interrupt generation threshold
        (0x014 => pub igen: ReadWrite<u32, IGEN::Register>),
        (0x018 => @END),
    }
}

register_bitfields![u32,
    pub KR [
        KEY OFFSET(0) NUMBITS(16) [
            Reload = 0xAAAA,
            Start = 0xCCCC,
            Unlock = 0x5555
        ]
    ],
    pub PR [
        DIV OFFSET(0) NUMBITS(3) [
            DivideBy4 = 0,
            DivideBy8 = 1,
            DivideBy16 = 2,
            DivideBy32 = 3,
            DivideBy64 = 4,
            DivideBy128 = 5,
            DivideBy256 = 6
        ]
    ],
    pub RLR [
        RL OFFSET(0) NUMBITS(12) []
    ],
    pub SR [
        /// Prescaler update in progress
        PVU OFFSET(0) NUMBITS(1) [],
        /// Reload update in progress
        RVU OFFSET(1) NUMBITS(1) [],
        /// Early interrupt flag
        IVU OFFSET(2) NUMBITS(1) [],
        /// Threshold update in progress
        UPDATE OFFSET(3) NUMBITS(1) []
    ],
    pub CR [
        /// Raise an interrupt at the threshold instead of resetting
        IRQ_SEL OFFSET(0) NUMBITS(1) [],
        IRQ_CLR OFFSET(1) NUMBITS(1) []
    ],
    pub IGEN [
        IGV OFFSET(0) NUMBITS(12) []
    ]
];

pub const IWDG: StaticRef<IwdgRegisters> =
    unsafe { StaticRef::new(IWDG_BASE as *const IwdgRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<IwdgRegisters>(), 0x18);
    }

    #[test]
    fn key_values_match_constants() {
        assert_eq!(KR::KEY::Reload.value, KEY_RELOAD);
        assert_eq!(KR::KEY::Start.value, KEY_START);
        assert_eq!(KR::KEY::Unlock.value, KEY_UNLOCK);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(KR { KEY });
        assert_bitfields!(PR { DIV });
        assert_bitfields!(RLR { RL });
        assert_bitfields!(SR { PVU, RVU, IVU, UPDATE });
        assert_bitfields!(CR { IRQ_SEL, IRQ_CLR });
        assert_bitfields!(IGEN { IGV });
    }
}
