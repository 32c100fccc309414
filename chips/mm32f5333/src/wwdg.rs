// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Window watchdog.

use crate::memory_map::WWDG_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite};
use crate::utilities::StaticRef;

register_structs! {
    pub WwdgRegisters {
        (0x000 => pub cr: ReadWrite<u32, CR::Register>),
        (0x004 => pub cfgr: ReadWrite<u32, CFGR::Register>),
        /// Early wakeup flag, write 0 to clear
        (0x008 => pub sr: ReadWrite<u32, SR::Register>),
        (0x00C => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Counter, a reset occurs when bit 6 clears
        T OFFSET(0) NUMBITS(7) [],
        /// Activation, cleared only by reset
        WDGA OFFSET(7) NUMBITS(1) []
    ],
    pub CFGR [
        /// Window value
        W OFFSET(0) NUMBITS(7) [],
        /// Timer base, PCLK1/4096 divided by 2^n
        WDGTB OFFSET(7) NUMBITS(2) [
            DivideBy1 = 0,
            DivideBy2 = 1,
            DivideBy4 = 2,
            DivideBy8 = 3
        ],
        /// Early wakeup interrupt enable
        EWI OFFSET(9) NUMBITS(1) []
    ],
    pub SR [
        EWIF OFFSET(0) NUMBITS(1) []
    ]
];

pub const WWDG: StaticRef<WwdgRegisters> =
    unsafe { StaticRef::new(WWDG_BASE as *const WwdgRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<WwdgRegisters>(), 0x0C);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(CR { T, WDGA });
        assert_bitfields!(CFGR { W, WDGTB, EWI });
        assert_bitfields!(SR { EWIF });
    }
}
