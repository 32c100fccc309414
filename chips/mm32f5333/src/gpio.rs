// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! General purpose I/O ports A to E.
//!
//! Each pin is configured by a `MODEx`/`CNFx` pair in `CRL` (pins 0 to 7)
//! or `CRH` (pins 8 to 15). With `MODEx` = `Input` the `CNFx` values are
//! analog (0), floating (1) and pull-up/pull-down (2, direction from
//! `ODR`). For the output modes they are push-pull (0), open-drain (1),
//! alternate push-pull (2) and alternate open-drain (3).

use crate::error::ErrorCode;
use crate::memory_map::{GPIOA_BASE, GPIOB_BASE, GPIOC_BASE, GPIOD_BASE, GPIOE_BASE};
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

/// Number of ports on the die.
pub const NUM_PORTS: usize = 5;

register_structs! {
    pub GpioRegisters {
        /// Configuration, pins 0 to 7
        (0x000 => pub crl: ReadWrite<u32, CRL::Register>),
        /// Configuration, pins 8 to 15
        (0x004 => pub crh: ReadWrite<u32, CRH::Register>),
        (0x008 => pub idr: ReadOnly<u32, PINS::Register>),
        (0x00C => pub odr: ReadWrite<u32, PINS::Register>),
        /// Bit set/reset
        (0x010 => pub bsrr: WriteOnly<u32, BSRR::Register>),
        /// Bit reset
        (0x014 => pub brr: WriteOnly<u32, PINS::Register>),
        /// Configuration lock
        (0x018 => pub lckr: ReadWrite<u32, LCKR::Register>),
        /// Output drive strength
        (0x01C => pub dcr: ReadWrite<u32, DCR::Register>),
        /// Alternate function, pins 0 to 7
        (0x020 => pub afrl: ReadWrite<u32, AFRL::Register>),
        /// Alternate function, pins 8 to 15
        (0x024 => pub afrh: ReadWrite<u32, AFRH::Register>),
        (0x028 => @END),
    }
}

register_bitfields![u32,
    pub CRL [
        MODE0 OFFSET(0) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF0 OFFSET(2) NUMBITS(2) [],
        MODE1 OFFSET(4) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF1 OFFSET(6) NUMBITS(2) [],
        MODE2 OFFSET(8) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF2 OFFSET(10) NUMBITS(2) [],
        MODE3 OFFSET(12) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF3 OFFSET(14) NUMBITS(2) [],
        MODE4 OFFSET(16) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF4 OFFSET(18) NUMBITS(2) [],
        MODE5 OFFSET(20) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF5 OFFSET(22) NUMBITS(2) [],
        MODE6 OFFSET(24) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF6 OFFSET(26) NUMBITS(2) [],
        MODE7 OFFSET(28) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF7 OFFSET(30) NUMBITS(2) []
    ],
    pub CRH [
        MODE8 OFFSET(0) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF8 OFFSET(2) NUMBITS(2) [],
        MODE9 OFFSET(4) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF9 OFFSET(6) NUMBITS(2) [],
        MODE10 OFFSET(8) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF10 OFFSET(10) NUMBITS(2) [],
        MODE11 OFFSET(12) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF11 OFFSET(14) NUMBITS(2) [],
        MODE12 OFFSET(16) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF12 OFFSET(18) NUMBITS(2) [],
        MODE13 OFFSET(20) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF13 OFFSET(22) NUMBITS(2) [],
        MODE14 OFFSET(24) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF14 OFFSET(26) NUMBITS(2) [],
        MODE15 OFFSET(28) NUMBITS(2) [
            Input = 0,
            Output10MHz = 1,
            Output2MHz = 2,
            Output50MHz = 3
        ],
        CNF15 OFFSET(30) NUMBITS(2) []
    ],
    pub PINS [
        P0 OFFSET(0) NUMBITS(1) [],
        P1 OFFSET(1) NUMBITS(1) [],
        P2 OFFSET(2) NUMBITS(1) [],
        P3 OFFSET(3) NUMBITS(1) [],
        P4 OFFSET(4) NUMBITS(1) [],
        P5 OFFSET(5) NUMBITS(1) [],
        P6 OFFSET(6) NUMBITS(1) [],
        P7 OFFSET(7) NUMBITS(1) [],
        P8 OFFSET(8) NUMBITS(1) [],
        P9 OFFSET(9) NUMBITS(1) [],
        P10 OFFSET(10) NUMBITS(1) [],
        P11 OFFSET(11) NUMBITS(1) [],
        P12 OFFSET(12) NUMBITS(1) [],
        P13 OFFSET(13) NUMBITS(1) [],
        P14 OFFSET(14) NUMBITS(1) [],
        P15 OFFSET(15) NUMBITS(1) []
    ],
    pub BSRR [
        BS0 OFFSET(0) NUMBITS(1) [],
        BS1 OFFSET(1) NUMBITS(1) [],
        BS2 OFFSET(2) NUMBITS(1) [],
        BS3 OFFSET(3) NUMBITS(1) [],
        BS4 OFFSET(4) NUMBITS(1) [],
        BS5 OFFSET(5) NUMBITS(1) [],
        BS6 OFFSET(6) NUMBITS(1) [],
        BS7 OFFSET(7) NUMBITS(1) [],
        BS8 OFFSET(8) NUMBITS(1) [],
        BS9 OFFSET(9) NUMBITS(1) [],
        BS10 OFFSET(10) NUMBITS(1) [],
        BS11 OFFSET(11) NUMBITS(1) [],
        BS12 OFFSET(12) NUMBITS(1) [],
        BS13 OFFSET(13) NUMBITS(1) [],
        BS14 OFFSET(14) NUMBITS(1) [],
        BS15 OFFSET(15) NUMBITS(1) [],
        BR0 OFFSET(16) NUMBITS(1) [],
        BR1 OFFSET(17) NUMBITS(1) [],
        BR2 OFFSET(18) NUMBITS(1) [],
        BR3 OFFSET(19) NUMBITS(1) [],
        BR4 OFFSET(20) NUMBITS(1) [],
        BR5 OFFSET(21) NUMBITS(1) [],
        BR6 OFFSET(22) NUMBITS(1) [],
        BR7 OFFSET(23) NUMBITS(1) [],
        BR8 OFFSET(24) NUMBITS(1) [],
        BR9 OFFSET(25) NUMBITS(1) [],
        BR10 OFFSET(26) NUMBITS(1) [],
        BR11 OFFSET(27) NUMBITS(1) [],
        BR12 OFFSET(28) NUMBITS(1) [],
        BR13 OFFSET(29) NUMBITS(1) [],
        BR14 OFFSET(30) NUMBITS(1) [],
        BR15 OFFSET(31) NUMBITS(1) []
    ],
    pub LCKR [
        LCK0 OFFSET(0) NUMBITS(1) [],
        LCK1 OFFSET(1) NUMBITS(1) [],
        LCK2 OFFSET(2) NUMBITS(1) [],
        LCK3 OFFSET(3) NUMBITS(1) [],
        LCK4 OFFSET(4) NUMBITS(1) [],
        LCK5 OFFSET(5) NUMBITS(1) [],
        LCK6 OFFSET(6) NUMBITS(1) [],
        LCK7 OFFSET(7) NUMBITS(1) [],
        LCK8 OFFSET(8) NUMBITS(1) [],
        LCK9 OFFSET(9) NUMBITS(1) [],
        LCK10 OFFSET(10) NUMBITS(1) [],
        LCK11 OFFSET(11) NUMBITS(1) [],
        LCK12 OFFSET(12) NUMBITS(1) [],
        LCK13 OFFSET(13) NUMBITS(1) [],
        LCK14 OFFSET(14) NUMBITS(1) [],
        LCK15 OFFSET(15) NUMBITS(1) [],
        /// Lock key, written 1, 0, 1 with LCK held to lock
        LCKK OFFSET(16) NUMBITS(1) []
    ],
    pub DCR [
        DCR0 OFFSET(0) NUMBITS(2) [],
        DCR1 OFFSET(2) NUMBITS(2) [],
        DCR2 OFFSET(4) NUMBITS(2) [],
        DCR3 OFFSET(6) NUMBITS(2) [],
        DCR4 OFFSET(8) NUMBITS(2) [],
        DCR5 OFFSET(10) NUMBITS(2) [],
        DCR6 OFFSET(12) NUMBITS(2) [],
        DCR7 OFFSET(14) NUMBITS(2) [],
        DCR8 OFFSET(16) NUMBITS(2) [],
        DCR9 OFFSET(18) NUMBITS(2) [],
        DCR10 OFFSET(20) NUMBITS(2) [],
        DCR11 OFFSET(22) NUMBITS(2) [],
        DCR12 OFFSET(24) NUMBITS(2) [],
        DCR13 OFFSET(26) NUMBITS(2) [],
        DCR14 OFFSET(28) NUMBITS(2) [],
        DCR15 OFFSET(30) NUMBITS(2) []
    ],
    pub AFRL [
        AFR0 OFFSET(0) NUMBITS(4) [],
        AFR1 OFFSET(4) NUMBITS(4) [],
        AFR2 OFFSET(8) NUMBITS(4) [],
        AFR3 OFFSET(12) NUMBITS(4) [],
        AFR4 OFFSET(16) NUMBITS(4) [],
        AFR5 OFFSET(20) NUMBITS(4) [],
        AFR6 OFFSET(24) NUMBITS(4) [],
        AFR7 OFFSET(28) NUMBITS(4) []
    ],
    pub AFRH [
        AFR8 OFFSET(0) NUMBITS(4) [],
        AFR9 OFFSET(4) NUMBITS(4) [],
        AFR10 OFFSET(8) NUMBITS(4) [],
        AFR11 OFFSET(12) NUMBITS(4) [],
        AFR12 OFFSET(16) NUMBITS(4) [],
        AFR13 OFFSET(20) NUMBITS(4) [],
        AFR14 OFFSET(24) NUMBITS(4) [],
        AFR15 OFFSET(28) NUMBITS(4) []
    ]
];

pub const GPIOA: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(GPIOA_BASE as *const GpioRegisters) };
pub const GPIOB: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(GPIOB_BASE as *const GpioRegisters) };
pub const GPIOC: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(GPIOC_BASE as *const GpioRegisters) };
pub const GPIOD: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(GPIOD_BASE as *const GpioRegisters) };
pub const GPIOE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(GPIOE_BASE as *const GpioRegisters) };

const PORTS: [StaticRef<GpioRegisters>; NUM_PORTS] = [GPIOA, GPIOB, GPIOC, GPIOD, GPIOE];

/// Port handle by index, 0 for port A.
pub fn port(index: usize) -> Result<StaticRef<GpioRegisters>, ErrorCode> {
    PORTS.get(index).copied().ok_or_else(|| {
        debug!("no gpio port {}", index);
        ErrorCode::NoSuchInstance(index)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::interfaces::{Readable, Writeable};
    use crate::utilities::registers::InMemoryRegister;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<GpioRegisters>(), 0x28);
    }

    #[test]
    fn ports_by_index() {
        assert_eq!(port(0).map(|p| p.addr()), Ok(GPIOA_BASE));
        assert_eq!(port(4).map(|p| p.addr()), Ok(GPIOE_BASE));
        assert_eq!(port(5).map(|p| p.addr()), Err(ErrorCode::NoSuchInstance(5)));
    }

    #[test]
    fn pin_configuration() {
        let crh = InMemoryRegister::<u32, CRH::Register>::new(0x4444_4444);
        // PA9 as alternate push-pull output.
        crh.write(CRH::MODE9::Output50MHz + CRH::CNF9.val(2));
        assert_eq!(crh.get(), 0x0000_00B0);

        let bsrr = InMemoryRegister::<u32, BSRR::Register>::new(0);
        bsrr.write(BSRR::BS3::SET + BSRR::BR3::SET);
        assert_eq!(bsrr.get(), 0x0008_0008);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(CRL {
            MODE0, CNF0, MODE1, CNF1, MODE2, CNF2, MODE3, CNF3, MODE4, CNF4, MODE5, CNF5, MODE6,
            CNF6, MODE7, CNF7,
        });
        assert_bitfields!(CRH {
            MODE8, CNF8, MODE9, CNF9, MODE10, CNF10, MODE11, CNF11, MODE12, CNF12, MODE13, CNF13,
            MODE14, CNF14, MODE15, CNF15,
        });
        assert_bitfields!(PINS {
            P0, P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11, P12, P13, P14, P15,
        });
        assert_bitfields!(BSRR {
            BS0, BS1, BS2, BS3, BS4, BS5, BS6, BS7, BS8, BS9, BS10, BS11, BS12, BS13, BS14, BS15,
            BR0, BR1, BR2, BR3, BR4, BR5, BR6, BR7, BR8, BR9, BR10, BR11, BR12, BR13, BR14, BR15,
        });
        assert_bitfields!(LCKR {
            LCK0, LCK1, LCK2, LCK3, LCK4, LCK5, LCK6, LCK7, LCK8, LCK9, LCK10, LCK11, LCK12, LCK13,
            LCK14, LCK15, LCKK,
        });
        assert_bitfields!(DCR {
            DCR0, DCR1, DCR2, DCR3, DCR4, DCR5, DCR6, DCR7, DCR8, DCR9, DCR10, DCR11, DCR12, DCR13,
            DCR14, DCR15,
        });
        assert_bitfields!(AFRL { AFR0, AFR1, AFR2, AFR3, AFR4, AFR5, AFR6, AFR7 });
        assert_bitfields!(AFRH { AFR8, AFR9, AFR10, AFR11, AFR12, AFR13, AFR14, AFR15 });
    }
}
