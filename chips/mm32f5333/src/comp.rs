// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Analog comparators COMP1 to COMP3.

use crate::memory_map::COMP_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite};
use crate::utilities::StaticRef;

pub const NUM_COMPARATORS: usize = 3;

register_structs! {
    pub CompRegisters {
        (0x000 => _reserved0),
        /// Control and status, one per comparator
        (0x00C => pub csr: [ReadWrite<u32, CSR::Register>; NUM_COMPARATORS]),
        /// Internal reference voltage divider
        (0x018 => pub crv: ReadWrite<u32, CRV::Register>),
        /// Input polling, one per comparator
        (0x01C => pub poll: [ReadWrite<u32, POLL::Register>; NUM_COMPARATORS]),
        (0x028 => @END),
    }
}

register_bitfields![u32,
    pub CSR [
        EN OFFSET(0) NUMBITS(1) [],
        /// Power and speed mode
        MODE OFFSET(2) NUMBITS(2) [
            HighSpeed = 0,
            MediumSpeed = 1,
            LowSpeed = 2,
            UltraLowPower = 3
        ],
        /// Inverting input
        INM_SEL OFFSET(4) NUMBITS(2) [
            Inm0 = 0,
            Inm1 = 1,
            Inm2 = 2,
            Crv = 3
        ],
        /// Non-inverting input
        INP_SEL OFFSET(7) NUMBITS(3) [],
        /// Output routing to timer inputs
        OUT_SEL OFFSET(10) NUMBITS(4) [],
        /// Output polarity
        POL OFFSET(15) NUMBITS(1) [
            NonInverted = 0,
            Inverted = 1
        ],
        /// Hysteresis
        HYST OFFSET(16) NUMBITS(2) [
            Off = 0,
            Mv15 = 1,
            Mv30 = 2,
            Mv90 = 3
        ],
        /// Output filter length
        OFLT OFFSET(18) NUMBITS(3) [],
        /// Comparator output level
        OUT OFFSET(30) NUMBITS(1) [],
        /// Lock the register until the next reset
        LOCK OFFSET(31) NUMBITS(1) []
    ],
    pub CRV [
        /// Divider ratio, in sixteenths of the source
        CRV_SEL OFFSET(0) NUMBITS(4) [],
        CRV_EN OFFSET(4) NUMBITS(1) [],
        CRV_SRC OFFSET(5) NUMBITS(1) [
            Vdda = 0,
            VrefInt = 1
        ]
    ],
    pub POLL [
        POLL_EN OFFSET(0) NUMBITS(1) [],
        /// Number of polled non-inverting inputs
        POLL_CH OFFSET(1) NUMBITS(1) [
            Two = 0,
            Three = 1
        ],
        /// Keep the inverting input fixed while polling
        FIXN OFFSET(2) NUMBITS(1) [],
        /// Wait period between channels
        PERIOD OFFSET(4) NUMBITS(3) [],
        /// Latched output of each polled input
        POUT OFFSET(8) NUMBITS(3) []
    ]
];

pub const COMP: StaticRef<CompRegisters> =
    unsafe { StaticRef::new(COMP_BASE as *const CompRegisters) };
