// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Module distribution system: trigger routing between peripherals and
//! four configurable logic units.

use crate::memory_map::MDS_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite};
use crate::utilities::StaticRef;

pub const NUM_TRIGGER_CHANNELS: usize = 16;
pub const NUM_LOGIC_UNITS: usize = 4;

register_structs! {
    pub MdsRegisters {
        /// Trigger channel configuration
        (0x000 => pub trigcr: [ReadWrite<u32, TRIGCR::Register>; NUM_TRIGGER_CHANNELS]),
        (0x040 => _reserved0),
        /// Logic unit input selection
        (0x080 => pub clusel: [ReadWrite<u32, CLUSEL::Register>; NUM_LOGIC_UNITS]),
        (0x090 => _reserved1),
        /// Logic unit truth table
        (0x0A0 => pub clucfg: [ReadWrite<u32, CLUCFG::Register>; NUM_LOGIC_UNITS]),
        /// Connection of a trigger channel to its destination peripheral
        (0x0B0 => pub conncr: [ReadWrite<u32, CONNCR::Register>; NUM_TRIGGER_CHANNELS]),
        (0x0F0 => @END),
    }
}

register_bitfields![u32,
    pub TRIGCR [
        /// Trigger source
        TRGSEL OFFSET(0) NUMBITS(6) [],
        EDGESEL OFFSET(16) NUMBITS(2) [
            Disabled = 0,
            Rising = 1,
            Falling = 2,
            BothEdges = 3
        ]
    ],
    pub CLUSEL [
        CLU_IN0 OFFSET(0) NUMBITS(6) [],
        CLU_IN1 OFFSET(8) NUMBITS(6) [],
        CLU_IN2 OFFSET(16) NUMBITS(6) [],
        CLU_IN3 OFFSET(24) NUMBITS(6) []
    ],
    pub CLUCFG [
        /// Output for each of the 16 input combinations
        LUT OFFSET(0) NUMBITS(16) [],
        INV OFFSET(16) NUMBITS(1) [],
        EN OFFSET(31) NUMBITS(1) []
    ],
    pub CONNCR [
        /// Trigger channel or logic unit driving this connection
        MTRGSEL OFFSET(0) NUMBITS(6) []
    ]
];

pub const MDS: StaticRef<MdsRegisters> =
    unsafe { StaticRef::new(MDS_BASE as *const MdsRegisters) };
