// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Debug support: device identification and peripheral freeze in debug halt.

use crate::memory_map::DBGMCU_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

register_structs! {
    pub DbgmcuRegisters {
        /// Device identifier
        (0x000 => pub idcode: ReadOnly<u32, IDCODE::Register>),
        (0x004 => pub cr: ReadWrite<u32, CR::Register>),
        (0x008 => @END),
    }
}

register_bitfields![u32,
    pub IDCODE [
        DEV_ID OFFSET(0) NUMBITS(32) []
    ],
    pub CR [
        /// Keep clocks running in sleep mode
        DBG_SLEEP OFFSET(0) NUMBITS(1) [],
        /// Keep the debug interface alive in stop mode
        DBG_STOP OFFSET(1) NUMBITS(1) [],
        /// Keep the debug interface alive in standby mode
        DBG_STANDBY OFFSET(2) NUMBITS(1) [],
        TRACE_IOEN OFFSET(5) NUMBITS(1) [],
        TRACE_MODE OFFSET(6) NUMBITS(2) [
            Asynchronous = 0,
            Sync1 = 1,
            Sync2 = 2,
            Sync4 = 3
        ],
        DBG_IWDG_STOP OFFSET(8) NUMBITS(1) [],
        DBG_WWDG_STOP OFFSET(9) NUMBITS(1) [],
        DBG_TIM1_STOP OFFSET(10) NUMBITS(1) [],
        DBG_TIM2_STOP OFFSET(11) NUMBITS(1) [],
        DBG_TIM3_STOP OFFSET(12) NUMBITS(1) [],
        DBG_TIM6_STOP OFFSET(13) NUMBITS(1) [],
        DBG_CAN1_STOP OFFSET(14) NUMBITS(1) [],
        DBG_LPTIM1_STOP OFFSET(15) NUMBITS(1) [],
        /// Freeze the I2C1 SMBus timeout
        DBG_I2C1_STOP OFFSET(16) NUMBITS(1) []
    ]
];

pub const DBGMCU: StaticRef<DbgmcuRegisters> =
    unsafe { StaticRef::new(DBGMCU_BASE as *const DbgmcuRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<DbgmcuRegisters>(), 0x08);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(IDCODE { DEV_ID });
        assert_bitfields!(CR {
            DBG_SLEEP, DBG_STOP, DBG_STANDBY, TRACE_IOEN, TRACE_MODE, DBG_IWDG_STOP, DBG_WWDG_STOP,
            DBG_TIM1_STOP, DBG_TIM2_STOP, DBG_TIM3_STOP, DBG_TIM6_STOP, DBG_CAN1_STOP,
            DBG_LPTIM1_STOP, DBG_I2C1_STOP,
        });
    }
}
