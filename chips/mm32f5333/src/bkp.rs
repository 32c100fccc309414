// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Backup registers and tamper detection.
//!
//! The data registers live in the backup domain and keep their contents in
//! standby mode and across a system reset.

use crate::memory_map::BKP_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite};
use crate::utilities::StaticRef;

/// Number of 16-bit backup data registers.
pub const NUM_DATA_REGISTERS: usize = 20;

register_structs! {
    pub BkpRegisters {
        /// RTC clock calibration
        (0x000 => pub rtccr: ReadWrite<u32, RTCCR::Register>),
        /// Tamper pin control
        (0x004 => pub cr: ReadWrite<u32, CR::Register>),
        /// Tamper control and status
        (0x008 => pub csr: ReadWrite<u32, CSR::Register>),
        (0x00C => _reserved0),
        (0x010 => pub dr: [ReadWrite<u32, DR::Register>; NUM_DATA_REGISTERS]),
        (0x060 => @END),
    }
}

register_bitfields![u32,
    pub RTCCR [
        /// Calibration value, in steps of 1/2^20 of the RTC clock
        CAL OFFSET(0) NUMBITS(7) [],
        /// Output the RTC clock divided by 64 on the tamper pin
        CCO OFFSET(7) NUMBITS(1) [],
        /// Alarm or second output enable
        ASOE OFFSET(8) NUMBITS(1) [],
        /// Alarm or second output selection
        ASOS OFFSET(9) NUMBITS(1) [
            Alarm = 0,
            Second = 1
        ]
    ],
    pub CR [
        /// Tamper pin enable
        TPE OFFSET(0) NUMBITS(1) [],
        /// Tamper pin active level
        TPAL OFFSET(1) NUMBITS(1) [
            High = 0,
            Low = 1
        ]
    ],
    pub CSR [
        /// Clear tamper event
        CTE OFFSET(0) NUMBITS(1) [],
        /// Clear tamper interrupt
        CTI OFFSET(1) NUMBITS(1) [],
        /// Tamper interrupt enable
        TPIE OFFSET(2) NUMBITS(1) [],
        /// Tamper event flag
        TEF OFFSET(8) NUMBITS(1) [],
        /// Tamper interrupt flag
        TIF OFFSET(9) NUMBITS(1) []
    ],
    pub DR [
        DATA OFFSET(0) NUMBITS(16) []
    ]
];

pub const BKP: StaticRef<BkpRegisters> = unsafe { StaticRef::new(BKP_BASE as *const BkpRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<BkpRegisters>(), 0x60);
    }

    #[test]
    fn fits_before_watchdog() {
        assert!(BKP_BASE + core::mem::size_of::<BkpRegisters>() <= crate::memory_map::WWDG_BASE);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(RTCCR { CAL, CCO, ASOE, ASOS });
        assert_bitfields!(CR { TPE, TPAL });
        assert_bitfields!(CSR { CTE, CTI, TPIE, TEF, TIF });
        assert_bitfields!(DR { DATA });
    }
}
