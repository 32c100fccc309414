// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! System configuration: memory remap, EXTI pin routing, DMA request remap.

use crate::memory_map::SYSCFG_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite};
use crate::utilities::StaticRef;

register_structs! {
    pub SyscfgRegisters {
        (0x000 => pub cfgr1: ReadWrite<u32, CFGR1::Register>),
        (0x004 => _reserved0),
        /// EXTI source port, four lines per register
        (0x008 => pub exticr: [ReadWrite<u32, EXTICR::Register>; 4]),
        (0x018 => pub cfgr2: ReadWrite<u32, CFGR2::Register>),
        /// Power detection control and status
        (0x01C => pub pdetcsr: ReadWrite<u32, PDETCSR::Register>),
        /// Delay after a voltage scaling change
        (0x020 => pub vosdly: ReadWrite<u32, VOSDLY::Register>),
        (0x024 => pub dmarmp: ReadWrite<u32, DMARMP::Register>),
        /// Bus master priority
        (0x028 => pub buspri: ReadWrite<u32, BUSPRI::Register>),
        (0x02C => @END),
    }
}

register_bitfields![u32,
    pub CFGR1 [
        /// Memory mapped at address 0
        MEM_MODE OFFSET(0) NUMBITS(2) [
            MainFlash = 0,
            SystemFlash = 1,
            Sram = 3
        ],
        /// Fast mode plus drive on the I2C1 pins
        I2C1_FMP OFFSET(16) NUMBITS(1) []
    ],
    pub EXTICR [
        /// Port for line 4n
        EXTI0 OFFSET(0) NUMBITS(4) [
            PA = 0,
            PB = 1,
            PC = 2,
            PD = 3,
            PE = 4
        ],
        /// Port for line 4n+1
        EXTI1 OFFSET(4) NUMBITS(4) [
            PA = 0,
            PB = 1,
            PC = 2,
            PD = 3,
            PE = 4
        ],
        /// Port for line 4n+2
        EXTI2 OFFSET(8) NUMBITS(4) [
            PA = 0,
            PB = 1,
            PC = 2,
            PD = 3,
            PE = 4
        ],
        /// Port for line 4n+3
        EXTI3 OFFSET(12) NUMBITS(4) [
            PA = 0,
            PB = 1,
            PC = 2,
            PD = 3,
            PE = 4
        ]
    ],
    pub CFGR2 [
        /// Core lockup drives the TIM1 break input
        LOCKUP_LOCK OFFSET(0) NUMBITS(1) [],
        SRAM_PARITY_LOCK OFFSET(1) NUMBITS(1) [],
        PVD_LOCK OFFSET(2) NUMBITS(1) []
    ],
    pub PDETCSR [
        /// Voltage detect enable
        VDTE OFFSET(0) NUMBITS(1) [],
        VDTLS OFFSET(1) NUMBITS(2) [],
        VDTO OFFSET(3) NUMBITS(1) [],
        /// VBAT/3 routed to the ADC
        VBATDIV3EN OFFSET(11) NUMBITS(1) []
    ],
    pub VOSDLY [
        VOSDLY_CNT OFFSET(0) NUMBITS(10) []
    ],
    pub DMARMP [
        ADC1_DMA_RMP OFFSET(0) NUMBITS(1) [],
        ADC2_DMA_RMP OFFSET(1) NUMBITS(1) [],
        UART1_TX_RMP OFFSET(2) NUMBITS(1) [],
        UART1_RX_RMP OFFSET(3) NUMBITS(1) [],
        SPI1_TX_RMP OFFSET(4) NUMBITS(1) [],
        SPI1_RX_RMP OFFSET(5) NUMBITS(1) []
    ],
    pub BUSPRI [
        PRI_CPU OFFSET(0) NUMBITS(2) [],
        PRI_DMA1 OFFSET(2) NUMBITS(2) [],
        PRI_USB OFFSET(4) NUMBITS(2) []
    ]
];

pub const SYSCFG: StaticRef<SyscfgRegisters> =
    unsafe { StaticRef::new(SYSCFG_BASE as *const SyscfgRegisters) };
