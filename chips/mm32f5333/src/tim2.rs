// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! General purpose 32-bit timer.
//!
//! TIM3 has the same block with a 16-bit counter and reuses the control
//! bitfields defined here, see [`crate::tim3`].

use crate::memory_map::TIM2_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite, WriteOnly};
use crate::utilities::StaticRef;

register_structs! {
    pub Tim2Registers {
        /// control register 1
        (0x000 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// control register 2
        (0x004 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// slave mode control register
        (0x008 => pub smcr: ReadWrite<u32, SMCR::Register>),
        /// DMA/Interrupt enable register
        (0x00C => pub dier: ReadWrite<u32, DIER::Register>),
        /// status register
        (0x010 => pub sr: ReadWrite<u32, SR::Register>),
        /// event generation register
        (0x014 => pub egr: WriteOnly<u32, EGR::Register>),
        /// capture/compare mode register 1, output mode view
        (0x018 => pub ccmr1_output: ReadWrite<u32, CCMR1_Output::Register>),
        /// capture/compare mode register 2, output mode view
        (0x01C => pub ccmr2_output: ReadWrite<u32, CCMR2_Output::Register>),
        /// capture/compare enable register
        (0x020 => pub ccer: ReadWrite<u32, CCER::Register>),
        (0x024 => pub cnt: ReadWrite<u32, CNT::Register>),
        (0x028 => pub psc: ReadWrite<u32, PSC::Register>),
        /// auto-reload register
        (0x02C => pub arr: ReadWrite<u32, ARR::Register>),
        (0x030 => _reserved0),
        (0x034 => pub ccr1: ReadWrite<u32, CCR::Register>),
        (0x038 => pub ccr2: ReadWrite<u32, CCR::Register>),
        (0x03C => pub ccr3: ReadWrite<u32, CCR::Register>),
        (0x040 => pub ccr4: ReadWrite<u32, CCR::Register>),
        (0x044 => _reserved1),
        /// DMA control register
        (0x048 => pub dcr: ReadWrite<u32, DCR::Register>),
        /// DMA address for full transfer
        (0x04C => pub dmar: ReadWrite<u32>),
        /// option register
        (0x050 => pub or_: ReadWrite<u32, OR::Register>),
        (0x054 => _reserved2),
        /// PWM shift enable
        (0x05C => pub pder: ReadWrite<u32, PDER::Register>),
        /// falling edge compare values used when the matching shift is enabled
        (0x060 => pub ccr1fall: ReadWrite<u32, CCR::Register>),
        (0x064 => pub ccr2fall: ReadWrite<u32, CCR::Register>),
        (0x068 => pub ccr3fall: ReadWrite<u32, CCR::Register>),
        (0x06C => pub ccr4fall: ReadWrite<u32, CCR::Register>),
        (0x070 => @END),
    }
}

register_bitfields![u32,
    pub CR1 [
        /// Counter enable
        CEN OFFSET(0) NUMBITS(1) [],
        /// Update disable
        UDIS OFFSET(1) NUMBITS(1) [],
        /// Update request source
        URS OFFSET(2) NUMBITS(1) [],
        /// One-pulse mode
        OPM OFFSET(3) NUMBITS(1) [],
        DIR OFFSET(4) NUMBITS(1) [
            Up = 0,
            Down = 1
        ],
        /// Center-aligned mode selection
        CMS OFFSET(5) NUMBITS(2) [
            Edge = 0,
            CenterAligned1 = 1,
            CenterAligned2 = 2,
            CenterAligned3 = 3
        ],
        /// Auto-reload preload enable
        ARPE OFFSET(7) NUMBITS(1) [],
        /// Clock division for the input filters
        CKD OFFSET(8) NUMBITS(2) [
            DivideBy1 = 0,
            DivideBy2 = 1,
            DivideBy4 = 2
        ]
    ],
    pub CR2 [
        /// DMA request on update instead of capture/compare
        CCDS OFFSET(3) NUMBITS(1) [],
        /// Master mode selection
        MMS OFFSET(4) NUMBITS(3) [
            Reset = 0,
            Enable = 1,
            Update = 2,
            ComparePulse = 3,
            Oc1Ref = 4,
            Oc2Ref = 5,
            Oc3Ref = 6,
            Oc4Ref = 7
        ],
        /// TI1 is the XOR of CH1 to CH3
        TI1S OFFSET(7) NUMBITS(1) []
    ],
    pub SMCR [
        /// Slave mode selection
        SMS OFFSET(0) NUMBITS(3) [
            Disabled = 0,
            Encoder1 = 1,
            Encoder2 = 2,
            Encoder3 = 3,
            Reset = 4,
            Gated = 5,
            Trigger = 6,
            ExternalClock1 = 7
        ],
        /// OCREF clear selection
        OCCS OFFSET(3) NUMBITS(1) [],
        /// Trigger selection
        TS OFFSET(4) NUMBITS(3) [
            Itr0 = 0,
            Itr1 = 1,
            Itr2 = 2,
            Itr3 = 3,
            Ti1fEd = 4,
            Ti1fp1 = 5,
            Ti2fp2 = 6,
            Etrf = 7
        ],
        /// Master/slave mode
        MSM OFFSET(7) NUMBITS(1) [],
        /// External trigger filter
        ETF OFFSET(8) NUMBITS(4) [],
        ETPS OFFSET(12) NUMBITS(2) [
            DivideBy1 = 0,
            DivideBy2 = 1,
            DivideBy4 = 2,
            DivideBy8 = 3
        ],
        /// External clock mode 2 enable
        ECE OFFSET(14) NUMBITS(1) [],
        /// External trigger inverted
        ETP OFFSET(15) NUMBITS(1) []
    ],
    pub DIER [
        UIE OFFSET(0) NUMBITS(1) [],
        CC1IE OFFSET(1) NUMBITS(1) [],
        CC2IE OFFSET(2) NUMBITS(1) [],
        CC3IE OFFSET(3) NUMBITS(1) [],
        CC4IE OFFSET(4) NUMBITS(1) [],
        TIE OFFSET(6) NUMBITS(1) [],
        UDE OFFSET(8) NUMBITS(1) [],
        CC1DE OFFSET(9) NUMBITS(1) [],
        CC2DE OFFSET(10) NUMBITS(1) [],
        CC3DE OFFSET(11) NUMBITS(1) [],
        CC4DE OFFSET(12) NUMBITS(1) [],
        TDE OFFSET(14) NUMBITS(1) []
    ],
    pub SR [
        UIF OFFSET(0) NUMBITS(1) [],
        CC1IF OFFSET(1) NUMBITS(1) [],
        CC2IF OFFSET(2) NUMBITS(1) [],
        CC3IF OFFSET(3) NUMBITS(1) [],
        CC4IF OFFSET(4) NUMBITS(1) [],
        TIF OFFSET(6) NUMBITS(1) [],
        CC1OF OFFSET(9) NUMBITS(1) [],
        CC2OF OFFSET(10) NUMBITS(1) [],
        CC3OF OFFSET(11) NUMBITS(1) [],
        CC4OF OFFSET(12) NUMBITS(1) []
    ],
    pub EGR [
        UG OFFSET(0) NUMBITS(1) [],
        CC1G OFFSET(1) NUMBITS(1) [],
        CC2G OFFSET(2) NUMBITS(1) [],
        CC3G OFFSET(3) NUMBITS(1) [],
        CC4G OFFSET(4) NUMBITS(1) [],
        TG OFFSET(6) NUMBITS(1) []
    ],
    pub CCMR1_Output [
        CC1S OFFSET(0) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        /// Fast enable
        OC1FE OFFSET(2) NUMBITS(1) [],
        /// Preload enable
        OC1PE OFFSET(3) NUMBITS(1) [],
        OC1M OFFSET(4) NUMBITS(3) [
            Frozen = 0,
            ActiveOnMatch = 1,
            InactiveOnMatch = 2,
            Toggle = 3,
            ForceInactive = 4,
            ForceActive = 5,
            Pwm1 = 6,
            Pwm2 = 7
        ],
        /// Clear on ETRF
        OC1CE OFFSET(7) NUMBITS(1) [],
        CC2S OFFSET(8) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        OC2FE OFFSET(10) NUMBITS(1) [],
        OC2PE OFFSET(11) NUMBITS(1) [],
        OC2M OFFSET(12) NUMBITS(3) [
            Frozen = 0,
            ActiveOnMatch = 1,
            InactiveOnMatch = 2,
            Toggle = 3,
            ForceInactive = 4,
            ForceActive = 5,
            Pwm1 = 6,
            Pwm2 = 7
        ],
        OC2CE OFFSET(15) NUMBITS(1) []
    ],
    pub CCMR1_Input [
        CC1S OFFSET(0) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        /// Capture every 2^n events
        IC1PSC OFFSET(2) NUMBITS(2) [],
        /// Input filter
        IC1F OFFSET(4) NUMBITS(4) [],
        CC2S OFFSET(8) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        IC2PSC OFFSET(10) NUMBITS(2) [],
        IC2F OFFSET(12) NUMBITS(4) []
    ],
    pub CCMR2_Output [
        CC3S OFFSET(0) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        /// Fast enable
        OC3FE OFFSET(2) NUMBITS(1) [],
        /// Preload enable
        OC3PE OFFSET(3) NUMBITS(1) [],
        OC3M OFFSET(4) NUMBITS(3) [
            Frozen = 0,
            ActiveOnMatch = 1,
            InactiveOnMatch = 2,
            Toggle = 3,
            ForceInactive = 4,
            ForceActive = 5,
            Pwm1 = 6,
            Pwm2 = 7
        ],
        /// Clear on ETRF
        OC3CE OFFSET(7) NUMBITS(1) [],
        CC4S OFFSET(8) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        OC4FE OFFSET(10) NUMBITS(1) [],
        OC4PE OFFSET(11) NUMBITS(1) [],
        OC4M OFFSET(12) NUMBITS(3) [
            Frozen = 0,
            ActiveOnMatch = 1,
            InactiveOnMatch = 2,
            Toggle = 3,
            ForceInactive = 4,
            ForceActive = 5,
            Pwm1 = 6,
            Pwm2 = 7
        ],
        OC4CE OFFSET(15) NUMBITS(1) []
    ],
    pub CCMR2_Input [
        CC3S OFFSET(0) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        /// Capture every 2^n events
        IC3PSC OFFSET(2) NUMBITS(2) [],
        /// Input filter
        IC3F OFFSET(4) NUMBITS(4) [],
        CC4S OFFSET(8) NUMBITS(2) [
            Output = 0,
            DirectTi = 1,
            IndirectTi = 2,
            Trc = 3
        ],
        IC4PSC OFFSET(10) NUMBITS(2) [],
        IC4F OFFSET(12) NUMBITS(4) []
    ],
    pub CCER [
        CC1E OFFSET(0) NUMBITS(1) [],
        CC1P OFFSET(1) NUMBITS(1) [],
        CC1NP OFFSET(3) NUMBITS(1) [],
        CC2E OFFSET(4) NUMBITS(1) [],
        CC2P OFFSET(5) NUMBITS(1) [],
        CC2NP OFFSET(7) NUMBITS(1) [],
        CC3E OFFSET(8) NUMBITS(1) [],
        CC3P OFFSET(9) NUMBITS(1) [],
        CC3NP OFFSET(11) NUMBITS(1) [],
        CC4E OFFSET(12) NUMBITS(1) [],
        CC4P OFFSET(13) NUMBITS(1) [],
        CC4NP OFFSET(15) NUMBITS(1) []
    ],
    pub CNT [
        CNT OFFSET(0) NUMBITS(32) []
    ],
    pub PSC [
        PSC OFFSET(0) NUMBITS(16) []
    ],
    pub ARR [
        ARR OFFSET(0) NUMBITS(32) []
    ],
    pub CCR [
        CCR OFFSET(0) NUMBITS(32) []
    ],
    pub DCR [
        /// DMA base address, in words from CR1
        DBA OFFSET(0) NUMBITS(5) [],
        /// DMA burst length minus one
        DBL OFFSET(8) NUMBITS(5) []
    ],
    pub OR [
        /// External trigger remap
        ETR_RMP OFFSET(0) NUMBITS(2) [],
        TI4_RMP OFFSET(6) NUMBITS(2) []
    ],
    pub PDER [
        /// DMA request on repeated capture/compare events
        CCDREPE OFFSET(0) NUMBITS(1) [],
        CCR1_SHIFT_EN OFFSET(1) NUMBITS(1) [],
        CCR2_SHIFT_EN OFFSET(2) NUMBITS(1) [],
        CCR3_SHIFT_EN OFFSET(3) NUMBITS(1) [],
        CCR4_SHIFT_EN OFFSET(4) NUMBITS(1) []
    ]
];

pub const TIM2: StaticRef<Tim2Registers> =
    unsafe { StaticRef::new(TIM2_BASE as *const Tim2Registers) };
