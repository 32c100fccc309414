// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Reset and clock control.
//!
//! The reset and enable registers of one bus share a bitfield, so
//! `AHB::DMA1` selects the same bit in `AHBRSTR` and `AHBENR`.

use crate::memory_map::RCC_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite};
use crate::utilities::StaticRef;

register_structs! {
    pub RccRegisters {
        /// Clock control
        (0x000 => pub cr: ReadWrite<u32, CR::Register>),
        /// Clock configuration
        (0x004 => pub cfgr: ReadWrite<u32, CFGR::Register>),
        /// Clock interrupt
        (0x008 => pub cir: ReadWrite<u32, CIR::Register>),
        (0x00C => pub ahbrstr: ReadWrite<u32, AHB::Register>),
        (0x010 => pub apb2rstr: ReadWrite<u32, APB2::Register>),
        (0x014 => pub apb1rstr: ReadWrite<u32, APB1::Register>),
        (0x018 => pub ahbenr: ReadWrite<u32, AHB::Register>),
        (0x01C => pub apb2enr: ReadWrite<u32, APB2::Register>),
        (0x020 => pub apb1enr: ReadWrite<u32, APB1::Register>),
        /// Backup domain control
        (0x024 => pub bdcr: ReadWrite<u32, BDCR::Register>),
        /// Control and status
        (0x028 => pub csr: ReadWrite<u32, CSR::Register>),
        (0x02C => pub syscfgr: ReadWrite<u32, SYSCFGR::Register>),
        (0x030 => pub cfgr2: ReadWrite<u32, CFGR2::Register>),
        /// Internal clock sources calibration
        (0x034 => pub icscr: ReadWrite<u32, ICSCR::Register>),
        (0x038 => pub pll1cfgr: ReadWrite<u32, PLLCFGR::Register>),
        (0x03C => pub pll2cfgr: ReadWrite<u32, PLLCFGR::Register>),
        (0x040 => pub adc1cfgr: ReadWrite<u32, ADCCFGR::Register>),
        (0x044 => pub adc2cfgr: ReadWrite<u32, ADCCFGR::Register>),
        (0x048 => _reserved0),
        (0x050 => pub daccfgr: ReadWrite<u32, DACCFGR::Register>),
        (0x054 => _reserved1),
        (0x05C => pub tpiucfgr: ReadWrite<u32, TPIUCFGR::Register>),
        (0x060 => @END),
    }
}

register_bitfields![u32,
    pub CR [
        HSION OFFSET(0) NUMBITS(1) [],
        HSIRDY OFFSET(1) NUMBITS(1) [],
        HSEON OFFSET(16) NUMBITS(1) [],
        HSERDY OFFSET(17) NUMBITS(1) [],
        HSEBYP OFFSET(18) NUMBITS(1) [],
        /// Clock security system enable
        CSSON OFFSET(19) NUMBITS(1) [],
        PLL1ON OFFSET(24) NUMBITS(1) [],
        PLL1RDY OFFSET(25) NUMBITS(1) [],
        PLL2ON OFFSET(28) NUMBITS(1) [],
        PLL2RDY OFFSET(29) NUMBITS(1) []
    ],
    pub CFGR [
        /// System clock switch
        SW OFFSET(0) NUMBITS(2) [
            Hsi = 0,
            Hse = 1,
            Pll1 = 2,
            Lsi = 3
        ],
        /// System clock switch status
        SWS OFFSET(2) NUMBITS(2) [
            Hsi = 0,
            Hse = 1,
            Pll1 = 2,
            Lsi = 3
        ],
        /// AHB prescaler
        HPRE OFFSET(4) NUMBITS(4) [
            DivideBy1 = 0,
            DivideBy2 = 8,
            DivideBy4 = 9,
            DivideBy8 = 10,
            DivideBy16 = 11,
            DivideBy64 = 12,
            DivideBy128 = 13,
            DivideBy256 = 14,
            DivideBy512 = 15
        ],
        /// APB1 prescaler
        PPRE1 OFFSET(8) NUMBITS(3) [
            DivideBy1 = 0,
            DivideBy2 = 4,
            DivideBy4 = 5,
            DivideBy8 = 6,
            DivideBy16 = 7
        ],
        /// APB2 prescaler
        PPRE2 OFFSET(11) NUMBITS(3) [
            DivideBy1 = 0,
            DivideBy2 = 4,
            DivideBy4 = 5,
            DivideBy8 = 6,
            DivideBy16 = 7
        ],
        /// USB clock prescaler from PLL2
        USBPRE OFFSET(22) NUMBITS(2) [],
        /// Microcontroller clock output
        MCO OFFSET(24) NUMBITS(4) [
            NoClock = 0,
            Lsi = 2,
            Lse = 3,
            Sysclk = 4,
            Hsi = 5,
            Hse = 6,
            Pll1 = 7,
            Pll2 = 8
        ]
    ],
    pub CIR [
        LSIRDYF OFFSET(0) NUMBITS(1) [],
        LSERDYF OFFSET(1) NUMBITS(1) [],
        HSIRDYF OFFSET(2) NUMBITS(1) [],
        HSERDYF OFFSET(3) NUMBITS(1) [],
        PLL1RDYF OFFSET(4) NUMBITS(1) [],
        PLL2RDYF OFFSET(5) NUMBITS(1) [],
        /// Clock security system interrupt flag
        CSSF OFFSET(7) NUMBITS(1) [],
        LSIRDYIE OFFSET(8) NUMBITS(1) [],
        LSERDYIE OFFSET(9) NUMBITS(1) [],
        HSIRDYIE OFFSET(10) NUMBITS(1) [],
        HSERDYIE OFFSET(11) NUMBITS(1) [],
        PLL1RDYIE OFFSET(12) NUMBITS(1) [],
        PLL2RDYIE OFFSET(13) NUMBITS(1) [],
        LSIRDYC OFFSET(16) NUMBITS(1) [],
        LSERDYC OFFSET(17) NUMBITS(1) [],
        HSIRDYC OFFSET(18) NUMBITS(1) [],
        HSERDYC OFFSET(19) NUMBITS(1) [],
        PLL1RDYC OFFSET(20) NUMBITS(1) [],
        PLL2RDYC OFFSET(21) NUMBITS(1) [],
        CSSC OFFSET(23) NUMBITS(1) []
    ],
    pub AHB [
        GPIOA OFFSET(0) NUMBITS(1) [],
        GPIOB OFFSET(1) NUMBITS(1) [],
        GPIOC OFFSET(2) NUMBITS(1) [],
        GPIOD OFFSET(3) NUMBITS(1) [],
        GPIOE OFFSET(4) NUMBITS(1) [],
        CORDIC OFFSET(8) NUMBITS(1) [],
        SRAM OFFSET(10) NUMBITS(1) [],
        CRC OFFSET(12) NUMBITS(1) [],
        FLASH OFFSET(13) NUMBITS(1) [],
        DMA1 OFFSET(21) NUMBITS(1) [],
        USB OFFSET(24) NUMBITS(1) []
    ],
    pub APB2 [
        TIM1 OFFSET(0) NUMBITS(1) [],
        UART1 OFFSET(4) NUMBITS(1) [],
        USART1 OFFSET(5) NUMBITS(1) [],
        ADC1 OFFSET(8) NUMBITS(1) [],
        ADC2 OFFSET(9) NUMBITS(1) [],
        SPI1 OFFSET(12) NUMBITS(1) [],
        /// Also clocks EXTI
        SYSCFG OFFSET(14) NUMBITS(1) [],
        COMP OFFSET(15) NUMBITS(1) [],
        MDS OFFSET(17) NUMBITS(1) []
    ],
    pub APB1 [
        TIM2 OFFSET(0) NUMBITS(1) [],
        TIM3 OFFSET(1) NUMBITS(1) [],
        TIM6 OFFSET(4) NUMBITS(1) [],
        LPTIM1 OFFSET(6) NUMBITS(1) [],
        WWDG OFFSET(11) NUMBITS(1) [],
        SPI2 OFFSET(14) NUMBITS(1) [],
        UART2 OFFSET(17) NUMBITS(1) [],
        UART3 OFFSET(18) NUMBITS(1) [],
        LPUART1 OFFSET(19) NUMBITS(1) [],
        I2C1 OFFSET(21) NUMBITS(1) [],
        I3C1 OFFSET(22) NUMBITS(1) [],
        CRS OFFSET(24) NUMBITS(1) [],
        FLEXCAN1 OFFSET(25) NUMBITS(1) [],
        BKP OFFSET(27) NUMBITS(1) [],
        PWR OFFSET(28) NUMBITS(1) [],
        DAC1 OFFSET(29) NUMBITS(1) []
    ],
    pub BDCR [
        LSEON OFFSET(0) NUMBITS(1) [],
        LSERDY OFFSET(1) NUMBITS(1) [],
        LSEBYP OFFSET(2) NUMBITS(1) [],
        RTCSEL OFFSET(8) NUMBITS(2) [
            NoClock = 0,
            Lse = 1,
            Lsi = 2,
            HseDiv128 = 3
        ],
        RTCEN OFFSET(15) NUMBITS(1) [],
        /// Backup domain software reset
        BDRST OFFSET(16) NUMBITS(1) [],
        /// Disable backup domain write protection
        DBP OFFSET(24) NUMBITS(1) []
    ],
    pub CSR [
        LSION OFFSET(0) NUMBITS(1) [],
        LSIRDY OFFSET(1) NUMBITS(1) [],
        /// Remove reset flags
        RMVF OFFSET(24) NUMBITS(1) [],
        PINRSTF OFFSET(26) NUMBITS(1) [],
        PORRSTF OFFSET(27) NUMBITS(1) [],
        SFTRSTF OFFSET(28) NUMBITS(1) [],
        IWDGRSTF OFFSET(29) NUMBITS(1) [],
        WWDGRSTF OFFSET(30) NUMBITS(1) [],
        LPWRRSTF OFFSET(31) NUMBITS(1) []
    ],
    pub SYSCFGR [
        /// HSE feedback resistor
        HSERFBSEL OFFSET(8) NUMBITS(2) [],
        /// HSE drive strength
        HSEDR OFFSET(10) NUMBITS(2) [],
        /// HSE low pass filter
        HSELPFEN OFFSET(14) NUMBITS(1) []
    ],
    pub CFGR2 [
        /// Advanced timer clock source
        TIMADV_CKSEL OFFSET(0) NUMBITS(1) [
            Pclk = 0,
            Pll1 = 1
        ],
        TIMADV_PRE OFFSET(1) NUMBITS(3) [],
        MCO_PRE OFFSET(20) NUMBITS(4) []
    ],
    pub ICSCR [
        /// Factory calibration, read only
        HSICAL OFFSET(0) NUMBITS(8) [],
        HSITRIM OFFSET(8) NUMBITS(6) []
    ],
    pub PLLCFGR [
        PLLSRC OFFSET(0) NUMBITS(2) [
            Hsi = 0,
            Hse = 1
        ],
        /// Divide HSE by 2 before the PLL
        PLLXTPRE OFFSET(2) NUMBITS(1) [],
        /// Charge pump current
        PLLICTRL OFFSET(3) NUMBITS(2) [],
        /// Input divider, value plus one
        PLLDIV OFFSET(8) NUMBITS(3) [],
        /// Feedback multiplier, value plus one
        PLLMUL OFFSET(16) NUMBITS(7) []
    ],
    pub ADCCFGR [
        /// Conversion clock prescaler
        PRE OFFSET(0) NUMBITS(4) [],
        /// Calibration clock prescaler
        PRECAL OFFSET(8) NUMBITS(7) []
    ],
    pub DACCFGR [
        PRE OFFSET(0) NUMBITS(7) []
    ],
    pub TPIUCFGR [
        PRE OFFSET(0) NUMBITS(2) []
    ]
];

pub const RCC: StaticRef<RccRegisters> =
    unsafe { StaticRef::new(RCC_BASE as *const RccRegisters) };

/// Registers of [`RccRegisters`] that gate peripheral clocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnableRegister {
    Ahb,
    Apb1,
    Apb2,
}

impl EnableRegister {
    /// Offset of the enable register within the RCC block.
    pub const fn offset(self) -> usize {
        match self {
            EnableRegister::Ahb => 0x18,
            EnableRegister::Apb2 => 0x1C,
            EnableRegister::Apb1 => 0x20,
        }
    }

    /// Offset of the matching reset register.
    pub const fn reset_offset(self) -> usize {
        self.offset() - 0x0C
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::interfaces::{ReadWriteable, Readable};
    use crate::utilities::registers::InMemoryRegister;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<RccRegisters>(), 0x60);
    }

    #[test]
    fn enable_register_offsets() {
        let base = core::mem::MaybeUninit::<RccRegisters>::uninit();
        let start = base.as_ptr() as usize;
        // SAFETY: only field addresses are taken, nothing is read.
        let (ahb, apb1, apb2rst) = unsafe {
            (
                core::ptr::addr_of!((*base.as_ptr()).ahbenr) as usize,
                core::ptr::addr_of!((*base.as_ptr()).apb1enr) as usize,
                core::ptr::addr_of!((*base.as_ptr()).apb2rstr) as usize,
            )
        };
        assert_eq!(ahb - start, EnableRegister::Ahb.offset());
        assert_eq!(apb1 - start, EnableRegister::Apb1.offset());
        assert_eq!(apb2rst - start, EnableRegister::Apb2.reset_offset());
    }

    #[test]
    fn enable_leaves_other_gates() {
        let enr = InMemoryRegister::<u32, APB1::Register>::new(APB1::PWR::SET.value);
        enr.modify(APB1::TIM2::SET + APB1::UART2::SET);
        assert!(enr.is_set(APB1::PWR));
        assert_eq!(enr.get(), (1 << 28) | (1 << 17) | 1);
    }

    #[test]
    fn pll_from_hse() {
        let pll = InMemoryRegister::<u32, PLLCFGR::Register>::new(0);
        pll.modify(PLLCFGR::PLLSRC::Hse + PLLCFGR::PLLMUL.val(14) + PLLCFGR::PLLDIV.val(0));
        assert_eq!(pll.get(), 0x000E_0001);
        assert_eq!(pll.read(PLLCFGR::PLLMUL), 14);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(CR {
            HSION, HSIRDY, HSEON, HSERDY, HSEBYP, CSSON, PLL1ON, PLL1RDY, PLL2ON, PLL2RDY,
        });
        assert_bitfields!(CFGR { SW, SWS, HPRE, PPRE1, PPRE2, USBPRE, MCO });
        assert_bitfields!(CIR {
            LSIRDYF, LSERDYF, HSIRDYF, HSERDYF, PLL1RDYF, PLL2RDYF, CSSF, LSIRDYIE, LSERDYIE,
            HSIRDYIE, HSERDYIE, PLL1RDYIE, PLL2RDYIE, LSIRDYC, LSERDYC, HSIRDYC, HSERDYC, PLL1RDYC,
            PLL2RDYC, CSSC,
        });
        assert_bitfields!(AHB {
            GPIOA, GPIOB, GPIOC, GPIOD, GPIOE, CORDIC, SRAM, CRC, FLASH, DMA1, USB,
        });
        assert_bitfields!(APB2 { TIM1, UART1, USART1, ADC1, ADC2, SPI1, SYSCFG, COMP, MDS });
        assert_bitfields!(APB1 {
            TIM2, TIM3, TIM6, LPTIM1, WWDG, SPI2, UART2, UART3, LPUART1, I2C1, I3C1, CRS, FLEXCAN1,
            BKP, PWR, DAC1,
        });
        assert_bitfields!(BDCR { LSEON, LSERDY, LSEBYP, RTCSEL, RTCEN, BDRST, DBP });
        assert_bitfields!(CSR {
            LSION, LSIRDY, RMVF, PINRSTF, PORRSTF, SFTRSTF, IWDGRSTF, WWDGRSTF, LPWRRSTF,
        });
        assert_bitfields!(SYSCFGR { HSERFBSEL, HSEDR, HSELPFEN });
        assert_bitfields!(CFGR2 { TIMADV_CKSEL, TIMADV_PRE, MCO_PRE });
        assert_bitfields!(ICSCR { HSICAL, HSITRIM });
        assert_bitfields!(PLLCFGR { PLLSRC, PLLXTPRE, PLLICTRL, PLLDIV, PLLMUL });
        assert_bitfields!(ADCCFGR { PRE, PRECAL });
        assert_bitfields!(DACCFGR { PRE });
        assert_bitfields!(TPIUCFGR { PRE });
    }
}
