// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Table of every peripheral instance on the chip.
//!
//! Each entry ties an instance to its register block size, the bus it sits
//! on and the RCC bit that gates its clock. The window of an instance is
//! `base()..base() + size()`.

use core::mem::size_of;

use crate::error::ErrorCode;
use crate::memory_map::{
    ADC1_BASE, ADC2_BASE, BKP_BASE, COMP_BASE, CORDIC_BASE, CRC_BASE, CRS_BASE, DAC1_BASE,
    DBGMCU_BASE, DMA1_BASE, EXTI_BASE, FLASH_REG_BASE, FLEXCAN1_BASE, GPIOA_BASE, GPIOB_BASE,
    GPIOC_BASE, GPIOD_BASE, GPIOE_BASE, I2C1_BASE, I3C1_BASE, IWDG_BASE, LPTIM1_BASE,
    LPUART1_BASE, MDS_BASE, PWR_BASE, RCC_BASE, RTC_BASE, SPI1_BASE, SPI2_BASE, SRAM_REG_BASE,
    SYSCFG_BASE, TIM1_BASE, TIM2_BASE, TIM3_BASE, TIM6_BASE, UART1_BASE, UART2_BASE, UART3_BASE,
    USART1_BASE, USB_BASE, WWDG_BASE,
};
use crate::rcc::{self, EnableRegister};
use crate::{
    adc, bkp, comp, cordic, crc, crs, dac, dbgmcu, dma, exti, flash, flexcan, gpio, i2c, i3c, iwdg,
    lptim, lpuart, mds, pwr, rtc, spi, sram, syscfg, tim1, tim2, tim3, tim6, uart, usart, usb,
    wwdg,
};

/// System buses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bus {
    Apb1,
    Apb2,
    Ahb1,
    Ahb2,
    Ahb3,
}

/// Location of the clock enable bit of a peripheral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockGate {
    pub register: EnableRegister,
    pub bit: usize,
}

impl ClockGate {
    const fn ahb(bit: usize) -> Option<ClockGate> {
        Some(ClockGate {
            register: EnableRegister::Ahb,
            bit,
        })
    }

    const fn apb1(bit: usize) -> Option<ClockGate> {
        Some(ClockGate {
            register: EnableRegister::Apb1,
            bit,
        })
    }

    const fn apb2(bit: usize) -> Option<ClockGate> {
        Some(ClockGate {
            register: EnableRegister::Apb2,
            bit,
        })
    }
}

macro_rules! peripherals {
    ($( $id:ident = $name:literal, $base:expr, $regs:ty, $bus:ident, $gate:expr; )+) => {
        /// Peripheral instances, in address order.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum PeripheralId {
            $( $id, )+
        }

        impl PeripheralId {
            /// Every instance, sorted by base address.
            pub const ALL: &'static [PeripheralId] = &[$( PeripheralId::$id, )+];

            /// Name as used in the reference manual.
            pub const fn name(self) -> &'static str {
                match self {
                    $( PeripheralId::$id => $name, )+
                }
            }

            pub const fn base(self) -> usize {
                match self {
                    $( PeripheralId::$id => $base, )+
                }
            }

            /// Size of the register block in bytes.
            pub const fn size(self) -> usize {
                match self {
                    $( PeripheralId::$id => size_of::<$regs>(), )+
                }
            }

            pub const fn bus(self) -> Bus {
                match self {
                    $( PeripheralId::$id => Bus::$bus, )+
                }
            }

            /// RCC enable bit, or `None` for always-on blocks.
            pub const fn clock_gate(self) -> Option<ClockGate> {
                match self {
                    $( PeripheralId::$id => $gate, )+
                }
            }
        }
    };
}

peripherals! {
    Tim2 = "TIM2", TIM2_BASE, tim2::Tim2Registers, Apb1, ClockGate::apb1(rcc::APB1::TIM2.shift);
    Tim3 = "TIM3", TIM3_BASE, tim3::Tim3Registers, Apb1, ClockGate::apb1(rcc::APB1::TIM3.shift);
    Tim6 = "TIM6", TIM6_BASE, tim6::Tim6Registers, Apb1, ClockGate::apb1(rcc::APB1::TIM6.shift);
    Lptim1 = "LPTIM1", LPTIM1_BASE, lptim::LptimRegisters, Apb1,
        ClockGate::apb1(rcc::APB1::LPTIM1.shift);
    Rtc = "RTC", RTC_BASE, rtc::RtcRegisters, Apb1, None;
    Bkp = "BKP", BKP_BASE, bkp::BkpRegisters, Apb1, ClockGate::apb1(rcc::APB1::BKP.shift);
    Wwdg = "WWDG", WWDG_BASE, wwdg::WwdgRegisters, Apb1, ClockGate::apb1(rcc::APB1::WWDG.shift);
    Iwdg = "IWDG", IWDG_BASE, iwdg::IwdgRegisters, Apb1, None;
    Spi2 = "SPI2", SPI2_BASE, spi::SpiRegisters, Apb1, ClockGate::apb1(rcc::APB1::SPI2.shift);
    Uart2 = "UART2", UART2_BASE, uart::UartRegisters, Apb1,
        ClockGate::apb1(rcc::APB1::UART2.shift);
    Uart3 = "UART3", UART3_BASE, uart::UartRegisters, Apb1,
        ClockGate::apb1(rcc::APB1::UART3.shift);
    I2c1 = "I2C1", I2C1_BASE, i2c::I2cRegisters, Apb1, ClockGate::apb1(rcc::APB1::I2C1.shift);
    I3c1 = "I3C1", I3C1_BASE, i3c::I3cRegisters, Apb1, ClockGate::apb1(rcc::APB1::I3C1.shift);
    Crs = "CRS", CRS_BASE, crs::CrsRegisters, Apb1, ClockGate::apb1(rcc::APB1::CRS.shift);
    Pwr = "PWR", PWR_BASE, pwr::PwrRegisters, Apb1, ClockGate::apb1(rcc::APB1::PWR.shift);
    Dbgmcu = "DBGMCU", DBGMCU_BASE, dbgmcu::DbgmcuRegisters, Apb1, None;
    Dac1 = "DAC1", DAC1_BASE, dac::DacRegisters, Apb1, ClockGate::apb1(rcc::APB1::DAC1.shift);
    Lpuart1 = "LPUART1", LPUART1_BASE, lpuart::LpuartRegisters, Apb1,
        ClockGate::apb1(rcc::APB1::LPUART1.shift);
    Flexcan1 = "FLEXCAN1", FLEXCAN1_BASE, flexcan::FlexcanRegisters, Apb1,
        ClockGate::apb1(rcc::APB1::FLEXCAN1.shift);
    Syscfg = "SYSCFG", SYSCFG_BASE, syscfg::SyscfgRegisters, Apb2,
        ClockGate::apb2(rcc::APB2::SYSCFG.shift);
    Exti = "EXTI", EXTI_BASE, exti::ExtiRegisters, Apb2, ClockGate::apb2(rcc::APB2::SYSCFG.shift);
    Mds = "MDS", MDS_BASE, mds::MdsRegisters, Apb2, ClockGate::apb2(rcc::APB2::MDS.shift);
    Adc1 = "ADC1", ADC1_BASE, adc::AdcRegisters, Apb2, ClockGate::apb2(rcc::APB2::ADC1.shift);
    Adc2 = "ADC2", ADC2_BASE, adc::AdcRegisters, Apb2, ClockGate::apb2(rcc::APB2::ADC2.shift);
    Tim1 = "TIM1", TIM1_BASE, tim1::Tim1Registers, Apb2, ClockGate::apb2(rcc::APB2::TIM1.shift);
    Spi1 = "SPI1", SPI1_BASE, spi::SpiRegisters, Apb2, ClockGate::apb2(rcc::APB2::SPI1.shift);
    Uart1 = "UART1", UART1_BASE, uart::UartRegisters, Apb2,
        ClockGate::apb2(rcc::APB2::UART1.shift);
    Usart1 = "USART1", USART1_BASE, usart::UsartRegisters, Apb2,
        ClockGate::apb2(rcc::APB2::USART1.shift);
    Comp = "COMP", COMP_BASE, comp::CompRegisters, Apb2, ClockGate::apb2(rcc::APB2::COMP.shift);
    Dma1 = "DMA1", DMA1_BASE, dma::DmaRegisters, Ahb1, ClockGate::ahb(rcc::AHB::DMA1.shift);
    Rcc = "RCC", RCC_BASE, rcc::RccRegisters, Ahb1, None;
    Flash = "FLASH", FLASH_REG_BASE, flash::FlashRegisters, Ahb1,
        ClockGate::ahb(rcc::AHB::FLASH.shift);
    Crc = "CRC", CRC_BASE, crc::CrcRegisters, Ahb1, ClockGate::ahb(rcc::AHB::CRC.shift);
    Sram = "SRAM", SRAM_REG_BASE, sram::SramRegisters, Ahb1, ClockGate::ahb(rcc::AHB::SRAM.shift);
    Cordic = "CORDIC", CORDIC_BASE, cordic::CordicRegisters, Ahb1,
        ClockGate::ahb(rcc::AHB::CORDIC.shift);
    GpioA = "GPIOA", GPIOA_BASE, gpio::GpioRegisters, Ahb2, ClockGate::ahb(rcc::AHB::GPIOA.shift);
    GpioB = "GPIOB", GPIOB_BASE, gpio::GpioRegisters, Ahb2, ClockGate::ahb(rcc::AHB::GPIOB.shift);
    GpioC = "GPIOC", GPIOC_BASE, gpio::GpioRegisters, Ahb2, ClockGate::ahb(rcc::AHB::GPIOC.shift);
    GpioD = "GPIOD", GPIOD_BASE, gpio::GpioRegisters, Ahb2, ClockGate::ahb(rcc::AHB::GPIOD.shift);
    GpioE = "GPIOE", GPIOE_BASE, gpio::GpioRegisters, Ahb2, ClockGate::ahb(rcc::AHB::GPIOE.shift);
    Usb = "USB", USB_BASE, usb::UsbRegisters, Ahb3, ClockGate::ahb(rcc::AHB::USB.shift);
}

impl PeripheralId {
    /// The instance whose register block contains `addr`.
    pub fn containing(addr: usize) -> Result<PeripheralId, ErrorCode> {
        PeripheralId::ALL
            .iter()
            .copied()
            .find(|p| addr >= p.base() && addr - p.base() < p.size())
            .ok_or_else(|| {
                warn!("no peripheral at {:#x}", addr);
                ErrorCode::UnmappedAddress(addr)
            })
    }

    /// Offset of `addr` from the start of this instance, if it falls inside.
    pub fn offset_of(self, addr: usize) -> Option<usize> {
        addr.checked_sub(self.base()).filter(|&off| off < self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_map::{AHB1PERIPH_BASE, AHB2PERIPH_BASE, AHB3PERIPH_BASE, APB2PERIPH_BASE};

    #[test]
    fn sorted_and_disjoint() {
        for pair in PeripheralId::ALL.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                a.base() + a.size() <= b.base(),
                "{} overlaps {}",
                a.name(),
                b.name()
            );
        }
    }

    #[test]
    fn bases_are_word_aligned() {
        for &p in PeripheralId::ALL {
            assert_eq!(p.base() % 4, 0, "{}", p.name());
            assert_eq!(p.size() % 4, 0, "{}", p.name());
        }
    }

    #[test]
    fn bus_matches_address() {
        for &p in PeripheralId::ALL {
            let expected = match p.base() {
                a if a >= AHB3PERIPH_BASE => Bus::Ahb3,
                a if a >= AHB2PERIPH_BASE => Bus::Ahb2,
                a if a >= AHB1PERIPH_BASE => Bus::Ahb1,
                a if a >= APB2PERIPH_BASE => Bus::Apb2,
                _ => Bus::Apb1,
            };
            assert_eq!(p.bus(), expected, "{}", p.name());
        }
    }

    #[test]
    fn address_lookup() {
        assert_eq!(PeripheralId::containing(GPIOC_BASE), Ok(PeripheralId::GpioC));
        assert_eq!(PeripheralId::containing(RCC_BASE + 0x5C), Ok(PeripheralId::Rcc));
        assert_eq!(
            PeripheralId::containing(FLEXCAN1_BASE + 0x880),
            Ok(PeripheralId::Flexcan1)
        );
        // Between RTC and BKP.
        assert_eq!(
            PeripheralId::containing(RTC_BASE + 0x3C),
            Err(ErrorCode::UnmappedAddress(RTC_BASE + 0x3C))
        );
        assert_eq!(
            PeripheralId::containing(0),
            Err(ErrorCode::UnmappedAddress(0))
        );
        assert_eq!(PeripheralId::Rcc.offset_of(RCC_BASE + 0x18), Some(0x18));
        assert_eq!(PeripheralId::Rcc.offset_of(RCC_BASE - 4), None);
    }

    #[test]
    fn clock_gates() {
        assert_eq!(
            PeripheralId::Uart2.clock_gate(),
            Some(ClockGate {
                register: EnableRegister::Apb1,
                bit: 17
            })
        );
        assert_eq!(
            PeripheralId::Dma1.clock_gate(),
            Some(ClockGate {
                register: EnableRegister::Ahb,
                bit: 21
            })
        );
        assert_eq!(PeripheralId::Iwdg.clock_gate(), None);

        // Only EXTI shares its gate, with SYSCFG.
        for (i, a) in PeripheralId::ALL.iter().enumerate() {
            for b in &PeripheralId::ALL[i + 1..] {
                if let (Some(ga), Some(gb)) = (a.clock_gate(), b.clock_gate()) {
                    let shared = ga == gb;
                    let allowed = matches!(
                        (a, b),
                        (PeripheralId::Syscfg, PeripheralId::Exti)
                    );
                    assert!(!shared || allowed, "{} and {}", a.name(), b.name());
                }
            }
        }
    }

    #[test]
    fn sizes_from_layouts() {
        assert_eq!(PeripheralId::Flexcan1.size(), 0xC0C);
        assert_eq!(PeripheralId::Usb.size(), 0x104);
        assert_eq!(PeripheralId::ALL.len(), 41);
    }
}
