// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Memory map of the MM32F5333.
//!
//! Addresses of the memory regions and of every peripheral register block.
//! The peripheral modules build their `StaticRef` handles from these values.

// Memory regions
pub const FLASH_BASE: usize = 0x0800_0000;
pub const FLASH_SIZE: usize = 256 * 1024;
pub const SRAM_BASE: usize = 0x2000_0000;
pub const SRAM_SIZE: usize = 32 * 1024;
/// Factory bootloader.
pub const SYSTEM_MEMORY_BASE: usize = 0x1FFF_F000;
/// Flash size word, in KiB.
pub const FLASH_SIZE_REG_BASE: usize = 0x1FFF_F7E0;
/// 96-bit unique device identifier.
pub const UID_BASE: usize = 0x1FFF_F7E8;
pub const OPTION_BYTES_BASE: usize = 0x1FFF_F800;

// Buses
pub const PERIPH_BASE: usize = 0x4000_0000;
pub const APB1PERIPH_BASE: usize = PERIPH_BASE;
pub const APB2PERIPH_BASE: usize = PERIPH_BASE + 0x0001_0000;
pub const AHB1PERIPH_BASE: usize = PERIPH_BASE + 0x0002_0000;
pub const AHB2PERIPH_BASE: usize = PERIPH_BASE + 0x0004_0000;
pub const AHB3PERIPH_BASE: usize = 0x5000_0000;

// APB1
pub const TIM2_BASE: usize = APB1PERIPH_BASE + 0x0000;
pub const TIM3_BASE: usize = APB1PERIPH_BASE + 0x0400;
pub const TIM6_BASE: usize = APB1PERIPH_BASE + 0x1000;
pub const LPTIM1_BASE: usize = APB1PERIPH_BASE + 0x2400;
pub const RTC_BASE: usize = APB1PERIPH_BASE + 0x2800;
pub const BKP_BASE: usize = APB1PERIPH_BASE + 0x2840;
pub const WWDG_BASE: usize = APB1PERIPH_BASE + 0x2C00;
pub const IWDG_BASE: usize = APB1PERIPH_BASE + 0x3000;
pub const SPI2_BASE: usize = APB1PERIPH_BASE + 0x3800;
pub const UART2_BASE: usize = APB1PERIPH_BASE + 0x4400;
pub const UART3_BASE: usize = APB1PERIPH_BASE + 0x4800;
pub const I2C1_BASE: usize = APB1PERIPH_BASE + 0x5400;
pub const I3C1_BASE: usize = APB1PERIPH_BASE + 0x5C00;
pub const CRS_BASE: usize = APB1PERIPH_BASE + 0x6C00;
pub const PWR_BASE: usize = APB1PERIPH_BASE + 0x7000;
pub const DBGMCU_BASE: usize = APB1PERIPH_BASE + 0x7080;
pub const DAC1_BASE: usize = APB1PERIPH_BASE + 0x7400;
pub const LPUART1_BASE: usize = APB1PERIPH_BASE + 0x8000;
pub const FLEXCAN1_BASE: usize = APB1PERIPH_BASE + 0xA000;

// APB2
pub const SYSCFG_BASE: usize = APB2PERIPH_BASE + 0x0000;
pub const EXTI_BASE: usize = APB2PERIPH_BASE + 0x0400;
pub const MDS_BASE: usize = APB2PERIPH_BASE + 0x0800;
pub const ADC1_BASE: usize = APB2PERIPH_BASE + 0x2400;
pub const ADC2_BASE: usize = APB2PERIPH_BASE + 0x2800;
pub const TIM1_BASE: usize = APB2PERIPH_BASE + 0x2C00;
pub const SPI1_BASE: usize = APB2PERIPH_BASE + 0x3000;
pub const UART1_BASE: usize = APB2PERIPH_BASE + 0x3800;
pub const USART1_BASE: usize = APB2PERIPH_BASE + 0x3C00;
pub const COMP_BASE: usize = APB2PERIPH_BASE + 0x4000;

// AHB1
pub const DMA1_BASE: usize = AHB1PERIPH_BASE + 0x0000;
pub const RCC_BASE: usize = AHB1PERIPH_BASE + 0x1000;
pub const FLASH_REG_BASE: usize = AHB1PERIPH_BASE + 0x2000;
pub const CRC_BASE: usize = AHB1PERIPH_BASE + 0x3000;
pub const SRAM_REG_BASE: usize = AHB1PERIPH_BASE + 0x3400;
pub const CORDIC_BASE: usize = AHB1PERIPH_BASE + 0x3800;

// AHB2
pub const GPIOA_BASE: usize = AHB2PERIPH_BASE + 0x0000;
pub const GPIOB_BASE: usize = AHB2PERIPH_BASE + 0x0400;
pub const GPIOC_BASE: usize = AHB2PERIPH_BASE + 0x0800;
pub const GPIOD_BASE: usize = AHB2PERIPH_BASE + 0x0C00;
pub const GPIOE_BASE: usize = AHB2PERIPH_BASE + 0x1000;

// AHB3
pub const USB_BASE: usize = AHB3PERIPH_BASE + 0x0000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_check_bases() {
        assert_eq!(GPIOA_BASE, 0x4004_0000);
        assert_eq!(ADC1_BASE, 0x4001_2400);
        assert_eq!(RCC_BASE, 0x4002_1000);
        assert_eq!(BKP_BASE, RTC_BASE + 0x40);
    }

    #[test]
    fn regions_do_not_overlap() {
        assert!(FLASH_BASE + FLASH_SIZE <= SYSTEM_MEMORY_BASE);
        assert!(SYSTEM_MEMORY_BASE < FLASH_SIZE_REG_BASE);
        assert!(UID_BASE + 12 <= OPTION_BYTES_BASE);
        assert!(SRAM_BASE + SRAM_SIZE <= PERIPH_BASE);
    }
}
