// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Named constants for NVIC ids
//!
//! Each device interrupt line is available both as a plain `u32` constant
//! (`nvic::TIM2`) and as a variant of [`Interrupt`].

#![allow(non_upper_case_globals)]

use crate::error::ErrorCode;

macro_rules! interrupts {
    ($( $(#[$attr:meta])* $name:ident = $num:literal, )+) => {
        /// Device interrupt lines of the MM32F5333.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[allow(non_camel_case_types)]
        #[repr(u16)]
        pub enum Interrupt {
            $( $(#[$attr])* $name = $num, )+
        }

        impl Interrupt {
            /// Every line, in ascending order.
            pub const ALL: &'static [Interrupt] = &[$( Interrupt::$name, )+];

            /// NVIC line number.
            pub const fn number(self) -> u32 {
                self as u32
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $( Interrupt::$name => stringify!($name), )+
                }
            }
        }

        impl TryFrom<u32> for Interrupt {
            type Error = ErrorCode;

            fn try_from(n: u32) -> Result<Self, Self::Error> {
                match n {
                    $( $num => Ok(Interrupt::$name), )+
                    _ => {
                        warn!("no interrupt line {}", n);
                        Err(ErrorCode::InvalidInterrupt(n))
                    }
                }
            }
        }

        $( $(#[$attr])* pub const $name: u32 = $num; )+
    };
}

interrupts! {
    /// Window watchdog early wakeup
    WWDG = 0,
    /// Programmable voltage detector through EXTI line 16
    PVD = 1,
    BKP_TAMPER = 2,
    /// RTC second and overflow
    RTC = 3,
    FLASH = 4,
    RCC_CRS = 5,
    EXTI0 = 6,
    EXTI1 = 7,
    EXTI2 = 8,
    EXTI3 = 9,
    EXTI4 = 10,
    DMA1_CH1 = 11,
    DMA1_CH2 = 12,
    DMA1_CH3 = 13,
    DMA1_CH4 = 14,
    DMA1_CH5 = 15,
    DMA1_CH6 = 16,
    DMA1_CH7 = 17,
    ADC1_2 = 18,
    FLEXCAN1 = 19,
    LPTIM1 = 20,
    LPUART1 = 21,
    I3C1 = 22,
    EXTI9_5 = 23,
    TIM1_BRK = 24,
    TIM1_UP = 25,
    TIM1_TRG_COM = 26,
    TIM1_CC = 27,
    TIM2 = 28,
    TIM3 = 29,
    I2C1 = 31,
    SPI1 = 33,
    SPI2 = 34,
    UART1 = 35,
    UART2 = 36,
    UART3 = 37,
    USART1 = 38,
    EXTI15_10 = 39,
    /// RTC alarm through EXTI line 17
    RTC_ALR = 40,
    /// USB wakeup through EXTI line 18
    USB_WKUP = 41,
    TIM6 = 42,
    DAC1 = 43,
    /// COMP1 to COMP3 through EXTI lines 19 to 21
    COMP = 44,
    CORDIC = 45,
    USB_FS = 46,
    DMA1_CH8 = 47,
}

/// Number of device interrupt lines, including reserved ones.
pub const NUM_IRQS: usize = 48;

impl From<Interrupt> for u32 {
    fn from(irq: Interrupt) -> u32 {
        irq.number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip() {
        for &irq in Interrupt::ALL {
            assert_eq!(Interrupt::try_from(irq.number()), Ok(irq));
            assert!((irq.number() as usize) < NUM_IRQS);
        }
        assert_eq!(Interrupt::try_from(TIM2), Ok(Interrupt::TIM2));
        assert_eq!(Interrupt::DMA1_CH8.name(), "DMA1_CH8");
    }

    #[test]
    fn reserved_lines_are_rejected() {
        for n in [30, 32, NUM_IRQS as u32, u32::MAX] {
            assert_eq!(
                Interrupt::try_from(n),
                Err(ErrorCode::InvalidInterrupt(n))
            );
        }
    }

    #[test]
    fn all_is_sorted_and_complete() {
        assert!(Interrupt::ALL.windows(2).all(|w| w[0] < w[1]));
        // Two reserved slots.
        assert_eq!(Interrupt::ALL.len(), NUM_IRQS - 2);
    }
}
