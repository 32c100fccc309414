// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral access for the MindMotion MM32F5333.
//!
//! MM32F5333: STAR-MC1 (Armv8-M mainline) core, 256 KiB flash, 32 KiB SRAM.
//!
//! Every peripheral module holds the register block layout, the bitfields of
//! its registers and a `StaticRef` handle per instance:
//!
//! ```ignore
//! use mm32f5333::rcc::{self, RCC};
//! use mm32f5333::utilities::registers::interfaces::ReadWriteable;
//!
//! RCC.apb1enr.modify(rcc::APB1::UART2::SET);
//! ```

#![no_std]
#![crate_name = "mm32f5333"]
#![crate_type = "rlib"]
// `flexcan` and `i2c` have many register definitions in `register_structs!`
// and require a deeper recursion limit than the default to fully expand.
#![recursion_limit = "256"]

#[macro_use]
mod fmt;
#[cfg(test)]
#[macro_use]
mod test_util;

mod config;

pub mod chip_config;
pub mod core_config;
pub mod dump;
pub mod error;
pub mod memory_map;
pub mod nvic;
pub mod peripherals;
pub mod signature;
pub mod utilities;

// Peripherals
pub mod adc;
pub mod bkp;
pub mod comp;
pub mod cordic;
pub mod crc;
pub mod crs;
pub mod dac;
pub mod dbgmcu;
pub mod dma;
pub mod exti;
pub mod flash;
pub mod flexcan;
pub mod gpio;
pub mod i2c;
pub mod i3c;
pub mod iwdg;
pub mod lptim;
pub mod lpuart;
pub mod mds;
pub mod pwr;
pub mod rcc;
pub mod rtc;
pub mod spi;
pub mod sram;
pub mod syscfg;
pub mod tim1;
pub mod tim2;
pub mod tim3;
pub mod tim6;
pub mod uart;
pub mod usart;
pub mod usb;
pub mod wwdg;

pub use crate::error::ErrorCode;
