// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Chip specific configuration.
//!
//! The MM32F5333 ships in several packages that share one die. They differ
//! in pin count and therefore in how many GPIO ports are bonded out. This
//! file holds a common configuration trait and one implementation per
//! package. The `config_*` cargo features pick [`DefaultConfig`]; without
//! any of them the LQFP100 `MM32F5333D7P` is used.

use crate::memory_map;

/// Package types of the MM32F5333.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Package {
    Lqfp100,
    Lqfp64,
    Qfn48,
}

/// MM32F5333 configuration based on the target package.
pub trait Mm32f5333Config {
    /// Part number. Useful for debugging to confirm the correct
    /// configuration of the chip is being used.
    const NAME: &'static str;

    const PACKAGE: Package;

    const PIN_COUNT: u32;

    /// Size of the main flash in bytes.
    const FLASH_SIZE: usize = memory_map::FLASH_SIZE;

    /// Size of the SRAM in bytes.
    const SRAM_SIZE: usize = memory_map::SRAM_SIZE;

    /// Number of GPIO ports with at least one bonded pin, counted from port A.
    const GPIO_PORTS: usize;

    /// Internal high speed oscillator in Hz.
    const HSI_FREQ: u32 = 8_000_000;

    /// Highest crystal frequency accepted on OSC_IN in Hz.
    const HSE_MAX_FREQ: u32 = 24_000_000;

    /// Internal low speed oscillator in Hz.
    const LSI_FREQ: u32 = 40_000;

    /// Low speed crystal in Hz.
    const LSE_FREQ: u32 = 32_768;

    /// Highest system clock in Hz.
    const MAX_SYSCLK_FREQ: u32 = 180_000_000;
}

/// LQFP100 package, all five ports.
pub enum Mm32f5333D7p {}

impl Mm32f5333Config for Mm32f5333D7p {
    const NAME: &'static str = "MM32F5333D7P";
    const PACKAGE: Package = Package::Lqfp100;
    const PIN_COUNT: u32 = 100;
    const GPIO_PORTS: usize = 5;
}

/// LQFP64 package, ports A to D.
pub enum Mm32f5333D6p {}

impl Mm32f5333Config for Mm32f5333D6p {
    const NAME: &'static str = "MM32F5333D6P";
    const PACKAGE: Package = Package::Lqfp64;
    const PIN_COUNT: u32 = 64;
    const GPIO_PORTS: usize = 4;
}

/// QFN48 package, ports A to D with port C and D partially bonded.
pub enum Mm32f5333D4q {}

impl Mm32f5333Config for Mm32f5333D4q {
    const NAME: &'static str = "MM32F5333D4Q";
    const PACKAGE: Package = Package::Qfn48;
    const PIN_COUNT: u32 = 48;
    const GPIO_PORTS: usize = 4;
}

#[cfg(not(feature = "config_disable_default"))]
pub type DefaultConfig = Mm32f5333D7p;

#[cfg(feature = "config_mm32f5333d6p")]
pub type DefaultConfig = Mm32f5333D6p;

#[cfg(all(feature = "config_mm32f5333d4q", not(feature = "config_mm32f5333d6p")))]
pub type DefaultConfig = Mm32f5333D4q;
