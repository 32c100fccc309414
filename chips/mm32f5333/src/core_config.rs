// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Processor core configuration.
//!
//! The MM32F5333 is built around the STAR-MC1 core, an Armv8-M mainline
//! implementation that is configured like a Cortex-M33 without TrustZone.

/// STAR-MC1 core revision, r0p4.
pub const STAR_REV: u16 = 0x0004;
pub const MPU_PRESENT: bool = true;
pub const VTOR_PRESENT: bool = true;
/// Number of priority bits implemented in the NVIC.
pub const NVIC_PRIO_BITS: u8 = 3;
pub const FPU_PRESENT: bool = true;
pub const DSP_PRESENT: bool = true;
/// The Security Attribution Unit is not implemented.
pub const SAUREGION_PRESENT: bool = false;
/// SysTick is the standard Armv8-M timer, no vendor specific replacement.
pub const VENDOR_SYSTICK_CONFIG: bool = false;

/// Number of distinct interrupt priority levels.
pub const NVIC_PRIORITY_LEVELS: u8 = 1 << NVIC_PRIO_BITS;

/// Core exceptions, numbered relative to the first device interrupt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i8)]
pub enum CoreException {
    NonMaskableInt = -14,
    HardFault = -13,
    MemoryManagement = -12,
    BusFault = -11,
    UsageFault = -10,
    SecureFault = -9,
    SVCall = -5,
    DebugMonitor = -4,
    PendSV = -2,
    SysTick = -1,
}

impl CoreException {
    /// Position of this exception in the vector table.
    pub const fn vector_index(self) -> usize {
        (self as i8 as isize + 16) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_positions() {
        assert_eq!(CoreException::NonMaskableInt.vector_index(), 2);
        assert_eq!(CoreException::SVCall.vector_index(), 11);
        assert_eq!(CoreException::SysTick.vector_index(), 15);
    }

    #[test]
    fn core_revision() {
        assert_eq!(STAR_REV >> 8, 0);
        assert_eq!(STAR_REV & 0xFF, 4);
    }

    #[test]
    fn priority_levels() {
        assert_eq!(NVIC_PRIORITY_LEVELS, 8);
    }
}
