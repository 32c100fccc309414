// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Errors returned by the lookups in this crate.

use core::fmt;

/// Standard errors for register map lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorCode {
    /// The number is reserved or past the last device interrupt line.
    InvalidInterrupt(u32),
    /// No peripheral register block contains this address.
    UnmappedAddress(usize),
    /// The instance or channel index does not exist on this device.
    NoSuchInstance(usize),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ErrorCode::InvalidInterrupt(n) => write!(f, "invalid interrupt number {}", n),
            ErrorCode::UnmappedAddress(addr) => {
                write!(f, "address {:#010x} is not in a peripheral", addr)
            }
            ErrorCode::NoSuchInstance(index) => write!(f, "no instance with index {}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;
    use crate::test_util::StrBuf;
    use core::fmt::Write;

    #[test]
    fn display() {
        let mut buf = StrBuf::<64>::new();
        write!(buf, "{}", ErrorCode::UnmappedAddress(0x4000_7c00)).unwrap();
        assert_eq!(buf.as_str(), "address 0x40007c00 is not in a peripheral");

        let mut buf = StrBuf::<64>::new();
        write!(buf, "{}", ErrorCode::InvalidInterrupt(30)).unwrap();
        assert_eq!(buf.as_str(), "invalid interrupt number 30");
    }
}
