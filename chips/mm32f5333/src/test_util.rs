// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Shared helpers for the unit tests.

use core::fmt;

/// Check every listed field of one register: the mask is contiguous, the
/// field fits in 32 bits, and no two fields share a bit.
///
/// ```ignore
/// assert_bitfields!(CR1 { CEN, UDIS, URS });
/// ```
macro_rules! assert_bitfields {
    ($reg:ident { $($field:ident),+ $(,)? }) => {
        $crate::test_util::check_fields(
            stringify!($reg),
            &[$( (stringify!($field), $reg::$field.mask as u64, $reg::$field.shift) ),+],
        )
    };
}

pub(crate) fn check_fields(register: &str, fields: &[(&str, u64, usize)]) {
    let mut used: u64 = 0;
    for &(name, mask, shift) in fields {
        assert!(mask != 0, "{}.{} has an empty mask", register, name);
        assert!(
            mask & (mask + 1) == 0,
            "{}.{} mask {:#x} is not contiguous",
            register,
            name,
            mask
        );
        let width = mask.count_ones() as usize;
        assert!(
            shift + width <= 32,
            "{}.{} at {} with {} bits spills past bit 31",
            register,
            name,
            shift,
            width
        );
        let placed = mask << shift;
        assert!(
            used & placed == 0,
            "{}.{} overlaps another field ({:#010x} & {:#010x})",
            register,
            name,
            used,
            placed
        );
        used |= placed;
    }
}

/// Fixed-capacity string for formatting in `no_std` tests.
pub(crate) struct StrBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> StrBuf<N> {
    pub(crate) fn new() -> Self {
        StrBuf {
            buf: [0; N],
            len: 0,
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap()
    }
}

impl<const N: usize> fmt::Write for StrBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let end = self.len + bytes.len();
        if end > N {
            return Err(fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::check_fields;

    #[test]
    fn accepts_packed_fields() {
        check_fields("R", &[("A", 0x3, 0), ("B", 0x1, 2), ("C", 0x1fff_ffff, 3)]);
    }

    #[test]
    #[should_panic(expected = "overlaps")]
    fn rejects_overlap() {
        check_fields("R", &[("A", 0xf, 0), ("B", 0x1, 3)]);
    }

    #[test]
    #[should_panic(expected = "spills")]
    fn rejects_overflow() {
        check_fields("R", &[("A", 0xff, 28)]);
    }
}
