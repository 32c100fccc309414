// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Register dumps for debugging.
//!
//! Output is one header line followed by one `+offset: value` line per
//! 32-bit word:
//!
//! ```text
//! CRC @ 0x40023000
//!   +0x000: 0xffffffff
//!   +0x004: 0x00000000
//! ```

use core::fmt::{self, Write};

use crate::config::CONFIG;
use crate::peripherals::PeripheralId;

/// Format consecutive register words read from `base`.
pub fn dump_words<W, I>(out: &mut W, name: &str, base: usize, words: I) -> fmt::Result
where
    W: Write,
    I: IntoIterator<Item = u32>,
{
    writeln!(out, "{} @ {:#010x}", name, base)?;
    for (i, word) in words.into_iter().enumerate() {
        writeln!(out, "  +{:#05x}: {:#010x}", i * 4, word)?;
    }
    Ok(())
}

/// Dump `len` words of memory starting at `ptr`, using volatile reads.
///
/// # Safety
///
/// `ptr` must be valid for `len` aligned `u32` reads. Reading a register can
/// have side effects such as popping a FIFO or clearing a status flag.
pub unsafe fn dump_raw<W: Write>(
    out: &mut W,
    name: &str,
    ptr: *const u32,
    len: usize,
) -> fmt::Result {
    let words = (0..len).map(|i| {
        // SAFETY: the caller guarantees `len` readable words at `ptr`.
        let word = unsafe { core::ptr::read_volatile(ptr.add(i)) };
        if CONFIG.trace_register_dumps {
            trace!("{} +{:#x} = {:#x}", name, i * 4, word);
        }
        word
    });
    dump_words(out, name, ptr as usize, words)
}

/// Dump every word of a live peripheral.
///
/// # Safety
///
/// The peripheral clock must be enabled, otherwise the bus may fault. See
/// [`dump_raw`] for the side effects of reading registers.
pub unsafe fn dump_peripheral<W: Write>(out: &mut W, id: PeripheralId) -> fmt::Result {
    debug!("dumping {} ({} bytes)", id.name(), id.size());
    // SAFETY: `base()` and `size()` describe the register block of `id`,
    // which the caller has clocked.
    unsafe { dump_raw(out, id.name(), id.base() as *const u32, id.size() / 4) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::StrBuf;

    #[test]
    fn formats_offsets_and_values() {
        let mut buf = StrBuf::<128>::new();
        dump_words(&mut buf, "CRC", 0x4002_3000, [0xFFFF_FFFF, 0]).unwrap();
        assert_eq!(
            buf.as_str(),
            "CRC @ 0x40023000\n  +0x000: 0xffffffff\n  +0x004: 0x00000000\n"
        );
    }

    #[test]
    fn raw_dump_reads_each_word() {
        let block: [u32; 3] = [1, 0x20, 0x300];
        let mut buf = StrBuf::<128>::new();
        unsafe { dump_raw(&mut buf, "X", block.as_ptr(), block.len()) }.unwrap();
        let text = buf.as_str();
        assert!(text.ends_with("  +0x008: 0x00000300\n"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn output_that_does_not_fit_is_an_error() {
        let mut buf = StrBuf::<16>::new();
        assert!(dump_words(&mut buf, "TIM2", 0x4000_0000, [0]).is_err());
    }
}
