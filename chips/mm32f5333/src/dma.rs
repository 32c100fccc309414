// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! DMA controller with eight channels.
//!
//! Channels are numbered from 1 as in the reference manual. Use
//! [`DmaRegisters::channel`] to get the register block of one channel.

use crate::error::ErrorCode;
use crate::memory_map::DMA1_BASE;
use crate::utilities::registers::{
    register_bitfields, register_structs, ReadOnly, ReadWrite, WriteOnly,
};
use crate::utilities::StaticRef;

/// Number of channels in the controller.
pub const NUM_CHANNELS: usize = 8;

register_structs! {
    pub DmaChannelRegisters {
        (0x000 => pub ccr: ReadWrite<u32, CCR::Register>),
        /// Number of data to transfer
        (0x004 => pub cndtr: ReadWrite<u32, CNDTR::Register>),
        /// Peripheral address
        (0x008 => pub cpar: ReadWrite<u32>),
        /// Memory address
        (0x00C => pub cmar: ReadWrite<u32>),
        (0x010 => _reserved0),
        (0x014 => @END),
    },

    pub DmaRegisters {
        (0x000 => pub isr: ReadOnly<u32, ISR::Register>),
        (0x004 => pub ifcr: WriteOnly<u32, IFCR::Register>),
        (0x008 => pub ch: [DmaChannelRegisters; NUM_CHANNELS]),
        (0x0A8 => @END),
    }
}

register_bitfields![u32,
    pub ISR [
        GIF1 OFFSET(0) NUMBITS(1) [],
        TCIF1 OFFSET(1) NUMBITS(1) [],
        HTIF1 OFFSET(2) NUMBITS(1) [],
        TEIF1 OFFSET(3) NUMBITS(1) [],
        GIF2 OFFSET(4) NUMBITS(1) [],
        TCIF2 OFFSET(5) NUMBITS(1) [],
        HTIF2 OFFSET(6) NUMBITS(1) [],
        TEIF2 OFFSET(7) NUMBITS(1) [],
        GIF3 OFFSET(8) NUMBITS(1) [],
        TCIF3 OFFSET(9) NUMBITS(1) [],
        HTIF3 OFFSET(10) NUMBITS(1) [],
        TEIF3 OFFSET(11) NUMBITS(1) [],
        GIF4 OFFSET(12) NUMBITS(1) [],
        TCIF4 OFFSET(13) NUMBITS(1) [],
        HTIF4 OFFSET(14) NUMBITS(1) [],
        TEIF4 OFFSET(15) NUMBITS(1) [],
        GIF5 OFFSET(16) NUMBITS(1) [],
        TCIF5 OFFSET(17) NUMBITS(1) [],
        HTIF5 OFFSET(18) NUMBITS(1) [],
        TEIF5 OFFSET(19) NUMBITS(1) [],
        GIF6 OFFSET(20) NUMBITS(1) [],
        TCIF6 OFFSET(21) NUMBITS(1) [],
        HTIF6 OFFSET(22) NUMBITS(1) [],
        TEIF6 OFFSET(23) NUMBITS(1) [],
        GIF7 OFFSET(24) NUMBITS(1) [],
        TCIF7 OFFSET(25) NUMBITS(1) [],
        HTIF7 OFFSET(26) NUMBITS(1) [],
        TEIF7 OFFSET(27) NUMBITS(1) [],
        GIF8 OFFSET(28) NUMBITS(1) [],
        TCIF8 OFFSET(29) NUMBITS(1) [],
        HTIF8 OFFSET(30) NUMBITS(1) [],
        TEIF8 OFFSET(31) NUMBITS(1) []
    ],
    pub IFCR [
        CGIF1 OFFSET(0) NUMBITS(1) [],
        CTCIF1 OFFSET(1) NUMBITS(1) [],
        CHTIF1 OFFSET(2) NUMBITS(1) [],
        CTEIF1 OFFSET(3) NUMBITS(1) [],
        CGIF2 OFFSET(4) NUMBITS(1) [],
        CTCIF2 OFFSET(5) NUMBITS(1) [],
        CHTIF2 OFFSET(6) NUMBITS(1) [],
        CTEIF2 OFFSET(7) NUMBITS(1) [],
        CGIF3 OFFSET(8) NUMBITS(1) [],
        CTCIF3 OFFSET(9) NUMBITS(1) [],
        CHTIF3 OFFSET(10) NUMBITS(1) [],
        CTEIF3 OFFSET(11) NUMBITS(1) [],
        CGIF4 OFFSET(12) NUMBITS(1) [],
        CTCIF4 OFFSET(13) NUMBITS(1) [],
        CHTIF4 OFFSET(14) NUMBITS(1) [],
        CTEIF4 OFFSET(15) NUMBITS(1) [],
        CGIF5 OFFSET(16) NUMBITS(1) [],
        CTCIF5 OFFSET(17) NUMBITS(1) [],
        CHTIF5 OFFSET(18) NUMBITS(1) [],
        CTEIF5 OFFSET(19) NUMBITS(1) [],
        CGIF6 OFFSET(20) NUMBITS(1) [],
        CTCIF6 OFFSET(21) NUMBITS(1) [],
        CHTIF6 OFFSET(22) NUMBITS(1) [],
        CTEIF6 OFFSET(23) NUMBITS(1) [],
        CGIF7 OFFSET(24) NUMBITS(1) [],
        CTCIF7 OFFSET(25) NUMBITS(1) [],
        CHTIF7 OFFSET(26) NUMBITS(1) [],
        CTEIF7 OFFSET(27) NUMBITS(1) [],
        CGIF8 OFFSET(28) NUMBITS(1) [],
        CTCIF8 OFFSET(29) NUMBITS(1) [],
        CHTIF8 OFFSET(30) NUMBITS(1) [],
        CTEIF8 OFFSET(31) NUMBITS(1) []
    ],
    pub CCR [
        EN OFFSET(0) NUMBITS(1) [],
        TCIE OFFSET(1) NUMBITS(1) [],
        HTIE OFFSET(2) NUMBITS(1) [],
        TEIE OFFSET(3) NUMBITS(1) [],
        DIR OFFSET(4) NUMBITS(1) [
            PeripheralToMemory = 0,
            MemoryToPeripheral = 1
        ],
        CIRC OFFSET(5) NUMBITS(1) [],
        PINC OFFSET(6) NUMBITS(1) [],
        MINC OFFSET(7) NUMBITS(1) [],
        PSIZE OFFSET(8) NUMBITS(2) [
            Bits8 = 0,
            Bits16 = 1,
            Bits32 = 2
        ],
        MSIZE OFFSET(10) NUMBITS(2) [
            Bits8 = 0,
            Bits16 = 1,
            Bits32 = 2
        ],
        PL OFFSET(12) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        MEM2MEM OFFSET(14) NUMBITS(1) [],
        /// Auto reload of the transfer count in circular mode
        ARE OFFSET(15) NUMBITS(1) []
    ],
    pub CNDTR [
        NDT OFFSET(0) NUMBITS(16) []
    ]
];

impl DmaRegisters {
    /// Registers of channel `n`, counted from 1.
    pub fn channel(&self, n: usize) -> Result<&DmaChannelRegisters, ErrorCode> {
        if n == 0 || n > NUM_CHANNELS {
            debug!("dma channel {} out of range", n);
            return Err(ErrorCode::NoSuchInstance(n));
        }
        Ok(&self.ch[n - 1])
    }
}

pub const DMA1: StaticRef<DmaRegisters> =
    unsafe { StaticRef::new(DMA1_BASE as *const DmaRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::interfaces::{Readable, Writeable};
    use crate::utilities::registers::{InMemoryRegister, LocalRegisterCopy};

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<DmaChannelRegisters>(), 0x14);
        assert_eq!(core::mem::size_of::<DmaRegisters>(), 0xA8);
    }

    #[test]
    fn channel_offsets() {
        let base = core::mem::MaybeUninit::<DmaRegisters>::uninit();
        let regs = base.as_ptr() as usize;
        // SAFETY: only field addresses are taken, nothing is read.
        let ch8 = unsafe { core::ptr::addr_of!((*base.as_ptr()).ch[7].ccr) } as usize;
        assert_eq!(ch8 - regs, 0x08 + 7 * 0x14);
    }

    #[test]
    fn channel_numbering() {
        let base = core::mem::MaybeUninit::<DmaRegisters>::zeroed();
        // SAFETY: all registers are plain integers, so all-zero is valid.
        let regs = unsafe { base.assume_init_ref() };
        assert!(core::ptr::eq(regs.channel(1).unwrap(), &regs.ch[0]));
        assert!(core::ptr::eq(regs.channel(8).unwrap(), &regs.ch[7]));
        assert_eq!(regs.channel(0).err(), Some(ErrorCode::NoSuchInstance(0)));
        assert_eq!(regs.channel(9).err(), Some(ErrorCode::NoSuchInstance(9)));
    }

    #[test]
    fn status_flags_are_per_channel() {
        let isr = LocalRegisterCopy::<u32, ISR::Register>::new(0x2000_0000);
        assert!(isr.is_set(ISR::TCIF8));
        assert!(!isr.is_set(ISR::TCIF1));
        assert_eq!(isr.get(), 1 << 29);
    }

    #[test]
    fn memory_to_peripheral_byte_transfer() {
        let ccr = InMemoryRegister::<u32, CCR::Register>::new(0);
        ccr.write(
            CCR::DIR::MemoryToPeripheral
                + CCR::MINC::SET
                + CCR::PSIZE::Bits8
                + CCR::MSIZE::Bits8
                + CCR::PL::High
                + CCR::TCIE::SET,
        );
        assert_eq!(ccr.get(), 0x2092);
        assert!(ccr.matches_all(CCR::DIR::MemoryToPeripheral));
        assert!(!ccr.is_set(CCR::EN));
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(ISR {
            GIF1, TCIF1, HTIF1, TEIF1, GIF2, TCIF2, HTIF2, TEIF2, GIF3, TCIF3, HTIF3, TEIF3, GIF4,
            TCIF4, HTIF4, TEIF4, GIF5, TCIF5, HTIF5, TEIF5, GIF6, TCIF6, HTIF6, TEIF6, GIF7, TCIF7,
            HTIF7, TEIF7, GIF8, TCIF8, HTIF8, TEIF8,
        });
        assert_bitfields!(IFCR {
            CGIF1, CTCIF1, CHTIF1, CTEIF1, CGIF2, CTCIF2, CHTIF2, CTEIF2, CGIF3, CTCIF3, CHTIF3,
            CTEIF3, CGIF4, CTCIF4, CHTIF4, CTEIF4, CGIF5, CTCIF5, CHTIF5, CTEIF5, CGIF6, CTCIF6,
            CHTIF6, CTEIF6, CGIF7, CTCIF7, CHTIF7, CTEIF7, CGIF8, CTCIF8, CHTIF8, CTEIF8,
        });
        assert_bitfields!(CCR {
            EN, TCIE, HTIE, TEIE, DIR, CIRC, PINC, MINC, PSIZE, MSIZE, PL, MEM2MEM, ARE,
        });
        assert_bitfields!(CNDTR { NDT });
    }
}
