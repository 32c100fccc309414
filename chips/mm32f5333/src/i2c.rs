// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! I2C controller.
//!
//! The block follows the DesignWare `IC_*` register model: a single data
//! register carries both the byte and the read/stop/restart command, and
//! every interrupt source has its own read-to-clear register.

use crate::memory_map::I2C1_BASE;
use crate::utilities::registers::{register_bitfields, register_structs, ReadOnly, ReadWrite};
use crate::utilities::StaticRef;

/// Depth of the transmit and receive FIFOs.
pub const FIFO_DEPTH: u32 = 8;

register_structs! {
    pub I2cRegisters {
        (0x000 => pub con: ReadWrite<u32, CON::Register>),
        /// Target address
        (0x004 => pub tar: ReadWrite<u32, TAR::Register>),
        /// Own address in slave mode
        (0x008 => pub sar: ReadWrite<u32, SAR::Register>),
        (0x00C => _reserved0),
        (0x010 => pub data_cmd: ReadWrite<u32, DATA_CMD::Register>),
        (0x014 => pub ss_scl_hcnt: ReadWrite<u32, SCL_CNT::Register>),
        (0x018 => pub ss_scl_lcnt: ReadWrite<u32, SCL_CNT::Register>),
        (0x01C => pub fs_scl_hcnt: ReadWrite<u32, SCL_CNT::Register>),
        (0x020 => pub fs_scl_lcnt: ReadWrite<u32, SCL_CNT::Register>),
        (0x024 => _reserved1),
        /// Masked interrupt status
        (0x02C => pub intr_stat: ReadOnly<u32, INTR::Register>),
        (0x030 => pub intr_mask: ReadWrite<u32, INTR::Register>),
        (0x034 => pub raw_intr_stat: ReadOnly<u32, INTR::Register>),
        (0x038 => pub rx_tl: ReadWrite<u32, FIFO_TL::Register>),
        (0x03C => pub tx_tl: ReadWrite<u32, FIFO_TL::Register>),
        /// Read to clear all software clearable interrupts
        (0x040 => pub clr_intr: ReadOnly<u32, CLR::Register>),
        (0x044 => pub clr_rx_under: ReadOnly<u32, CLR::Register>),
        (0x048 => pub clr_rx_over: ReadOnly<u32, CLR::Register>),
        (0x04C => pub clr_tx_over: ReadOnly<u32, CLR::Register>),
        (0x050 => pub clr_rd_req: ReadOnly<u32, CLR::Register>),
        (0x054 => pub clr_tx_abrt: ReadOnly<u32, CLR::Register>),
        (0x058 => pub clr_rx_done: ReadOnly<u32, CLR::Register>),
        (0x05C => pub clr_activity: ReadOnly<u32, CLR::Register>),
        (0x060 => pub clr_stop_det: ReadOnly<u32, CLR::Register>),
        (0x064 => pub clr_start_det: ReadOnly<u32, CLR::Register>),
        (0x068 => pub clr_gen_call: ReadOnly<u32, CLR::Register>),
        (0x06C => pub enable: ReadWrite<u32, ENR::Register>),
        (0x070 => pub status: ReadOnly<u32, STATUS::Register>),
        (0x074 => pub txflr: ReadOnly<u32, FIFO_LEVEL::Register>),
        (0x078 => pub rxflr: ReadOnly<u32, FIFO_LEVEL::Register>),
        (0x07C => pub sda_hold: ReadWrite<u32, SDA_HOLD::Register>),
        (0x080 => pub tx_abrt_source: ReadOnly<u32, TX_ABRT_SOURCE::Register>),
        (0x084 => pub slv_data_nack_only: ReadWrite<u32, SLV_DATA_NACK_ONLY::Register>),
        (0x088 => pub dma_cr: ReadWrite<u32, DMA_CR::Register>),
        (0x08C => pub dma_tdlr: ReadWrite<u32, FIFO_TL::Register>),
        (0x090 => pub dma_rdlr: ReadWrite<u32, FIFO_TL::Register>),
        (0x094 => pub sda_setup: ReadWrite<u32, SDA_SETUP::Register>),
        (0x098 => pub ack_general_call: ReadWrite<u32, ACK_GENERAL_CALL::Register>),
        (0x09C => pub enable_status: ReadOnly<u32, ENABLE_STATUS::Register>),
        /// Slave address mask
        (0x0A0 => pub slvmask: ReadWrite<u32, SLVMASK::Register>),
        /// Address matched in slave mode
        (0x0A4 => pub slvrcvaddr: ReadOnly<u32, SLVRCVADDR::Register>),
        (0x0A8 => @END),
    }
}

register_bitfields![u32,
    pub CON [
        MASTER_MODE OFFSET(0) NUMBITS(1) [],
        SPEED OFFSET(1) NUMBITS(2) [
            Standard = 1,
            Fast = 2
        ],
        IC_10BITADDR_SLAVE OFFSET(3) NUMBITS(1) [],
        IC_10BITADDR_MASTER OFFSET(4) NUMBITS(1) [],
        RESTART_EN OFFSET(5) NUMBITS(1) [],
        SLAVE_DISABLE OFFSET(6) NUMBITS(1) [],
        STOP_DET_IFADDRESSED OFFSET(7) NUMBITS(1) [],
        /// Hold the bus instead of stopping when the Tx FIFO runs empty
        EMPTYCTRL OFFSET(8) NUMBITS(1) [],
        RX_FIFO_FULL_HLD OFFSET(9) NUMBITS(1) []
    ],
    pub TAR [
        ADDR OFFSET(0) NUMBITS(10) [],
        /// General call or START byte, when SPECIAL is set
        GC_OR_START OFFSET(10) NUMBITS(1) [
            GeneralCall = 0,
            StartByte = 1
        ],
        SPECIAL OFFSET(11) NUMBITS(1) [],
        ADDR_10BIT OFFSET(12) NUMBITS(1) []
    ],
    pub SAR [
        ADDR OFFSET(0) NUMBITS(10) []
    ],
    pub DATA_CMD [
        DAT OFFSET(0) NUMBITS(8) [],
        CMD OFFSET(8) NUMBITS(1) [
            Write = 0,
            Read = 1
        ],
        /// Issue STOP after this byte
        STOP OFFSET(9) NUMBITS(1) [],
        /// Issue RESTART before this byte
        RESTART OFFSET(10) NUMBITS(1) []
    ],
    pub SCL_CNT [
        CNT OFFSET(0) NUMBITS(16) []
    ],
    pub INTR [
        RX_UNDER OFFSET(0) NUMBITS(1) [],
        RX_OVER OFFSET(1) NUMBITS(1) [],
        RX_FULL OFFSET(2) NUMBITS(1) [],
        TX_OVER OFFSET(3) NUMBITS(1) [],
        TX_EMPTY OFFSET(4) NUMBITS(1) [],
        RD_REQ OFFSET(5) NUMBITS(1) [],
        TX_ABRT OFFSET(6) NUMBITS(1) [],
        RX_DONE OFFSET(7) NUMBITS(1) [],
        ACTIVITY OFFSET(8) NUMBITS(1) [],
        STOP_DET OFFSET(9) NUMBITS(1) [],
        START_DET OFFSET(10) NUMBITS(1) [],
        GEN_CALL OFFSET(11) NUMBITS(1) [],
        RESTART_DET OFFSET(12) NUMBITS(1) []
    ],
    pub FIFO_TL [
        TL OFFSET(0) NUMBITS(3) []
    ],
    pub CLR [
        FLAG OFFSET(0) NUMBITS(1) []
    ],
    pub ENR [
        EN OFFSET(0) NUMBITS(1) [],
        /// Abort the current master transfer
        ABORT OFFSET(1) NUMBITS(1) []
    ],
    pub STATUS [
        ACTIVITY OFFSET(0) NUMBITS(1) [],
        /// Tx FIFO not full
        TFNF OFFSET(1) NUMBITS(1) [],
        /// Tx FIFO empty
        TFE OFFSET(2) NUMBITS(1) [],
        /// Rx FIFO not empty
        RFNE OFFSET(3) NUMBITS(1) [],
        /// Rx FIFO full
        RFF OFFSET(4) NUMBITS(1) [],
        MST_ACTIVITY OFFSET(5) NUMBITS(1) [],
        SLV_ACTIVITY OFFSET(6) NUMBITS(1) []
    ],
    pub FIFO_LEVEL [
        LEVEL OFFSET(0) NUMBITS(4) []
    ],
    pub SDA_HOLD [
        TX_HOLD OFFSET(0) NUMBITS(16) [],
        RX_HOLD OFFSET(16) NUMBITS(8) []
    ],
    pub TX_ABRT_SOURCE [
        ABRT_7B_ADDR_NOACK OFFSET(0) NUMBITS(1) [],
        ABRT_10ADDR1_NOACK OFFSET(1) NUMBITS(1) [],
        ABRT_10ADDR2_NOACK OFFSET(2) NUMBITS(1) [],
        ABRT_TXDATA_NOACK OFFSET(3) NUMBITS(1) [],
        ABRT_GCALL_NOACK OFFSET(4) NUMBITS(1) [],
        ABRT_GCALL_READ OFFSET(5) NUMBITS(1) [],
        ABRT_SBYTE_ACKDET OFFSET(7) NUMBITS(1) [],
        ABRT_SBYTE_NORSTRT OFFSET(9) NUMBITS(1) [],
        ABRT_10B_RD_NORSTRT OFFSET(10) NUMBITS(1) [],
        ABRT_MASTER_DIS OFFSET(11) NUMBITS(1) [],
        ARB_LOST OFFSET(12) NUMBITS(1) [],
        ABRT_SLVFLUSH_TXFIFO OFFSET(13) NUMBITS(1) [],
        ABRT_SLV_ARBLOST OFFSET(14) NUMBITS(1) [],
        ABRT_SLVRD_INTX OFFSET(15) NUMBITS(1) []
    ],
    pub SLV_DATA_NACK_ONLY [
        NACK OFFSET(0) NUMBITS(1) []
    ],
    pub DMA_CR [
        RDMAE OFFSET(0) NUMBITS(1) [],
        TDMAE OFFSET(1) NUMBITS(1) []
    ],
    pub SDA_SETUP [
        SETUP OFFSET(0) NUMBITS(8) []
    ],
    pub ACK_GENERAL_CALL [
        ACK_GEN_CALL OFFSET(0) NUMBITS(1) []
    ],
    pub ENABLE_STATUS [
        IC_EN OFFSET(0) NUMBITS(1) [],
        SLV_DISABLED_WHILE_BUSY OFFSET(1) NUMBITS(1) [],
        SLV_RX_DATA_LOST OFFSET(2) NUMBITS(1) []
    ],
    pub SLVMASK [
        MASK OFFSET(0) NUMBITS(10) []
    ],
    pub SLVRCVADDR [
        RCVADDR OFFSET(0) NUMBITS(10) []
    ]
];

pub const I2C1: StaticRef<I2cRegisters> =
    unsafe { StaticRef::new(I2C1_BASE as *const I2cRegisters) };

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::registers::interfaces::{Readable, Writeable};
    use crate::utilities::registers::InMemoryRegister;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<I2cRegisters>(), 0xA8);
    }

    #[test]
    fn read_command_with_stop() {
        let dr = InMemoryRegister::<u32, DATA_CMD::Register>::new(0);
        dr.write(DATA_CMD::CMD::Read + DATA_CMD::STOP::SET);
        assert_eq!(dr.get(), 0x300);
    }

    #[test]
    fn fifo_threshold_fits_depth() {
        assert_eq!(FIFO_TL::TL.mask + 1, FIFO_DEPTH);
    }

    #[test]
    fn bitfields_are_disjoint() {
        assert_bitfields!(CON {
            MASTER_MODE, SPEED, IC_10BITADDR_SLAVE, IC_10BITADDR_MASTER, RESTART_EN, SLAVE_DISABLE,
            STOP_DET_IFADDRESSED, EMPTYCTRL, RX_FIFO_FULL_HLD,
        });
        assert_bitfields!(TAR { ADDR, GC_OR_START, SPECIAL, ADDR_10BIT });
        assert_bitfields!(SAR { ADDR });
        assert_bitfields!(DATA_CMD { DAT, CMD, STOP, RESTART });
        assert_bitfields!(SCL_CNT { CNT });
        assert_bitfields!(INTR {
            RX_UNDER, RX_OVER, RX_FULL, TX_OVER, TX_EMPTY, RD_REQ, TX_ABRT, RX_DONE, ACTIVITY,
            STOP_DET, START_DET, GEN_CALL, RESTART_DET,
        });
        assert_bitfields!(FIFO_TL { TL });
        assert_bitfields!(CLR { FLAG });
        assert_bitfields!(ENR { EN, ABORT });
        assert_bitfields!(STATUS { ACTIVITY, TFNF, TFE, RFNE, RFF, MST_ACTIVITY, SLV_ACTIVITY });
        assert_bitfields!(FIFO_LEVEL { LEVEL });
        assert_bitfields!(SDA_HOLD { TX_HOLD, RX_HOLD });
        assert_bitfields!(TX_ABRT_SOURCE {
            ABRT_7B_ADDR_NOACK, ABRT_10ADDR1_NOACK, ABRT_10ADDR2_NOACK, ABRT_TXDATA_NOACK,
            ABRT_GCALL_NOACK, ABRT_GCALL_READ, ABRT_SBYTE_ACKDET, ABRT_SBYTE_NORSTRT,
            ABRT_10B_RD_NORSTRT, ABRT_MASTER_DIS, ARB_LOST, ABRT_SLVFLUSH_TXFIFO, ABRT_SLV_ARBLOST,
            ABRT_SLVRD_INTX,
        });
        assert_bitfields!(SLV_DATA_NACK_ONLY { NACK });
        assert_bitfields!(DMA_CR { RDMAE, TDMAE });
        assert_bitfields!(SDA_SETUP { SETUP });
        assert_bitfields!(ACK_GENERAL_CALL { ACK_GEN_CALL });
        assert_bitfields!(ENABLE_STATUS { IC_EN, SLV_DISABLED_WHILE_BUSY, SLV_RX_DATA_LOST });
        assert_bitfields!(SLVMASK { MASK });
        assert_bitfields!(SLVRCVADDR { RCVADDR });
    }
}
