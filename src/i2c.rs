//! # I2C
//!
//! One controller with independent master and slave halves, each with a two byte transmit and
//! receive FIFO. The master clock is `UCLK / (DIV.LOW + DIV.HIGH + 4)`.

use crate::generic::{field_enum, reg_spec};
use crate::{Bit, Field, Reg};

/// I2C register block
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00 - Master control
    pub mcon: MCON,
    _reserved1: [u8; 2],
    /// 0x04 - Master status
    pub msta: MSTA,
    _reserved2: [u8; 2],
    /// 0x08 - Master receive data
    pub mrx: MRX,
    _reserved3: [u8; 3],
    /// 0x0C - Master transmit data
    pub mtx: MTX,
    _reserved4: [u8; 3],
    /// 0x10 - Master receive count
    pub mrxcnt: MRXCNT,
    _reserved5: [u8; 2],
    /// 0x14 - Master current receive count
    pub mcrxcnt: MCRXCNT,
    _reserved6: [u8; 2],
    /// 0x18 - Master address, first byte
    pub adr0: ADR0,
    _reserved7: [u8; 3],
    /// 0x1C - Master address, second byte of a 10-bit address
    pub adr1: ADR1,
    _reserved8: [u8; 7],
    /// 0x24 - Master clock divider
    pub div: DIV,
    _reserved9: [u8; 2],
    /// 0x28 - Slave control
    pub scon: SCON,
    _reserved10: [u8; 2],
    /// 0x2C - Slave status
    pub ssta: SSTA,
    _reserved11: [u8; 2],
    /// 0x30 - Slave receive data
    pub srx: SRX,
    _reserved12: [u8; 3],
    /// 0x34 - Slave transmit data
    pub stx: STX,
    _reserved13: [u8; 3],
    /// 0x38 - Hardware general call ID
    pub alt: ALT,
    _reserved14: [u8; 3],
    /// 0x3C - Slave ID 0
    pub id0: ID,
    _reserved15: [u8; 3],
    /// 0x40 - Slave ID 1
    pub id1: ID,
    _reserved16: [u8; 3],
    /// 0x44 - Slave ID 2
    pub id2: ID,
    _reserved17: [u8; 3],
    /// 0x48 - Slave ID 3
    pub id3: ID,
    _reserved18: [u8; 3],
    /// 0x4C - FIFO status
    pub fsta: FSTA,
}

/// MCON (rw) register accessor
pub type MCON = Reg<mcon::MCONrs>;
/// Master control
pub mod mcon {
    use super::*;
    reg_spec!(MCONrs: u16, rw, 0x0000);
    /// Master enable
    pub const MAS: Bit<MCONrs> = Bit::new(0);
    /// Start back-off disable
    pub const COMPETE: Bit<MCONrs> = Bit::new(1);
    /// Internal loopback to the slave
    pub const LOOPBACK: Bit<MCONrs> = Bit::new(2);
    /// Allow the slave to stretch the clock
    pub const STRETCH: Bit<MCONrs> = Bit::new(3);
    /// Receive request interrupt enable
    pub const IENMRX: Bit<MCONrs> = Bit::new(4);
    /// Transmit request interrupt enable
    pub const IENMTX: Bit<MCONrs> = Bit::new(5);
    /// Arbitration lost interrupt enable
    pub const IENALOST: Bit<MCONrs> = Bit::new(6);
    /// Missing acknowledge interrupt enable
    pub const IENACK: Bit<MCONrs> = Bit::new(7);
    /// Transaction complete interrupt enable
    pub const IENCMP: Bit<MCONrs> = Bit::new(8);
    /// Transmit DMA request enable
    pub const MTXDMA: Bit<MCONrs> = Bit::new(10);
    /// Receive DMA request enable
    pub const MRXDMA: Bit<MCONrs> = Bit::new(11);
}

field_enum! {
    /// Fill level of a two byte FIFO
    pub enum FifoStatus: u8 {
        /// No byte queued
        Empty = 0,
        /// One byte queued
        OneByte = 2,
        /// Both bytes queued
        Full = 3,
    }
}

/// MSTA (r) register accessor
pub type MSTA = Reg<msta::MSTArs>;
/// Master status
pub mod msta {
    use super::*;
    reg_spec!(MSTArs: u16, r, 0x0000);
    /// Transmit FIFO level
    pub const TXFSTA: Field<MSTArs, FifoStatus> = Field::new(0, 2);
    /// Transmit request
    pub const TXREQ: Bit<MSTArs> = Bit::new(2);
    /// Receive request
    pub const RXREQ: Bit<MSTArs> = Bit::new(3);
    /// Address not acknowledged
    pub const NACKADDR: Bit<MSTArs> = Bit::new(4);
    /// Arbitration lost
    pub const ALOST: Bit<MSTArs> = Bit::new(5);
    /// Master busy
    pub const MBUSY: Bit<MSTArs> = Bit::new(6);
    /// Data not acknowledged
    pub const NACKDATA: Bit<MSTArs> = Bit::new(7);
    /// Transaction complete
    pub const TCOMP: Bit<MSTArs> = Bit::new(8);
    /// Receive overflow
    pub const RXOF: Bit<MSTArs> = Bit::new(9);
    /// Bus busy
    pub const LINEBUSY: Bit<MSTArs> = Bit::new(10);
    /// Stop driven
    pub const MSTOP: Bit<MSTArs> = Bit::new(11);
    /// Transmit underrun
    pub const TXUR: Bit<MSTArs> = Bit::new(12);
}

/// MRX (r) register accessor
pub type MRX = Reg<mrx::MRXrs>;
/// Master receive data
pub mod mrx {
    use super::*;
    reg_spec!(MRXrs: u8, r, 0x00);
}

/// MTX (rw) register accessor
pub type MTX = Reg<mtx::MTXrs>;
/// Master transmit data
pub mod mtx {
    use super::*;
    reg_spec!(MTXrs: u8, rw, 0x00);
}

/// MRXCNT (rw) register accessor
pub type MRXCNT = Reg<mrxcnt::MRXCNTrs>;
/// Master receive count
pub mod mrxcnt {
    use super::*;
    reg_spec!(MRXCNTrs: u16, rw, 0x0000);
    /// Bytes to receive, minus one
    pub const COUNT: Field<MRXCNTrs> = Field::new(0, 8);
    /// Receive more than 256 bytes
    pub const EXTEND: Bit<MRXCNTrs> = Bit::new(8);
}

/// MCRXCNT (r) register accessor
pub type MCRXCNT = Reg<mcrxcnt::MCRXCNTrs>;
/// Master current receive count
pub mod mcrxcnt {
    use super::*;
    reg_spec!(MCRXCNTrs: u16, r, 0x0000);
    /// Bytes received so far
    pub const COUNT: Field<MCRXCNTrs> = Field::new(0, 8);
}

/// ADR0 (rw) register accessor
pub type ADR0 = Reg<adr0::ADR0rs>;
/// Master address, first byte
pub mod adr0 {
    use super::*;
    reg_spec!(ADR0rs: u8, rw, 0x00);
    /// Transfer direction
    pub const DIR: Field<ADR0rs, Dir> = Field::new(0, 1);
    /// 7-bit slave address
    pub const ADR: Field<ADR0rs> = Field::new(1, 7);

    field_enum! {
        /// Transfer direction
        pub enum Dir: u8 {
            Write = 0,
            Read = 1,
        }
    }
}

/// ADR1 (rw) register accessor
pub type ADR1 = Reg<adr1::ADR1rs>;
/// Low byte of a 10-bit slave address
pub mod adr1 {
    use super::*;
    reg_spec!(ADR1rs: u8, rw, 0x00);
}

/// DIV (rw) register accessor
pub type DIV = Reg<div::DIVrs>;
/// Master clock divider
pub mod div {
    use super::*;
    reg_spec!(DIVrs: u16, rw, 0x1F1F);
    /// SCL low period
    pub const LOW: Field<DIVrs> = Field::new(0, 8);
    /// SCL high period
    pub const HIGH: Field<DIVrs> = Field::new(8, 8);
}

/// SCON (rw) register accessor
pub type SCON = Reg<scon::SCONrs>;
/// Slave control
pub mod scon {
    use super::*;
    reg_spec!(SCONrs: u16, rw, 0x0000);
    /// Slave enable
    pub const SLV: Bit<SCONrs> = Bit::new(0);
    /// 10-bit addressing
    pub const ADR10EN: Bit<SCONrs> = Bit::new(1);
    /// Clear the general call status
    pub const GCSBCLR: Bit<SCONrs> = Bit::new(2);
    /// Hardware general call enable
    pub const HGCEN: Bit<SCONrs> = Bit::new(3);
    /// General call enable
    pub const GCEN: Bit<SCONrs> = Bit::new(4);
    /// Raise the transmit request one bit early
    pub const EARLYTXR: Bit<SCONrs> = Bit::new(5);
    /// Do not acknowledge the next byte
    pub const NACK: Bit<SCONrs> = Bit::new(7);
    /// Stop condition interrupt enable
    pub const IENSTOP: Bit<SCONrs> = Bit::new(8);
    /// Receive interrupt enable
    pub const IENSRX: Bit<SCONrs> = Bit::new(9);
    /// Transmit interrupt enable
    pub const IENSTX: Bit<SCONrs> = Bit::new(10);
    /// Transmit DMA request enable
    pub const STXDMA: Bit<SCONrs> = Bit::new(11);
    /// Receive DMA request enable
    pub const SRXDMA: Bit<SCONrs> = Bit::new(12);
}

/// SSTA (r) register accessor
pub type SSTA = Reg<ssta::SSTArs>;
/// Slave status
pub mod ssta {
    use super::*;
    reg_spec!(SSTArs: u16, r, 0x0001);
    /// Transmit FIFO empty while addressed for reading
    pub const STXFSEREQ: Bit<SSTArs> = Bit::new(0);
    /// Transmit underrun
    pub const STXUR: Bit<SSTArs> = Bit::new(1);
    /// Transmit request
    pub const STXREQ: Bit<SSTArs> = Bit::new(2);
    /// Receive request
    pub const SRXREQ: Bit<SSTArs> = Bit::new(3);
    /// Receive overflow
    pub const SRXOF: Bit<SSTArs> = Bit::new(4);
    /// Acknowledge not received
    pub const NOACK: Bit<SSTArs> = Bit::new(5);
    /// Slave busy
    pub const SBUSY: Bit<SSTArs> = Bit::new(6);
    /// General call received
    pub const GCINT: Bit<SSTArs> = Bit::new(7);
    /// General call ID
    pub const GCID: Field<SSTArs> = Field::new(8, 2);
    /// Stop condition after being addressed
    pub const STOP: Bit<SSTArs> = Bit::new(10);
    /// Which of ID0 to ID3 matched
    pub const IDMAT: Field<SSTArs> = Field::new(11, 2);
    /// Repeated start
    pub const REPSTART: Bit<SSTArs> = Bit::new(13);
    /// Start condition and address match
    pub const START: Bit<SSTArs> = Bit::new(14);
}

/// SRX (r) register accessor
pub type SRX = Reg<srx::SRXrs>;
/// Slave receive data
pub mod srx {
    use super::*;
    reg_spec!(SRXrs: u8, r, 0x00);
}

/// STX (rw) register accessor
pub type STX = Reg<stx::STXrs>;
/// Slave transmit data
pub mod stx {
    use super::*;
    reg_spec!(STXrs: u8, rw, 0x00);
}

/// ALT (rw) register accessor
pub type ALT = Reg<alt::ALTrs>;
/// Hardware general call ID
pub mod alt {
    use super::*;
    reg_spec!(ALTrs: u8, rw, 0x00);
}

/// ID0 to ID3 (rw) register accessor
pub type ID = Reg<id::IDrs>;
/// Slave address
pub mod id {
    use super::*;
    reg_spec!(IDrs: u8, rw, 0x00);
}

/// FSTA (rw) register accessor
pub type FSTA = Reg<fsta::FSTArs>;
/// FIFO status
pub mod fsta {
    use super::*;
    reg_spec!(FSTArs: u16, rw, 0x0000);
    /// Slave transmit FIFO level
    pub const SFSTA: Field<FSTArs, FifoStatus> = Field::new(0, 2);
    /// Master transmit FIFO level
    pub const MFSTA: Field<FSTArs, FifoStatus> = Field::new(2, 2);
    /// Flush the slave transmit FIFO
    pub const SFLUSH: Bit<FSTArs> = Bit::new(8);
    /// Flush the master transmit FIFO
    pub const MFLUSH: Bit<FSTArs> = Bit::new(9);
}
