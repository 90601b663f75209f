//! # Serial peripheral interface
//!
//! SPI0 and SPI1 share this register block. SPI0 talks to the on-chip radio over port 2.
//! Each controller has a four byte transmit FIFO and a four byte receive FIFO. In master mode
//! the serial clock is `UCLK / (2 * (1 + DIV))`.

use crate::generic::{field_enum, reg_spec};
use crate::{Bit, Field, Reg};

/// SPI register block
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00 - Status
    pub spista: SPISTA,
    _reserved1: [u8; 2],
    /// 0x04 - Receive data
    pub spirx: SPIRX,
    _reserved2: [u8; 3],
    /// 0x08 - Transmit data
    pub spitx: SPITX,
    _reserved3: [u8; 3],
    /// 0x0C - Baud rate divider
    pub spidiv: SPIDIV,
    _reserved4: [u8; 2],
    /// 0x10 - Configuration
    pub spicon: SPICON,
    _reserved5: [u8; 2],
    /// 0x14 - DMA and interrupt control
    pub spidma: SPIDMA,
    _reserved6: [u8; 2],
    /// 0x18 - Receive byte count
    pub spicnt: SPICNT,
}

field_enum! {
    /// Number of bytes queued in a four byte FIFO
    pub enum FifoStatus: u8 {
        Empty = 0,
        OneByte = 1,
        TwoBytes = 2,
        ThreeBytes = 3,
        FourBytes = 4,
    }
}

/// SPISTA (r) register accessor
pub type SPISTA = Reg<spista::SPISTArs>;
/// Status
pub mod spista {
    use super::*;
    reg_spec!(SPISTArs: u16, r, 0x0000);
    /// Interrupt pending
    pub const IRQ: Bit<SPISTArs> = Bit::new(0);
    /// Transmit FIFO level
    pub const TXFSTA: Field<SPISTArs, FifoStatus> = Field::new(1, 3);
    /// Transmit underrun
    pub const TXUR: Bit<SPISTArs> = Bit::new(4);
    /// Transmit interrupt pending
    pub const TX: Bit<SPISTArs> = Bit::new(5);
    /// Receive interrupt pending
    pub const RX: Bit<SPISTArs> = Bit::new(6);
    /// Receive overflow
    pub const RXOF: Bit<SPISTArs> = Bit::new(7);
    /// Receive FIFO level
    pub const RXFSTA: Field<SPISTArs, FifoStatus> = Field::new(8, 3);
    /// A read of the receive FIFO is pending
    pub const RXS: Bit<SPISTArs> = Bit::new(11);
    /// Chip select error in slave mode
    pub const CSERR: Bit<SPISTArs> = Bit::new(12);
}

/// SPIRX (r) register accessor
pub type SPIRX = Reg<spirx::SPIRXrs>;
/// Receive data
pub mod spirx {
    use super::*;
    reg_spec!(SPIRXrs: u8, r, 0x00);
}

/// SPITX (w) register accessor
pub type SPITX = Reg<spitx::SPITXrs>;
/// Transmit data
pub mod spitx {
    use super::*;
    reg_spec!(SPITXrs: u8, w);
}

/// SPIDIV (rw) register accessor
pub type SPIDIV = Reg<spidiv::SPIDIVrs>;
/// Baud rate divider
pub mod spidiv {
    use super::*;
    reg_spec!(SPIDIVrs: u16, rw, 0x0000);
    /// Clock divider
    pub const DIV: Field<SPIDIVrs> = Field::new(0, 6);
    /// High frequency mode
    pub const HFM: Bit<SPIDIVrs> = Bit::new(6);
}

/// SPICON (rw) register accessor
pub type SPICON = Reg<spicon::SPICONrs>;
/// Configuration
pub mod spicon {
    use super::*;
    reg_spec!(SPICONrs: u16, rw, 0x0000);
    /// Controller enable
    pub const ENABLE: Bit<SPICONrs> = Bit::new(0);
    /// Master mode
    pub const MASEN: Bit<SPICONrs> = Bit::new(1);
    /// Sample on the trailing clock edge
    pub const CPHA: Bit<SPICONrs> = Bit::new(2);
    /// Clock idles high
    pub const CPOL: Bit<SPICONrs> = Bit::new(3);
    /// Open-drain outputs
    pub const WOM: Bit<SPICONrs> = Bit::new(4);
    /// Least significant bit first
    pub const LSB: Bit<SPICONrs> = Bit::new(5);
    /// Start a transfer on a transmit FIFO write instead of a receive FIFO read
    pub const TIM: Bit<SPICONrs> = Bit::new(6);
    /// Transmit zeroes on underrun
    pub const ZEN: Bit<SPICONrs> = Bit::new(7);
    /// Overwrite the receive FIFO on overflow
    pub const RXOF: Bit<SPICONrs> = Bit::new(8);
    /// Slave MISO output enable
    pub const OEN: Bit<SPICONrs> = Bit::new(9);
    /// Connect MISO to MOSI internally
    pub const LOOPBACK: Bit<SPICONrs> = Bit::new(10);
    /// Continuous transfer while the FIFO holds data
    pub const CON: Bit<SPICONrs> = Bit::new(11);
    /// Flush the receive FIFO
    pub const RFLUSH: Bit<SPICONrs> = Bit::new(12);
    /// Flush the transmit FIFO
    pub const TFLUSH: Bit<SPICONrs> = Bit::new(13);
    /// FIFO interrupt level
    pub const MOD: Field<SPICONrs, Mod> = Field::new(14, 2);

    field_enum! {
        /// Number of bytes transferred before an interrupt
        pub enum Mod: u8 {
            Tx1Rx1 = 0,
            Tx2Rx2 = 1,
            Tx3Rx3 = 2,
            Tx4Rx4 = 3,
        }
    }
}

/// SPIDMA (rw) register accessor
pub type SPIDMA = Reg<spidma::SPIDMArs>;
/// DMA and interrupt control
pub mod spidma {
    use super::*;
    reg_spec!(SPIDMArs: u16, rw, 0x0000);
    /// DMA transfer enable
    pub const ENABLE: Bit<SPIDMArs> = Bit::new(0);
    /// Transmit DMA request enable
    pub const IENTXDMA: Bit<SPIDMArs> = Bit::new(1);
    /// Receive DMA request enable
    pub const IENRXDMA: Bit<SPIDMArs> = Bit::new(2);
}

/// SPICNT (r) register accessor
pub type SPICNT = Reg<spicnt::SPICNTrs>;
/// Receive byte count
pub mod spicnt {
    use super::*;
    reg_spec!(SPICNTrs: u16, r, 0x0000);
    /// Bytes received since the last read
    pub const VALUE: Field<SPICNTrs> = Field::new(0, 8);
}
