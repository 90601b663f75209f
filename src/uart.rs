//! # UART
//!
//! A 16450-compatible UART. The baud rate is
//! `UCLK / (16 * 2 * COMDIV * (DIVM + DIVN / 2048))` when the fractional divider in `COMFBR`
//! is enabled. The transmit holding and receive buffer registers share offset 0x00; they are
//! reached through [`RegisterBlock::comtx`] and [`RegisterBlock::comrx`].

use vcell::VolatileCell;

use crate::generic::{field_enum, reg_spec};
use crate::{Bit, Field, Reg};

/// UART register block
#[repr(C)]
pub struct RegisterBlock {
    // Backing cell of `COMTX` and `COMRX`
    pub(crate) comtx_comrx: VolatileCell<u8>,
    _reserved0: [u8; 3],
    /// 0x04 - Interrupt enable
    pub comien: COMIEN,
    _reserved1: [u8; 3],
    /// 0x08 - Interrupt identification
    pub comiir: COMIIR,
    _reserved2: [u8; 3],
    /// 0x0C - Line control
    pub comlcr: COMLCR,
    _reserved3: [u8; 3],
    /// 0x10 - Modem control
    pub commcr: COMMCR,
    _reserved4: [u8; 3],
    /// 0x14 - Line status
    pub comlsr: COMLSR,
    _reserved5: [u8; 3],
    /// 0x18 - Modem status
    pub commsr: COMMSR,
    _reserved6: [u8; 11],
    /// 0x24 - Fractional baud rate divider
    pub comfbr: COMFBR,
    _reserved7: [u8; 2],
    /// 0x28 - Baud rate divider
    pub comdiv: COMDIV,
    _reserved8: [u8; 6],
    /// 0x30 - Enable
    pub comcon: COMCON,
}

impl RegisterBlock {
    /// 0x00 - Transmit holding register
    #[inline(always)]
    pub const fn comtx(&self) -> &COMTX {
        unsafe { &*(self as *const Self).cast::<u8>().add(0).cast() }
    }

    /// 0x00 - Receive buffer register
    #[inline(always)]
    pub const fn comrx(&self) -> &COMRX {
        unsafe { &*(self as *const Self).cast::<u8>().add(0).cast() }
    }
}

/// COMTX (w) register accessor
pub type COMTX = Reg<comtx::COMTXrs>;
/// Transmit holding register
pub mod comtx {
    use super::*;
    reg_spec!(COMTXrs: u8, w);
}

/// COMRX (r) register accessor
pub type COMRX = Reg<comrx::COMRXrs>;
/// Receive buffer register
pub mod comrx {
    use super::*;
    reg_spec!(COMRXrs: u8, r, 0x00);
}

/// COMIEN (rw) register accessor
pub type COMIEN = Reg<comien::COMIENrs>;
/// Interrupt enable
pub mod comien {
    use super::*;
    reg_spec!(COMIENrs: u8, rw, 0x00);
    /// Receive buffer full interrupt
    pub const ERBFI: Bit<COMIENrs> = Bit::new(0);
    /// Transmit buffer empty interrupt
    pub const ETBEI: Bit<COMIENrs> = Bit::new(1);
    /// Receive line status interrupt
    pub const ELSI: Bit<COMIENrs> = Bit::new(2);
    /// Modem status interrupt
    pub const EDSSI: Bit<COMIENrs> = Bit::new(3);
    /// Transmit DMA request
    pub const EDMAT: Bit<COMIENrs> = Bit::new(4);
    /// Receive DMA request
    pub const EDMAR: Bit<COMIENrs> = Bit::new(5);
}

/// COMIIR (r) register accessor
pub type COMIIR = Reg<comiir::COMIIRrs>;
/// Interrupt identification
pub mod comiir {
    use super::*;
    reg_spec!(COMIIRrs: u8, r, 0x01);
    /// No interrupt pending
    pub const NINT: Bit<COMIIRrs> = Bit::new(0);
    /// Highest priority pending interrupt
    pub const STA: Field<COMIIRrs, Sta> = Field::new(1, 2);

    field_enum! {
        /// Interrupt source
        pub enum Sta: u8 {
            /// Modem status, cleared by reading `COMMSR`
            ModemStatus = 0,
            /// Transmit buffer empty, cleared by writing `COMTX` or reading `COMIIR`
            TxBufEmpty = 1,
            /// Receive buffer full, cleared by reading `COMRX`
            RxBufFull = 2,
            /// Receive line status, cleared by reading `COMLSR`
            RxLineStatus = 3,
        }
    }
}

/// COMLCR (rw) register accessor
pub type COMLCR = Reg<comlcr::COMLCRrs>;
/// Line control
pub mod comlcr {
    use super::*;
    reg_spec!(COMLCRrs: u8, rw, 0x00);
    /// Word length
    pub const WLS: Field<COMLCRrs, Wls> = Field::new(0, 2);
    /// Two stop bits (1.5 with five data bits)
    pub const STOP: Bit<COMLCRrs> = Bit::new(2);
    /// Parity enable
    pub const PEN: Bit<COMLCRrs> = Bit::new(3);
    /// Even parity
    pub const EPS: Bit<COMLCRrs> = Bit::new(4);
    /// Stick parity
    pub const SP: Bit<COMLCRrs> = Bit::new(5);
    /// Force TxD low
    pub const BRK: Bit<COMLCRrs> = Bit::new(6);

    field_enum! {
        /// Word length
        pub enum Wls: u8 {
            Bits5 = 0,
            Bits6 = 1,
            Bits7 = 2,
            Bits8 = 3,
        }
    }
}

/// COMMCR (rw) register accessor
pub type COMMCR = Reg<commcr::COMMCRrs>;
/// Modem control
pub mod commcr {
    use super::*;
    reg_spec!(COMMCRrs: u8, rw, 0x00);
    /// Data terminal ready
    pub const DTR: Bit<COMMCRrs> = Bit::new(0);
    /// Request to send
    pub const RTS: Bit<COMMCRrs> = Bit::new(1);
    /// Loopback mode
    pub const LOOPBACK: Bit<COMMCRrs> = Bit::new(4);
}

/// COMLSR (r) register accessor
pub type COMLSR = Reg<comlsr::COMLSRrs>;
/// Line status
pub mod comlsr {
    use super::*;
    reg_spec!(COMLSRrs: u8, r, 0x60);
    /// Data ready
    pub const DR: Bit<COMLSRrs> = Bit::new(0);
    /// Overrun error
    pub const OE: Bit<COMLSRrs> = Bit::new(1);
    /// Parity error
    pub const PE: Bit<COMLSRrs> = Bit::new(2);
    /// Framing error
    pub const FE: Bit<COMLSRrs> = Bit::new(3);
    /// Break indicator
    pub const BI: Bit<COMLSRrs> = Bit::new(4);
    /// Transmit holding register empty
    pub const THRE: Bit<COMLSRrs> = Bit::new(5);
    /// Transmitter empty
    pub const TEMT: Bit<COMLSRrs> = Bit::new(6);
}

/// COMMSR (r) register accessor
pub type COMMSR = Reg<commsr::COMMSRrs>;
/// Modem status
pub mod commsr {
    use super::*;
    reg_spec!(COMMSRrs: u8, r, 0x00);
    /// CTS changed
    pub const DCTS: Bit<COMMSRrs> = Bit::new(0);
    /// DSR changed
    pub const DDSR: Bit<COMMSRrs> = Bit::new(1);
    /// RI trailing edge
    pub const TERI: Bit<COMMSRrs> = Bit::new(2);
    /// DCD changed
    pub const DDCD: Bit<COMMSRrs> = Bit::new(3);
    /// Clear to send
    pub const CTS: Bit<COMMSRrs> = Bit::new(4);
    /// Data set ready
    pub const DSR: Bit<COMMSRrs> = Bit::new(5);
    /// Ring indicator
    pub const RI: Bit<COMMSRrs> = Bit::new(6);
    /// Data carrier detect
    pub const DCD: Bit<COMMSRrs> = Bit::new(7);
}

/// COMFBR (rw) register accessor
pub type COMFBR = Reg<comfbr::COMFBRrs>;
/// Fractional baud rate divider
pub mod comfbr {
    use super::*;
    reg_spec!(COMFBRrs: u16, rw, 0x0000);
    /// Fractional part N
    pub const DIVN: Field<COMFBRrs> = Field::new(0, 11);
    /// Integer part M
    pub const DIVM: Field<COMFBRrs> = Field::new(11, 2);
    /// Fractional divider enable
    pub const FBEN: Bit<COMFBRrs> = Bit::new(15);
}

/// COMDIV (rw) register accessor
pub type COMDIV = Reg<comdiv::COMDIVrs>;
/// Baud rate divider
pub mod comdiv {
    use super::*;
    reg_spec!(COMDIVrs: u16, rw, 0x0000);
    /// Divider
    pub const VALUE: Field<COMDIVrs> = Field::new(0, 16);
}

/// COMCON (rw) register accessor
pub type COMCON = Reg<comcon::COMCONrs>;
/// Enable
pub mod comcon {
    use super::*;
    reg_spec!(COMCONrs: u8, rw, 0x00);
    /// Disable the UART clock
    pub const DISABLE: Bit<COMCONrs> = Bit::new(0);
}
