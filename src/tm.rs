//! # General purpose timers
//!
//! Timer0 and Timer1 share this 16-bit register block. Each timer counts up or down from the
//! load value, with a selectable clock source and prescaler, and can capture its count on one of
//! sixteen events.

use crate::generic::{field_enum, reg_spec};
use crate::{Bit, Field, Reg};

/// Timer register block
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00 - Load value
    pub ld: LD,
    _reserved1: [u8; 2],
    /// 0x04 - Current count
    pub val: VAL,
    _reserved2: [u8; 2],
    /// 0x08 - Control
    pub con: CON,
    _reserved3: [u8; 2],
    /// 0x0C - Interrupt clear
    pub clri: CLRI,
    _reserved4: [u8; 2],
    /// 0x10 - Capture
    pub cap: CAP,
    _reserved5: [u8; 10],
    /// 0x1C - Status
    pub sta: STA,
}

/// LD (rw) register accessor
pub type LD = Reg<ld::LDrs>;
/// Load value
pub mod ld {
    use super::*;
    reg_spec!(LDrs: u16, rw, 0x0000);
    /// Value reloaded into the counter on timeout
    pub const VALUE: Field<LDrs> = Field::new(0, 16);
}

/// VAL (r) register accessor
pub type VAL = Reg<val::VALrs>;
/// Current count
pub mod val {
    use super::*;
    reg_spec!(VALrs: u16, r, 0x0000);
    /// Current counter value
    pub const VALUE: Field<VALrs> = Field::new(0, 16);
}

/// CON (rw) register accessor
pub type CON = Reg<con::CONrs>;
/// Control
pub mod con {
    use super::*;
    reg_spec!(CONrs: u16, rw, 0x000A);

    /// Prescaler
    pub const PRE: Field<CONrs, Pre> = Field::new(0, 2);
    /// Count up
    pub const UP: Bit<CONrs> = Bit::new(2);
    /// Timer mode
    pub const MOD: Field<CONrs, Mod> = Field::new(3, 1);
    /// Timer enable
    pub const ENABLE: Bit<CONrs> = Bit::new(4);
    /// Clock source
    pub const CLK: Field<CONrs, Clk> = Field::new(5, 2);
    /// Reload the counter when the interrupt is cleared
    pub const RLD: Bit<CONrs> = Bit::new(7);
    /// Capture event select
    pub const EVENT: Field<CONrs> = Field::new(8, 4);
    /// Capture event enable
    pub const EVENTEN: Bit<CONrs> = Bit::new(12);

    field_enum! {
        /// Prescaler
        pub enum Pre: u8 {
            /// Source clock / 1 (/4 when the clock source is UCLK)
            Div1 = 0,
            /// Source clock / 16
            Div16 = 1,
            /// Source clock / 256
            Div256 = 2,
            /// Source clock / 32768
            Div32768 = 3,
        }
    }

    field_enum! {
        /// Timer mode
        pub enum Mod: u8 {
            /// Count through the full 16-bit range
            FreeRun = 0,
            /// Count from the load value
            Periodic = 1,
        }
    }

    field_enum! {
        /// Clock source
        pub enum Clk: u8 {
            /// Undivided system clock
            Uclk = 0,
            /// Peripheral clock
            Pclk = 1,
            /// 32 kHz internal oscillator
            Lfosc = 2,
            /// External clock on ECLKIN
            ExtClk = 3,
        }
    }
}

/// CLRI (w) register accessor
pub type CLRI = Reg<clri::CLRIrs>;
/// Interrupt clear
pub mod clri {
    use super::*;
    reg_spec!(CLRIrs: u16, w);
    /// Clear the timeout interrupt
    pub const TMOUT: Bit<CLRIrs> = Bit::new(0);
    /// Clear the capture interrupt
    pub const CAP: Bit<CLRIrs> = Bit::new(1);
}

/// CAP (r) register accessor
pub type CAP = Reg<cap::CAPrs>;
/// Capture
pub mod cap {
    use super::*;
    reg_spec!(CAPrs: u16, r, 0x0000);
    /// Counter value latched on the capture event
    pub const VALUE: Field<CAPrs> = Field::new(0, 16);
}

/// STA (r) register accessor
pub type STA = Reg<sta::STArs>;
/// Status
pub mod sta {
    use super::*;
    reg_spec!(STArs: u16, r, 0x0000);
    /// Timeout event occurred
    pub const TMOUT: Bit<STArs> = Bit::new(0);
    /// Capture event pending
    pub const CAP: Bit<STArs> = Bit::new(1);
    /// Clock domain synchronisation in progress
    pub const BUSY: Bit<STArs> = Bit::new(6);
    /// Control register write has reached the timer clock domain
    pub const PDOK: Bit<STArs> = Bit::new(7);
    /// Counter reset in progress
    pub const CNTRST: Bit<STArs> = Bit::new(8);
}
