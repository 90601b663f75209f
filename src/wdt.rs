//! # Watchdog timer
//!
//! The watchdog runs after reset with a timeout of about 32 seconds. It is refreshed by writing
//! [`t3clri::Key::ClrWdg`] to `T3CLRI`. Once `T3CON` has been written with the timer enabled
//! the configuration locks until the next reset ([`t3sta::LOCK`]).

use crate::generic::{field_enum, reg_spec};
use crate::{Bit, Field, Reg};

/// Watchdog register block
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00 - Load value
    pub t3ld: T3LD,
    _reserved1: [u8; 2],
    /// 0x04 - Current count
    pub t3val: T3VAL,
    _reserved2: [u8; 2],
    /// 0x08 - Control
    pub t3con: T3CON,
    _reserved3: [u8; 2],
    /// 0x0C - Refresh
    pub t3clri: T3CLRI,
    _reserved4: [u8; 10],
    /// 0x18 - Status
    pub t3sta: T3STA,
}

/// T3LD (rw) register accessor
pub type T3LD = Reg<t3ld::T3LDrs>;
/// Load value
pub mod t3ld {
    use super::*;
    reg_spec!(T3LDrs: u16, rw, 0x1000);
    /// Count reloaded on refresh
    pub const VALUE: Field<T3LDrs> = Field::new(0, 16);
}

/// T3VAL (r) register accessor
pub type T3VAL = Reg<t3val::T3VALrs>;
/// Current count
pub mod t3val {
    use super::*;
    reg_spec!(T3VALrs: u16, r, 0x1000);
    /// Counter value
    pub const VALUE: Field<T3VALrs> = Field::new(0, 16);
}

/// T3CON (rw) register accessor
pub type T3CON = Reg<t3con::T3CONrs>;
/// Control
pub mod t3con {
    use super::*;
    reg_spec!(T3CONrs: u16, rw, 0x00E9);

    /// Keep counting while the core is in hibernate
    pub const PD: Bit<T3CONrs> = Bit::new(0);
    /// Raise an interrupt on timeout instead of resetting
    pub const IRQ: Bit<T3CONrs> = Bit::new(1);
    /// Prescaler
    pub const PRE: Field<T3CONrs, Pre> = Field::new(2, 2);
    /// Timer enable
    pub const ENABLE: Bit<T3CONrs> = Bit::new(5);
    /// Timer mode
    pub const MOD: Field<T3CONrs, Mod> = Field::new(6, 1);

    field_enum! {
        /// Prescaler on the 32 kHz clock
        pub enum Pre: u8 {
            Div1 = 0,
            Div16 = 1,
            Div256 = 2,
            Div4096 = 3,
        }
    }

    field_enum! {
        /// Timer mode
        pub enum Mod: u8 {
            FreeRun = 0,
            Periodic = 1,
        }
    }
}

/// T3CLRI (w) register accessor
pub type T3CLRI = Reg<t3clri::T3CLRIrs>;
/// Refresh
pub mod t3clri {
    use super::*;
    reg_spec!(T3CLRIrs: u16, w);

    /// Refresh key
    pub const VALUE: Field<T3CLRIrs, Key> = Field::new(0, 16);

    field_enum! {
        /// Refresh key
        pub enum Key: u16 {
            /// Reloads the counter from `T3LD`
            ClrWdg = 0xCCCC,
        }
    }
}

/// T3STA (r) register accessor
pub type T3STA = Reg<t3sta::T3STArs>;
/// Status
pub mod t3sta {
    use super::*;
    reg_spec!(T3STArs: u16, r, 0x0020);
    /// Timeout interrupt pending
    pub const IRQ: Bit<T3STArs> = Bit::new(0);
    /// Refresh in progress
    pub const CLRI: Bit<T3STArs> = Bit::new(1);
    /// Load value write in progress
    pub const LD: Bit<T3STArs> = Bit::new(2);
    /// Control write in progress
    pub const CON: Bit<T3STArs> = Bit::new(3);
    /// Configuration locked
    pub const LOCK: Bit<T3STArs> = Bit::new(4);
    /// Mirror of `T3CON.PD`
    pub const PD: Bit<T3STArs> = Bit::new(5);
}
