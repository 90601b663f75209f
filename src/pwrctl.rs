//! # Power control
//!
//! The power mode only changes when `PWRKEY` is written with [`pwrkey::Key::Key1`] immediately
//! followed by [`pwrkey::Key::Key2`], then `PWRMOD` is written. The core enters the selected mode
//! on the next `WFI` with `SLEEPDEEP` set.

use crate::generic::{field_enum, reg_spec};
use crate::{Bit, Field, Reg};

/// Power control register block
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00 - Power mode
    pub pwrmod: PWRMOD,
    _reserved1: [u8; 2],
    /// 0x04 - Key protection for PWRMOD
    pub pwrkey: PWRKEY,
}

/// PWRMOD (rw) register accessor
pub type PWRMOD = Reg<pwrmod::PWRMODrs>;
/// Power mode
pub mod pwrmod {
    use super::*;
    reg_spec!(PWRMODrs: u16, rw, 0x0000);

    /// Low power mode entered on the next deep sleep
    pub const MOD: Field<PWRMODrs, Mod> = Field::new(0, 3);
    /// Wake-up interrupt controller acknowledge
    pub const WICENACK: Bit<PWRMODrs> = Bit::new(3);

    field_enum! {
        /// Power mode
        pub enum Mod: u8 {
            /// Everything running
            Active = 0,
            /// Core clock gated, peripherals clocked as selected in CLKPD
            Flexi = 1,
            /// Only the wake-up timer and SRAM retention powered
            Hibernate = 2,
            /// Only the external interrupts can wake the part
            Shutdown = 3,
        }
    }
}

/// PWRKEY (w) register accessor
pub type PWRKEY = Reg<pwrkey::PWRKEYrs>;
/// Key protection for PWRMOD
pub mod pwrkey {
    use super::*;
    reg_spec!(PWRKEYrs: u16, w);

    /// Key value
    pub const VALUE: Field<PWRKEYrs, Key> = Field::new(0, 16);

    field_enum! {
        /// Unlock sequence
        pub enum Key: u16 {
            /// First key
            Key1 = 0x4859,
            /// Second key
            Key2 = 0xF27B,
        }
    }
}
