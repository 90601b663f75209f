//! # Wake-up timer
//!
//! A 32-bit counter split over two 16-bit halves with four wake-up compare registers (A to D).
//! Field A is the only one that can be written while the timer runs, which makes it the
//! usual periodic wake-up source. Writes to `T2CON` and the compare registers cross into the
//! timer clock domain; poll [`t2sta::PDOK`] or [`t2sta::CON`] before writing again.

use crate::generic::{field_enum, reg_spec};
use crate::{Bit, Field, Reg};

/// Wake-up timer register block
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00 - Current count, low half
    pub t2val0: T2VAL0,
    _reserved1: [u8; 2],
    /// 0x04 - Current count, high half
    pub t2val1: T2VAL1,
    _reserved2: [u8; 2],
    /// 0x08 - Control
    pub t2con: T2CON,
    _reserved3: [u8; 2],
    /// 0x0C - Field A increment
    pub t2inc: T2INC,
    _reserved4: [u8; 2],
    /// 0x10 - Wake-up field B, low half
    pub t2wufb0: T2WUFB0,
    _reserved5: [u8; 2],
    /// 0x14 - Wake-up field B, high half
    pub t2wufb1: T2WUFB1,
    _reserved6: [u8; 2],
    /// 0x18 - Wake-up field C, low half
    pub t2wufc0: T2WUFC0,
    _reserved7: [u8; 2],
    /// 0x1C - Wake-up field C, high half
    pub t2wufc1: T2WUFC1,
    _reserved8: [u8; 2],
    /// 0x20 - Wake-up field D, low half
    pub t2wufd0: T2WUFD0,
    _reserved9: [u8; 2],
    /// 0x24 - Wake-up field D, high half
    pub t2wufd1: T2WUFD1,
    _reserved10: [u8; 2],
    /// 0x28 - Interrupt enable
    pub t2ien: T2IEN,
    _reserved11: [u8; 2],
    /// 0x2C - Status
    pub t2sta: T2STA,
    _reserved12: [u8; 2],
    /// 0x30 - Interrupt clear
    pub t2clri: T2CLRI,
    _reserved13: [u8; 10],
    /// 0x3C - Wake-up field A, low half
    pub t2wufa0: T2WUFA0,
    _reserved14: [u8; 2],
    /// 0x40 - Wake-up field A, high half
    pub t2wufa1: T2WUFA1,
}

/// Declares a 16-bit half of a 32-bit wake-up timer value
macro_rules! half {
    ($Alias:ident, $module:ident, $Spec:ident, $access:ident, $reset:expr, $doc:literal) => {
        #[doc = concat!(stringify!($Alias), " register accessor")]
        pub type $Alias = Reg<$module::$Spec>;
        #[doc = $doc]
        pub mod $module {
            use super::*;
            reg_spec!($Spec: u16, $access, $reset);
            /// Half of the 32-bit value
            pub const VALUE: Field<$Spec> = Field::new(0, 16);
        }
    };
}

half!(T2VAL0, t2val0, T2VAL0rs, r, 0x0000, "Current count, bits 15:0");
half!(T2VAL1, t2val1, T2VAL1rs, r, 0x0000, "Current count, bits 31:16");
half!(T2WUFB0, t2wufb0, T2WUFB0rs, rw, 0x1FFF, "Wake-up field B, bits 15:0");
half!(T2WUFB1, t2wufb1, T2WUFB1rs, rw, 0x0000, "Wake-up field B, bits 31:16");
half!(T2WUFC0, t2wufc0, T2WUFC0rs, rw, 0x2FFF, "Wake-up field C, bits 15:0");
half!(T2WUFC1, t2wufc1, T2WUFC1rs, rw, 0x0000, "Wake-up field C, bits 31:16");
half!(T2WUFD0, t2wufd0, T2WUFD0rs, rw, 0x3FFF, "Wake-up field D, bits 15:0");
half!(T2WUFD1, t2wufd1, T2WUFD1rs, rw, 0x0000, "Wake-up field D, bits 31:16");
half!(T2WUFA0, t2wufa0, T2WUFA0rs, rw, 0x1900, "Wake-up field A, bits 15:0");
half!(T2WUFA1, t2wufa1, T2WUFA1rs, rw, 0x0000, "Wake-up field A, bits 31:16");

/// T2CON (rw) register accessor
pub type T2CON = Reg<t2con::T2CONrs>;
/// Control
pub mod t2con {
    use super::*;
    reg_spec!(T2CONrs: u16, rw, 0x0040);

    /// Prescaler
    pub const PRE: Field<T2CONrs, Pre> = Field::new(0, 2);
    /// Freeze the count halves while `T2VAL0` is read
    pub const FREEZE: Bit<T2CONrs> = Bit::new(3);
    /// Timer mode
    pub const MOD: Field<T2CONrs, Mod> = Field::new(6, 1);
    /// Timer enable
    pub const ENABLE: Bit<T2CONrs> = Bit::new(7);
    /// Wake-up enable
    pub const WUEN: Bit<T2CONrs> = Bit::new(8);
    /// Clock source
    pub const CLK: Field<T2CONrs, Clk> = Field::new(9, 2);
    /// Stop field A from reloading with `T2INC` on a match
    pub const STOPINC: Bit<T2CONrs> = Bit::new(11);

    field_enum! {
        /// Prescaler
        pub enum Pre: u8 {
            /// Clock / 1
            Div1 = 0,
            /// Clock / 16
            Div16 = 1,
            /// Clock / 256
            Div256 = 2,
            /// Clock / 32768
            Div32768 = 3,
        }
    }

    field_enum! {
        /// Timer mode
        pub enum Mod: u8 {
            /// Restart from zero on a field D match
            Periodic = 0,
            /// Wrap through the full 32-bit range
            FreeRun = 1,
        }
    }

    field_enum! {
        /// Clock source
        pub enum Clk: u8 {
            /// Peripheral clock
            Pclk = 0,
            /// 32 kHz crystal
            Lfxtal = 1,
            /// 32 kHz internal oscillator
            Lfosc = 2,
            /// External clock on ECLKIN
            ExtClk = 3,
        }
    }
}

/// T2INC (rw) register accessor
pub type T2INC = Reg<t2inc::T2INCrs>;
/// Field A increment
pub mod t2inc {
    use super::*;
    reg_spec!(T2INCrs: u16, rw, 0x00C8);
    /// Added to field A after each field A match
    pub const VALUE: Field<T2INCrs> = Field::new(0, 12);
}

/// Declares the five wake-up event bits shared by `T2IEN`, `T2STA` and `T2CLRI`
macro_rules! wake_events {
    ($Spec:ident) => {
        /// Field A match
        pub const WUFA: Bit<$Spec> = Bit::new(0);
        /// Field B match
        pub const WUFB: Bit<$Spec> = Bit::new(1);
        /// Field C match
        pub const WUFC: Bit<$Spec> = Bit::new(2);
        /// Field D match
        pub const WUFD: Bit<$Spec> = Bit::new(3);
        /// Counter rollover
        pub const ROLL: Bit<$Spec> = Bit::new(4);
    };
}

/// T2IEN (rw) register accessor
pub type T2IEN = Reg<t2ien::T2IENrs>;
/// Interrupt enable
pub mod t2ien {
    use super::*;
    reg_spec!(T2IENrs: u16, rw, 0x0000);
    wake_events!(T2IENrs);
}

/// T2STA (r) register accessor
pub type T2STA = Reg<t2sta::T2STArs>;
/// Status
pub mod t2sta {
    use super::*;
    reg_spec!(T2STArs: u16, r, 0x0000);
    wake_events!(T2STArs);
    /// Count halves are frozen
    pub const FREEZE: Bit<T2STArs> = Bit::new(7);
    /// Interrupt clear has reached the timer clock domain
    pub const PDOK: Bit<T2STArs> = Bit::new(8);
    /// Control write has reached the timer clock domain
    pub const CON: Bit<T2STArs> = Bit::new(11);
}

/// T2CLRI (w) register accessor
pub type T2CLRI = Reg<t2clri::T2CLRIrs>;
/// Interrupt clear
pub mod t2clri {
    use super::*;
    reg_spec!(T2CLRIrs: u16, w);
    wake_events!(T2CLRIrs);
}
