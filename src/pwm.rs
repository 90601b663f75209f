//! # Pulse width modulation
//!
//! Four PWM pairs driving eight outputs (PWM0 to PWM7). Each pair has a period register `LEN`
//! and three compare registers: `COM0` and `COM1` set the edges of the even output, `COM2` the
//! edge of the odd output. In H-bridge mode pair 0 drives all four outputs of port 1.

use crate::generic::{field_enum, reg_spec};
use crate::{Bit, Field, Reg};

/// PWM register block
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00 - Control
    pub pwmcon0: PWMCON0,
    _reserved1: [u8; 2],
    /// 0x04 - Trip control
    pub pwmcon1: PWMCON1,
    _reserved2: [u8; 2],
    /// 0x08 - Interrupt clear
    pub pwmclri: PWMCLRI,
    _reserved3: [u8; 6],
    /// 0x10 - Output pairs 0 to 3
    pub pair: [Pair; 4],
}

/// Compare and period registers of one output pair
#[repr(C)]
pub struct Pair {
    /// 0x00 - First compare of the even output
    pub com0: COM,
    _reserved1: [u8; 2],
    /// 0x04 - Second compare of the even output
    pub com1: COM,
    _reserved2: [u8; 2],
    /// 0x08 - Compare of the odd output
    pub com2: COM,
    _reserved3: [u8; 2],
    /// 0x0C - Period
    pub len: LEN,
    _reserved4: [u8; 2],
}

/// PWMCON0 (rw) register accessor
pub type PWMCON0 = Reg<pwmcon0::PWMCON0rs>;
/// Control
pub mod pwmcon0 {
    use super::*;
    reg_spec!(PWMCON0rs: u16, rw, 0x0012);

    /// Enable all pairs
    pub const ENABLE: Bit<PWMCON0rs> = Bit::new(0);
    /// H-bridge mode
    pub const HMODE: Bit<PWMCON0rs> = Bit::new(1);
    /// Clock prescaler
    pub const PWMCMP: Field<PWMCON0rs, Pwmcmp> = Field::new(2, 3);
    /// Invert all outputs
    pub const POINV: Bit<PWMCON0rs> = Bit::new(5);
    /// Force the H-bridge outputs high
    pub const HOFF: Bit<PWMCON0rs> = Bit::new(6);
    /// Load the compare registers on the next period
    pub const LCOMP: Bit<PWMCON0rs> = Bit::new(7);
    /// H-bridge direction
    pub const DIR: Bit<PWMCON0rs> = Bit::new(8);
    /// H-bridge outputs enable
    pub const ENA: Bit<PWMCON0rs> = Bit::new(9);
    /// Interrupt enable
    pub const PWMIEN: Bit<PWMCON0rs> = Bit::new(10);
    /// Synchronise the counters on the SYNC pin
    pub const SYNC: Bit<PWMCON0rs> = Bit::new(15);

    field_enum! {
        /// Clock prescaler on UCLK
        pub enum Pwmcmp: u8 {
            Div2 = 0,
            Div4 = 1,
            Div8 = 2,
            Div16 = 3,
            Div32 = 4,
            Div64 = 5,
            Div128 = 6,
            Div256 = 7,
        }
    }
}

/// PWMCON1 (rw) register accessor
pub type PWMCON1 = Reg<pwmcon1::PWMCON1rs>;
/// Trip control
pub mod pwmcon1 {
    use super::*;
    reg_spec!(PWMCON1rs: u16, rw, 0x0000);
    /// Stop all outputs on a falling edge of PWMTRIP
    pub const TRIPEN: Bit<PWMCON1rs> = Bit::new(6);
}

/// PWMCLRI (w) register accessor
pub type PWMCLRI = Reg<pwmclri::PWMCLRIrs>;
/// Interrupt clear
pub mod pwmclri {
    use super::*;
    reg_spec!(PWMCLRIrs: u16, w);
    /// Clear the pair 0 interrupt
    pub const IRQPWM0: Bit<PWMCLRIrs> = Bit::new(0);
    /// Clear the pair 1 interrupt
    pub const IRQPWM1: Bit<PWMCLRIrs> = Bit::new(1);
    /// Clear the pair 2 interrupt
    pub const IRQPWM2: Bit<PWMCLRIrs> = Bit::new(2);
    /// Clear the pair 3 interrupt
    pub const IRQPWM3: Bit<PWMCLRIrs> = Bit::new(3);
    /// Clear the trip interrupt
    pub const TRIP: Bit<PWMCLRIrs> = Bit::new(4);

    /// Pair interrupt clear bits indexed by pair
    pub const IRQPWM: [Bit<PWMCLRIrs>; 4] = [IRQPWM0, IRQPWM1, IRQPWM2, IRQPWM3];
}

/// COM0, COM1 and COM2 (rw) register accessor
pub type COM = Reg<com::COMrs>;
/// Compare value
pub mod com {
    use super::*;
    reg_spec!(COMrs: u16, rw, 0x0000);
    /// Counter value at which the output toggles
    pub const VALUE: Field<COMrs> = Field::new(0, 16);
}

/// LEN (rw) register accessor
pub type LEN = Reg<len::LENrs>;
/// Period
pub mod len {
    use super::*;
    reg_spec!(LENrs: u16, rw, 0x0000);
    /// Counter period
    pub const VALUE: Field<LENrs> = Field::new(0, 16);
}
