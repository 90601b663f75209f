//! # External interrupt configuration
//!
//! Nine external interrupt lines, IRQ0 to IRQ8. Each line has a 4-bit slot in one of the
//! `EIxCFG` registers: a 3-bit trigger mode and an enable bit. IRQ8 is wired to the radio.

use crate::generic::{field_enum, reg_spec};
use crate::{Bit, Field, Reg, W};

/// External interrupt register block
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00 - IRQ0 to IRQ3 configuration
    pub ei0cfg: EI0CFG,
    _reserved1: [u8; 2],
    /// 0x04 - IRQ4 to IRQ7 configuration
    pub ei1cfg: EI1CFG,
    _reserved2: [u8; 2],
    /// 0x08 - IRQ8 configuration
    pub ei2cfg: EI2CFG,
    _reserved3: [u8; 6],
    /// 0x10 - Clear pending external interrupts
    pub eiclr: EICLR,
    _reserved4: [u8; 2],
    /// 0x14 - Clear the NMI
    pub nmiclr: NMICLR,
}

field_enum! {
    /// Trigger mode of an external interrupt line
    pub enum Mode: u8 {
        /// Rising edge
        Rise = 0,
        /// Falling edge
        Fall = 1,
        /// Either edge
        RiseOrFall = 2,
        /// High level
        HighLevel = 3,
        /// Low level
        LowLevel = 4,
    }
}

/// EI0CFG (rw) register accessor
pub type EI0CFG = Reg<ei0cfg::EI0CFGrs>;
/// IRQ0 to IRQ3 configuration
pub mod ei0cfg {
    use super::*;
    reg_spec!(EI0CFGrs: u16, rw, 0x0000);
    /// IRQ0 trigger mode
    pub const IRQ0MDE: Field<EI0CFGrs, Mode> = Field::new(0, 3);
    /// IRQ0 enable
    pub const IRQ0EN: Bit<EI0CFGrs> = Bit::new(3);
    /// IRQ1 trigger mode
    pub const IRQ1MDE: Field<EI0CFGrs, Mode> = Field::new(4, 3);
    /// IRQ1 enable
    pub const IRQ1EN: Bit<EI0CFGrs> = Bit::new(7);
    /// IRQ2 trigger mode
    pub const IRQ2MDE: Field<EI0CFGrs, Mode> = Field::new(8, 3);
    /// IRQ2 enable
    pub const IRQ2EN: Bit<EI0CFGrs> = Bit::new(11);
    /// IRQ3 trigger mode
    pub const IRQ3MDE: Field<EI0CFGrs, Mode> = Field::new(12, 3);
    /// IRQ3 enable
    pub const IRQ3EN: Bit<EI0CFGrs> = Bit::new(15);
}

/// EI1CFG (rw) register accessor
pub type EI1CFG = Reg<ei1cfg::EI1CFGrs>;
/// IRQ4 to IRQ7 configuration
pub mod ei1cfg {
    use super::*;
    reg_spec!(EI1CFGrs: u16, rw, 0x0000);
    /// IRQ4 trigger mode
    pub const IRQ4MDE: Field<EI1CFGrs, Mode> = Field::new(0, 3);
    /// IRQ4 enable
    pub const IRQ4EN: Bit<EI1CFGrs> = Bit::new(3);
    /// IRQ5 trigger mode
    pub const IRQ5MDE: Field<EI1CFGrs, Mode> = Field::new(4, 3);
    /// IRQ5 enable
    pub const IRQ5EN: Bit<EI1CFGrs> = Bit::new(7);
    /// IRQ6 trigger mode
    pub const IRQ6MDE: Field<EI1CFGrs, Mode> = Field::new(8, 3);
    /// IRQ6 enable
    pub const IRQ6EN: Bit<EI1CFGrs> = Bit::new(11);
    /// IRQ7 trigger mode
    pub const IRQ7MDE: Field<EI1CFGrs, Mode> = Field::new(12, 3);
    /// IRQ7 enable
    pub const IRQ7EN: Bit<EI1CFGrs> = Bit::new(15);
}

/// EI2CFG (rw) register accessor
pub type EI2CFG = Reg<ei2cfg::EI2CFGrs>;
/// IRQ8 configuration
pub mod ei2cfg {
    use super::*;
    reg_spec!(EI2CFGrs: u16, rw, 0x0000);
    /// IRQ8 trigger mode
    pub const IRQ8MDE: Field<EI2CFGrs, Mode> = Field::new(0, 3);
    /// IRQ8 enable
    pub const IRQ8EN: Bit<EI2CFGrs> = Bit::new(3);
}

bitflags::bitflags! {
    /// External interrupt lines
    pub struct Lines: u16 {
        const IRQ0 = 1 << 0;
        const IRQ1 = 1 << 1;
        const IRQ2 = 1 << 2;
        const IRQ3 = 1 << 3;
        const IRQ4 = 1 << 4;
        const IRQ5 = 1 << 5;
        const IRQ6 = 1 << 6;
        const IRQ7 = 1 << 7;
        const IRQ8 = 1 << 8;
    }
}

/// EICLR (w) register accessor
pub type EICLR = Reg<eiclr::EICLRrs>;
/// Clear pending external interrupts, one bit per line
pub mod eiclr {
    use super::*;
    reg_spec!(EICLRrs: u16, w);
    /// Clear IRQ0
    pub const IRQ0: Bit<EICLRrs> = Bit::new(0);
    /// Clear IRQ1
    pub const IRQ1: Bit<EICLRrs> = Bit::new(1);
    /// Clear IRQ2
    pub const IRQ2: Bit<EICLRrs> = Bit::new(2);
    /// Clear IRQ3
    pub const IRQ3: Bit<EICLRrs> = Bit::new(3);
    /// Clear IRQ4
    pub const IRQ4: Bit<EICLRrs> = Bit::new(4);
    /// Clear IRQ5
    pub const IRQ5: Bit<EICLRrs> = Bit::new(5);
    /// Clear IRQ6
    pub const IRQ6: Bit<EICLRrs> = Bit::new(6);
    /// Clear IRQ7
    pub const IRQ7: Bit<EICLRrs> = Bit::new(7);
    /// Clear IRQ8
    pub const IRQ8: Bit<EICLRrs> = Bit::new(8);

    impl W<EICLRrs> {
        /// Clears every line in `lines`
        #[inline(always)]
        pub fn lines(&mut self, lines: Lines) -> &mut Self {
            unsafe { self.bits(lines.bits()) }
        }
    }
}

/// NMICLR (w) register accessor
pub type NMICLR = Reg<nmiclr::NMICLRrs>;
/// Clear the NMI
pub mod nmiclr {
    use super::*;
    reg_spec!(NMICLRrs: u16, w);
    /// Clear the pending NMI
    pub const CLEAR: Bit<NMICLRrs> = Bit::new(0);
}

/// Trigger mode field and enable bit of external interrupt line `n`
///
/// Returns `None` for lines above 8. The register holding the slot is `EI(n / 4)CFG`.
pub const fn slot(n: u8) -> Option<(u8, u32, u32)> {
    if n > 8 {
        return None;
    }
    let shift = (n % 4) * 4;
    Some((n / 4, 0x7 << shift, 0x8 << shift))
}
