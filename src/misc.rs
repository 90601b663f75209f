//! # Miscellaneous
//!
//! Radio test routing register, used only by production test firmware.

use crate::generic::reg_spec;
use crate::{Field, Reg};

/// Miscellaneous register block
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00 - Radio test routing
    pub rftst: RFTST,
}

/// RFTST (rw) register accessor
pub type RFTST = Reg<rftst::RFTSTrs>;
/// Radio test routing
pub mod rftst {
    use super::*;
    reg_spec!(RFTSTrs: u16, rw, 0x0000);
    /// Routing selection
    pub const VALUE: Field<RFTSTrs> = Field::new(0, 16);
}
