//! # Flash controller
//!
//! Commands are issued by writing the target address to `FEEADR0L/H`, the two user keys to
//! `FEEKEY` in order, then the command to `FEECMD`. Progress and the result of the last command
//! are reported in `FEESTA`. `FEEPROL/H` hold one write-protect bit per 4 KiB block.

use crate::generic::{field_enum, reg_spec};
use crate::{Bit, Field, Reg};

/// Flash controller register block
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00 - Status
    pub sta: STA,
    _reserved1: [u8; 2],
    /// 0x04 - Interrupt control
    pub con0: CON0,
    _reserved2: [u8; 2],
    /// 0x08 - Command
    pub cmd: CMD,
    _reserved3: [u8; 6],
    /// 0x10 - Command address, low half
    pub adr0l: ADR0L,
    _reserved4: [u8; 2],
    /// 0x14 - Command address, high half
    pub adr0h: ADR0H,
    _reserved5: [u8; 2],
    /// 0x18 - Signature end address, low half
    pub adr1l: ADR1L,
    _reserved6: [u8; 2],
    /// 0x1C - Signature end address, high half
    pub adr1h: ADR1H,
    _reserved7: [u8; 2],
    /// 0x20 - Command key
    pub key: KEY,
    _reserved8: [u8; 6],
    /// 0x28 - Write protection, blocks 0 to 15
    pub prol: PROL,
    _reserved9: [u8; 2],
    /// 0x2C - Write protection, blocks 16 to 31
    pub proh: PROH,
    _reserved10: [u8; 2],
    /// 0x30 - Signature result, low half
    pub sigl: SIGL,
    _reserved11: [u8; 2],
    /// 0x34 - Signature result, high half
    pub sigh: SIGH,
    _reserved12: [u8; 2],
    /// 0x38 - Debug control
    pub con1: CON1,
    _reserved13: [u8; 14],
    /// 0x48 - Address of the last aborted write, low half
    pub adral: ADRAL,
    _reserved14: [u8; 2],
    /// 0x4C - Address of the last aborted write, high half
    pub adrah: ADRAH,
    _reserved15: [u8; 42],
    /// 0x78 - System interrupts that abort a flash command, low half
    pub aen0: AEN0,
    _reserved16: [u8; 2],
    /// 0x7C - System interrupts that abort a flash command, high half
    pub aen1: AEN1,
}

/// STA (r) register accessor
pub type STA = Reg<sta::STArs>;
/// Status
pub mod sta {
    use super::*;
    reg_spec!(STArs: u16, r, 0x0000);

    /// Command in progress
    pub const CMDBUSY: Bit<STArs> = Bit::new(0);
    /// Write in progress
    pub const WRBUSY: Bit<STArs> = Bit::new(1);
    /// Command complete, cleared on read
    pub const CMDDONE: Bit<STArs> = Bit::new(2);
    /// Write complete, cleared on read
    pub const WRDONE: Bit<STArs> = Bit::new(3);
    /// Result of the last command
    pub const CMDRES: Field<STArs, CmdRes> = Field::new(4, 2);
    /// Signature check failed at boot
    pub const SIGNERR: Bit<STArs> = Bit::new(6);

    field_enum! {
        /// Result of the last command
        pub enum CmdRes: u8 {
            /// Completed
            Success = 0,
            /// Target is write protected
            Protected = 1,
            /// Erase or write verification failed
            VerifyErr = 2,
            /// Aborted by the user or a system interrupt
            Abort = 3,
        }
    }
}

/// CON0 (rw) register accessor
pub type CON0 = Reg<con0::CON0rs>;
/// Interrupt control
pub mod con0 {
    use super::*;
    reg_spec!(CON0rs: u16, rw, 0x0000);
    /// Interrupt on command completion
    pub const IENCMD: Bit<CON0rs> = Bit::new(0);
    /// Interrupt when a write has been accepted
    pub const IWRALCOMP: Bit<CON0rs> = Bit::new(1);
    /// Interrupt on command failure
    pub const IENERR: Bit<CON0rs> = Bit::new(2);
}

/// CMD (rw) register accessor
pub type CMD = Reg<cmd::CMDrs>;
/// Command
pub mod cmd {
    use super::*;
    reg_spec!(CMDrs: u16, rw, 0x0000);

    /// Command
    pub const CMD: Field<CMDrs, Cmd> = Field::new(0, 4);

    field_enum! {
        /// Flash command
        pub enum Cmd: u8 {
            /// No command
            Idle = 0,
            /// Erase the page at `FEEADR0`
            ErasePage = 1,
            /// Compute the signature from `FEEADR0` to `FEEADR1`
            Sign = 2,
            /// Erase the whole user space
            MassErase = 3,
            /// Abort the command in progress
            Abort = 4,
        }
    }
}

/// Declares the two 16-bit halves of a flash address
macro_rules! address {
    ($Low:ident, $low:ident, $LowSpec:ident, $High:ident, $high:ident, $HighSpec:ident, $access:ident, $reset:expr) => {
        #[doc = concat!(stringify!($Low), " register accessor")]
        pub type $Low = Reg<$low::$LowSpec>;
        /// Address bits 15:0
        pub mod $low {
            use super::*;
            reg_spec!($LowSpec: u16, $access, $reset);
            /// Address bits 15:0
            pub const VALUE: Field<$LowSpec> = Field::new(0, 16);
        }

        #[doc = concat!(stringify!($High), " register accessor")]
        pub type $High = Reg<$high::$HighSpec>;
        /// Address bit 16
        pub mod $high {
            use super::*;
            reg_spec!($HighSpec: u16, $access, 0x0000);
            /// Address bit 16
            pub const VALUE: Field<$HighSpec> = Field::new(0, 1);
        }
    };
}

address!(ADR0L, adr0l, ADR0Lrs, ADR0H, adr0h, ADR0Hrs, rw, 0x0000);
address!(ADR1L, adr1l, ADR1Lrs, ADR1H, adr1h, ADR1Hrs, rw, 0x0000);
address!(ADRAL, adral, ADRALrs, ADRAH, adrah, ADRAHrs, r, 0x0800);

/// KEY (w) register accessor
pub type KEY = Reg<key::KEYrs>;
/// Command key
pub mod key {
    use super::*;
    reg_spec!(KEYrs: u16, w);

    /// Key value
    pub const VALUE: Field<KEYrs, Key> = Field::new(0, 16);

    field_enum! {
        /// Keys written before each command
        pub enum Key: u16 {
            /// First key
            UserKey1 = 0xF456,
            /// Second key
            UserKey2 = 0xF123,
        }
    }
}

/// PROL (rw) register accessor
pub type PROL = Reg<prol::PROLrs>;
/// Write protection, blocks 0 to 15
pub mod prol {
    use super::*;
    reg_spec!(PROLrs: u16, rw, 0xFFFF);
    /// One bit per block, cleared to protect
    pub const VALUE: Field<PROLrs> = Field::new(0, 16);
}

/// PROH (rw) register accessor
pub type PROH = Reg<proh::PROHrs>;
/// Write protection, blocks 16 to 31
pub mod proh {
    use super::*;
    reg_spec!(PROHrs: u16, rw, 0xFFFF);
    /// One bit per block, cleared to protect
    pub const VALUE: Field<PROHrs> = Field::new(0, 16);
}

/// SIGL (r) register accessor
pub type SIGL = Reg<sigl::SIGLrs>;
/// Signature, bits 15:0
pub mod sigl {
    use super::*;
    reg_spec!(SIGLrs: u16, r, 0x0000);
    /// Signature bits 15:0
    pub const VALUE: Field<SIGLrs> = Field::new(0, 16);
}

/// SIGH (r) register accessor
pub type SIGH = Reg<sigh::SIGHrs>;
/// Signature, bits 23:16
pub mod sigh {
    use super::*;
    reg_spec!(SIGHrs: u16, r, 0x0000);
    /// Signature bits 23:16
    pub const VALUE: Field<SIGHrs> = Field::new(0, 8);
}

/// CON1 (rw) register accessor
pub type CON1 = Reg<con1::CON1rs>;
/// Debug control
pub mod con1 {
    use super::*;
    reg_spec!(CON1rs: u16, rw, 0x0001);
    /// Serial wire debug enabled
    pub const DBG: Bit<CON1rs> = Bit::new(0);
}

/// AEN0 (rw) register accessor
pub type AEN0 = Reg<aen0::AEN0rs>;
/// Abort enable for IRQ0 to IRQ15
pub mod aen0 {
    use super::*;
    reg_spec!(AEN0rs: u16, rw, 0x0000);
    /// One bit per interrupt number
    pub const VALUE: Field<AEN0rs> = Field::new(0, 16);
}

/// AEN1 (rw) register accessor
pub type AEN1 = Reg<aen1::AEN1rs>;
/// Abort enable for IRQ16 to IRQ31
pub mod aen1 {
    use super::*;
    reg_spec!(AEN1rs: u16, rw, 0x0000);
    /// One bit per interrupt number
    pub const VALUE: Field<AEN1rs> = Field::new(0, 16);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::test_util::assert_disjoint;
    use crate::Resettable;
    use core::mem::{offset_of, size_of};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(RegisterBlock, sta), 0x00);
        assert_eq!(offset_of!(RegisterBlock, con0), 0x04);
        assert_eq!(offset_of!(RegisterBlock, cmd), 0x08);
        assert_eq!(offset_of!(RegisterBlock, adr0l), 0x10);
        assert_eq!(offset_of!(RegisterBlock, adr0h), 0x14);
        assert_eq!(offset_of!(RegisterBlock, adr1l), 0x18);
        assert_eq!(offset_of!(RegisterBlock, adr1h), 0x1C);
        assert_eq!(offset_of!(RegisterBlock, key), 0x20);
        assert_eq!(offset_of!(RegisterBlock, prol), 0x28);
        assert_eq!(offset_of!(RegisterBlock, proh), 0x2C);
        assert_eq!(offset_of!(RegisterBlock, sigl), 0x30);
        assert_eq!(offset_of!(RegisterBlock, sigh), 0x34);
        assert_eq!(offset_of!(RegisterBlock, con1), 0x38);
        assert_eq!(offset_of!(RegisterBlock, adral), 0x48);
        assert_eq!(offset_of!(RegisterBlock, adrah), 0x4C);
        assert_eq!(offset_of!(RegisterBlock, aen0), 0x78);
        assert_eq!(offset_of!(RegisterBlock, aen1), 0x7C);
        assert_eq!(size_of::<RegisterBlock>(), 0x7E);
    }

    #[test]
    fn reset_values() {
        assert_eq!(prol::PROLrs::RESET_VALUE, 0xFFFF);
        assert_eq!(proh::PROHrs::RESET_VALUE, 0xFFFF);
        assert_eq!(con1::CON1rs::RESET_VALUE, 0x0001);
        assert_eq!(adral::ADRALrs::RESET_VALUE, 0x0800);
        assert_eq!(adrah::ADRAHrs::RESET_VALUE, 0x0000);
    }

    #[test]
    fn status_fields() {
        assert_disjoint(&[
            sta::CMDBUSY.mask(),
            sta::WRBUSY.mask(),
            sta::CMDDONE.mask(),
            sta::WRDONE.mask(),
            sta::CMDRES.mask(),
            sta::SIGNERR.mask(),
        ]);
        assert_eq!(sta::CMDRES.mask(), 0x0030);
        assert_eq!(adr0h::VALUE.mask(), 0x0001);
    }

    #[test]
    fn page_erase_sequence_in_ram() {
        let block: RegisterBlock = unsafe { core::mem::zeroed() };
        let page = 0x0001_0800u32;
        block.adr0l.write(|w| w.field(adr0l::VALUE, page & 0xFFFF));
        block.adr0h.write(|w| w.field(adr0h::VALUE, page >> 16));
        block.key.write(|w| w.variant(key::VALUE, key::Key::UserKey1));
        block.key.write(|w| w.variant(key::VALUE, key::Key::UserKey2));
        block.cmd.write(|w| w.variant(cmd::CMD, cmd::Cmd::ErasePage));

        assert_eq!(block.adr0l.read().bits(), 0x0800);
        assert_eq!(block.adr0h.read().bits(), 0x0001);
        assert_eq!(unsafe { *block.key.as_ptr() }, 0xF123);
        assert_eq!(block.cmd.read().variant(cmd::CMD), Some(cmd::Cmd::ErasePage));
    }
}
