//! # Reset status
//!
//! A single location that reads as the reset cause (`RSTSTA`) and clears causes when written
//! (`RSTCLR`). The two views are separate accessors over the same address.

use vcell::VolatileCell;

use crate::generic::reg_spec;
use crate::{Bit, Reg, R, W};

/// Reset status register block
#[repr(C)]
pub struct RegisterBlock {
    // Backing cell of both views
    pub(crate) rststa_rstclr: VolatileCell<u16>,
}

impl RegisterBlock {
    /// 0x00 - Reset status (read view)
    #[inline(always)]
    pub const fn rststa(&self) -> &RSTSTA {
        unsafe { &*(self as *const Self).cast::<u8>().add(0).cast() }
    }

    /// 0x00 - Reset status clear (write view)
    #[inline(always)]
    pub const fn rstclr(&self) -> &RSTCLR {
        unsafe { &*(self as *const Self).cast::<u8>().add(0).cast() }
    }
}

bitflags::bitflags! {
    /// Reset causes
    pub struct Causes: u16 {
        /// Power-on reset
        const POR = 1 << 0;
        /// External reset pin
        const EXTRST = 1 << 1;
        /// Watchdog timeout
        const WDRST = 1 << 2;
        /// Software reset through `SYSRESETREQ`
        const SWRST = 1 << 3;
    }
}

/// RSTSTA (r) register accessor
pub type RSTSTA = Reg<rststa::RSTSTArs>;
/// Reset status
pub mod rststa {
    use super::*;
    reg_spec!(RSTSTArs: u16, r, 0x0001);
    /// Power-on reset occurred
    pub const POR: Bit<RSTSTArs> = Bit::new(0);
    /// External reset occurred
    pub const EXTRST: Bit<RSTSTArs> = Bit::new(1);
    /// Watchdog reset occurred
    pub const WDRST: Bit<RSTSTArs> = Bit::new(2);
    /// Software reset occurred
    pub const SWRST: Bit<RSTSTArs> = Bit::new(3);

    impl R<RSTSTArs> {
        /// Every reset cause recorded since the last clear
        #[inline(always)]
        pub fn causes(&self) -> Causes {
            Causes::from_bits_truncate(self.bits())
        }
    }
}

/// RSTCLR (w) register accessor
pub type RSTCLR = Reg<rstclr::RSTCLRrs>;
/// Reset status clear
pub mod rstclr {
    use super::*;
    reg_spec!(RSTCLRrs: u16, w);
    /// Clear the power-on reset flag
    pub const POR: Bit<RSTCLRrs> = Bit::new(0);
    /// Clear the external reset flag
    pub const EXTRST: Bit<RSTCLRrs> = Bit::new(1);
    /// Clear the watchdog reset flag
    pub const WDRST: Bit<RSTCLRrs> = Bit::new(2);
    /// Clear the software reset flag
    pub const SWRST: Bit<RSTCLRrs> = Bit::new(3);

    impl W<RSTCLRrs> {
        /// Clears every cause in `causes`
        #[inline(always)]
        pub fn causes(&mut self, causes: Causes) -> &mut Self {
            unsafe { self.bits(causes.bits()) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, size_of};

    #[test]
    fn both_views_share_one_address() {
        let block: RegisterBlock = unsafe { core::mem::zeroed() };
        let base = &block as *const RegisterBlock as usize;
        assert_eq!(block.rststa().as_ptr() as usize, base);
        assert_eq!(block.rstclr().as_ptr() as usize, base);
        assert_eq!(size_of::<RegisterBlock>(), 2);
        assert_eq!(align_of::<RegisterBlock>(), align_of::<RSTSTA>());
    }

    #[test]
    fn views_observe_the_shared_cell() {
        let block: RegisterBlock = unsafe { core::mem::zeroed() };
        block.rststa_rstclr.set(Causes::POR.bits());
        assert_eq!(block.rststa().read().causes(), Causes::POR);
        block.rstclr().write(|w| w.causes(Causes::EXTRST));
        assert_eq!(block.rststa_rstclr.get(), Causes::EXTRST.bits());
    }

    #[test]
    fn clear_writes_through_read_view() {
        let block: RegisterBlock = unsafe { core::mem::zeroed() };
        block.rstclr().write(|w| w.causes(Causes::WDRST | Causes::SWRST));
        assert_eq!(block.rststa().read().causes(), Causes::WDRST | Causes::SWRST);
        assert!(block.rststa().read().bit(rststa::SWRST));
        assert!(!block.rststa().read().bit(rststa::POR));
    }

    #[test]
    fn bits_match_between_views() {
        assert_eq!(rststa::POR.mask(), rstclr::POR.mask());
        assert_eq!(rststa::EXTRST.mask(), rstclr::EXTRST.mask());
        assert_eq!(rststa::WDRST.mask(), rstclr::WDRST.mask());
        assert_eq!(rststa::SWRST.mask(), rstclr::SWRST.mask());
        assert_eq!(Causes::all().bits(), 0x000F);
    }
}
