//! # Clock control
//!
//! `CLKCON` selects the system clock source, its divider (giving UCLK) and the signal routed to
//! the ECLKOUT pin. `CLKACT` gates peripheral clocks in active mode and `CLKPD` in the low
//! power modes; a set bit keeps the clock running. See [`Gates`].

use crate::generic::{field_enum, reg_spec};
use crate::{Bit, Field, Reg, R, W};

/// Clock control register block
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00 - System clock configuration
    pub clkcon: CLKCON,
    _reserved1: [u8; 2],
    /// 0x04 - Peripheral clocks in active mode
    pub clkact: CLKACT,
    _reserved2: [u8; 2],
    /// 0x08 - Peripheral clocks in power-down modes
    pub clkpd: CLKPD,
}

/// CLKCON (rw) register accessor
pub type CLKCON = Reg<clkcon::CLKCONrs>;
/// System clock configuration
pub mod clkcon {
    use super::*;
    reg_spec!(CLKCONrs: u16, rw, 0x0000);

    /// UCLK divider
    pub const CD: Field<CLKCONrs, Cd> = Field::new(0, 3);
    /// System clock source
    pub const CLKMUX: Field<CLKCONrs, Clkmux> = Field::new(3, 2);
    /// Clock routed to ECLKOUT
    pub const CLKOUT: Field<CLKCONrs, Clkout> = Field::new(5, 3);

    field_enum! {
        /// UCLK divider
        pub enum Cd: u8 {
            Div1 = 0,
            Div2 = 1,
            Div4 = 2,
            Div8 = 3,
            Div16 = 4,
            Div32 = 5,
            Div64 = 6,
            Div128 = 7,
        }
    }

    field_enum! {
        /// System clock source
        pub enum Clkmux: u8 {
            /// 16 MHz internal oscillator
            Hfosc = 0,
            /// 32 kHz crystal
            Lfxtal = 1,
            /// 32 kHz internal oscillator
            Lfosc = 2,
            /// External clock on ECLKIN
            Eclkin = 3,
        }
    }

    field_enum! {
        /// Clock routed to ECLKOUT
        pub enum Clkout: u8 {
            /// Gated UCLK
            UclkCg = 0,
            Uclk = 1,
            Pclk = 2,
            Hfosc = 5,
            Lfosc = 6,
            Lfxtal = 7,
        }
    }
}

bitflags::bitflags! {
    /// Peripheral clock gates
    pub struct Gates: u16 {
        const SPI0 = 1 << 0;
        const SPI1 = 1 << 1;
        const I2C = 1 << 2;
        const UART = 1 << 3;
        const PWM = 1 << 4;
        const T0 = 1 << 5;
        const T1 = 1 << 6;
        const DMA = 1 << 8;
        const ADC = 1 << 9;
    }
}

/// Declares a clock gate register
macro_rules! gate_reg {
    ($Alias:ident, $module:ident, $Spec:ident; $doc:literal) => {
        #[doc = concat!(stringify!($Alias), " (rw) register accessor")]
        pub type $Alias = Reg<$module::$Spec>;
        #[doc = $doc]
        pub mod $module {
            use super::*;
            reg_spec!($Spec: u16, rw, 0x037F);
            /// SPI0 clock
            pub const SPI0: Bit<$Spec> = Bit::new(0);
            /// SPI1 clock
            pub const SPI1: Bit<$Spec> = Bit::new(1);
            /// I2C clock
            pub const I2C: Bit<$Spec> = Bit::new(2);
            /// UART clock
            pub const UART: Bit<$Spec> = Bit::new(3);
            /// PWM clock
            pub const PWM: Bit<$Spec> = Bit::new(4);
            /// Timer0 clock
            pub const T0: Bit<$Spec> = Bit::new(5);
            /// Timer1 clock
            pub const T1: Bit<$Spec> = Bit::new(6);
            /// DMA clock
            pub const DMA: Bit<$Spec> = Bit::new(8);
            /// ADC clock
            pub const ADC: Bit<$Spec> = Bit::new(9);
        }

        impl R<$module::$Spec> {
            /// Clocks left running
            #[inline(always)]
            pub fn gates(&self) -> Gates {
                Gates::from_bits_truncate(self.bits())
            }
        }

        impl W<$module::$Spec> {
            /// Runs exactly the clocks in `gates`
            #[inline(always)]
            pub fn gates(&mut self, gates: Gates) -> &mut Self {
                unsafe { self.bits(gates.bits()) }
            }
        }
    };
}

gate_reg!(CLKACT, clkact, CLKACTrs; "Peripheral clocks in active mode");
gate_reg!(CLKPD, clkpd, CLKPDrs; "Peripheral clocks in power-down modes");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::test_util::assert_disjoint;
    use crate::Resettable;
    use core::mem::offset_of;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(RegisterBlock, clkcon), 0x00);
        assert_eq!(offset_of!(RegisterBlock, clkact), 0x04);
        assert_eq!(offset_of!(RegisterBlock, clkpd), 0x08);
    }

    #[test]
    fn every_clock_runs_after_reset() {
        assert_eq!(clkact::CLKACTrs::RESET_VALUE, 0x037F);
        assert_eq!(clkpd::CLKPDrs::RESET_VALUE, 0x037F);
        assert_eq!(Gates::all().bits(), 0x037F);
        assert_eq!(clkact::ADC.mask(), u32::from(Gates::ADC.bits()));
    }

    #[test]
    fn fields() {
        assert_disjoint(&[
            clkcon::CD.mask(),
            clkcon::CLKMUX.mask(),
            clkcon::CLKOUT.mask(),
        ]);
        assert_eq!(clkcon::CLKOUT.mask(), 0x00E0);
    }

    #[test]
    fn gating_in_ram() {
        let block: RegisterBlock = unsafe { core::mem::zeroed() };
        block.clkact.reset();
        block
            .clkact
            .modify(|r, w| w.gates(r.gates() - Gates::PWM - Gates::ADC));
        assert_eq!(block.clkact.read().bits(), 0x016F);
        assert!(!block.clkact.read().bit(clkact::PWM));

        block.clkcon.write(|w| {
            w.variant(clkcon::CLKMUX, clkcon::Clkmux::Hfosc)
                .variant(clkcon::CD, clkcon::Cd::Div2)
                .variant(clkcon::CLKOUT, clkcon::Clkout::Lfxtal)
        });
        assert_eq!(block.clkcon.read().bits(), 0x00E1);
    }
}
