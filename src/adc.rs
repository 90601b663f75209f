//! # Analog to digital converter
//!
//! A 12-bit SAR converter with a six input multiplexer plus internal channels for the
//! temperature sensor, the supply rails and the reference. Conversions are started by software,
//! by Timer0 or Timer1, or by a GPIO edge, as selected in `ADCCON.MOD`.
//!
//! `ADCGN` and `ADCOF` hold the factory gain and offset calibration applied to every result.

use crate::generic::{field_enum, reg_spec};
use crate::{Bit, Field, Reg};

/// ADC register block
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00 - Configuration
    pub adccfg: ADCCFG,
    _reserved1: [u8; 2],
    /// 0x04 - Control
    pub adccon: ADCCON,
    _reserved2: [u8; 3],
    /// 0x08 - Status
    pub adcsta: ADCSTA,
    _reserved3: [u8; 3],
    /// 0x0C - Conversion result
    pub adcdat: ADCDAT,
    _reserved4: [u8; 2],
    /// 0x10 - Gain calibration
    pub adcgn: ADCGN,
    _reserved5: [u8; 2],
    /// 0x14 - Offset calibration
    pub adcof: ADCOF,
}

/// ADCCFG (rw) register accessor
pub type ADCCFG = Reg<adccfg::ADCCFGrs>;
/// Configuration
pub mod adccfg {
    use super::*;
    reg_spec!(ADCCFGrs: u16, rw, 0x0A00);

    /// Input channel
    pub const CHSEL: Field<ADCCFGrs, Chsel> = Field::new(0, 4);
    /// Reference
    pub const REFSEL: Field<ADCCFGrs, Refsel> = Field::new(4, 1);
    /// Conversion clock divider
    pub const CLK: Field<ADCCFGrs, Clk> = Field::new(5, 3);
    /// Acquisition time, in conversion clock cycles
    pub const ACKDLY: Field<ADCCFGrs> = Field::new(8, 4);
    /// Ground switch enable
    pub const GNDSWON: Bit<ADCCFGrs> = Bit::new(12);
    /// Ground switch series resistor enable
    pub const GNDSWRESEN: Bit<ADCCFGrs> = Bit::new(13);
    /// Boost the reference buffer for a 30 µs settling time
    pub const BOOST30: Bit<ADCCFGrs> = Bit::new(14);

    field_enum! {
        /// Input channel
        pub enum Chsel: u8 {
            Adc0 = 0,
            Adc1 = 1,
            Adc2 = 2,
            Adc3 = 3,
            Adc4 = 4,
            Adc5 = 5,
            /// Temperature sensor
            Temp = 8,
            /// Battery voltage divided by 4
            VbatDiv4 = 9,
            /// Digital LDO output divided by 2
            LvddDiv2 = 10,
            /// Reference voltage
            Vref = 11,
            /// Analog ground
            Agnd = 12,
        }
    }

    field_enum! {
        /// Reference
        pub enum Refsel: u8 {
            /// Internal 1.25 V reference
            Int1v25 = 0,
            /// Digital LDO output
            Lvdd = 1,
        }
    }

    field_enum! {
        /// Conversion clock divider
        pub enum Clk: u8 {
            Div1 = 0,
            Div2 = 1,
            Div4 = 2,
            Div8 = 3,
            Div16 = 4,
            Div32 = 5,
        }
    }
}

/// ADCCON (rw) register accessor
pub type ADCCON = Reg<adccon::ADCCONrs>;
/// Control
pub mod adccon {
    use super::*;
    reg_spec!(ADCCONrs: u8, rw, 0x80);

    /// Conversion trigger
    pub const MOD: Field<ADCCONrs, Mod> = Field::new(0, 3);
    /// Converter power
    pub const ENABLE: Bit<ADCCONrs> = Bit::new(3);
    /// DMA request enable
    pub const DMA: Bit<ADCCONrs> = Bit::new(4);
    /// Interrupt enable
    pub const IEN: Bit<ADCCONrs> = Bit::new(5);
    /// Reference buffer power down
    pub const REFBUF: Bit<ADCCONrs> = Bit::new(7);

    field_enum! {
        /// Conversion trigger
        pub enum Mod: u8 {
            /// No conversion
            Idle = 0,
            /// One software conversion
            Single = 1,
            /// Back to back conversions
            Continuous = 2,
            /// On Timer0 timeout
            Timer0 = 3,
            /// On Timer1 timeout
            Timer1 = 4,
            /// On a GPIO edge
            Gpio = 5,
        }
    }
}

/// ADCSTA (r) register accessor
pub type ADCSTA = Reg<adcsta::ADCSTArs>;
/// Status
pub mod adcsta {
    use super::*;
    reg_spec!(ADCSTArs: u8, r, 0x00);
    /// Result ready, cleared by reading `ADCDAT`
    pub const READY: Bit<ADCSTArs> = Bit::new(0);
}

/// ADCDAT (r) register accessor
pub type ADCDAT = Reg<adcdat::ADCDATrs>;
/// Conversion result
pub mod adcdat {
    use super::*;
    reg_spec!(ADCDATrs: u16, r, 0x0000);
    /// Calibrated 12-bit result
    pub const VALUE: Field<ADCDATrs> = Field::new(0, 12);
}

/// ADCGN (rw) register accessor
pub type ADCGN = Reg<adcgn::ADCGNrs>;
/// Gain calibration, 0x4000 is unity
pub mod adcgn {
    use super::*;
    reg_spec!(ADCGNrs: u16, rw, 0x4000);
    /// Gain coefficient
    pub const VALUE: Field<ADCGNrs> = Field::new(0, 16);
}

/// ADCOF (rw) register accessor
pub type ADCOF = Reg<adcof::ADCOFrs>;
/// Offset calibration
pub mod adcof {
    use super::*;
    reg_spec!(ADCOFrs: u16, rw, 0x0000);
    /// Offset coefficient
    pub const VALUE: Field<ADCOFrs> = Field::new(0, 16);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::test_util::{assert_disjoint, assert_within};
    use crate::{FieldValue, Resettable};
    use core::mem::offset_of;

    #[test]
    fn layout() {
        assert_eq!(offset_of!(RegisterBlock, adccfg), 0x00);
        assert_eq!(offset_of!(RegisterBlock, adccon), 0x04);
        assert_eq!(offset_of!(RegisterBlock, adcsta), 0x08);
        assert_eq!(offset_of!(RegisterBlock, adcdat), 0x0C);
        assert_eq!(offset_of!(RegisterBlock, adcgn), 0x10);
        assert_eq!(offset_of!(RegisterBlock, adcof), 0x14);
    }

    #[test]
    fn reset_values() {
        assert_eq!(adccfg::ADCCFGrs::RESET_VALUE, 0x0A00);
        assert_eq!(adccon::ADCCONrs::RESET_VALUE, 0x80);
        assert_eq!(adcgn::ADCGNrs::RESET_VALUE, 0x4000);
        // Reset configuration samples ADC0 against the internal reference
        let cfg = u32::from(adccfg::ADCCFGrs::RESET_VALUE);
        assert_eq!(adccfg::Chsel::from_bits(cfg & 0xF), Some(adccfg::Chsel::Adc0));
        assert_eq!((cfg & adccfg::ACKDLY.mask()) >> 8, 0xA);
    }

    #[test]
    fn fields() {
        let cfg = [
            adccfg::CHSEL.mask(),
            adccfg::REFSEL.mask(),
            adccfg::CLK.mask(),
            adccfg::ACKDLY.mask(),
            adccfg::GNDSWON.mask(),
            adccfg::GNDSWRESEN.mask(),
            adccfg::BOOST30.mask(),
        ];
        assert_disjoint(&cfg);
        assert_within(&cfg, 16);
        let con = [
            adccon::MOD.mask(),
            adccon::ENABLE.mask(),
            adccon::DMA.mask(),
            adccon::IEN.mask(),
            adccon::REFBUF.mask(),
        ];
        assert_disjoint(&con);
        assert_within(&con, 8);
        assert_eq!(adccfg::Chsel::from_bits(6), None);
    }

    #[test]
    fn temperature_conversion_in_ram() {
        let block: RegisterBlock = unsafe { core::mem::zeroed() };
        block.adccfg.reset();
        block.adccfg.modify(|_, w| {
            w.variant(adccfg::CHSEL, adccfg::Chsel::Temp)
                .variant(adccfg::CLK, adccfg::Clk::Div4)
        });
        assert_eq!(block.adccfg.read().bits(), 0x0A48);
        block.adccon.write(|w| {
            w.clear_bit(adccon::REFBUF)
                .set_bit(adccon::ENABLE)
                .set_bit(adccon::IEN)
                .variant(adccon::MOD, adccon::Mod::Single)
        });
        assert_eq!(block.adccon.read().bits(), 0x29);
    }
}
