//! # General purpose I/O
//!
//! Five 8-bit ports, GP0 to GP4, each with the same register block. Every pin has a 2-bit
//! function selector in `GPCON`; value 0 is always plain GPIO. The alternate functions differ
//! per port and are listed in [`Gp0Function`] to [`Gp4Function`].
//!
//! The single-bit registers (`GPSET`, `GPCLR`, `GPTGL`) change pins without a read-modify-write,
//! which makes them safe to use from interrupt handlers.

use crate::generic::{field_enum, pin_bits, reg_spec};
use crate::{Bit, Field, Reg, R, W};

/// GPIO port register block
#[repr(C)]
pub struct RegisterBlock {
    /// 0x00 - Pin function configuration
    pub gpcon: GPCON,
    _reserved1: [u8; 2],
    /// 0x04 - Output enable
    pub gpoen: GPOEN,
    _reserved2: [u8; 3],
    /// 0x08 - Pull-up enable
    pub gppul: GPPUL,
    _reserved3: [u8; 3],
    /// 0x0C - Tri-state
    pub gpoce: GPOCE,
    _reserved4: [u8; 7],
    /// 0x14 - Input data
    pub gpin: GPIN,
    _reserved5: [u8; 3],
    /// 0x18 - Output data
    pub gpout: GPOUT,
    _reserved6: [u8; 3],
    /// 0x1C - Set output bits
    pub gpset: GPSET,
    _reserved7: [u8; 3],
    /// 0x20 - Clear output bits
    pub gpclr: GPCLR,
    _reserved8: [u8; 3],
    /// 0x24 - Toggle output bits
    pub gptgl: GPTGL,
    _reserved9: [u8; 11],
}

/// Distance between two port register blocks
pub const PORT_STRIDE: usize = 0x30;

/// GPCON (rw) register accessor
pub type GPCON = Reg<gpcon::GPCONrs>;
/// Pin function configuration
pub mod gpcon {
    use super::*;
    reg_spec!(GPCONrs: u16, rw, 0x0000);

    /// Function of pin 0
    pub const CON0: Field<GPCONrs> = Field::new(0, 2);
    /// Function of pin 1
    pub const CON1: Field<GPCONrs> = Field::new(2, 2);
    /// Function of pin 2
    pub const CON2: Field<GPCONrs> = Field::new(4, 2);
    /// Function of pin 3
    pub const CON3: Field<GPCONrs> = Field::new(6, 2);
    /// Function of pin 4
    pub const CON4: Field<GPCONrs> = Field::new(8, 2);
    /// Function of pin 5
    pub const CON5: Field<GPCONrs> = Field::new(10, 2);
    /// Function of pin 6
    pub const CON6: Field<GPCONrs> = Field::new(12, 2);
    /// Function of pin 7
    pub const CON7: Field<GPCONrs> = Field::new(14, 2);

    /// Function selectors indexed by pin
    pub const CON: [Field<GPCONrs>; 8] = [CON0, CON1, CON2, CON3, CON4, CON5, CON6, CON7];

    impl W<GPCONrs> {
        /// Routes the pin of `function` to that function
        #[inline(always)]
        pub fn function<F: PinFunction>(&mut self, function: F) -> &mut Self {
            self.field(CON[function.pin().index()], function.bits())
        }

        /// Returns `pin` to plain GPIO
        #[inline(always)]
        pub fn gpio(&mut self, pin: Pin) -> &mut Self {
            self.field(CON[pin.index()], 0)
        }
    }
}

/// Declares an 8-bit port register with one bit per pin
macro_rules! port_reg {
    ($Alias:ident, $module:ident, $Spec:ident, $access:ident $(, $reset:expr)?; $doc:literal) => {
        #[doc = concat!(stringify!($Alias), " register accessor")]
        pub type $Alias = Reg<$module::$Spec>;
        #[doc = $doc]
        pub mod $module {
            use super::*;
            reg_spec!($Spec: u8, $access $(, $reset)?);
            pin_bits!($Spec: P0 = 0, P1 = 1, P2 = 2, P3 = 3, P4 = 4, P5 = 5, P6 = 6, P7 = 7);
        }
    };
}

port_reg!(GPOEN, gpoen, GPOENrs, rw, 0x00; "Output enable, set to drive the pin");
port_reg!(GPPUL, gppul, GPPULrs, rw, 0xFF; "Pull-up enable");
port_reg!(GPOCE, gpoce, GPOCErs, rw, 0x00; "Tri-state the output when the output bit is 1");
port_reg!(GPIN, gpin, GPINrs, r, 0x00; "Input data");
port_reg!(GPOUT, gpout, GPOUTrs, rw, 0x00; "Output data");
port_reg!(GPSET, gpset, GPSETrs, w; "Writing 1 sets the output bit");
port_reg!(GPCLR, gpclr, GPCLRrs, w; "Writing 1 clears the output bit");
port_reg!(GPTGL, gptgl, GPTGLrs, w; "Writing 1 toggles the output bit");

/// Pin of a port
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Pin {
    P0 = 0,
    P1 = 1,
    P2 = 2,
    P3 = 3,
    P4 = 4,
    P5 = 5,
    P6 = 6,
    P7 = 7,
}

impl Pin {
    /// Pin number within the port
    #[inline(always)]
    pub const fn number(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    const fn index(self) -> usize {
        self as usize
    }
}

/// A port has no pin with this number
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidPin(pub u8);

impl TryFrom<u8> for Pin {
    type Error = InvalidPin;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Ok(match n {
            0 => Self::P0,
            1 => Self::P1,
            2 => Self::P2,
            3 => Self::P3,
            4 => Self::P4,
            5 => Self::P5,
            6 => Self::P6,
            7 => Self::P7,
            _ => return Err(InvalidPin(n)),
        })
    }
}

field_enum! {
    /// Pin direction in `GPOEN`
    pub enum Direction: u8 {
        /// Input, output driver off
        In = 0,
        /// Output
        Out = 1,
    }
}

impl W<gpoen::GPOENrs> {
    /// Sets the direction of `pin`
    #[inline(always)]
    pub fn direction(&mut self, pin: Pin, direction: Direction) -> &mut Self {
        self.bit(Bit::new(pin.number()), direction == Direction::Out)
    }
}

impl R<gpoen::GPOENrs> {
    /// Direction of `pin`
    #[inline(always)]
    pub fn direction(&self, pin: Pin) -> Direction {
        if self.bit(Bit::new(pin.number())) {
            Direction::Out
        } else {
            Direction::In
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Alternate function of a pin
///
/// Implemented only by the per-port function enums of this module.
pub trait PinFunction: Copy + sealed::Sealed {
    /// Pin the function is bonded to
    fn pin(self) -> Pin;
    /// Value of the pin's `GPCON` selector
    fn bits(self) -> u32;
}

/// Declares the alternate functions of one port
macro_rules! functions {
    (
        $(#[$attr:meta])*
        pub enum $Enum:ident {
            $($(#[$vattr:meta])* $Variant:ident = ($pin:ident, $con:literal),)+
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum $Enum {
            $($(#[$vattr])* $Variant,)+
        }

        impl sealed::Sealed for $Enum {}

        impl PinFunction for $Enum {
            #[inline]
            fn pin(self) -> Pin {
                match self {
                    $(Self::$Variant => Pin::$pin,)+
                }
            }

            #[inline]
            fn bits(self) -> u32 {
                match self {
                    $(Self::$Variant => $con,)+
                }
            }
        }
    };
}

functions! {
    /// Port 0 alternate functions
    pub enum Gp0Function {
        /// P0.0
        Spi1Miso = (P0, 1),
        /// P0.1
        Spi1Sclk = (P1, 1),
        /// P0.2
        Spi1Mosi = (P2, 1),
        /// P0.3
        Spi1Cs = (P3, 1),
        /// P0.4
        I2cScl = (P4, 1),
        /// P0.5
        I2cSda = (P5, 1),
    }
}

functions! {
    /// Port 1 alternate functions
    pub enum Gp1Function {
        /// P1.0, external clock input
        Eclkin = (P0, 1),
        /// P1.1
        UartRxd = (P1, 1),
        /// P1.2
        UartTxd = (P2, 1),
        /// P1.3
        Pwm0 = (P3, 1),
        /// P1.4
        Pwm1 = (P4, 1),
        /// P1.5
        Pwm2 = (P5, 1),
        /// P1.6
        Pwm3 = (P6, 1),
        /// P1.7
        PwmTrip = (P7, 1),
    }
}

functions! {
    /// Port 2 alternate functions
    ///
    /// Port 2 is bonded to the radio. The radio firmware expects its chip select on P2.3 to be
    /// driven as a GPIO output through `GPSET`/`GPCLR`, so `Spi0Cs` is only for other SPI0
    /// slaves.
    pub enum Gp2Function {
        /// P2.0, radio MISO
        Spi0Miso = (P0, 1),
        /// P2.1, radio SCLK
        Spi0Sclk = (P1, 1),
        /// P2.2, radio MOSI
        Spi0Mosi = (P2, 1),
        /// P2.3, SPI0 hardware chip select
        Spi0Cs = (P3, 1),
        /// P2.4, radio interrupt on external line IRQ8
        Irq8 = (P4, 1),
        /// P2.7, GPIO that also feeds external line IRQ7
        GpioIrq7 = (P7, 0),
    }
}

functions! {
    /// Port 3 alternate functions
    pub enum Gp3Function {
        /// P3.0
        Pwm4 = (P0, 1),
        /// P3.1
        Pwm5 = (P1, 1),
        /// P3.2
        Pwm6 = (P2, 1),
        /// P3.3
        Pwm7 = (P3, 1),
    }
}

functions! {
    /// Port 4 alternate functions
    pub enum Gp4Function {
        /// P4.0, clock output selected by `CLKCON.CLKOUT`
        Eclkout = (P0, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::test_util::{assert_disjoint, assert_within};
    use crate::Resettable;
    use core::mem::{offset_of, size_of};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(RegisterBlock, gpcon), 0x00);
        assert_eq!(offset_of!(RegisterBlock, gpoen), 0x04);
        assert_eq!(offset_of!(RegisterBlock, gppul), 0x08);
        assert_eq!(offset_of!(RegisterBlock, gpoce), 0x0C);
        assert_eq!(offset_of!(RegisterBlock, gpin), 0x14);
        assert_eq!(offset_of!(RegisterBlock, gpout), 0x18);
        assert_eq!(offset_of!(RegisterBlock, gpset), 0x1C);
        assert_eq!(offset_of!(RegisterBlock, gpclr), 0x20);
        assert_eq!(offset_of!(RegisterBlock, gptgl), 0x24);
        assert_eq!(size_of::<RegisterBlock>(), PORT_STRIDE);
    }

    #[test]
    fn reset_values() {
        assert_eq!(gppul::GPPULrs::RESET_VALUE, 0xFF);
        assert_eq!(gpoen::GPOENrs::RESET_VALUE, 0x00);
        assert_eq!(gpcon::GPCONrs::RESET_VALUE, 0x0000);
    }

    #[test]
    fn selectors_tile_gpcon() {
        let masks = gpcon::CON.map(|f| f.mask());
        assert_disjoint(&masks);
        assert_within(&masks, 16);
        assert_eq!(masks.iter().fold(0, |acc, m| acc | m), 0xFFFF);
        assert_eq!(gpcon::CON4.mask(), 0x0300);
    }

    #[test]
    fn functions_name_their_pin() {
        assert_eq!(Gp0Function::I2cSda.pin(), Pin::P5);
        assert_eq!(Gp1Function::PwmTrip.pin(), Pin::P7);
        assert_eq!(Gp2Function::Spi0Cs.pin(), Pin::P3);
        assert_eq!(Gp3Function::Pwm7.pin(), Pin::P3);
        assert_eq!(Gp4Function::Eclkout.bits(), 1);
    }

    #[test]
    fn radio_interrupt_pins() {
        assert_eq!(Gp2Function::Irq8.pin(), Pin::P4);
        assert_eq!(Gp2Function::Irq8.bits(), 1);
        assert_eq!(Gp2Function::GpioIrq7.pin(), Pin::P7);
        assert_eq!(Gp2Function::GpioIrq7.bits(), 0);

        let block: RegisterBlock = unsafe { core::mem::zeroed() };
        block.gpcon.write(|w| unsafe { w.bits(0xFFFF) });
        block.gpcon.modify(|_, w| w.function(Gp2Function::GpioIrq7));
        assert_eq!(block.gpcon.read().bits(), 0x3FFF);
        block.gpcon.reset();
        block.gpcon.modify(|_, w| w.function(Gp2Function::Irq8));
        assert_eq!(block.gpcon.read().bits(), 0x0100);
    }

    #[test]
    fn pin_numbers_are_checked() {
        assert_eq!(Pin::try_from(0), Ok(Pin::P0));
        assert_eq!(Pin::try_from(7), Ok(Pin::P7));
        assert_eq!(Pin::try_from(8), Err(InvalidPin(8)));
        assert_eq!(Pin::try_from(0xFF), Err(InvalidPin(0xFF)));
        for n in 0..8 {
            assert_eq!(Pin::try_from(n).map(Pin::number), Ok(n));
        }
    }

    #[test]
    fn gpio_only_touches_its_own_selector() {
        let block: RegisterBlock = unsafe { core::mem::zeroed() };
        block.gpcon.modify(|_, w| w.function(Gp2Function::Spi0Miso));
        for n in 1..8 {
            let pin = Pin::try_from(n).unwrap();
            block.gpcon.modify(|_, w| w.gpio(pin));
            assert_eq!(block.gpcon.read().field(gpcon::CON0), 1, "pin {}", n);
        }
        block.gpcon.modify(|_, w| w.gpio(Pin::P0));
        assert_eq!(block.gpcon.read().bits(), 0);
    }

    #[test]
    fn direction_per_pin() {
        let block: RegisterBlock = unsafe { core::mem::zeroed() };
        block.gpoen.modify(|_, w| {
            w.direction(Pin::P3, Direction::Out)
                .direction(Pin::P4, Direction::In)
        });
        assert_eq!(block.gpoen.read().bits(), 0x08);
        assert_eq!(block.gpoen.read().direction(Pin::P3), Direction::Out);
        assert_eq!(block.gpoen.read().direction(Pin::P7), Direction::In);
        block.gpoen.modify(|_, w| w.direction(Pin::P3, Direction::In));
        assert_eq!(block.gpoen.read().bits(), 0x00);
    }

    #[test]
    fn radio_port_in_ram() {
        let block: RegisterBlock = unsafe { core::mem::zeroed() };
        block.gppul.reset();
        block.gpcon.modify(|_, w| {
            w.function(Gp2Function::Spi0Miso)
                .function(Gp2Function::Spi0Sclk)
                .function(Gp2Function::Spi0Mosi)
                .gpio(Pin::P3)
                .function(Gp2Function::Irq8)
                .function(Gp2Function::GpioIrq7)
        });
        assert_eq!(block.gpcon.read().bits(), 0x0115);
        block.gpoen.modify(|_, w| {
            w.direction(Pin::P3, Direction::Out)
                .direction(Pin::P4, Direction::In)
        });
        block.gppul.modify(|_, w| w.clear_bit(gppul::P4));
        assert_eq!(block.gpoen.read().bits(), 0x08);
        assert_eq!(block.gppul.read().bits(), 0xEF);

        block.gpset.write(|w| w.set_bit(gpset::P3));
        assert_eq!(unsafe { *block.gpset.as_ptr() }, 0x08);
        block.gpclr.write(|w| w.set_bit(gpclr::P3));
        assert_eq!(unsafe { *block.gpclr.as_ptr() }, 0x08);
    }
}
