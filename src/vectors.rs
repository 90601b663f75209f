//! Device interrupts and vector table
//!
//! Numbering follows the NVIC: `Interrupt::WUT` is IRQ 0, the first vector after the sixteen
//! Cortex-M3 exceptions. With the `rt` feature the device part of the vector table is provided
//! here and every handler defaults to `DefaultHandler` through `device.x`.

/// Number of device interrupt vectors, including the reserved slot
pub const VECTORS: usize = 38;

/// Enumeration of all the interrupts
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Interrupt {
    /// 0 - Wake-up timer
    WUT = 0,
    /// 1 - External interrupt 0
    EINT0 = 1,
    /// 2 - External interrupt 1
    EINT1 = 2,
    /// 3 - External interrupt 2
    EINT2 = 3,
    /// 4 - External interrupt 3
    EINT3 = 4,
    /// 5 - External interrupt 4
    EINT4 = 5,
    /// 6 - External interrupt 5
    EINT5 = 6,
    /// 7 - External interrupt 6
    EINT6 = 7,
    /// 8 - External interrupt 7
    EINT7 = 8,
    /// 9 - Radio, external interrupt 8
    UHFTRX = 9,
    /// 10 - Watchdog timer
    WDT = 10,
    /// 11 - Timer0
    TIMER0 = 11,
    /// 12 - Timer1
    TIMER1 = 12,
    /// 13 - Flash controller
    FLASH = 13,
    /// 14 - UART
    UART = 14,
    /// 15 - SPI0
    SPI0 = 15,
    /// 16 - SPI1
    SPI1 = 16,
    /// 17 - I2C slave
    I2CS = 17,
    /// 18 - I2C master
    I2CM = 18,
    /// 19 - DMA bus error
    DMA_ERR = 19,
    /// 20 - DMA channel 0 done, SPI1 transmit
    DMA_SPI1_TX = 20,
    /// 21 - DMA channel 1 done, SPI1 receive
    DMA_SPI1_RX = 21,
    /// 22 - DMA channel 2 done, UART transmit
    DMA_UART_TX = 22,
    /// 23 - DMA channel 3 done, UART receive
    DMA_UART_RX = 23,
    /// 24 - DMA channel 4 done, I2C slave transmit
    DMA_I2CS_TX = 24,
    /// 25 - DMA channel 5 done, I2C slave receive
    DMA_I2CS_RX = 25,
    /// 26 - DMA channel 6 done, I2C master transmit
    DMA_I2CM_TX = 26,
    /// 27 - DMA channel 7 done, I2C master receive
    DMA_I2CM_RX = 27,
    /// 29 - DMA channel 9 done, ADC
    DMA_ADC = 29,
    /// 30 - DMA channel 10 done, SPI0 transmit
    DMA_SPI0_TX = 30,
    /// 31 - DMA channel 11 done, SPI0 receive
    DMA_SPI0_RX = 31,
    /// 32 - ADC
    ADC = 32,
    /// 33 - PWM trip
    PWMTRIP = 33,
    /// 34 - PWM pair 0
    PWM0 = 34,
    /// 35 - PWM pair 1
    PWM1 = 35,
    /// 36 - PWM pair 2
    PWM2 = 36,
    /// 37 - PWM pair 3
    PWM3 = 37,
}

unsafe impl cortex_m::interrupt::InterruptNumber for Interrupt {
    #[inline(always)]
    fn number(self) -> u16 {
        self as u16
    }
}

/// Error returned for numbers that name no interrupt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TryFromInterruptError(pub u16);

impl TryFrom<u16> for Interrupt {
    type Error = TryFromInterruptError;

    fn try_from(n: u16) -> Result<Self, Self::Error> {
        Ok(match n {
            0 => Self::WUT,
            1 => Self::EINT0,
            2 => Self::EINT1,
            3 => Self::EINT2,
            4 => Self::EINT3,
            5 => Self::EINT4,
            6 => Self::EINT5,
            7 => Self::EINT6,
            8 => Self::EINT7,
            9 => Self::UHFTRX,
            10 => Self::WDT,
            11 => Self::TIMER0,
            12 => Self::TIMER1,
            13 => Self::FLASH,
            14 => Self::UART,
            15 => Self::SPI0,
            16 => Self::SPI1,
            17 => Self::I2CS,
            18 => Self::I2CM,
            19 => Self::DMA_ERR,
            20 => Self::DMA_SPI1_TX,
            21 => Self::DMA_SPI1_RX,
            22 => Self::DMA_UART_TX,
            23 => Self::DMA_UART_RX,
            24 => Self::DMA_I2CS_TX,
            25 => Self::DMA_I2CS_RX,
            26 => Self::DMA_I2CM_TX,
            27 => Self::DMA_I2CM_RX,
            29 => Self::DMA_ADC,
            30 => Self::DMA_SPI0_TX,
            31 => Self::DMA_SPI0_RX,
            32 => Self::ADC,
            33 => Self::PWMTRIP,
            34 => Self::PWM0,
            35 => Self::PWM1,
            36 => Self::PWM2,
            37 => Self::PWM3,
            _ => return Err(TryFromInterruptError(n)),
        })
    }
}

impl Interrupt {
    /// Interrupt raised by external interrupt line `line`, IRQ0 to IRQ8
    pub const fn eint(line: u8) -> Option<Self> {
        Some(match line {
            0 => Self::EINT0,
            1 => Self::EINT1,
            2 => Self::EINT2,
            3 => Self::EINT3,
            4 => Self::EINT4,
            5 => Self::EINT5,
            6 => Self::EINT6,
            7 => Self::EINT7,
            8 => Self::UHFTRX,
            _ => return None,
        })
    }
}

#[cfg(feature = "rt")]
extern "C" {
    fn WUT();
    fn EINT0();
    fn EINT1();
    fn EINT2();
    fn EINT3();
    fn EINT4();
    fn EINT5();
    fn EINT6();
    fn EINT7();
    fn UHFTRX();
    fn WDT();
    fn TIMER0();
    fn TIMER1();
    fn FLASH();
    fn UART();
    fn SPI0();
    fn SPI1();
    fn I2CS();
    fn I2CM();
    fn DMA_ERR();
    fn DMA_SPI1_TX();
    fn DMA_SPI1_RX();
    fn DMA_UART_TX();
    fn DMA_UART_RX();
    fn DMA_I2CS_TX();
    fn DMA_I2CS_RX();
    fn DMA_I2CM_TX();
    fn DMA_I2CM_RX();
    fn DMA_ADC();
    fn DMA_SPI0_TX();
    fn DMA_SPI0_RX();
    fn ADC();
    fn PWMTRIP();
    fn PWM0();
    fn PWM1();
    fn PWM2();
    fn PWM3();
}

#[doc(hidden)]
#[cfg(feature = "rt")]
pub union Vector {
    _handler: unsafe extern "C" fn(),
    _reserved: u32,
}

#[cfg(feature = "rt")]
#[doc(hidden)]
#[link_section = ".vector_table.interrupts"]
#[no_mangle]
pub static __INTERRUPTS: [Vector; VECTORS] = [
    Vector { _handler: WUT },
    Vector { _handler: EINT0 },
    Vector { _handler: EINT1 },
    Vector { _handler: EINT2 },
    Vector { _handler: EINT3 },
    Vector { _handler: EINT4 },
    Vector { _handler: EINT5 },
    Vector { _handler: EINT6 },
    Vector { _handler: EINT7 },
    Vector { _handler: UHFTRX },
    Vector { _handler: WDT },
    Vector { _handler: TIMER0 },
    Vector { _handler: TIMER1 },
    Vector { _handler: FLASH },
    Vector { _handler: UART },
    Vector { _handler: SPI0 },
    Vector { _handler: SPI1 },
    Vector { _handler: I2CS },
    Vector { _handler: I2CM },
    Vector { _handler: DMA_ERR },
    Vector { _handler: DMA_SPI1_TX },
    Vector { _handler: DMA_SPI1_RX },
    Vector { _handler: DMA_UART_TX },
    Vector { _handler: DMA_UART_RX },
    Vector { _handler: DMA_I2CS_TX },
    Vector { _handler: DMA_I2CS_RX },
    Vector { _handler: DMA_I2CM_TX },
    Vector { _handler: DMA_I2CM_RX },
    Vector { _reserved: 0 },
    Vector { _handler: DMA_ADC },
    Vector { _handler: DMA_SPI0_TX },
    Vector { _handler: DMA_SPI0_RX },
    Vector { _handler: ADC },
    Vector { _handler: PWMTRIP },
    Vector { _handler: PWM0 },
    Vector { _handler: PWM1 },
    Vector { _handler: PWM2 },
    Vector { _handler: PWM3 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use cortex_m::interrupt::InterruptNumber;

    #[test]
    fn numbers_round_trip_through_try_from() {
        let mut named = 0;
        for n in 0..VECTORS as u16 {
            match Interrupt::try_from(n) {
                Ok(irq) => {
                    assert_eq!(irq.number(), n);
                    named += 1;
                }
                Err(e) => assert_eq!(e, TryFromInterruptError(28)),
            }
        }
        assert_eq!(named, VECTORS - 1);
        assert_eq!(
            Interrupt::try_from(VECTORS as u16),
            Err(TryFromInterruptError(38))
        );
    }

    #[test]
    fn external_lines() {
        assert_eq!(Interrupt::eint(0), Some(Interrupt::EINT0));
        assert_eq!(Interrupt::eint(7), Some(Interrupt::EINT7));
        assert_eq!(Interrupt::eint(8), Some(Interrupt::UHFTRX));
        assert_eq!(Interrupt::eint(9), None);
        for line in 0..=8u8 {
            assert_eq!(Interrupt::eint(line).map(|i| i as u16), Some(u16::from(line) + 1));
        }
    }

    #[test]
    fn dma_done_interrupts_follow_channel_number() {
        assert_eq!(Interrupt::DMA_SPI1_TX as u16, 20);
        assert_eq!(Interrupt::DMA_I2CM_RX as u16, 20 + 7);
        assert_eq!(Interrupt::DMA_ADC as u16, 20 + 9);
        assert_eq!(Interrupt::DMA_SPI0_RX as u16, 20 + 11);
    }
}
